use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// Well-known elliptic curves defined in [RFC 5480 Section 2.1.1.1](https://datatracker.ietf.org/doc/html/rfc5480#section-2.1.1.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    /// secp256r1 (also known as prime256v1 or P-256)
    /// OID: 1.2.840.10045.3.1.7
    Secp256r1,
    /// secp384r1 (also known as P-384)
    /// OID: 1.3.132.0.34
    Secp384r1,
    /// secp521r1 (also known as P-521)
    /// OID: 1.3.132.0.35
    Secp521r1,
}

impl NamedCurve {
    // Elliptic curve OID constants (RFC 5480 Section 2.1.1.1)
    pub const OID_SECP256R1: &'static str = "1.2.840.10045.3.1.7";
    pub const OID_SECP384R1: &'static str = "1.3.132.0.34";
    pub const OID_SECP521R1: &'static str = "1.3.132.0.35";

    /// Get the OID string for this named curve.
    ///
    /// Returns the dotted-decimal OID string (e.g., "1.2.840.10045.3.1.7" for secp256r1).
    pub const fn oid_str(&self) -> &'static str {
        match self {
            Self::Secp256r1 => Self::OID_SECP256R1,
            Self::Secp384r1 => Self::OID_SECP384R1,
            Self::Secp521r1 => Self::OID_SECP521R1,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Secp256r1 => "secp256r1",
            Self::Secp384r1 => "secp384r1",
            Self::Secp521r1 => "secp521r1",
        }
    }

    /// Width of a field element in bytes. The P-521 field does not fill
    /// its last byte, so this rounds up.
    pub const fn field_byte_length(&self) -> usize {
        match self {
            Self::Secp256r1 => 32,
            Self::Secp384r1 => 48,
            Self::Secp521r1 => 66,
        }
    }

    /// Key size in bits, i.e. the order of the base field.
    pub const fn key_size(&self) -> u64 {
        match self {
            Self::Secp256r1 => 256,
            Self::Secp384r1 => 384,
            Self::Secp521r1 => 521,
        }
    }
}

impl Display for NamedCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// EC public key material: a point on a named curve, held as fixed-width
/// big-endian affine coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ECPublicKey {
    curve: NamedCurve,
    x: Vec<u8>,
    y: Vec<u8>,
}

impl ECPublicKey {
    /// Builds a key from affine coordinates. Each coordinate must be exactly
    /// the curve's field width; no on-curve check is performed here.
    pub fn from_coordinates(curve: NamedCurve, x: Vec<u8>, y: Vec<u8>) -> Result<Self> {
        let expected = curve.field_byte_length();
        if x.len() != expected {
            return Err(Error::InvalidCoordinateLength {
                curve: curve.name(),
                coordinate: "x",
                expected,
                actual: x.len(),
            });
        }
        if y.len() != expected {
            return Err(Error::InvalidCoordinateLength {
                curve: curve.name(),
                coordinate: "y",
                expected,
                actual: y.len(),
            });
        }
        Ok(ECPublicKey { curve, x, y })
    }

    pub fn curve(&self) -> NamedCurve {
        self.curve
    }

    pub fn x(&self) -> &[u8] {
        &self.x
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }

    pub fn key_size(&self) -> u64 {
        self.curve.key_size()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ECPublicKey, NamedCurve};
    use crate::error::Error;

    #[rstest(curve, expected_field, expected_bits,
        case(NamedCurve::Secp256r1, 32, 256),
        case(NamedCurve::Secp384r1, 48, 384),
        case(NamedCurve::Secp521r1, 66, 521),
    )]
    fn test_curve_parameters(curve: NamedCurve, expected_field: usize, expected_bits: u64) {
        assert_eq!(expected_field, curve.field_byte_length());
        assert_eq!(expected_bits, curve.key_size());
    }

    #[rstest(curve,
        case(NamedCurve::Secp256r1),
        case(NamedCurve::Secp384r1),
        case(NamedCurve::Secp521r1),
    )]
    fn test_from_coordinates(curve: NamedCurve) {
        let width = curve.field_byte_length();
        let key = ECPublicKey::from_coordinates(curve, vec![0x11; width], vec![0x22; width])
            .unwrap();
        assert_eq!(curve, key.curve());
        assert_eq!(width, key.x().len());
        assert_eq!(width, key.y().len());
    }

    #[test]
    fn test_from_coordinates_wrong_length() {
        let result =
            ECPublicKey::from_coordinates(NamedCurve::Secp256r1, vec![0x11; 31], vec![0x22; 32]);
        assert_eq!(
            Err(Error::InvalidCoordinateLength {
                curve: "secp256r1",
                coordinate: "x",
                expected: 32,
                actual: 31,
            }),
            result
        );

        let result =
            ECPublicKey::from_coordinates(NamedCurve::Secp521r1, vec![0x11; 66], vec![0x22; 65]);
        assert!(matches!(
            result,
            Err(Error::InvalidCoordinateLength {
                coordinate: "y",
                expected: 66,
                actual: 65,
                ..
            })
        ));
    }
}
