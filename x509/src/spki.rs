use asn1::{BitString, Integer};
use der::{Der, Tag, Tlv};
use keys::{ECPublicKey, NamedCurve, RSAPublicKey};
use tsugite::decoder::Decoder;

use crate::error::{Error, Result};
use crate::single_element;

const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

// Unwraps the subjectPublicKey BIT STRING. Key material is always a whole
// number of octets, so a nonzero unused-bits count is rejected.
fn subject_public_key(spki: &Tlv) -> Result<Vec<u8>> {
    let bit_string: BitString = spki.child(1)?.decode()?;
    if bit_string.unused_bits() != 0 {
        return Err(Error::InvalidBitStringEncoding(bit_string.unused_bits()));
    }
    Ok(bit_string.into_bytes())
}

/*
ref: https://datatracker.ietf.org/doc/html/rfc8017#appendix-A.1.1

RSAPublicKey ::= SEQUENCE {
    modulus           INTEGER,  -- n
    publicExponent    INTEGER   -- e
}
*/
pub(crate) fn decode_rsa_public_key(spki: &Tlv) -> Result<RSAPublicKey> {
    let key_bytes = subject_public_key(spki)?;
    let der: Der = key_bytes.as_slice().decode()?;
    let sequence = single_element(&der)?;
    if sequence.tag() != Tag::Sequence {
        return Err(Error::InvalidStructure(
            "RSAPublicKey must be a SEQUENCE".to_string(),
        ));
    }
    let modulus: Integer = sequence.child(0)?.decode()?;
    let public_exponent: Integer = sequence.child(1)?.decode()?;
    let modulus = modulus
        .to_biguint()
        .ok_or_else(|| Error::InvalidStructure("RSA modulus must be positive".to_string()))?;
    let public_exponent = public_exponent.to_biguint().ok_or_else(|| {
        Error::InvalidStructure("RSA public exponent must be positive".to_string())
    })?;
    Ok(RSAPublicKey::new(modulus, public_exponent))
}

/*
ref: https://datatracker.ietf.org/doc/html/rfc5480#section-2.2

The EC public key is an ECPoint in uncompressed form:
    0x04 || X || Y
with X and Y as fixed-width big-endian field elements.
*/
pub(crate) fn decode_ec_public_key(spki: &Tlv, curve: NamedCurve) -> Result<ECPublicKey> {
    let key_bytes = subject_public_key(spki)?;
    let Some((&form, point)) = key_bytes.split_first() else {
        return Err(Error::UnexpectedPublicKeyEncoding(
            "empty EC point".to_string(),
        ));
    };
    if form != UNCOMPRESSED_POINT_TAG {
        return Err(Error::UnexpectedPublicKeyEncoding(format!(
            "expected uncompressed point (0x04), got 0x{:02x}",
            form
        )));
    }
    let width = curve.field_byte_length();
    if point.len() != 2 * width {
        return Err(Error::UnexpectedPublicKeyEncoding(format!(
            "expected {} point bytes for {}, got {}",
            2 * width,
            curve,
            point.len()
        )));
    }
    let (x, y) = point.split_at(width);
    Ok(ECPublicKey::from_coordinates(
        curve,
        x.to_vec(),
        y.to_vec(),
    )?)
}
