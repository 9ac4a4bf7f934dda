use std::fmt::{Display, Formatter};

use asn1::ObjectIdentifier;
use der::Tlv;
use keys::{NamedCurve, PublicKey};
use tsugite::decoder::Decoder;

use crate::error::{Error, Result};
use crate::spki;

/*
ref: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1

SubjectPublicKeyInfo ::= SEQUENCE {
    algorithm            AlgorithmIdentifier,
    subjectPublicKey     BIT STRING }

AlgorithmIdentifier ::= SEQUENCE {
    algorithm               OBJECT IDENTIFIER,
    parameters              ANY DEFINED BY algorithm OPTIONAL }
*/

pub const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
pub const OID_RSASSA_PSS: &str = "1.2.840.113549.1.1.10";
pub const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";

/// Public key algorithm declared by a certificate's subjectPublicKeyInfo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    /// rsaEncryption (RFC 8017)
    RsaPkcs1,
    /// id-RSASSA-PSS (RFC 8017)
    RsaPss,
    /// id-ecPublicKey (RFC 5480)
    Ecdsa,
}

impl Display for KeyAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyAlgorithm::RsaPkcs1 => write!(f, "rsa"),
            KeyAlgorithm::RsaPss => write!(f, "rsa-pss"),
            KeyAlgorithm::Ecdsa => write!(f, "ecdsa"),
        }
    }
}

/// Resolves the algorithm OID of a subjectPublicKeyInfo element and
/// extracts the key material it carries.
pub(crate) fn resolve(spki: &Tlv) -> Result<(KeyAlgorithm, PublicKey)> {
    let algorithm_identifier = spki.child(0)?;
    let oid: ObjectIdentifier = algorithm_identifier.child(0)?.decode()?;

    if oid == OID_RSA_ENCRYPTION {
        validate_rsa_parameters(algorithm_identifier)?;
        let key = spki::decode_rsa_public_key(spki)?;
        Ok((KeyAlgorithm::RsaPkcs1, PublicKey::Rsa(key)))
    } else if oid == OID_RSASSA_PSS {
        // RSASSA-PSS parameters constrain how the key may be used for
        // signing. The key material itself is plain RSA, so they are not
        // inspected here.
        let key = spki::decode_rsa_public_key(spki)?;
        Ok((KeyAlgorithm::RsaPss, PublicKey::Rsa(key)))
    } else if oid == OID_EC_PUBLIC_KEY {
        let curve = resolve_curve(algorithm_identifier)?;
        let key = spki::decode_ec_public_key(spki, curve)?;
        Ok((KeyAlgorithm::Ecdsa, PublicKey::Ec(key)))
    } else {
        Err(Error::UnrecognizedAlgorithm(oid))
    }
}

// rsaEncryption parameters must be present and empty (a NULL in practice,
// but only the content octets are compared, whatever the tag).
fn validate_rsa_parameters(algorithm_identifier: &Tlv) -> Result<()> {
    if algorithm_identifier.child_count() != 2 {
        return Err(Error::InvalidAlgorithmParameters(
            "rsaEncryption parameters are missing".to_string(),
        ));
    }
    let parameters = algorithm_identifier.child(1)?;
    let empty = match parameters.data() {
        Some(data) => data.is_empty(),
        // constructed with no children, e.g. an empty SEQUENCE
        None => parameters.child_count() == 0,
    };
    if empty {
        Ok(())
    } else {
        Err(Error::InvalidAlgorithmParameters(
            "rsaEncryption parameters must be empty".to_string(),
        ))
    }
}

/*
ref: https://datatracker.ietf.org/doc/html/rfc5480#section-2.1.1

ECParameters ::= CHOICE {
    namedCurve         OBJECT IDENTIFIER
    -- implicitCurve and specifiedCurve are not accepted }
*/
fn resolve_curve(algorithm_identifier: &Tlv) -> Result<NamedCurve> {
    if algorithm_identifier.child_count() != 2 {
        return Err(Error::InvalidAlgorithmParameters(
            "id-ecPublicKey requires a namedCurve parameter".to_string(),
        ));
    }
    let oid: ObjectIdentifier = algorithm_identifier.child(1)?.decode()?;
    if oid == NamedCurve::OID_SECP256R1 {
        Ok(NamedCurve::Secp256r1)
    } else if oid == NamedCurve::OID_SECP384R1 {
        Ok(NamedCurve::Secp384r1)
    } else if oid == NamedCurve::OID_SECP521R1 {
        Ok(NamedCurve::Secp521r1)
    } else {
        Err(Error::UnknownCurve(oid))
    }
}
