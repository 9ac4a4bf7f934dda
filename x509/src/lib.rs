//! X.509 certificate decoding.
//!
//! [`Certificate`] parses a DER or PEM certificate just far enough to expose
//! the subject name (as a verbatim DER sub-encoding), the public key
//! algorithm, and the key material itself. Signature verification and
//! validity checking are out of scope.

pub mod algorithm;
pub mod error;
mod spki;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use der::{Der, Tag, Tlv};
use pem::{Label, Pem, ToPem};
use sha1::{Digest, Sha1};
use tsugite::decoder::{DecodableFrom, Decoder};
use tsugite::encoder::{EncodableTo, Encoder};

pub use algorithm::KeyAlgorithm;
pub use keys::{ECPublicKey, NamedCurve, PublicKey, RSAPublicKey};

use error::{Error, Result};

/*
ref: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1

Certificate ::= SEQUENCE {
    tbsCertificate       TBSCertificate,
    signatureAlgorithm   AlgorithmIdentifier,
    signatureValue       BIT STRING }

TBSCertificate ::= SEQUENCE {
    version         [0]  EXPLICIT Version DEFAULT v1,
    serialNumber         CertificateSerialNumber,
    signature            AlgorithmIdentifier,
    issuer               Name,
    validity             Validity,
    subject              Name,
    subjectPublicKeyInfo SubjectPublicKeyInfo,
    ... }
*/

/// A parsed X.509 certificate.
///
/// Construction either succeeds with every accessor usable, or fails and
/// yields nothing. The original encoding is retained for serialization and
/// fingerprinting.
#[derive(Debug, Clone)]
pub struct Certificate {
    raw: Vec<u8>,
    subject: Vec<u8>,
    algorithm: KeyAlgorithm,
    public_key: PublicKey,
}

/// Child positions within TBSCertificate. The [0] version field is
/// optional, shifting everything after it by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TbsLayout {
    VersionAbsent,
    VersionPresent,
}

impl TbsLayout {
    fn detect(tbs: &Tlv) -> Result<Self> {
        let first = tbs.child(0)?;
        match first.tag() {
            Tag::ContextSpecific {
                slot: 0,
                constructed: true,
            } => Ok(TbsLayout::VersionPresent),
            _ => Ok(TbsLayout::VersionAbsent),
        }
    }

    const fn subject_index(&self) -> usize {
        match self {
            TbsLayout::VersionAbsent => 4,
            TbsLayout::VersionPresent => 5,
        }
    }

    const fn subject_public_key_info_index(&self) -> usize {
        match self {
            TbsLayout::VersionAbsent => 5,
            TbsLayout::VersionPresent => 6,
        }
    }
}

pub(crate) fn single_element(der: &Der) -> Result<&Tlv> {
    match der.tlvs() {
        [tlv] => Ok(tlv),
        tlvs => Err(Error::InvalidStructure(format!(
            "expected a single top-level element, got {}",
            tlvs.len()
        ))),
    }
}

impl Certificate {
    /// Parses a single PEM-armored certificate.
    pub fn parse_pem(s: &str) -> Result<Self> {
        let pem = Pem::from_str(s)?;
        pem.decode()
    }

    /// Parses a DER-encoded certificate.
    pub fn parse_der(bytes: &[u8]) -> Result<Self> {
        let der: Der = bytes.decode()?;
        let root = single_element(&der)?;
        if root.tag() != Tag::Sequence {
            return Err(Error::InvalidStructure(
                "certificate must be a SEQUENCE".to_string(),
            ));
        }
        let tbs = root.child(0)?;
        if tbs.tag() != Tag::Sequence {
            return Err(Error::InvalidStructure(
                "tbsCertificate must be a SEQUENCE".to_string(),
            ));
        }
        let layout = TbsLayout::detect(tbs)?;
        let subject = tbs.child(layout.subject_index())?;
        if subject.tag() != Tag::Sequence {
            return Err(Error::InvalidStructure(
                "subject must be a SEQUENCE".to_string(),
            ));
        }
        let spki = tbs.child(layout.subject_public_key_info_index())?;
        let (algorithm, public_key) = algorithm::resolve(spki)?;

        Ok(Certificate {
            raw: bytes.to_vec(),
            subject: subject.raw().to_vec(),
            algorithm,
            public_key,
        })
    }

    /// The subject distinguished name as its verbatim DER sub-encoding.
    pub fn subject(&self) -> &[u8] {
        &self.subject
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Key size in bits of the subject public key.
    pub fn key_size(&self) -> u64 {
        self.public_key.key_size()
    }

    /// The certificate's original DER encoding.
    pub fn to_der(&self) -> Vec<u8> {
        self.raw.clone()
    }

    /// Lowercase hex SHA-1 digest of the DER encoding.
    pub fn fingerprint(&self) -> String {
        Sha1::digest(&self.raw)
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}

impl FromStr for Certificate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Certificate::parse_pem(s)
    }
}

impl Display for Certificate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Certificate({}, {} bits, sha1: {})",
            self.algorithm,
            self.key_size(),
            self.fingerprint()
        )
    }
}

impl DecodableFrom<Pem> for Certificate {}

impl Decoder<Pem, Certificate> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<Certificate> {
        if self.label() != Label::Certificate {
            return Err(Error::UnexpectedPemLabel(self.label()));
        }
        let bytes: Vec<u8> = Decoder::<Pem, Vec<u8>>::decode(self)?;
        Certificate::parse_der(&bytes)
    }
}

impl EncodableTo<Certificate> for Vec<u8> {}

impl Encoder<Certificate, Vec<u8>> for Certificate {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.to_der())
    }
}

impl ToPem for Certificate {
    type Error = Error;

    fn pem_label(&self) -> Label {
        Label::Certificate
    }

    fn to_pem(&self) -> Result<Pem> {
        Ok(Pem::from_bytes(self.pem_label(), &self.raw))
    }
}
