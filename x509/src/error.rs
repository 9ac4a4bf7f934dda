use asn1::ObjectIdentifier;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("pem: {0}")]
    Pem(#[from] pem::Error),

    #[error("der: {0}")]
    Der(#[from] der::Error),

    #[error("asn1: {0}")]
    Asn1(#[from] asn1::Error),

    #[error("key: {0}")]
    Key(#[from] keys::Error),

    /// The PEM block carries a label other than CERTIFICATE
    #[error("unexpected PEM label: {0}")]
    UnexpectedPemLabel(pem::Label),

    /// The subjectPublicKeyInfo algorithm OID is not one of the supported ones
    #[error("unrecognized public key algorithm: {0}")]
    UnrecognizedAlgorithm(ObjectIdentifier),

    /// Algorithm parameters are missing or malformed for the declared algorithm
    #[error("invalid algorithm parameters: {0}")]
    InvalidAlgorithmParameters(String),

    /// The namedCurve OID is not one of the supported curves
    #[error("unknown named curve: {0}")]
    UnknownCurve(ObjectIdentifier),

    /// A subjectPublicKey BIT STRING must be a whole number of octets
    #[error("invalid BIT STRING encoding: {0} unused bits")]
    InvalidBitStringEncoding(u8),

    /// The key material inside the BIT STRING has an unexpected shape
    #[error("unexpected public key encoding: {0}")]
    UnexpectedPublicKeyEncoding(String),

    /// The certificate does not have the expected outer structure
    #[error("invalid certificate structure: {0}")]
    InvalidStructure(String),
}
