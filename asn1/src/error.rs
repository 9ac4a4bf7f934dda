use der::Tag;
use thiserror::Error;

/// Errors that can occur when interpreting DER elements as ASN.1 values.
#[derive(Debug, Error)]
pub enum Error {
    /// The element's tag does not match the value type being decoded
    #[error("unexpected tag: expected {expected}, found {found:?}")]
    UnexpectedTag { expected: &'static str, found: Tag },

    /// INTEGER element with no content octets
    #[error("Integer tag has no data")]
    IntegerNoData,

    /// OBJECT IDENTIFIER element with no content octets
    #[error("ObjectIdentifier cannot be empty")]
    ObjectIdentifierNoData,

    /// The last arc of an OBJECT IDENTIFIER ends with its continuation bit set
    #[error("incomplete encoding in ObjectIdentifier")]
    ObjectIdentifierIncompleteEncoding,

    /// An arc starts with 0x80, encoding leading zero bits
    #[error("non-minimal arc encoding in ObjectIdentifier")]
    ObjectIdentifierNonMinimalArc,

    /// An arc spans more octets than a 64-bit value can represent
    #[error("ObjectIdentifier arc out of range")]
    ObjectIdentifierArcOutOfRange,

    /// A dotted-string component is not a valid number
    #[error("invalid ObjectIdentifier component: {0}")]
    ObjectIdentifierInvalidComponent(#[from] std::num::ParseIntError),

    /// BIT STRING element with no content octets (the unused-bits octet is mandatory)
    #[error("BitString cannot be empty")]
    BitStringNoData,

    /// The unused-bits count of a BIT STRING must be 0..=7
    #[error("BitString unused bits out of range: {0}")]
    BitStringUnusedBitsOutOfRange(u8),
}
