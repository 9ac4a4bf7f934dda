use std::{fmt::Display, str::FromStr};

use der::{Tag, Tlv};
use num_bigint::{BigInt, BigUint};
use tsugite::decoder::{DecodableFrom, Decoder};

pub mod error;

pub use error::Error;

// ASN.1 INTEGER is a signed value of arbitrary size.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Integer {
    inner: BigInt,
}

impl Integer {
    /// Returns a reference to the inner BigInt
    pub fn as_bigint(&self) -> &BigInt {
        &self.inner
    }

    /// Converts to an unsigned value. `None` if the value is negative.
    pub fn to_biguint(&self) -> Option<BigUint> {
        self.inner.to_biguint()
    }
}

impl From<&[u8]> for Integer {
    fn from(value: &[u8]) -> Self {
        Integer {
            inner: BigInt::from_signed_bytes_be(value),
        }
    }
}

impl From<Vec<u8>> for Integer {
    fn from(value: Vec<u8>) -> Self {
        Integer {
            inner: BigInt::from_signed_bytes_be(&value),
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl DecodableFrom<Tlv> for Integer {}

impl Decoder<Tlv, Integer> for Tlv {
    type Error = Error;

    fn decode(&self) -> Result<Integer, Error> {
        if self.tag() != Tag::Integer {
            return Err(Error::UnexpectedTag {
                expected: "INTEGER",
                found: self.tag(),
            });
        }
        let data = self.data().ok_or(Error::IntegerNoData)?;
        if data.is_empty() {
            return Err(Error::IntegerNoData);
        }
        Ok(Integer::from(data))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdentifier {
    inner: Vec<u64>,
}

impl TryFrom<Vec<u8>> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<&[u8]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(Error::ObjectIdentifierNoData);
        }

        let mut values = Vec::new();
        // The first octet packs the first two arcs as first * 40 + second.
        let first = value[0] as u64;
        values.push(first / 40);
        values.push(first % 40);

        let mut val = 0u64;
        let mut arc_octets = 0usize;
        for v in value[1..].iter() {
            if arc_octets == 0 && *v == 0x80 {
                // A leading 0x80 octet encodes nothing but zero bits.
                return Err(Error::ObjectIdentifierNonMinimalArc);
            }
            arc_octets += 1;
            if arc_octets > 9 {
                // 9 base-128 octets hold 63 bits; a tenth would overflow
                // the u64 accumulator.
                return Err(Error::ObjectIdentifierArcOutOfRange);
            }
            val = (val << 7) | (*v as u64 & 0x7f);
            if *v & 0x80 == 0 {
                values.push(val);
                val = 0;
                arc_octets = 0;
            }
        }
        if arc_octets != 0 {
            // The last octet still had its continuation bit set.
            return Err(Error::ObjectIdentifierIncompleteEncoding);
        }

        Ok(ObjectIdentifier { inner: values })
    }
}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self.inner.first() {
            Some(n) => self.inner[1..]
                .iter()
                .fold(n.to_string(), |s, n| s + "." + &n.to_string()),
            None => String::new(),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(".")
            .map(|s| s.parse::<u64>().map_err(Error::from))
            .collect::<Result<Vec<u64>, Error>>()?;
        Ok(ObjectIdentifier { inner: values })
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.inner
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".")
            == *other
    }
}

impl PartialEq<ObjectIdentifier> for &str {
    fn eq(&self, other: &ObjectIdentifier) -> bool {
        other == self
    }
}

impl DecodableFrom<Tlv> for ObjectIdentifier {}

impl Decoder<Tlv, ObjectIdentifier> for Tlv {
    type Error = Error;

    fn decode(&self) -> Result<ObjectIdentifier, Error> {
        if self.tag() != Tag::ObjectIdentifier {
            return Err(Error::UnexpectedTag {
                expected: "OBJECT IDENTIFIER",
                found: self.tag(),
            });
        }
        let data = self.data().ok_or(Error::ObjectIdentifierNoData)?;
        ObjectIdentifier::try_from(data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    unused: u8,
    data: Vec<u8>,
}

impl BitString {
    /// Creates a new BitString with the specified number of unused bits and data
    pub fn new(unused: u8, data: Vec<u8>) -> Self {
        BitString { unused, data }
    }

    /// Returns the number of unused bits in the last byte
    pub fn unused_bits(&self) -> u8 {
        self.unused
    }

    /// Returns a reference to the underlying byte data
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the BitString and returns the underlying byte data
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the total number of bits (excluding unused bits)
    pub fn bit_len(&self) -> usize {
        if self.data.is_empty() {
            0
        } else {
            self.data.len() * 8 - self.unused as usize
        }
    }
}

impl AsRef<[u8]> for BitString {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl TryFrom<&[u8]> for BitString {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match value.first() {
            Some(&unused) => {
                if unused > 7 {
                    return Err(Error::BitStringUnusedBitsOutOfRange(unused));
                }
                Ok(BitString {
                    unused,
                    data: value[1..].to_vec(),
                })
            }
            None => Err(Error::BitStringNoData),
        }
    }
}

impl TryFrom<Vec<u8>> for BitString {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl DecodableFrom<Tlv> for BitString {}

impl Decoder<Tlv, BitString> for Tlv {
    type Error = Error;

    fn decode(&self) -> Result<BitString, Error> {
        if self.tag() != Tag::BitString {
            return Err(Error::UnexpectedTag {
                expected: "BIT STRING",
                found: self.tag(),
            });
        }
        let data = self.data().ok_or(Error::BitStringNoData)?;
        BitString::try_from(data)
    }
}
