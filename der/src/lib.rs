use nom::{IResult, Parser};
use tsugite::decoder::{DecodableFrom, Decoder};

pub mod error;

pub use error::Error;

/// Constructed bit of a DER tag octet.
pub const TAG_CONSTRUCTED: u8 = 0x20;

const TAG_CLASS_MASK: u8 = 0xc0;
const TAG_CLASS_CONTEXT_SPECIFIC: u8 = 0x80;
const TAG_NUMBER_MASK: u8 = 0x1f;

/// Decoded top-level DER content: a list of TLV trees.
///
/// Most encodings (a certificate, a public key) consist of a single
/// top-level SEQUENCE, but DER itself allows concatenated elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Der {
    tlvs: Vec<Tlv>,
}

impl Der {
    pub fn tlvs(&self) -> &[Tlv] {
        &self.tlvs
    }
}

impl DecodableFrom<&[u8]> for Der {}

impl Decoder<&[u8], Der> for &[u8] {
    type Error = Error;

    fn decode(&self) -> Result<Der, Error> {
        if self.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut tlvs = Vec::new();
        let mut rest: &[u8] = self;
        while !rest.is_empty() {
            let (next, tlv) = Tlv::parse(rest).map_err(Error::from_nom)?;
            rest = next;
            tlvs.push(tlv);
        }
        Ok(Der { tlvs })
    }
}

impl DecodableFrom<Vec<u8>> for Der {}

impl Decoder<Vec<u8>, Der> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Der, Error> {
        self.as_slice().decode()
    }
}

/// DER tag, restricted to the universal types that occur in certificates
/// plus context-specific tags. Anything else lands in `Unimplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    UTF8String,
    Sequence,
    Set,
    PrintableString,
    IA5String,
    UTCTime,
    GeneralizedTime,
    ContextSpecific { slot: u8, constructed: bool },
    Unimplemented(u8),
}

impl From<u8> for Tag {
    fn from(value: u8) -> Self {
        if value & TAG_CLASS_MASK == TAG_CLASS_CONTEXT_SPECIFIC {
            return Tag::ContextSpecific {
                slot: value & TAG_NUMBER_MASK,
                constructed: value & TAG_CONSTRUCTED != 0,
            };
        }
        match value {
            0x01 => Self::Boolean,
            0x02 => Self::Integer,
            0x03 => Self::BitString,
            0x04 => Self::OctetString,
            0x05 => Self::Null,
            0x06 => Self::ObjectIdentifier,
            0x0c => Self::UTF8String,
            0x13 => Self::PrintableString,
            0x16 => Self::IA5String,
            0x17 => Self::UTCTime,
            0x18 => Self::GeneralizedTime,
            0x30 => Self::Sequence,
            0x31 => Self::Set,
            _ => Tag::Unimplemented(value),
        }
    }
}

impl Tag {
    /// Does the value of this element contain nested TLVs?
    pub fn is_constructed(&self) -> bool {
        match self {
            Tag::Sequence | Tag::Set => true,
            Tag::ContextSpecific { constructed, .. } => *constructed,
            _ => false,
        }
    }
}

/// One node of the DER tree.
///
/// Every node keeps the exact bytes it was parsed from (`raw`), so callers
/// can extract a verbatim sub-encoding without re-serializing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    tag: Tag,
    raw: Vec<u8>,
    value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Constructed(Vec<Tlv>),
    Primitive(Vec<u8>),
}

impl Tlv {
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The complete encoding of this node: tag, length and value octets,
    /// exactly as read from the input.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Value octets of a primitive node. `None` for constructed nodes.
    pub fn data(&self) -> Option<&[u8]> {
        match &self.value {
            Value::Primitive(data) => Some(data),
            Value::Constructed(_) => None,
        }
    }

    /// Immediate children of a constructed node. `None` for primitives.
    pub fn children(&self) -> Option<&[Tlv]> {
        match &self.value {
            Value::Constructed(tlvs) => Some(tlvs),
            Value::Primitive(_) => None,
        }
    }

    pub fn child_count(&self) -> usize {
        self.children().map_or(0, <[Tlv]>::len)
    }

    /// The Nth immediate child (0-indexed).
    pub fn child(&self, index: usize) -> Result<&Tlv, Error> {
        let children = self.children().ok_or(Error::NotConstructed)?;
        children.get(index).ok_or(Error::ChildIndexOutOfRange {
            index,
            count: children.len(),
        })
    }

    fn parse(input: &[u8]) -> IResult<&[u8], Tlv> {
        let start = input;
        let (input, tag) = parse_tag(input)?;
        let (input, length) = parse_length(input)?;
        let (input, data) = nom::bytes::complete::take(length).parse(input)?;
        let raw = start[..start.len() - input.len()].to_vec();

        if tag.is_constructed() {
            // parse TLV recursively.
            let mut tlvs = Vec::new();
            let mut data = data;
            while !data.is_empty() {
                let (next, v) = Self::parse(data)?;
                data = next;
                tlvs.push(v);
            }

            return Ok((
                input,
                Tlv {
                    tag,
                    raw,
                    value: Value::Constructed(tlvs),
                },
            ));
        }

        Ok((
            input,
            Tlv {
                tag,
                raw,
                value: Value::Primitive(data.to_vec()),
            },
        ))
    }
}

fn parse_tag(input: &[u8]) -> IResult<&[u8], Tag> {
    let (input, n) = nom::number::be_u8().parse(input)?;
    Ok((input, Tag::from(n)))
}

fn parse_length(input: &[u8]) -> IResult<&[u8], u64> {
    let (input, n) = nom::number::be_u8().parse(input)?;
    if n == 0x80 {
        // Indefinite length is invalid in DER.
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::LengthValue,
        )));
    }
    if n & 0x80 == 0x80 {
        // long form
        // First 1 bit is a marker for long form.
        // Other bits represent bytes length of the length field.
        let count = n & 0x7f;
        if count > 8 {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::LengthValue,
            )));
        }
        let (input, bs) = nom::bytes::complete::take(count).parse(input)?;
        let length = bs.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
        return Ok((input, length));
    }
    // short form: 0-127
    Ok((input, n as u64))
}
