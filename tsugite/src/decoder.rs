//! Decoder trait for type-safe conversions.
//!
//! Converting from a source type `T` to a destination type `D` requires two
//! impls: `Decoder<T, D>` on the source, which performs the conversion, and
//! the marker `DecodableFrom<T>` on the destination, which declares the
//! conversion valid. The marker keeps arbitrary type pairs from acquiring a
//! `decode` method by accident.
//!
//! ```no_run
//! use tsugite::decoder::{DecodableFrom, Decoder};
//!
//! struct Source(Vec<u8>);
//! struct Dest(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Source> for Dest {}
//!
//! impl Decoder<Source, Dest> for Source {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Dest, Self::Error> {
//!         Ok(Dest(String::from_utf8_lossy(&self.0).to_string()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type. The destination type must implement
/// `DecodableFrom<T>`.
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// This trait has no methods; implementing it declares a valid conversion
/// pair for [`Decoder`].
pub trait DecodableFrom<T> {}
