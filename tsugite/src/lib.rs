//! # tsugite
//!
//! Core traits for the tsugite certificate decoding toolkit.
//!
//! This crate defines the `Decoder` and `Encoder` trait pairs that every
//! other member crate uses to convert between representations:
//!
//! ```text
//! PEM → Vec<u8> → Der → typed ASN.1 values → Certificate
//! ```
//!
//! Each conversion step is an explicit `Decoder` impl, constrained by a
//! marker trait so that only declared conversions compile.

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
