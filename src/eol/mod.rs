//! Line-ending normalization.
//!
//! - [`expand_byte`] / [`expand`] - LF to CRLF, with one byte of look-behind
//! - [`contract_in_place`] / [`contract`] - CRLF to LF, with one byte of look-ahead
//! - [`trim_trailing_zeros`] - drops NUL padding left behind by transcoding
//!
//! Both directions are stateless apart from the single neighbouring byte, so
//! a stream can be processed chunk by chunk as long as the caller carries the
//! last byte of the previous chunk forward.

mod contract;
mod expand;

pub use contract::{contract, contract_in_place, trim_trailing_zeros};
pub use expand::{Expansion, expand, expand_byte};
pub(crate) use expand::expand_within;

/// Carriage return.
pub const CR: u8 = b'\r';

/// Line feed.
pub const LF: u8 = b'\n';
