//! The streaming buffer engine.
//!
//! - [`TransformBuffer`] - One growable allocation split into finalized bytes,
//!   an expansion hole and a read tail
//! - [`ingest`] - Drains a [`std::io::Read`] source into a [`TransformBuffer`]

mod ingest;
mod transform;

pub use ingest::ingest;
pub use transform::{BufferLayout, TransformBuffer};
