//! Domain Entities
//!
//! Entities carry identity: two chunks with the same content are still
//! distinct evidence units if their ids differ.

/// Source chunk entity
pub mod source_chunk;

pub use source_chunk::SourceChunk;
