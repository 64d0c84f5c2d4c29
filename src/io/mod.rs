//! I/O module for reading and writing FASTA files.

pub mod fasta;
pub mod writer;

// Re-export main types
pub use fasta::{DuplicateHeaders, FastaParser, parse_records};
pub use writer::FastaWriter;
