//! Parse FASTA files into records and infer each sequence's molecular type.
//!
//! ```no_run
//! use fastatype::io::FastaParser;
//!
//! let records = FastaParser::load("multi.fasta")?.parse()?;
//! for record in &records {
//!     println!("{}: {} ({} residues)", record.header, record.sequence_type, record.len());
//! }
//! # Ok::<(), fastatype::error::FastaError>(())
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod models;

pub use error::{FastaError, Result};
pub use io::{DuplicateHeaders, FastaParser, FastaWriter};
pub use models::{SequenceRecord, SequenceType};
