//! Parsed FASTA records and their molecular type classification.

pub mod record;
pub mod sequence_type;

pub use record::SequenceRecord;
pub use sequence_type::SequenceType;
