use super::SequenceType;
use std::fmt;

/// A parsed FASTA record with its inferred molecular type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub header: String,
    pub sequence: String,
    pub sequence_type: SequenceType,
}

impl SequenceRecord {
    /// Creates a record and classifies its sequence.
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        let sequence = sequence.into();
        let sequence_type = SequenceType::classify(&sequence);
        Self {
            header: header.into(),
            sequence,
            sequence_type,
        }
    }

    /// Re-runs classification on the stored sequence.
    pub fn classify(&self) -> SequenceType {
        SequenceType::classify(&self.sequence)
    }

    /// Number of residues (characters, not bytes) in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ">{}", self.header)?;
        write!(f, "{}", self.sequence)
    }
}
