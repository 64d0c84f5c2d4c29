use std::fmt;

const DNA_ALPHABET: &[u8] = b"ACGT";
const RNA_ALPHABET: &[u8] = b"ACGU";
const PROTEIN_ALPHABET: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// Molecular type inferred from the characters present in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceType {
    Dna,
    Rna,
    Protein,
    Unknown,
}

impl SequenceType {
    /// Classifies a sequence by alphabet membership.
    ///
    /// Rules are checked in the order DNA, RNA, PROTEIN and the first alphabet
    /// containing every character wins. No case folding is applied, so callers
    /// are expected to pass upper-cased sequences.
    ///
    /// An empty sequence satisfies every rule and is reported as [`SequenceType::Dna`].
    ///
    /// # Example
    /// ```
    /// use fastatype::models::SequenceType;
    ///
    /// assert_eq!(SequenceType::classify("ACGT"), SequenceType::Dna);
    /// assert_eq!(SequenceType::classify("ACGU"), SequenceType::Rna);
    /// assert_eq!(SequenceType::classify("ACDEFG"), SequenceType::Protein);
    /// assert_eq!(SequenceType::classify("ACGTX"), SequenceType::Unknown);
    /// ```
    pub fn classify(sequence: &str) -> Self {
        let bytes = sequence.as_bytes();

        if all_in(bytes, DNA_ALPHABET) {
            SequenceType::Dna
        } else if all_in(bytes, RNA_ALPHABET) {
            SequenceType::Rna
        } else if all_in(bytes, PROTEIN_ALPHABET) {
            SequenceType::Protein
        } else {
            SequenceType::Unknown
        }
    }

    /// Label used in tables and FASTA descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceType::Dna => "DNA",
            SequenceType::Rna => "RNA",
            SequenceType::Protein => "PROTEIN",
            SequenceType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn all_in(sequence: &[u8], alphabet: &[u8]) -> bool {
    sequence.iter().all(|b| alphabet.contains(b))
}
