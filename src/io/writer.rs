//! FASTA export of classified records.

use crate::error::Result;
use crate::models::SequenceRecord;
use noodles::fasta;
use noodles::fasta::record::{Definition, Sequence};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer emitting records as FASTA with the inferred type in the description.
///
/// Each record is written as `>{header} type={LABEL}` followed by its sequence,
/// wrapped at 80 bases per line.
///
/// The export is not a lossless round-trip: parsing the file back yields
/// headers ending in ` type={LABEL}`. Records that shared a header also stay
/// merged under the default [`DuplicateHeaders::Overwrite`] policy.
///
/// [`DuplicateHeaders::Overwrite`]: crate::io::DuplicateHeaders::Overwrite
///
/// The buffer is flushed when the writer is dropped, but flush errors are
/// silently ignored. Call `finish()` to handle them.
///
/// # Example
/// ```no_run
/// use fastatype::io::FastaWriter;
/// use fastatype::models::SequenceRecord;
///
/// let mut writer = FastaWriter::new("typed.fasta")?;
/// writer.write_record(&SequenceRecord::new("seq1", "ACGT"))?;
/// writer.finish()?;
/// # Ok::<(), fastatype::error::FastaError>(())
/// ```
pub struct FastaWriter {
    writer: fasta::io::Writer<BufWriter<File>>,
}

impl FastaWriter {
    /// Creates the output file, truncating it if it exists.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: fasta::io::Writer::new(BufWriter::new(file)),
        })
    }

    /// Writes a single record.
    pub fn write_record(&mut self, record: &SequenceRecord) -> Result<()> {
        let definition = Definition::new(
            record.header.as_str(),
            Some(format!("type={}", record.sequence_type).into()),
        );
        let sequence = Sequence::from(record.sequence.as_bytes().to_vec());

        self.writer
            .write_record(&fasta::Record::new(definition, sequence))?;
        Ok(())
    }

    /// Writes multiple records in order.
    pub fn write_records(&mut self, records: &[SequenceRecord]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flushes buffered output to the file.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.get_mut().flush()?;
        Ok(())
    }

    /// Flushes and closes the writer.
    pub fn finish(mut self) -> Result<()> {
        self.flush()
    }
}
