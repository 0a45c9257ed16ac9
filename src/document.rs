use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{Record, SrecError};

/// An ordered list of records, usually the contents of one `.mot`/`.s19`
/// file. Record order is kept as-is and defines the layout of the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    pub fn new(records: Vec<Record>) -> Self {
        Document { records }
    }

    /// Parses every line in order. The first line that fails to parse aborts
    /// the load and its error is returned as-is.
    pub fn from_lines<I>(lines: I) -> Result<Self, SrecError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut records = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            match Record::parse(line) {
                Ok(record) => records.push(record),
                Err(error) => {
                    log::debug!("line {}: {}", index + 1, error);
                    return Err(error);
                }
            }
        }

        log::debug!("loaded {} records", records.len());

        Ok(Document { records })
    }

    /// Parses a whole text, one record per line.
    pub fn parse(text: &str) -> Result<Self, SrecError> {
        Self::from_lines(text.lines())
    }

    /// Reads and parses a whole file.
    #[cfg(feature = "std")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        log::debug!("reading {}", path.display());

        let text = std::fs::read_to_string(path)?;

        Ok(Self::parse(&text)?)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// The first S0 record, if the document has one.
    pub fn header(&self) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.record_type().is_header())
    }

    /// S1, S2 and S3 records in document order.
    pub fn data_records(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.is_data_record())
            .collect()
    }

    /// Bytes spanned from the start of the first data record to the end of
    /// the last one.
    ///
    /// Only the first and last data records are looked at; gaps and overlaps
    /// in between are not accounted for.
    pub fn image_size(&self) -> Result<u64, SrecError> {
        let mut data = self.records.iter().filter(|record| record.is_data_record());

        let first = data.next().ok_or(SrecError::NoDataRecords)?;
        let last = data.last().unwrap_or(first);

        let start = u64::from(first.address());
        let end = u64::from(last.address()) + last.payload().len() as u64;

        if end < start {
            log::warn!(
                "last data record ends at {:#X}, before the first one starts at {:#X}",
                end,
                start
            );
        }

        Ok(end.saturating_sub(start))
    }

    /// Every record on its own line, each terminated by `\n`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }

        Ok(())
    }
}

impl FromStr for Document {
    type Err = SrecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse(s)
    }
}

impl From<Vec<Record>> for Document {
    fn from(records: Vec<Record>) -> Self {
        Document::new(records)
    }
}

impl core::iter::FromIterator<Record> for Document {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Document::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Document {
    type Item = Record;
    type IntoIter = alloc::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
