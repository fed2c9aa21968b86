//! Record and batch types for extracted roster lines.

/// One parsed roster line: a full name and the unparsed remainder.
///
/// The full name is the line's first two whitespace-delimited tokens joined
/// with a single space. The remainder is everything after the second token,
/// kept verbatim (embedded whitespace preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// `"<firstName> <lastName>"`, normalized to a single separating space.
    pub full_name: String,
    /// Free text after the second name token, typically a birth date.
    pub remainder: String,
}

impl Record {
    pub fn new(full_name: impl Into<String>, remainder: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            remainder: remainder.into(),
        }
    }
}

/// Ordered collection of records from one extraction pass.
///
/// Insertion order matches input line order. The batch is built empty,
/// filled while the input is consumed, and treated as complete afterwards;
/// there is no shared or process-wide accumulator state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBatch {
    records: Vec<Record>,
}

impl RecordBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, preserving insertion order.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// The extracted full names, in input order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.full_name.as_str()).collect()
    }

    /// The extracted remainders, in input order.
    pub fn remainders(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.remainder.as_str()).collect()
    }
}

impl FromIterator<Record> for RecordBatch {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordBatch {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordBatch {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
