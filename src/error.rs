use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `elemtab` library.
///
/// Accessor methods can only fail with `OutOfRange`; every other variant belongs
/// to the table-loading path, where a custom TOML table may be missing, malformed,
/// or in violation of the table invariants. It implements `std::error::Error`,
/// allowing it to be composed with other error types in application code.
#[derive(Error, Debug)]
pub enum ElemTabError {
    /// An accessor was called with an index outside the table.
    ///
    /// Valid indices run from 0 (the placeholder entry) through `len - 1`. The source
    /// data this library replaces left such lookups unchecked; here they are an
    /// explicit, recoverable error.
    #[error("element index {index} is out of range for a table of {len} entries")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of records in the table.
        len: usize,
    },

    /// A loaded table did not contain the required number of records.
    ///
    /// Every table carries exactly one record per atomic number 0..=103; a custom
    /// table with more or fewer rows is rejected as a whole rather than partially
    /// accepted.
    #[error("element table must contain exactly {expected} records, found {found}")]
    WrongEntryCount {
        /// The number of records a table must contain.
        expected: usize,
        /// The number of records actually present.
        found: usize,
    },

    /// A record's symbol was not two lowercase characters (with optional trailing
    /// space padding).
    #[error("invalid symbol {symbol:?} at index {index}: expected two lowercase characters")]
    InvalidSymbol {
        /// The index of the offending record.
        index: usize,
        /// The symbol as it appeared in the table source.
        symbol: String,
    },

    /// A record's color carried a channel outside the normalized `[0, 1]` range.
    #[error("color channel value {value} at index {index} is outside [0, 1]")]
    ColorOutOfRange {
        /// The index of the offending record.
        index: usize,
        /// The offending channel value.
        value: f64,
    },

    /// A record's radius or energy coefficient was zero, negative, or not finite.
    #[error("{field} value {value} at index {index} must be a positive number")]
    NonPositiveValue {
        /// The index of the offending record.
        index: usize,
        /// Which field carried the value (`"radius"` or `"energy"`).
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// An I/O error that occurred while attempting to read a table file.
    ///
    /// The path to the file and the underlying I/O error are provided for context.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An error that occurred while parsing a table file, typically indicating
    /// invalid TOML or a structural mismatch with the expected record format.
    #[error("Failed to deserialize TOML element table: {0}")]
    DeserializationError(#[from] toml::de::Error),
}
