//! This module provides the element display-property table and utilities for loading it from TOML.
//!
//! It defines the `ElementTable` struct, an immutable ordered sequence of `ElementRecord`s indexed
//! by atomic number. The table is populated once, from the embedded resource or from a user TOML
//! file, validated against the table invariants, and thereafter only read. The historical data
//! this replaces kept symbols, sizes, colors, and coefficients in parallel arrays; here one record
//! per index keeps each element's fields together.

use crate::error::ElemTabError;
use crate::types::{ElementRecord, Rgb};
use serde::Deserialize;
use std::path::Path;

/// The number of records every table carries: the placeholder at index 0 plus the 103 elements
/// at indices 1..=103.
pub const ELEMENT_COUNT: usize = 104;

/// An immutable table of element display properties indexed by atomic number.
///
/// Records are held in index order, so position 6 is carbon, position 103 the table's last
/// element, and position 0 the placeholder used for unknown atoms. The struct exposes no mutating
/// methods; once a table has been loaded and validated its contents are fixed, which makes a
/// shared reference safe for unlimited concurrent lookups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementTable {
    #[serde(rename = "elements")]
    records: Vec<ElementRecord>,
}

impl ElementTable {
    /// Loads an element table from a TOML file.
    ///
    /// The file should contain an `elements` array with one record per atomic number, in index
    /// order. The loaded table is validated before it is returned, so a table obtained through
    /// this method always satisfies the invariants documented on [`ElementTable`].
    ///
    /// # Errors
    ///
    /// Returns an `ElemTabError::IoError` if the file cannot be read, an
    /// `ElemTabError::DeserializationError` if the TOML content is malformed, or one of the
    /// validation variants if the content parses but violates a table invariant.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use elemtab::ElementTable;
    /// use std::path::Path;
    ///
    /// let table = ElementTable::load_from_file(Path::new("elements.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, ElemTabError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| ElemTabError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses an element table from a TOML string.
    ///
    /// Like [`ElementTable::load_from_file`], the parsed table is validated before it is
    /// returned: it must carry exactly [`ELEMENT_COUNT`] records, every symbol must be two
    /// lowercase characters (space-padded for one-letter symbols), every color channel must lie
    /// in `[0, 1]`, and every radius and energy coefficient must be positive.
    ///
    /// # Errors
    ///
    /// Returns an `ElemTabError::DeserializationError` if the TOML content is invalid, or one of
    /// the validation variants if a record violates a table invariant.
    pub fn load_from_str(toml_str: &str) -> Result<Self, ElemTabError> {
        let table: ElementTable = toml::from_str(toml_str)?;
        table.validate()?;
        Ok(table)
    }

    /// Checks the table invariants, returning the first violation found.
    fn validate(&self) -> Result<(), ElemTabError> {
        if self.records.len() != ELEMENT_COUNT {
            return Err(ElemTabError::WrongEntryCount {
                expected: ELEMENT_COUNT,
                found: self.records.len(),
            });
        }

        for (index, record) in self.records.iter().enumerate() {
            if !is_valid_symbol(&record.symbol) {
                return Err(ElemTabError::InvalidSymbol {
                    index,
                    symbol: record.symbol.clone(),
                });
            }
            if !(record.display_radius.is_finite() && record.display_radius > 0.0) {
                return Err(ElemTabError::NonPositiveValue {
                    index,
                    field: "radius",
                    value: record.display_radius,
                });
            }
            for value in record.color.channels() {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ElemTabError::ColorOutOfRange { index, value });
                }
            }
            for &value in &record.energy {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ElemTabError::NonPositiveValue {
                        index,
                        field: "energy",
                        value,
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns the number of records in the table, always [`ELEMENT_COUNT`] for a validated
    /// table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table holds no records. A validated table is never empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, or `None` if the index is out of range.
    pub fn get(&self, index: usize) -> Option<&ElementRecord> {
        self.records.get(index)
    }

    /// Returns the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ElemTabError::OutOfRange` if `index` is not within `0..len()`.
    pub fn record(&self, index: usize) -> Result<&ElementRecord, ElemTabError> {
        self.records.get(index).ok_or(ElemTabError::OutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Returns the two-character symbol for the element at `index`.
    ///
    /// One-letter symbols keep their trailing padding space (`"c "` for carbon at index 6).
    ///
    /// # Errors
    ///
    /// Returns `ElemTabError::OutOfRange` if `index` is not within `0..len()`.
    pub fn symbol(&self, index: usize) -> Result<&str, ElemTabError> {
        Ok(&self.record(index)?.symbol)
    }

    /// Returns the visualization radius for the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ElemTabError::OutOfRange` if `index` is not within `0..len()`.
    pub fn display_radius(&self, index: usize) -> Result<f64, ElemTabError> {
        Ok(self.record(index)?.display_radius)
    }

    /// Returns the normalized RGB display color for the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ElemTabError::OutOfRange` if `index` is not within `0..len()`.
    pub fn display_color(&self, index: usize) -> Result<Rgb, ElemTabError> {
        Ok(self.record(index)?.color)
    }

    /// Returns the three energy/bonding coefficients for the element at `index`.
    ///
    /// The coefficients are tuning values consumed by the bonding and force calculations of the
    /// application the table serves; this library only stores them.
    ///
    /// # Errors
    ///
    /// Returns `ElemTabError::OutOfRange` if `index` is not within `0..len()`.
    pub fn energy_coefficients(&self, index: usize) -> Result<(f64, f64, f64), ElemTabError> {
        let [e1, e2, e3] = self.record(index)?.energy;
        Ok((e1, e2, e3))
    }

    /// Returns the index of the element with the given symbol, ignoring the padding space.
    ///
    /// Both the padded table form and the bare form match, so `"c "` and `"c"` each resolve to
    /// carbon's index 6. Symbols are compared exactly otherwise; lookup is case-sensitive and the
    /// table stores lowercase.
    ///
    /// # Examples
    ///
    /// ```
    /// let table = elemtab::default_table();
    /// assert_eq!(table.index_of("c"), Some(6));
    /// assert_eq!(table.index_of("lw"), Some(103));
    /// assert_eq!(table.index_of("zz"), None);
    /// ```
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        let wanted = symbol.trim_end();
        self.records
            .iter()
            .position(|record| record.symbol.trim_end() == wanted)
    }

    /// Returns an iterator over the records in index order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.records.iter()
    }
}

/// A table symbol is exactly two bytes: a lowercase ASCII letter followed by either another
/// lowercase letter or the padding space.
fn is_valid_symbol(symbol: &str) -> bool {
    let bytes = symbol.as_bytes();
    bytes.len() == 2
        && bytes[0].is_ascii_lowercase()
        && (bytes[1].is_ascii_lowercase() || bytes[1] == b' ')
}
