pub mod error;
pub mod table;
pub mod types;

pub use error::ElemTabError;
pub use table::{ELEMENT_COUNT, ElementTable};
pub use types::{ElementRecord, Rgb};

use std::sync::OnceLock;

static DEFAULT_TABLE: OnceLock<ElementTable> = OnceLock::new();

/// Returns the built-in element display-property table.
///
/// The table is parsed from the embedded resource on first use and cached for the lifetime of
/// the process; every call afterwards returns the same reference. Because the table is immutable
/// after construction, the reference may be shared freely across threads.
pub fn default_table() -> &'static ElementTable {
    DEFAULT_TABLE.get_or_init(|| {
        const DEFAULT_TABLE_TOML: &str = include_str!("../resources/elements.toml");
        ElementTable::load_from_str(DEFAULT_TABLE_TOML)
            .expect("Failed to parse embedded element table. This is a library bug.")
    })
}
