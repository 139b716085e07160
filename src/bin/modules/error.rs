use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the elemtab library, including table loading and
    /// out-of-range lookups.
    #[error("Table error: {0}")]
    Table(#[from] elemtab::ElemTabError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// Errors parsing an element query argument.
    #[error("Invalid element query '{query}': {details}")]
    Query { query: String, details: String },
}
