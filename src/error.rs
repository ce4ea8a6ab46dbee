//! Error types for menu construction and selection.

use thiserror::Error;

/// Result type alias for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;

/// Errors produced by building or displaying a menu.
#[derive(Error, Debug)]
pub enum MenuError {
    /// An entry with this key is already in the menu.
    #[error("duplicate menu key {0:?}")]
    DuplicateKey(char),

    /// The pressed key does not correspond to any entry.
    #[error("no menu entry for key {0:?}")]
    InvalidSelection(char),

    /// Terminal I/O failure while drawing or reading.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
