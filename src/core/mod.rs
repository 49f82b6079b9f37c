// Public modules
pub mod error;
pub mod remove;
pub mod rename;
pub mod scan;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use remove::{remove_by_name, RemoveReport};
pub use rename::{rename_items, RenameChange, RenameReport, SkipReason, SkippedItem};
pub use scan::{scan, Entry};
