mod library;

pub use library::{LibraryEntry, WatchStatus};
