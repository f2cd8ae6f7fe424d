mod listing;

pub use listing::{list_archives, ARCHIVE_EXTENSION};
