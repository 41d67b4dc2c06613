//! I/O utilities for tagmend.
//!
//! Provides file reading with memory mapping support for large stream
//! captures, along with Unicode boundary helpers used when truncating
//! buffers at byte indices.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, read_file, write_file};
pub use unicode::{find_char_boundary, grapheme_count, truncate_graphemes};
