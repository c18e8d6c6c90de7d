//! Domain logic - tag parsing and ordering independent of git access

pub mod tag;
pub mod version;

pub use tag::{Tag, TagList};
pub use version::{compare_precedence, ParsedVersion};
