//! Custom extractors for common request patterns.

pub mod id_path;

pub use id_path::IdPath;
