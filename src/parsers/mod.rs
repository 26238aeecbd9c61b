pub mod source;

pub use source::{ParsedSource, parse_source};
