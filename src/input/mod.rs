//! Reading text to translate from piped stdin.

mod reader;

pub use reader::InputReader;
