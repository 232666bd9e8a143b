use std::fmt;
use std::path::Path;

/// Where the bytes to checksum come from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    File(&'a Path),
    Literal(&'a str),
}

impl Source<'_> {
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Source::File(path) => read_file_or_empty(path),
            Source::Literal(text) => literal_bytes(text),
        }
    }
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "file {}", path.display()),
            Source::Literal(text) => write!(f, "literal {:?}", text),
        }
    }
}

/// Whole contents of `path`, or an empty vector if it cannot be read for any reason.
pub fn read_file_or_empty(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_default()
}

pub fn literal_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}
