use core::fmt;

pub static LABEL: &str = "Fletcher checksum , ";

/// Printable checksum line: the label followed by four lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report(pub u16);

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04x}", LABEL, self.0)
    }
}
