use std::fmt;

/// A reverse-geocoded address as a single formatted line of text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedAddress {
    formatted: String,
}

impl ResolvedAddress {
    pub const fn new(formatted: String) -> Self {
        Self { formatted }
    }

    pub fn as_str(&self) -> &str {
        self.formatted.as_str()
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted)
    }
}
