use std::fmt;

/// Customer tax identifier, unique within a bank
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaxId(String);

impl TaxId {
    pub fn new(value: impl Into<String>) -> Self {
        let value: String = value.into();
        return Self(value.trim().to_string());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for TaxId {
    fn from(value: &str) -> Self {
        return Self::new(value);
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
