use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary account number as supplied by the caller.
///
/// `Debug` only ever shows the last four digits, so a request can be traced
/// without leaking the PAN. No `Display` impl.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Full number. Only the bank client should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last_four(&self) -> String {
        let len = self.0.chars().count();
        self.0.chars().skip(len.saturating_sub(4)).collect()
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber(****{})", self.last_four())
    }
}

impl From<&str> for CardNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cvv(String);

impl Cvv {
    pub fn new(cvv: impl Into<String>) -> Self {
        Self(cvv.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Cvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cvv(***)")
    }
}

impl From<&str> for Cvv {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
