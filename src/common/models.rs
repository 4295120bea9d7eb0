use serde::Deserialize;

/// Integer field that clients send either as a JSON number or as a string.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum LooseInt {
    Number(i64),
    Text(String),
}

impl LooseInt {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            LooseInt::Number(n) => Some(*n),
            LooseInt::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.as_i64().and_then(|n| i32::try_from(n).ok())
    }

    /// Zero, `"0"` and empty strings are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            LooseInt::Text(s) if s.is_empty() => false,
            _ => self.as_i64() != Some(0),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}
