use crate::base;

/// An item code as it appeared in the sheet.
///
/// Codes stored as text are the normal case. Anything else (a number, a
/// boolean, a blank) is kept as its literal rendering so that a few malformed
/// rows still flow through the pipeline instead of aborting it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemCode {
    Text(String),
    Literal(String),
}

/// Grouping key shared by all size/unit variants of one base item.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
    serde::Serialize,
)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl ItemCode {
    pub fn as_str(&self) -> &str {
        match self {
            ItemCode::Text(s) | ItemCode::Literal(s) => s,
        }
    }

    /// Derives the base code by dropping the trailing variant character.
    ///
    /// Text codes of one character or fewer, and all non-text codes, are
    /// returned unchanged.
    pub fn base(&self) -> GroupKey {
        match self {
            ItemCode::Text(s) => {
                let mut chars = s.chars();
                match (chars.next_back(), chars.as_str()) {
                    (Some(_), rest) if !rest.is_empty() => GroupKey::from(rest),
                    _ => GroupKey::from(s.as_str()),
                }
            }
            ItemCode::Literal(s) => GroupKey::from(s.as_str()),
        }
    }
}

impl From<&base::Cell> for ItemCode {
    fn from(value: &base::Cell) -> Self {
        match value {
            base::Cell::Text(s) => ItemCode::Text(s.clone()),
            other => ItemCode::Literal(other.to_string()),
        }
    }
}

impl std::fmt::Display for ItemCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
