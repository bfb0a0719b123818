use serde::{Deserialize, Serialize};

/// Ordered competition classes, slowest first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ClassLadder(Vec<String>);

impl ClassLadder {
    /// Build a ladder. Caller is responsible for uniqueness; catalogs go
    /// through `validate_catalog` first.
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(classes.into_iter().map(Into::into).collect())
    }

    pub fn index_of(&self, class: &str) -> Option<usize> {
        self.0.iter().position(|c| c == class)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn top(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ClassLadder {
    /// The standard time-trial ladder.
    fn default() -> Self {
        Self::new(["TTS", "TTE", "TTD", "TTC", "TTB", "TTA", "TTX"])
    }
}
