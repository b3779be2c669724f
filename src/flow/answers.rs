//! The answer set collected by the questionnaire.

use std::collections::HashMap;

/// Answers keyed by question name.
///
/// Values are stored exactly as entered; trimming happens where they are
/// used. Entries are overwritten, never removed, so navigating back and
/// forth keeps everything the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<String, String>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value for `name`, or the empty string when unanswered.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Value for `name` with surrounding whitespace removed.
    pub fn trimmed(&self, name: &str) -> &str {
        self.get(name).trim()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Store `value` for `name`, returning the previous value if any.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.to_string(), value.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
