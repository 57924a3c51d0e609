//! Value-contains filters over a single event-data field.

use serde::{Deserialize, Serialize};

/// A field matches a [`Filter`] iff any value in `values` is a substring of
/// the field's value (§3, §4.4).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(alias = "Values")]
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Filter {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff `value` contains any of this filter's values as a substring.
    pub fn matches(&self, value: &str) -> bool {
        self.values.iter().any(|v| value.contains(v.as_str()))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
