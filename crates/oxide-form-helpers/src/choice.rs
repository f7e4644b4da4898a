//! Choices offered by checkbox groups, radio groups and selects.

use std::collections::BTreeSet;

/// A single offered choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A value that is also its own label.
    Scalar(String),
    /// A value with a separate display label.
    Pair(String, String),
}

impl Choice {
    /// Creates a choice whose value doubles as its label.
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Creates a choice with a separate label.
    pub fn pair(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Pair(value.into(), label.into())
    }

    /// The submitted value, also used to derive ids.
    pub fn id(&self) -> &str {
        match self {
            Self::Scalar(value) | Self::Pair(value, _) => value,
        }
    }

    /// The display text.
    pub fn text(&self) -> &str {
        match self {
            Self::Scalar(value) => value,
            Self::Pair(_, label) => label,
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::scalar(value)
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<(&str, &str)> for Choice {
    fn from((value, label): (&str, &str)) -> Self {
        Self::pair(value, label)
    }
}

impl From<(String, String)> for Choice {
    fn from((value, label): (String, String)) -> Self {
        Self::Pair(value, label)
    }
}

/// Collects anything convertible into choices.
///
/// ```
/// use oxide_form_helpers::choice::{choices, Choice};
///
/// let offered = choices([("us", "United States"), ("fr", "France")]);
/// assert_eq!(offered[1], Choice::pair("fr", "France"));
/// ```
pub fn choices<I, C>(items: I) -> Vec<Choice>
where
    I: IntoIterator<Item = C>,
    C: Into<Choice>,
{
    items.into_iter().map(Into::into).collect()
}

/// Rendering options for checkbox and radio groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOptions {
    /// Separator placed between rendered items.
    pub join: String,
    /// Whether each item gets a generated label.
    pub show_label: bool,
    /// Ids that are checked regardless of submitted values.
    pub checked: BTreeSet<String>,
}

impl Default for ChoiceOptions {
    fn default() -> Self {
        Self {
            join: " ".to_string(),
            show_label: true,
            checked: BTreeSet::new(),
        }
    }
}

impl ChoiceOptions {
    /// Creates default options: single-space separator, labels shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator between items.
    #[must_use]
    pub fn join(mut self, separator: impl Into<String>) -> Self {
        self.join = separator.into();
        self
    }

    /// Enables or disables generated labels.
    #[must_use]
    pub fn label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    /// Marks ids as checked.
    #[must_use]
    pub fn checked<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checked.extend(ids.into_iter().map(Into::into));
        self
    }

    pub(crate) fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }
}
