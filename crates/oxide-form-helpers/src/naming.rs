//! Naming conventions for `id`, `name` and label text.
//!
//! A form value is identified by an object name and an optional field
//! name. The `name` attribute is `object[field]` so the host framework can
//! rebuild the nested parameter mapping; the `id` attribute is a flattened,
//! lowercase form of the same parts.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid regex"));

static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").expect("valid regex"));

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b('?[a-z])").expect("valid regex"));

/// Derives an `id` attribute from its parts.
///
/// Absent parts are skipped, the rest are joined with `_`, lowercased, and
/// every run of non-word characters becomes a single `_`.
///
/// ```
/// use oxide_form_helpers::naming::css_id;
///
/// assert_eq!(css_id(&[Some("Person"), Some("First Name")]), "person_first_name");
/// assert_eq!(css_id(&[Some("person"), None, Some("red")]), "person_red");
/// ```
pub fn css_id(parts: &[Option<&str>]) -> String {
    let joined = parts.iter().flatten().copied().collect::<Vec<_>>().join("_");
    NON_WORD
        .replace_all(&joined.to_lowercase(), "_")
        .into_owned()
}

/// Derives a `name` attribute: `object` alone, or `object[field]`.
pub fn field_name(object: &str, field: Option<&str>) -> String {
    match field {
        Some(field) => format!("{object}[{field}]"),
        None => object.to_string(),
    }
}

/// Sanitizes an object name bound by a fieldset: non-word characters are
/// stripped rather than replaced.
pub fn fieldset_name(object: &str) -> String {
    NON_WORD.replace_all(object, "").into_owned()
}

/// Turns a field name into label text, e.g. `first_name` into `First Name`.
pub fn titleize(text: &str) -> String {
    let spaced = UNDERSCORES.replace_all(text, " ");
    WORD_START
        .replace_all(&spaced, |caps: &regex::Captures<'_>| {
            let start = &caps[1];
            // a letter after an apostrophe continues the word ("don't")
            if start.starts_with('\'') {
                start.to_string()
            } else {
                start.to_uppercase()
            }
        })
        .into_owned()
}
