//! Low-level markup primitives: escaping, attribute maps and tag assembly.

use std::collections::BTreeMap;

/// Escapes text for embedding in HTML content or attribute values.
///
/// Replaces `&`, `"`, `>` and `<` with their entities, in that order.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('>', "&gt;")
        .replace('<', "&lt;")
}

/// HTML attributes for a tag.
///
/// Keys are kept sorted so rendering is deterministic. An attribute whose
/// value is `None` is skipped entirely when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttrs {
    attrs: BTreeMap<String, Option<String>>,
}

impl HtmlAttrs {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), Some(value.into()));
    }

    /// Sets an attribute that may be absent. An absent value overrides any
    /// earlier value and suppresses the attribute on output.
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        self.attrs.insert(key.into(), value.map(Into::into));
    }

    /// Gets an attribute value, if present and not absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Option::as_deref)
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key).flatten()
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Copies every entry of `other` over this map; `other` wins on conflicts.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.attrs {
            self.attrs.insert(key.clone(), value.clone());
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set an attribute that may be absent.
    #[must_use]
    pub fn with_opt(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.set_opt(key, value);
        self
    }

    /// Renders attributes as an HTML attribute string, `key="value"` pairs
    /// in key order separated by single spaces. Values are escaped.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| format!(r#"{k}="{}""#, escape_html(v))))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K, V> FromIterator<(K, V)> for HtmlAttrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

fn open_tag(name: &str, attrs: &HtmlAttrs) -> String {
    let rendered = attrs.to_html();
    if rendered.is_empty() {
        format!("<{name}>")
    } else {
        format!("<{name} {rendered}>")
    }
}

/// Creates an element with an open and a close tag.
///
/// `content` is inserted as-is; callers escape free text before passing it.
/// When `content` is `None` only the open tag is emitted, which differs from
/// `Some("")`:
///
/// ```
/// use oxide_form_helpers::markup::{tag, HtmlAttrs};
///
/// let attrs = HtmlAttrs::new().with("class", "page-title");
/// assert_eq!(
///     tag("h1", Some("My title"), &attrs),
///     r#"<h1 class="page-title">My title</h1>"#
/// );
/// assert_eq!(tag("p", Some(""), &HtmlAttrs::new()), "<p></p>");
/// assert_eq!(tag("p", None, &HtmlAttrs::new()), "<p>");
/// ```
pub fn tag(name: &str, content: Option<&str>, attrs: &HtmlAttrs) -> String {
    let open = open_tag(name, attrs);
    match content {
        Some(content) => format!("{open}{content}</{name}>"),
        None => open,
    }
}

/// Creates a self-closing element, e.g. `<img src="a.jpg" />`.
pub fn void_tag(name: &str, attrs: &HtmlAttrs) -> String {
    let rendered = attrs.to_html();
    if rendered.is_empty() {
        format!("<{name} />")
    } else {
        format!("<{name} {rendered} />")
    }
}
