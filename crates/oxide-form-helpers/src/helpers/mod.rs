//! Field-level HTML helpers.

mod choices;

use tracing::debug;

use crate::error::{FormError, Result};
use crate::markup::{escape_html, tag, void_tag, HtmlAttrs};
use crate::naming::{css_id, field_name, titleize};
use crate::params::{resolve_value, ParamSource, ParamValue};

/// Generates form markup, re-populating fields from submitted parameters.
///
/// Every helper returns an HTML fragment. Attribute values and free text are
/// escaped; caller-supplied block content is inserted as-is.
#[derive(Clone, Copy)]
pub struct FormHelpers<'p> {
    params: &'p dyn ParamSource,
}

impl std::fmt::Debug for FormHelpers<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormHelpers").finish_non_exhaustive()
    }
}

impl<'p> FormHelpers<'p> {
    /// Creates helpers reading submitted values from `params`.
    pub fn new(params: &'p dyn ParamSource) -> Self {
        Self { params }
    }

    /// Resolves the value a field should display.
    ///
    /// See [`resolve_value`].
    pub fn resolve(
        &self,
        object: &str,
        field: Option<&str>,
        default: Option<ParamValue>,
    ) -> Option<ParamValue> {
        resolve_value(self.params, object, field, default)
    }

    /// Wraps a form body in a `<form>` tag.
    ///
    /// The method is upper-cased on the form and also sent as a hidden
    /// `_method` input so hosts can route verbs browsers cannot submit.
    pub fn form(
        &self,
        action: &str,
        method: &str,
        attrs: &HtmlAttrs,
        body: Option<&dyn Fn(&Self) -> String>,
    ) -> Result<String> {
        let Some(body) = body else {
            debug!(action, "form() called without a body");
            return Err(FormError::invalid_usage("`form` requires a body"));
        };

        let mut form_attrs = HtmlAttrs::new()
            .with("action", action)
            .with("method", method.to_uppercase());
        form_attrs.merge(attrs);

        let method_input = void_tag(
            "input",
            &HtmlAttrs::new()
                .with("type", "hidden")
                .with("name", "_method")
                .with("value", method),
        );
        let content = format!("{method_input}{}", body(self));
        Ok(tag("form", Some(&content), &form_attrs))
    }

    /// Link to a URL. Without `href`, the content doubles as the target.
    pub fn link(&self, content: &str, href: Option<&str>, attrs: &HtmlAttrs) -> String {
        let mut attrs = attrs.clone();
        attrs.set("href", href.unwrap_or(content));
        tag("a", Some(&escape_html(content)), &attrs)
    }

    /// Label for a field. Without display text, the field name is titleized.
    pub fn label(
        &self,
        object: &str,
        field: &str,
        display: Option<&str>,
        attrs: &HtmlAttrs,
    ) -> String {
        let text = match display {
            Some(display) if !display.is_empty() => display.to_string(),
            _ => titleize(field),
        };
        let mut attrs = attrs.clone();
        attrs.set("for", css_id(&[Some(object), Some(field)]));
        tag("label", Some(&escape_html(&text)), &attrs)
    }

    /// Text input. A `value` attribute is the default when nothing was
    /// submitted; `type` defaults to `text`.
    pub fn input(&self, object: &str, field: Option<&str>, attrs: &HtmlAttrs) -> String {
        let default = attrs.get("value").map(ParamValue::from);
        let value = self.resolve(object, field, default);

        let mut attrs = attrs.clone();
        if attrs.get("type").is_none() {
            attrs.set("type", "text");
        }
        attrs.set("id", css_id(&[Some(object), field]));
        attrs.set("name", field_name(object, field));
        attrs.set_opt("value", value.as_ref().and_then(ParamValue::as_text));
        void_tag("input", &attrs)
    }

    /// Password input.
    pub fn password(&self, object: &str, field: Option<&str>, attrs: &HtmlAttrs) -> String {
        self.input(object, field, &attrs.clone().with("type", "password"))
    }

    /// Hidden input.
    pub fn hidden(&self, object: &str, field: Option<&str>, attrs: &HtmlAttrs) -> String {
        self.input(object, field, &attrs.clone().with("type", "hidden"))
    }

    /// Multi-line text box, pre-filled with the submitted value or `content`.
    pub fn textarea(
        &self,
        object: &str,
        field: Option<&str>,
        content: &str,
        attrs: &HtmlAttrs,
    ) -> String {
        let value = self.resolve(object, field, Some(ParamValue::from(content)));
        let text = value.as_ref().and_then(ParamValue::as_text).unwrap_or_default();

        let mut attrs = attrs.clone();
        attrs.set("id", css_id(&[Some(object), field]));
        attrs.set("name", field_name(object, field));
        tag("textarea", Some(&escape_html(text)), &attrs)
    }

    /// Submit button.
    pub fn submit(&self, value: &str, attrs: &HtmlAttrs) -> String {
        button_tag("submit", value, attrs)
    }

    /// Reset button.
    pub fn reset(&self, value: &str, attrs: &HtmlAttrs) -> String {
        button_tag("reset", value, attrs)
    }

    /// General purpose button, usually wired up by scripts.
    pub fn button(&self, value: &str, attrs: &HtmlAttrs) -> String {
        button_tag("button", value, attrs)
    }
}

/// Button-like input whose `name` and `type` are both `kind`. Caller
/// attributes override the defaults.
fn button_tag(kind: &str, value: &str, attrs: &HtmlAttrs) -> String {
    let mut all = HtmlAttrs::new()
        .with("name", kind)
        .with("type", kind)
        .with("value", value)
        .with("id", css_id(&[Some("button"), Some(value)]));
    all.merge(attrs);
    void_tag("input", &all)
}
