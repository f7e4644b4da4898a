//! Fieldsets and the object-bound helper proxy they hand to their block.

use tracing::debug;

use crate::choice::{Choice, ChoiceOptions};
use crate::error::{FormError, Result};
use crate::helpers::FormHelpers;
use crate::markup::{escape_html, HtmlAttrs};
use crate::naming::fieldset_name;

/// Field helpers with the object name already bound.
///
/// Handed to the block of [`FormHelpers::fieldset`] so fields inside a
/// fieldset only name their field.
#[derive(Debug, Clone)]
pub struct Fieldset<'p> {
    helpers: FormHelpers<'p>,
    object: String,
}

impl<'p> Fieldset<'p> {
    /// Binds `object` (with non-word characters stripped) to `helpers`.
    pub fn new(helpers: FormHelpers<'p>, object: &str) -> Self {
        Self {
            helpers,
            object: fieldset_name(object),
        }
    }

    /// The bound object name.
    pub fn object(&self) -> &str {
        &self.object
    }

    /// See [`FormHelpers::label`].
    pub fn label(&self, field: &str, display: Option<&str>, attrs: &HtmlAttrs) -> String {
        self.helpers.label(&self.object, field, display, attrs)
    }

    /// See [`FormHelpers::input`].
    pub fn input(&self, field: Option<&str>, attrs: &HtmlAttrs) -> String {
        self.helpers.input(&self.object, field, attrs)
    }

    /// See [`FormHelpers::password`].
    pub fn password(&self, field: Option<&str>, attrs: &HtmlAttrs) -> String {
        self.helpers.password(&self.object, field, attrs)
    }

    /// See [`FormHelpers::hidden`].
    pub fn hidden(&self, field: Option<&str>, attrs: &HtmlAttrs) -> String {
        self.helpers.hidden(&self.object, field, attrs)
    }

    /// See [`FormHelpers::textarea`].
    pub fn textarea(&self, field: Option<&str>, content: &str, attrs: &HtmlAttrs) -> String {
        self.helpers.textarea(&self.object, field, content, attrs)
    }

    /// See [`FormHelpers::checkbox`].
    pub fn checkbox(
        &self,
        field: &str,
        values: &[Choice],
        options: &ChoiceOptions,
        attrs: &HtmlAttrs,
    ) -> String {
        self.helpers
            .checkbox(&self.object, field, values, options, attrs)
    }

    /// See [`FormHelpers::radio`].
    pub fn radio(
        &self,
        field: &str,
        values: &[Choice],
        options: &ChoiceOptions,
        attrs: &HtmlAttrs,
    ) -> String {
        self.helpers.radio(&self.object, field, values, options, attrs)
    }

    /// See [`FormHelpers::select`].
    pub fn select(&self, field: &str, values: &[Choice], attrs: &HtmlAttrs) -> String {
        self.helpers.select(&self.object, field, values, attrs)
    }
}

impl<'p> FormHelpers<'p> {
    /// Groups fields for `object` in a `<fieldset>`, with an optional
    /// escaped `<legend>`.
    ///
    /// The block builds the content from a [`Fieldset`] bound to `object`.
    /// Calling this without a block is an `InvalidUsage` error.
    pub fn fieldset(
        &self,
        object: &str,
        legend: Option<&str>,
        block: Option<&dyn Fn(&Fieldset<'p>) -> String>,
    ) -> Result<String> {
        let Some(block) = block else {
            debug!(object, "fieldset() called without a block");
            return Err(FormError::invalid_usage("missing block to fieldset()"));
        };

        let content = block(&Fieldset::new(*self, object));
        let legend = legend
            .map(|legend| format!("<legend>{}</legend>", escape_html(legend)))
            .unwrap_or_default();
        Ok(format!("<fieldset>{legend}{content}</fieldset>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::choices;
    use crate::params::Params;
    use serde_json::json;

    #[test]
    fn test_fieldset_without_block() {
        let params = Params::new();
        let h = FormHelpers::new(&params);
        let err = h.fieldset("person", None, None).unwrap_err();
        assert!(matches!(err, FormError::InvalidUsage(_)));
    }

    #[test]
    fn test_fieldset_binds_object() {
        let params = Params::from_json(json!({"person": {"first_name": "Ada"}})).unwrap();
        let h = FormHelpers::new(&params);
        let html = h
            .fieldset(
                "person",
                Some("Who <you> are"),
                Some(&|f: &Fieldset<'_>| {
                    f.label("first_name", None, &HtmlAttrs::new())
                        + &f.input(Some("first_name"), &HtmlAttrs::new())
                }),
            )
            .unwrap();
        assert_eq!(
            html,
            concat!(
                "<fieldset><legend>Who &lt;you&gt; are</legend>",
                r#"<label for="person_first_name">First Name</label>"#,
                r#"<input id="person_first_name" name="person[first_name]" type="text" value="Ada" />"#,
                "</fieldset>",
            )
        );
    }

    #[test]
    fn test_fieldset_without_legend() {
        let params = Params::new();
        let h = FormHelpers::new(&params);
        let html = h
            .fieldset("person", None, Some(&|_: &Fieldset<'_>| String::new()))
            .unwrap();
        assert_eq!(html, "<fieldset></fieldset>");
    }

    #[test]
    fn test_fieldset_strips_object_name() {
        let params = Params::new();
        let h = FormHelpers::new(&params);
        let fieldset = Fieldset::new(h, "my-person!");
        assert_eq!(fieldset.object(), "myperson");
        assert!(fieldset
            .select("size", &choices(["s", "m"]), &HtmlAttrs::new())
            .contains(r#"name="myperson[size]""#));
        assert!(fieldset
            .radio("size", &choices(["s", "m"]), &ChoiceOptions::new(), &HtmlAttrs::new())
            .contains(r#"id="myperson_size_m""#));
    }
}
