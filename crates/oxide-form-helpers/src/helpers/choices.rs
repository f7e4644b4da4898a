//! Checkbox groups, radio groups and selects.

use crate::choice::{Choice, ChoiceOptions};
use crate::markup::{escape_html, tag, void_tag, HtmlAttrs};
use crate::naming::{css_id, field_name};
use crate::params::ParamValue;

use super::FormHelpers;

impl FormHelpers<'_> {
    /// Checkbox input, or a checkbox group when several values are offered.
    ///
    /// With more than one value the name gets a `[]` suffix so every checked
    /// box is submitted. An item is checked when the submitted value includes
    /// its id or `options.checked` names it.
    pub fn checkbox(
        &self,
        object: &str,
        field: &str,
        values: &[Choice],
        options: &ChoiceOptions,
        attrs: &HtmlAttrs,
    ) -> String {
        let suffix = if values.len() > 1 { "[]" } else { "" };
        let name = format!("{}{suffix}", field_name(object, Some(field)));
        self.choice_group("checkbox", object, field, &name, values, options, attrs)
    }

    /// Radio button group. All buttons share one name.
    pub fn radio(
        &self,
        object: &str,
        field: &str,
        values: &[Choice],
        options: &ChoiceOptions,
        attrs: &HtmlAttrs,
    ) -> String {
        let name = field_name(object, Some(field));
        self.choice_group("radio", object, field, &name, values, options, attrs)
    }

    #[allow(clippy::too_many_arguments)]
    fn choice_group(
        &self,
        kind: &str,
        object: &str,
        field: &str,
        name: &str,
        values: &[Choice],
        options: &ChoiceOptions,
        attrs: &HtmlAttrs,
    ) -> String {
        let current = self.resolve(object, Some(field), None);

        values
            .iter()
            .map(|choice| {
                let id = choice.id();
                let checked = current.as_ref().is_some_and(|v| v.includes(id))
                    || options.is_checked(id);

                let mut item_attrs = attrs.clone();
                item_attrs.set("type", kind);
                item_attrs.set("id", css_id(&[Some(object), Some(field), Some(id)]));
                item_attrs.set("name", name);
                item_attrs.set("value", id);
                item_attrs.set_opt("checked", checked.then_some("checked"));

                let mut html = void_tag("input", &item_attrs);
                if options.show_label {
                    let label_field = format!("{field}_{}", id.to_lowercase());
                    html.push_str(&self.label(
                        object,
                        &label_field,
                        Some(choice.text()),
                        &HtmlAttrs::new(),
                    ));
                }
                html
            })
            .collect::<Vec<_>>()
            .join(&options.join)
    }

    /// Single-choice dropdown. A `value` attribute is the default selection
    /// when nothing was submitted.
    pub fn select(
        &self,
        object: &str,
        field: &str,
        values: &[Choice],
        attrs: &HtmlAttrs,
    ) -> String {
        let mut attrs = attrs.clone();
        let default = attrs.remove("value").map(ParamValue::from);
        let current = self.resolve(object, Some(field), default);
        let current = current
            .as_ref()
            .and_then(ParamValue::as_text)
            .unwrap_or_default();

        let options: String = values
            .iter()
            .map(|choice| {
                let option_attrs = HtmlAttrs::new()
                    .with("value", choice.id())
                    .with_opt("selected", (choice.id() == current).then_some("selected"));
                tag("option", Some(&escape_html(choice.text())), &option_attrs)
            })
            .collect();

        attrs.set("id", css_id(&[Some(object), Some(field)]));
        attrs.set("name", field_name(object, Some(field)));
        tag("select", Some(&options), &attrs)
    }
}
