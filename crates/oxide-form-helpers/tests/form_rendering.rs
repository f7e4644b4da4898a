//! Integration tests rendering whole forms.
//!
//! These tests drive the public helpers the way a request handler would:
//! build `Params` from a decoded request body, then render a form that
//! re-displays what was submitted.

use oxide_form_helpers::{
    choices, css_id, field_name, resolve_value, titleize, ChoiceOptions, Fieldset, FormError,
    FormHelpers, HtmlAttrs, ParamValue, Params,
};
use serde_json::json;

fn signup_params() -> Params {
    Params::from_json(json!({
        "person": {
            "first_name": "Ada",
            "email": "ada@example.com",
            "colors": ["red"],
            "plan": "pro",
            "notes": "likes \"engines\" & <math>"
        }
    }))
    .unwrap()
}

// =============================================================================
// Naming and resolution
// =============================================================================

#[test]
fn test_naming_convention() {
    assert_eq!(css_id(&[Some("Person"), Some("First Name")]), "person_first_name");
    assert_eq!(field_name("person", Some("first_name")), "person[first_name]");
    assert_eq!(field_name("person", None), "person");
    assert_eq!(titleize("first_name"), "First Name");
}

#[test]
fn test_resolution() {
    let params = signup_params();
    assert_eq!(
        resolve_value(&params, "person", Some("first_name"), Some("default".into())),
        Some(ParamValue::from("Ada"))
    );
    assert_eq!(
        resolve_value(&Params::new(), "person", Some("first_name"), Some("default".into())),
        Some(ParamValue::from("default"))
    );
}

// =============================================================================
// Full form
// =============================================================================

#[test]
fn test_signup_form_repopulates() {
    let params = signup_params();
    let h = FormHelpers::new(&params);

    let html = h
        .form("/signup", "post", &HtmlAttrs::new(), Some(&|h: &FormHelpers<'_>| {
            let details = h
                .fieldset("person", Some("Details"), Some(&|f: &Fieldset<'_>| {
                    [
                        f.label("first_name", None, &HtmlAttrs::new()),
                        f.input(Some("first_name"), &HtmlAttrs::new()),
                        f.label("email", Some("E-mail"), &HtmlAttrs::new()),
                        f.input(Some("email"), &HtmlAttrs::new().with("type", "email")),
                        f.password(Some("password"), &HtmlAttrs::new()),
                        f.textarea(Some("notes"), "", &HtmlAttrs::new()),
                    ]
                    .concat()
                }))
                .unwrap_or_default();
            let prefs = h.checkbox(
                "person",
                "colors",
                &choices(["red", "green"]),
                &ChoiceOptions::new(),
                &HtmlAttrs::new(),
            );
            let plan = h.select(
                "person",
                "plan",
                &choices([("free", "Free"), ("pro", "Pro")]),
                &HtmlAttrs::new(),
            );
            [details, prefs, plan, h.submit("Sign up", &HtmlAttrs::new())].concat()
        }))
        .unwrap();

    assert!(html.starts_with(r#"<form action="/signup" method="POST">"#));
    assert!(html.contains(r#"<legend>Details</legend>"#));
    assert!(html.contains(r#"name="person[first_name]" type="text" value="Ada""#));
    assert!(html.contains(r#"<label for="person_email">E-mail</label>"#));
    assert!(html.contains(r#"type="email" value="ada@example.com""#));
    assert!(html.contains(r#"<input id="person_password" name="person[password]" type="password" />"#));
    assert!(html.contains("likes &quot;engines&quot; &amp; &lt;math&gt;</textarea>"));
    assert!(html.contains(
        r#"<input checked="checked" id="person_colors_red" name="person[colors][]" type="checkbox" value="red" />"#
    ));
    assert!(html.contains(
        r#"<input id="person_colors_green" name="person[colors][]" type="checkbox" value="green" />"#
    ));
    assert!(html.contains(r#"<option selected="selected" value="pro">Pro</option>"#));
    assert!(html.contains(r#"id="button_sign_up""#));
    assert!(html.ends_with("</form>"));
}

#[test]
fn test_output_is_deterministic() {
    let params = signup_params();
    let h = FormHelpers::new(&params);
    let attrs = HtmlAttrs::new()
        .with("placeholder", "Your name")
        .with("class", "wide")
        .with("autocomplete", "off");
    let first = h.input("person", Some("first_name"), &attrs);
    let second = h.input("person", Some("first_name"), &attrs);
    assert_eq!(first, second);
    assert!(first.starts_with(r#"<input autocomplete="off" class="wide" id="person_first_name""#));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_fieldset_without_block_is_invalid_usage() {
    let params = Params::new();
    let h = FormHelpers::new(&params);
    match h.fieldset("person", Some("Details"), None) {
        Err(FormError::InvalidUsage(message)) => assert!(message.contains("fieldset")),
        other => panic!("Expected InvalidUsage, got {other:?}"),
    }
}
