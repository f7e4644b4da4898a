//! # oxide-form-helpers
//!
//! HTML form helpers for request handlers.
//!
//! This crate provides:
//! - Escaping and deterministic attribute rendering
//! - `id`/`name` derivation from the `object[field]` naming convention
//! - Re-population of fields from submitted parameters
//! - Labels, inputs, textareas, buttons, checkbox and radio groups, selects
//! - Fieldsets with an object-bound helper proxy
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_form_helpers::{FormHelpers, HtmlAttrs, Params};
//!
//! let params = Params::from_json(serde_json::json!({
//!     "person": {"first_name": "Ada"}
//! }))
//! .unwrap();
//! let h = FormHelpers::new(&params);
//!
//! assert_eq!(
//!     h.label("person", "first_name", None, &HtmlAttrs::new()),
//!     r#"<label for="person_first_name">First Name</label>"#
//! );
//! assert_eq!(
//!     h.input("person", Some("first_name"), &HtmlAttrs::new()),
//!     r#"<input id="person_first_name" name="person[first_name]" type="text" value="Ada" />"#
//! );
//! ```
//!
//! ## Choice Groups
//!
//! ```rust
//! use oxide_form_helpers::{choices, ChoiceOptions, FormHelpers, HtmlAttrs, Params};
//!
//! let params = Params::new();
//! let h = FormHelpers::new(&params);
//! let html = h.checkbox(
//!     "person",
//!     "colors",
//!     &choices(["red", "blue"]),
//!     &ChoiceOptions::new().checked(["red"]).label(false),
//!     &HtmlAttrs::new(),
//! );
//! assert!(html.contains(r#"checked="checked" id="person_colors_red""#));
//! assert!(html.contains(r#"name="person[colors][]""#));
//! ```
//!
//! ## Fieldsets
//!
//! ```rust
//! use oxide_form_helpers::{Fieldset, FormHelpers, HtmlAttrs, Params};
//!
//! let params = Params::new();
//! let h = FormHelpers::new(&params);
//! let html = h
//!     .fieldset(
//!         "person",
//!         Some("Details"),
//!         Some(&|f: &Fieldset<'_>| f.textarea(Some("notes"), "", &HtmlAttrs::new())),
//!     )
//!     .unwrap();
//! assert!(html.starts_with("<fieldset><legend>Details</legend><textarea"));
//! ```

pub mod choice;
mod error;
mod fieldset;
mod helpers;
pub mod markup;
pub mod naming;
pub mod params;

pub use choice::{choices, Choice, ChoiceOptions};
pub use error::{FormError, Result};
pub use fieldset::Fieldset;
pub use helpers::FormHelpers;
pub use markup::{escape_html, tag, void_tag, HtmlAttrs};
pub use naming::{css_id, field_name, titleize};
pub use params::{resolve_value, ParamSource, ParamValue, Params};
