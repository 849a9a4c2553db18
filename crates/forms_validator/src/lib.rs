//! # Forms Validator
//!
//! Validation engine for form schemas. This crate executes a
//! [`Schema`](forms_core::Schema) against the [`ValueMap`](forms_core::ValueMap)
//! of one submission and produces a [`ValidationResult`] with field-scoped,
//! ordered error messages:
//!
//! - every rule of every field is evaluated exactly once per call
//!   (collect-all, no short-circuiting)
//! - fields report in schema-declaration order, messages in rule order
//! - a field whose rules all pass is absent from the result
//!
//! Validation failure is data, never an error: [`validate`] always completes
//! and cannot itself fail given a built schema.
//!
//! ## Example
//!
//! ```rust
//! use forms_core::{Rule, SchemaBuilder, ValueMap};
//! use forms_validator::validate;
//!
//! let schema = SchemaBuilder::new()
//!     .field("email", vec![Rule::required(), Rule::email()])
//!     .build()
//!     .unwrap();
//!
//! let mut values = ValueMap::new();
//! values.set("email", "not-an-address");
//!
//! let result = validate(&schema, &values);
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.errors_for("email"),
//!     Some(&["must be a valid email address".to_string()][..])
//! );
//! ```

mod engine;
mod message;
mod report;
mod rules;

pub use engine::*;
pub use report::*;
