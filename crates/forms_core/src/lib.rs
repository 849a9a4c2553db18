//! # Forms Core
//!
//! Core data structures for the form validation engine.
//!
//! This crate provides the building blocks for describing what a valid form
//! submission looks like. A form is described by a [`Schema`]: an ordered set
//! of fields, each carrying an ordered list of declarative [`Rule`]s.
//!
//! ## Key Concepts
//!
//! - **Rule**: one declarative constraint on a field's value (required,
//!   length bounds, email/phone format, cross-field equality, custom)
//! - **Schema**: the immutable, ordered per-field rule lists for one form,
//!   built via [`SchemaBuilder`] which checks internal consistency up front
//! - **ValueMap**: the concrete submitted values being checked, where an
//!   absent/null value is distinct from an empty string
//!
//! ## Example
//!
//! ```rust
//! use forms_core::{Rule, SchemaBuilder};
//!
//! let schema = SchemaBuilder::new()
//!     .field("email", vec![Rule::required(), Rule::email()])
//!     .field("password", vec![Rule::required(), Rule::length(Some(8), Some(128))])
//!     .field("confirm_password", vec![Rule::equals_field("password")])
//!     .build()
//!     .expect("schema is well-formed");
//!
//! assert_eq!(schema.len(), 3);
//! ```

pub mod builder;
pub mod error;
pub mod schema;
pub mod values;

pub use builder::*;
pub use error::*;
pub use schema::*;
pub use values::*;
