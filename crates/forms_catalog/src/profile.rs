//! Profile editing schema.

use forms_core::{Rule, Schema, SchemaBuilder};

/// Account profile form: contact details, no password handling.
pub fn profile() -> Schema {
    SchemaBuilder::new()
        .field(
            "first_name",
            vec![Rule::required(), Rule::length(Some(1), Some(80))],
        )
        .field(
            "last_name",
            vec![Rule::required(), Rule::length(Some(1), Some(80))],
        )
        .field("email", vec![Rule::required(), Rule::email()])
        .field("phone", vec![Rule::phone()])
        .build()
        .expect("profile schema is well-formed")
}
