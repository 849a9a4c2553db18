//! Checkout and address schemas.

use forms_core::{Rule, Schema, SchemaBuilder};

fn address_fields(builder: SchemaBuilder) -> SchemaBuilder {
    builder
        .field(
            "recipient",
            vec![Rule::required(), Rule::length(Some(1), Some(120))],
        )
        .field(
            "line1",
            vec![Rule::required(), Rule::length(Some(1), Some(120))],
        )
        .field("line2", vec![Rule::max_length(120)])
        .field(
            "city",
            vec![Rule::required(), Rule::length(Some(1), Some(80))],
        )
        .field(
            "postal_code",
            vec![Rule::required(), Rule::length(Some(3), Some(12))],
        )
        .field(
            "country",
            vec![
                Rule::required(),
                Rule::length(Some(2), Some(2)).with_message("use the two-letter country code"),
            ],
        )
        .field("phone", vec![Rule::phone()])
}

/// Standalone address form (address book entry in the account area).
pub fn shipping_address() -> Schema {
    address_fields(SchemaBuilder::new())
        .build()
        .expect("shipping address schema is well-formed")
}

/// Full checkout form: contact, delivery address, shipping method, consent.
pub fn checkout() -> Schema {
    address_fields(
        SchemaBuilder::new().field("email", vec![Rule::required(), Rule::email()]),
    )
    .field("shipping_method", vec![Rule::required()])
    .field(
        "accept_terms",
        vec![
            Rule::custom("terms_accepted", |value, _| {
                matches!(value, Some("1" | "true" | "on"))
            })
            .with_message("the terms of sale must be accepted"),
        ],
    )
    .build()
    .expect("checkout schema is well-formed")
}
