//! Account flow schemas: login, registration, password and email flows.

use forms_core::{Rule, Schema, SchemaBuilder};

/// Password bounds shared by every flow that sets a password.
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 128;

/// Login form: credentials only, no format check on the password.
pub fn login() -> Schema {
    SchemaBuilder::new()
        .field("email", vec![Rule::required(), Rule::email()])
        .field("password", vec![Rule::required()])
        .build()
        .expect("login schema is well-formed")
}

/// New customer registration.
pub fn registration() -> Schema {
    SchemaBuilder::new()
        .field(
            "email",
            vec![Rule::required(), Rule::email(), Rule::max_length(254)],
        )
        .field(
            "password",
            vec![
                Rule::required(),
                Rule::length(Some(PASSWORD_MIN), Some(PASSWORD_MAX)),
            ],
        )
        .field(
            "confirm_password",
            vec![Rule::equals_field("password").with_message("passwords do not match")],
        )
        .field(
            "first_name",
            vec![Rule::required(), Rule::length(Some(1), Some(80))],
        )
        .field(
            "last_name",
            vec![Rule::required(), Rule::length(Some(1), Some(80))],
        )
        .field("phone", vec![Rule::phone()])
        .build()
        .expect("registration schema is well-formed")
}

/// First step of the reset flow: where to send the reset link.
pub fn password_reset_request() -> Schema {
    SchemaBuilder::new()
        .field("email", vec![Rule::required(), Rule::email()])
        .build()
        .expect("password reset request schema is well-formed")
}

/// Second step of the reset flow: token plus the new password.
pub fn password_reset() -> Schema {
    SchemaBuilder::new()
        .field("token", vec![Rule::required()])
        .field(
            "password",
            vec![
                Rule::required(),
                Rule::length(Some(PASSWORD_MIN), Some(PASSWORD_MAX)),
            ],
        )
        .field(
            "confirm_password",
            vec![Rule::equals_field("password").with_message("passwords do not match")],
        )
        .build()
        .expect("password reset schema is well-formed")
}

/// Password change from the account settings page.
pub fn password_change() -> Schema {
    SchemaBuilder::new()
        .field("current_password", vec![Rule::required()])
        .field(
            "password",
            vec![
                Rule::required(),
                Rule::length(Some(PASSWORD_MIN), Some(PASSWORD_MAX)),
            ],
        )
        .field(
            "confirm_password",
            vec![Rule::equals_field("password").with_message("passwords do not match")],
        )
        .build()
        .expect("password change schema is well-formed")
}

/// Email verification: the six-digit code mailed to the customer.
pub fn email_verification() -> Schema {
    SchemaBuilder::new()
        .field(
            "code",
            vec![
                Rule::required(),
                Rule::length(Some(6), Some(6)).with_message("code must be {min} characters"),
            ],
        )
        .build()
        .expect("email verification schema is well-formed")
}
