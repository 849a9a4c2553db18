//! # Forms Catalog
//!
//! Built-in schemas for the storefront and back-office forms: account flows
//! (login, registration, password reset/change, email verification),
//! checkout and address entry, and profile editing.
//!
//! Each schema is a plain function returning a built
//! [`Schema`](forms_core::Schema); [`builtin`] looks one up by name for
//! callers that receive the form name at runtime (the CLI, a routing layer).
//!
//! ## Example
//!
//! ```rust
//! let schema = forms_catalog::account::login();
//! assert!(schema.contains("email"));
//! assert!(schema.contains("password"));
//! ```

pub mod account;
pub mod checkout;
pub mod profile;

use forms_core::Schema;

/// Names of all built-in forms, in catalog order.
pub const BUILTIN_FORMS: &[&str] = &[
    "login",
    "registration",
    "password_reset_request",
    "password_reset",
    "password_change",
    "email_verification",
    "checkout",
    "shipping_address",
    "profile",
];

/// Looks up a built-in form schema by name.
pub fn builtin(name: &str) -> Option<Schema> {
    match name {
        "login" => Some(account::login()),
        "registration" => Some(account::registration()),
        "password_reset_request" => Some(account::password_reset_request()),
        "password_reset" => Some(account::password_reset()),
        "password_change" => Some(account::password_change()),
        "email_verification" => Some(account::email_verification()),
        "checkout" => Some(checkout::checkout()),
        "shipping_address" => Some(checkout::shipping_address()),
        "profile" => Some(profile::profile()),
        _ => None,
    }
}
