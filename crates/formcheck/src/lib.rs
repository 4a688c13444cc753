//! # formcheck
//!
//! Declarative validation of named form and query-string fields. Rules are
//! declared per field, checked once for syntax, and then evaluated against
//! submitted values; evaluation returns the message of the first rule that
//! fails.
//!
//! ## Example
//!
//! ```rust
//! use formcheck::prelude::*;
//!
//! let login = Validator::new()
//!     .required("email", "please input email!")
//!     .required("password", "please input password!")
//!     .email("email", "email format incorrect!")
//!     .string_range("password", "|6|16|", "password must have 6-16 characters")
//!     .check()
//!     .expect("login declarations");
//!
//! let mut form = FormValues::new();
//! form.append("email", "example@xmail.com");
//! assert_eq!(login.validate(&form), Some("please input password!"));
//!
//! form.append("password", "hunter22");
//! assert_eq!(login.validate(&form), None);
//! ```
//!
//! ## Rule Categories
//!
//! Categories are evaluated in this order; the first failure wins.
//!
//! - composed validators (see [`Validator::add_validator`])
//! - `required` - field must be present and non-empty
//! - `email` - non-empty field must be an email address
//! - `confirm` - two fields must hold the same value
//! - `slice_range` - number of submitted values, e.g. `"|1|5|"`
//! - `string_range` - character length, e.g. `"|6|16|"`
//! - `num_range` - integer value, e.g. `"18|60"`
//! - `min` / `max` - integer bound, e.g. `"|18|"`
//! - `regexp` - non-empty field must match a pattern
//!
//! ## Expressions
//!
//! A pipe on the outside of a number makes that bound inclusive: `|6|16|`
//! means `6 <= x <= 16`, `6|16` means `6 < x < 16`, `|18|` means `x >= 18`
//! for a `min` rule. See [`RangeExpr`] and [`NumberExpr`].

mod config;
mod error;
mod expr;
mod input;
mod traits;
mod validator;


pub use config::{MessageMap, NestedMap, ValidatorConfig};
pub use error::{DeclarationError, ExprError, Result, Violation};
pub use expr::{Bound, NumberExpr, RangeExpr};
pub use input::{FormValues, InputSet};
pub use traits::RuleSet;
pub use validator::{Category, CheckedValidator, Validator};

/// Prelude module for validation
pub mod prelude {
    pub use crate::config::ValidatorConfig;
    pub use crate::error::{DeclarationError, Violation};
    pub use crate::input::{FormValues, InputSet};
    pub use crate::traits::RuleSet;
    pub use crate::validator::{CheckedValidator, Validator};
}
