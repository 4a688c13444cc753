//! The composition seam shared by every validator.

use std::fmt::Debug;
use std::sync::Arc;

use crate::input::InputSet;

/// Anything that can check an input set and report the first failure.
///
/// [`CheckedValidator`](crate::CheckedValidator) implements this, and so can
/// hand-written rule sets. Both can be composed into a parent validator with
/// [`Validator::add_validator`](crate::Validator::add_validator).
///
/// ## Example
///
/// ```rust
/// use formcheck::{InputSet, RuleSet};
///
/// #[derive(Debug)]
/// struct NoAdmin;
///
/// impl RuleSet for NoAdmin {
///     fn validate<'a>(&'a self, inputs: &dyn InputSet) -> Option<&'a str> {
///         (inputs.get("username") == "admin").then_some("username is reserved")
///     }
/// }
/// ```
pub trait RuleSet: Debug + Send + Sync {
    /// Returns the message of the first failed rule, or `None` if all pass.
    fn validate<'a>(&'a self, inputs: &dyn InputSet) -> Option<&'a str>;
}

impl<T: RuleSet + ?Sized> RuleSet for Arc<T> {
    fn validate<'a>(&'a self, inputs: &dyn InputSet) -> Option<&'a str> {
        (**self).validate(inputs)
    }
}

impl<T: RuleSet + ?Sized> RuleSet for Box<T> {
    fn validate<'a>(&'a self, inputs: &dyn InputSet) -> Option<&'a str> {
        (**self).validate(inputs)
    }
}
