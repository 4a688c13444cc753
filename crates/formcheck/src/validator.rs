//! Rule declaration and evaluation.

use regex::Regex;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{DeclarationError, ExprError, Result, Violation};
use crate::expr::{NumberExpr, RangeExpr};
use crate::input::InputSet;
use crate::traits::RuleSet;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"[0-9A-Za-z!#$%&'*+/=?^_`{|}~-]+(?:\.[0-9A-Za-z!#$%&'*+/=?^_`{|}~-]+)*@(?:[0-9A-Za-z_](?:[0-9A-Za-z_-]*[0-9A-Za-z_])?\.)+[0-9A-Za-z](?:[0-9A-Za-z_-]*[0-9A-Za-z_])?",
        )
        .unwrap()
    })
}

/// A kind of rule. Categories are always evaluated in the order listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Required,
    Email,
    Confirm,
    SliceRange,
    StringRange,
    NumRange,
    Min,
    Max,
    Regexp,
}

impl Category {
    /// Every category, in evaluation order.
    pub const ALL: [Category; 9] = [
        Category::Required,
        Category::Email,
        Category::Confirm,
        Category::SliceRange,
        Category::StringRange,
        Category::NumRange,
        Category::Min,
        Category::Max,
        Category::Regexp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Required => "required",
            Category::Email => "email",
            Category::Confirm => "confirm",
            Category::SliceRange => "slice_range",
            Category::StringRange => "string_range",
            Category::NumRange => "num_range",
            Category::Min => "min",
            Category::Max => "max",
            Category::Regexp => "regexp",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
struct FieldRule {
    field: String,
    message: String,
}

#[derive(Debug, Clone)]
struct ConfirmRule {
    field: String,
    other: String,
    message: String,
}

/// A rule whose constraint is an expression: raw text before the
/// declaration check, parsed afterwards.
#[derive(Debug, Clone)]
struct ExprRule<E> {
    field: String,
    expr: E,
    message: String,
}

#[derive(Debug, Clone)]
struct PatternRule {
    field: String,
    pattern: Regex,
    message: String,
}

/// Rule declarations for a set of form fields.
///
/// Declarations are collected with the builder methods and then checked once
/// with [`check`](Validator::check), which parses every range and number
/// expression and yields an immutable [`CheckedValidator`].
///
/// ## Example
///
/// ```rust
/// use formcheck::{FormValues, Validator};
///
/// let login = Validator::new()
///     .required("email", "please input email!")
///     .required("password", "please input password!")
///     .email("email", "email format incorrect!")
///     .string_range("password", "|6|16|", "password must have 6-16 characters")
///     .check()
///     .expect("login rules");
///
/// let form: FormValues = [("email", "x@y.com"), ("password", "abc")].into_iter().collect();
/// assert_eq!(
///     login.validate(&form),
///     Some("password must have 6-16 characters")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    required: Vec<FieldRule>,
    email: Vec<FieldRule>,
    confirm: Vec<ConfirmRule>,
    slice_range: Vec<ExprRule<String>>,
    string_range: Vec<ExprRule<String>>,
    num_range: Vec<ExprRule<String>>,
    min: Vec<ExprRule<String>>,
    max: Vec<ExprRule<String>>,
    regexp: Vec<PatternRule>,
    email_pattern: Option<Regex>,
    validators: Vec<Arc<dyn RuleSet>>,
}

impl Validator {
    /// Create a validator with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail when `field` is absent or its first value is empty.
    pub fn required(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.required.push(FieldRule {
            field: field.into(),
            message: message.into(),
        });
        self
    }

    /// Fail when `field` is non-empty and contains no email address.
    ///
    /// The built-in pattern is ASCII-only and unanchored, so
    /// `"Bob <bob@example.com>"` passes. Use [`Validator::email_pattern`]
    /// for a stricter check.
    pub fn email(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.email.push(FieldRule {
            field: field.into(),
            message: message.into(),
        });
        self
    }

    /// Fail when `field` and `other` hold different values.
    pub fn confirm(
        mut self,
        field: impl Into<String>,
        other: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.confirm.push(ConfirmRule {
            field: field.into(),
            other: other.into(),
            message: message.into(),
        });
        self
    }

    /// Bound the number of values submitted for `field` by a range expression.
    pub fn slice_range(
        mut self,
        field: impl Into<String>,
        range: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.slice_range.push(expr_rule(field, range, message));
        self
    }

    /// Bound the character length of `field` by a range expression.
    pub fn string_range(
        mut self,
        field: impl Into<String>,
        range: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.string_range.push(expr_rule(field, range, message));
        self
    }

    /// Bound the integer value of `field` by a range expression.
    pub fn num_range(
        mut self,
        field: impl Into<String>,
        range: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.num_range.push(expr_rule(field, range, message));
        self
    }

    /// Lower bound for the integer value of `field`, e.g. `"|18|"` for `>= 18`.
    pub fn min(
        mut self,
        field: impl Into<String>,
        number: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.min.push(expr_rule(field, number, message));
        self
    }

    /// Upper bound for the integer value of `field`, e.g. `"120"` for `< 120`.
    pub fn max(
        mut self,
        field: impl Into<String>,
        number: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.max.push(expr_rule(field, number, message));
        self
    }

    /// Fail when `field` is non-empty and does not match `pattern`.
    pub fn regexp(
        mut self,
        field: impl Into<String>,
        pattern: Regex,
        message: impl Into<String>,
    ) -> Self {
        self.regexp.push(PatternRule {
            field: field.into(),
            pattern,
            message: message.into(),
        });
        self
    }

    /// Replace the built-in email address pattern.
    pub fn email_pattern(mut self, pattern: Regex) -> Self {
        self.email_pattern = Some(pattern);
        self
    }

    /// Append a rule set that is checked before this validator's own rules.
    ///
    /// Rule sets run in the order they were added.
    pub fn add_validator(&mut self, validator: impl RuleSet + 'static) -> &mut Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Builder form of [`add_validator`](Validator::add_validator).
    pub fn with_validator(mut self, validator: impl RuleSet + 'static) -> Self {
        self.add_validator(validator);
        self
    }

    /// Number of rules declared directly on this validator.
    pub fn rule_count(&self) -> usize {
        self.required.len()
            + self.email.len()
            + self.confirm.len()
            + self.slice_range.len()
            + self.string_range.len()
            + self.num_range.len()
            + self.min.len()
            + self.max.len()
            + self.regexp.len()
    }

    /// Run the declaration check.
    ///
    /// Every range expression must look like `8|16`, `|8|16`, `8|16|` or
    /// `|8|16|` and every min/max expression like `8` or `|8|`. A malformed
    /// expression is a bug in the declaring code, so most callers run this
    /// once at startup and abort on error.
    pub fn check(self) -> Result<CheckedValidator> {
        let checked = self.parse_declarations().map_err(|err| {
            tracing::warn!(error = %err, "validator declaration rejected");
            err
        })?;

        tracing::debug!(
            rules = checked.rule_count(),
            required = checked.required.len(),
            ranges = checked.slice_range.len()
                + checked.string_range.len()
                + checked.num_range.len(),
            bounds = checked.min.len() + checked.max.len(),
            validators = checked.validators.len(),
            "validator declarations checked"
        );

        Ok(checked)
    }

    fn parse_declarations(self) -> Result<CheckedValidator> {
        Ok(CheckedValidator {
            slice_range: parse_rules(Category::SliceRange, self.slice_range, RangeExpr::parse)?,
            string_range: parse_rules(Category::StringRange, self.string_range, RangeExpr::parse)?,
            num_range: parse_rules(Category::NumRange, self.num_range, RangeExpr::parse)?,
            min: parse_rules(Category::Min, self.min, NumberExpr::parse)?,
            max: parse_rules(Category::Max, self.max, NumberExpr::parse)?,
            required: self.required,
            email: self.email,
            email_pattern: self
                .email_pattern
                .unwrap_or_else(|| email_regex().clone()),
            confirm: self.confirm,
            regexp: self.regexp,
            validators: self.validators,
        })
    }

    pub(crate) fn push_regexp_source(
        &mut self,
        field: String,
        pattern: &str,
        message: String,
    ) -> Result<()> {
        let pattern = Regex::new(pattern).map_err(|source| DeclarationError::Pattern {
            field: field.clone(),
            source,
        })?;
        self.regexp.push(PatternRule {
            field,
            pattern,
            message,
        });
        Ok(())
    }
}

fn expr_rule(
    field: impl Into<String>,
    expr: impl Into<String>,
    message: impl Into<String>,
) -> ExprRule<String> {
    ExprRule {
        field: field.into(),
        expr: expr.into(),
        message: message.into(),
    }
}

fn parse_rules<E>(
    category: Category,
    rules: Vec<ExprRule<String>>,
    parse: fn(&str) -> std::result::Result<E, ExprError>,
) -> Result<Vec<ExprRule<E>>> {
    rules
        .into_iter()
        .map(|rule| match parse(&rule.expr) {
            Ok(expr) => Ok(ExprRule {
                field: rule.field,
                expr,
                message: rule.message,
            }),
            Err(source) => Err(DeclarationError::Expr {
                category,
                field: rule.field,
                source,
            }),
        })
        .collect()
}

/// A validator whose declarations passed the check.
///
/// Immutable and `Send + Sync`; share it (for example in a `static` or an
/// `Arc`) and evaluate it from any number of threads.
#[derive(Debug, Clone)]
pub struct CheckedValidator {
    required: Vec<FieldRule>,
    email: Vec<FieldRule>,
    email_pattern: Regex,
    confirm: Vec<ConfirmRule>,
    slice_range: Vec<ExprRule<RangeExpr>>,
    string_range: Vec<ExprRule<RangeExpr>>,
    num_range: Vec<ExprRule<RangeExpr>>,
    min: Vec<ExprRule<NumberExpr>>,
    max: Vec<ExprRule<NumberExpr>>,
    regexp: Vec<PatternRule>,
    validators: Vec<Arc<dyn RuleSet>>,
}

impl CheckedValidator {
    /// Evaluate the rules and return the message of the first failure.
    ///
    /// Composed rule sets run first, in the order they were added; a failure
    /// there is returned without evaluating this validator's own rules. Own
    /// rules run category by category (see [`Category::ALL`]), in
    /// declaration order within a category.
    pub fn validate<'a>(&'a self, inputs: &dyn InputSet) -> Option<&'a str> {
        for validator in &self.validators {
            if let Some(message) = validator.validate(inputs).filter(|m| !m.is_empty()) {
                return Some(message);
            }
        }

        let (category, field, message) = self.first_failure(inputs)?;
        tracing::trace!(%category, field, "validation rule failed");
        Some(message)
    }

    /// Like [`validate`](CheckedValidator::validate), but as a `Result`.
    pub fn ensure(&self, inputs: &dyn InputSet) -> std::result::Result<(), Violation> {
        match self.validate(inputs) {
            Some(message) => Err(Violation::new(message)),
            None => Ok(()),
        }
    }

    /// Number of rules declared directly on this validator.
    pub fn rule_count(&self) -> usize {
        self.required.len()
            + self.email.len()
            + self.confirm.len()
            + self.slice_range.len()
            + self.string_range.len()
            + self.num_range.len()
            + self.min.len()
            + self.max.len()
            + self.regexp.len()
    }

    fn first_failure<'a>(&'a self, inputs: &dyn InputSet) -> Option<(Category, &'a str, &'a str)> {
        for rule in &self.required {
            if inputs.get(&rule.field).is_empty() {
                return Some((Category::Required, rule.field.as_str(), rule.message.as_str()));
            }
        }

        for rule in &self.email {
            let value = inputs.get(&rule.field);
            if !value.is_empty() && !self.email_pattern.is_match(value) {
                return Some((Category::Email, rule.field.as_str(), rule.message.as_str()));
            }
        }

        for rule in &self.confirm {
            if inputs.get(&rule.field) != inputs.get(&rule.other) {
                return Some((Category::Confirm, rule.field.as_str(), rule.message.as_str()));
            }
        }

        for rule in &self.slice_range {
            let Some(values) = inputs.values(&rule.field).filter(|v| !v.is_empty()) else {
                continue;
            };
            if !rule.expr.contains(saturating_len(values.len())) {
                return Some((Category::SliceRange, rule.field.as_str(), rule.message.as_str()));
            }
        }

        for rule in &self.string_range {
            let value = inputs.get(&rule.field);
            if !value.is_empty() && !rule.expr.contains(saturating_len(value.chars().count())) {
                return Some((Category::StringRange, rule.field.as_str(), rule.message.as_str()));
            }
        }

        for rule in &self.num_range {
            if !number_passes(inputs.get(&rule.field), |n| rule.expr.contains(n)) {
                return Some((Category::NumRange, rule.field.as_str(), rule.message.as_str()));
            }
        }

        for rule in &self.min {
            if !number_passes(inputs.get(&rule.field), |n| rule.expr.admits_at_least(n)) {
                return Some((Category::Min, rule.field.as_str(), rule.message.as_str()));
            }
        }

        for rule in &self.max {
            if !number_passes(inputs.get(&rule.field), |n| rule.expr.admits_at_most(n)) {
                return Some((Category::Max, rule.field.as_str(), rule.message.as_str()));
            }
        }

        for rule in &self.regexp {
            let value = inputs.get(&rule.field);
            if !value.is_empty() && !rule.pattern.is_match(value) {
                return Some((Category::Regexp, rule.field.as_str(), rule.message.as_str()));
            }
        }

        None
    }
}

impl RuleSet for CheckedValidator {
    fn validate<'a>(&'a self, inputs: &dyn InputSet) -> Option<&'a str> {
        CheckedValidator::validate(self, inputs)
    }
}

/// Empty values are skipped; anything that is not an integer fails.
fn number_passes(value: &str, admits: impl Fn(i64) -> bool) -> bool {
    if value.is_empty() {
        return true;
    }
    value.parse::<i64>().map(admits).unwrap_or(false)
}

fn saturating_len(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FormValues;

    fn form(pairs: &[(&str, &str)]) -> FormValues {
        pairs.iter().copied().collect()
    }

    #[test]
    fn required_fails_on_absent_or_empty() {
        let v = Validator::new()
            .required("a", "a is required")
            .required("b", "b is required")
            .check()
            .unwrap();

        assert_eq!(v.validate(&form(&[])), Some("a is required"));
        assert_eq!(v.validate(&form(&[("a", ""), ("b", "x")])), Some("a is required"));
        assert_eq!(v.validate(&form(&[("a", "x")])), Some("b is required"));
        assert_eq!(v.validate(&form(&[("a", "x"), ("b", "y")])), None);
    }

    #[test]
    fn email_skips_empty_values() {
        let v = Validator::new()
            .email("email", "bad email")
            .check()
            .unwrap();

        assert_eq!(v.validate(&form(&[("email", "not-an-email")])), Some("bad email"));
        assert_eq!(v.validate(&form(&[("email", "x@y.com")])), None);
        assert_eq!(v.validate(&form(&[("email", "")])), None);
        assert_eq!(v.validate(&form(&[])), None);
    }

    #[test]
    fn email_matches_ascii_addresses_anywhere_in_value() {
        let v = Validator::new()
            .email("email", "bad email")
            .check()
            .unwrap();

        assert_eq!(v.validate(&form(&[("email", "mailto:x@y.com")])), None);
        assert_eq!(v.validate(&form(&[("email", "Bob <bob@example.com>")])), None);
        assert_eq!(v.validate(&form(&[("email", "ü@y.com")])), Some("bad email"));
        assert_eq!(v.validate(&form(&[("email", "x@ÿ.com")])), Some("bad email"));
    }

    #[test]
    fn email_pattern_is_replaceable() {
        let v = Validator::new()
            .email("email", "corporate addresses only")
            .email_pattern(Regex::new(r"^[a-z.]+@corp\.example$").unwrap())
            .check()
            .unwrap();

        assert_eq!(
            v.validate(&form(&[("email", "x@y.com")])),
            Some("corporate addresses only")
        );
        assert_eq!(v.validate(&form(&[("email", "jane.doe@corp.example")])), None);
    }

    #[test]
    fn confirm_compares_first_values() {
        let v = Validator::new()
            .confirm("password", "confirmPassword", "passwords differ")
            .check()
            .unwrap();

        assert_eq!(
            v.validate(&form(&[("password", "x"), ("confirmPassword", "y")])),
            Some("passwords differ")
        );
        assert_eq!(
            v.validate(&form(&[("password", "x"), ("confirmPassword", "x")])),
            None
        );
        assert_eq!(v.validate(&form(&[("password", "x")])), Some("passwords differ"));
        assert_eq!(v.validate(&form(&[])), None);
    }

    #[test]
    fn slice_range_counts_values() {
        let v = Validator::new()
            .slice_range("tag", "|2|3|", "pick 2 to 3 tags")
            .check()
            .unwrap();

        assert_eq!(v.validate(&form(&[("tag", "a")])), Some("pick 2 to 3 tags"));
        assert_eq!(v.validate(&form(&[("tag", "a"), ("tag", "b")])), None);
        assert_eq!(
            v.validate(&form(&[("tag", "a"), ("tag", "b"), ("tag", "c"), ("tag", "d")])),
            Some("pick 2 to 3 tags")
        );
        // absent fields are left to `required`
        assert_eq!(v.validate(&form(&[])), None);
    }

    #[test]
    fn string_range_counts_characters() {
        let v = Validator::new()
            .string_range("password", "|6|16|", "6-16 characters")
            .check()
            .unwrap();

        assert_eq!(v.validate(&form(&[("password", "abc")])), Some("6-16 characters"));
        assert_eq!(v.validate(&form(&[("password", "abcdef")])), None);
        assert_eq!(v.validate(&form(&[("password", "ñññññß")])), None);
        assert_eq!(v.validate(&form(&[("password", "")])), None);
    }

    #[test]
    fn num_range_rejects_non_numbers() {
        let v = Validator::new()
            .num_range("age", "18|60", "age out of range")
            .check()
            .unwrap();

        assert_eq!(v.validate(&form(&[("age", "18")])), Some("age out of range"));
        assert_eq!(v.validate(&form(&[("age", "19")])), None);
        assert_eq!(v.validate(&form(&[("age", "60")])), Some("age out of range"));
        assert_eq!(v.validate(&form(&[("age", "abc")])), Some("age out of range"));
        assert_eq!(v.validate(&form(&[("age", "")])), None);
    }

    #[test]
    fn min_and_max() {
        let v = Validator::new()
            .min("age", "|18|", "too young")
            .max("age", "120", "too old")
            .check()
            .unwrap();

        assert_eq!(v.validate(&form(&[("age", "17")])), Some("too young"));
        assert_eq!(v.validate(&form(&[("age", "18")])), None);
        assert_eq!(v.validate(&form(&[("age", "abc")])), Some("too young"));
        assert_eq!(v.validate(&form(&[("age", "119")])), None);
        assert_eq!(v.validate(&form(&[("age", "120")])), Some("too old"));
        assert_eq!(v.validate(&form(&[("age", "-5")])), Some("too young"));
    }

    #[test]
    fn max_rejects_non_numbers() {
        let v = Validator::new()
            .max("age", "|10|", "at most 10")
            .check()
            .unwrap();

        assert_eq!(v.validate(&form(&[("age", "10")])), None);
        assert_eq!(v.validate(&form(&[("age", "11")])), Some("at most 10"));
        assert_eq!(v.validate(&form(&[("age", "abc")])), Some("at most 10"));
        assert_eq!(v.validate(&form(&[("age", "")])), None);
    }

    #[test]
    fn regexp_skips_empty_values() {
        let v = Validator::new()
            .regexp("password", Regex::new(r"^\w+$").unwrap(), "alphanumeric only")
            .check()
            .unwrap();

        assert_eq!(v.validate(&form(&[("password", "a b")])), Some("alphanumeric only"));
        assert_eq!(v.validate(&form(&[("password", "a_b")])), None);
        assert_eq!(v.validate(&form(&[("password", "")])), None);
    }

    #[test]
    fn categories_run_in_fixed_order() {
        // declared in reverse category order on purpose
        let v = Validator::new()
            .regexp("name", Regex::new(r"^\d+$").unwrap(), "regexp")
            .max("age", "|30|", "max")
            .min("age", "|20|", "min")
            .num_range("count", "|1|5|", "num_range")
            .string_range("name", "|10|20|", "string_range")
            .slice_range("name", "|2|3|", "slice_range")
            .confirm("name", "other", "confirm")
            .email("name", "email")
            .required("missing", "required")
            .check()
            .unwrap();

        let mut inputs = form(&[("name", "bob"), ("age", "15"), ("count", "9")]);
        assert_eq!(v.validate(&inputs), Some("required"));
        inputs.set("missing", "present");
        assert_eq!(v.validate(&inputs), Some("email"));
        inputs.set("name", "b@e.co");
        assert_eq!(v.validate(&inputs), Some("confirm"));
        inputs.set("other", "b@e.co");
        assert_eq!(v.validate(&inputs), Some("slice_range"));
        inputs.append("name", "second");
        assert_eq!(v.validate(&inputs), Some("string_range"));
        inputs.set("name", "bob@example.com").append("name", "second");
        inputs.set("other", "bob@example.com");
        assert_eq!(v.validate(&inputs), Some("num_range"));
        inputs.set("count", "3");
        assert_eq!(v.validate(&inputs), Some("min"));
        inputs.set("age", "35");
        assert_eq!(v.validate(&inputs), Some("max"));
        inputs.set("age", "25");
        assert_eq!(v.validate(&inputs), Some("regexp"));
        inputs.set("name", "12345678901").append("name", "second");
        inputs.set("other", "12345678901");
        assert_eq!(v.validate(&inputs), Some("email"));
    }

    #[test]
    fn within_category_declaration_order_wins() {
        let v = Validator::new()
            .required("b", "b first")
            .required("a", "a second")
            .check()
            .unwrap();
        assert_eq!(v.validate(&form(&[])), Some("b first"));
    }

    #[test]
    fn sub_validator_failure_short_circuits() {
        let inner = Validator::new()
            .required("token", "token missing")
            .check()
            .unwrap();
        let outer = Validator::new()
            .required("name", "name missing")
            .with_validator(inner)
            .check()
            .unwrap();

        assert_eq!(outer.validate(&form(&[])), Some("token missing"));
        assert_eq!(outer.validate(&form(&[("token", "t")])), Some("name missing"));
        assert_eq!(outer.validate(&form(&[("token", "t"), ("name", "n")])), None);
    }

    #[test]
    fn sub_validators_run_in_add_order() {
        let first = Validator::new().required("a", "first").check().unwrap();
        let second = Validator::new().required("a", "second").check().unwrap();

        let mut outer = Validator::new();
        outer.add_validator(first).add_validator(second);
        let outer = outer.check().unwrap();

        assert_eq!(outer.validate(&form(&[])), Some("first"));
    }

    #[test]
    fn malformed_declarations_are_rejected() {
        let err = Validator::new()
            .string_range("password", "6-16", "bad")
            .check()
            .unwrap_err();
        assert!(matches!(
            err,
            DeclarationError::Expr {
                category: Category::StringRange,
                source: ExprError::RangeSyntax(_),
                ..
            }
        ));

        let err = Validator::new().max("age", "|18", "bad").check().unwrap_err();
        assert_eq!(err.field(), Some("age"));
        assert!(matches!(
            err,
            DeclarationError::Expr {
                category: Category::Max,
                ..
            }
        ));
    }

    #[test]
    fn ensure_wraps_message() {
        let v = Validator::new().required("a", "a missing").check().unwrap();
        assert_eq!(v.ensure(&form(&[])), Err(Violation::new("a missing")));
        assert!(v.ensure(&form(&[("a", "1")])).is_ok());
    }

    #[test]
    fn rule_count_excludes_sub_validators() {
        let inner = Validator::new().required("x", "x").check().unwrap();
        let v = Validator::new()
            .required("a", "a")
            .min("n", "1", "n")
            .with_validator(inner);
        assert_eq!(v.rule_count(), 2);
        assert_eq!(v.check().unwrap().rule_count(), 2);
    }

    #[test]
    fn category_names() {
        let names: Vec<_> = Category::ALL.iter().map(Category::name).collect();
        assert_eq!(
            names,
            [
                "required",
                "email",
                "confirm",
                "slice_range",
                "string_range",
                "num_range",
                "min",
                "max",
                "regexp"
            ]
        );
        assert_eq!(Category::NumRange.to_string(), "num_range");
    }
}
