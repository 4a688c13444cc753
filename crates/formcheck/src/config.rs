//! Loading rule declarations from configuration data.
//!
//! The layout mirrors the rule categories, keyed by input name:
//!
//! ```json
//! {
//!   "required": { "email": "please input email!" },
//!   "email": { "email": "email format incorrect!" },
//!   "confirm": { "password": { "confirmPassword": "passwords differ" } },
//!   "string_range": { "password": { "|6|16|": "password must have 6-16 characters" } },
//!   "min": { "age": { "|18|": "you must be 18 or older" } },
//!   "regexp": { "password": { "alphanumeric only": "^\\w+$" } }
//! }
//! ```
//!
//! Maps are ordered by key, so rules loaded from configuration are evaluated
//! in sorted field order within each category.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{DeclarationError, Result};
use crate::validator::Validator;

/// `{field: message}`
pub type MessageMap = BTreeMap<String, String>;

/// `{field: {expression: message}}`, or `{field: {message: pattern}}` for regexp rules.
pub type NestedMap = BTreeMap<String, BTreeMap<String, String>>;

/// Serializable rule declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub required: MessageMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub email: MessageMap,
    /// `{field: {other_field: message}}`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub confirm: NestedMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub slice_range: NestedMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub string_range: NestedMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub num_range: NestedMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub min: NestedMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub max: NestedMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub regexp: NestedMap,
    /// Overrides the built-in email pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_pattern: Option<String>,
}

impl ValidatorConfig {
    /// Parse declarations from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Compile the declarations into an unchecked [`Validator`].
    ///
    /// Regex patterns are compiled here; range and number expressions are
    /// still left to [`Validator::check`].
    pub fn into_validator(self) -> Result<Validator> {
        Validator::try_from(self)
    }
}

impl TryFrom<ValidatorConfig> for Validator {
    type Error = DeclarationError;

    fn try_from(config: ValidatorConfig) -> Result<Self> {
        let mut validator = Validator::new();

        for (field, message) in config.required {
            validator = validator.required(field, message);
        }
        for (field, message) in config.email {
            validator = validator.email(field, message);
        }
        for (field, others) in config.confirm {
            for (other, message) in others {
                validator = validator.confirm(field.clone(), other, message);
            }
        }
        for (field, exprs) in config.slice_range {
            for (expr, message) in exprs {
                validator = validator.slice_range(field.clone(), expr, message);
            }
        }
        for (field, exprs) in config.string_range {
            for (expr, message) in exprs {
                validator = validator.string_range(field.clone(), expr, message);
            }
        }
        for (field, exprs) in config.num_range {
            for (expr, message) in exprs {
                validator = validator.num_range(field.clone(), expr, message);
            }
        }
        for (field, exprs) in config.min {
            for (expr, message) in exprs {
                validator = validator.min(field.clone(), expr, message);
            }
        }
        for (field, exprs) in config.max {
            for (expr, message) in exprs {
                validator = validator.max(field.clone(), expr, message);
            }
        }
        for (field, patterns) in config.regexp {
            for (message, pattern) in patterns {
                validator.push_regexp_source(field.clone(), &pattern, message)?;
            }
        }
        if let Some(pattern) = config.email_pattern {
            let pattern = Regex::new(&pattern).map_err(DeclarationError::EmailPattern)?;
            validator = validator.email_pattern(pattern);
        }

        Ok(validator)
    }
}
