//! Input sets: the named, multi-valued fields a validator reads.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to submitted field values.
///
/// Implemented for the common multimap shapes a parsed query string or form
/// body ends up in. Only [`values`](InputSet::values) is required.
pub trait InputSet {
    /// All values submitted for `name`, or `None` when the field is absent.
    fn values(&self, name: &str) -> Option<&[String]>;

    /// The first value for `name`, or `""` when absent.
    fn get(&self, name: &str) -> &str {
        self.values(name)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl<S: BuildHasher> InputSet for HashMap<String, Vec<String>, S> {
    fn values(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl InputSet for BTreeMap<String, Vec<String>> {
    fn values(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl<T: InputSet + ?Sized> InputSet for &T {
    fn values(&self, name: &str) -> Option<&[String]> {
        (**self).values(name)
    }
}

/// An owned multimap of field values that remembers insertion order.
///
/// ```
/// use formcheck::{FormValues, InputSet};
///
/// let form: FormValues = [("tag", "a"), ("tag", "b"), ("name", "x")]
///     .into_iter()
///     .collect();
/// assert_eq!(form.get("tag"), "a");
/// assert_eq!(form.values("tag").map(<[String]>::len), Some(2));
/// assert_eq!(form.get("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    fields: Vec<(String, Vec<String>)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for `name`, keeping any existing values.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.fields[idx].1.push(value),
            None => self.fields.push((name, vec![value])),
        }
        self
    }

    /// Replace all values for `name` with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.fields[idx].1 = vec![value],
            None => self.fields.push((name, vec![value])),
        }
        self
    }

    /// Remove `name` and return its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        let idx = self.position(name)?;
        Some(self.fields.remove(idx).1)
    }

    /// Field names in the order they were first added.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n == name)
    }
}

impl InputSet for FormValues {
    fn values(&self, name: &str) -> Option<&[String]> {
        self.position(name).map(|idx| self.fields[idx].1.as_slice())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormValues::new();
        form.extend(iter);
        form
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for FormValues {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}
