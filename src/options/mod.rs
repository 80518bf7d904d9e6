//! Option lists: labelled values with a visual tag class, plus the lookups
//! that turn a raw row value back into its label or tag.
//!
//! Values compare loosely: numbers and strings with the same printed form are
//! equal, so a row carrying `1` resolves against an option declared as `"1"`.

pub mod store;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const UNKNOWN_LABEL: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptionValue {
    /// Canonical string form used for loose comparison.
    pub fn loose_key(&self) -> Cow<'_, str> {
        match self {
            OptionValue::Int(n) => Cow::Owned(n.to_string()),
            OptionValue::Float(f) => Cow::Owned(format_float(*f)),
            OptionValue::Str(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// NaN and infinities never match anything, not even themselves.
    pub fn loosely_eq(&self, other: &OptionValue) -> bool {
        self.is_comparable() && other.is_comparable() && self.loose_key() == other.loose_key()
    }

    fn is_comparable(&self) -> bool {
        match self {
            OptionValue::Float(f) => f.is_finite(),
            _ => true,
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.loose_key())
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<&String> for OptionValue {
    fn from(value: &String) -> Self {
        OptionValue::Str(value.clone())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&OptionValue> for OptionValue {
    fn from(value: &OptionValue) -> Self {
        value.clone()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListClass {
    #[default]
    Default,
    Error,
    Primary,
    Info,
    Success,
    Warning,
}

impl ListClass {
    pub fn as_str(self) -> &'static str {
        match self {
            ListClass::Default => "default",
            ListClass::Error => "error",
            ListClass::Primary => "primary",
            ListClass::Info => "info",
            ListClass::Success => "success",
            ListClass::Warning => "warning",
        }
    }
}

impl fmt::Display for ListClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    pub label: String,
    pub value: OptionValue,
    pub key: OptionValue,
    #[serde(rename = "listClass", default)]
    pub list_class: ListClass,
}

impl OptionItem {
    pub fn new(label: &str, value: impl Into<OptionValue>, list_class: ListClass) -> Self {
        let value = value.into();
        Self {
            label: label.to_string(),
            key: value.clone(),
            value,
            list_class,
        }
    }
}

fn find_option<'a>(
    options: Option<&'a [OptionItem]>,
    value: &OptionValue,
) -> Option<&'a OptionItem> {
    options?.iter().find(|item| item.value.loosely_eq(value))
}

/// Label of the first option loosely matching `value`, or [`UNKNOWN_LABEL`].
pub fn option_label(options: Option<&[OptionItem]>, value: impl Into<OptionValue>) -> &str {
    find_option(options, &value.into())
        .map(|item| item.label.as_str())
        .unwrap_or(UNKNOWN_LABEL)
}

/// Tag class of the first option loosely matching `value`, or `default`.
pub fn option_tag(options: Option<&[OptionItem]>, value: impl Into<OptionValue>) -> ListClass {
    find_option(options, &value.into())
        .map(|item| item.list_class)
        .unwrap_or_default()
}

/// Named option lists, ordered by group name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionGroups {
    groups: BTreeMap<String, Vec<OptionItem>>,
}

impl OptionGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, options: Vec<OptionItem>) {
        self.groups.insert(name.to_string(), options);
    }

    pub fn group(&self, name: &str) -> Option<&[OptionItem]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[OptionItem])> {
        self.groups
            .iter()
            .map(|(name, options)| (name.as_str(), options.as_slice()))
    }

    pub fn label(&self, group: &str, value: impl Into<OptionValue>) -> &str {
        option_label(self.group(group), value)
    }

    pub fn tag(&self, group: &str, value: impl Into<OptionValue>) -> ListClass {
        option_tag(self.group(group), value)
    }
}
