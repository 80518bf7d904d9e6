use dioxus::prelude::*;

use crate::options::{OptionItem, OptionValue, option_label, option_tag};

pub fn tag_class(class: crate::options::ListClass) -> String {
    format!("tag tag-{}", class.as_str())
}

/// Chip showing the label and tag colour an option list assigns to `value`.
#[component]
pub fn OptionTag(options: Vec<OptionItem>, value: OptionValue) -> Element {
    let label = option_label(Some(options.as_slice()), &value).to_string();
    let class = tag_class(option_tag(Some(options.as_slice()), &value));

    rsx! {
        span { class: "{class}", {label} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ListClass;

    #[test]
    fn tag_class_uses_list_class_key() {
        assert_eq!(tag_class(ListClass::Warning), "tag tag-warning");
        assert_eq!(tag_class(ListClass::Default), "tag tag-default");
    }
}
