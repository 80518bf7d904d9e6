use std::path::{Path, PathBuf};

use dioxus::prelude::*;

use crate::options::store::{
    default_option_groups, load_option_groups_from, save_option_groups_to,
};
use crate::options::{OptionGroups, OptionValue};
use crate::settings;
use crate::ui::dialog::use_adaptive_dialog_width;
use crate::ui::fallback_image::FallbackImage;
use crate::ui::option_tag::{OptionTag, tag_class};

const DEFAULT_PREVIEW_SRC: &str = "https://example.invalid/avatar.png";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionsState {
    pub options_path: Option<PathBuf>,
    pub groups: OptionGroups,
    pub error: Option<String>,
}

impl OptionsState {
    pub fn refresh() -> Self {
        let panel_settings = settings::load_settings().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "settings unavailable, using defaults");
            settings::PanelSettings::default()
        });

        match panel_settings.options_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::error!(error = %e, "cannot resolve options file");
                Self {
                    error: Some(e.to_string()),
                    groups: default_option_groups(),
                    ..Default::default()
                }
            }
        }
    }

    /// A file that fails to load leaves no path behind, so Save cannot
    /// replace it with an empty group set.
    pub fn load_from(path: &Path) -> Self {
        match load_option_groups_from(path) {
            Ok(groups) => Self {
                options_path: Some(path.to_path_buf()),
                groups,
                error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "cannot load option groups");
                Self {
                    error: Some(e.to_string()),
                    ..Default::default()
                }
            }
        }
    }

    pub fn can_save(&self) -> bool {
        self.options_path.is_some() && self.error.is_none()
    }
}

/// Typed text is looked up verbatim; loose comparison already lets `"1"`
/// match a numeric option.
pub fn lookup_value_from_input(raw: &str) -> OptionValue {
    OptionValue::Str(raw.to_string())
}

#[component]
pub fn options_panel(options_state: Signal<OptionsState>) -> Element {
    let mut lookup_group = use_signal(String::new);
    let mut lookup_value = use_signal(String::new);
    let mut show_preview = use_signal(|| false);
    let mut preview_src = use_signal(|| DEFAULT_PREVIEW_SRC.to_string());
    let mut info: Signal<Option<String>> = use_signal(|| None::<String>);
    let dialog_width = use_adaptive_dialog_width();

    let state = options_state();
    let group_names: Vec<String> = state.groups.names().map(str::to_string).collect();

    let selected_group = if lookup_group().is_empty() {
        group_names.first().cloned().unwrap_or_default()
    } else {
        lookup_group()
    };
    let options_path = state.options_path.as_ref().map(|p| p.display().to_string());
    let width_css = dialog_width().to_string();
    let preview = preview_src();
    let value = lookup_value_from_input(&lookup_value());
    let can_save = state.can_save();
    let lookup_label = state.groups.label(&selected_group, &value).to_string();
    let lookup_class = tag_class(state.groups.tag(&selected_group, &value));

    rsx! {
        div { class: "section",
            div { class: "lookup-form",
                button {
                    onclick: move |_| {
                        options_state.set(OptionsState::refresh());
                        info.set(None);
                    },
                    "Reload"
                }
                button {
                    disabled: !can_save,
                    onclick: move |_| {
                        let current = options_state();
                        if !current.can_save() {
                            return;
                        }
                        let Some(path) = current.options_path.clone() else {
                            return;
                        };
                        match save_option_groups_to(&path, &current.groups) {
                            Ok(()) => {
                                tracing::info!(path = %path.display(), "wrote options file");
                                info.set(Some(format!("saved to {}", path.display())));
                            }
                            Err(e) => info.set(Some(e.to_string())),
                        }
                    },
                    "Save options file"
                }
                button {
                    class: "primary",
                    onclick: move |_| show_preview.set(true),
                    "Preview"
                }
            }

            if let Some(path) = options_path {
                p { class: "status status-info", "options file: {path}" }
            }
            if let Some(message) = state.error.clone() {
                p { class: "status status-error", {message} }
            }
            if let Some(message) = info() {
                p { class: "status status-info", {message} }
            }
        }

        div { class: "section",
            h2 { "Lookup" }
            div { class: "lookup-form",
                select {
                    value: "{selected_group}",
                    onchange: move |evt| lookup_group.set(evt.value()),
                    for name in group_names.iter() {
                        option { value: "{name}", "{name}" }
                    }
                }
                input {
                    r#type: "text",
                    value: lookup_value(),
                    placeholder: "value",
                    oninput: move |evt| lookup_value.set(evt.value())
                }
                span { class: "{lookup_class}", {lookup_label} }
            }
        }

        for (name, options) in state.groups.iter() {
            div { class: "section",
                h2 { "{name}" }
                table { class: "group-table",
                    tr {
                        th { "value" }
                        th { "key" }
                        th { "tag" }
                    }
                    for option in options.iter() {
                        tr {
                            td { {option.value.to_string()} }
                            td { {option.key.to_string()} }
                            td {
                                OptionTag {
                                    options: options.to_vec(),
                                    value: option.value.clone()
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_preview() {
            div { class: "modal-backdrop", onclick: move |_| show_preview.set(false),
                div {
                    class: "modal",
                    style: "width: {width_css}",
                    onclick: move |evt| evt.stop_propagation(),
                    div { class: "modal-header",
                        h3 { "Image preview" }
                        p { class: "muted", "dialog width: {width_css}" }
                    }
                    div { class: "modal-body",
                        input {
                            r#type: "text",
                            value: "{preview}",
                            oninput: move |evt| preview_src.set(evt.value())
                        }
                        FallbackImage {
                            key: "{preview}",
                            src: preview.clone(),
                            class: "preview-image".to_string(),
                            alt: "preview".to_string()
                        }
                    }
                    div { class: "modal-actions",
                        button { onclick: move |_| show_preview.set(false), "Close" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::store::OPTIONS_FILE_NAME;
    use crate::options::{ListClass, OptionItem};

    fn code_groups() -> OptionGroups {
        let mut groups = OptionGroups::new();
        groups.insert(
            "code",
            vec![
                OptionItem::new("Agent", "007", ListClass::Primary),
                OptionItem::new("Price", "1.50", ListClass::Info),
                OptionItem::new("Level", 3, ListClass::Warning),
            ],
        );
        groups
    }

    #[test]
    fn typed_text_resolves_verbatim_string_values() {
        let groups = code_groups();
        assert_eq!(groups.label("code", lookup_value_from_input("007")), "Agent");
        assert_eq!(groups.label("code", lookup_value_from_input("1.50")), "Price");
        assert_eq!(groups.tag("code", lookup_value_from_input("1.50")), ListClass::Info);
        assert_eq!(groups.label("code", lookup_value_from_input("7")), "unknown");
    }

    #[test]
    fn typed_text_matches_numeric_options() {
        let groups = code_groups();
        assert_eq!(groups.label("code", lookup_value_from_input("3")), "Level");
        assert_eq!(groups.tag("code", lookup_value_from_input("3")), ListClass::Warning);

        let defaults = default_option_groups();
        assert_eq!(defaults.label("status", lookup_value_from_input("1")), "Enabled");
        assert_eq!(defaults.label("status", lookup_value_from_input("")), "unknown");
    }

    #[test]
    fn loaded_file_is_saveable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILE_NAME);
        save_option_groups_to(&path, &code_groups()).unwrap();

        let state = OptionsState::load_from(&path);
        assert_eq!(state.error, None);
        assert_eq!(state.options_path.as_deref(), Some(path.as_path()));
        assert_eq!(state.groups, code_groups());
        assert!(state.can_save());
    }

    #[test]
    fn unreadable_file_cannot_be_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILE_NAME);
        let original = r#"{"level": [{"label": "High", "value": 3, "key": 3, "listClass": "bogus"}]}"#;
        std::fs::write(&path, original).unwrap();

        let state = OptionsState::load_from(&path);
        assert!(state.error.as_deref().unwrap().contains("failed to parse"));
        assert_eq!(state.options_path, None);
        assert!(!state.can_save());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn missing_file_loads_defaults_and_is_saveable() {
        let dir = tempfile::tempdir().unwrap();
        let state = OptionsState::load_from(&dir.path().join(OPTIONS_FILE_NAME));
        assert_eq!(state.groups, default_option_groups());
        assert!(state.can_save());
    }
}
