use dioxus::prelude::*;

pub mod dialog;
pub mod fallback_image;
pub mod icons;
pub mod option_tag;
pub mod panel;
pub mod window;

use crate::constants::{APP_TITLE, STYLE};
use crate::ui::panel::{OptionsState, options_panel};

pub fn app() -> Element {
    let options_state: Signal<OptionsState> = use_signal(OptionsState::default);

    {
        let mut options_state = options_state;
        use_future(move || async move {
            options_state.set(OptionsState::refresh());
        });
    }

    let group_count = options_state().groups.names().count();

    rsx! {
        Fragment {
            style { {STYLE} }
            div { class: "page",
                div { class: "card",
                    div { class: "title-row",
                        div {
                            h1 { {APP_TITLE} }
                            p { class: "subtitle", "option groups: {group_count}" }
                        }
                    }

                    options_panel { options_state }
                }
            }
        }
    }
}
