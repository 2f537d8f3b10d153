//! Tab strip for switching between the editor and the listings

use dioxus::prelude::*;

use crate::state::{AppState, Tab};
use crate::theme::PALETTE;

#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();
    let colors = &PALETTE;

    rsx! {
        div {
            class: "tab-bar",
            style: "
                display: flex;
                gap: 4px;
                padding: 10px 10px 0;
                border-bottom: 1px solid {colors.border};
            ",

            for tab in Tab::ALL {
                {
                    let label = tab.label();
                    let is_active = tab == active;
                    let (bg, fg) = if is_active {
                        (colors.accent, colors.accent_text)
                    } else {
                        (colors.bg_secondary, colors.text_primary)
                    };

                    rsx! {
                        button {
                            key: "{label}",
                            style: "
                                padding: 5px 10px;
                                border: 1px solid {colors.border};
                                border-bottom: none;
                                background: {bg};
                                color: {fg};
                                cursor: pointer;
                            ",
                            onclick: move |_| state.active_tab.set(tab),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
