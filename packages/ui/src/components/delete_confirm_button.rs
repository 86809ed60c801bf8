//! Inline delete confirmation: one click arms, a second confirms.

use dioxus::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    on_confirm: EventHandler<()>,
    #[props(default = "Delete".to_string())] label: String,
) -> Element {
    let mut armed = use_signal(|| false);

    rsx! {
        if !armed() {
            button {
                class: "btn btn-danger",
                onclick: move |_| armed.set(true),
                "{label}"
            }
        } else {
            span {
                class: "delete-confirm",
                span { class: "delete-confirm-text", "Delete this recipe?" }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| {
                        armed.set(false);
                        on_confirm.call(());
                    },
                    "Yes"
                }
                button {
                    class: "btn",
                    onclick: move |_| armed.set(false),
                    "No"
                }
            }
        }
    }
}
