use dioxus::prelude::*;

/// Red inline message, rendered only when there is something to say.
#[component]
pub fn ErrorMessage(#[props(!optional)] message: Option<String>) -> Element {
    rsx! {
        if let Some(text) = message.filter(|t| !t.is_empty()) {
            p { class: "error-message", "{text}" }
        }
    }
}
