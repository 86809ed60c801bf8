//! Edit page. Only the name is saved; the description box is shown for
//! reference and its edits are dropped on submit.

use dioxus::prelude::*;
use ui::components::ErrorMessage;
use ui::screens::EditForm;
use ui::{use_api, use_edit_handoff, use_session};

use crate::Route;

#[component]
pub fn EditRecipe(id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let mut handoff = use_edit_handoff();
    let nav = use_navigator();

    let form_id = id.clone();
    let mut form = use_signal(move || EditForm::new(form_id));

    // Reload whenever the route id changes, taking the hand-over if it matches
    let load_api = api.clone();
    use_effect(use_reactive!(|id| {
        let handed_over = handoff.write().take();
        let credential = session.peek().get().cloned();
        let api = load_api.clone();
        form.set(EditForm::new(id.clone()));
        spawn(async move {
            let next = EditForm::open(&api, credential.as_ref(), &id, handed_over).await;
            // A newer id may have replaced this one while the request was out
            if form.peek().id == next.id {
                form.set(next);
            }
        });
    }));

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let credential = session.peek().get().cloned();
        spawn(async move {
            form.with_mut(|f| {
                f.message = None;
                f.submitting = true;
            });
            let mut next = form();
            let destination = next.submit(&api, credential.as_ref()).await;
            form.set(next);
            if let Some(destination) = destination {
                nav.push(Route::from(destination));
            }
        });
    };

    let state = form.read().clone();

    if state.is_loading() {
        return rsx! {
            div {
                class: "container",
                div { class: "card form-card wide", "Loading recipe..." }
            }
        };
    }

    rsx! {
        div {
            class: "container",
            div {
                class: "card form-card wide",
                h2 { "Edit Recipe" }
                p { class: "small-text", "Change title and save." }

                form {
                    onsubmit: handle_save,
                    input {
                        class: "form-input",
                        placeholder: "name",
                        value: "{state.name}",
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    textarea {
                        class: "form-textarea",
                        placeholder: "description",
                        value: "{state.description}",
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }
                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-warn",
                            r#type: "submit",
                            disabled: state.submitting,
                            "Save"
                        }
                    }
                }

                ErrorMessage { message: state.error().map(str::to_string) }
            }
        }
    }
}
