use dioxus::prelude::*;
use ui::components::ErrorMessage;
use ui::screens::CreateForm;
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn AddRecipe() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(CreateForm::default);

    let handle_add = move |evt: FormEvent| {
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

    rsx! {
        div {
            class: "container",
            div {
                class: "card form-card wide",
                h2 { "Add Recipe" }
                p { class: "small-text", "Write a short title and description." }

                form {
                    onsubmit: handle_add,
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
                            class: "btn btn-accent",
                            r#type: "submit",
                            disabled: state.submitting,
                            "Add"
                        }
                    }
                }

                ErrorMessage { message: state.message.clone() }
            }
        }
    }
}
