//! Registration page.

use dioxus::prelude::*;
use ui::components::ErrorMessage;
use ui::screens::RegisterForm;
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            form.with_mut(|f| {
                f.message = None;
                f.submitting = true;
            });
            let mut next = form();
            let destination = next.submit(&api, &mut session).await;
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
                class: "card form-card",
                h2 { "Create account" }
                p { class: "small-text", "Register to add and manage your recipes." }

                form {
                    onsubmit: handle_register,
                    input {
                        class: "form-input",
                        placeholder: "username",
                        value: "{state.username}",
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                    input {
                        class: "form-input",
                        placeholder: "email",
                        value: "{state.email}",
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "password",
                        value: "{state.password}",
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-accent",
                            r#type: "submit",
                            disabled: state.submitting,
                            if state.submitting { "Creating account..." } else { "Register" }
                        }
                    }
                }

                ErrorMessage { message: state.message.clone() }
            }
        }
    }
}
