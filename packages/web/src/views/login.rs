//! Sign-in page.

use dioxus::prelude::*;
use ui::components::ErrorMessage;
use ui::screens::LoginForm;
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);

    let handle_login = move |evt: FormEvent| {
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
                class: "card form-card narrow",
                h2 { "Welcome back" }
                p { class: "small-text", "Sign in to manage your recipes." }

                form {
                    onsubmit: handle_login,
                    input {
                        class: "form-input",
                        placeholder: "username",
                        value: "{state.username}",
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
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
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: state.submitting,
                            if state.submitting { "Signing in..." } else { "Login" }
                        }
                    }
                }

                ErrorMessage { message: state.message.clone() }
            }
        }
    }
}
