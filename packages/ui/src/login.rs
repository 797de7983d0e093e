use api::types::Role;
use dioxus::prelude::*;

use crate::{t, use_lang, use_view, Lang};

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

/// Landing page. Asks for the invitation password when the server has one
/// configured, otherwise offers a plain choice between the two views.
#[component]
pub fn LoginPage() -> Element {
    let cfg = use_resource(|| async move { api::public_config().await });
    let lang = use_lang()();

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_CSS }

        div { class: "login_page",
            h1 { class: "login_title", {t(lang, "login.welcome_title")} }

            match cfg() {
                None => rsx! {
                    p { {t(lang, "general.loading")} }
                },
                Some(Err(err)) => {
                    tracing::warn!("login: public_config failed: {err}");
                    rsx! {
                        p { class: "error", {t(lang, "login.config_error")} }
                    }
                }
                Some(Ok(cfg)) if cfg.password_gate => rsx! {
                    PasswordForm { lang }
                },
                Some(Ok(_)) => rsx! {
                    RoleButtons { lang }
                },
            }
        }
    }
}

#[component]
fn RoleButtons(lang: Lang) -> Element {
    let mut view = use_view();
    rsx! {
        p { class: "login_prompt", {t(lang, "login.choose_role")} }
        div { class: "cta_row",
            button {
                id: "enter-guest",
                class: "btn primary",
                onclick: move |_| view.write().enter(Role::Guest),
                {t(lang, "login.guest_button")}
            }
            button {
                id: "enter-couple",
                class: "btn",
                onclick: move |_| view.write().enter(Role::Couple),
                {t(lang, "login.couple_button")}
            }
        }
    }
}

#[component]
fn PasswordForm(lang: Lang) -> Element {
    let mut view = use_view();
    let mut password = use_signal(String::new);
    let mut rejected = use_signal(|| false);
    let mut pending = use_signal(|| false);

    rsx! {
        form {
            class: "login_form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if pending() {
                    return;
                }
                let typed = password();
                pending.set(true);
                spawn(async move {
                    match api::enter(typed).await {
                        Ok(role) => {
                            rejected.set(false);
                            view.write().enter(role);
                        }
                        Err(e) => {
                            tracing::debug!("login: rejected: {e}");
                            rejected.set(true);
                            password.set(String::new());
                        }
                    }
                    pending.set(false);
                });
            },
            label { r#for: "password", {t(lang, "login.password_prompt")} }
            input {
                id: "password",
                r#type: "password",
                autocomplete: "current-password",
                placeholder: t(lang, "login.password_placeholder"),
                value: "{password}",
                oninput: move |e| password.set(e.value()),
            }
            button { class: "btn primary", r#type: "submit", disabled: pending(),
                {t(lang, "login.enter_button")}
            }
            if rejected() {
                p { class: "error", role: "alert", {t(lang, "login.incorrect_password")} }
            }
        }
    }
}
