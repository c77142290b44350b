use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{InvisibleCaptcha, Logo};
use crate::core::auth_panel::{AuthForm, AuthPanelState};
use crate::core::theme;
use crate::i18n::translate;
use crate::routes::ROUTE_DASHBOARD;
use crate::t;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// Marketing panel on the left, sign-up / sign-in panel on the right.
///
/// `initial` only seeds the panel state on mount; afterwards the toggle
/// button, the inline switch link and the remember-me checkbox own it.
///
/// The forms have no submit handler. Submitting runs the browser's native
/// `required` validation and nothing else.
#[component]
pub fn Landing(#[props(default)] initial: AuthPanelState) -> Element {
    let mut state = use_signal(|| initial);

    let current = state();
    let visible = current.form();

    let toggle_form = move |_| {
        state.with_mut(|s| s.toggle_form());
        debug!(form = ?state.peek().form(), "auth form toggled");
    };
    let switch_form = move |evt: MouseEvent| {
        evt.prevent_default();
        state.with_mut(|s| s.toggle_form());
        debug!(form = ?state.peek().form(), "auth form switched by link");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        div { class: "landing",
            section { class: "landing__info",
                div { class: "landing__info-inner",
                    a { class: "landing__logo-link", href: ROUTE_DASHBOARD,
                        Logo { color: theme::PRIMARY_MAIN }
                    }
                    h1 { class: "landing__title", {t!("landing-page.title")} }
                    p { class: "landing__subtitle", {t!("landing-page.sub-title")} }
                }
            }

            section { class: "landing__auth",
                div { class: "auth-panel",
                    div { class: "auth-panel__toggle",
                        button {
                            class: "button button--outlined",
                            r#type: "button",
                            onclick: toggle_form,
                            {translate(current.toggle_label_key())}
                        }
                    }

                    {match visible {
                        AuthForm::SignUp => rsx! {
                            form { class: "auth-form auth-form--sign-up",
                                h2 { class: "auth-form__title", {t!("sign-up")} }
                                p { class: "auth-form__switch",
                                    {t!("or")}
                                    " "
                                    a { href: "#", onclick: switch_form, {t!("sign-in-to-your-account")} }
                                }
                                div { class: "auth-form__row",
                                    TextField { id: "first-name", label: t!("first-name"), kind: "text", autocomplete: "given-name" }
                                    TextField { id: "surname", label: t!("surname"), kind: "text", autocomplete: "family-name" }
                                }
                                TextField { id: "email", label: t!("email"), kind: "email", autocomplete: "email" }
                                TextField { id: "password", label: t!("password"), kind: "password", autocomplete: "new-password" }
                                InvisibleCaptcha {}
                                button { class: "button button--primary", r#type: "submit",
                                    {translate(current.submit_label_key())}
                                }
                            }
                        },
                        AuthForm::SignIn => rsx! {
                            form { class: "auth-form auth-form--sign-in",
                                h2 { class: "auth-form__title", {t!("sign-in")} }
                                p { class: "auth-form__switch",
                                    {t!("or")}
                                    " "
                                    a { href: "#", onclick: switch_form, {t!("create-an-account")} }
                                }
                                TextField { id: "email", label: t!("email"), kind: "email", autocomplete: "email" }
                                TextField { id: "password", label: t!("password"), kind: "password", autocomplete: "current-password" }
                                InvisibleCaptcha {}
                                label { class: "auth-form__checkbox",
                                    input {
                                        r#type: "checkbox",
                                        name: "remember-me",
                                        checked: current.remember_me_active,
                                        onchange: move |_| state.with_mut(|s| s.toggle_remember_me()),
                                    }
                                    " "
                                    {t!("remember-me")}
                                }
                                button { class: "button button--primary", r#type: "submit",
                                    {translate(current.submit_label_key())}
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}

/// Labelled, required input.
#[component]
fn TextField(id: &'static str, label: String, kind: &'static str, autocomplete: &'static str) -> Element {
    rsx! {
        div { class: "text-field",
            label { class: "text-field__label", r#for: id, "{label}" }
            input {
                class: "text-field__input",
                id,
                name: id,
                r#type: kind,
                autocomplete,
                required: true,
            }
        }
    }
}
