use crate::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::config::config;
use crate::routes::{Access, Route, authorize, home_route};
use crate::timer::sleep;
use crate::validation::{Field, FieldErrors, LoginForm, validate_login};
use crate::views::shared::{Brand, FieldError, RedirectTo, use_session};
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut login_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut show_password = use_signal(|| false);

    if let Access::Redirect(target) = authorize(&Route::Login {}, &session.read()) {
        return rsx! { RedirectTo { target } };
    }

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        if loading() {
            return;
        }
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        if let Err(field_errors) = validate_login(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        loading.set(true);

        spawn(async move {
            sleep(config().auth_delay).await;
            let result = session.with_mut(|session| session.login(&form));
            loading.set(false);
            match result {
                Ok(()) => {
                    nav.push(home_route());
                }
                Err(err) => login_error.set(Some(err.to_string())),
            }
        });
    };

    let on_provider = move |_: MouseEvent| {
        if loading() {
            return;
        }
        loading.set(true);
        spawn(async move {
            sleep(config().auth_delay).await;
            session.with_mut(|session| session.sign_in_with_provider("Google"));
            loading.set(false);
            nav.push(home_route());
        });
    };

    let email_error = errors.read().message(Field::Email);
    let password_error = errors.read().message(Field::Password);
    let banner = login_error();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-column",
                div { class: "auth-header",
                    Link { class: "back-link", to: Route::Landing {}, "← Back to home" }
                    Brand { to: Route::Landing {} }
                }

                div { class: "card auth-card",
                    div { class: "card-header",
                        h2 { "Welcome back" }
                        p { class: "text-muted", "Enter your credentials to access your account" }
                    }

                    if let Some(message) = banner {
                        div { class: "alert alert-destructive", role: "alert",
                            span { "{message}" }
                            button {
                                class: "btn btn-ghost alert-dismiss",
                                r#type: "button",
                                aria_label: "Dismiss",
                                onclick: move |_| login_error.set(None),
                                "✕"
                            }
                        }
                    }

                    form { class: "vstack", onsubmit: on_submit,
                        div { class: "field",
                            label { r#for: "email", "Email" }
                            input {
                                id: "email",
                                r#type: "email",
                                placeholder: "you@example.com",
                                class: if email_error.is_some() { "invalid" } else { "" },
                                value: "{email}",
                                oninput: move |ev| {
                                    email.set(ev.value());
                                    errors.with_mut(|errors| errors.clear(Field::Email));
                                    login_error.set(None);
                                },
                            }
                            FieldError { message: email_error.clone() }
                        }

                        div { class: "field",
                            div { class: "field-label-row",
                                label { r#for: "password", "Password" }
                                a { class: "link", href: "#", "Forgot password?" }
                            }
                            div { class: "password-input",
                                input {
                                    id: "password",
                                    r#type: if show_password() { "text" } else { "password" },
                                    placeholder: "••••••••",
                                    class: if password_error.is_some() { "invalid" } else { "" },
                                    value: "{password}",
                                    oninput: move |ev| {
                                        password.set(ev.value());
                                        errors.with_mut(|errors| errors.clear(Field::Password));
                                        login_error.set(None);
                                    },
                                }
                                button {
                                    class: "btn btn-ghost reveal",
                                    r#type: "button",
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() { "Hide" } else { "Show" }
                                }
                            }
                            FieldError { message: password_error.clone() }
                        }

                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }

                    div { class: "divider", span { "Or continue with" } }

                    button {
                        class: "btn btn-outline btn-block",
                        r#type: "button",
                        disabled: loading(),
                        onclick: on_provider,
                        "Sign in with Google"
                    }

                    div { class: "card-footer text-muted",
                        "Don't have an account? "
                        Link { class: "link", to: Route::Signup {}, "Sign up" }
                    }
                }

                p { class: "demo-hint text-muted",
                    "Demo credentials: {DEMO_EMAIL} / {DEMO_PASSWORD}"
                }
            }
        }
    }
}
