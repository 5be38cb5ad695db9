use crate::config::config;
use crate::routes::{Access, Route, authorize, home_route};
use crate::timer::sleep;
use crate::validation::{Field, FieldErrors, SignupForm, validate_signup};
use crate::views::shared::{Brand, FieldError, RedirectTo, use_session};
use dioxus::prelude::*;

#[component]
pub fn Signup() -> Element {
    let mut session = use_session();
    let nav = navigator();
    let mut form = use_signal(SignupForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut loading = use_signal(|| false);
    let mut show_password = use_signal(|| false);

    if let Access::Redirect(target) = authorize(&Route::Signup {}, &session.read()) {
        return rsx! { RedirectTo { target } };
    }

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        if loading() {
            return;
        }
        let submitted = form();
        if let Err(field_errors) = validate_signup(&submitted) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        loading.set(true);

        spawn(async move {
            sleep(config().signup_delay).await;
            let result = session.with_mut(|session| session.signup(&submitted));
            loading.set(false);
            match result {
                Ok(()) => {
                    nav.push(home_route());
                }
                Err(err) => {
                    if let Some(field_errors) = err.field_errors() {
                        errors.set(field_errors.clone());
                    }
                }
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

    // Editing a field clears its error.
    let mut edit = move |field: Field, apply: Box<dyn FnOnce(&mut SignupForm)>| {
        form.with_mut(|form| apply(form));
        errors.with_mut(|errors| errors.clear(field));
    };

    let snapshot = form();
    let current_errors = errors();
    let input_type = if show_password() { "text" } else { "password" };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-column",
                div { class: "auth-header",
                    Link { class: "back-link", to: Route::Landing {}, "← Back to home" }
                    Brand { to: Route::Landing {} }
                }

                div { class: "card auth-card",
                    div { class: "card-header",
                        h2 { "Create an account" }
                        p { class: "text-muted", "Enter your information to get started" }
                    }

                    form { class: "vstack", onsubmit: on_submit,
                        div { class: "field",
                            label { r#for: "name", "Full Name" }
                            input {
                                id: "name",
                                placeholder: "John Doe",
                                value: "{snapshot.name}",
                                oninput: move |ev| {
                                    let value = ev.value();
                                    edit(Field::Name, Box::new(move |form| form.name = value));
                                },
                            }
                            FieldError { message: current_errors.message(Field::Name) }
                        }

                        div { class: "field",
                            label { r#for: "email", "Email" }
                            input {
                                id: "email",
                                r#type: "email",
                                placeholder: "you@example.com",
                                value: "{snapshot.email}",
                                oninput: move |ev| {
                                    let value = ev.value();
                                    edit(Field::Email, Box::new(move |form| form.email = value));
                                },
                            }
                            FieldError { message: current_errors.message(Field::Email) }
                        }

                        div { class: "field",
                            label { r#for: "password", "Password" }
                            div { class: "password-input",
                                input {
                                    id: "password",
                                    r#type: input_type,
                                    placeholder: "••••••••",
                                    value: "{snapshot.password}",
                                    oninput: move |ev| {
                                        let value = ev.value();
                                        edit(Field::Password, Box::new(move |form| form.password = value));
                                    },
                                }
                                button {
                                    class: "btn btn-ghost reveal",
                                    r#type: "button",
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() { "Hide" } else { "Show" }
                                }
                            }
                            FieldError { message: current_errors.message(Field::Password) }
                        }

                        div { class: "field",
                            label { r#for: "confirm-password", "Confirm Password" }
                            input {
                                id: "confirm-password",
                                r#type: input_type,
                                placeholder: "••••••••",
                                value: "{snapshot.confirm_password}",
                                oninput: move |ev| {
                                    let value = ev.value();
                                    edit(Field::ConfirmPassword, Box::new(move |form| form.confirm_password = value));
                                },
                            }
                            FieldError { message: current_errors.message(Field::ConfirmPassword) }
                        }

                        div { class: "field checkbox-field",
                            input {
                                id: "terms",
                                r#type: "checkbox",
                                checked: snapshot.accept_terms,
                                onchange: move |ev| {
                                    let accepted = ev.checked();
                                    edit(Field::AcceptTerms, Box::new(move |form| form.accept_terms = accepted));
                                },
                            }
                            label { r#for: "terms",
                                "I agree to the "
                                a { class: "link", href: "#", "terms of service" }
                                " and "
                                a { class: "link", href: "#", "privacy policy" }
                            }
                        }
                        FieldError { message: current_errors.message(Field::AcceptTerms) }

                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create account" }
                        }
                    }

                    div { class: "divider", span { "Or continue with" } }

                    button {
                        class: "btn btn-outline btn-block",
                        r#type: "button",
                        disabled: loading(),
                        onclick: on_provider,
                        "Sign up with Google"
                    }

                    div { class: "card-footer text-muted",
                        "Already have an account? "
                        Link { class: "link", to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
