use crate::config::config;
use crate::data::{DataResult, SharedProvider};
use crate::profile::{Notification, PersonalField, ProfileState, change_password};
use crate::timer::sleep;
use crate::validation::{PasswordChangeForm, validate_password_change};
use crate::views::shared::{DataNotice, Loading, ToggleSwitch, use_provider};
use dioxus::prelude::*;

async fn load_profile(provider: SharedProvider) -> DataResult<ProfileState> {
    Ok(ProfileState::new(
        provider.personal_info().await?,
        provider.notification_settings().await?,
        provider.insurance_preferences().await?,
    ))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    Personal,
    Security,
    Preferences,
}

impl ProfileTab {
    const ALL: [ProfileTab; 3] = [ProfileTab::Personal, ProfileTab::Security, ProfileTab::Preferences];

    fn label(self) -> &'static str {
        match self {
            ProfileTab::Personal => "Personal",
            ProfileTab::Security => "Security",
            ProfileTab::Preferences => "Preferences",
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let provider = use_provider();
    let loaded = use_resource(move || load_profile(provider.clone()));

    let initial = match loaded.read().clone() {
        None => return rsx! { Loading {} },
        Some(Err(err)) => return rsx! { DataNotice { message: err.to_string() } },
        Some(Ok(initial)) => initial,
    };

    rsx! { ProfileEditor { initial } }
}

#[component]
fn ProfileEditor(initial: ProfileState) -> Element {
    let state = use_signal(move || initial);
    let mut tab = use_signal(|| ProfileTab::Personal);
    let current_tab = tab();

    rsx! {
        div { class: "vstack page",
            div { class: "page-header",
                h1 { "Profile Settings" }
                p { class: "text-muted", "Manage your personal information and preferences" }
            }

            div { class: "tabs",
                for option in ProfileTab::ALL {
                    button {
                        key: "{option.label()}",
                        class: if option == current_tab { "tab active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| tab.set(option),
                        "{option.label()}"
                    }
                }
            }

            {match current_tab {
                ProfileTab::Personal => rsx! { PersonalSection { state } },
                ProfileTab::Security => rsx! { SecuritySection {} },
                ProfileTab::Preferences => rsx! { PreferencesSection { state } },
            }}
        }
    }
}

#[component]
fn PersonalSection(state: Signal<ProfileState>) -> Element {
    let mut state = state;
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<String>::None);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        if saving() || !state.read().is_editing() {
            return;
        }
        saving.set(true);
        spawn(async move {
            sleep(config().save_delay).await;
            state.with_mut(|state| state.commit_edit());
            saving.set(false);
            status.set(Some("Your personal information has been updated successfully.".to_string()));
        });
    };

    let snapshot = state();
    let editing = snapshot.is_editing();

    rsx! {
        form { class: "card", onsubmit: on_submit,
            div { class: "card-header hstack between",
                div {
                    h2 { "Personal Information" }
                    p { class: "text-muted", "Update your personal details" }
                }
                button {
                    class: if editing { "btn btn-ghost" } else { "btn btn-outline" },
                    r#type: "button",
                    onclick: move |_| {
                        status.set(None);
                        state.with_mut(|state| state.toggle_edit());
                    },
                    if editing { "Cancel" } else { "Edit" }
                }
            }
            if let Some(message) = status() {
                p { class: "status", role: "status", "{message}" }
            }
            div { class: "grid two-col",
                for field in PersonalField::ALL {
                    div { key: "{field.label()}", class: "field",
                        label { "{field.label()}" }
                        input {
                            value: "{snapshot.info.field(field)}",
                            disabled: !editing,
                            oninput: move |ev| state.with_mut(|state| state.update(field, ev.value())),
                        }
                    }
                }
            }
            if editing {
                div { class: "card-footer",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

#[component]
fn SecuritySection() -> Element {
    let mut form = use_signal(PasswordChangeForm::default);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        if saving() {
            return;
        }
        let mut submitted = form();
        if let Err(err) = validate_password_change(&submitted) {
            status.set(None);
            error.set(Some(err.to_string()));
            return;
        }
        error.set(None);
        saving.set(true);
        spawn(async move {
            sleep(config().save_delay).await;
            if change_password(&mut submitted).is_ok() {
                form.set(submitted);
                status.set(Some("Your password has been changed successfully.".to_string()));
            }
            saving.set(false);
        });
    };

    let snapshot = form();

    rsx! {
        form { class: "card", onsubmit: on_submit,
            div { class: "card-header",
                h2 { "Change Password" }
                p { class: "text-muted", "Update your password to keep your account secure" }
            }
            if let Some(message) = error() {
                div { class: "alert alert-destructive", role: "alert", "{message}" }
            }
            if let Some(message) = status() {
                p { class: "status", role: "status", "{message}" }
            }
            div { class: "vstack",
                div { class: "field",
                    label { r#for: "current-password", "Current Password" }
                    input {
                        id: "current-password",
                        r#type: "password",
                        value: "{snapshot.current_password}",
                        oninput: move |ev| form.with_mut(|form| form.current_password = ev.value()),
                    }
                }
                div { class: "field",
                    label { r#for: "new-password", "New Password" }
                    input {
                        id: "new-password",
                        r#type: "password",
                        value: "{snapshot.new_password}",
                        oninput: move |ev| form.with_mut(|form| form.new_password = ev.value()),
                    }
                }
                div { class: "field",
                    label { r#for: "confirm-new-password", "Confirm New Password" }
                    input {
                        id: "confirm-new-password",
                        r#type: "password",
                        value: "{snapshot.confirm_password}",
                        oninput: move |ev| form.with_mut(|form| form.confirm_password = ev.value()),
                    }
                }
            }
            div { class: "card-footer",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Updating..." } else { "Update Password" }
                }
            }
        }
    }
}

#[component]
fn PreferencesSection(state: Signal<ProfileState>) -> Element {
    let mut state = state;
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<String>::None);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            sleep(config().save_delay).await;
            tracing::info!(settings = ?state.read().notifications, "notification preferences saved");
            saving.set(false);
            status.set(Some("Your notification settings have been saved.".to_string()));
        });
    };

    let snapshot = state();

    rsx! {
        form { class: "card", onsubmit: on_submit,
            div { class: "card-header",
                h2 { "Notification Preferences" }
                p { class: "text-muted", "Choose how you want to be notified" }
            }
            if let Some(message) = status() {
                p { class: "status", role: "status", "{message}" }
            }
            div { class: "vstack",
                for which in Notification::ALL {
                    div { key: "{which.label()}", class: "hstack between setting-row",
                        div {
                            strong { "{which.label()}" }
                            p { class: "text-muted", "{which.description()}" }
                        }
                        ToggleSwitch {
                            checked: snapshot.notifications.get(which),
                            label: which.label().to_string(),
                            on_toggle: move |_| {
                                status.set(None);
                                state.with_mut(|state| state.toggle_notification(which));
                            },
                        }
                    }
                }
            }

            div { class: "card-header",
                h2 { "Insurance Interests" }
                p { class: "text-muted", "Select the types of coverage you'd like to hear about" }
            }
            div { class: "grid two-col",
                for pref in snapshot.preferences.iter() {
                    button {
                        key: "{pref.id}",
                        class: if pref.selected { "card preference selected" } else { "card preference" },
                        r#type: "button",
                        onclick: {
                            let id = pref.id.clone();
                            move |_| {
                                state.with_mut(|state| state.toggle_preference(&id));
                            }
                        },
                        strong { "{pref.title}" }
                        p { class: "text-muted", "{pref.description}" }
                        if pref.selected {
                            span { class: "badge badge-active", "Selected" }
                        }
                    }
                }
            }

            div { class: "card-footer",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save Preferences" }
                }
            }
        }
    }
}
