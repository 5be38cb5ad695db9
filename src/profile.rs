//! Local-only profile editing.
//!
//! Nothing here reaches a backend. Edits live until the dashboard unmounts.

use crate::data::{InsurancePreference, NotificationSettings, PersonalInfo};
use crate::validation::{PasswordChangeForm, ValidationError, validate_password_change};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    Email,
    Sms,
    PolicyReminders,
    MarketingUpdates,
}

impl Notification {
    pub const ALL: [Notification; 4] = [
        Notification::Email,
        Notification::Sms,
        Notification::PolicyReminders,
        Notification::MarketingUpdates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Notification::Email => "Email Notifications",
            Notification::Sms => "SMS Notifications",
            Notification::PolicyReminders => "Policy Reminders",
            Notification::MarketingUpdates => "Marketing Updates",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Notification::Email => "Receive updates and alerts via email",
            Notification::Sms => "Receive text messages for important updates",
            Notification::PolicyReminders => "Get reminders about policy renewals and payments",
            Notification::MarketingUpdates => "Receive news about products and special offers",
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, which: Notification) -> bool {
        match which {
            Notification::Email => self.email_notifications,
            Notification::Sms => self.sms_notifications,
            Notification::PolicyReminders => self.policy_reminders,
            Notification::MarketingUpdates => self.marketing_updates,
        }
    }

    pub fn toggle(&mut self, which: Notification) {
        let slot = match which {
            Notification::Email => &mut self.email_notifications,
            Notification::Sms => &mut self.sms_notifications,
            Notification::PolicyReminders => &mut self.policy_reminders,
            Notification::MarketingUpdates => &mut self.marketing_updates,
        };
        *slot = !*slot;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonalField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Address,
    City,
    State,
    ZipCode,
}

impl PersonalField {
    pub const ALL: [PersonalField; 9] = [
        PersonalField::FirstName,
        PersonalField::LastName,
        PersonalField::Email,
        PersonalField::Phone,
        PersonalField::DateOfBirth,
        PersonalField::Address,
        PersonalField::City,
        PersonalField::State,
        PersonalField::ZipCode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PersonalField::FirstName => "First Name",
            PersonalField::LastName => "Last Name",
            PersonalField::Email => "Email",
            PersonalField::Phone => "Phone Number",
            PersonalField::DateOfBirth => "Date of Birth",
            PersonalField::Address => "Street Address",
            PersonalField::City => "City",
            PersonalField::State => "State",
            PersonalField::ZipCode => "ZIP Code",
        }
    }
}

impl PersonalInfo {
    pub fn field(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FirstName => &self.first_name,
            PersonalField::LastName => &self.last_name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::DateOfBirth => &self.date_of_birth,
            PersonalField::Address => &self.address,
            PersonalField::City => &self.city,
            PersonalField::State => &self.state,
            PersonalField::ZipCode => &self.zip_code,
        }
    }

    pub fn set_field(&mut self, field: PersonalField, value: String) {
        let slot = match field {
            PersonalField::FirstName => &mut self.first_name,
            PersonalField::LastName => &mut self.last_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::DateOfBirth => &mut self.date_of_birth,
            PersonalField::Address => &mut self.address,
            PersonalField::City => &mut self.city,
            PersonalField::State => &mut self.state,
            PersonalField::ZipCode => &mut self.zip_code,
        };
        *slot = value;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Editable copy of the profile plus the snapshot taken when editing began.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub info: PersonalInfo,
    pub notifications: NotificationSettings,
    pub preferences: Vec<InsurancePreference>,
    snapshot: Option<PersonalInfo>,
}

impl ProfileState {
    pub fn new(
        info: PersonalInfo,
        notifications: NotificationSettings,
        preferences: Vec<InsurancePreference>,
    ) -> Self {
        Self {
            info,
            notifications,
            preferences,
            snapshot: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn begin_edit(&mut self) {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.info.clone());
        }
    }

    /// Leave edit mode, restoring what was there when editing began.
    pub fn cancel_edit(&mut self) {
        if let Some(original) = self.snapshot.take() {
            self.info = original;
        }
    }

    /// Keep the edits and leave edit mode.
    pub fn commit_edit(&mut self) {
        if self.snapshot.take().is_some() {
            tracing::info!(name = %self.info.full_name(), "profile updated");
        }
    }

    /// Edit button: start editing, or cancel if already editing.
    pub fn toggle_edit(&mut self) {
        if self.is_editing() {
            self.cancel_edit();
        } else {
            self.begin_edit();
        }
    }

    /// Ignored outside edit mode.
    pub fn update(&mut self, field: PersonalField, value: String) {
        if self.is_editing() {
            self.info.set_field(field, value);
        }
    }

    pub fn toggle_notification(&mut self, which: Notification) {
        self.notifications.toggle(which);
    }

    pub fn toggle_preference(&mut self, id: &str) -> bool {
        match self.preferences.iter_mut().find(|pref| pref.id == id) {
            Some(pref) => {
                pref.selected = !pref.selected;
                true
            }
            None => false,
        }
    }
}

/// Validate a password change and clear the form on success.
pub fn change_password(form: &mut PasswordChangeForm) -> Result<(), ValidationError> {
    validate_password_change(form)?;
    *form = PasswordChangeForm::default();
    tracing::info!("password changed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_requires_edit_mode() {
        let mut state = ProfileState::default();
        state.update(PersonalField::City, "Oakland".into());
        assert_eq!(state.info.city, "");

        state.begin_edit();
        state.update(PersonalField::City, "Oakland".into());
        assert_eq!(state.info.field(PersonalField::City), "Oakland");
    }

    #[test]
    fn test_change_password_clears_form() {
        let mut form = PasswordChangeForm {
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
            confirm_password: "new-secret".into(),
        };
        assert!(change_password(&mut form).is_ok());
        assert_eq!(form, PasswordChangeForm::default());
    }

    #[test]
    fn test_failed_change_keeps_form() {
        let mut form = PasswordChangeForm {
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
            confirm_password: "typo".into(),
        };
        assert!(change_password(&mut form).is_err());
        assert_eq!(form.new_password, "new-secret");
    }
}
