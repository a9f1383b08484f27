use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::UserRole;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "sign_in",
            AuthMode::SignUp => "sign_up",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "sign_up" => AuthMode::SignUp,
            _ => AuthMode::SignIn,
        }
    }

    /// Submit button text.
    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }
}

/// Inputs the auth dialog can show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AuthField {
    Name,
    Email,
    Password,
    Phone,
    Organization,
}

impl AuthField {
    /// HTML id and name attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthField::Name => "name",
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::Phone => "phone",
            AuthField::Organization => "organization",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthField::Name => "Full Name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::Phone => "Phone Number",
            AuthField::Organization => "Organization/Restaurant Name",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::Phone => "tel",
            _ => "text",
        }
    }

    pub fn placeholder(&self, mode: AuthMode) -> &'static str {
        match (self, mode) {
            (AuthField::Name, _) => "Your full name",
            (AuthField::Email, _) => "your@email.com",
            (AuthField::Password, AuthMode::SignUp) => "Create a strong password",
            (AuthField::Password, AuthMode::SignIn) => "",
            (AuthField::Phone, _) => "+91 12345 67890",
            (AuthField::Organization, _) => "Restaurant or organization name",
        }
    }
}

/// State behind the sign-in / sign-up dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub role: UserRole,
    values: BTreeMap<AuthField, String>,
}

impl AuthForm {
    /// A fresh sign-in form preselecting `role` for sign-up.
    pub fn new(role: UserRole) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    pub fn set(&mut self, field: AuthField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Current text for `field`, empty when never set.
    pub fn value(&self, field: AuthField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Switching tabs keeps typed values.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    /// Fields in render order for the current mode and role.
    pub fn visible_fields(&self) -> Vec<AuthField> {
        match self.mode {
            AuthMode::SignIn => vec![AuthField::Email, AuthField::Password],
            AuthMode::SignUp => {
                let mut fields = vec![AuthField::Name];
                if self.role == UserRole::Donor {
                    fields.push(AuthField::Organization);
                }
                fields.extend([AuthField::Email, AuthField::Phone, AuthField::Password]);
                fields
            }
        }
    }

    /// Visible fields carrying the HTML `required` attribute.
    pub fn required_fields(&self) -> Vec<AuthField> {
        self.visible_fields()
            .into_iter()
            .filter(|f| *f != AuthField::Organization)
            .collect()
    }

    pub fn is_required(&self, field: AuthField) -> bool {
        self.required_fields().contains(&field)
    }

    pub fn submit(&self) -> AuthSubmission {
        AuthSubmission {
            mode: self.mode,
            role: self.role,
            values: self.values.clone(),
        }
    }
}

/// What the dialog hands over on submit. `Debug` masks the password.
#[derive(Clone, PartialEq)]
pub struct AuthSubmission {
    pub mode: AuthMode,
    pub role: UserRole,
    pub values: BTreeMap<AuthField, String>,
}

impl fmt::Debug for AuthSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked: BTreeMap<&str, &str> = self
            .values
            .iter()
            .map(|(field, value)| match field {
                AuthField::Password => (field.as_str(), "[redacted]"),
                _ => (field.as_str(), value.as_str()),
            })
            .collect();
        f.debug_struct("AuthSubmission")
            .field("mode", &self.mode)
            .field("role", &self.role)
            .field("values", &masked)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sign_in_shows_email_and_password() {
        let form = AuthForm::new(UserRole::Volunteer);
        assert_eq!(form.visible_fields(), vec![AuthField::Email, AuthField::Password]);
        assert_eq!(form.required_fields(), form.visible_fields());
    }

    #[test]
    fn sign_up_donor_adds_optional_organization() {
        let mut form = AuthForm::new(UserRole::Donor);
        form.set_mode(AuthMode::SignUp);
        assert_eq!(
            form.visible_fields(),
            vec![
                AuthField::Name,
                AuthField::Organization,
                AuthField::Email,
                AuthField::Phone,
                AuthField::Password
            ]
        );
        assert!(!form.is_required(AuthField::Organization));
        assert!(form.is_required(AuthField::Phone));
    }

    #[test]
    fn sign_up_volunteer_hides_organization() {
        let mut form = AuthForm::new(UserRole::Donor);
        form.set_mode(AuthMode::SignUp);
        form.set_role(UserRole::Volunteer);
        assert!(!form.visible_fields().contains(&AuthField::Organization));
    }

    #[test]
    fn values_survive_mode_switch() {
        let mut form = AuthForm::default();
        form.set(AuthField::Email, "a@b.org");
        form.set_mode(AuthMode::SignUp);
        form.set_mode(AuthMode::SignIn);
        assert_eq!(form.value(AuthField::Email), "a@b.org");
        assert_eq!(form.value(AuthField::Phone), "");
    }

    #[test]
    fn submission_debug_masks_password() {
        let mut form = AuthForm::new(UserRole::Admin);
        form.set(AuthField::Email, "admin@foodforall.org");
        form.set(AuthField::Password, "hunter2");
        let submission = form.submit();
        assert_eq!(submission.values[&AuthField::Password], "hunter2");
        let printed = format!("{submission:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("[redacted]"));
        assert!(printed.contains("admin@foodforall.org"));
    }

    #[test]
    fn mode_keys_roundtrip() {
        for mode in [AuthMode::SignIn, AuthMode::SignUp] {
            assert_eq!(AuthMode::from_str_or_default(mode.as_str()), mode);
        }
    }
}
