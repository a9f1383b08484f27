//! Sign in / sign up form state

use pretty_assertions::assert_eq;
use shared_types::{AuthField, AuthForm, AuthMode, UserRole};

#[test]
fn default_role_is_preselected_and_mode_is_sign_in() {
    let form = AuthForm::new(UserRole::Admin);
    assert_eq!(form.role, UserRole::Admin);
    assert_eq!(form.mode, AuthMode::SignIn);
    assert_eq!(form.mode.submit_label(), "Sign In");
}

#[test]
fn donor_sign_up_shows_organization_as_optional() {
    let mut form = AuthForm::new(UserRole::Donor);
    form.set_mode(AuthMode::SignUp);

    assert_eq!(
        form.visible_fields(),
        vec![
            AuthField::Name,
            AuthField::Organization,
            AuthField::Email,
            AuthField::Phone,
            AuthField::Password,
        ]
    );
    assert!(!form.is_required(AuthField::Organization));
    assert!(form.is_required(AuthField::Phone));
    assert_eq!(form.mode.submit_label(), "Create Account");
}

#[test]
fn switching_role_away_from_donor_hides_organization() {
    let mut form = AuthForm::new(UserRole::Donor);
    form.set_mode(AuthMode::SignUp);
    form.set_role(UserRole::Volunteer);
    assert!(!form.visible_fields().contains(&AuthField::Organization));
}

#[test]
fn values_survive_mode_switches() {
    let mut form = AuthForm::new(UserRole::Volunteer);
    form.set(AuthField::Email, "asha@example.org");
    form.set_mode(AuthMode::SignUp);
    form.set(AuthField::Name, "Asha");
    form.set_mode(AuthMode::SignIn);

    assert_eq!(form.value(AuthField::Email), "asha@example.org");
    assert_eq!(form.value(AuthField::Name), "Asha");
    assert_eq!(form.value(AuthField::Phone), "");
}

#[test]
fn submission_snapshots_mode_role_and_values() {
    let mut form = AuthForm::new(UserRole::Donor);
    form.set_mode(AuthMode::SignUp);
    form.set(AuthField::Name, "Sunset Cafe");
    form.set(AuthField::Password, "hunter2");

    let submission = form.submit();
    assert_eq!(submission.mode, AuthMode::SignUp);
    assert_eq!(submission.role, UserRole::Donor);
    assert_eq!(
        submission.values.get(&AuthField::Name).map(String::as_str),
        Some("Sunset Cafe")
    );
}

#[test]
fn submission_debug_output_hides_the_password() {
    let mut form = AuthForm::new(UserRole::Volunteer);
    form.set(AuthField::Email, "ravi@example.org");
    form.set(AuthField::Password, "correct horse battery staple");

    let logged = format!("{:?}", form.submit());
    assert!(logged.contains("ravi@example.org"));
    assert!(logged.contains("[redacted]"));
    assert!(!logged.contains("correct horse"));
}

#[test]
fn mode_keys_parse_back() {
    assert_eq!(AuthMode::from_str_or_default("sign_up"), AuthMode::SignUp);
    assert_eq!(AuthMode::from_str_or_default("sign_in"), AuthMode::SignIn);
    assert_eq!(AuthMode::from_str_or_default("register"), AuthMode::SignIn);
}
