use dioxus::prelude::*;
use shared_types::{AuthField, AuthForm, AuthMode, UserRole, ALL_ROLES};
use shared_ui::components::{
    BrandMark, Button, ButtonSize, ButtonVariant, DialogContent, DialogDescription, DialogFooter,
    DialogHeader, DialogRoot, DialogTitle, FormSelect, Input, TabBar, TabItem,
};

/// Sign in / sign up overlay.
///
/// Mounted only while open, so each opening starts from a blank form with
/// `default_role` preselected. Submitting logs the (redacted) payload and
/// closes; nothing is sent anywhere.
#[component]
pub fn AuthDialog(default_role: UserRole, on_close: EventHandler<()>) -> Element {
    let mut auth = use_signal(|| AuthForm::new(default_role));
    let mut open = use_signal(|| true);

    let mode = auth.read().mode;
    let role = auth.read().role;
    let fields = auth.read().visible_fields();

    let modes = vec![
        TabItem::new(AuthMode::SignIn.as_str(), "Sign In"),
        TabItem::new(AuthMode::SignUp.as_str(), "Sign Up"),
    ];

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let submission = auth.read().submit();
        tracing::info!(?submission, "auth form submitted");
        on_close.call(());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth_dialog.css") }
        DialogRoot {
            open: open(),
            on_open_change: move |is_open: bool| {
                open.set(is_open);
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent { class: "dialog-content auth-dialog",
                DialogHeader {
                    div { class: "auth-dialog-brand",
                        BrandMark {}
                        DialogTitle { class: "auth-dialog-title", "Food for All" }
                    }
                    DialogDescription { "Join our community of food rescuers" }
                }

                TabBar {
                    items: modes,
                    active: mode.as_str().to_string(),
                    on_select: move |key: String| {
                        auth.write().set_mode(AuthMode::from_str_or_default(&key));
                    },
                }

                form { class: "auth-form", onsubmit: onsubmit,
                    if mode == AuthMode::SignUp {
                        FormSelect {
                            id: "role",
                            label: "I want to join as",
                            value: role.as_str().to_string(),
                            onchange: move |evt: Event<FormData>| {
                                auth.write().set_role(UserRole::from_str_or_default(&evt.value()));
                            },
                            for option_role in ALL_ROLES.iter().copied() {
                                option {
                                    key: "{option_role:?}",
                                    value: option_role.as_str(),
                                    selected: option_role == role,
                                    {option_role.display_name()}
                                }
                            }
                        }
                    }
                    for field in fields {
                        AuthInput { key: "{field:?}", field, auth }
                    }
                    Button {
                        variant: ButtonVariant::Brand,
                        size: ButtonSize::Large,
                        button_type: "submit",
                        block: true,
                        {mode.submit_label()}
                    }
                }

                DialogFooter {
                    "By continuing, you agree to help reduce food waste and combat hunger in our community."
                }
            }
        }
    }
}

#[component]
fn AuthInput(field: AuthField, auth: Signal<AuthForm>) -> Element {
    let (value, required, placeholder) = {
        let current = auth.read();
        (
            current.value(field).to_string(),
            current.is_required(field),
            field.placeholder(current.mode),
        )
    };

    rsx! {
        Input {
            id: field.as_str().to_string(),
            label: field.label().to_string(),
            input_type: field.input_type().to_string(),
            placeholder: placeholder.to_string(),
            value,
            required,
            on_input: move |evt: FormEvent| auth.write().set(field, evt.value()),
        }
    }
}
