use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdHeart, LdMapPin, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{FeatureFlags, UserRole, ALL_ROLES};
use shared_ui::components::{
    Badge, BadgeVariant, BrandMark, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle,
};
use shared_ui::theme::AccentScope;

use super::auth_dialog::AuthDialog;
use super::dashboard::role_theme;
use super::Route;
use crate::format_helpers::format_status_label;

/// Hero numbers; (value, label).
const HERO_STATS: [(&str, &str); 4] = [
    ("12,450", "Meals Saved"),
    ("245", "Active Volunteers"),
    ("67", "Partner Restaurants"),
    ("18 min", "Avg Response Time"),
];

const STEPS: [(&str, &str); 4] = [
    ("Post Request", "Donors post surplus food details with location and timing"),
    ("Find Volunteer", "Nearby volunteers get notified and accept the pickup task"),
    ("Coordinate Pickup", "Real-time tracking and communication for smooth coordination"),
    ("Deliver Impact", "Food reaches those in need, creating measurable community impact"),
];

/// Card copy for a role: description, bullet points and call to action.
fn role_copy(role: UserRole) -> (&'static str, [&'static str; 4], &'static str) {
    match role {
        UserRole::Donor => (
            "Restaurants, hotels, events, or households with surplus food",
            [
                "Post food pickup requests",
                "Set pickup times & locations",
                "Track donation impact",
                "Build community partnerships",
            ],
            "Join as Donor",
        ),
        UserRole::Volunteer => (
            "Pickup and deliver food to those who need it most",
            [
                "Find nearby pickup requests",
                "Get real-time notifications",
                "Navigate with integrated maps",
                "Make a direct impact",
            ],
            "Volunteer Now",
        ),
        UserRole::Admin => (
            "Oversee operations and coordinate the entire network",
            [
                "Monitor all activities",
                "Generate impact reports",
                "Manage user accounts",
                "Optimize distribution routes",
            ],
            "Admin Access",
        ),
    }
}

fn hero_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdHeart> { icon: LdHeart, width: 32, height: 32 } },
        1 => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
        2 => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 32, height: 32 } },
        _ => rsx! { Icon::<LdClock> { icon: LdClock, width: 32, height: 32 } },
    }
}

fn role_icon(role: UserRole) -> Element {
    match role {
        UserRole::Donor => rsx! { Icon::<LdHeart> { icon: LdHeart, width: 32, height: 32 } },
        UserRole::Volunteer => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
        UserRole::Admin => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 32, height: 32 } },
    }
}

/// Public landing page with the role picker.
#[component]
pub fn Landing() -> Element {
    let flags = use_context::<FeatureFlags>();
    let nav = navigator();

    let mut selected_role = use_signal(|| None::<UserRole>);
    let mut auth_role = use_signal(UserRole::default);
    let mut show_auth = use_signal(|| false);
    // Dashboard to open once the dialog closes, when auth gates role selection.
    let mut pending_route = use_signal(|| None::<Route>);

    let gate_on_auth = flags.auth_on_role_select;
    let select_role = move |role: UserRole| {
        selected_role.set(Some(role));
        auth_role.set(role);
        let target = Route::for_role(role);
        if gate_on_auth {
            tracing::info!(role = role.as_str(), "role selected, opening sign in first");
            pending_route.set(Some(target));
            show_auth.set(true);
        } else {
            tracing::info!(role = role.as_str(), route = %target, "role selected");
            nav.push(target);
        }
    };

    let close_auth = move |_: ()| {
        show_auth.set(false);
        if let Some(target) = pending_route.take() {
            nav.push(target);
        }
    };

    let banner_role = selected_role().filter(|_| flags.show_role_banner);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing-page",
            header { class: "landing-header",
                div { class: "landing-header-inner",
                    div { class: "landing-brand",
                        BrandMark {}
                        h1 { class: "landing-wordmark", "Food for All" }
                    }
                    div { class: "landing-header-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_auth.set(true),
                            "Sign In"
                        }
                        Button {
                            variant: ButtonVariant::Brand,
                            onclick: move |_| show_auth.set(true),
                            "Get Started"
                        }
                    }
                }
            }

            section { class: "landing-hero",
                h2 { class: "landing-hero-title",
                    "Turning Food Waste Into"
                    span { class: "landing-hero-accent", "Hope & Nourishment" }
                }
                p { class: "landing-hero-lead",
                    "Connect surplus food from restaurants and events with people in need. "
                    "Join our community of volunteers making a difference, one meal at a time."
                }
                div { class: "landing-stats",
                    for (index, (value, label)) in HERO_STATS.iter().enumerate() {
                        div { key: "{label}", class: "landing-stat",
                            div { class: "landing-stat-icon", {hero_icon(index)} }
                            div { class: "landing-stat-value", "{value}" }
                            div { class: "landing-stat-label", "{label}" }
                        }
                    }
                }
            }

            section { class: "landing-section landing-section-white",
                div { class: "landing-section-heading",
                    h3 { "Choose Your Role" }
                    p {
                        "Whether you have food to donate, time to volunteer, or need to coordinate - we've got you covered."
                    }
                }
                div { class: "role-grid",
                    for role in ALL_ROLES.iter().copied() {
                        RoleCard { key: "{role:?}", role, on_select: select_role }
                    }
                }
            }

            section { class: "landing-section landing-section-muted",
                div { class: "landing-section-heading",
                    h3 { "How It Works" }
                    p { "Simple steps to make a big difference" }
                }
                div { class: "steps-grid",
                    for (index, (title, desc)) in STEPS.iter().enumerate() {
                        div { key: "{title}", class: "step",
                            div { class: "step-number", {(index + 1).to_string()} }
                            h4 { class: "step-title", "{title}" }
                            p { class: "step-desc", "{desc}" }
                        }
                    }
                }
            }

            if let Some(role) = banner_role {
                RoleBanner { role }
            }

            footer { class: "landing-footer",
                div { class: "landing-brand landing-brand-centered",
                    BrandMark {}
                    h3 { "Food for All" }
                }
                p { "Together, we can end hunger and reduce waste, one meal at a time." }
            }

            if show_auth() {
                AuthDialog { default_role: auth_role(), on_close: close_auth }
            }
        }
    }
}

#[component]
fn RoleCard(role: UserRole, on_select: EventHandler<UserRole>) -> Element {
    let (description, bullets, cta) = role_copy(role);
    let (_, accent) = role_theme(role);

    rsx! {
        AccentScope { accent: accent,
            Card { class: "role-card",
                CardHeader { class: "role-card-header",
                    div { class: "role-card-icon", {role_icon(role)} }
                    CardTitle { class: "role-card-title", {role.display_name()} }
                    CardDescription { "{description}" }
                }
                CardContent { class: "role-card-body",
                    ul { class: "role-card-bullets",
                        for bullet in bullets {
                            li { key: "{bullet}", "• {bullet}" }
                        }
                    }
                    Button {
                        class: "role-card-cta",
                        block: true,
                        size: ButtonSize::Large,
                        onclick: move |_| on_select.call(role),
                        "{cta}"
                    }
                }
            }
        }
    }
}

#[component]
fn RoleBanner(role: UserRole) -> Element {
    let key = role.as_str();
    let name = format_status_label(key);

    rsx! {
        section { class: "role-banner",
            Badge { variant: BadgeVariant::Success, class: "role-banner-badge",
                "Navigating to: {name} Dashboard"
            }
            p { class: "role-banner-text",
                "Welcome! You're now viewing the {key} dashboard with all relevant features."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_four_bullets_and_a_distinct_cta() {
        let ctas: Vec<&str> = ALL_ROLES.iter().map(|r| role_copy(*r).2).collect();
        assert_eq!(ctas, vec!["Join as Donor", "Volunteer Now", "Admin Access"]);
        for role in ALL_ROLES {
            assert!(role_copy(*role).1.iter().all(|b| !b.is_empty()));
        }
    }

    #[test]
    fn step_numbers_follow_order() {
        assert_eq!(STEPS[0].0, "Post Request");
        assert_eq!(STEPS[3].0, "Deliver Impact");
    }
}
