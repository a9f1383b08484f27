use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdHeart;
use dioxus_free_icons::Icon;

use crate::components::{Badge, BadgeVariant};

/// Gradient heart tile used as the product mark.
#[component]
pub fn BrandMark(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "brand-mark",
            Icon::<LdHeart> { icon: LdHeart, width: size, height: size }
        }
    }
}

/// White top bar with the brand mark, a page title, a role badge and trailing actions.
#[component]
pub fn DashboardHeader(
    title: String,
    role_label: String,
    #[props(default)] role_variant: BadgeVariant,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "dashboard-header",
            div { class: "dashboard-header-inner",
                div { class: "dashboard-header-brand",
                    BrandMark {}
                    h1 { class: "dashboard-header-title", "{title}" }
                }
                div { class: "dashboard-header-actions",
                    Badge { variant: role_variant, "{role_label}" }
                    {children}
                }
            }
        }
    }
}
