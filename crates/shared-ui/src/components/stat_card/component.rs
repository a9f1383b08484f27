use dioxus::prelude::*;

use crate::components::{Card, CardContent};

/// Icon colour for a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Green,
    Blue,
    Orange,
    Purple,
    Red,
}

impl StatTone {
    pub fn class(&self) -> &'static str {
        match self {
            StatTone::Green => "green",
            StatTone::Blue => "blue",
            StatTone::Orange => "orange",
            StatTone::Purple => "purple",
            StatTone::Red => "red",
        }
    }
}

/// Headline number with an icon, a label and an optional caption underneath.
#[component]
pub fn StatCard(
    icon: Element,
    label: String,
    value: String,
    #[props(default)] tone: StatTone,
    #[props(default)] caption: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card {
            CardContent {
                div { class: "stat-card",
                    div { class: "stat-card-icon", "data-tone": tone.class(), {icon} }
                    div { class: "stat-card-body",
                        p { class: "stat-card-label", "{label}" }
                        p { class: "stat-card-value", "{value}" }
                        if let Some(caption) = &caption {
                            p { class: "stat-card-caption", "{caption}" }
                        }
                    }
                }
            }
        }
    }
}

/// Responsive four-column grid for stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
