use dioxus::prelude::*;

/// Accent colour families. Each role dashboard paints its primary buttons,
/// active tabs and focus rings in its own accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    /// Donor pages and the landing page.
    #[default]
    Green,
    /// Volunteer pages.
    Orange,
    /// Admin pages.
    Purple,
}

/// All accents in display order.
pub const ALL_ACCENTS: &[Accent] = &[Accent::Green, Accent::Orange, Accent::Purple];

impl Accent {
    /// Value of the `data-accent` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Green => "green",
            Accent::Orange => "orange",
            Accent::Purple => "purple",
        }
    }

    /// Parse an accent key, falling back to green.
    pub fn from_key(s: &str) -> Self {
        match s {
            "orange" => Accent::Orange,
            "purple" => Accent::Purple,
            _ => Accent::Green,
        }
    }
}

/// Page shell that sets the accent for everything inside it.
///
/// The palette variables live in the app's base stylesheet; this only
/// switches `--accent-*` through the `data-accent` attribute.
#[component]
pub fn AccentScope(
    #[props(default)] accent: Accent,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "accent-scope", None, false),
        Attribute::new("data-accent", accent.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
