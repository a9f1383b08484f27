use dioxus::prelude::*;

/// Colour tone for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Info,
    Warning,
    Danger,
    /// Purple tone for completed volunteer work and admin labels.
    Accent,
    /// Orange tone for volunteer labels.
    Highlight,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Success => "success",
            BadgeVariant::Info => "info",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Accent => "accent",
            BadgeVariant::Highlight => "highlight",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Pill label for statuses, priorities and roles.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default = false)] small: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("data-size", if small { "sm" } else { "md" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_neutral() {
        assert_eq!(BadgeVariant::default().class(), "neutral");
    }

    #[test]
    fn variant_classes_are_distinct() {
        let all = [
            BadgeVariant::Neutral,
            BadgeVariant::Success,
            BadgeVariant::Info,
            BadgeVariant::Warning,
            BadgeVariant::Danger,
            BadgeVariant::Accent,
            BadgeVariant::Highlight,
            BadgeVariant::Outline,
        ];
        let mut classes: Vec<&str> = all.iter().map(|v| v.class()).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), all.len());
    }
}
