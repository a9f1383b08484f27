use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;

// Uncontrolled tabs backed by the primitives. Used where the active tab
// never needs to be changed from code (admin dashboard).

#[component]
pub fn Tabs(mut props: prim::TabsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tabs", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs { ..props }
    }
}

#[component]
pub fn TabList(mut props: prim::TabListProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tab-list", None, false));

    rsx! {
        prim::TabList { ..props }
    }
}

#[component]
pub fn TabTrigger(mut props: prim::TabTriggerProps) -> Element {
    if props.class.is_none() {
        props.class = Some("tab-trigger".to_string());
    }

    rsx! {
        prim::TabTrigger { ..props }
    }
}

#[component]
pub fn TabContent(mut props: prim::TabContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("tab-content".to_string());
    }

    rsx! {
        prim::TabContent { ..props }
    }
}

/// One entry of a [`TabBar`]: the key reported on click and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub key: String,
    pub label: String,
}

impl TabItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Segmented tab strip whose active key is owned by the caller.
///
/// Needed where code switches tabs itself, e.g. back to the overview after
/// a donation is posted.
#[component]
pub fn TabBar(items: Vec<TabItem>, active: String, on_select: EventHandler<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tab-bar", role: "tablist",
            for item in items {
                button {
                    key: "{item.key}",
                    r#type: "button",
                    role: "tab",
                    class: "tab-bar-item",
                    "aria-selected": if item.key == active { "true" } else { "false" },
                    onclick: {
                        let key = item.key.clone();
                        move |_| on_select.call(key.clone())
                    },
                    "{item.label}"
                }
            }
        }
    }
}
