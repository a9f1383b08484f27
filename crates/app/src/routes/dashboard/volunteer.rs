use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdHeart, LdMapPin, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{seed, PickupTask, UserRole};
use shared_ui::components::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, DashboardHeader, EmptyState,
    StatCard, StatGrid, StatTone, TabBar, TabItem,
};
use shared_ui::theme::AccentScope;

use super::{pickup_status_badge, priority_badge, role_theme};
use crate::format_helpers::{format_pickup_time, format_status_label};

#[derive(Debug, Clone, Copy, PartialEq)]
enum VolunteerTab {
    Available,
    MyTasks,
    Completed,
}

impl VolunteerTab {
    fn key(&self) -> &'static str {
        match self {
            VolunteerTab::Available => "available",
            VolunteerTab::MyTasks => "my-tasks",
            VolunteerTab::Completed => "completed",
        }
    }

    fn from_key(s: &str) -> Self {
        match s {
            "my-tasks" => VolunteerTab::MyTasks,
            "completed" => VolunteerTab::Completed,
            _ => VolunteerTab::Available,
        }
    }
}

/// Which action row a task card shows.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CardMode {
    Offer,
    Claimed,
    Done,
}

/// Volunteer dashboard: claim open pickups and close out claimed ones.
#[component]
pub fn VolunteerDashboard() -> Element {
    let mut board = use_signal(seed::volunteer_board);
    let mut tab = use_signal(|| VolunteerTab::Available);
    let (badge, accent) = role_theme(UserRole::Volunteer);

    let accept = move |id: String| {
        if board.write().accept(&id) {
            tracing::info!(%id, "pickup task accepted");
        }
    };
    let complete = move |id: String| {
        if board.write().complete(&id) {
            tracing::info!(%id, "pickup task completed");
        }
    };

    let current = board.read();
    let available = current.available();
    let my_tasks = current.my_tasks();
    let completed = current.completed();

    let tabs = vec![
        TabItem::new(VolunteerTab::Available.key(), format!("Available ({})", available.len())),
        TabItem::new(VolunteerTab::MyTasks.key(), format!("My Tasks ({})", my_tasks.len())),
        TabItem::new(VolunteerTab::Completed.key(), format!("Completed ({})", completed.len())),
    ];
    let active_tasks = my_tasks.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        AccentScope { accent: accent, class: "dashboard-page",
            DashboardHeader { title: "Volunteer Dashboard", role_label: "Volunteer", role_variant: badge,
                Button { variant: ButtonVariant::Outline, "Profile" }
            }
            main { class: "dashboard-body",
                StatGrid {
                    StatCard {
                        icon: rsx! { Icon::<LdHeart> { icon: LdHeart, width: 32, height: 32 } },
                        label: "Lives Impacted",
                        value: "145",
                        tone: StatTone::Red,
                    }
                    StatCard {
                        icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
                        label: "Completed Tasks",
                        value: "18",
                        tone: StatTone::Blue,
                    }
                    StatCard {
                        icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 32, height: 32 } },
                        label: "Avg Response",
                        value: "8 min",
                        tone: StatTone::Green,
                    }
                    StatCard {
                        icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 32, height: 32 } },
                        label: "Active Tasks",
                        value: "{active_tasks}",
                        tone: StatTone::Purple,
                    }
                }

                TabBar {
                    items: tabs,
                    active: tab().key().to_string(),
                    on_select: move |key: String| tab.set(VolunteerTab::from_key(&key)),
                }

                div { class: "task-list",
                    match tab() {
                        VolunteerTab::Available => rsx! {
                            if available.is_empty() {
                                EmptyState {
                                    icon: rsx! { Icon::<LdHeart> { icon: LdHeart, width: 48, height: 48 } },
                                    title: "No requests available",
                                    message: "Check back soon for new food pickup opportunities!",
                                }
                            }
                            for task in available.iter() {
                                TaskCard {
                                    key: "{task.id}",
                                    task: (*task).clone(),
                                    mode: CardMode::Offer,
                                    on_accept: accept,
                                    on_complete: complete,
                                }
                            }
                        },
                        VolunteerTab::MyTasks => rsx! {
                            if my_tasks.is_empty() {
                                EmptyState {
                                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 48, height: 48 } },
                                    title: "No active tasks",
                                    message: "Accept some requests to get started!",
                                }
                            }
                            for task in my_tasks.iter() {
                                TaskCard {
                                    key: "{task.id}",
                                    task: (*task).clone(),
                                    mode: CardMode::Claimed,
                                    on_accept: accept,
                                    on_complete: complete,
                                }
                            }
                        },
                        VolunteerTab::Completed => rsx! {
                            if completed.is_empty() {
                                EmptyState {
                                    icon: rsx! { Icon::<LdHeart> { icon: LdHeart, width: 48, height: 48 } },
                                    title: "No completed tasks yet",
                                    message: "Your completed food deliveries will appear here!",
                                }
                            }
                            for task in completed.iter() {
                                TaskCard {
                                    key: "{task.id}",
                                    task: (*task).clone(),
                                    mode: CardMode::Done,
                                    on_accept: accept,
                                    on_complete: complete,
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TaskCard(
    task: PickupTask,
    mode: CardMode,
    on_accept: EventHandler<String>,
    on_complete: EventHandler<String>,
) -> Element {
    let pickup = format_pickup_time(&task.pickup_time);
    let status = format_status_label(task.status.as_str());
    let priority = task.priority.as_str();
    let time_label = if mode == CardMode::Done { "Completed" } else { "Pickup Time" };
    let card_class = match mode {
        CardMode::Offer => "task-card",
        CardMode::Claimed => "task-card task-card-claimed",
        CardMode::Done => "task-card task-card-done",
    };
    let accept_id = task.id.clone();
    let complete_id = task.id.clone();

    rsx! {
        Card { class: card_class,
            CardContent {
                div { class: "task-card-row",
                    div { class: "task-card-main",
                        div { class: "task-card-heading",
                            h4 { class: "task-card-donor", "{task.donor}" }
                            if mode == CardMode::Offer {
                                Badge { variant: priority_badge(task.priority),
                                    "{priority} priority"
                                }
                            } else {
                                Badge { variant: pickup_status_badge(task.status), "{status}" }
                            }
                        }
                        p { class: "task-card-food", "{task.food_type}" }
                        div { class: "detail-grid",
                            p { strong { "Quantity: " } "{task.quantity}" }
                            p { strong { "Distance: " } "{task.distance}" }
                            p { strong { "Location: " } "{task.location}" }
                            p { strong { "{time_label}: " } "{pickup}" }
                        }
                    }
                    div { class: "task-card-actions",
                        match mode {
                            CardMode::Offer => rsx! {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| on_accept.call(accept_id.clone()),
                                    "Accept Task"
                                }
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "View Map" }
                            },
                            CardMode::Claimed => rsx! {
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "Navigate" }
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "Contact Donor" }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    size: ButtonSize::Small,
                                    class: "button-complete",
                                    onclick: move |_| on_complete.call(complete_id.clone()),
                                    "Mark Complete"
                                }
                            },
                            CardMode::Done => rsx! {
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "View Details" }
                            },
                        }
                    }
                }
            }
        }
    }
}
