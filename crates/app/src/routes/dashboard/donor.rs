use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdHeart, LdMapPin, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{seed, AppError, DonationRequest, DonorBoard, NewDonationRequest, UserRole};
use shared_ui::components::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, DashboardHeader, Input, StatCard, StatGrid, StatTone, TabBar, TabItem, Textarea,
};
use shared_ui::theme::AccentScope;

use super::{donation_status_badge, role_theme};
use crate::format_helpers::format_pickup_time;

/// How many requests the overview lists.
const RECENT_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DonorTab {
    #[default]
    Overview,
    Post,
    History,
}

impl DonorTab {
    fn key(&self) -> &'static str {
        match self {
            DonorTab::Overview => "overview",
            DonorTab::Post => "post",
            DonorTab::History => "history",
        }
    }

    fn from_key(s: &str) -> Self {
        match s {
            "post" => DonorTab::Post,
            "history" => DonorTab::History,
            _ => DonorTab::Overview,
        }
    }
}

/// Dashboard-level view state. The unsent draft lives next to the active
/// tab so leaving the Post tab does not discard it.
#[derive(Debug, Clone, Default, PartialEq)]
struct DonorDesk {
    tab: DonorTab,
    draft: NewDonationRequest,
    error: Option<AppError>,
}

impl DonorDesk {
    fn select_tab(&mut self, tab: DonorTab) {
        self.tab = tab;
    }

    fn field_error(&self, name: &str) -> Option<String> {
        self.error
            .as_ref()
            .and_then(|e| e.field(name).map(str::to_string))
    }

    /// Post the draft onto `board`. Success clears the draft and returns to
    /// the overview; failure keeps the draft and records the field errors.
    fn submit(
        &mut self,
        board: &mut DonorBoard,
        now: DateTime<Utc>,
    ) -> Result<DonationRequest, AppError> {
        match board.post_request(&self.draft, now).cloned() {
            Ok(request) => {
                self.draft = NewDonationRequest::default();
                self.error = None;
                self.tab = DonorTab::Overview;
                Ok(request)
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

/// Donor dashboard: overview, post-a-request form and full history.
#[component]
pub fn DonorDashboard() -> Element {
    let board = use_signal(seed::donor_board);
    let mut desk = use_signal(DonorDesk::default);
    let tab = desk.read().tab;
    let (badge, accent) = role_theme(UserRole::Donor);

    let tabs = vec![
        TabItem::new(DonorTab::Overview.key(), "Overview"),
        TabItem::new(DonorTab::Post.key(), "Post Request"),
        TabItem::new(DonorTab::History.key(), "Request History"),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        AccentScope { accent: accent, class: "dashboard-page",
            DashboardHeader { title: "Donor Dashboard", role_label: "Food Donor", role_variant: badge,
                Button { variant: ButtonVariant::Outline, "Profile" }
            }
            main { class: "dashboard-body",
                TabBar {
                    items: tabs,
                    active: tab.key().to_string(),
                    on_select: move |key: String| desk.write().select_tab(DonorTab::from_key(&key)),
                }
                match tab {
                    DonorTab::Overview => rsx! { DonorOverview { board } },
                    DonorTab::Post => rsx! { PostRequestForm { board, desk } },
                    DonorTab::History => rsx! { RequestHistory { board } },
                }
            }
        }
    }
}

#[component]
fn DonorOverview(board: Signal<DonorBoard>) -> Element {
    let board = board.read();
    let active = board.active_count();

    rsx! {
        StatGrid {
            StatCard {
                icon: rsx! { Icon::<LdHeart> { icon: LdHeart, width: 32, height: 32 } },
                label: "Total Donations",
                value: "23",
                tone: StatTone::Green,
            }
            StatCard {
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
                label: "People Fed",
                value: "890",
                tone: StatTone::Blue,
            }
            StatCard {
                icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 32, height: 32 } },
                label: "Avg Response",
                value: "12 min",
                tone: StatTone::Orange,
            }
            StatCard {
                icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 32, height: 32 } },
                label: "Active Requests",
                value: "{active}",
                tone: StatTone::Purple,
            }
        }
        Card {
            CardHeader {
                CardTitle { "Recent Food Requests" }
                CardDescription { "Your latest donation requests and their status" }
            }
            CardContent {
                div { class: "request-list",
                    for request in board.recent(RECENT_COUNT) {
                        RecentRow { key: "{request.id}", request: request.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentRow(request: DonationRequest) -> Element {
    let pickup = format_pickup_time(&request.pickup_time);

    rsx! {
        div { class: "request-row",
            div { class: "request-row-main",
                h4 { class: "request-row-title", "{request.food_type}" }
                p { class: "request-row-meta", "{request.quantity} • {request.location}" }
                p { class: "request-row-sub", "Pickup: {pickup}" }
            }
            Badge { variant: donation_status_badge(request.status), {request.status.as_str()} }
        }
    }
}

#[component]
fn PostRequestForm(mut board: Signal<DonorBoard>, mut desk: Signal<DonorDesk>) -> Element {
    let submit = move |_: MouseEvent| {
        let posted = desk.write().submit(&mut board.write(), Utc::now());
        match posted {
            Ok(request) => tracing::info!(
                id = %request.id,
                food_type = %request.food_type,
                quantity = %request.quantity,
                "donation request posted"
            ),
            Err(err) => {
                tracing::warn!(%err, fields = ?err.field_errors, "donation request rejected")
            }
        }
    };

    let (draft, food_error, quantity_error, location_error) = {
        let current = desk.read();
        (
            current.draft.clone(),
            current.field_error("food_type"),
            current.field_error("quantity"),
            current.field_error("location"),
        )
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Post New Food Request" }
                CardDescription { "Share surplus food with those who need it" }
            }
            CardContent {
                div { class: "post-form",
                    div { class: "post-form-grid",
                        Input {
                            id: "food_type",
                            label: "Food Type",
                            placeholder: "e.g., Cooked rice, Fresh vegetables",
                            value: draft.food_type.clone(),
                            error: food_error,
                            on_input: move |e: FormEvent| desk.write().draft.food_type = e.value(),
                        }
                        Input {
                            id: "quantity",
                            label: "Quantity",
                            placeholder: "e.g., 50 servings, 10 kg",
                            value: draft.quantity.clone(),
                            error: quantity_error,
                            on_input: move |e: FormEvent| desk.write().draft.quantity = e.value(),
                        }
                        Input {
                            id: "location",
                            label: "Pickup Location",
                            placeholder: "Full address with landmarks",
                            value: draft.location.clone(),
                            error: location_error,
                            on_input: move |e: FormEvent| desk.write().draft.location = e.value(),
                        }
                        Input {
                            id: "pickup_time",
                            label: "Preferred Pickup Time",
                            input_type: "datetime-local",
                            value: draft.pickup_time.clone(),
                            on_input: move |e: FormEvent| desk.write().draft.pickup_time = e.value(),
                        }
                    }
                    Textarea {
                        id: "description",
                        label: "Additional Details",
                        placeholder: "Any special instructions, food preparation details, or access information",
                        rows: 3,
                        value: draft.description.clone(),
                        on_input: move |e: FormEvent| desk.write().draft.description = e.value(),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Large,
                        block: true,
                        disabled: !draft.is_complete(),
                        onclick: submit,
                        "Post Food Request"
                    }
                }
            }
        }
    }
}

#[component]
fn RequestHistory(board: Signal<DonorBoard>) -> Element {
    let board = board.read();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Request History" }
                CardDescription { "All your past food donation requests" }
            }
            CardContent {
                div { class: "request-list",
                    for request in board.all() {
                        HistoryRow { key: "{request.id}", request: request.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryRow(request: DonationRequest) -> Element {
    let pickup = format_pickup_time(&request.pickup_time);

    rsx! {
        div { class: "request-card",
            div { class: "request-card-main",
                h4 { class: "request-row-title", "{request.food_type}" }
                div { class: "detail-grid",
                    p { strong { "Quantity: " } "{request.quantity}" }
                    p { strong { "Location: " } "{request.location}" }
                    p { strong { "Pickup Time: " } "{pickup}" }
                    if let Some(volunteer) = &request.volunteer {
                        p { strong { "Volunteer: " } "{volunteer}" }
                    }
                }
            }
            Badge { variant: donation_status_badge(request.status), {request.status.as_str()} }
        }
    }
}
