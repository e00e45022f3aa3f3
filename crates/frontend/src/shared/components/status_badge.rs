use contracts::domain::a003_order::aggregate::OrderStatus;
use leptos::prelude::*;

/// Badge class for a status string; unknown values fall back to neutral.
pub fn status_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "pending" => "badge badge--status badge--warning",
        "processing" => "badge badge--status badge--info",
        "shipped" => "badge badge--status badge--primary",
        "delivered" | "active" => "badge badge--status badge--success",
        "cancelled" | "canceled" | "inactive" => "badge badge--status badge--error",
        _ => "badge badge--status badge--neutral",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<String>) -> impl IntoView {
    view! {
        <span class=move || status.with(|s| status_class(s))>
            {move || status.get()}
        </span>
    }
}

#[component]
pub fn OrderStatusBadge(#[prop(into)] status: Signal<OrderStatus>) -> impl IntoView {
    view! {
        <StatusBadge status=Signal::derive(move || status.get().to_string()) />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert!(status_class("Delivered").contains("success"));
        assert!(status_class("canceled").contains("error"));
        assert!(status_class("Pending").contains("warning"));
        assert!(status_class("on hold").contains("neutral"));
    }
}
