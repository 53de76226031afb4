use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || {
            format!("badge {}", variant_class())
        }>{children()}</span>
    }
}

/// Бейдж состояния записи: активна или нет.
#[component]
pub fn StatusBadge(
    /// Флаг активности записи
    #[prop(into)]
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <span class=move || {
            if active.get() { "badge badge--success" } else { "badge badge--neutral" }
        }>{move || if active.get() { "Активен" } else { "Неактивен" }}</span>
    }
}
