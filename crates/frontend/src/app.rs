use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::components::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Provide ToastService for notifications returned by list controllers
    provide_context(ToastService::new());

    // Restore the active tab from ?active= and keep the URL in sync
    ctx.init_router_integration();

    view! {
        <Shell />
        <ToastHost />
    }
}
