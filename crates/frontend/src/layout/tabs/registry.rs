//! Tab content registry - единственный источник правды для маппинга tab.key → View.
//!
//! Ключи совпадают с `AggregateRoot::full_name()` соответствующего агрегата.

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_client::ui::list::ClientList;
use crate::domain::a003_return::ui::list::ReturnList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_supplier::ui::list::SupplierList;
use crate::domain::a006_role::ui::list::RoleList;
use crate::domain::a007_user::ui::list::UserList;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// Для неизвестных ключей возвращает placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_client" => view! { <ClientList /> }.into_any(),
        "a003_return" => view! { <ReturnList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_supplier" => view! { <SupplierList /> }.into_any(),
        "a006_role" => view! { <RoleList /> }.into_any(),
        "a007_user" => view! { <UserList /> }.into_any(),
        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Раздел не найден"</div> }.into_any()
        }
    }
}
