//! Sidebar component with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "references",
            label: "Справочники",
            icon: "database",
            items: vec![
                ("a001_category", tab_label_for_key("a001_category"), "categories"),
                ("a004_product", tab_label_for_key("a004_product"), "products"),
                ("a005_supplier", tab_label_for_key("a005_supplier"), "suppliers"),
                ("a002_client", tab_label_for_key("a002_client"), "clients"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Операции",
            icon: "layers",
            items: vec![("a003_return", tab_label_for_key("a003_return"), "returns")],
        },
        MenuGroup {
            id: "administration",
            label: "Администрирование",
            icon: "settings",
            items: vec![
                ("a006_role", tab_label_for_key("a006_role"), "roles"),
                ("a007_user", tab_label_for_key("a007_user"), "users"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Все группы раскрыты при первом показе
    let expanded_groups = RwSignal::new(vec![
        "references".to_string(),
        "operations".to_string(),
        "administration".to_string(),
    ]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();

                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                on:click=move |_| {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.get().contains(&group_id_for_exp)
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                                let item_id = StoredValue::new(id.to_string());
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            let iid = item_id.get_value();
                                                            ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                                                        }
                                                        on:click=move |_| {
                                                            ctx.open_tab(id, label);
                                                        }
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            }
                        </div>
                    }
                }).collect_view()}
        </div>
    }
}
