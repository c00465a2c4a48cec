//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{
    tab_label_for_key, CLIENTS, EMPLOYEES, MAINTENANCE_REQUESTS, ORDER_HISTORY, PROPERTIES,
    PURCHASE_ORDERS, SALES_ORDERS,
};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
    admin_only: bool,
}

fn menu_item(key: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "workflows",
            label: "Workflows",
            icon: "layers",
            items: vec![
                menu_item(SALES_ORDERS, "sales"),
                menu_item(PURCHASE_ORDERS, "purchases"),
                menu_item(MAINTENANCE_REQUESTS, "maintenance"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "directories",
            label: "Directories",
            icon: "database",
            items: vec![menu_item(CLIENTS, "clients"), menu_item(PROPERTIES, "properties")],
            admin_only: false,
        },
        MenuGroup {
            id: "reports",
            label: "Reports",
            icon: "bar-chart",
            items: vec![menu_item(ORDER_HISTORY, "history")],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![menu_item(EMPLOYEES, "employees")],
            admin_only: true,
        },
    ]
}

/// Groups shown to the current user
fn visible_groups(is_admin: bool) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter(|group| is_admin || !group.admin_only)
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let is_admin = auth_state.with_untracked(|state| state.is_admin());
    let expanded_groups = RwSignal::new(vec!["workflows", "directories", "reports"]);

    view! {
        <div class="app-sidebar__content">
            {visible_groups(is_admin)
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let is_expanded = move || expanded_groups.with(|g| g.contains(&group_id));
                    let toggle = move |_| {
                        expanded_groups.update(|items| {
                            if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                items.remove(pos);
                            } else {
                                items.push(group_id);
                            }
                        })
                    };
                    let items = StoredValue::new(group.items);

                    view! {
                        <div>
                            <div class="app-sidebar__item" on:click=toggle>
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|(key, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| a.as_deref() == Some(key))
                                                    }
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administration_group_hidden_from_non_admins() {
        let ids: Vec<_> = visible_groups(false).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["workflows", "directories", "reports"]);
        assert!(visible_groups(true).iter().any(|g| g.id == "administration"));
    }

    #[test]
    fn test_every_item_has_a_known_label() {
        for group in get_menu_groups() {
            for (_, label, _) in group.items {
                assert_ne!(label, "Page");
            }
        }
    }
}
