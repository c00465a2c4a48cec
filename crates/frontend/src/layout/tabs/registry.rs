//! Maps a tab key to the page it shows.

use super::tab_labels::{
    parse_detail_key, CLIENTS, EMPLOYEES, MAINTENANCE_REQUESTS, ORDER_HISTORY, PROPERTIES,
    PURCHASE_ORDERS, SALES_ORDERS,
};
use crate::domain::a001_sales_order::ui::details::SalesOrderDetails;
use crate::domain::a001_sales_order::ui::list::SalesOrderList;
use crate::domain::a002_purchase_order::ui::details::PurchaseOrderDetails;
use crate::domain::a002_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a003_maintenance_request::ui::details::MaintenanceRequestDetails;
use crate::domain::a003_maintenance_request::ui::list::MaintenanceRequestList;
use crate::domain::a004_client::ui::details::ClientDetails;
use crate::domain::a004_client::ui::list::ClientList;
use crate::domain::a005_property::ui::details::PropertyDetails;
use crate::domain::a005_property::ui::list::PropertyList;
use crate::domain::a006_employee::ui::list::EmployeeList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_order_history::ui::list::OrderHistoryList;
use leptos::prelude::*;

/// Render the content of the tab with the given key.
///
/// Unknown keys get a placeholder so a stale `?active=` never breaks the shell.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    if let Some((list_key, id)) = parse_detail_key(key) {
        return render_detail(key, list_key, id.to_string(), tabs_store);
    }

    match key {
        SALES_ORDERS => view! { <SalesOrderList /> }.into_any(),
        PURCHASE_ORDERS => view! { <PurchaseOrderList /> }.into_any(),
        MAINTENANCE_REQUESTS => view! { <MaintenanceRequestList /> }.into_any(),
        CLIENTS => view! { <ClientList /> }.into_any(),
        PROPERTIES => view! { <PropertyList /> }.into_any(),
        EMPLOYEES => view! { <EmployeeList /> }.into_any(),
        ORDER_HISTORY => view! { <OrderHistoryList /> }.into_any(),
        _ => unknown_tab(key),
    }
}

fn render_detail(key: &str, list_key: &str, id: String, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match list_key {
        SALES_ORDERS => view! { <SalesOrderDetails id=id on_close=on_close /> }.into_any(),
        PURCHASE_ORDERS => view! { <PurchaseOrderDetails id=id on_close=on_close /> }.into_any(),
        MAINTENANCE_REQUESTS => {
            view! { <MaintenanceRequestDetails id=id on_close=on_close /> }.into_any()
        }
        CLIENTS => view! { <ClientDetails id=id on_close=on_close /> }.into_any(),
        PROPERTIES => view! { <PropertyDetails id=id on_close=on_close /> }.into_any(),
        _ => unknown_tab(key),
    }
}

fn unknown_tab(key: &str) -> AnyView {
    log::warn!("Unknown tab key: {}", key);
    view! { <div class="placeholder">"Page not found"</div> }.into_any()
}
