//! Tab keys and their titles.
//!
//! List pages use the aggregate directory name as key (`a001_sales_order`);
//! record details use `{list key}_detail_{record id}`.

pub const SALES_ORDERS: &str = "a001_sales_order";
pub const PURCHASE_ORDERS: &str = "a002_purchase_order";
pub const MAINTENANCE_REQUESTS: &str = "a003_maintenance_request";
pub const CLIENTS: &str = "a004_client";
pub const PROPERTIES: &str = "a005_property";
pub const EMPLOYEES: &str = "a006_employee";
pub const ORDER_HISTORY: &str = "p900_order_history";

const DETAIL_SEPARATOR: &str = "_detail_";

/// Title of a list tab. Fallback: "Page".
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        SALES_ORDERS => "Sales Orders",
        PURCHASE_ORDERS => "Purchase Orders",
        MAINTENANCE_REQUESTS => "Maintenance Requests",
        CLIENTS => "Client Onboarding",
        PROPERTIES => "Properties",
        EMPLOYEES => "Employees",
        ORDER_HISTORY => "Order History",
        _ => "Page",
    }
}

pub fn detail_tab_key(list_key: &str, id: &str) -> String {
    format!("{}{}{}", list_key, DETAIL_SEPARATOR, id)
}

/// Split a detail key into (list key, record id)
pub fn parse_detail_key(key: &str) -> Option<(&str, &str)> {
    let (list_key, id) = key.split_once(DETAIL_SEPARATOR)?;
    (!id.is_empty()).then_some((list_key, id))
}

/// Title for any tab key: the record id for details, the list label otherwise
pub fn tab_title(key: &str) -> String {
    match parse_detail_key(key) {
        Some((_, id)) => id.to_string(),
        None => tab_label_for_key(key).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_key_round_trip() {
        let key = detail_tab_key(SALES_ORDERS, "SO-0001");
        assert_eq!(key, "a001_sales_order_detail_SO-0001");
        assert_eq!(parse_detail_key(&key), Some((SALES_ORDERS, "SO-0001")));
        assert_eq!(parse_detail_key(SALES_ORDERS), None);
        assert_eq!(parse_detail_key("a001_sales_order_detail_"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(tab_title(CLIENTS), "Client Onboarding");
        assert_eq!(tab_title("a003_maintenance_request_detail_MR-0002"), "MR-0002");
        assert_eq!(tab_title("unknown"), "Page");
    }
}
