pub mod a001_sales_order;
pub mod a002_purchase_order;
pub mod a003_maintenance_request;
pub mod a004_client;
pub mod a005_property;
pub mod a006_employee;
