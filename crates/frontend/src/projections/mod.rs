pub mod p900_order_history;
