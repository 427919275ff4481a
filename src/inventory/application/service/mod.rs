pub mod aggregator;
pub mod inventory_service;
