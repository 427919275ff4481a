pub mod cluster_record;
pub mod cluster_summary;
pub mod node_record;
pub mod rancher_connection;
pub mod resource_usage;
pub mod state_health;
pub mod statistics;
