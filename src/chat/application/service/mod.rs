pub mod query_classifier;
pub mod query_executor;
