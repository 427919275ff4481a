mod chat_tests;
mod cluster_tests;
mod node_tests;
