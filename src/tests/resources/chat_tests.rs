use crate::{
    QueryIntent, RancherClient,
    chat::application::response::chat_response::NOT_FOUND_MESSAGE,
    tests::fixtures::create_test_client,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn mount_fleet(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v3/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "id": "c-east", "name": "Prod-East-1", "state": "active" },
                { "id": "c-west", "name": "prod-west", "state": "Active" },
                { "id": "c-lab", "name": "lab", "state": "error" }
            ]
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .and(query_param("clusterId", "c-east"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "nodeName": "east-cp-1", "state": "active", "controlPlane": true },
                { "nodeName": "worker-3", "state": "unavailable", "worker": true },
                { "nodeName": "worker-4", "state": "running", "worker": true }
            ]
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .and(query_param("clusterId", "c-west"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .and(query_param("clusterId", "c-lab"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [ { "nodeName": "lab-worker-1", "state": "error" } ]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_ask_list_all_clusters() {
    let mock_server = MockServer::start().await;
    mount_fleet(&mock_server).await;
    let client = create_test_client(&mock_server.uri());

    let reply = client.ask("list all clusters").await.unwrap();
    assert_eq!(reply.count, 3);

    let ids: Vec<&str> = reply.results.iter().map(|s| s.cluster().id.as_str()).collect();
    assert_eq!(ids, ["c-east", "c-west", "c-lab"]);

    let east = &reply.results[0];
    assert_eq!(east.total_nodes(), 3);
    assert_eq!(east.down_node_names(), ["worker-3"]);

    // Failed node listing degrades to an empty node list.
    let west = &reply.results[1];
    assert_eq!(west.total_nodes(), 0);
    assert_eq!(west.down_nodes(), 0);

    assert_eq!(
        reply.message,
        "Found **3** cluster(s). **2** node(s) down across 2 cluster(s)."
    );
}

#[tokio::test]
async fn test_ask_cluster_detail() {
    let mock_server = MockServer::start().await;
    mount_fleet(&mock_server).await;
    let client = create_test_client(&mock_server.uri());

    let reply = client.ask("cluster EAST").await.unwrap();
    assert_eq!(reply.count, 1);
    assert_eq!(reply.results[0].cluster().name, "Prod-East-1");
    assert!(reply.message.contains("'**east**'"));
}

#[tokio::test]
async fn test_ask_node_detail() {
    let mock_server = MockServer::start().await;
    mount_fleet(&mock_server).await;
    let client = create_test_client(&mock_server.uri());

    let reply = client.ask("node worker").await.unwrap();
    assert_eq!(reply.count, 2);
    let names: Vec<&str> = reply.results[0]
        .nodes()
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, ["worker-3", "worker-4"]);
    assert_eq!(reply.results[1].cluster().id, "c-lab");
    assert_eq!(reply.results[1].total_nodes(), 1);
}

#[tokio::test]
async fn test_ask_without_match() {
    let mock_server = MockServer::start().await;
    mount_fleet(&mock_server).await;
    let client = create_test_client(&mock_server.uri());

    let reply = client.ask("foobar").await.unwrap();
    assert_eq!(reply.count, 0);
    assert_eq!(reply.message, NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_classify_execute_format_surface() {
    let mock_server = MockServer::start().await;
    mount_fleet(&mock_server).await;
    let client = create_test_client(&mock_server.uri());

    let parsed = RancherClient::classify("show me lab");
    assert_eq!(parsed.intent, QueryIntent::ClusterDetail);
    assert_eq!(parsed.keyword, "lab");

    let results = client.execute(parsed.intent, &parsed.keyword).await.unwrap();
    let reply = RancherClient::format(results, parsed.intent, &parsed.keyword);
    assert_eq!(reply.count, 1);
    assert_eq!(reply.results[0].down_node_names(), ["lab-worker-1"]);
}

#[tokio::test]
async fn test_cluster_summary_by_id() {
    let mock_server = MockServer::start().await;
    mount_fleet(&mock_server).await;
    let client = create_test_client(&mock_server.uri());

    let summaries = client.cluster_summary(Some("c-lab"), None).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].cluster().name, "lab");
}

#[tokio::test]
async fn test_statistics() {
    let mock_server = MockServer::start().await;
    mount_fleet(&mock_server).await;
    let client = create_test_client(&mock_server.uri());

    let stats = client.statistics().await;
    assert_eq!(stats.total_clusters, 3);
    assert_eq!(stats.active_clusters, 2);
    assert_eq!(stats.total_nodes, 4);
    assert!(stats.error.is_none());
}

#[tokio::test]
async fn test_statistics_when_upstream_unreachable() {
    let client = create_test_client("http://127.0.0.1:1");

    let stats = client.statistics().await;
    assert_eq!(stats.total_clusters, 0);
    assert_eq!(stats.total_nodes, 0);
    assert!(stats.is_error());
}

#[tokio::test]
async fn test_ask_when_upstream_unreachable() {
    let client = create_test_client("http://127.0.0.1:1");

    let err = client.ask("list all clusters").await.unwrap_err();
    assert!(err.is_connection());
}
