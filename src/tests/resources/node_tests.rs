use crate::{NodeRole, RancherError, tests::fixtures::create_test_client};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

#[tokio::test]
async fn test_list_nodes_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .and(query_param("clusterId", "c-m-7x2k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "nodeName": "east-cp-1",
                    "state": "active",
                    "controlPlane": true,
                    "etcd": true,
                    "worker": false,
                    "info": {
                        "os": {
                            "operatingSystem": "SUSE Linux Enterprise Server 15 SP5",
                            "kernelVersion": "5.14.21-150500.55.52-default"
                        },
                        "cpu": { "count": 8 }
                    },
                    "capacity": { "cpu": "8", "memory": "32Gi" },
                    "requested": { "cpu": "2500m", "memory": "6Gi" },
                    "allocatable": { "cpu": "8", "memory": "31Gi" }
                },
                {
                    "requestedHostname": "east-worker-7",
                    "state": "unavailable",
                    "worker": true,
                    "conditions": [{ "type": "Ready", "status": "False" }]
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let nodes = client.list_nodes("c-m-7x2k").await.unwrap();
    assert_eq!(nodes.len(), 2);

    let cp = &nodes[0];
    assert_eq!(cp.name, "east-cp-1");
    assert_eq!(cp.roles, vec![NodeRole::ControlPlane, NodeRole::Etcd]);
    assert_eq!(cp.os_image, "SUSE Linux Enterprise Server 15 SP5");
    assert_eq!(cp.cpu_count, "8");
    assert_eq!(cp.cpu_requested, "2500m");
    assert!(!cp.is_down);
    assert_eq!(cp.memory_usage().unwrap().percent, 19);

    let worker = &nodes[1];
    assert_eq!(worker.name, "east-worker-7");
    assert_eq!(worker.roles, vec![NodeRole::Worker]);
    assert_eq!(worker.os_image, "N/A");
    assert_eq!(worker.kernel, "N/A");
    assert_eq!(worker.cpu_count, "N/A");
    assert_eq!(worker.memory_capacity, "");
    assert_eq!(worker.conditions[0]["status"], "False");
    assert!(worker.is_down);
}

#[tokio::test]
async fn test_list_nodes_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let nodes = client.list_nodes("c-empty").await.unwrap();
    assert!(nodes.is_empty());
}

#[tokio::test]
async fn test_list_nodes_forbidden() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client.list_nodes("c-1").await;
    assert_eq!(result.unwrap_err().status(), Some(403));
}

#[tokio::test]
async fn test_list_nodes_malformed_payload() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": "not-a-list"
        })))
        .mount(&mock_server)
        .await;

    let result = client.list_nodes("c-1").await;
    assert!(matches!(result, Err(RancherError::Unexpected(_))));
}
