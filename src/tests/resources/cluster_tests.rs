use crate::{RancherError, tests::fixtures::create_test_client};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn test_list_clusters_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v3/clusters"))
        .and(header("Authorization", "Bearer token-test:secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "collection",
            "data": [
                {
                    "id": "local",
                    "name": "local",
                    "state": "active",
                    "provider": "k3s",
                    "version": { "gitVersion": "v1.28.10+k3s1" },
                    "capacity": { "cpu": "4", "memory": "8Gi" },
                    "requested": { "cpu": "1200m", "memory": "1Gi" },
                    "allocatable": { "cpu": "4", "memory": "7800Mi" }
                },
                {
                    "id": "c-m-7x2k",
                    "name": "Prod-East-1",
                    "state": "provisioning",
                    "driverName": "rancherKubernetesEngine",
                    "rancherKubernetesEngineConfig": { "kubernetesVersion": "v1.26.15-rancher1-1" },
                    "nodeCount": 5,
                    "conditions": [
                        { "type": "Provisioned", "status": "True" },
                        { "type": "Ready", "status": "Unknown", "message": "waiting" }
                    ]
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let clusters = client.list_clusters().await.unwrap();
    assert_eq!(clusters.len(), 2);

    let local = &clusters[0];
    assert_eq!(local.id, "local");
    assert_eq!(local.provider, "k3s");
    assert_eq!(local.k8s_version, "v1.28.10+k3s1");
    assert_eq!(local.node_count, None);
    assert_eq!(local.cpu_requested, "1200m");
    assert_eq!(local.allocatable_memory, "7800Mi");
    assert_eq!(local.cpu_usage().unwrap().percent, 30);

    let east = &clusters[1];
    assert_eq!(east.name, "Prod-East-1");
    assert_eq!(east.state, "provisioning");
    assert_eq!(east.provider, "rancherKubernetesEngine");
    assert_eq!(east.k8s_version, "v1.26.15-rancher1-1");
    assert_eq!(east.node_count, Some(5));
    assert_eq!(east.conditions[1]["message"], "waiting");
    assert_eq!(east.cpu_capacity, "");
    assert!(east.cpu_usage().is_none());
}

#[tokio::test]
async fn test_list_clusters_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v3/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let clusters = client.list_clusters().await.unwrap();
    assert!(clusters.is_empty());
}

#[tokio::test]
async fn test_list_clusters_is_not_retried_on_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v3/clusters"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client.list_clusters().await;
    assert!(matches!(
        result,
        Err(RancherError::UpstreamHttp { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_find_clusters_by_name() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v3/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "id": "c-1", "name": "Prod-East-1" },
                { "id": "c-2", "name": "dev" },
                { "id": "c-3", "name": "prod-east-2" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let found = client.find_clusters_by_name("east").await.unwrap();
    let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c-1", "c-3"]);
}
