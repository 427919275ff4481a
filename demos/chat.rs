//! Ask a single question about the clusters managed by a Rancher server.
//!
//! Reads `RANCHER_BASE_URL`, `RANCHER_API_TOKEN` and friends from the
//! environment (or a `.env` file) and prints the answer.
//!
//! ```text
//! cargo run --example chat -- "show nodes for cluster prod-east"
//! ```

use rancher_assist::{RancherClient, RancherResult, UsageLevel};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> RancherResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let question = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let question = if question.is_empty() {
        "list all clusters".to_string()
    } else {
        question
    };

    let client = RancherClient::from_env()?;

    let stats = client.statistics().await;
    match &stats.error {
        Some(error) => println!("Statistics unavailable: {}", error),
        None => println!(
            "{} clusters ({} active), {} nodes\n",
            stats.total_clusters, stats.active_clusters, stats.total_nodes
        ),
    }

    let parsed = RancherClient::classify(&question);
    println!("> {}  [{} '{}']", question, parsed.intent.as_str(), parsed.keyword);

    let reply = client.ask(&question).await?;
    println!("{}\n", reply.message.replace("**", ""));

    for summary in &reply.results {
        let cluster = summary.cluster();
        println!(
            "{} ({}) - {} - {} {} - {} nodes, {} down",
            cluster.name,
            cluster.id,
            cluster.state,
            cluster.provider,
            cluster.k8s_version,
            summary.total_nodes(),
            summary.down_nodes()
        );
        if let Some(cpu) = cluster.cpu_usage() {
            let flag = if cpu.level == UsageLevel::Normal { "" } else { " !" };
            println!("  cpu {:.2}/{:.2} cores ({}%){}", cpu.requested, cpu.capacity, cpu.percent, flag);
        }
        if let Some(mem) = cluster.memory_usage() {
            let flag = if mem.level == UsageLevel::Normal { "" } else { " !" };
            println!("  mem {:.1}/{:.1} Gi ({}%){}", mem.requested, mem.capacity, mem.percent, flag);
        }
        for node in summary.nodes() {
            let marker = if node.is_down { "DOWN" } else { "up" };
            let roles: Vec<&str> = node.roles.iter().map(|r| r.as_str()).collect();
            println!("  - {} [{}] {} {}", node.name, marker, node.state, roles.join(","));
        }
    }

    Ok(())
}
