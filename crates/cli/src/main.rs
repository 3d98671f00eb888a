// cli/src/main.rs
use anyhow::Context;
use clap::Parser;
use provider::{Provider, RpcCall, SUPPORTED_METHODS};
use thor_client::HttpClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "thor-rpc")]
#[command(about = "Send an Ethereum JSON-RPC call to a Thor node", version, long_about = None)]
struct Cli {
    /// Thorest base URL of the node
    #[arg(short, long, default_value = "http://127.0.0.1:8669")]
    node_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// JSON-RPC method, e.g. eth_blockNumber
    method: String,

    /// Positional parameters, each a JSON value (bare strings allowed)
    params: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| if cli.debug { "debug".into() } else { "info".into() }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if !Provider::<HttpClient>::supports(&cli.method) {
        anyhow::bail!(
            "unsupported method {}; supported: {}",
            cli.method,
            SUPPORTED_METHODS.join(", ")
        );
    }

    let params = cli
        .params
        .iter()
        .map(|raw| {
            // Accept raw JSON, fall back to treating the argument as a string
            serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.clone()))
        })
        .collect();

    let client = HttpClient::connect(cli.node_url).context("building HTTP client")?;
    let prov = Provider::new(client)
        .await
        .context("fetching genesis descriptor")?;

    let response = prov.send(RpcCall::new(1, cli.method, params)).await?;
    println!("{}", serde_json::to_string_pretty(&response.result)?);

    Ok(())
}
