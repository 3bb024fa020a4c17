use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use usersearch_core::{ClientConfig, OrderBy, SearchRequest};
use usersearch_rs::SearchClient;

mod commands;
mod telemetry;

fn client_config(matches: &ArgMatches) -> Result<ClientConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => {
            let url = matches
                .get_one::<String>("url")
                .ok_or_else(|| anyhow!("either --url or --config is required"))?;
            ClientConfig::new(url.as_str(), "")
        }
    };

    if let Some(url) = matches.get_one::<String>("url") {
        config.url = url.clone();
    }
    if let Some(token) = matches.get_one::<String>("token") {
        config.access_token = token.clone();
    }
    if let Some(timeout_ms) = matches.get_one::<u64>("timeout-ms") {
        config.timeout_ms = *timeout_ms;
    }

    Ok(config)
}

fn search_request(matches: &ArgMatches) -> SearchRequest {
    let text = |name: &str| {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default()
    };

    SearchRequest {
        limit: matches.get_one::<i32>("limit").copied().unwrap_or_default(),
        offset: matches.get_one::<i32>("offset").copied().unwrap_or_default(),
        query: text("query"),
        order_field: text("order-field"),
        order_by: OrderBy::from(matches.get_one::<i32>("order-by").copied().unwrap_or_default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = commands::new().get_matches();

    telemetry::init_telemetry(
        matches.get_one::<u8>("verbosity").copied().unwrap_or(0),
        matches.get_flag("log-json"),
    )?;

    let config = client_config(&matches)?;
    tracing::info!(url = %config.url, timeout_ms = config.timeout_ms, "usersearch starting");

    let client = SearchClient::new(config)?;
    let request = search_request(&matches);

    let page = match client.find_users(&request).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), timeout = e.is_timeout(), "Search failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
