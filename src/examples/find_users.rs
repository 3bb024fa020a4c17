//! Find Users Example
//!
//! Pages through every user matching a query, one request per page.
//!
//! Run with: USERSEARCH_URL=http://localhost:8080 USERSEARCH_TOKEN=ok \
//!     cargo run --example find_users

use usersearch_rs::{ClientConfig, OrderBy, SearchClient, SearchRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::var("USERSEARCH_URL").unwrap_or_else(|_| "http://localhost:8080".into());
    let token = std::env::var("USERSEARCH_TOKEN").unwrap_or_default();

    let client = SearchClient::new(ClientConfig::new(url, token))?;
    println!("Client ready: {:?}\n", client.config());

    let page_size = 5;
    let mut offset = 0;

    loop {
        let req = SearchRequest::new(page_size, offset)
            .with_query("Name")
            .order_by_field("Name", OrderBy::Asc);

        let page = client.find_users(&req).await?;
        for user in &page.users {
            println!("{:>4}  {:<20} age {:<3} {}", user.id, user.name, user.age, user.gender);
        }

        if !page.next_page {
            break;
        }
        offset += page_size;
    }

    Ok(())
}
