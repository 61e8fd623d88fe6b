// Usage: COC_TOKEN=<APITOKEN> cargo run --example clanlabels
use clashofclans_cc::CocClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let client = CocClient::new(token);

    let (labels, _) = client.get_clan_labels(None).await?;
    for label in &labels {
        println!("{:>9}  {}", label.id, label.name);
    }

    Ok(())
}
