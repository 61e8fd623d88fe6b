// Usage: COC_TOKEN=<APITOKEN> cargo run --example goldpass
use clashofclans_cc::CocClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let client = CocClient::new(token);

    let season = client.get_gold_pass().await?;
    println!("Gold Pass season runs {} to {}", season.start_time, season.end_time);

    Ok(())
}
