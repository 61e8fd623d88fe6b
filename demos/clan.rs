// Usage: COC_TOKEN=<APITOKEN> cargo run --example clan -- <CLANTAG>
use clashofclans_cc::CocClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let tag = env::args().nth(1).ok_or("usage: clan <CLANTAG>")?;
    let client = CocClient::new(token);

    let clan = client.get_clan(&tag).await?;
    println!("{} ({})", clan.name, clan.tag);
    println!(
        "Win: {}, Lose: {}, Draw: {}",
        clan.war_wins, clan.war_losses, clan.war_ties
    );

    Ok(())
}
