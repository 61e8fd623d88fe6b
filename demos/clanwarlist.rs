// Usage: COC_TOKEN=<APITOKEN> cargo run --example clanwarlist -- <CLANTAG>
use clashofclans_cc::{CocClient, ListOptions};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let tag = env::args().nth(1).ok_or("usage: clanwarlist <CLANTAG>")?;
    let client = CocClient::new(token);

    let options = ListOptions::limit(20);
    let (wars, _) = client.get_clan_war_log(&tag, Some(&options)).await?;
    for war in &wars {
        println!(
            "{:<8} vs {:<24} {:>2}-{:<2} stars, {:.1}% destruction",
            war.result.as_deref().unwrap_or("?"),
            war.opponent.name,
            war.clan.stars,
            war.opponent.stars,
            war.clan.destruction_percentage
        );
    }

    Ok(())
}
