// Usage: COC_TOKEN=<APITOKEN> cargo run --example clanlist -- <NAME>
use clashofclans_cc::{ClanSearchOptions, CocClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let name = env::args().nth(1).ok_or("usage: clanlist <NAME>")?;
    let client = CocClient::new(token);

    let options = ClanSearchOptions {
        name: Some(name),
        min_members: Some(10),
        limit: Some(20),
        ..Default::default()
    };
    let (clans, paging) = client.search_clans(&options).await?;

    for clan in &clans {
        println!(
            "{:<12} {:<24} level {:>2}, {:>2} members",
            clan.tag, clan.name, clan.clan_level, clan.members
        );
    }
    if let Some(after) = paging.cursors.after {
        println!("next page marker: {}", after);
    }

    Ok(())
}
