// Usage: COC_TOKEN=<APITOKEN> cargo run --example clancapital -- <CLANTAG> [LOCATIONID]
use clashofclans_cc::{CocClient, ListOptions};
use std::env;

const INTERNATIONAL: i32 = 32000006;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let mut args = env::args().skip(1);
    let tag = args.next().ok_or("usage: clancapital <CLANTAG> [LOCATIONID]")?;
    let location_id = match args.next() {
        Some(id) => id.parse()?,
        None => INTERNATIONAL,
    };
    let client = CocClient::new(token);

    let options = ListOptions::limit(3);
    let (seasons, _) = client.get_capital_raid_seasons(&tag, Some(&options)).await?;
    for season in &seasons {
        println!("Raid weekend starting {} ({})", season.start_time, season.state);
        println!(
            "  {} loot, {} raids completed, {} attacks",
            season.capital_total_loot, season.raids_completed, season.total_attacks
        );
        for member in season.members.iter().take(5) {
            println!(
                "  {:<20} {}/{} attacks, {} looted",
                member.name, member.attacks, member.attack_limit, member.capital_resources_looted
            );
        }
    }

    let (leagues, _) = client.get_capital_leagues(None).await?;
    println!("\nCapital leagues:");
    for league in &leagues {
        println!("  {:>9}  {}", league.id, league.name);
    }
    if let Some(league) = leagues.first() {
        let league = client.get_capital_league(league.id).await?;
        println!("Lowest tier: {} ({})", league.name, league.id);
    }

    let (rankings, _) = client
        .get_capital_rankings(location_id, Some(&ListOptions::limit(10)))
        .await?;
    println!("\nTop clans by capital points (location {}):", location_id);
    for ranking in &rankings {
        println!(
            "  {:>3}. {:<20} {:>6} points",
            ranking.rank, ranking.name, ranking.clan_capital_points
        );
    }

    Ok(())
}
