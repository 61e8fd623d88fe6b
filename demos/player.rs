// Usage: COC_TOKEN=<APITOKEN> cargo run --example player -- <PLAYERTAG>
use clashofclans_cc::CocClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let tag = env::args().nth(1).ok_or("usage: player <PLAYERTAG>")?;
    let client = CocClient::new(token);

    let player = client.get_player(&tag).await?;
    println!("{} ({})", player.name, player.tag);
    println!(
        "TH{}, level {}, {} trophies (best {})",
        player.town_hall_level, player.exp_level, player.trophies, player.best_trophies
    );
    if let Some(clan) = &player.clan {
        println!("Clan: {} ({}), role: {}", clan.name, clan.tag, player.role);
    }
    println!("Heroes:");
    for hero in &player.heroes {
        println!("  {:<24} {:>2}/{}", hero.name, hero.level, hero.max_level);
    }

    Ok(())
}
