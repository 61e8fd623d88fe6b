// Usage: COC_TOKEN=<APITOKEN> cargo run --example cwlgroup -- <CLANTAG>
use clashofclans_cc::CocClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let tag = env::args().nth(1).ok_or("usage: cwlgroup <CLANTAG>")?;
    let client = CocClient::new(token);

    let group = client.get_war_league_group(&tag).await?;
    println!("Season {} ({})", group.season, group.state);
    for clan in &group.clans {
        println!(
            "{:<12} {:<24} level {:>2}, {} on roster",
            clan.tag,
            clan.name,
            clan.clan_level,
            clan.members.len()
        );
    }
    for (i, round) in group.rounds.iter().enumerate() {
        println!("round {}: {}", i + 1, round.war_tags.join(" "));
    }

    Ok(())
}
