// Usage: COC_TOKEN=<APITOKEN> cargo run --example currentwar -- <CLANTAG>
use clashofclans_cc::CocClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let tag = env::args().nth(1).ok_or("usage: currentwar <CLANTAG>")?;
    let client = CocClient::new(token);

    let war = client.get_current_war(&tag).await?;
    println!(
        "{} vs {} ({} per side)",
        war.clan.name, war.opponent.name, war.team_size
    );
    println!(
        "{} stars ({:.1}%) vs {} stars ({:.1}%)",
        war.clan.stars,
        war.clan.destruction_percentage,
        war.opponent.stars,
        war.opponent.destruction_percentage
    );
    for member in &war.clan.members {
        println!(
            "  {:>2}. {:<20} TH{} - {} attacks used",
            member.map_position,
            member.name,
            member.townhall_level,
            member.attacks.len()
        );
    }

    Ok(())
}
