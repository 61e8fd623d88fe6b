// Usage: COC_TOKEN=<APITOKEN> cargo run --example clanmembers -- <CLANTAG>
use clashofclans_cc::CocClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let tag = env::args().nth(1).ok_or("usage: clanmembers <CLANTAG>")?;
    let client = CocClient::new(token);

    let (members, _) = client.get_clan_members(&tag, None).await?;
    for member in &members {
        println!(
            "{:>2}. {:<20} {:<10} {:>5} trophies, {:>4} donated",
            member.clan_rank, member.name, member.role, member.trophies, member.donations
        );
    }

    Ok(())
}
