// Usage: COC_TOKEN=<APITOKEN> cargo run --example verification -- <PLAYERTAG> <PLAYERAPITOKEN>
use clashofclans_cc::CocClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("COC_TOKEN")?;
    let mut args = env::args().skip(1);
    let tag = args.next().ok_or("usage: verification <PLAYERTAG> <PLAYERAPITOKEN>")?;
    let api_token = args.next().ok_or("usage: verification <PLAYERTAG> <PLAYERAPITOKEN>")?;
    let client = CocClient::new(token);

    let valid = client.verify_player_token(&tag, &api_token).await?;
    if valid {
        println!("API token is valid");
    } else {
        println!("API token is invalid");
    }

    Ok(())
}
