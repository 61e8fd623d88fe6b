// Clash of Clans API command line client
// One subcommand per API area; prints human-readable summaries

use clap::{Parser, Subcommand};
use clashofclans_cc::{
    verbosity, ClanSearchOptions, CocClient, CocConfig, ListOptions,
};

const CONFIG_PATH: &str = "coc_config.toml";

#[derive(Parser)]
#[command(name = "coc", about = "Clash of Clans statistics from the command line")]
struct Cli {
    /// API token; falls back to COC_TOKEN or the configured token file
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a clan's profile
    Clan { tag: String },
    /// Search clans by name
    Search {
        name: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// List a clan's members
    Members { tag: String },
    /// Show a clan's war log
    Warlog {
        tag: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show a clan's current war
    War { tag: String },
    /// Show a clan's current war league group
    Cwl { tag: String },
    /// Show an individual war league war by war tag
    CwlWar { war_tag: String },
    /// Show a clan's latest capital raid season
    Capital { tag: String },
    /// Show a player's profile
    Player { tag: String },
    /// Verify a player's in-game API token
    Verify { tag: String, api_token: String },
    /// List trophy leagues
    Leagues,
    /// Show a trophy league and its seasons
    League { league_id: i32 },
    /// Show the player rankings for a finished league season
    Season {
        league_id: i32,
        season_id: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// List war leagues, or show one by id
    Warleagues { league_id: Option<i32> },
    /// List locations usable for rankings, or show one by id
    Locations { location_id: Option<i32> },
    /// Show clan rankings for a location
    Rankings {
        location_id: i32,
        /// Rank players instead of clans
        #[arg(long)]
        players: bool,
        /// Use builder base trophies
        #[arg(long)]
        builder_base: bool,
        /// Rank clans by capital points
        #[arg(long, conflicts_with_all = ["players", "builder_base"])]
        capital: bool,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show the current Gold Pass season
    Goldpass,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = CocConfig::load_or_create(CONFIG_PATH)?;
    config.validate()?;
    verbosity::set_verbosity_level(cli.verbose.max(config.output.verbosity));

    let token = match cli.token {
        Some(token) => token,
        None => config.resolve_token()?,
    };
    let client = CocClient::new(token);

    match cli.command {
        Command::Clan { tag } => {
            let clan = client.get_clan(&tag).await?;
            println!("{} ({})", clan.name, clan.tag);
            println!("  Level {} | {} members | {} points", clan.clan_level, clan.members, clan.clan_points);
            if clan.is_war_log_public {
                println!(
                    "  War record: {} wins / {} losses / {} ties (streak {})",
                    clan.war_wins, clan.war_losses, clan.war_ties, clan.war_win_streak
                );
            } else {
                println!("  War log is private");
            }
            if let Some(location) = &clan.location {
                println!("  Location: {}", location.name);
            }
        }
        Command::Search { name, limit } => {
            let options = ClanSearchOptions {
                name: Some(name),
                limit: Some(limit),
                ..Default::default()
            };
            let (clans, paging) = client.search_clans(&options).await?;
            for clan in &clans {
                println!(
                    "{:<12} {:<20} level {:>2}, {:>2} members",
                    clan.tag, clan.name, clan.clan_level, clan.members
                );
            }
            if let Some(after) = paging.cursors.after {
                println!("(more results after marker {})", after);
            }
        }
        Command::Members { tag } => {
            let (members, _) = client.get_clan_members(&tag, None).await?;
            for member in &members {
                println!(
                    "{:>2}. {:<20} {:<10} {:>5} trophies",
                    member.clan_rank, member.name, member.role, member.trophies
                );
            }
        }
        Command::Warlog { tag, limit } => {
            let options = ListOptions::limit(limit);
            let (wars, _) = client.get_clan_war_log(&tag, Some(&options)).await?;
            for war in &wars {
                println!(
                    "{:<8} vs {:<20} {:>2}-{:<2} stars",
                    war.result.as_deref().unwrap_or("?"),
                    war.opponent.name,
                    war.clan.stars,
                    war.opponent.stars
                );
            }
        }
        Command::War { tag } => {
            let war = client.get_current_war(&tag).await?;
            println!(
                "{} vs {} ({})",
                war.clan.name,
                war.opponent.name,
                war.state.as_deref().unwrap_or("unknown")
            );
            println!(
                "  {} stars ({:.1}%) vs {} stars ({:.1}%)",
                war.clan.stars,
                war.clan.destruction_percentage,
                war.opponent.stars,
                war.opponent.destruction_percentage
            );
            if let Some(end_time) = war.end_time {
                println!("  War ends at {}", end_time);
            }
        }
        Command::Cwl { tag } => {
            let group = client.get_war_league_group(&tag).await?;
            println!("Season {} ({})", group.season, group.state);
            for clan in &group.clans {
                println!("  {:<12} {} (level {})", clan.tag, clan.name, clan.clan_level);
            }
            println!("  {} rounds", group.rounds.len());
        }
        Command::CwlWar { war_tag } => {
            let war = client.get_war_league_war(&war_tag).await?;
            println!("{} vs {} ({})", war.clan.name, war.opponent.name, war.state);
            println!(
                "  {} stars ({:.1}%) vs {} stars ({:.1}%)",
                war.clan.stars,
                war.clan.destruction_percentage,
                war.opponent.stars,
                war.opponent.destruction_percentage
            );
        }
        Command::Capital { tag } => {
            let options = ListOptions::limit(1);
            let (seasons, _) = client.get_capital_raid_seasons(&tag, Some(&options)).await?;
            match seasons.first() {
                Some(season) => {
                    println!("Raid weekend starting {} ({})", season.start_time, season.state);
                    println!(
                        "  {} loot | {} raids | {} attacks",
                        season.capital_total_loot, season.raids_completed, season.total_attacks
                    );
                    println!(
                        "  Rewards: {} offense / {} defense",
                        season.offensive_reward, season.defensive_reward
                    );
                }
                None => println!("No raid seasons recorded"),
            }
        }
        Command::Player { tag } => {
            let player = client.get_player(&tag).await?;
            println!("{} ({})", player.name, player.tag);
            println!(
                "  TH{} | level {} | {} trophies (best {})",
                player.town_hall_level, player.exp_level, player.trophies, player.best_trophies
            );
            println!("  War stars: {}", player.war_stars);
            if let Some(clan) = &player.clan {
                println!("  Clan: {} ({})", clan.name, clan.tag);
            }
            if let Some(league) = &player.league {
                println!("  League: {}", league.name);
            }
        }
        Command::Verify { tag, api_token } => {
            let valid = client.verify_player_token(&tag, &api_token).await?;
            if valid {
                println!("API token is valid");
            } else {
                println!("API token is invalid");
                std::process::exit(1);
            }
        }
        Command::Leagues => {
            let (leagues, _) = client.get_leagues(None).await?;
            for league in &leagues {
                println!("{:>9}  {}", league.id, league.name);
            }
        }
        Command::League { league_id } => {
            let league = client.get_league(league_id).await?;
            println!("{} ({})", league.name, league.id);
            let (seasons, _) = client.get_league_seasons(league_id, None).await?;
            if seasons.is_empty() {
                println!("  No season information (only Legend League has seasons)");
            }
            for season in &seasons {
                println!("  {}", season.id);
            }
        }
        Command::Season {
            league_id,
            season_id,
            limit,
        } => {
            let options = ListOptions::limit(limit);
            let (rankings, _) = client
                .get_league_season_rankings(league_id, &season_id, Some(&options))
                .await?;
            for ranking in &rankings {
                println!(
                    "{:>3}. {:<20} {:>5} trophies ({} attack wins)",
                    ranking.rank, ranking.name, ranking.trophies, ranking.attack_wins
                );
            }
        }
        Command::Warleagues { league_id } => match league_id {
            Some(league_id) => {
                let league = client.get_war_league(league_id).await?;
                println!("{} ({})", league.name, league.id);
            }
            None => {
                let (leagues, _) = client.get_war_leagues(None).await?;
                for league in &leagues {
                    println!("{:>9}  {}", league.id, league.name);
                }
            }
        },
        Command::Locations { location_id } => match location_id {
            Some(location_id) => {
                let location = client.get_location(location_id).await?;
                println!(
                    "{} ({}){}",
                    location.name,
                    location.id,
                    if location.is_country { ", country" } else { "" }
                );
            }
            None => {
                let (locations, _) = client.get_locations(None).await?;
                for location in &locations {
                    println!(
                        "{:>9}  {} {}",
                        location.id,
                        location.name,
                        location
                            .country_code
                            .as_deref()
                            .map(|code| format!("({})", code))
                            .unwrap_or_default()
                    );
                }
            }
        },
        Command::Rankings {
            location_id,
            players,
            builder_base,
            capital,
            limit,
        } => {
            let options = ListOptions::limit(limit);
            match (players, builder_base, capital) {
                (_, _, true) => {
                    let (rankings, _) = client
                        .get_capital_rankings(location_id, Some(&options))
                        .await?;
                    for ranking in &rankings {
                        println!(
                            "{:>3}. {:<20} {:>6} capital points",
                            ranking.rank, ranking.name, ranking.clan_capital_points
                        );
                    }
                }
                (true, true, _) => {
                    let (rankings, _) = client
                        .get_player_builder_base_rankings(location_id, Some(&options))
                        .await?;
                    for ranking in &rankings {
                        println!(
                            "{:>3}. {:<20} {:>5} trophies",
                            ranking.rank, ranking.name, ranking.versus_trophies
                        );
                    }
                }
                (true, false, _) => {
                    let (rankings, _) = client
                        .get_player_rankings(location_id, Some(&options))
                        .await?;
                    for ranking in &rankings {
                        println!(
                            "{:>3}. {:<20} {:>5} trophies",
                            ranking.rank, ranking.name, ranking.trophies
                        );
                    }
                }
                (false, true, _) => {
                    let (rankings, _) = client
                        .get_clan_builder_base_rankings(location_id, Some(&options))
                        .await?;
                    for ranking in &rankings {
                        println!(
                            "{:>3}. {:<20} {:>6} points",
                            ranking.rank, ranking.name, ranking.clan_versus_points
                        );
                    }
                }
                (false, false, _) => {
                    let (rankings, _) = client
                        .get_clan_rankings(location_id, Some(&options))
                        .await?;
                    for ranking in &rankings {
                        println!(
                            "{:>3}. {:<20} {:>6} points",
                            ranking.rank, ranking.name, ranking.clan_points
                        );
                    }
                }
            }
        }
        Command::Goldpass => {
            let season = client.get_gold_pass().await?;
            println!("Gold Pass season: {} to {}", season.start_time, season.end_time);
        }
    }

    Ok(())
}
