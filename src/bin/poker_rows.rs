use anyhow::Result;
use clap::Parser;
use poker_rows::agents::RandomAgent;
use poker_rows::config::{MatchConfig, DEFAULT_ROWS, MAX_ROWS};
use poker_rows::game::Match;
use poker_rows::judge::{Outcome, Side};
use poker_rows::row::Row;

/// Play one poker row match between two random agents.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Seed for the deck and both agents; random when omitted.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Rows per side.
    #[clap(long, short, default_value_t = DEFAULT_ROWS as u8,
           value_parser = clap::value_parser!(u8).range(1..=MAX_ROWS as i64))]
    rows: u8,
    /// Log every placement.
    #[clap(long, short)]
    verbose: bool,
}

fn cards(row: &Row) -> String {
    row.as_slice().iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Trace } else { log::LevelFilter::Info };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut config = MatchConfig::new(cli.rows as usize);
    let (mut player, mut opponent) = match cli.seed {
        Some(seed) => {
            config = config.with_seed(seed);
            (RandomAgent::seeded(seed.wrapping_add(1)), RandomAgent::seeded(seed.wrapping_add(2)))
        }
        None => (RandomAgent::from_entropy(), RandomAgent::from_entropy()),
    };

    let mut game = Match::new(config)?;
    let result = game.play_out(&mut player, &mut opponent)?;

    let player_rows = game.rows(Side::Player);
    let opponent_rows = game.rows(Side::Opponent);
    for preview in game.preview() {
        let i = preview.index;
        let mark = match preview.leader {
            Outcome::Player => "<",
            Outcome::Opponent => ">",
            Outcome::Draw => "=",
        };
        println!(
            "Row {}: {:<16} {:<20} {} {:<20} {}",
            i + 1,
            player_rows.get(i).map(cards).unwrap_or_default(),
            preview.text(Side::Player),
            mark,
            preview.text(Side::Opponent),
            opponent_rows.get(i).map(cards).unwrap_or_default(),
        );
    }
    println!(
        "{} ({}-{}, {} drawn)",
        result,
        result.wins(Side::Player),
        result.wins(Side::Opponent),
        result.draws()
    );
    Ok(())
}
