use std::path::PathBuf;

use clap::Parser;
use judge::{play_game, GameRecording, GameResult, PlayerKind, Recorder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// The kind of the first player
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    player_1: PlayerKind,

    /// The kind of the second player
    #[arg(long, value_enum, default_value_t = PlayerKind::Greedy)]
    player_2: PlayerKind,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// End a game after this many turns
    #[arg(long, default_value_t = 100)]
    max_turns: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// Replay a recorded game instead of playing, and print its final state
    #[arg(long)]
    replay: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    stalled: [usize; 2],
    resigned: [usize; 2],
    illegal_intents: [usize; 2],
    turn_limits: usize,
    turns: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if let Some(path) = args.replay {
        let engine = GameRecording::load(&path)?.replay()?;
        info!(path = %path.display(), "Replay matches the recording");
        println!("{}", serde_json::to_string_pretty(&engine)?);
        return Ok(());
    }

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut players = [args.player_1.build(rng.gen()), args.player_2.build(rng.gen())];
    let player_names = [players[0].name().to_owned(), players[1].name().to_owned()];

    let mut score = MatchScore::default();
    for game_idx in 0..args.num_games {
        let report = play_game(
            &mut rng,
            &mut players,
            args.max_turns,
            &mut recorder,
        )?;
        match report.result {
            GameResult::Stalled { player_idx, turns } => {
                debug!(player = player_names[player_idx], game_idx, turns, "Stalled");
                score.stalled[player_idx] += 1;
                score.turns += turns;
            }
            GameResult::TurnLimitReached { turns } => {
                debug!(game_idx, "Turn limit reached");
                score.turn_limits += 1;
                score.turns += turns;
            }
            GameResult::Resigned { player_idx, turns } => {
                info!(player = player_names[player_idx], game_idx, "Player resigned");
                score.resigned[player_idx] += 1;
                score.turns += turns;
            }
            GameResult::IllegalIntentByPlayer { player_idx, intent } => {
                info!(
                    player = player_names[player_idx],
                    game_idx,
                    ?intent,
                    "Illegal intent by player"
                );
                score.illegal_intents[player_idx] += 1;
            }
        }
    }

    eprintln!(
        "End result after {} games ({:.1} turns on average):",
        args.num_games,
        score.turns as f32 / args.num_games.max(1) as f32
    );
    for idx in 0..2 {
        eprintln!(
            "- {} (player {}): stalled {}, resigned {}, illegal intents {}",
            player_names[idx],
            idx + 1,
            score.stalled[idx],
            score.resigned[idx],
            score.illegal_intents[idx]
        );
    }
    eprintln!("- {} games hit the turn limit", score.turn_limits);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
