use contrast::{Engine, Intent, Side, Transition};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::player::Player;
use crate::recording::{GameRecording, Recorder};

/// How a game ended.
///
/// The rules have no winner, so a game runs until the side to move can no
/// longer finish a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The side to move has no move, no tile, or no square for a tile left.
    Stalled { player_idx: usize, turns: usize },
    TurnLimitReached { turns: usize },
    Resigned { player_idx: usize, turns: usize },
    /// The player submitted an intent the engine ignored.
    IllegalIntentByPlayer { player_idx: usize, intent: Intent },
}

pub struct GameReport {
    pub result: GameResult,
    pub recording: GameRecording,
}

// The engine together with everything fed into it.
struct Session {
    engine: Engine,
    rng: StdRng,
    intents: Vec<Intent>,
}

impl Session {
    fn submit(&mut self, intent: Intent) -> Option<Transition> {
        let transition = self.engine.apply(intent, &mut self.rng)?;
        trace!(?intent, ?transition);
        self.intents.push(intent);
        Some(transition)
    }
}

/// Plays one game between two players.
///
/// The players are assigned a side randomly, and the engine picks the
/// starting side. Returns an error only when writing the recording fails.
pub fn play_game(
    rng: &mut StdRng,
    players: &mut [Box<dyn Player>; 2],
    max_turns: usize,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameReport> {
    let sides = {
        let mut arr = [Side::Positive, Side::Negative];
        arr.shuffle(rng);
        arr
    };
    let seed: u64 = rng.gen();
    let mut session = Session {
        engine: Engine::new(),
        rng: StdRng::seed_from_u64(seed),
        intents: Vec::new(),
    };
    if session.submit(Intent::Start).is_none() {
        anyhow::bail!("A fresh engine did not accept the start intent");
    }

    let result = run_turns(&mut session, players, sides, max_turns);
    debug!(?result, seed, "Game over");

    let recording = GameRecording {
        seed,
        intents: session.intents,
        final_state: session.engine,
    };
    if let Some(rec) = recorder {
        rec.write_game_recording(&recording)?;
    }
    Ok(GameReport { result, recording })
}

fn run_turns(
    session: &mut Session,
    players: &mut [Box<dyn Player>; 2],
    sides: [Side; 2],
    max_turns: usize,
) -> GameResult {
    let mut turns = 0;
    loop {
        let player_idx = if sides[0] == session.engine.turn() { 0 } else { 1 };
        if turns >= max_turns {
            return GameResult::TurnLimitReached { turns };
        }
        if !session.engine.can_complete_turn() {
            return GameResult::Stalled { player_idx, turns };
        }

        let player = &mut players[player_idx];
        let Some((from, to)) = player.choose_move(&session.engine) else {
            return GameResult::Resigned { player_idx, turns };
        };
        for intent in [
            Intent::Cell { i: from.0, j: from.1 },
            Intent::Cell { i: to.0, j: to.1 },
        ] {
            if session.submit(intent).is_none() {
                return GameResult::IllegalIntentByPlayer { player_idx, intent };
            }
        }

        // The chosen move may have used up the last free square
        if !session.engine.can_complete_turn() {
            return GameResult::Stalled { player_idx, turns };
        }
        let Some((tile, at)) = player.choose_placement(&session.engine) else {
            return GameResult::Resigned { player_idx, turns };
        };
        for intent in [Intent::Tile { tile }, Intent::Cell { i: at.0, j: at.1 }] {
            if session.submit(intent).is_none() {
                return GameResult::IllegalIntentByPlayer { player_idx, intent };
            }
        }
        turns += 1;
    }
}
