use clap::ValueEnum;
use contrast::{Engine, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A piece move, from and to.
pub type PieceMove = ((i8, i8), (i8, i8));

/// A tile value and the square to place it on.
pub type TilePlacement = (i8, (i8, i8));

/// An automated player.
///
/// Players only look at the engine, all their decisions are fed back to it
/// as intents by [`play_game()`](crate::play_game).
pub trait Player {
    fn name(&self) -> &str;

    /// Called in [`Mode::PieceSelecting`](contrast::Mode::PieceSelecting).
    /// Returning `None` resigns.
    fn choose_move(&mut self, engine: &Engine) -> Option<PieceMove>;

    /// Called in [`Mode::TileSelecting`](contrast::Mode::TileSelecting).
    /// Returning `None` resigns.
    fn choose_placement(&mut self, engine: &Engine) -> Option<TilePlacement>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Random,
    Greedy,
}

impl PlayerKind {
    pub fn build(self, seed: u64) -> Box<dyn Player> {
        let rng = StdRng::seed_from_u64(seed);
        match self {
            PlayerKind::Random => Box::new(RandomPlayer { rng }),
            PlayerKind::Greedy => Box::new(GreedyPlayer { rng }),
        }
    }
}

fn all_moves(engine: &Engine) -> Vec<PieceMove> {
    let board = engine.board();
    board
        .pieces_of(engine.turn())
        .flat_map(|from| {
            board
                .legal_destinations(from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Picks uniformly among all legal moves and placements.
pub struct RandomPlayer {
    rng: StdRng,
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, engine: &Engine) -> Option<PieceMove> {
        all_moves(engine).choose(&mut self.rng).copied()
    }

    fn choose_placement(&mut self, engine: &Engine) -> Option<TilePlacement> {
        let tile = *engine.selectable_tiles().choose(&mut self.rng)?;
        let at = *engine.legal_placements().choose(&mut self.rng)?;
        Some((tile, at))
    }
}

/// Advances as far as possible toward the opponent's home row, and puts its
/// strongest tile next to its own pieces.
pub struct GreedyPlayer {
    rng: StdRng,
}

impl GreedyPlayer {
    fn pick_best<T: Copy>(&mut self, candidates: impl Iterator<Item = (i32, T)>) -> Option<T> {
        let mut top_choices: Vec<T> = Vec::new();
        let mut top_score = i32::MIN;
        for (score, candidate) in candidates {
            match score.cmp(&top_score) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => {
                    top_choices.push(candidate);
                }
                std::cmp::Ordering::Greater => {
                    top_choices = vec![candidate];
                    top_score = score;
                }
            }
        }
        top_choices.choose(&mut self.rng).copied()
    }
}

fn friendly_neighbors(engine: &Engine, side: Side, (i, j): (i8, i8)) -> i32 {
    let mut count = 0;
    for di in -1..=1 {
        for dj in -1..=1 {
            // Out-of-bounds squares read as empty
            if (di, dj) != (0, 0) && engine.cell(i + di, j + dj).owner() == Some(side) {
                count += 1;
            }
        }
    }
    count
}

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(&mut self, engine: &Engine) -> Option<PieceMove> {
        let forward = engine.turn().forward() as i32;
        let moves = all_moves(engine);
        self.pick_best(
            moves
                .into_iter()
                .map(|(from, to)| ((to.0 - from.0) as i32 * forward, (from, to))),
        )
    }

    fn choose_placement(&mut self, engine: &Engine) -> Option<TilePlacement> {
        let tile = engine
            .selectable_tiles()
            .into_iter()
            .max_by_key(|t| t.unsigned_abs())?;
        let side = engine.turn();
        let placements = engine.legal_placements();
        let at = self.pick_best(
            placements
                .into_iter()
                .map(|at| (friendly_neighbors(engine, side, at), at)),
        )?;
        Some((tile, at))
    }
}
