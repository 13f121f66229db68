use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{Engine, Intent, BOARD_SIZE};

/// A sequence of intents, most of them legal or close to legal.
#[derive(Clone, Debug)]
pub struct IntentSequence {
    pub intents: Vec<Intent>,
    /// Seeds the RNG used for start intents.
    pub seed: u64,
}

impl IntentSequence {
    pub fn apply_to(&self, engine: &mut Engine) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        for &intent in &self.intents {
            engine.apply(intent, &mut rng);
        }
    }
}

impl Arbitrary for IntentSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (4 * g.size() + 1);
        Self {
            intents: (0..len).map(|_| Intent::arbitrary(g)).collect(),
            seed: u64::arbitrary(g),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let seed = self.seed;
        Box::new(self.intents.shrink().map(move |intents| Self { intents, seed }))
    }
}

impl Arbitrary for Intent {
    fn arbitrary(g: &mut Gen) -> Self {
        // Coordinates go one square past each edge of the board
        let coord = |g: &mut Gen| (u8::arbitrary(g) % (BOARD_SIZE as u8 + 2)) as i8 - 1;
        match u8::arbitrary(g) % 10 {
            0 => Intent::Start,
            1..=6 => Intent::Cell {
                i: coord(g),
                j: coord(g),
            },
            _ => Intent::Tile {
                tile: *g.choose(&[-3, -2, -1, 0, 1, 2, 3]).unwrap(),
            },
        }
    }
}
