use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use contrast::{Engine, Intent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Everything needed to reproduce a game.
///
/// Loading does not validate `final_state` on its own, [`Self::replay()`]
/// is what ties it to the rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRecording {
    /// Seeds the RNG handed to the start intent.
    pub seed: u64,
    /// Only the accepted intents, in order.
    pub intents: Vec<Intent>,
    pub final_state: Engine,
}

impl GameRecording {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Applies the recorded intents to a fresh engine.
    ///
    /// Fails if an intent is ignored or the result differs from the recorded
    /// final state.
    pub fn replay(&self) -> anyhow::Result<Engine> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut engine = Engine::new();
        for (idx, &intent) in self.intents.iter().enumerate() {
            if engine.apply(intent, &mut rng).is_none() {
                anyhow::bail!("Intent #{} ({:?}) was ignored during replay", idx, intent);
            }
        }
        if engine != self.final_state {
            anyhow::bail!("Replay did not reproduce the recorded final state");
        }
        Ok(engine)
    }
}

/// Writes each game into its own numbered JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    pub fn write_game_recording(&mut self, recording: &GameRecording) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, recording)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}
