//! Per-game records and the JSONL writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use four_hundred::domain::GameAggregate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_no: u32,
    pub seed: u64,
    pub finished: bool,
    pub rounds_played: u32,
    pub tricks_played: u32,
    /// Indexed by seat.
    pub final_scores: [i32; 4],
    /// 0 for seats {0, 2}, 1 for seats {1, 3}.
    pub winning_team: Option<usize>,
    pub win_score: i32,
}

impl GameRecord {
    pub fn from_aggregate(
        game_no: u32,
        seed: u64,
        tricks_played: u32,
        aggregate: &GameAggregate,
    ) -> Self {
        let game = &aggregate.game;
        let winning_team = game
            .winning_team
            .and_then(|id| game.teams.iter().position(|t| t.id == id));
        Self {
            game_no,
            seed,
            finished: game.over,
            rounds_played: game.round_no,
            tricks_played,
            final_scores: aggregate.players.each_ref().map(|p| p.score),
            winning_team,
            win_score: game.win_score,
        }
    }
}

pub struct OutputWriter {
    jsonl_writer: Option<BufWriter<File>>,
    jsonl_path: Option<PathBuf>,
}

impl OutputWriter {
    /// With no path nothing is written.
    pub fn new(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let Some(path) = path else {
            return Ok(Self {
                jsonl_writer: None,
                jsonl_path: None,
            });
        };
        let path = Path::new(path);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self {
            jsonl_writer: Some(BufWriter::new(File::create(path)?)),
            jsonl_path: Some(path.to_path_buf()),
        })
    }

    pub fn write_game(&mut self, record: &GameRecord) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.jsonl_writer {
            let json = serde_json::to_string(record)?;
            writeln!(writer, "{json}")?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.jsonl_writer {
            writer.flush()?;
        }
        Ok(self.jsonl_path)
    }
}
