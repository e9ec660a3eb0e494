use clap::{Parser, ValueEnum};

use crate::ai::Difficulty;
use crate::player::Player;
use crate::types::Disc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeatKind {
    Human,
    Ai,
}

/// Console Othello against a minimax opponent.
#[derive(Parser, Debug)]
#[command(name = "othello", version)]
pub struct Cli {
    /// Who plays Black (moves first).
    #[arg(long, value_enum, default_value_t = SeatKind::Human)]
    pub black: SeatKind,

    /// Who plays White.
    #[arg(long, value_enum, default_value_t = SeatKind::Ai)]
    pub white: SeatKind,

    /// Search depth used by AI seats.
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    #[arg(long, default_value = "Black")]
    pub black_name: String,

    #[arg(long, default_value = "White")]
    pub white_name: String,

    /// Log filter, e.g. `debug` or `othello=trace`. Falls back to `RUST_LOG`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Builds the (black, white) players.
    pub fn players(&self) -> (Player, Player) {
        (
            self.seat(self.black, &self.black_name, Disc::Black),
            self.seat(self.white, &self.white_name, Disc::White),
        )
    }

    fn seat(&self, kind: SeatKind, name: &str, color: Disc) -> Player {
        match kind {
            SeatKind::Human => Player::human(name, color),
            SeatKind::Ai => Player::ai(name, color, self.difficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerKind;

    #[test]
    fn defaults_seat_a_human_against_an_easy_ai() {
        let cli = Cli::try_parse_from(["othello"]).unwrap();
        let (black, white) = cli.players();

        assert_eq!(black.kind(), PlayerKind::Human);
        assert_eq!(black.name(), "Black");
        assert_eq!(white.kind(), PlayerKind::Ai(Difficulty::Easy));
        assert_eq!(white.color(), Disc::White);
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn flags_override_seats_and_difficulty() {
        let cli = Cli::try_parse_from([
            "othello",
            "--black",
            "ai",
            "--white",
            "human",
            "--difficulty",
            "very-hard",
            "--white-name",
            "Youssef",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let (black, white) = cli.players();

        assert_eq!(black.kind(), PlayerKind::Ai(Difficulty::VeryHard));
        assert_eq!(white.kind(), PlayerKind::Human);
        assert_eq!(white.name(), "Youssef");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        assert!(Cli::try_parse_from(["othello", "--difficulty", "insane"]).is_err());
    }
}
