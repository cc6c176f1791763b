//! Human- and machine-readable summaries of tablebase entries.

use serde::Serialize;
use strictly_tablebase::{Absolute, Board, Entry, Player, Tablebase, TerminalState};
use tracing::instrument;

/// Everything the shell shows about one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionReport {
    /// Position string.
    pub position: String,
    #[serde(skip)]
    board: Board,
    /// Player to move.
    pub to_move: Player,
    /// Terminal state of the position.
    pub state: TerminalState,
    /// Value from X's side.
    pub evaluation: Absolute,
    /// Text form of `evaluation`.
    pub summary: String,
    /// Legal moves, best first for the player to move.
    pub lines: Vec<LineReport>,
}

/// One ranked move and the value of the position it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// Cell number (1-9).
    pub cell: u8,
    /// Cell label.
    pub label: &'static str,
    /// Value of the resulting position from X's side.
    pub evaluation: Absolute,
    /// Text form of `evaluation`.
    pub summary: String,
}

impl PositionReport {
    /// Builds the report for `entry`, resolving each move through `table`.
    #[instrument(skip_all, fields(board = %entry.board().notation()))]
    pub fn new(table: &Tablebase, entry: &Entry) -> Self {
        let lines = entry
            .best_moves()
            .iter()
            .filter_map(|ranked| {
                let child = table.get(ranked.child())?;
                Some(LineReport {
                    cell: ranked.position().number(),
                    label: ranked.position().label(),
                    evaluation: child.evaluation(),
                    summary: child.evaluation().to_string(),
                })
            })
            .collect();

        let board = *entry.board();
        Self {
            position: board.notation(),
            board,
            to_move: board.to_move(),
            state: board.state(),
            evaluation: entry.evaluation(),
            summary: entry.evaluation().to_string(),
            lines,
        }
    }
}

impl std::fmt::Display for PositionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "Evaluation: {}", self.summary)?;

        if self.state.is_terminal() {
            return writeln!(f, "Game over: {}", self.state);
        }

        writeln!(f, "To move: {}", self.to_move)?;
        writeln!(f)?;
        writeln!(f, "Lines:")?;
        for line in &self.lines {
            writeln!(f, "  {} {:<14} {}", line.cell, line.label, line.summary)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    fn table() -> &'static Tablebase {
        static TABLE: OnceLock<Tablebase> = OnceLock::new();
        TABLE.get_or_init(Tablebase::generate)
    }

    fn report(notation: &str) -> PositionReport {
        let board: Board = notation.parse().unwrap();
        PositionReport::new(table(), table().lookup(&board).unwrap())
    }

    #[test]
    fn test_lines_follow_ranking() {
        let report = report("x.xoo....");
        assert_eq!(report.lines.len(), 5);
        assert_eq!(report.lines[0].cell, 2);
        assert_eq!(report.lines[0].summary, "x has won");
        assert_eq!(report.summary, "x wins in 1");
    }

    #[test]
    fn test_display_of_finished_game() {
        let text = report("xxxoo....").to_string();
        assert!(text.starts_with("x x x\no o .\n. . .\n"));
        assert!(text.contains("Evaluation: x has won"));
        assert!(text.contains("Game over: x wins"));
        assert!(!text.contains("Lines:"));
    }

    #[test]
    fn test_json_fields() {
        let json = serde_json::to_value(report(".........")).unwrap();
        assert_eq!(json["position"], ".........");
        assert_eq!(json["to_move"], "X");
        assert_eq!(json["state"], "ongoing");
        assert_eq!(json["evaluation"], 0);
        assert_eq!(json["lines"].as_array().unwrap().len(), 9);
    }
}
