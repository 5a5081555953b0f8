//! Text shown around the playfield: the HUD line and the game-over dialog

use crate::sim::{GameOverReport, Snapshot};

/// HUD line drawn in the top-left corner
pub fn hud_line(snapshot: &Snapshot) -> String {
    format!(
        "Time remaining: {:.1} seconds",
        snapshot.time_left.as_secs_f32()
    )
}

/// Contents of the game-over dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverDialog {
    pub title: String,
    pub message: String,
    pub button: &'static str,
}

impl GameOverDialog {
    pub fn from_report(report: &GameOverReport) -> Self {
        let title = if report.win { "You Win!" } else { "You Lose" };
        Self {
            title: title.to_string(),
            message: format!(
                "Shots fired: {}\nTotal time: {:.1}",
                report.shots_fired,
                report.total_elapsed.as_secs_f32()
            ),
            button: "Reset Game",
        }
    }
}
