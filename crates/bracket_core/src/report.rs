//! Bracket text report

use crate::bracket::Bracket;
use crate::types::MatchRef;

impl<P> Bracket<P> {
    /// Generate a text report, one line per match.
    ///
    /// `name` renders a player; empty slots show as `-`.
    pub fn generate_report(&self, name: impl Fn(&P) -> String) -> String {
        let slot = |player: &Option<P>| player.as_ref().map(&name).unwrap_or_else(|| "-".to_string());
        let link = |target: Option<MatchRef>| target.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string());

        let mut report = String::new();
        report.push_str(&format!(
            "=== Double Elimination: {} matches, {} rounds ===\n\n",
            self.matches.len(),
            self.rounds.len()
        ));
        report.push_str(&format!(
            "{:<16} {:>5}  {:<20} vs {:<20} {:>10} {:>10}\n",
            "Round", "Match", "Player 1", "Player 2", "Win", "Loss"
        ));
        report.push_str(&"-".repeat(92));
        report.push('\n');

        for m in &self.matches {
            report.push_str(&format!(
                "{:<16} {:>5}  {:<20} vs {:<20} {:>10} {:>10}\n",
                self.label(m.round).unwrap_or("?"),
                m.match_number,
                slot(&m.player1),
                slot(&m.player2),
                link(m.win_advance),
                link(m.loss_advance)
            ));
        }

        report
    }
}
