//! Errors raised while reading a roster or generating a bracket.

/// Everything that can stop a bracket from being generated.
#[derive(Debug, thiserror::Error)]
pub enum BracketError {
    #[error("a double-elimination bracket needs at least 2 players, got {count}")]
    NotEnoughPlayers { count: usize },

    #[error("starting round must be at least 1, got {round}")]
    InvalidStartingRound { round: u32 },

    #[error("starting round {round} leaves no room for {rounds} rounds")]
    StartingRoundTooLate { round: u32, rounds: u32 },

    #[error("input is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error("failed to serialize bracket")]
    Serialize(#[source] serde_json::Error),

    #[error("roster must be a JSON array of players, got {found}")]
    NotAnArray { found: &'static str },
}
