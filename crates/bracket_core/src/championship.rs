//! The single championship match that both bracket finals feed.

use tracing::debug;

use crate::draft::{Draft, RoundPlan};
use crate::field::Field;
use crate::types::RoundType;
use crate::winners::WinnerBracket;

/// Append the championship match and point the winner final at it.
///
/// The round number sits after every loser round so that all links,
/// including loser final -> championship, move to a later round. The loser
/// bracket builder links its final into the second slot afterwards.
pub fn link_championship(field: &Field, winners: &WinnerBracket, draft: &mut Draft) -> RoundPlan {
    let winner_final = winners.final_round();
    let number = winner_final.number + field.loser_round_count() + 1;

    let plan = draft.push_round(number, RoundType::Championship, 1);
    draft.link_win(winner_final.at(1), plan.at(1));

    debug!(round = number, "championship linked");
    plan
}
