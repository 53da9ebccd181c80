use crate::commands::{displayed, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{PersonId, RollState};
use crate::store::RosterStore;

/// Sets one person's state. The roster order and view are not touched.
pub fn mark(store: &mut RosterStore, id: PersonId, state: RollState) -> Result<CmdResult> {
    let person = store.set_roll_state(id, state)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} ({}): {}",
        person.full_name(),
        person.id,
        state
    )));
    Ok(result
        .with_affected(vec![person])
        .with_listed(displayed(store)))
}

/// Advances one person along the roll cycle, returning the state they landed on.
pub fn cycle(store: &mut RosterStore, id: PersonId) -> Result<(RollState, CmdResult)> {
    let next = store.get(id)?.roll_state.next();
    Ok((next, mark(store, id, next)?))
}

pub fn reset_all(store: &mut RosterStore) -> CmdResult {
    let changed = store.reset_roll_states();
    let mut result = CmdResult::default().with_listed(displayed(store));
    result.add_message(match changed {
        0 => CmdMessage::info("Nothing to reset"),
        1 => CmdMessage::success("Reset 1 person to unmarked"),
        n => CmdMessage::success(format!("Reset {} people to unmarked", n)),
    });
    result
}
