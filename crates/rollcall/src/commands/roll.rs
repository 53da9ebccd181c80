use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roll::{Activity, RollInput, RollSummary};
use crate::source::RosterSource;
use crate::store::RosterStore;

/// Head counts over the whole roster. The current search does not narrow them.
pub fn summary(store: &RosterStore) -> CmdResult {
    CmdResult::default().with_summary(RollSummary::from_people(store.records()))
}

/// Snapshots every record and hands the roll to `source`. The roster is left as is.
pub fn complete<S: RosterSource>(
    store: &RosterStore,
    source: &mut S,
    name: Option<&str>,
) -> Result<CmdResult> {
    let input = RollInput::from_records(store.records());
    let summary = input.summary();
    let roll = source.save_roll(&input, name)?;

    let mut result = CmdResult::default().with_summary(summary);
    if summary.is_untouched() {
        result.add_message(CmdMessage::warning(
            "No one was marked; the roll was saved with everyone unmarked",
        ));
    }
    result.add_message(CmdMessage::success(format!(
        "Saved \"{}\" ({} people: {} present, {} late, {} absent)",
        roll.name, summary.all, summary.present, summary.late, summary.absent
    )));
    result.rolls.push(Activity::roll(roll));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Person, RollState, ViewUpdate};
    use crate::source::memory::MemSource;

    fn store() -> RosterStore {
        let mut store = RosterStore::new();
        store
            .ingest(vec![
                Person::new(1, "Bob", "Zed"),
                Person::new(2, "Amy", "Young"),
                Person::new(3, "Pam", "Adams"),
            ])
            .unwrap();
        store
    }

    #[test]
    fn summary_ignores_search() {
        let mut store = store();
        store.set_roll_state(1, RollState::Present).unwrap();
        store.merge_view(ViewUpdate::search("amy"));

        let result = summary(&store);
        let counts = result.summary.unwrap();
        assert_eq!(counts.all, 3);
        assert_eq!(counts.present, 1);
        assert_eq!(counts.unmarked, 2);
    }

    #[test]
    fn complete_saves_full_roster() {
        let mut store = store();
        let mut source = MemSource::new();
        store.set_roll_state(2, RollState::Late).unwrap();
        store.merge_view(ViewUpdate::search("bob"));

        let result = complete(&store, &mut source, Some("Morning")).unwrap();

        let saved = &result.rolls[0].entity;
        assert_eq!(saved.name, "Morning");
        assert_eq!(saved.student_roll_states.len(), 3);
        assert_eq!(saved.student_roll_states[1].roll_state, RollState::Late);
        assert_eq!(source.fetch_activities().unwrap().len(), 1);
        assert!(result
            .messages
            .iter()
            .all(|m| m.level != MessageLevel::Warning));
        // roster untouched
        assert_eq!(store.get(2).unwrap().roll_state, RollState::Late);
    }

    #[test]
    fn complete_unmarked_roll_warns() {
        let store = store();
        let mut source = MemSource::new();
        let result = complete(&store, &mut source, None).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.rolls[0].entity.name, "Roll 1");
    }
}
