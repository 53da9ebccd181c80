use crate::commands::{displayed, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Person;
use crate::store::RosterStore;

pub fn run(store: &mut RosterStore, raw: Vec<Person>) -> Result<CmdResult> {
    store.ingest(raw)?;
    tracing::info!(count = store.len(), "roster loaded");

    let mut result = CmdResult::default().with_listed(displayed(store));
    let message = match store.len() {
        0 => CmdMessage::warning("Roster is empty"),
        1 => CmdMessage::info("Loaded 1 person"),
        n => CmdMessage::info(format!("Loaded {} people", n)),
    };
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RollcallError;
    use crate::model::RollState;

    #[test]
    fn lists_roster_after_ingest() {
        let mut store = RosterStore::new();
        let mut raw = vec![Person::new(1, "Bob", "Zed"), Person::new(2, "Amy", "Young")];
        raw[1].roll_state = RollState::Late;

        let result = run(&mut store, raw).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[1].roll_state, RollState::Unmarked);
        assert_eq!(result.messages[0].content, "Loaded 2 people");
    }

    #[test]
    fn empty_roster_warns() {
        let mut store = RosterStore::new();
        let result = run(&mut store, Vec::new()).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn duplicate_ids_propagate() {
        let mut store = RosterStore::new();
        let raw = vec![Person::new(4, "A", "B"), Person::new(4, "C", "D")];
        assert!(matches!(
            run(&mut store, raw),
            Err(RollcallError::InvalidInput(_))
        ));
    }
}
