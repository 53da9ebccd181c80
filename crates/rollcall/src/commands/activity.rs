use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollcallError};
use crate::source::RosterSource;

/// Every saved roll, in the order the source keeps them.
pub fn list<S: RosterSource>(source: &S) -> Result<CmdResult> {
    let mut result = CmdResult {
        rolls: source.fetch_activities()?,
        ..Default::default()
    };
    if result.rolls.is_empty() {
        result.add_message(CmdMessage::info("No rolls have been saved yet"));
    }
    Ok(result)
}

pub fn get<S: RosterSource>(source: &S, roll_id: u64) -> Result<CmdResult> {
    let activity = source
        .fetch_activities()?
        .into_iter()
        .find(|a| a.entity.id == roll_id)
        .ok_or_else(|| RollcallError::Api(format!("Roll not found: {}", roll_id)))?;

    let summary = activity.entity.summary();
    let mut result = CmdResult::default().with_summary(summary);
    result.rolls.push(activity);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Person, RollState};
    use crate::source::memory::fixtures::SourceFixture;

    fn people() -> Vec<Person> {
        let mut bob = Person::new(1, "Bob", "Zed");
        bob.roll_state = RollState::Present;
        vec![bob, Person::new(2, "Amy", "Young")]
    }

    #[test]
    fn empty_log_says_so() {
        let fixture = SourceFixture::new();
        let result = list(&fixture.source).unwrap();
        assert!(result.rolls.is_empty());
        assert_eq!(result.messages[0].content, "No rolls have been saved yet");
    }

    #[test]
    fn lists_in_source_order() {
        let fixture = SourceFixture::new()
            .with_saved_roll("Monday", &people())
            .with_saved_roll("Tuesday", &people());
        let result = list(&fixture.source).unwrap();
        let names: Vec<_> = result.rolls.iter().map(|a| a.entity.name.as_str()).collect();
        assert_eq!(names, vec!["Monday", "Tuesday"]);
    }

    #[test]
    fn get_one_with_summary() {
        let fixture = SourceFixture::new()
            .with_saved_roll("Monday", &people())
            .with_saved_roll("Tuesday", &people());
        let result = get(&fixture.source, 2).unwrap();
        assert_eq!(result.rolls[0].entity.name, "Tuesday");
        let summary = result.summary.unwrap();
        assert_eq!(summary.present, 1);
        assert_eq!(summary.unmarked, 1);
    }

    #[test]
    fn get_unknown_roll() {
        let fixture = SourceFixture::new();
        assert!(matches!(
            get(&fixture.source, 3),
            Err(RollcallError::Api(_))
        ));
    }
}
