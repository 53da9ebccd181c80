use super::{next_roll_id, roll_name, RosterSource};
use crate::error::Result;
use crate::model::Person;
use crate::roll::{Activity, Roll, RollInput};
use chrono::Utc;

#[derive(Debug, Default, Clone)]
pub struct MemSource {
    students: Vec<Person>,
    activities: Vec<Activity>,
}

impl MemSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Person>) -> Self {
        Self {
            students,
            activities: Vec::new(),
        }
    }
}

impl RosterSource for MemSource {
    fn fetch_students(&self) -> Result<Vec<Person>> {
        Ok(self.students.clone())
    }

    fn fetch_activities(&self) -> Result<Vec<Activity>> {
        Ok(self.activities.clone())
    }

    fn save_roll(&mut self, input: &RollInput, name: Option<&str>) -> Result<Roll> {
        let id = next_roll_id(&self.activities);
        let roll = Roll {
            id,
            name: roll_name(id, name),
            completed_at: Utc::now(),
            student_roll_states: input.student_roll_states.clone(),
        };
        self.activities.push(Activity::roll(roll.clone()));
        Ok(roll)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct SourceFixture {
        pub source: MemSource,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self {
                source: MemSource::new(),
            }
        }

        pub fn with_person(mut self, id: u64, first: &str, last: &str) -> Self {
            self.source.students.push(Person::new(id, first, last));
            self
        }

        /// `count` people named `First{n} Last{n}`, ids starting at 1.
        pub fn with_people(mut self, count: usize) -> Self {
            for n in 1..=count {
                self.source.students.push(Person::new(
                    n as u64,
                    format!("First{}", n),
                    format!("Last{}", n),
                ));
            }
            self
        }

        /// The Bob Zed / Amy Young pair used across scenario tests.
        pub fn with_bob_and_amy(self) -> Self {
            self.with_person(1, "Bob", "Zed").with_person(2, "Amy", "Young")
        }

        pub fn with_saved_roll(mut self, name: &str, people: &[Person]) -> Self {
            let input = RollInput::from_records(people);
            self.source
                .save_roll(&input, Some(name))
                .expect("in-memory save cannot fail");
            self
        }
    }
}
