use super::{next_roll_id, roll_name, ActivityDocument, RosterSource, StudentsDocument};
use crate::error::{Result, RollcallError};
use crate::model::Person;
use crate::roll::{Activity, Roll, RollInput};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Reads and writes the upstream JSON documents under one directory.
///
/// A missing file reads as an empty document. Writes go to a temp file that is
/// renamed over the target.
pub struct FileSource {
    root: PathBuf,
    students_file: String,
    activities_file: String,
}

impl FileSource {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            students_file: "students.json".to_string(),
            activities_file: "activities.json".to_string(),
        }
    }

    pub fn with_students_file(mut self, name: &str) -> Self {
        self.students_file = name.to_string();
        self
    }

    pub fn with_activities_file(mut self, name: &str) -> Self {
        self.activities_file = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn students_path(&self) -> PathBuf {
        self.root.join(&self.students_file)
    }

    pub fn activities_path(&self) -> PathBuf {
        self.root.join(&self.activities_file)
    }

    /// Replaces the students document. Used to seed a data directory.
    pub fn write_students(&self, students: Vec<Person>) -> Result<()> {
        write_json(&self.root, &self.students_path(), &StudentsDocument { students })
    }

    fn read_activity_document(&self) -> Result<ActivityDocument> {
        read_json(&self.activities_path())
    }
}

impl RosterSource for FileSource {
    fn fetch_students(&self) -> Result<Vec<Person>> {
        let doc: StudentsDocument = read_json(&self.students_path())?;
        tracing::debug!(count = doc.students.len(), path = %self.students_path().display(), "students read");
        Ok(doc.students)
    }

    fn fetch_activities(&self) -> Result<Vec<Activity>> {
        Ok(self.read_activity_document()?.activity)
    }

    fn save_roll(&mut self, input: &RollInput, name: Option<&str>) -> Result<Roll> {
        let mut doc = self.read_activity_document()?;
        let id = next_roll_id(&doc.activity);
        let roll = Roll {
            id,
            name: roll_name(id, name),
            completed_at: Utc::now(),
            student_roll_states: input.student_roll_states.clone(),
        };
        doc.activity.push(Activity::roll(roll.clone()));
        write_json(&self.root, &self.activities_path(), &doc)?;
        tracing::info!(id, name = %roll.name, "roll saved");
        Ok(roll)
    }
}

fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&content).map_err(|e| {
        RollcallError::Source(format!("could not parse {}: {}", path.display(), e))
    })
}

fn write_json<T: Serialize>(root: &Path, target: &Path, value: &T) -> Result<()> {
    fs::create_dir_all(root)?;
    let content = serde_json::to_string_pretty(value)?;
    let tmp_file = root.join(format!(".rollcall-{}.tmp", Uuid::new_v4()));
    fs::write(&tmp_file, content)?;
    fs::rename(&tmp_file, target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RollState;
    use tempfile::tempdir;

    #[test]
    fn missing_files_read_as_empty() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().to_path_buf());
        assert!(source.fetch_students().unwrap().is_empty());
        assert!(source.fetch_activities().unwrap().is_empty());
    }

    #[test]
    fn reads_upstream_students_document() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("students.json"),
            r#"{"students": [
                {"id": 1, "first_name": "Bob", "last_name": "Zed", "roll_state": "present"},
                {"id": 2, "first_name": "Amy", "last_name": "Young", "photo_url": "https://x/a.png"}
            ]}"#,
        )
        .unwrap();

        let source = FileSource::new(dir.path().to_path_buf());
        let students = source.fetch_students().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].photo_url.as_deref(), Some("https://x/a.png"));
    }

    #[test]
    fn malformed_document_is_a_source_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("students.json"), "{not json").unwrap();
        let source = FileSource::new(dir.path().to_path_buf());
        assert!(matches!(
            source.fetch_students(),
            Err(RollcallError::Source(_))
        ));
    }

    #[test]
    fn save_roll_appends_with_next_id() {
        let dir = tempdir().unwrap();
        let mut source = FileSource::new(dir.path().join("nested"));

        let mut person = Person::new(1, "Bob", "Zed");
        person.roll_state = RollState::Late;
        let input = RollInput::from_records(&[person]);

        let first = source.save_roll(&input, None).unwrap();
        let second = source.save_roll(&input, Some("Afternoon")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Roll 1");
        assert_eq!(second.id, 2);
        assert_eq!(second.name, "Afternoon");

        let log = source.fetch_activities().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].entity.student_roll_states[0].roll_state, RollState::Late);

        // no temp files left behind
        let leftovers = fs::read_dir(source.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn custom_file_names() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().to_path_buf())
            .with_students_file("class-a.json")
            .with_activities_file("log.json");
        source
            .write_students(vec![Person::new(5, "Eve", "Nash")])
            .unwrap();

        assert!(dir.path().join("class-a.json").exists());
        assert_eq!(source.fetch_students().unwrap()[0].id, 5);
        assert_eq!(source.activities_path(), dir.path().join("log.json"));
    }
}
