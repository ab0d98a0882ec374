//! Roster aggregate and its JSON persistence.
//!
//! The whole roster lives in one JSON array. It is read once at startup and
//! rewritten in full after every registration or recorded score; there is no
//! locking and no partial update.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::catalog;
use crate::error::{RegistrationError, RosterError};
use crate::model::Student;

/// Data file used when neither an explicit path nor the environment names one.
pub const DEFAULT_DATA_PATH: &str = "data/alunos.json";

/// Environment variable selecting an alternate data file.
pub const DATA_PATH_ENV: &str = "PIM_DATA_PATH";

/// Resolve the data file path.
///
/// Precedence: `explicit`, then `$PIM_DATA_PATH`, then [`DEFAULT_DATA_PATH`].
/// The path is not checked for existence.
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    resolve_path_with(explicit, Path::new(DEFAULT_DATA_PATH))
}

/// Like [`resolve_path`], with `fallback` in place of the built-in default.
pub fn resolve_path_with(explicit: Option<&Path>, fallback: &Path) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return path.to_path_buf();
    }
    match std::env::var_os(DATA_PATH_ENV) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => fallback.to_path_buf(),
    }
}

/// All registered students, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    /// Index of the student registered under `email`.
    pub fn find_by_email(&self, email: &str) -> Option<usize> {
        self.students.iter().position(|s| s.email == email)
    }

    /// Index of the first student whose email and secret both match.
    pub fn authenticate(&self, email: &str, secret: &str) -> Option<usize> {
        self.students
            .iter()
            .position(|s| s.matches_credentials(email, secret))
    }

    /// Append a new student, rejecting an email that is already taken.
    pub fn register(&mut self, student: Student) -> Result<usize, RegistrationError> {
        if self.find_by_email(&student.email).is_some() {
            return Err(RegistrationError::DuplicateEmail(student.email));
        }
        self.students.push(student);
        Ok(self.students.len() - 1)
    }

    /// Append `score` to a student's attempts. Returns `false` for an unknown index.
    pub fn record_score(&mut self, index: usize, discipline: &str, score: f64) -> bool {
        match self.students.get_mut(index) {
            Some(student) => {
                student.push_score(discipline, score);
                true
            }
            None => false,
        }
    }

    /// Write the whole roster to `path`. See [`save`].
    pub fn save_to(&self, path: &Path) -> Result<(), RosterError> {
        save(&self.students, path)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Load the roster stored at `path`.
///
/// A missing file is an empty roster. Unreadable files, invalid JSON, a
/// top-level value other than an array, or an element that is not a student
/// object all fail with [`RosterError::Load`].
pub fn load(path: &Path) -> Result<Roster, RosterError> {
    tracing::info!("loading roster from {}", path.display());

    if !path.exists() {
        tracing::info!("{} does not exist, starting with an empty roster", path.display());
        return Ok(Roster::new());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| RosterError::load(path, format!("failed to read file: {e}")))?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| RosterError::load(path, format!("invalid JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(RosterError::load(
                path,
                format!("invalid data format: expected array, got {}", json_kind(&other)),
            ))
        }
    };

    let students = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<Student>(item)
                .map_err(|e| RosterError::load(path, format!("invalid student at index {i}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("loaded {} students", students.len());
    Ok(Roster::from_students(students))
}

/// Overwrite `path` with `students` as an indented JSON array.
///
/// Missing parent directories are created. Non-finite scores cannot be
/// represented in JSON and are rejected before anything touches the disk.
pub fn save(students: &[Student], path: &Path) -> Result<(), RosterError> {
    tracing::info!("saving {} students to {}", students.len(), path.display());

    for student in students {
        for (discipline, scores) in &student.scores {
            if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
                return Err(RosterError::save(
                    path,
                    format!(
                        "failed to serialize data: non-finite score {bad} for {} in {discipline}",
                        student.email
                    ),
                ));
            }
        }
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    students
        .serialize(&mut serializer)
        .map_err(|e| RosterError::save(path, format!("failed to serialize data: {e}")))?;
    buf.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            RosterError::save(path, format!("failed to create {}: {e}", parent.display()))
        })?;
    }

    fs::write(path, buf)
        .map_err(|e| RosterError::save(path, format!("failed to write file: {e}")))?;

    tracing::info!("saved roster to {}", path.display());
    Ok(())
}

/// A non-fatal problem found in a loaded roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterWarning {
    /// Email of the offending student, if the warning concerns one.
    pub email: Option<String>,
    pub message: String,
}

/// Check a roster for data the interaction layer would never produce.
pub fn validate(roster: &Roster) -> Vec<RosterWarning> {
    let mut warnings = Vec::new();
    let warn = |email: &str, message: String| RosterWarning {
        email: Some(email.to_string()),
        message,
    };

    for (i, student) in roster.iter().enumerate() {
        if student.name.is_empty() {
            warnings.push(warn(&student.email, format!("student at index {i} has an empty name")));
        }
        if student.email.is_empty() {
            warnings.push(RosterWarning {
                email: None,
                message: format!("student at index {i} has an empty email"),
            });
        }
        if student.secret.is_empty() {
            warnings.push(warn(
                &student.email,
                format!("student at index {i} has an empty password"),
            ));
        }
        if roster.find_by_email(&student.email) != Some(i) && !student.email.is_empty() {
            warnings.push(warn(
                &student.email,
                format!("duplicate email at index {i}; only the first record can log in"),
            ));
        }

        for (discipline, scores) in &student.scores {
            if !catalog::is_discipline(discipline) {
                warnings.push(warn(
                    &student.email,
                    format!("unknown discipline '{discipline}'"),
                ));
            }
            for score in scores {
                if !score.is_finite() || !(0.0..=10.0).contains(score) {
                    warnings.push(warn(
                        &student.email,
                        format!("score {score} in '{discipline}' is outside 0..=10"),
                    ));
                }
            }
        }
    }

    warnings
}
