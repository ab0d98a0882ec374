//! Student record.
//!
//! Field names on disk are `nome`, `email`, `senha` and `notas`; files written
//! by earlier versions must keep loading, so they are never renamed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Scores per discipline, in attempt order.
pub type Scores = BTreeMap<String, Vec<f64>>;

/// A registered student.
///
/// `scores` always holds an entry for every catalog discipline. Construction
/// and deserialization both fill in missing disciplines with an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStudent")]
pub struct Student {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    /// Stored and compared in plaintext.
    #[serde(rename = "senha")]
    pub secret: String,
    #[serde(rename = "notas")]
    pub scores: Scores,
}

/// Lenient on-disk shape: any field may be missing or `null`.
#[derive(Debug, Deserialize)]
struct RawStudent {
    #[serde(default)]
    nome: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    senha: Option<String>,
    #[serde(default)]
    notas: Option<Scores>,
}

impl From<RawStudent> for Student {
    fn from(raw: RawStudent) -> Self {
        Student::with_scores(
            raw.nome.unwrap_or_default(),
            raw.email.unwrap_or_default(),
            raw.senha.unwrap_or_default(),
            raw.notas.unwrap_or_default(),
        )
    }
}

impl Student {
    /// A new student with no attempts in any discipline.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self::with_scores(name, email, secret, Scores::new())
    }

    /// A student with existing scores; missing disciplines are added empty.
    pub fn with_scores(
        name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
        scores: Scores,
    ) -> Self {
        let mut student = Self {
            name: name.into(),
            email: email.into(),
            secret: secret.into(),
            scores,
        };
        student.ensure_disciplines();
        student
    }

    /// Add an empty score list for every catalog discipline not yet present.
    pub fn ensure_disciplines(&mut self) {
        for discipline in catalog::DISCIPLINES {
            self.scores.entry(discipline.to_string()).or_default();
        }
    }

    /// Scores recorded for `discipline`; empty if none.
    pub fn scores_for(&self, discipline: &str) -> &[f64] {
        self.scores
            .get(discipline)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append one attempt's score.
    pub fn push_score(&mut self, discipline: &str, score: f64) {
        self.scores
            .entry(discipline.to_string())
            .or_default()
            .push(score);
    }

    /// `true` if at least one attempt was recorded in any discipline.
    pub fn has_scores(&self) -> bool {
        self.scores.values().any(|s| !s.is_empty())
    }

    /// Plaintext credential check.
    pub fn matches_credentials(&self, email: &str, secret: &str) -> bool {
        self.email == email && self.secret == secret
    }
}
