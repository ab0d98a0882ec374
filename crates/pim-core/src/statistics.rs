//! Descriptive statistics over quiz scores.
//!
//! Every statistic is total: an empty input is an explicit "undefined"
//! result (`None` or [`Mode::Undefined`]), never an error and never zero.

use std::collections::HashMap;
use std::fmt;

use crate::catalog;
use crate::model::Student;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        tracing::warn!("mean requested over an empty score list");
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of a sorted copy of `values`, or `None` for an empty slice.
///
/// Even-length input averages the two middle elements.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        tracing::warn!("median requested over an empty score list");
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Result of a mode computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// No value repeats, every distinct value ties, or the input was empty.
    Undefined,
    /// Exactly one value has the highest frequency.
    Single(f64),
    /// Several (but not all) distinct values tie for the highest frequency,
    /// in order of first appearance.
    Multiple(Vec<f64>),
}

impl Mode {
    /// All modal values; empty when undefined.
    pub fn values(&self) -> Vec<f64> {
        match self {
            Mode::Undefined => Vec::new(),
            Mode::Single(v) => vec![*v],
            Mode::Multiple(vs) => vs.clone(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Undefined => write!(f, "undefined"),
            Mode::Single(v) => write!(f, "{v:?}"),
            Mode::Multiple(vs) => write!(f, "{vs:?}"),
        }
    }
}

// 0.0 and -0.0 compare equal, so they must count as one value.
fn frequency_key(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

/// Most frequent value(s) of `values`.
///
/// - empty input, or no value repeats: [`Mode::Undefined`]
/// - more than one distinct value and all of them tie (e.g. `[1, 1, 2, 2]`):
///   [`Mode::Undefined`]
/// - one value with the top frequency: [`Mode::Single`]
/// - otherwise [`Mode::Multiple`]
pub fn mode(values: &[f64]) -> Mode {
    if values.is_empty() {
        tracing::warn!("mode requested over an empty score list");
        return Mode::Undefined;
    }

    let mut first_seen: Vec<f64> = Vec::new();
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &v in values {
        let count = counts.entry(frequency_key(v)).or_insert(0);
        if *count == 0 {
            first_seen.push(v);
        }
        *count += 1;
    }

    let max_freq = counts.values().copied().max().unwrap_or(0);
    if max_freq <= 1 {
        return Mode::Undefined;
    }

    let modes: Vec<f64> = first_seen
        .iter()
        .copied()
        .filter(|v| counts.get(&frequency_key(*v)) == Some(&max_freq))
        .collect();

    if modes.len() > 1 && modes.len() == first_seen.len() {
        return Mode::Undefined;
    }

    if modes.len() == 1 {
        Mode::Single(modes[0])
    } else {
        Mode::Multiple(modes)
    }
}

/// Mean, median and mode of one score sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of attempts.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
}

impl Summary {
    /// Summarize `values`, or `None` when there is nothing to summarize.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            count: values.len(),
            mean: mean(values)?,
            median: median(values)?,
            mode: mode(values),
        })
    }
}

/// Scores and statistics for one discipline of one student.
#[derive(Debug, Clone, PartialEq)]
pub struct DisciplineSummary {
    pub discipline: String,
    pub scores: Vec<f64>,
    /// `None` when the student has no attempt for this discipline.
    pub summary: Option<Summary>,
}

/// Per-discipline statistics for a student.
///
/// Catalog disciplines come first, in catalog order; any other keys found in
/// the record follow, sorted by name.
pub fn summarize(student: &Student) -> Vec<DisciplineSummary> {
    let mut names: Vec<&str> = catalog::DISCIPLINES.to_vec();
    names.extend(
        student
            .scores
            .keys()
            .map(String::as_str)
            .filter(|name| !catalog::is_discipline(name)),
    );

    names
        .into_iter()
        .map(|name| {
            let scores = student.scores_for(name).to_vec();
            DisciplineSummary {
                discipline: name.to_string(),
                summary: Summary::compute(&scores),
                scores,
            }
        })
        .collect()
}
