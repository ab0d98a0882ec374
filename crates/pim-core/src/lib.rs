//! pim-core — roster model, persistence, quiz grading and statistics.
//!
//! This crate holds everything the `pim` CLI needs apart from prompting:
//! the fixed discipline catalog, the student record, JSON persistence of the
//! roster, quiz grading, and descriptive statistics over scores.

pub mod catalog;
pub mod error;
pub mod model;
pub mod quiz;
pub mod roster;
pub mod statistics;

pub use error::{RegistrationError, RosterError};
pub use model::Student;
pub use roster::{load, resolve_path, save, Roster};
pub use statistics::{mean, median, mode, Mode, Summary};
