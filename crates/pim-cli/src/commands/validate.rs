//! The `pim validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(data_path: PathBuf) -> Result<()> {
    let roster = pim_core::load(&data_path)?;

    println!(
        "Roster: {} ({} students)",
        data_path.display(),
        roster.len()
    );

    let warnings = pim_core::roster::validate(&roster);
    for w in &warnings {
        let prefix = w
            .email
            .as_ref()
            .map(|email| format!("  [{email}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Roster valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
