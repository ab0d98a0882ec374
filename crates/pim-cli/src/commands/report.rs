//! The `pim report` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pim_core::statistics::{summarize, Mode};

pub fn execute(data_path: PathBuf, email: String) -> Result<()> {
    let roster = pim_core::load(&data_path)?;

    let Some(student) = roster
        .find_by_email(&email)
        .and_then(|index| roster.get(index))
    else {
        anyhow::bail!("no student registered with email {email}");
    };

    let mut table = Table::new();
    table.set_header(vec!["Disciplina", "Tentativas", "Média", "Mediana", "Moda"]);

    for row in summarize(student) {
        match row.summary {
            Some(summary) => {
                let mode = match summary.mode {
                    Mode::Undefined => "-".to_string(),
                    mode => mode.to_string(),
                };
                table.add_row(vec![
                    Cell::new(&row.discipline),
                    Cell::new(summary.count),
                    Cell::new(format!("{:.2}", summary.mean)),
                    Cell::new(format!("{:.2}", summary.median)),
                    Cell::new(mode),
                ]);
            }
            None => {
                table.add_row(vec![
                    Cell::new(&row.discipline),
                    Cell::new(0),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                ]);
            }
        }
    }

    println!("{} <{}>", student.name, student.email);
    println!("{table}");
    Ok(())
}
