//! The `pim init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("pim.toml").exists() {
        println!("pim.toml already exists, skipping.");
    } else {
        std::fs::write("pim.toml", SAMPLE_CONFIG)?;
        println!("Created pim.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit pim.toml to choose where the roster is stored");
    println!("  2. Run: pim");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pim configuration

# Roster file. PIM_DATA_PATH and --data take precedence.
data_path = "data/alunos.json"

# Log filter, combined with RUST_LOG. Logs go to stderr.
log_filter = "pim=warn"
"#;
