//! The interactive `pim` session (default command).

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use crate::session::Session;

pub fn execute(data_path: PathBuf) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::start(data_path, stdin.lock(), stdout.lock())?;
    session.run()
}
