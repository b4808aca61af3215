use std::{io, path::Path};

pub mod error;
pub mod model;
pub mod operations;
pub mod persisters;
pub mod prompts;
pub mod session;

use error::Result;
use session::Session;

/// Runs an interactive session on stdin/stdout against the catalog at `path`.
pub fn run(path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(path, stdin.lock(), io::stdout());
    session.run()
}
