use std::path::Path;

use anyhow::{Context, Result};

mod logging;

const MOVIES_FILE: &str = "movies.csv";

fn main() -> Result<()> {
    logging::setup_logging();

    mustsee::run(Path::new(MOVIES_FILE))
        .with_context(|| format!("Movie list session on {} failed", MOVIES_FILE))
}
