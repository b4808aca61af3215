use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use crate::{
    error::{CatalogError, Result},
    model::catalog::Catalog,
    operations,
    persisters::csv_store::CsvStore,
    prompts::Console,
};

const MENU: &str = "Menu:\n\
                    D - Display movies\n\
                    A - Add new movie\n\
                    W - Watch a movie\n\
                    Q - Quit";

/// Owns the catalog for one interactive run: loads it on start, dispatches
/// menu commands, and writes it back when the user quits.
pub struct Session<R, W> {
    path: PathBuf,
    catalog: Catalog,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(path: &Path, input: R, output: W) -> Self {
        Session {
            path: path.to_path_buf(),
            catalog: Catalog::new(),
            console: Console::new(input, output),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    pub fn run(&mut self) -> Result<()> {
        self.console.say("Must-See Movies 1.0")?;
        self.load()?;

        loop {
            match self.handle_next_command() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(CatalogError::InputClosed) => {
                    log::info!("Input closed, saving before exit");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.save()?;
        self.console.say("Have a nice day :)")
    }

    fn load(&mut self) -> Result<()> {
        let outcome = CsvStore::load(&self.path)?;
        self.catalog = outcome.catalog;

        self.console.say(&format!(
            "{} movies loaded from {}",
            self.catalog.len(),
            self.path.display()
        ))?;
        if outcome.skipped > 0 {
            self.console.say(&format!(
                "{} malformed lines skipped",
                outcome.skipped
            ))?;
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        CsvStore::save(&self.path, &self.catalog)?;
        self.console.say(&format!(
            "{} movies saved to {}",
            self.catalog.len(),
            self.path.display()
        ))
    }

    /// Returns `false` once the user has asked to quit.
    fn handle_next_command(&mut self) -> Result<bool> {
        self.console.say(MENU)?;
        let choice = self.console.ask(">>> ")?.to_uppercase();
        log::debug!("Menu choice {:?}", choice);

        match choice.as_str() {
            "D" => operations::display_movies(&self.catalog, &mut self.console)?,
            "A" => operations::prompt_and_add_movie(&mut self.catalog, &mut self.console)?,
            "W" => {
                operations::mark_watched(&mut self.catalog, &mut self.console)?;
            }
            "Q" => return Ok(false),
            _ => self.console.say("Invalid menu choice")?,
        }
        Ok(true)
    }
}
