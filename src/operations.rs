use std::io::{BufRead, Write};

use crate::{
    error::Result,
    model::{
        catalog::Catalog,
        movie::{is_valid_category, normalize_category, Movie, Status, VALID_CATEGORIES},
    },
    persisters::csv_store::FIELD_DELIMITER,
    prompts::Console,
};

const TITLE_COLUMN_WIDTH: usize = 35;
const CATEGORY_COLUMN_WIDTH: usize = 12;

#[derive(Debug, PartialEq, Eq)]
pub struct AddOutcome {
    pub category: String,
    pub recognized_category: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum WatchOutcome {
    NothingToWatch,
    AlreadyWatched(String),
    Watched(String),
}

pub fn render_listing(catalog: &Catalog) -> Vec<String> {
    let mut lines: Vec<String> = catalog
        .sorted()
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            format!(
                "{}. {} {:<title_width$} - {:<category_width$} ({})",
                i,
                movie.status.marker(),
                movie.title,
                movie.category,
                movie.year,
                title_width = TITLE_COLUMN_WIDTH,
                category_width = CATEGORY_COLUMN_WIDTH,
            )
        })
        .collect();

    lines.push(format!(
        "{} movies watched. {} movies still to watch",
        catalog.count_with_status(Status::Watched),
        catalog.count_with_status(Status::Unwatched)
    ));
    lines
}

pub fn display_movies<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<()> {
    for line in render_listing(catalog) {
        console.say(&line)?;
    }
    Ok(())
}

// Unknown categories are stored anyway; only a warning is raised.
pub fn add_movie(catalog: &mut Catalog, title: &str, year: u64, category: &str) -> AddOutcome {
    let category = normalize_category(category);
    let recognized_category = is_valid_category(&category);
    if !recognized_category {
        log::warn!("Storing {} with unrecognized category {}", title, category);
    }

    catalog.push(Movie::new(title, year, &category));
    AddOutcome {
        category,
        recognized_category,
    }
}

pub fn prompt_and_add_movie<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    console: &mut Console<R, W>,
) -> Result<()> {
    let title = console.prompt_field("Title: ", FIELD_DELIMITER)?;
    let year = console.prompt_positive_integer("Year: ")?;
    let category = console.prompt_field("Category: ", FIELD_DELIMITER)?;

    let outcome = add_movie(catalog, &title, year, &category);
    if !outcome.recognized_category {
        console.say(&format!(
            "Warning: {} is not a known category ({})",
            outcome.category,
            VALID_CATEGORIES.join(", ")
        ))?;
    }
    console.say(&format!(
        "{} ({} from {}) added to movie list",
        title, outcome.category, year
    ))?;
    Ok(())
}

/// Asks for a 1-based position in the sorted view and marks that movie
/// watched. Positions shift whenever the catalog changes, so they are only
/// meaningful against the listing computed here.
pub fn mark_watched<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    console: &mut Console<R, W>,
) -> Result<WatchOutcome> {
    if catalog.count_with_status(Status::Unwatched) == 0 {
        console.say("No more movies to watch!")?;
        return Ok(WatchOutcome::NothingToWatch);
    }

    let sorted_indices = catalog.sorted_indices();
    console.say("Enter the number of a movie to mark as watched")?;
    let storage_index = loop {
        let choice = usize::try_from(console.prompt_positive_integer(">>> ")?)
            .unwrap_or(usize::MAX);
        match sorted_indices.get(choice - 1) {
            Some(&index) => break index,
            None => console.say("Invalid movie number")?,
        }
    };

    let movie = &mut catalog.movies_mut()[storage_index];

    if movie.is_watched() {
        console.say(&format!("You have already watched {}", movie.title))?;
        return Ok(WatchOutcome::AlreadyWatched(movie.title.clone()));
    }

    movie.status = Status::Watched;
    log::debug!("Marked {} as watched", movie.title);
    console.say(&format!("{} from {} watched", movie.title, movie.year))?;
    Ok(WatchOutcome::Watched(movie.title.clone()))
}
