use std::{fs::File, io, path::Path};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tempfile::NamedTempFile;

use crate::{
    error::{CatalogError, Result},
    model::{
        catalog::Catalog,
        movie::{Movie, Status},
    },
};

pub const FIELD_DELIMITER: char = ',';
const FIELD_COUNT: usize = 4;

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub skipped: usize,
}

pub struct CsvStore {}

impl CsvStore {
    /// Reads `title,year,category,status` lines. A missing file is an empty
    /// catalog. Malformed lines are skipped and counted; I/O failures abort.
    pub fn load(path: &Path) -> Result<LoadOutcome> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No movie file at {}, starting empty", path.display());
                return Ok(LoadOutcome::default());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(FIELD_DELIMITER as u8)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        let mut outcome = LoadOutcome::default();
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    log::warn!("Skipping unreadable line in {}: {}", path.display(), e);
                    outcome.skipped += 1;
                    continue;
                }
            };

            match CsvStore::parse_record(&record) {
                Ok(movie) => outcome.catalog.push(movie),
                Err(reason) => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    log::warn!(
                        "Skipping line {} of {}: {}. Line was: {:?}",
                        line,
                        path.display(),
                        reason,
                        record
                    );
                    outcome.skipped += 1;
                }
            }
        }

        log::info!(
            "Loaded {} movies from {} ({} lines skipped)",
            outcome.catalog.len(),
            path.display(),
            outcome.skipped
        );
        Ok(outcome)
    }

    fn parse_record(record: &StringRecord) -> std::result::Result<Movie, String> {
        if record.len() != FIELD_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                record.len()
            ));
        }

        let title = record[0].trim();
        if title.is_empty() {
            return Err("title is blank".to_string());
        }

        let year = match record[1].trim().parse::<u64>() {
            Ok(year) if year >= 1 => year,
            _ => return Err(format!("invalid year {:?}", &record[1])),
        };

        let status = Status::from_code(record[3].trim())
            .ok_or_else(|| format!("invalid status {:?}", &record[3]))?;

        Ok(Movie {
            title: title.to_string(),
            year,
            category: record[2].trim().to_string(),
            status,
        })
    }

    /// Replaces the whole file with the catalog in storage order. The rows are
    /// written to a sibling temporary file first and renamed over `path`.
    pub fn save(path: &Path, catalog: &Catalog) -> Result<()> {
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp_file = NamedTempFile::new_in(directory)?;

        {
            let mut wrt = WriterBuilder::new()
                .has_headers(false)
                .delimiter(FIELD_DELIMITER as u8)
                .quote_style(QuoteStyle::Never)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(temp_file.as_file());
            for movie in catalog.movies() {
                wrt.write_record(movie.to_record())?;
            }
            wrt.flush()?;
        }
        temp_file.as_file().sync_all()?;

        temp_file
            .persist(path)
            .map_err(|e| CatalogError::Persist {
                path: path.to_path_buf(),
                source: e.error,
            })?;

        log::info!("Saved {} movies to {}", catalog.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("movies.csv");
        fs::write(&path, content).expect("could not write fixture");
        path
    }

    #[test]
    fn missing_file_loads_as_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = CsvStore::load(&dir.path().join("absent.csv")).unwrap();
        assert!(outcome.catalog.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn parses_fields_in_fixed_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Inception,2010,Action,u\nAmélie,2001,Comedy,w\n");

        let outcome = CsvStore::load(&path).unwrap();
        assert_eq!(outcome.skipped, 0);
        assert_eq!(
            outcome.catalog.movies(),
            &[
                Movie {
                    title: "Inception".to_string(),
                    year: 2010,
                    category: "Action".to_string(),
                    status: Status::Unwatched,
                },
                Movie {
                    title: "Amélie".to_string(),
                    year: 2001,
                    category: "Comedy".to_string(),
                    status: Status::Watched,
                },
            ]
        );
    }

    #[test]
    fn skips_malformed_lines_and_counts_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "Good,1999,Drama,u\n\
             Bad Year,nineteen,Drama,u\n\
             Zero Year,0,Drama,u\n\
             Too,Many,Fields,Here,u\n\
             Short,2000\n\
             Odd Status,2000,Drama,x\n\
             ,2000,Drama,u\n\
             Also Good,2001,Other,w\n",
        );

        let outcome = CsvStore::load(&path).unwrap();
        let titles: Vec<&str> = outcome
            .catalog
            .movies()
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Good", "Also Good"]);
        assert_eq!(outcome.skipped, 6);
    }

    #[test]
    fn blank_lines_are_ignored_and_invalid_utf8_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        fs::write(
            &path,
            b"Good,1999,Drama,u\r\n\r\n\nBad\xff,2000,Drama,u\nAfter,2001,Other,w\n",
        )
        .unwrap();

        let outcome = CsvStore::load(&path).unwrap();
        let titles: Vec<&str> = outcome
            .catalog
            .movies()
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Good", "After"]);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn years_beyond_u32_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        let catalog = Catalog::from_movies(vec![Movie::new("Far Future", 5_000_000_000, "Other")]);

        CsvStore::save(&path, &catalog).unwrap();
        let reloaded = CsvStore::load(&path).unwrap();

        assert_eq!(reloaded.catalog, catalog);
        assert_eq!(reloaded.skipped, 0);
    }

    #[test]
    fn quotes_are_not_special() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "\"Quoted\" Title,1980,Drama,u\n");

        let outcome = CsvStore::load(&path).unwrap();
        assert_eq!(outcome.catalog.movies()[0].title, "\"Quoted\" Title");
    }

    #[test]
    fn save_writes_one_plain_line_per_movie() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "stale content that must disappear\n");
        let mut catalog = Catalog::new();
        catalog.push(Movie::new("Up", 2009, "Animation"));
        let mut watched = Movie::new("Heat", 1995, "Thriller");
        watched.status = Status::Watched;
        catalog.push(watched);

        CsvStore::save(&path, &catalog).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Up,2009,Animation,u\nHeat,1995,Thriller,w\n");
    }

    #[test]
    fn save_then_load_keeps_records_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        let mut catalog = Catalog::new();
        catalog.push(Movie::new("Zodiac", 2007, "Thriller"));
        catalog.push(Movie::new("Amélie", 2001, "Comedy"));
        catalog.movies_mut()[1].status = Status::Watched;

        CsvStore::save(&path, &catalog).unwrap();
        let reloaded = CsvStore::load(&path).unwrap();

        assert_eq!(reloaded.catalog, catalog);
        assert_eq!(reloaded.skipped, 0);
    }
}
