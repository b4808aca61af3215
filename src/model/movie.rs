pub const VALID_CATEGORIES: [&str; 6] = [
    "Action",
    "Comedy",
    "Documentary",
    "Drama",
    "Thriller",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Unwatched,
    Watched,
}

impl Status {
    pub fn code(&self) -> char {
        match self {
            Status::Unwatched => 'u',
            Status::Watched => 'w',
        }
    }

    pub fn from_code(code: &str) -> Option<Status> {
        match code {
            "u" => Some(Status::Unwatched),
            "w" => Some(Status::Watched),
            _ => None,
        }
    }

    /// Marker shown next to a row when listing; unwatched movies stand out.
    pub fn marker(&self) -> char {
        match self {
            Status::Unwatched => '*',
            Status::Watched => ' ',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: u64,
    pub category: String,
    pub status: Status,
}

impl Movie {
    pub fn new(title: &str, year: u64, category: &str) -> Self {
        Movie {
            title: title.to_string(),
            year,
            category: category.to_string(),
            status: Status::Unwatched,
        }
    }

    pub fn is_watched(&self) -> bool {
        self.status == Status::Watched
    }

    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.year.to_string(),
            self.category.clone(),
            self.status.code().to_string(),
        ]
    }
}

/// Title-cases a category the way users expect to see it stored:
/// the first letter of every alphabetic run is upper-cased, the rest lower-cased.
pub fn normalize_category(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut previous_was_letter = false;

    for c in raw.chars() {
        if c.is_alphabetic() {
            if previous_was_letter {
                normalized.extend(c.to_lowercase());
            } else {
                normalized.extend(c.to_uppercase());
            }
            previous_was_letter = true;
        } else {
            normalized.push(c);
            previous_was_letter = false;
        }
    }

    normalized
}

pub fn is_valid_category(category: &str) -> bool {
    VALID_CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_movies_start_unwatched() {
        let movie = Movie::new("Up", 2009, "Animation");
        assert_eq!(movie.status, Status::Unwatched);
        assert!(!movie.is_watched());
    }

    #[test]
    fn status_codes_match_file_format() {
        assert_eq!(Status::Unwatched.code(), 'u');
        assert_eq!(Status::Watched.code(), 'w');
        assert_eq!(Status::from_code("w"), Some(Status::Watched));
        assert_eq!(Status::from_code("W"), None);
        assert_eq!(Status::from_code(""), None);
    }

    #[test]
    fn normalizes_category_to_title_case() {
        assert_eq!(normalize_category("action"), "Action");
        assert_eq!(normalize_category("dOCUMENTARY"), "Documentary");
        assert_eq!(normalize_category("science fiction"), "Science Fiction");
        assert_eq!(normalize_category("sci-fi"), "Sci-Fi");
    }

    #[test]
    fn only_known_categories_are_valid() {
        assert!(is_valid_category("Thriller"));
        assert!(!is_valid_category("Animation"));
        assert!(!is_valid_category("thriller"));
    }
}
