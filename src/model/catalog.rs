use super::movie::{Movie, Status};

/// The in-memory watch-list. Records keep insertion order; the sorted view
/// used for listing and selection is recomputed on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { movies: vec![] }
    }

    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Catalog { movies }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn movies_mut(&mut self) -> &mut [Movie] {
        &mut self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn push(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    // Byte-wise title comparison keeps the ordering case-sensitive.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.movies.len()).collect();
        indices.sort_by(|&a, &b| {
            let (left, right) = (&self.movies[a], &self.movies[b]);
            left.year
                .cmp(&right.year)
                .then_with(|| left.title.cmp(&right.title))
        });
        indices
    }

    pub fn sorted(&self) -> Vec<&Movie> {
        self.sorted_indices()
            .into_iter()
            .map(|i| &self.movies[i])
            .collect()
    }

    pub fn count_with_status(&self, status: Status) -> usize {
        self.movies.iter().filter(|m| m.status == status).count()
    }
}
