//! Core table types for cinematch.
//!
//! A [`Movie`] is one catalog row; a [`Rating`] is one row of the ratings
//! table. The [`Catalog`] wraps the movie table with the derived data the
//! engine needs at query time: normalized titles (for the TF-IDF index) and
//! an id → row map (for joining ranker output back to metadata). Both tables
//! are immutable after load.

use crate::normalize::normalize_title;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// One movie catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Unique movie id (primary key in the source table).
    pub id: u32,
    /// Display title, e.g. `"The Matrix (1999)"`.
    pub title: String,
    /// Genres in source order, parsed from the pipe-delimited column.
    pub genres: Vec<String>,
}

/// One row of the ratings table. Many rows per user and per movie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    /// Id of the rating user.
    pub user_id: u32,
    /// Id of the rated movie (foreign key into the catalog).
    pub movie_id: u32,
    /// Rating value, typically 0.5–5.0 in half-point steps.
    pub rating: f32,
}

/// The immutable movie catalog plus derived per-row data.
///
/// Row order is load order and is the tie-break order for title search.
/// Normalized titles are computed once here and live exactly as long as the
/// catalog; they are never written back onto [`Movie`].
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Arc<Movie>>,
    normalized_titles: Vec<String>,
    /// movie id → row index. First occurrence wins on duplicate ids.
    id_to_row: HashMap<u32, u32>,
}

impl Catalog {
    /// Builds a catalog from loaded movie rows, normalizing every title.
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut normalized_titles = Vec::with_capacity(movies.len());
        let mut id_to_row = HashMap::with_capacity(movies.len());
        let movies: Vec<Arc<Movie>> = movies.into_iter().map(Arc::new).collect();
        for (row, movie) in movies.iter().enumerate() {
            normalized_titles.push(normalize_title(Some(&movie.title)));
            id_to_row.entry(movie.id).or_insert(row as u32);
        }
        Self {
            movies,
            normalized_titles,
            id_to_row,
        }
    }

    /// Number of catalog rows.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns `true` if the catalog has no rows.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Looks up a movie by its id.
    pub fn get(&self, movie_id: u32) -> Option<&Arc<Movie>> {
        self.id_to_row
            .get(&movie_id)
            .map(|&row| &self.movies[row as usize])
    }

    /// Returns the movie at a row index. Rows come from the title index,
    /// which is always built over this catalog, so the index is in bounds.
    pub fn movie_at(&self, row: u32) -> &Arc<Movie> {
        &self.movies[row as usize]
    }

    /// Normalized titles, parallel to catalog rows.
    pub fn normalized_titles(&self) -> &[String] {
        &self.normalized_titles
    }

    /// Iterates over catalog rows in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Movie>> {
        self.movies.iter()
    }
}
