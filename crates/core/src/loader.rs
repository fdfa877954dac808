//! CSV input boundary.
//!
//! Loads the two source tables from MovieLens-style delimited files:
//! `movies.csv` (`movieId,title,genres`) and `ratings.csv`
//! (`userId,movieId,rating[,timestamp]`). Extra columns are ignored.
//! Missing files and malformed rows are fatal here — the rest of the engine
//! assumes well-formed tables and never re-validates them.

use crate::catalog::{Catalog, Movie, Rating};
use serde::Deserialize;
use std::io;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct MovieRecord {
    #[serde(rename = "movieId")]
    movie_id: u32,
    title: String,
    genres: String,
}

#[derive(Debug, Deserialize)]
struct RatingRecord {
    #[serde(rename = "userId")]
    user_id: u32,
    #[serde(rename = "movieId")]
    movie_id: u32,
    rating: f32,
}

/// Maps a csv error to io: underlying I/O errors pass through unchanged,
/// parse errors become `InvalidData`.
fn csv_to_io(e: csv::Error) -> io::Error {
    let msg = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(io_err) => io_err,
        _ => io::Error::new(io::ErrorKind::InvalidData, msg),
    }
}

/// Loads the movie table and builds the [`Catalog`].
///
/// The `genres` column is split on `|`; the MovieLens placeholder
/// `"(no genres listed)"` is kept verbatim as a single entry.
pub fn load_movies(path: &Path) -> io::Result<Catalog> {
    let mut reader = csv::Reader::from_path(path).map_err(csv_to_io)?;
    let mut movies = Vec::new();
    for record in reader.deserialize() {
        let record: MovieRecord = record.map_err(csv_to_io)?;
        let genres = record
            .genres
            .split('|')
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();
        movies.push(Movie {
            id: record.movie_id,
            title: record.title,
            genres,
        });
    }
    Ok(Catalog::new(movies))
}

/// Loads the ratings table. The `timestamp` column, if present, is ignored.
pub fn load_ratings(path: &Path) -> io::Result<Vec<Rating>> {
    let mut reader = csv::Reader::from_path(path).map_err(csv_to_io)?;
    let mut ratings = Vec::new();
    for record in reader.deserialize() {
        let record: RatingRecord = record.map_err(csv_to_io)?;
        ratings.push(Rating {
            user_id: record.user_id,
            movie_id: record.movie_id,
            rating: record.rating,
        });
    }
    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_movies_parses_genres() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "movies.csv",
            "movieId,title,genres\n1,Toy Story (1995),Adventure|Animation|Comedy\n",
        );
        let catalog = load_movies(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        let movie = catalog.get(1).unwrap();
        assert_eq!(movie.title, "Toy Story (1995)");
        assert_eq!(movie.genres, vec!["Adventure", "Animation", "Comedy"]);
    }

    #[test]
    fn test_load_ratings_ignores_timestamp_column() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "ratings.csv",
            "userId,movieId,rating,timestamp\n1,10,4.5,964982703\n2,10,3.0,964982224\n",
        );
        let ratings = load_ratings(&path).unwrap();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].user_id, 1);
        assert_eq!(ratings[0].movie_id, 10);
        assert!((ratings[0].rating - 4.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_movies(Path::new("/nonexistent/movies.csv")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_malformed_row_is_invalid_data() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "ratings.csv",
            "userId,movieId,rating\n1,10,not_a_number\n",
        );
        let err = load_ratings(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
