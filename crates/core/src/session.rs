//! Query session: the orchestrator over search and ranking.
//!
//! A [`Session`] owns the two loaded tables and the fitted title index. The
//! index is built lazily on first use and cached with its build timestamp;
//! [`Session::refresh_if_stale`] rebuilds it once it is older than the
//! configured TTL. Rebuilding is idempotent — the tables never change — so
//! a concurrent rebuild race can only produce an equivalent index.

use crate::catalog::{Catalog, Movie, Rating};
use crate::config;
use crate::rank::{rank_co_preferences, RecommendationRow};
use crate::tfidf::{search_titles, TitleIndex};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A movie with its title-search cosine score.
#[derive(Debug, Clone)]
pub struct ScoredMovie {
    /// The matched movie (shared reference into the catalog).
    pub movie: Arc<Movie>,
    /// Cosine similarity to the query, in [0, 1].
    pub score: f32,
}

struct CachedIndex {
    index: Arc<TitleIndex>,
    built_at: Instant,
}

/// Owns the loaded tables and composes search with ranking.
pub struct Session {
    catalog: Catalog,
    ratings: Vec<Rating>,
    cache: RwLock<Option<CachedIndex>>,
    ttl: Duration,
}

impl Session {
    /// Creates a session over loaded tables with the default index TTL.
    pub fn new(catalog: Catalog, ratings: Vec<Rating>) -> Self {
        Self::with_ttl(catalog, ratings, Duration::from_secs(config::INDEX_TTL_SECS))
    }

    /// Creates a session with an explicit index TTL.
    pub fn with_ttl(catalog: Catalog, ratings: Vec<Rating>, ttl: Duration) -> Self {
        Self {
            catalog,
            ratings,
            cache: RwLock::new(None),
            ttl,
        }
    }

    /// Rebuilds the title index if it is absent or older than the TTL.
    pub fn refresh_if_stale(&self) {
        let _ = self.index();
    }

    /// Returns the current index, building it if absent or stale.
    fn index(&self) -> Arc<TitleIndex> {
        if let Some(cached) = self.cache.read().as_ref() {
            if cached.built_at.elapsed() < self.ttl {
                return Arc::clone(&cached.index);
            }
        }
        let mut guard = self.cache.write();
        // Another writer may have rebuilt while we waited for the lock.
        match guard.as_ref() {
            Some(cached) if cached.built_at.elapsed() < self.ttl => Arc::clone(&cached.index),
            _ => {
                let index = Arc::new(TitleIndex::fit(self.catalog.normalized_titles()));
                *guard = Some(CachedIndex {
                    index: Arc::clone(&index),
                    built_at: Instant::now(),
                });
                index
            }
        }
    }

    /// Searches catalog titles by textual similarity.
    pub fn search_titles(&self, query: &str, top_n: usize, min_score: f32) -> Vec<ScoredMovie> {
        let index = self.index();
        search_titles(&index, query, top_n, min_score)
            .into_iter()
            .map(|(row, score)| ScoredMovie {
                movie: Arc::clone(self.catalog.movie_at(row)),
                score,
            })
            .collect()
    }

    /// Ranks movies over-represented among fans of `seed_movie_id`.
    pub fn recommend(&self, seed_movie_id: u32, min_similar_fraction: f32) -> Vec<RecommendationRow> {
        rank_co_preferences(
            seed_movie_id,
            &self.ratings,
            &self.catalog,
            min_similar_fraction,
        )
    }

    /// The movie catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of loaded ratings.
    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    /// Age of the cached index in seconds, if one has been built.
    pub fn index_age_secs(&self) -> Option<u64> {
        self.cache
            .read()
            .as_ref()
            .map(|cached| cached.built_at.elapsed().as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let movies = vec![
            Movie {
                id: 1,
                title: "The Matrix (1999)".to_string(),
                genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            },
            Movie {
                id: 2,
                title: "The Matrix Reloaded (2003)".to_string(),
                genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            },
            Movie {
                id: 3,
                title: "Toy Story (1995)".to_string(),
                genres: vec!["Animation".to_string()],
            },
        ];
        let ratings = vec![
            Rating { user_id: 1, movie_id: 1, rating: 5.0 },
            Rating { user_id: 1, movie_id: 2, rating: 5.0 },
            Rating { user_id: 2, movie_id: 1, rating: 4.0 },
            Rating { user_id: 2, movie_id: 2, rating: 4.0 },
            Rating { user_id: 3, movie_id: 3, rating: 5.0 },
        ];
        Session::new(Catalog::new(movies), ratings)
    }

    #[test]
    fn test_search_joins_catalog_metadata() {
        let session = session();
        let results = session.search_titles("matrix", 5, 0.2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].movie.title, "The Matrix (1999)");
        assert!(results[0].score >= results[1].score);
    }

    #[test]
    fn test_search_empty_query_is_empty() {
        let session = session();
        assert!(session.search_titles("", 5, 0.2).is_empty());
    }

    #[test]
    fn test_recommend_composes_ranker() {
        let session = session();
        let rows = session.recommend(1, 0.0);
        assert!(rows.iter().any(|r| r.movie_id == 2));
    }

    #[test]
    fn test_index_built_lazily_and_cached() {
        let session = session();
        assert!(session.index_age_secs().is_none());
        session.refresh_if_stale();
        assert!(session.index_age_secs().is_some());
        let first = session.index();
        let second = session.index();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_zero_ttl_rebuilds_index() {
        let movies = vec![Movie {
            id: 1,
            title: "Heat (1995)".to_string(),
            genres: vec![],
        }];
        let session = Session::with_ttl(Catalog::new(movies), Vec::new(), Duration::ZERO);
        let first = session.index();
        let second = session.index();
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
