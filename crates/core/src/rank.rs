//! Co-preference ranker.
//!
//! Given a seed movie, finds the movies disproportionately liked by the seed
//! movie's fans relative to the general rating population. "Liked" means a
//! rating at or above [`config::LIKED_THRESHOLD`]. Every empty intermediate
//! (no fans, no survivors, no baseline population) produces an empty result —
//! "no recommendation" is a first-class outcome here, never an error.

use crate::catalog::{Catalog, Rating};
use crate::config;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One ranked recommendation, joined back to catalog metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRow {
    /// Id of the recommended movie.
    pub movie_id: u32,
    /// Display title from the catalog.
    pub title: String,
    /// Genres from the catalog.
    pub genres: Vec<String>,
    /// Fraction of the seed movie's fans who also liked this movie, in [0, 1].
    pub similar_fraction: f32,
    /// Fraction of the baseline population who liked this movie, in [0, 1].
    pub all_fraction: f32,
    /// Over-representation ratio `similar_fraction / all_fraction`; 0 when
    /// the baseline fraction is 0. Always finite and non-negative.
    pub score: f32,
}

/// Ranks movies over-represented among fans of `seed_movie_id`.
///
/// The baseline population is the union of users who liked any surviving
/// movie, not the full user base, so scores compare the seed's fans
/// against people who rate movies of this kind at all. Returns at most
/// [`config::MAX_RECOMMENDATIONS`] rows sorted by descending score (ties by
/// ascending movie id); rows whose movie id has no catalog match are dropped.
pub fn rank_co_preferences(
    seed_movie_id: u32,
    ratings: &[Rating],
    catalog: &Catalog,
    min_similar_fraction: f32,
) -> Vec<RecommendationRow> {
    // Fan set: users who liked the seed movie.
    let fans: HashSet<u32> = ratings
        .iter()
        .filter(|r| r.movie_id == seed_movie_id && r.rating >= config::LIKED_THRESHOLD)
        .map(|r| r.user_id)
        .collect();
    if fans.is_empty() {
        return Vec::new();
    }

    // Movies co-liked by fans, as a fraction of the fan set. Counting
    // distinct (user, movie) pairs keeps the fraction within [0, 1] even if
    // the source table carries duplicate rating rows.
    let mut co_liked: HashMap<u32, u32> = HashMap::new();
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    for r in ratings {
        if r.rating >= config::LIKED_THRESHOLD
            && fans.contains(&r.user_id)
            && seen.insert((r.user_id, r.movie_id))
        {
            *co_liked.entry(r.movie_id).or_insert(0) += 1;
        }
    }
    let fan_count = fans.len() as f32;
    let survivors: HashMap<u32, f32> = co_liked
        .into_iter()
        .map(|(movie_id, count)| (movie_id, count as f32 / fan_count))
        .filter(|&(_, fraction)| fraction > min_similar_fraction)
        .collect();
    if survivors.is_empty() {
        return Vec::new();
    }

    // Baseline: everyone who liked any surviving movie, again per distinct
    // (user, movie) pair.
    let mut all_liked: HashMap<u32, u32> = HashMap::new();
    let mut baseline_users: HashSet<u32> = HashSet::new();
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    for r in ratings {
        if r.rating >= config::LIKED_THRESHOLD
            && survivors.contains_key(&r.movie_id)
            && seen.insert((r.user_id, r.movie_id))
        {
            *all_liked.entry(r.movie_id).or_insert(0) += 1;
            baseline_users.insert(r.user_id);
        }
    }
    if baseline_users.is_empty() {
        return Vec::new();
    }
    let baseline_count = baseline_users.len() as f32;

    let mut rows: Vec<RecommendationRow> = survivors
        .into_iter()
        .filter_map(|(movie_id, similar_fraction)| {
            let movie = catalog.get(movie_id)?;
            let all_fraction = all_liked
                .get(&movie_id)
                .map_or(0.0, |&count| count as f32 / baseline_count);
            let score = if all_fraction > 0.0 {
                similar_fraction / all_fraction
            } else {
                0.0
            };
            Some(RecommendationRow {
                movie_id,
                title: movie.title.clone(),
                genres: movie.genres.clone(),
                similar_fraction,
                all_fraction,
                score,
            })
        })
        .collect();

    rows.sort_unstable_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.movie_id.cmp(&b.movie_id))
    });
    rows.truncate(config::MAX_RECOMMENDATIONS);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Movie;

    fn rating(user_id: u32, movie_id: u32, value: f32) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating: value,
        }
    }

    fn catalog_with_ids(ids: &[u32]) -> Catalog {
        Catalog::new(
            ids.iter()
                .map(|&id| Movie {
                    id,
                    title: format!("Movie {id}"),
                    genres: vec!["Drama".to_string()],
                })
                .collect(),
        )
    }

    // ratings = {(u1,10,5),(u1,20,5),(u2,10,5),(u2,20,4),(u3,10,3)}:
    // fans of 10 = {u1,u2} (u3 rated below threshold), movie 20 co-liked by
    // both fans.
    fn fixture_ratings() -> Vec<Rating> {
        vec![
            rating(1, 10, 5.0),
            rating(1, 20, 5.0),
            rating(2, 10, 5.0),
            rating(2, 20, 4.0),
            rating(3, 10, 3.0),
        ]
    }

    #[test]
    fn test_rank_fixture_fractions() {
        let catalog = catalog_with_ids(&[10, 20]);
        let rows = rank_co_preferences(10, &fixture_ratings(), &catalog, 0.0);
        let movie_20 = rows
            .iter()
            .find(|r| r.movie_id == 20)
            .expect("movie 20 should be recommended");
        assert!((movie_20.similar_fraction - 1.0).abs() < f32::EPSILON);
        assert!((movie_20.all_fraction - 1.0).abs() < f32::EPSILON);
        assert!((movie_20.score - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rank_no_fans_is_empty() {
        let catalog = catalog_with_ids(&[10, 20]);
        // Movie 30 was never rated at all; movie 10 never rated >= 4 by u3.
        assert!(rank_co_preferences(30, &fixture_ratings(), &catalog, 0.0).is_empty());
        let lukewarm = vec![rating(1, 10, 3.5), rating(2, 10, 2.0)];
        assert!(rank_co_preferences(10, &lukewarm, &catalog, 0.0).is_empty());
    }

    #[test]
    fn test_rank_survival_filter_is_strict() {
        let catalog = catalog_with_ids(&[10, 20]);
        // Both fractions equal 1.0; threshold 1.0 must discard everything
        // because survival requires strictly greater.
        assert!(rank_co_preferences(10, &fixture_ratings(), &catalog, 1.0).is_empty());
    }

    #[test]
    fn test_rank_drops_rows_missing_from_catalog() {
        let catalog = catalog_with_ids(&[10]);
        let rows = rank_co_preferences(10, &fixture_ratings(), &catalog, 0.0);
        assert!(rows.iter().all(|r| r.movie_id != 20));
        assert!(rows.iter().any(|r| r.movie_id == 10));
    }

    #[test]
    fn test_rank_caps_at_twenty_rows() {
        let ids: Vec<u32> = (1..=30).collect();
        let catalog = catalog_with_ids(&ids);
        let mut ratings = Vec::new();
        // Two fans of movie 1 who also like movies 2..=30.
        for user in [1, 2] {
            for movie in 1..=30 {
                ratings.push(rating(user, movie, 5.0));
            }
        }
        let rows = rank_co_preferences(1, &ratings, &catalog, 0.0);
        assert_eq!(rows.len(), config::MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_rank_sorted_by_score_desc_with_valid_ranges() {
        let ids: Vec<u32> = (1..=6).collect();
        let catalog = catalog_with_ids(&ids);
        let mut ratings = Vec::new();
        // Users 1-3 are fans of movie 1 with varying co-likes; users 4-6
        // like movie 3 without liking movie 1, widening its baseline so the
        // per-movie scores differ.
        for user in 1..=3 {
            ratings.push(rating(user, 1, 5.0));
        }
        ratings.push(rating(1, 2, 4.0));
        ratings.push(rating(2, 2, 4.5));
        ratings.push(rating(3, 2, 5.0));
        ratings.push(rating(1, 3, 4.0));
        for user in 4..=6 {
            ratings.push(rating(user, 3, 4.0));
        }
        let rows = rank_co_preferences(1, &ratings, &catalog, 0.0);
        assert!(!rows.is_empty());
        for window in rows.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
        for row in &rows {
            assert!(row.score >= 0.0);
            assert!(row.score.is_finite());
            assert!((0.0..=1.0).contains(&row.similar_fraction));
            assert!((0.0..=1.0).contains(&row.all_fraction));
        }
        // Movie 3 is popular outside the fan set, so it is less
        // over-represented than movie 2.
        let movie_2 = rows.iter().find(|r| r.movie_id == 2).unwrap();
        let movie_3 = rows.iter().find(|r| r.movie_id == 3).unwrap();
        assert!(movie_2.score > movie_3.score);
    }

    #[test]
    fn test_rank_duplicate_rating_rows_keep_fractions_in_range() {
        let catalog = catalog_with_ids(&[10, 20]);
        // Movie 20 rated twice by the same fan: without pair dedup, the
        // co-like count would exceed the fan count.
        let mut ratings = fixture_ratings();
        ratings.push(rating(1, 20, 5.0));
        ratings.push(rating(1, 20, 4.5));
        let rows = rank_co_preferences(10, &ratings, &catalog, 0.0);
        let movie_20 = rows.iter().find(|r| r.movie_id == 20).unwrap();
        assert!((movie_20.similar_fraction - 1.0).abs() < f32::EPSILON);
        for row in &rows {
            assert!((0.0..=1.0).contains(&row.similar_fraction));
            assert!((0.0..=1.0).contains(&row.all_fraction));
        }
    }

    #[test]
    fn test_rank_is_idempotent() {
        let catalog = catalog_with_ids(&[10, 20]);
        let ratings = fixture_ratings();
        let first = rank_co_preferences(10, &ratings, &catalog, 0.0);
        let second = rank_co_preferences(10, &ratings, &catalog, 0.0);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.movie_id, b.movie_id);
            assert_eq!(a.score, b.score);
        }
    }
}
