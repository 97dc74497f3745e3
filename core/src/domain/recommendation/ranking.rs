use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{rating::value_objects::RatedRecipe, recipe::entities::Recipe};

pub const HIGH_RATING_THRESHOLD: f64 = 4.0;
pub const FAVORITE_TAG_LIMIT: usize = 5;
pub const RECOMMENDATION_LIMIT: usize = 10;

/// Counts the tags of recipes rated at least `threshold` and returns the
/// `limit` most frequent ones. Ties keep the order in which tags were first
/// seen in `rated`.
pub fn favorite_tags(rated: &[RatedRecipe], threshold: f64, limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for rated_recipe in rated.iter().filter(|r| r.rating.score >= threshold) {
        for tag in rated_recipe.recipe.tag_list() {
            match counts.iter_mut().find(|(seen, _)| *seen == tag) {
                Some((_, count)) => *count += 1,
                None => counts.push((tag, 1)),
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts.into_iter().map(|(tag, _)| tag).collect()
}

/// Orders candidates by their best favorite tag (earlier is better), then by
/// how many favorite tags they carry, then newest first. Candidates already
/// rated or without any favorite tag are dropped, duplicates are removed.
pub fn rank_recommendations(
    favorite_tags: &[String],
    candidates: Vec<Recipe>,
    rated_ids: &HashSet<Uuid>,
    limit: usize,
) -> Vec<Recipe> {
    let mut seen = HashSet::new();

    let mut ranked: Vec<(usize, usize, Recipe)> = candidates
        .into_iter()
        .filter(|recipe| !rated_ids.contains(&recipe.id) && seen.insert(recipe.id))
        .filter_map(|recipe| {
            let tags = recipe.tag_list();
            let positions: Vec<usize> = favorite_tags
                .iter()
                .enumerate()
                .filter(|(_, favorite)| tags.contains(favorite))
                .map(|(position, _)| position)
                .collect();
            let best = *positions.first()?;
            Some((best, positions.len(), recipe))
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then(b.1.cmp(&a.1))
            .then(b.2.created_at.cmp(&a.2.created_at))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, _, recipe)| recipe)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{rating::entities::Rating, recipe::entities::sample_recipe};

    fn rated(tags: &str, score: f64) -> RatedRecipe {
        let recipe = sample_recipe(Uuid::new_v4(), "Rated", tags);
        RatedRecipe {
            rating: Rating::new(Uuid::new_v4(), recipe.id, score, None),
            recipe,
        }
    }

    fn candidate(name: &str, tags: &str, age_minutes: i64) -> Recipe {
        let mut recipe = sample_recipe(Uuid::new_v4(), name, tags);
        recipe.created_at = Utc::now() - Duration::minutes(age_minutes);
        recipe
    }

    #[test]
    fn favorite_tags_ignore_low_ratings() {
        let ratings = vec![rated("soup", 3.5), rated("pasta", 4.0), rated("Pasta, salad", 5.0)];

        assert_eq!(favorite_tags(&ratings, 4.0, 5), vec!["pasta", "salad"]);
    }

    #[test]
    fn favorite_tags_break_ties_by_first_appearance() {
        let ratings = vec![
            rated("thai, curry", 5.0),
            rated("soup, thai", 4.5),
            rated("a, b, c, d", 4.0),
            rated("soup", 4.0),
        ];

        assert_eq!(
            favorite_tags(&ratings, 4.0, 5),
            vec!["thai", "soup", "curry", "a", "b"]
        );
    }

    #[test]
    fn no_high_ratings_means_no_favorites() {
        assert!(favorite_tags(&[rated("soup", 2.0)], 4.0, 5).is_empty());
        assert!(favorite_tags(&[], 4.0, 5).is_empty());
    }

    #[test]
    fn ranks_by_tag_position_then_overlap_then_recency() {
        let favorites = vec!["thai".to_string(), "soup".to_string()];
        let old_thai = candidate("old thai", "thai", 60);
        let new_thai = candidate("new thai", "thai", 5);
        let thai_soup = candidate("thai soup", "soup, thai", 120);
        let soup = candidate("soup", "soup", 1);
        let unrelated = candidate("cake", "dessert", 1);

        let ranked = rank_recommendations(
            &favorites,
            vec![soup, old_thai, unrelated, new_thai, thai_soup],
            &HashSet::new(),
            10,
        );

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["thai soup", "new thai", "old thai", "soup"]);
    }

    #[test]
    fn ranking_excludes_rated_and_duplicates() {
        let favorites = vec!["thai".to_string()];
        let a = candidate("a", "thai", 1);
        let b = candidate("b", "thai", 2);
        let rated_ids: HashSet<Uuid> = [b.id].into_iter().collect();

        let ranked = rank_recommendations(&favorites, vec![a.clone(), a.clone(), b], &rated_ids, 10);

        assert_eq!(ranked, vec![a]);
    }

    #[test]
    fn ranking_respects_limit() {
        let favorites = vec!["thai".to_string()];
        let candidates = (0..15)
            .map(|i| candidate(&format!("dish {i}"), "thai", i))
            .collect();

        let ranked = rank_recommendations(&favorites, candidates, &HashSet::new(), 10);

        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].name, "dish 0");
    }
}
