//! Client-side game predicate
//!
//! Each dimension is an independent test; a game is kept only when every
//! dimension passes. Nothing here mutates a game.

use super::types::{DateRange, FilterState, ScoreRange, parse_date};
use crate::models::{Game, NamedRef};

/// Case-insensitive substring match on the display name. Empty query passes.
pub fn matches_name(game: &Game, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    game.name.to_lowercase().contains(&query.to_lowercase())
}

/// Passes when nothing is selected, or when any of the game's references is
/// selected. A missing list never matches a non-empty selection.
pub fn matches_category(refs: Option<&[NamedRef]>, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    refs.unwrap_or_default()
        .iter()
        .any(|r| selected.iter().any(|s| *s == r.key()))
}

/// Inclusive release-date window.
///
/// A bound that does not parse is treated as unset. With at least one usable
/// bound, a game whose release date is missing or unparsable fails.
pub fn matches_dates(released: Option<&str>, range: &DateRange) -> bool {
    let (start, end) = range.bounds();
    if start.is_none() && end.is_none() {
        return true;
    }

    let Some(released) = released.and_then(parse_date) else {
        return false;
    };
    start.is_none_or(|s| released >= s) && end.is_none_or(|e| released <= e)
}

/// Inclusive score window, applied only when it narrows `domain`.
/// Games without a score are dropped while the window is active.
pub fn matches_metacritic(score: Option<i32>, range: ScoreRange, domain: ScoreRange) -> bool {
    if !is_range_active(range, domain) {
        return true;
    }
    match score {
        Some(score) => {
            let score = f64::from(score);
            score >= range.min && score <= range.max
        }
        None => false,
    }
}

pub fn is_range_active(range: ScoreRange, domain: ScoreRange) -> bool {
    range != domain
}

pub fn matches(game: &Game, state: &FilterState, domain: ScoreRange) -> bool {
    matches_name(game, &state.name)
        && matches_category(game.genres.as_deref(), &state.genres)
        && matches_category(game.platforms.as_deref(), &state.platforms)
        && matches_category(game.stores.as_deref(), &state.stores)
        && matches_category(game.tags.as_deref(), &state.tags)
        && matches_dates(game.released.as_deref(), &state.date_range)
        && matches_metacritic(game.metacritic, state.metacritic_range, domain)
}

pub fn filter_games(games: &[Game], state: &FilterState, domain: ScoreRange) -> Vec<Game> {
    games
        .iter()
        .filter(|game| matches(game, state, domain))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: i64) -> NamedRef {
        NamedRef { id, name: format!("ref-{}", id), slug: None }
    }

    fn game(id: i64, name: &str) -> Game {
        Game {
            id,
            name: name.to_string(),
            slug: None,
            released: None,
            metacritic: None,
            rating: None,
            background_image: None,
            genres: None,
            platforms: None,
            stores: None,
            tags: None,
        }
    }

    fn sample_games() -> Vec<Game> {
        let mut zelda = game(1, "The Legend of Zelda: Breath of the Wild");
        zelda.genres = Some(vec![named(4), named(3)]);
        zelda.released = Some("2017-03-03".to_string());
        zelda.metacritic = Some(97);

        let mut hades = game(2, "Hades");
        hades.genres = Some(vec![named(4), named(51)]);
        hades.released = Some("2020-09-17".to_string());
        hades.metacritic = Some(93);

        let mut stardew = game(3, "Stardew Valley");
        stardew.genres = Some(vec![named(14)]);
        stardew.released = Some("2016-02-26".to_string());

        vec![zelda, hades, stardew]
    }

    fn ids(games: &[Game]) -> Vec<i64> {
        games.iter().map(|g| g.id).collect()
    }

    #[test]
    fn test_name_case_insensitive() {
        let g = game(1, "The Legend of Zelda");
        assert!(matches_name(&g, "zelda"));
        assert!(matches_name(&g, "LEGEND OF"));
        assert!(matches_name(&g, ""));
        assert!(!matches_name(&g, "mario"));
    }

    #[test]
    fn test_category_or_within_dimension() {
        let refs = vec![named(4), named(51)];
        assert!(matches_category(Some(refs.as_slice()), &[]));
        assert!(matches_category(Some(refs.as_slice()), &["51".to_string(), "99".to_string()]));
        assert!(!matches_category(Some(refs.as_slice()), &["99".to_string()]));
        assert!(!matches_category(None, &["4".to_string()]));
        assert!(matches_category(None, &[]));
    }

    #[test]
    fn test_dimensions_and_combined() {
        let games = sample_games();
        let state = FilterState {
            name: "hades".to_string(),
            genres: vec!["4".to_string()],
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_games(&games, &state, ScoreRange::FULL)), vec![2]);
    }

    #[test]
    fn test_enabling_category_never_grows_result() {
        let games = sample_games();
        let unfiltered = filter_games(&games, &FilterState::default(), ScoreRange::FULL).len();

        for genre in ["3", "4", "14", "51", "99"] {
            let state = FilterState {
                genres: vec![genre.to_string()],
                ..FilterState::default()
            };
            let narrowed = filter_games(&games, &state, ScoreRange::FULL).len();
            assert!(narrowed <= unfiltered);

            // Selecting a tag on top only narrows further
            let with_tag = FilterState { tags: vec!["31".to_string()], ..state };
            assert!(filter_games(&games, &with_tag, ScoreRange::FULL).len() <= narrowed);
        }
    }

    #[test]
    fn test_metacritic_excludes_missing_score() {
        let mut a = game(1, "A");
        a.metacritic = Some(85);
        let b = game(2, "B");
        let state = FilterState {
            metacritic_range: ScoreRange::new(70.0, 100.0),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_games(&[a, b], &state, ScoreRange::FULL)), vec![1]);
    }

    #[test]
    fn test_metacritic_inactive_at_full_domain() {
        assert!(matches_metacritic(None, ScoreRange::FULL, ScoreRange::FULL));
        assert!(!matches_metacritic(Some(50), ScoreRange::new(60.0, 100.0), ScoreRange::FULL));
        assert!(matches_metacritic(Some(60), ScoreRange::new(60.0, 100.0), ScoreRange::FULL));
    }

    #[test]
    fn test_open_ended_date_range() {
        let range = DateRange { start: "2020-01-01".to_string(), end: String::new() };
        assert!(!matches_dates(Some("2019-12-31"), &range));
        assert!(matches_dates(Some("2020-06-01"), &range));
        assert!(matches_dates(Some("2020-01-01"), &range));
    }

    #[test]
    fn test_date_range_end_inclusive() {
        let range = DateRange { start: String::new(), end: "2017-03-03".to_string() };
        assert!(matches_dates(Some("2017-03-03"), &range));
        assert!(!matches_dates(Some("2017-03-04"), &range));
    }

    #[test]
    fn test_unparsable_dates() {
        let range = DateRange { start: "2020-01-01".to_string(), end: String::new() };
        assert!(!matches_dates(None, &range));
        assert!(!matches_dates(Some("TBA"), &range));

        // A half-typed bound is ignored rather than hiding everything
        let partial = DateRange { start: "2020-0".to_string(), end: String::new() };
        assert!(matches_dates(Some("1999-01-01"), &partial));
        assert!(matches_dates(None, &partial));
    }
}
