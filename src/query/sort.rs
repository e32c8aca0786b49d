use std::cmp::Ordering;

use crate::catalog::Recommendation;

/// Order by trend score, highest first. The sort is stable, so records
/// with equal scores keep their relative order.
pub fn rank_by_trend(mut items: Vec<&Recommendation>) -> Vec<&Recommendation> {
    items.sort_by(|a, b| {
        b.trend_score
            .partial_cmp(&a.trend_score)
            .unwrap_or(Ordering::Equal)
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_seed;

    #[test]
    fn test_rank_descending() {
        let seed = default_seed();
        let ranked = rank_by_trend(seed.iter().collect());
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "5", "4", "2", "6"]);
    }

    #[test]
    fn test_rank_ties_are_stable() {
        let mut seed = default_seed();
        for (i, rec) in seed.iter_mut().enumerate() {
            rec.trend_score = if i % 2 == 0 { 7.0 } else { 8.0 };
        }
        let ranked = rank_by_trend(seed.iter().collect());
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "6", "1", "3", "5"]);
    }
}
