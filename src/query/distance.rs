use crate::catalog::Recommendation;

/// Narrows a ranked result set by a requested maximum distance.
pub trait DistancePolicy: Send + Sync {
    fn apply<'a>(
        &self,
        max_distance: Option<f64>,
        items: Vec<&'a Recommendation>,
    ) -> Vec<&'a Recommendation>;
}

/// Records carry no coordinates, so a short requested radius just caps the
/// result count. A distance of zero counts as "not set".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrottlePolicy {
    pub threshold: f64,
    pub max_results: usize,
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            threshold: 5.0,
            max_results: 3,
        }
    }
}

impl DistancePolicy for ThrottlePolicy {
    fn apply<'a>(
        &self,
        max_distance: Option<f64>,
        mut items: Vec<&'a Recommendation>,
    ) -> Vec<&'a Recommendation> {
        match max_distance {
            Some(miles) if miles != 0.0 && miles < self.threshold => {
                items.truncate(self.max_results);
                items
            }
            _ => items,
        }
    }
}
