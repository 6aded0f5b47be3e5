/// Tunables for meeting-point and nearby-building queries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// How many buildings a nearby listing returns
    pub nearby_count: usize,
    /// Upper bound on destination candidates tried by a meeting-point search,
    /// zero tries none. None keeps going until every building has been rejected
    pub max_candidates: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            nearby_count: 5,
            max_candidates: None,
        }
    }
}

impl SearchConfig {
    pub fn with_nearby_count(mut self, nearby_count: usize) -> Self {
        self.nearby_count = nearby_count;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }
}
