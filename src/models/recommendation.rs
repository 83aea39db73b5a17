use serde::Serialize;

/// Suggested crops for a set of growing conditions, with the reasoning shown
/// alongside them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CropRecommendation {
    pub crops: Vec<String>,
    pub rationale: String,
}

impl CropRecommendation {
    pub fn new(crops: &[&str], rationale: impl Into<String>) -> Self {
        Self {
            crops: crops.iter().map(|c| c.to_string()).collect(),
            rationale: rationale.into(),
        }
    }

    /// No crops and no rationale.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_empty() {
        let rec = CropRecommendation::none();
        assert!(rec.is_empty());
        assert!(rec.rationale.is_empty());
    }

    #[test]
    fn new_preserves_order() {
        let rec = CropRecommendation::new(&["Oats", "Berries"], "why");
        assert_eq!(rec.crops, vec!["Oats".to_string(), "Berries".to_string()]);
        assert!(!rec.is_empty());
    }
}
