use crate::error::Result;
use crate::models::{CropRecommendation, GrowingConditions, SoilType};

/// Rule-based crop suggestion.
///
/// Each soil type has at most two branches, evaluated in order:
/// - Loamy: wet and warm (>500mm, >20°C) favors water-intensive crops; otherwise
///   only rainfall ≤500mm is checked, so a cool dry loam still lands on the
///   moderate-rainfall list. Wet but cool loam (>500mm, ≤20°C) matches nothing.
/// - Sandy: split on 400mm of rainfall.
/// - Clay: wet and hot (>600mm, >25°C) favors rice; everything else gets the
///   moisture-tolerant list.
/// - Silt and Peaty: unconditional.
pub fn recommend(conditions: &GrowingConditions) -> CropRecommendation {
    let rainfall = conditions.rainfall_mm;
    let temperature = conditions.temperature_c;

    match conditions.soil {
        SoilType::Loamy => {
            if rainfall > 500.0 && temperature > 20.0 {
                CropRecommendation::new(
                    &["Rice", "Sugarcane", "Cotton", "Wheat"],
                    "Excellent conditions for water-intensive crops. \
                     Consider rice or sugarcane for maximum yield.",
                )
            } else if rainfall <= 500.0 {
                CropRecommendation::new(
                    &["Wheat", "Barley", "Pulses", "Vegetables"],
                    "Moderate rainfall suits wheat and vegetables. \
                     Implement drip irrigation for better results.",
                )
            } else {
                CropRecommendation::none()
            }
        }
        SoilType::Sandy => {
            if rainfall > 400.0 {
                CropRecommendation::new(
                    &["Millets", "Groundnut", "Watermelon", "Cucumber"],
                    "Sandy soil with good drainage. \
                     Perfect for drought-resistant crops like millets.",
                )
            } else {
                CropRecommendation::new(
                    &["Millets", "Bajra", "Cactus", "Date Palm"],
                    "Low rainfall with sandy soil requires drought-resistant varieties. \
                     Consider millets or bajra.",
                )
            }
        }
        SoilType::Clay => {
            if rainfall > 600.0 && temperature > 25.0 {
                CropRecommendation::new(
                    &["Rice", "Soybean", "Cotton", "Maize"],
                    "Clay soil retains water well. \
                     Ideal for rice cultivation with proper drainage management.",
                )
            } else {
                CropRecommendation::new(
                    &["Wheat", "Chickpea", "Sunflower", "Mustard"],
                    "Clay soil in moderate conditions. \
                     Focus on crops that tolerate moisture retention.",
                )
            }
        }
        SoilType::Silt => CropRecommendation::new(
            &["Vegetables", "Fruits", "Wheat", "Corn"],
            "Silt soil is fertile and holds moisture well. \
             Excellent for vegetables and fruits.",
        ),
        SoilType::Peaty => CropRecommendation::new(
            &["Vegetables", "Berries", "Root Crops", "Oats"],
            "Peaty soil is acidic and organic-rich. \
             Perfect for root vegetables and berries.",
        ),
        SoilType::Unrecognized => CropRecommendation::none(),
    }
}

/// Validates form-supplied values and runs the advisor.
pub fn suggest(
    soil: &str,
    rainfall_mm: Option<f64>,
    temperature_c: Option<f64>,
) -> Result<CropRecommendation> {
    let conditions = GrowingConditions::new(soil, rainfall_mm, temperature_c)?;
    if !conditions.soil.is_recognized() {
        tracing::warn!("Unrecognized soil type '{}', no crops suggested", soil.trim());
    }
    let rec = recommend(&conditions);

    tracing::debug!(
        soil = conditions.soil.as_str(),
        rainfall_mm = conditions.rainfall_mm,
        temperature_c = conditions.temperature_c,
        crops = rec.crops.len(),
        "Crop suggestion evaluated"
    );

    Ok(rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgroSmartError;

    fn crops_for(soil: &str, rainfall: f64, temperature: f64) -> Vec<String> {
        suggest(soil, Some(rainfall), Some(temperature))
            .unwrap()
            .crops
    }

    #[test]
    fn loamy_wet_and_warm() {
        assert_eq!(
            crops_for("loamy", 600.0, 25.0),
            ["Rice", "Sugarcane", "Cotton", "Wheat"]
        );
    }

    #[test]
    fn loamy_dry_ignores_temperature() {
        assert_eq!(
            crops_for("loamy", 300.0, 15.0),
            ["Wheat", "Barley", "Pulses", "Vegetables"]
        );
        assert_eq!(
            crops_for("loamy", 500.0, 35.0),
            ["Wheat", "Barley", "Pulses", "Vegetables"]
        );
    }

    #[test]
    fn loamy_wet_but_cool_matches_nothing() {
        let rec = suggest("loamy", Some(800.0), Some(20.0)).unwrap();
        assert!(rec.crops.is_empty());
        assert_eq!(rec.rationale, "");
    }

    #[test]
    fn sandy_splits_on_rainfall() {
        assert_eq!(
            crops_for("sandy", 200.0, 30.0),
            ["Millets", "Bajra", "Cactus", "Date Palm"]
        );
        assert_eq!(
            crops_for("sandy", 400.0, 30.0),
            ["Millets", "Bajra", "Cactus", "Date Palm"]
        );
        assert_eq!(
            crops_for("sandy", 450.0, 10.0),
            ["Millets", "Groundnut", "Watermelon", "Cucumber"]
        );
    }

    #[test]
    fn clay_wet_and_hot() {
        assert_eq!(
            crops_for("clay", 700.0, 30.0),
            ["Rice", "Soybean", "Cotton", "Maize"]
        );
    }

    #[test]
    fn clay_otherwise() {
        for (rain, temp) in [(700.0, 25.0), (600.0, 30.0), (100.0, 10.0)] {
            assert_eq!(
                crops_for("clay", rain, temp),
                ["Wheat", "Chickpea", "Sunflower", "Mustard"]
            );
        }
    }

    #[test]
    fn silt_is_condition_independent() {
        for (rain, temp) in [(0.0, -5.0), (250.0, 18.0), (2000.0, 45.0)] {
            assert_eq!(
                crops_for("silt", rain, temp),
                ["Vegetables", "Fruits", "Wheat", "Corn"]
            );
        }
    }

    #[test]
    fn peaty_is_condition_independent() {
        let rec = suggest("peaty", Some(10.0), Some(5.0)).unwrap();
        assert_eq!(rec.crops, ["Vegetables", "Berries", "Root Crops", "Oats"]);
        assert!(rec.rationale.starts_with("Peaty soil is acidic"));
    }

    #[test]
    fn unrecognized_soil_is_empty_not_error() {
        let rec = suggest("unknown-value", Some(500.0), Some(25.0)).unwrap();
        assert_eq!(rec, CropRecommendation::none());
    }

    #[test]
    fn rationale_accompanies_every_list() {
        let rec = suggest("loamy", Some(300.0), Some(15.0)).unwrap();
        assert_eq!(
            rec.rationale,
            "Moderate rainfall suits wheat and vegetables. \
             Implement drip irrigation for better results."
        );
    }

    #[test]
    fn missing_input_is_rejected() {
        assert!(matches!(
            suggest("", Some(100.0), Some(20.0)),
            Err(AgroSmartError::InvalidInput(_))
        ));
        assert!(matches!(
            suggest("clay", None, Some(20.0)),
            Err(AgroSmartError::InvalidInput(_))
        ));
        assert!(matches!(
            suggest("clay", Some(100.0), None),
            Err(AgroSmartError::InvalidInput(_))
        ));
    }

    #[test]
    fn recommend_is_idempotent() {
        let conditions = GrowingConditions::new("clay", Some(650.0), Some(27.0)).unwrap();
        assert_eq!(recommend(&conditions), recommend(&conditions));
    }
}
