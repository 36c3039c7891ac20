use crate::models::{Dimensions, ScoringWeights};

/// Breakdown of a raw fit score. Lower totals are better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitScore {
    pub waste_ratio: f64,
    pub cost_per_unit: f64,
    pub dimension_efficiency: f64,
    pub total: f64,
}

/// Calculate the raw fit score for a vehicle in a space it fits in
///
/// Scoring formula:
/// score = (
///     waste_ratio * 40 +            # Unused fraction of the space volume
///     cost_per_unit * 30 +          # Monthly price per unit of volume
///     dimension_efficiency * 30     # |mean(space axis / vehicle axis) - 1|
/// )
///
/// The cost term is not normalized against the rest of the catalog, so its
/// weight relative to the other two terms depends on the absolute price scale.
pub fn calculate_fit_score(
    vehicle: &Dimensions,
    space: &Dimensions,
    price_per_month: f64,
    weights: &ScoringWeights,
) -> FitScore {
    let space_volume = space.volume();

    let waste_ratio = (space_volume - vehicle.volume()) / space_volume;
    let cost_per_unit = price_per_month / space_volume;
    let dimension_efficiency = calculate_dimension_efficiency(vehicle, space);

    let total = waste_ratio * weights.waste
        + cost_per_unit * weights.cost
        + dimension_efficiency * weights.dimension;

    FitScore {
        waste_ratio,
        cost_per_unit,
        dimension_efficiency,
        total,
    }
}

/// Distance of the mean axis ratio from 1.0
#[inline]
fn calculate_dimension_efficiency(vehicle: &Dimensions, space: &Dimensions) -> f64 {
    let length_ratio = space.length / vehicle.length;
    let width_ratio = space.width / vehicle.width;
    let height_ratio = space.height / vehicle.height;

    ((length_ratio + width_ratio + height_ratio) / 3.0 - 1.0).abs()
}

/// Convert a raw score into the 0-100 display value (higher is better)
#[inline]
pub fn normalize_score(raw: f64) -> f64 {
    (100.0 - raw).min(100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_perfect_fit_is_cost_only() {
        let dims = Dimensions::new(20.0, 10.0, 8.0);
        let score = calculate_fit_score(&dims, &dims, 160.0, &ScoringWeights::default());

        assert_eq!(score.waste_ratio, 0.0);
        assert_eq!(score.dimension_efficiency, 0.0);
        assert!((score.cost_per_unit - 0.1).abs() < EPSILON);
        assert!((score.total - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_reference_pairing() {
        // 15x6x5 sedan in a 20x10x8 garage at 150/month
        let vehicle = Dimensions::new(15.0, 6.0, 5.0);
        let space = Dimensions::new(20.0, 10.0, 8.0);
        let score = calculate_fit_score(&vehicle, &space, 150.0, &ScoringWeights::default());

        assert!((score.waste_ratio - 1150.0 / 1600.0).abs() < EPSILON);
        assert!((score.cost_per_unit - 150.0 / 1600.0).abs() < EPSILON);

        let mean_ratio = (20.0 / 15.0 + 10.0 / 6.0 + 8.0 / 5.0) / 3.0;
        assert!((score.dimension_efficiency - (mean_ratio - 1.0)).abs() < EPSILON);

        let expected = 40.0 * score.waste_ratio
            + 30.0 * score.cost_per_unit
            + 30.0 * score.dimension_efficiency;
        assert!((score.total - expected).abs() < EPSILON);
    }

    #[test]
    fn test_tighter_space_scores_lower() {
        let vehicle = Dimensions::new(15.0, 6.0, 5.0);
        let weights = ScoringWeights::default();

        let tight = calculate_fit_score(&vehicle, &Dimensions::new(16.0, 7.0, 6.0), 100.0, &weights);
        let loose = calculate_fit_score(&vehicle, &Dimensions::new(30.0, 12.0, 10.0), 100.0, &weights);

        assert!(tight.total < loose.total);
    }

    #[test]
    fn test_price_scale_can_dominate() {
        let vehicle = Dimensions::new(1.0, 1.0, 1.0);
        let space = Dimensions::new(1.0, 1.0, 1.0);
        let score = calculate_fit_score(&vehicle, &space, 1000.0, &ScoringWeights::default());

        assert!((score.total - 30_000.0).abs() < EPSILON);
        assert_eq!(normalize_score(score.total), 0.0);
    }

    #[test]
    fn test_normalize_score_clamps() {
        assert_eq!(normalize_score(0.0), 100.0);
        assert_eq!(normalize_score(25.0), 75.0);
        assert_eq!(normalize_score(250.0), 0.0);
        assert_eq!(normalize_score(-5.0), 100.0);
    }
}
