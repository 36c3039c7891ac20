use crate::models::{Vehicle, StorageSpace, MatchResult, ScoringWeights, ResultOrder};
use crate::core::{
    scoring::{calculate_fit_score, normalize_score, FitScore},
};

/// Best candidate found for one vehicle in the working set
#[derive(Debug, Clone, Copy)]
struct BestFit {
    index: usize,
    score: FitScore,
}

/// Batch matching orchestrator - single-pass greedy assignment
///
/// # Pass
/// 1. Copy the available spaces into a per-call working set
/// 2. Sort vehicles by volume, largest first (stable)
/// 3. For each vehicle, pick the fitting space with the lowest raw score
/// 4. Remove the chosen space so no later vehicle can reuse it
///
/// This is a heuristic, not an optimal assignment.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    result_order: ResultOrder,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            result_order: ResultOrder::default(),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_result_order(mut self, result_order: ResultOrder) -> Self {
        self.result_order = result_order;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn result_order(&self) -> ResultOrder {
        self.result_order
    }

    /// Match each vehicle to at most one space
    ///
    /// `spaces` is never modified; the pass works on its own list of
    /// references. Returns exactly one result per vehicle, and no two results
    /// share a space. Vehicles are expected to have passed validation.
    pub fn match_vehicles(&self, vehicles: &[Vehicle], spaces: &[StorageSpace]) -> Vec<MatchResult> {
        if vehicles.is_empty() {
            return Vec::new();
        }

        let mut available: Vec<&StorageSpace> = spaces.iter().collect();

        tracing::info!(
            "Matching {} vehicles to {} available storage spaces",
            vehicles.len(),
            available.len()
        );

        // Stable sort keeps equal-volume vehicles in input order
        let mut order: Vec<usize> = (0..vehicles.len()).collect();
        order.sort_by(|&a, &b| {
            vehicles[b]
                .volume()
                .partial_cmp(&vehicles[a].volume())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut results = Vec::with_capacity(vehicles.len());

        for &index in &order {
            let vehicle = &vehicles[index];

            let result = match self.find_best_fit(vehicle, &available) {
                Some(best) => {
                    let space = available.remove(best.index);
                    let fit_score = normalize_score(best.score.total);

                    tracing::debug!(
                        vehicle_id = %vehicle.id,
                        space_id = %space.id,
                        waste_ratio = best.score.waste_ratio,
                        cost_per_unit = best.score.cost_per_unit,
                        dimension_efficiency = best.score.dimension_efficiency,
                        raw_score = best.score.total,
                        fit_score,
                        "Matched vehicle {} to space {}",
                        vehicle.id,
                        space.id
                    );

                    MatchResult::matched(vehicle.id.clone(), space.clone(), fit_score)
                }
                None => {
                    tracing::warn!("No suitable space found for vehicle {}", vehicle.id);
                    MatchResult::unmatched(vehicle.id.clone())
                }
            };

            results.push((index, result));
        }

        if self.result_order == ResultOrder::Input {
            results.sort_by_key(|(index, _)| *index);
        }

        results.into_iter().map(|(_, result)| result).collect()
    }

    /// Match a single vehicle against a pool without consuming anything
    pub fn best_fit(&self, vehicle: &Vehicle, spaces: &[StorageSpace]) -> MatchResult {
        let pool: Vec<&StorageSpace> = spaces.iter().collect();

        match self.find_best_fit(vehicle, &pool) {
            Some(best) => MatchResult::matched(
                vehicle.id.clone(),
                pool[best.index].clone(),
                normalize_score(best.score.total),
            ),
            None => MatchResult::unmatched(vehicle.id.clone()),
        }
    }

    /// Lowest raw score among fitting spaces; ties go to the first one scanned
    ///
    /// Scores that are NaN or infinite never compare below the starting bound,
    /// so overflowing dimensions can't win the scan.
    fn find_best_fit(&self, vehicle: &Vehicle, pool: &[&StorageSpace]) -> Option<BestFit> {
        let vehicle_dims = vehicle.dimensions()?;
        let mut best: Option<BestFit> = None;
        let mut best_score = f64::MAX;

        for (index, space) in pool.iter().enumerate() {
            let Some(space_dims) = space.dimensions() else {
                continue;
            };
            if !vehicle_dims.fits_within(&space_dims) {
                continue;
            }

            let score = calculate_fit_score(
                &vehicle_dims,
                &space_dims,
                space.price_per_month,
                &self.weights,
            );

            if score.total < best_score {
                best_score = score.total;
                best = Some(BestFit { index, score });
            }
        }

        best
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
