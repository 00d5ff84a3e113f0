use std::collections::BTreeMap;

use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;

use multiloto_core::{LotoError, Result};

use super::{fill_uniform, PickContext, Strategy};
use crate::analyzer::DataAnalyzer;

/// Échantillonnage pondéré par fréquence (lissage de Laplace +1), puis
/// échanges gloutons vers les répartitions pair/impair et haut/bas
/// historiques, à ±1 emplacement près. Au-delà du nombre d'essais borné,
/// la répartition la plus proche atteinte est acceptée.
pub struct PatternStrategy {
    swap_attempts: usize,
}

impl PatternStrategy {
    pub fn new(swap_attempts: usize) -> Self {
        Self { swap_attempts }
    }
}

impl Strategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn pick(&self, analyzer: &mut DataAnalyzer, ctx: &PickContext) -> Result<Vec<u8>> {
        let counts = analyzer.group_frequency(ctx.analyzer_group)?;
        let summary = analyzer.group_pattern_summary(ctx.analyzer_group, None)?;

        // Poids lissés sur tout le domaine demandé : aucun numéro à
        // probabilité nulle, même jamais vu.
        let weights: BTreeMap<u8, f64> = (ctx.slot.range.0..=ctx.slot.range.1)
            .map(|n| (n, counts.get(&n).copied().unwrap_or(0) as f64 + 1.0))
            .collect();

        let count = ctx.slot.count;
        let mut selected = weighted_sample_distinct(&weights, count)?;

        let target_odd = (summary.odd_even_ratio * count as f64).round() as i64;
        let target_high = (summary.high_low_ratio * count as f64).round() as i64;
        let mid = (ctx.slot.range.0 as f64 + ctx.slot.range.1 as f64) / 2.0;

        let mut rng = rand::rng();
        for _ in 0..self.swap_attempts {
            let odd = selected.iter().filter(|&&n| n % 2 == 1).count() as i64;
            let high = selected.iter().filter(|&&n| (n as f64) > mid).count() as i64;
            let odd_dev = odd - target_odd;
            let high_dev = high - target_high;

            if odd_dev.abs() <= 1 && high_dev.abs() <= 1 {
                break;
            }

            // Corrige l'écart le plus sévère par un échange pondéré ;
            // si aucun candidat ne convient, on garde la répartition
            // la plus proche atteinte.
            let swapped = if odd_dev.abs() >= high_dev.abs() {
                swap_member(
                    &mut selected,
                    &weights,
                    &mut rng,
                    |n| (n % 2 == 1) == (odd_dev > 0),
                    |n| (n % 2 == 1) != (odd_dev > 0),
                )
            } else {
                swap_member(
                    &mut selected,
                    &weights,
                    &mut rng,
                    |n| ((n as f64) > mid) == (high_dev > 0),
                    |n| ((n as f64) > mid) != (high_dev > 0),
                )
            };
            if !swapped {
                break;
            }
        }

        fill_uniform(&mut selected, ctx.slot);
        Ok(selected)
    }
}

/// Tirage pondéré sans remise, comme l'échantillonneur de grilles :
/// la valeur tirée est retirée du bassin à chaque itération.
fn weighted_sample_distinct(weights: &BTreeMap<u8, f64>, count: usize) -> Result<Vec<u8>> {
    let mut rng = rand::rng();
    let mut pool: Vec<(u8, f64)> = weights.iter().map(|(&n, &w)| (n, w)).collect();
    let mut selected = Vec::with_capacity(count);

    while selected.len() < count && !pool.is_empty() {
        let dist = WeightedIndex::new(pool.iter().map(|(_, w)| *w))
            .map_err(|e| LotoError::Param(format!("poids d'échantillonnage invalides : {}", e)))?;
        let idx = dist.sample(&mut rng);
        let (n, _) = pool.swap_remove(idx);
        selected.push(n);
    }

    Ok(selected)
}

/// Retire un membre vérifiant `out` et insère un candidat vérifiant
/// `wanted`, tiré au poids parmi les absents. Retourne false si aucun
/// échange n'est possible.
fn swap_member<R: rand::Rng>(
    selected: &mut Vec<u8>,
    weights: &BTreeMap<u8, f64>,
    rng: &mut R,
    out: impl Fn(u8) -> bool,
    wanted: impl Fn(u8) -> bool,
) -> bool {
    let out_positions: Vec<usize> = selected
        .iter()
        .enumerate()
        .filter(|(_, &n)| out(n))
        .map(|(i, _)| i)
        .collect();
    if out_positions.is_empty() {
        return false;
    }

    let candidates: Vec<(u8, f64)> = weights
        .iter()
        .filter(|(&n, _)| wanted(n) && !selected.contains(&n))
        .map(|(&n, &w)| (n, w))
        .collect();
    if candidates.is_empty() {
        return false;
    }

    let dist = match WeightedIndex::new(candidates.iter().map(|(_, w)| *w)) {
        Ok(d) => d,
        Err(_) => return false,
    };
    let incoming = candidates[dist.sample(rng)].0;

    let position = out_positions[rng.random_range(0..out_positions.len())];
    selected[position] = incoming;
    true
}
