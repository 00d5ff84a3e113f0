pub mod cyclic;
pub mod frequency;
pub mod gap;
pub mod hot_cold;
pub mod moving_average;
pub mod pattern;
pub mod weighted;

use std::collections::BTreeMap;

use rand::Rng;

use multiloto_core::game::SlotGroup;
use multiloto_core::models::DrawRecord;
use multiloto_core::Result;

use crate::analyzer::DataAnalyzer;
use crate::engine::EngineConfig;

/// Contexte de sélection pour un groupe de la grille demandée :
/// `analyzer_group` indexe les agrégats de l'analyseur, `slot` décrit le
/// groupe demandé (compte, bornes, unicité).
#[derive(Debug, Clone, Copy)]
pub struct PickContext {
    pub analyzer_group: usize,
    pub slot: SlotGroup,
}

/// Une stratégie de prédiction. Toutes lisent les agrégats de
/// l'analyseur, jamais les tirages bruts, et partagent la politique de
/// remplissage : si le score primaire fournit moins de candidats que
/// demandé, le reste est tiré uniformément dans le domaine. Chaque appel
/// retourne donc exactement `slot.count` valeurs, même sur un historique
/// d'un seul tirage — à l'appelant de lire la confiance.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Sélectionne `ctx.slot.count` valeurs, en ordre de rang.
    fn pick(&self, analyzer: &mut DataAnalyzer, ctx: &PickContext) -> Result<Vec<u8>>;
}

/// Les sept stratégies, paramétrées par la configuration du moteur.
pub fn all_strategies(config: &EngineConfig) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(frequency::FrequencyStrategy),
        Box::new(hot_cold::HotColdStrategy::new(
            config.hot_percentile,
            config.cold_percentile,
        )),
        Box::new(pattern::PatternStrategy::new(config.pattern_swap_attempts)),
        Box::new(weighted::WeightedFrequencyStrategy),
        Box::new(gap::GapStrategy),
        Box::new(moving_average::MovingAverageStrategy::new(
            config.moving_average_window,
        )),
        Box::new(cyclic::CyclicStrategy),
    ]
}

/// Classement décroissant par score, à égalité par valeur croissante
/// (l'itération du BTreeMap est croissante et le tri est stable).
pub(crate) fn rank_desc(scores: &BTreeMap<u8, f64>, count: usize) -> Vec<u8> {
    let mut ranked: Vec<(u8, f64)> = scores.iter().map(|(&n, &s)| (n, s)).collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.into_iter().take(count).map(|(n, _)| n).collect()
}

pub(crate) fn counts_to_scores(counts: &BTreeMap<u8, u32>) -> BTreeMap<u8, f64> {
    counts.iter().map(|(&n, &c)| (n, c as f64)).collect()
}

/// Restreint un tableau de scores au domaine du groupe demandé.
pub(crate) fn clamp_to_slot(scores: BTreeMap<u8, f64>, slot: SlotGroup) -> BTreeMap<u8, f64> {
    scores
        .into_iter()
        .filter(|(n, _)| *n >= slot.range.0 && *n <= slot.range.1)
        .collect()
}

/// Politique de remplissage commune : complète la sélection par tirage
/// uniforme sans remise dans le domaine restant. Le domaine ne peut
/// s'épuiser que pour un groupe à répétitions permises, auquel cas on
/// tire avec remise.
pub(crate) fn fill_uniform(selected: &mut Vec<u8>, slot: SlotGroup) {
    let mut rng = rand::rng();
    let mut pool: Vec<u8> = (slot.range.0..=slot.range.1)
        .filter(|n| !selected.contains(n))
        .collect();

    while selected.len() < slot.count {
        if pool.is_empty() {
            selected.push(rng.random_range(slot.range.0..=slot.range.1));
        } else {
            let idx = rng.random_range(0..pool.len());
            selected.push(pool.swap_remove(idx));
        }
    }
}

/// Historique synthétique 6/49 pour les tests : cycle de 8 grilles
/// disjointes, toutes les valeurs restent sous 49.
pub fn make_test_records(n: usize) -> Vec<DrawRecord> {
    (0..n)
        .map(|i| {
            let base = (i % 8) as u8 * 6;
            DrawRecord::new(
                i,
                format!("2024-01-{:02}", (i % 28) + 1),
                vec![base + 1, base + 2, base + 3, base + 4, base + 5, base + 6],
            )
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use multiloto_core::game::GameConfig;

    pub fn general_ctx(count: usize) -> PickContext {
        PickContext {
            analyzer_group: 0,
            slot: SlotGroup { count, range: (1, 49), distinct: true },
        }
    }

    pub fn loaded_analyzer(n: usize) -> DataAnalyzer {
        let mut analyzer = DataAnalyzer::new();
        analyzer
            .load(make_test_records(n), GameConfig::by_id("general").unwrap())
            .unwrap();
        analyzer
    }

    /// Vérifie longueur exacte, bornes et absence de doublon.
    pub fn assert_valid_pick(pick: &[u8], ctx: &PickContext) {
        assert_eq!(pick.len(), ctx.slot.count);
        for &n in pick {
            assert!(n >= ctx.slot.range.0 && n <= ctx.slot.range.1, "{} hors bornes", n);
        }
        if ctx.slot.distinct {
            for i in 0..pick.len() {
                for j in (i + 1)..pick.len() {
                    assert_ne!(pick[i], pick[j], "doublon {}", pick[i]);
                }
            }
        }
    }
}
