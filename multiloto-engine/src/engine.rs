use std::collections::BTreeMap;

use tracing::debug;

use multiloto_core::error::{LotoError, Result};
use multiloto_core::game::{GameConfig, SlotGroup};
use multiloto_core::models::{DrawRecord, EnsembleResult, PredictionResult};

use crate::analyzer::{DataAnalyzer, StatisticsSummary};
use crate::strategies::{all_strategies, fill_uniform, PickContext, Strategy};

/// Noms publics des sept stratégies, dans l'ordre de l'ensemble.
pub const ALGORITHM_NAMES: [&str; 7] = [
    "frequency",
    "hot_cold",
    "pattern",
    "weighted_frequency",
    "gap_analysis",
    "moving_average",
    "cyclic_pattern",
];

/// Réglages du moteur. `min_data_points` pilote la rampe de confiance :
/// confiance = min(1, tirages / (min_data_points × 5)).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub min_data_points: usize,
    pub confidence_threshold: f64,
    pub moving_average_window: usize,
    pub pattern_swap_attempts: usize,
    pub hot_percentile: f64,
    pub cold_percentile: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_data_points: 10,
            confidence_threshold: 0.6,
            moving_average_window: 10,
            pattern_swap_attempts: 50,
            hot_percentile: 0.7,
            cold_percentile: 0.3,
        }
    }
}

/// Moteur de prédiction : détient un analyseur chargé et dispatch les
/// sept stratégies plus le vote d'ensemble. L'aléa vient d'une source
/// cryptographique non rejouable — aucune API de graine n'est exposée.
pub struct PredictionEngine {
    analyzer: DataAnalyzer,
    config: EngineConfig,
}

impl PredictionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            analyzer: DataAnalyzer::new(),
            config,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Charge un historique : remplace l'état de l'analyseur et invalide
    /// ses caches. Une fois par jeu de données / session.
    pub fn load(&mut self, records: Vec<DrawRecord>, game: GameConfig) -> Result<()> {
        self.analyzer.load(records, game)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyzer_mut(&mut self) -> &mut DataAnalyzer {
        &mut self.analyzer
    }

    pub fn get_statistics_summary(&mut self) -> Result<StatisticsSummary> {
        self.analyzer.get_statistics_summary()
    }

    /// Rampe linéaire saturante sur la taille de l'historique. Signal de
    /// suffisance de données, à ne jamais lire comme une probabilité de
    /// gain : sous le seuil configuré, l'interface doit afficher un
    /// indice « confiance basse », pas rejeter le résultat.
    pub fn confidence(&self) -> f64 {
        let data_points = self.analyzer.total_draws();
        (data_points as f64 / (self.config.min_data_points as f64 * 5.0)).min(1.0)
    }

    pub fn is_low_confidence(&self) -> bool {
        self.confidence() < self.config.confidence_threshold
    }

    /// Prédit avec une stratégie nommée. `ranges` est positionnel ; une
    /// borne unique est répliquée sur les `count` emplacements. Erreurs
    /// de paramètres immédiates, jamais de repli silencieux.
    pub fn predict(
        &mut self,
        algorithm: &str,
        count: usize,
        ranges: &[(u8, u8)],
    ) -> Result<PredictionResult> {
        let strategy = strategy_by_name(algorithm, &self.config)?;
        let contexts = self.resolve_groups(count, ranges)?;

        let mut numbers = Vec::with_capacity(count);
        for ctx in &contexts {
            let mut picked = strategy.pick(&mut self.analyzer, ctx)?;
            if ctx.slot.distinct {
                picked.sort_unstable();
            }
            numbers.extend(picked);
        }

        debug!(algorithm, count, "prédiction générée");
        Ok(PredictionResult {
            algorithm: algorithm.to_string(),
            numbers,
            confidence: self.confidence(),
        })
    }

    /// Exécute chaque stratégie configurée puis vote : une voix par
    /// occurrence d'un numéro dans une sortie de stratégie, égalités
    /// départagées par fréquence brute décroissante puis valeur
    /// croissante.
    pub fn predict_ensemble(
        &mut self,
        count: usize,
        ranges: &[(u8, u8)],
        algorithms: Option<&[&str]>,
    ) -> Result<EnsembleResult> {
        let names: Vec<&str> = match algorithms {
            Some(list) if !list.is_empty() => list.to_vec(),
            _ => ALGORITHM_NAMES.to_vec(),
        };
        let contexts = self.resolve_groups(count, ranges)?;

        let mut per_algorithm: BTreeMap<String, PredictionResult> = BTreeMap::new();
        for name in &names {
            let result = self.predict(name, count, ranges)?;
            per_algorithm.insert(name.to_string(), result);
        }

        // Vote par groupe : les tranches positionnelles des sorties de
        // stratégies s'alignent puisque les groupes sont les mêmes.
        let mut recommended = Vec::with_capacity(count);
        let mut offset = 0;
        for ctx in &contexts {
            let mut votes: BTreeMap<u8, u32> = BTreeMap::new();
            for result in per_algorithm.values() {
                for &n in &result.numbers[offset..offset + ctx.slot.count] {
                    *votes.entry(n).or_insert(0) += 1;
                }
            }

            let freq = self.analyzer.group_frequency(ctx.analyzer_group)?;
            let mut tally: Vec<(u8, u32, u32)> = votes
                .into_iter()
                .map(|(n, v)| (n, v, freq.get(&n).copied().unwrap_or(0)))
                .collect();
            tally.sort_by(|a, b| b.1.cmp(&a.1).then(b.2.cmp(&a.2)).then(a.0.cmp(&b.0)));

            let mut group_pick: Vec<u8> = tally
                .into_iter()
                .take(ctx.slot.count)
                .map(|(n, _, _)| n)
                .collect();
            fill_uniform(&mut group_pick, ctx.slot);
            if ctx.slot.distinct {
                group_pick.sort_unstable();
            }
            recommended.extend(group_pick);
            offset += ctx.slot.count;
        }

        Ok(EnsembleResult {
            recommended,
            confidence: self.confidence(),
            data_points_used: self.analyzer.total_draws(),
            algorithms_used: names.iter().map(|s| s.to_string()).collect(),
            per_algorithm,
        })
    }

    /// Valide les paramètres d'appel et découpe les bornes en groupes :
    /// les suites contiguës de bornes identiques forment un groupe,
    /// rattaché à l'agrégat de l'analyseur couvrant le même emplacement.
    fn resolve_groups(&mut self, count: usize, ranges: &[(u8, u8)]) -> Result<Vec<PickContext>> {
        if count < 1 {
            return Err(LotoError::Param("count doit valoir au moins 1".into()));
        }
        if ranges.is_empty() {
            return Err(LotoError::Param("aucune borne fournie".into()));
        }
        for &(lo, hi) in ranges {
            if lo > hi {
                return Err(LotoError::Param(format!("bornes inversées : ({}, {})", lo, hi)));
            }
        }

        let effective: Vec<(u8, u8)> = if ranges.len() == 1 {
            vec![ranges[0]; count]
        } else if ranges.len() == count {
            ranges.to_vec()
        } else {
            return Err(LotoError::Param(format!(
                "{} bornes pour {} valeurs demandées",
                ranges.len(),
                count
            )));
        };

        let is_digit_game = self.analyzer.config()?.is_digit_game();
        let analyzer_groups = self.analyzer.groups()?;

        let mut contexts: Vec<PickContext> = Vec::new();
        let mut run_start = 0;
        for i in 1..=effective.len() {
            if i == effective.len() || effective[i] != effective[run_start] {
                let slot = SlotGroup {
                    count: i - run_start,
                    range: effective[run_start],
                    distinct: !is_digit_game,
                };
                if slot.distinct && slot.count > slot.domain_size() {
                    return Err(LotoError::Param(format!(
                        "{} valeurs distinctes demandées dans un domaine de {}",
                        slot.count,
                        slot.domain_size()
                    )));
                }
                contexts.push(PickContext {
                    analyzer_group: analyzer_group_at(&analyzer_groups, run_start),
                    slot,
                });
                run_start = i;
            }
        }
        Ok(contexts)
    }
}

/// Groupe de l'analyseur couvrant l'emplacement positionnel `offset`.
fn analyzer_group_at(groups: &[SlotGroup], offset: usize) -> usize {
    let mut cursor = 0;
    for (i, g) in groups.iter().enumerate() {
        cursor += g.count;
        if offset < cursor {
            return i;
        }
    }
    groups.len().saturating_sub(1)
}

fn strategy_by_name(name: &str, config: &EngineConfig) -> Result<Box<dyn Strategy>> {
    all_strategies(config)
        .into_iter()
        .find(|s| s.name() == name)
        .ok_or_else(|| {
            LotoError::Param(format!(
                "algorithme inconnu : {} (disponibles : {})",
                name,
                ALGORITHM_NAMES.join(", ")
            ))
        })
}
