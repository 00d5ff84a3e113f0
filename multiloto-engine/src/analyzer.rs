use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, warn};

use multiloto_core::error::{LotoError, Result};
use multiloto_core::game::{GameConfig, SlotGroup};
use multiloto_core::models::DrawRecord;

/// Partition du domaine en numéros chauds (percentile haut) et froids
/// (percentile bas), à égalité départagée par valeur croissante.
#[derive(Debug, Clone, Serialize)]
pub struct HotCold {
    pub hot: Vec<u8>,
    pub cold: Vec<u8>,
}

/// Statistiques de motifs sur le groupe principal.
#[derive(Debug, Clone, Serialize)]
pub struct PatternSummary {
    /// Paires adjacentes (n, n+1) dans les tirages triés.
    pub consecutive_run_count: u32,
    /// Fraction de valeurs impaires.
    pub odd_even_ratio: f64,
    /// Fraction de valeurs strictement au-dessus du milieu du domaine
    /// (le milieu exact compte comme bas).
    pub high_low_ratio: f64,
    /// (min, max) des sommes par tirage.
    pub sum_range: (u32, u32),
}

/// Retard d'un numéro : tirages écoulés depuis sa dernière apparition.
#[derive(Debug, Clone, Copy)]
pub struct GapState {
    pub last_seen_index: Option<usize>,
    pub gap: usize,
}

/// Cycle d'un numéro : écart moyen entre apparitions successives.
/// Absent du tableau si moins de deux apparitions (cycle inestimable).
#[derive(Debug, Clone, Copy)]
pub struct CycleState {
    pub mean_gap: f64,
    pub current_gap: usize,
}

/// Agrégat d'affichage, lecture pure.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsSummary {
    pub total_draws: usize,
    pub most_common: Vec<(u8, u32)>,
    pub least_common: Vec<(u8, u32)>,
    pub hot_numbers: Vec<u8>,
    pub cold_numbers: Vec<u8>,
    pub pattern: PatternSummary,
}

/// Agrégats mis en cache pour une génération donnée. Le compteur de
/// génération, incrémenté à chaque `load`, remplace l'ancienne clé par
/// longueur d'historique : deux jeux de données de même taille ne
/// peuvent plus entrer en collision.
#[derive(Default)]
struct Cache {
    generation: u64,
    frequency: Option<BTreeMap<u8, u32>>,
    group_frequency: HashMap<usize, BTreeMap<u8, u32>>,
    gap_states: HashMap<usize, BTreeMap<u8, GapState>>,
    cycle_states: HashMap<usize, BTreeMap<u8, CycleState>>,
    recency_scores: HashMap<usize, BTreeMap<u8, f64>>,
}

/// Détient l'historique chargé pour un jeu et calcule les agrégats
/// (fréquences, chaud/froid, retards, cycles, motifs) consommés par le
/// moteur de prédiction. Un analyseur par jeu de données ; l'état est
/// intégralement remplacé au `load` suivant.
///
/// Mono-thread : les accesseurs remplissent le cache via `&mut self`,
/// la sérialisation des appels concurrents incombe à l'appelant.
pub struct DataAnalyzer {
    records: Vec<DrawRecord>,
    config: Option<GameConfig>,
    generation: u64,
    cache: Cache,
}

impl Default for DataAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DataAnalyzer {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            config: None,
            generation: 0,
            cache: Cache::default(),
        }
    }

    /// Remplace l'état interne et invalide tous les caches. Échec si
    /// l'historique est vide ou si un tirage n'a pas le nombre de
    /// valeurs attendu par la configuration.
    pub fn load(&mut self, records: Vec<DrawRecord>, config: GameConfig) -> Result<()> {
        if records.is_empty() {
            return Err(LotoError::Param("historique vide".into()));
        }
        let expected = config.number_count();
        for (i, record) in records.iter().enumerate() {
            if record.numbers.len() != expected {
                return Err(LotoError::Param(format!(
                    "tirage {} : {} valeurs au lieu de {}",
                    i,
                    record.numbers.len(),
                    expected
                )));
            }
        }

        // L'index de tirage est la position dans l'ordre de chargement.
        let mut records = records;
        for (i, record) in records.iter_mut().enumerate() {
            record.draw_index = i;
        }

        self.generation += 1;
        self.records = records;
        self.config = Some(config);
        self.cache = Cache {
            generation: self.generation,
            ..Cache::default()
        };
        debug!(
            generation = self.generation,
            draws = self.records.len(),
            "historique chargé, caches invalidés"
        );
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.config.is_some()
    }

    pub fn total_draws(&self) -> usize {
        self.records.len()
    }

    pub fn config(&self) -> Result<&GameConfig> {
        self.config
            .as_ref()
            .ok_or_else(|| LotoError::Param("aucun historique chargé".into()))
    }

    /// Groupes positionnels du jeu chargé.
    pub fn groups(&self) -> Result<Vec<SlotGroup>> {
        Ok(self.config()?.groups())
    }

    fn ensure_loaded(&self) -> Result<()> {
        self.config().map(|_| ())
    }

    fn group_at(&self, group: usize) -> Result<(SlotGroup, usize)> {
        let groups = self.groups()?;
        let mut offset = 0;
        for (i, g) in groups.iter().enumerate() {
            if i == group {
                return Ok((*g, offset));
            }
            offset += g.count;
        }
        Err(LotoError::Param(format!("groupe {} inexistant", group)))
    }

    fn fresh_cache(&mut self) -> &mut Cache {
        if self.cache.generation != self.generation {
            self.cache = Cache {
                generation: self.generation,
                ..Cache::default()
            };
        }
        &mut self.cache
    }

    /// Table de fréquences : nombre d'occurrences de chaque valeur sur
    /// l'ensemble des tirages chargés, bonus compris. Un seul passage,
    /// mise en cache jusqu'au prochain `load`.
    pub fn get_frequency_analysis(&mut self) -> Result<BTreeMap<u8, u32>> {
        self.ensure_loaded()?;
        if let Some(freq) = &self.fresh_cache().frequency {
            return Ok(freq.clone());
        }

        let mut table: BTreeMap<u8, u32> = BTreeMap::new();
        for record in &self.records {
            for &n in &record.numbers {
                *table.entry(n).or_insert(0) += 1;
            }
        }
        debug!(generation = self.generation, "table de fréquences recalculée");
        self.fresh_cache().frequency = Some(table.clone());
        Ok(table)
    }

    /// Fréquences restreintes à un groupe positionnel.
    pub fn group_frequency(&mut self, group: usize) -> Result<BTreeMap<u8, u32>> {
        self.ensure_loaded()?;
        if let Some(freq) = self.fresh_cache().group_frequency.get(&group) {
            return Ok(freq.clone());
        }

        let (slot, offset) = self.group_at(group)?;
        let mut table: BTreeMap<u8, u32> = BTreeMap::new();
        for record in &self.records {
            for &n in &record.numbers[offset..offset + slot.count] {
                *table.entry(n).or_insert(0) += 1;
            }
        }
        self.fresh_cache().group_frequency.insert(group, table.clone());
        Ok(table)
    }

    /// Classification chaud/froid sur le groupe principal.
    pub fn get_hot_cold(&mut self, hot_pct: f64, cold_pct: f64) -> Result<HotCold> {
        self.group_hot_cold(0, hot_pct, cold_pct)
    }

    /// Classification chaud/froid d'un groupe : classement du domaine
    /// entier (les numéros jamais sortis comptent 0 et peuvent donc être
    /// froids) par (fréquence, valeur) croissants, puis découpe à l'index
    /// de percentile. Les partitions sont disjointes par construction et
    /// l'élément à la coupure tombe du côté le plus strict.
    pub fn group_hot_cold(&mut self, group: usize, hot_pct: f64, cold_pct: f64) -> Result<HotCold> {
        if !(0.0..=1.0).contains(&hot_pct) || !(0.0..=1.0).contains(&cold_pct) {
            return Err(LotoError::Param(format!(
                "percentiles hors [0,1] : chaud={}, froid={}",
                hot_pct, cold_pct
            )));
        }
        if hot_pct <= cold_pct {
            return Err(LotoError::Param(format!(
                "percentile chaud ({}) doit dépasser le froid ({})",
                hot_pct, cold_pct
            )));
        }

        let freq = self.group_frequency(group)?;
        let (slot, _) = self.group_at(group)?;

        let mut ranked: Vec<(u32, u8)> = (slot.range.0..=slot.range.1)
            .map(|n| (freq.get(&n).copied().unwrap_or(0), n))
            .collect();
        ranked.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        let n = ranked.len();
        let cold_idx = (n as f64 * cold_pct).floor() as usize;
        let hot_idx = (n as f64 * hot_pct).floor() as usize;

        let mut cold: Vec<u8> = ranked[..cold_idx].iter().map(|&(_, num)| num).collect();
        let mut hot: Vec<u8> = ranked[hot_idx..].iter().map(|&(_, num)| num).collect();
        cold.sort_unstable();
        hot.sort_unstable();

        Ok(HotCold { hot, cold })
    }

    /// Motifs sur le groupe principal, éventuellement restreints aux
    /// `window` tirages les plus récents.
    pub fn get_pattern_summary(&mut self, window: Option<usize>) -> Result<PatternSummary> {
        self.group_pattern_summary(0, window)
    }

    pub fn group_pattern_summary(
        &mut self,
        group: usize,
        window: Option<usize>,
    ) -> Result<PatternSummary> {
        self.ensure_loaded()?;
        let total = self.records.len();
        let window = match window {
            None => total,
            Some(0) => return Err(LotoError::Param("fenêtre nulle".into())),
            Some(w) if w > total => {
                return Err(LotoError::Param(format!(
                    "fenêtre {} supérieure aux {} tirages disponibles",
                    w, total
                )))
            }
            Some(w) => w,
        };

        let (slot, offset) = self.group_at(group)?;
        let mid = (slot.range.0 as f64 + slot.range.1 as f64) / 2.0;

        let mut consecutive = 0u32;
        let mut odd = 0usize;
        let mut high = 0usize;
        let mut values = 0usize;
        let mut sum_min = u32::MAX;
        let mut sum_max = 0u32;

        for record in &self.records[total - window..] {
            let mut draw: Vec<u8> = record.numbers[offset..offset + slot.count].to_vec();
            draw.sort_unstable();

            for pair in draw.windows(2) {
                if pair[1].wrapping_sub(pair[0]) == 1 {
                    consecutive += 1;
                }
            }

            let sum: u32 = draw.iter().map(|&n| n as u32).sum();
            sum_min = sum_min.min(sum);
            sum_max = sum_max.max(sum);

            for &n in &draw {
                values += 1;
                if n % 2 == 1 {
                    odd += 1;
                }
                if (n as f64) > mid {
                    high += 1;
                }
            }
        }

        Ok(PatternSummary {
            consecutive_run_count: consecutive,
            odd_even_ratio: odd as f64 / values as f64,
            high_low_ratio: high as f64 / values as f64,
            sum_range: (sum_min, sum_max),
        })
    }

    /// Retard de chaque numéro du domaine du groupe. Un numéro jamais
    /// sorti reçoit un retard égal au nombre total de tirages.
    pub fn group_gap_states(&mut self, group: usize) -> Result<BTreeMap<u8, GapState>> {
        self.ensure_loaded()?;
        if let Some(states) = self.fresh_cache().gap_states.get(&group) {
            return Ok(states.clone());
        }

        let (slot, offset) = self.group_at(group)?;
        let total = self.records.len();
        let latest = total - 1;

        let mut last_seen: BTreeMap<u8, usize> = BTreeMap::new();
        for record in &self.records {
            for &n in &record.numbers[offset..offset + slot.count] {
                last_seen.insert(n, record.draw_index);
            }
        }

        let states: BTreeMap<u8, GapState> = (slot.range.0..=slot.range.1)
            .map(|n| {
                let state = match last_seen.get(&n) {
                    Some(&idx) => GapState {
                        last_seen_index: Some(idx),
                        gap: latest - idx,
                    },
                    None => GapState {
                        last_seen_index: None,
                        gap: total,
                    },
                };
                (n, state)
            })
            .collect();

        self.fresh_cache().gap_states.insert(group, states.clone());
        Ok(states)
    }

    /// Écart moyen entre apparitions successives, par numéro. Les numéros
    /// vus moins de deux fois sont exclus : pas assez pour estimer un
    /// cycle.
    pub fn group_cycle_states(&mut self, group: usize) -> Result<BTreeMap<u8, CycleState>> {
        self.ensure_loaded()?;
        if let Some(states) = self.fresh_cache().cycle_states.get(&group) {
            return Ok(states.clone());
        }

        let (slot, offset) = self.group_at(group)?;
        let latest = self.records.len() - 1;

        let mut appearances: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
        for record in &self.records {
            for &n in &record.numbers[offset..offset + slot.count] {
                appearances.entry(n).or_default().push(record.draw_index);
            }
        }

        let mut states: BTreeMap<u8, CycleState> = BTreeMap::new();
        for (n, indices) in appearances {
            if indices.len() < 2 {
                continue;
            }
            let gaps: Vec<f64> = indices.windows(2).map(|w| (w[1] - w[0]) as f64).collect();
            let mean_gap = gaps.iter().sum::<f64>() / gaps.len() as f64;
            let current_gap = latest - indices[indices.len() - 1];
            states.insert(n, CycleState { mean_gap, current_gap });
        }

        self.fresh_cache().cycle_states.insert(group, states.clone());
        Ok(states)
    }

    /// Fréquences sur les `window` tirages les plus récents. Si la fenêtre
    /// dépasse l'historique, la série complète est utilisée et un
    /// avertissement est émis — dégradation, pas échec.
    pub fn group_window_frequency(
        &mut self,
        group: usize,
        window: usize,
    ) -> Result<(BTreeMap<u8, u32>, bool)> {
        self.ensure_loaded()?;
        if window == 0 {
            return Err(LotoError::Param("fenêtre nulle".into()));
        }

        let total = self.records.len();
        let truncated = window > total;
        if truncated {
            warn!(
                window,
                total, "fenêtre supérieure à l'historique, série complète utilisée"
            );
        }
        let effective = window.min(total);

        let (slot, offset) = self.group_at(group)?;
        let mut table: BTreeMap<u8, u32> = BTreeMap::new();
        for record in &self.records[total - effective..] {
            for &n in &record.numbers[offset..offset + slot.count] {
                *table.entry(n).or_insert(0) += 1;
            }
        }
        Ok((table, truncated))
    }

    /// Score de fréquence à décroissance exponentielle : chaque occurrence
    /// de `n` au tirage d'index `t` pèse exp(-(dernier - t) / (dernier+1)
    /// / 0.3), soit une constante de temps de 30 % de la série.
    pub fn group_recency_scores(&mut self, group: usize) -> Result<BTreeMap<u8, f64>> {
        self.ensure_loaded()?;
        if let Some(scores) = self.fresh_cache().recency_scores.get(&group) {
            return Ok(scores.clone());
        }

        let (slot, offset) = self.group_at(group)?;
        let latest = self.records.len() - 1;
        let scale = (latest + 1) as f64 * 0.3;

        let mut scores: BTreeMap<u8, f64> = BTreeMap::new();
        for record in &self.records {
            let age = (latest - record.draw_index) as f64;
            let weight = (-age / scale).exp();
            for &n in &record.numbers[offset..offset + slot.count] {
                *scores.entry(n).or_insert(0.0) += weight;
            }
        }

        self.fresh_cache().recency_scores.insert(group, scores.clone());
        Ok(scores)
    }

    /// Agrégat d'affichage : totaux, extrêmes de fréquence, chaud/froid
    /// aux seuils par défaut et motifs sur l'historique entier.
    pub fn get_statistics_summary(&mut self) -> Result<StatisticsSummary> {
        let freq = self.get_frequency_analysis()?;

        let mut by_count: Vec<(u8, u32)> = freq.iter().map(|(&n, &c)| (n, c)).collect();
        by_count.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let most_common: Vec<(u8, u32)> = by_count.iter().take(10).copied().collect();

        by_count.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        let least_common: Vec<(u8, u32)> = by_count.iter().take(10).copied().collect();

        let hot_cold = self.get_hot_cold(0.7, 0.3)?;
        let pattern = self.get_pattern_summary(None)?;

        Ok(StatisticsSummary {
            total_draws: self.records.len(),
            most_common,
            least_common,
            hot_numbers: hot_cold.hot,
            cold_numbers: hot_cold.cold,
            pattern,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::make_test_records;
    use multiloto_core::game::GameConfig;

    fn general() -> GameConfig {
        GameConfig::by_id("general").unwrap()
    }

    fn loaded(n: usize) -> DataAnalyzer {
        let mut analyzer = DataAnalyzer::new();
        analyzer.load(make_test_records(n), general()).unwrap();
        analyzer
    }

    #[test]
    fn test_load_empty_fails() {
        let mut analyzer = DataAnalyzer::new();
        let err = analyzer.load(vec![], general());
        assert!(matches!(err, Err(LotoError::Param(_))));
    }

    #[test]
    fn test_load_wrong_count_fails() {
        let mut analyzer = DataAnalyzer::new();
        let records = vec![DrawRecord::new(0, "2024-01-01", vec![1, 2, 3])];
        let err = analyzer.load(records, general());
        assert!(matches!(err, Err(LotoError::Param(_))));
    }

    #[test]
    fn test_unloaded_analysis_fails() {
        let mut analyzer = DataAnalyzer::new();
        assert!(analyzer.get_frequency_analysis().is_err());
        assert!(analyzer.get_statistics_summary().is_err());
    }

    #[test]
    fn test_frequency_invariant() {
        let mut analyzer = loaded(40);
        let freq = analyzer.get_frequency_analysis().unwrap();
        let total: u32 = freq.values().sum();
        assert_eq!(total as usize, 40 * 6);
    }

    #[test]
    fn test_frequency_cache_idempotent() {
        let mut analyzer = loaded(25);
        let a = analyzer.get_frequency_analysis().unwrap();
        let b = analyzer.get_frequency_analysis().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generation_invalidates_same_length() {
        // Deux historiques de même longueur : l'ancien cache par longueur
        // les confondait, le compteur de génération non.
        let mut analyzer = DataAnalyzer::new();
        analyzer.load(make_test_records(20), general()).unwrap();
        let before = analyzer.get_frequency_analysis().unwrap();

        let mut shifted = make_test_records(20);
        for record in &mut shifted {
            for n in &mut record.numbers {
                *n = (*n % 49) + 1;
            }
        }
        analyzer.load(shifted, general()).unwrap();
        let after = analyzer.get_frequency_analysis().unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_hot_cold_disjoint_and_in_domain() {
        let mut analyzer = loaded(60);
        let hc = analyzer.get_hot_cold(0.7, 0.3).unwrap();
        for n in &hc.hot {
            assert!(!hc.cold.contains(n), "numéro {} à la fois chaud et froid", n);
            assert!((1..=49).contains(n));
        }
        for n in &hc.cold {
            assert!((1..=49).contains(n));
        }
        assert!(!hc.hot.is_empty());
        assert!(!hc.cold.is_empty());
    }

    #[test]
    fn test_hot_cold_unseen_numbers_can_be_cold() {
        // make_test_records ne sort jamais 49 : fréquence nulle.
        let mut analyzer = loaded(60);
        let hc = analyzer.get_hot_cold(0.7, 0.3).unwrap();
        assert!(hc.cold.contains(&49));
    }

    #[test]
    fn test_hot_cold_invalid_percentiles() {
        let mut analyzer = loaded(20);
        assert!(analyzer.get_hot_cold(1.5, 0.3).is_err());
        assert!(analyzer.get_hot_cold(0.7, -0.1).is_err());
        assert!(analyzer.get_hot_cold(0.3, 0.7).is_err());
        assert!(analyzer.get_hot_cold(0.5, 0.5).is_err());
    }

    #[test]
    fn test_pattern_summary_window_validation() {
        let mut analyzer = loaded(20);
        assert!(analyzer.get_pattern_summary(Some(0)).is_err());
        assert!(analyzer.get_pattern_summary(Some(21)).is_err());
        assert!(analyzer.get_pattern_summary(Some(20)).is_ok());
        assert!(analyzer.get_pattern_summary(None).is_ok());
    }

    #[test]
    fn test_pattern_summary_values() {
        let mut analyzer = DataAnalyzer::new();
        let records = vec![
            DrawRecord::new(0, "2024-01-01", vec![1, 2, 3, 4, 5, 6]),
            DrawRecord::new(1, "2024-01-02", vec![44, 45, 46, 47, 48, 49]),
        ];
        analyzer.load(records, general()).unwrap();
        let p = analyzer.get_pattern_summary(None).unwrap();
        // 5 paires consécutives par tirage.
        assert_eq!(p.consecutive_run_count, 10);
        assert!((p.odd_even_ratio - 0.5).abs() < 1e-12);
        // Milieu de 1-49 : 25.0 ; le premier tirage est entièrement bas.
        assert!((p.high_low_ratio - 0.5).abs() < 1e-12);
        assert_eq!(p.sum_range, (21, 279));
    }

    #[test]
    fn test_gap_states_maximum_gap_for_unseen() {
        let mut analyzer = loaded(40);
        let gaps = analyzer.group_gap_states(0).unwrap();
        let unseen = gaps.get(&49).unwrap();
        assert_eq!(unseen.gap, 40);
        assert!(unseen.last_seen_index.is_none());
    }

    #[test]
    fn test_gap_states_recent_number_zero_gap() {
        let mut analyzer = DataAnalyzer::new();
        let records = vec![
            DrawRecord::new(0, "2024-01-01", vec![1, 2, 3, 4, 5, 6]),
            DrawRecord::new(1, "2024-01-02", vec![7, 8, 9, 10, 11, 12]),
        ];
        analyzer.load(records, general()).unwrap();
        let gaps = analyzer.group_gap_states(0).unwrap();
        assert_eq!(gaps.get(&7).unwrap().gap, 0);
        assert_eq!(gaps.get(&1).unwrap().gap, 1);
    }

    #[test]
    fn test_cycle_states_excludes_single_appearance() {
        let mut analyzer = DataAnalyzer::new();
        let records = vec![
            DrawRecord::new(0, "2024-01-01", vec![1, 2, 3, 4, 5, 6]),
            DrawRecord::new(1, "2024-01-02", vec![1, 8, 9, 10, 11, 12]),
            DrawRecord::new(2, "2024-01-03", vec![1, 14, 15, 16, 17, 18]),
        ];
        analyzer.load(records, general()).unwrap();
        let cycles = analyzer.group_cycle_states(0).unwrap();
        // 1 apparaît trois fois : écarts [1, 1], moyenne 1.
        let c = cycles.get(&1).unwrap();
        assert!((c.mean_gap - 1.0).abs() < 1e-12);
        assert_eq!(c.current_gap, 0);
        // 8 n'apparaît qu'une fois : exclu.
        assert!(!cycles.contains_key(&8));
    }

    #[test]
    fn test_window_frequency_truncation() {
        let mut analyzer = loaded(5);
        assert!(analyzer.group_window_frequency(0, 0).is_err());
        let (_, truncated) = analyzer.group_window_frequency(0, 3).unwrap();
        assert!(!truncated);
        let (table, truncated) = analyzer.group_window_frequency(0, 50).unwrap();
        assert!(truncated);
        let total: u32 = table.values().sum();
        assert_eq!(total as usize, 5 * 6);
    }

    #[test]
    fn test_recency_scores_favor_recent() {
        let mut analyzer = DataAnalyzer::new();
        let mut records = vec![DrawRecord::new(0, "2024-01-01", vec![1, 2, 3, 4, 5, 6])];
        for i in 1..20 {
            records.push(DrawRecord::new(i, "2024-01-02", vec![7, 8, 9, 10, 11, 12]));
        }
        analyzer.load(records, general()).unwrap();
        let scores = analyzer.group_recency_scores(0).unwrap();
        // 7 est sorti 19 fois récemment, 1 une seule fois au tout début.
        assert!(scores.get(&7).unwrap() > scores.get(&1).unwrap());
    }

    #[test]
    fn test_statistics_summary_shape() {
        let mut analyzer = loaded(50);
        let s = analyzer.get_statistics_summary().unwrap();
        assert_eq!(s.total_draws, 50);
        assert!(s.most_common.len() <= 10);
        assert!(s.least_common.len() <= 10);
        assert!(!s.hot_numbers.is_empty());
        // most_common trié par fréquence décroissante.
        for pair in s.most_common.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_bonus_group_frequency() {
        let mut analyzer = DataAnalyzer::new();
        let game = GameConfig::by_id("super-lotto").unwrap();
        let records = vec![
            DrawRecord::new(0, "2024-01-01", vec![1, 2, 3, 4, 5, 6, 7]),
            DrawRecord::new(1, "2024-01-02", vec![1, 2, 3, 4, 5, 6, 8]),
        ];
        analyzer.load(records, game).unwrap();
        let bonus = analyzer.group_frequency(1).unwrap();
        assert_eq!(bonus.get(&6).copied(), Some(2));
        assert_eq!(bonus.get(&7).copied(), Some(1));
        // Le 1 principal n'apparaît pas dans la table des bonus.
        assert!(!bonus.contains_key(&1));
    }
}
