use std::collections::BTreeMap;

use multiloto_core::Result;

use super::{fill_uniform, rank_desc, PickContext, Strategy};
use crate::analyzer::DataAnalyzer;

/// Score de cycle : 1 − |retard − cycle moyen| / cycle moyen. Maximum
/// quand le retard courant rejoint l'écart moyen entre apparitions.
/// Les numéros vus moins de deux fois sont exclus du classement et ne
/// reviennent que par la politique de remplissage.
pub struct CyclicStrategy;

impl Strategy for CyclicStrategy {
    fn name(&self) -> &'static str {
        "cyclic_pattern"
    }

    fn pick(&self, analyzer: &mut DataAnalyzer, ctx: &PickContext) -> Result<Vec<u8>> {
        let cycles = analyzer.group_cycle_states(ctx.analyzer_group)?;
        let scores: BTreeMap<u8, f64> = cycles
            .iter()
            .filter(|(&n, _)| n >= ctx.slot.range.0 && n <= ctx.slot.range.1)
            .map(|(&n, state)| {
                let deviation = (state.current_gap as f64 - state.mean_gap).abs();
                (n, 1.0 - deviation / state.mean_gap)
            })
            .collect();

        let mut selected = rank_desc(&scores, ctx.slot.count);
        fill_uniform(&mut selected, ctx.slot);
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::test_support::{assert_valid_pick, general_ctx, loaded_analyzer};
    use multiloto_core::game::GameConfig;
    use multiloto_core::models::DrawRecord;

    #[test]
    fn test_output_shape() {
        let mut analyzer = loaded_analyzer(30);
        let ctx = general_ctx(6);
        let pick = CyclicStrategy.pick(&mut analyzer, &ctx).unwrap();
        assert_valid_pick(&pick, &ctx);
    }

    #[test]
    fn test_number_nearest_its_cycle_ranked_first() {
        // Sur 9 tirages (dernier index 8) : le 1 sort aux index pairs
        // (cycle 2, retard 0, score 0), le 20 aux index impairs
        // (cycle 2, retard 1, score 0.5), les 30-34 à chaque tirage
        // (cycle 1, retard 0, score 0). Le mieux classé est le 20.
        let mut analyzer = DataAnalyzer::new();
        let records: Vec<DrawRecord> = (0..9)
            .map(|i| {
                let first = if i % 2 == 0 { 1 } else { 20 };
                DrawRecord::new(i, "2024-01-01", vec![first, 30, 31, 32, 33, 34])
            })
            .collect();
        analyzer
            .load(records, GameConfig::by_id("general").unwrap())
            .unwrap();

        let cycles = analyzer.group_cycle_states(0).unwrap();
        assert!((cycles[&1].mean_gap - 2.0).abs() < 1e-12);
        assert_eq!(cycles[&1].current_gap, 0);
        assert!((cycles[&20].mean_gap - 2.0).abs() < 1e-12);
        assert_eq!(cycles[&20].current_gap, 1);

        let ctx = general_ctx(1);
        let pick = CyclicStrategy.pick(&mut analyzer, &ctx).unwrap();
        assert_eq!(pick, vec![20]);
    }

    #[test]
    fn test_overdue_matching_cycle_beats_off_cycle_numbers() {
        // Après 10 tirages (dernier index 9), le 1 a un retard de 1
        // pour un cycle de 2 : score 0.5. Le 20 (retard 0, cycle 2)
        // et les constantes 30-34 (retard 0, cycle 1) plafonnent à 0.
        // Le top-5 : le 1, puis les égalités à 0 par valeur croissante.
        let mut analyzer = DataAnalyzer::new();
        let records: Vec<DrawRecord> = (0..10)
            .map(|i| {
                let first = if i % 2 == 0 { 1 } else { 20 };
                DrawRecord::new(i, "2024-01-01", vec![first, 30, 31, 32, 33, 34])
            })
            .collect();
        analyzer
            .load(records, GameConfig::by_id("general").unwrap())
            .unwrap();

        let ctx = general_ctx(5);
        let pick = CyclicStrategy.pick(&mut analyzer, &ctx).unwrap();
        assert_eq!(pick[0], 1);
        let mut sorted = pick.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 20, 30, 31, 32]);
    }
}
