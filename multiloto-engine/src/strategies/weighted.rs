use multiloto_core::Result;

use super::{clamp_to_slot, fill_uniform, rank_desc, PickContext, Strategy};
use crate::analyzer::DataAnalyzer;

/// Fréquence à décroissance exponentielle : les tirages récents pèsent
/// plus que les anciens (constante de temps : 30 % de la série).
pub struct WeightedFrequencyStrategy;

impl Strategy for WeightedFrequencyStrategy {
    fn name(&self) -> &'static str {
        "weighted_frequency"
    }

    fn pick(&self, analyzer: &mut DataAnalyzer, ctx: &PickContext) -> Result<Vec<u8>> {
        let scores = analyzer.group_recency_scores(ctx.analyzer_group)?;
        let scores = clamp_to_slot(scores, ctx.slot);

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
        let pick = WeightedFrequencyStrategy.pick(&mut analyzer, &ctx).unwrap();
        assert_valid_pick(&pick, &ctx);
    }

    #[test]
    fn test_recent_numbers_beat_ancient_at_equal_counts() {
        // 1-6 sortent dans la première moitié, 7-12 dans la seconde,
        // à nombre d'occurrences égal : le récent doit gagner.
        let mut analyzer = DataAnalyzer::new();
        let records: Vec<DrawRecord> = (0..40)
            .map(|i| {
                let numbers = if i < 20 {
                    vec![1, 2, 3, 4, 5, 6]
                } else {
                    vec![7, 8, 9, 10, 11, 12]
                };
                DrawRecord::new(i, "2024-01-01", numbers)
            })
            .collect();
        analyzer
            .load(records, GameConfig::by_id("general").unwrap())
            .unwrap();

        let ctx = general_ctx(6);
        let pick = WeightedFrequencyStrategy.pick(&mut analyzer, &ctx).unwrap();
        let mut sorted = pick.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![7, 8, 9, 10, 11, 12]);
    }
}
