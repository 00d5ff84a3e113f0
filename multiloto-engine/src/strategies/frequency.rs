use multiloto_core::Result;

use super::{clamp_to_slot, counts_to_scores, fill_uniform, rank_desc, PickContext, Strategy};
use crate::analyzer::DataAnalyzer;

/// Score = nombre d'occurrences historiques ; sélection des `count`
/// meilleurs, égalités par valeur croissante.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn pick(&self, analyzer: &mut DataAnalyzer, ctx: &PickContext) -> Result<Vec<u8>> {
        let counts = analyzer.group_frequency(ctx.analyzer_group)?;
        let scores = clamp_to_slot(counts_to_scores(&counts), ctx.slot);

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
        let pick = FrequencyStrategy.pick(&mut analyzer, &ctx).unwrap();
        assert_valid_pick(&pick, &ctx);
    }

    #[test]
    fn test_omnipresent_number_ranked_first() {
        // Le 7 sort à chaque tirage : il doit être le premier choix.
        let mut analyzer = DataAnalyzer::new();
        let records: Vec<DrawRecord> = (0..100)
            .map(|i| {
                let base = (i % 7) as u8 * 6 + 7;
                DrawRecord::new(
                    i,
                    "2024-01-01",
                    vec![7, base + 1, base + 2, base + 3, base + 4, base + 5],
                )
            })
            .collect();
        analyzer
            .load(records, GameConfig::by_id("general").unwrap())
            .unwrap();

        let ctx = general_ctx(6);
        let pick = FrequencyStrategy.pick(&mut analyzer, &ctx).unwrap();
        assert_eq!(pick[0], 7);
    }

    #[test]
    fn test_single_record_still_complete() {
        let mut analyzer = loaded_analyzer(1);
        let ctx = general_ctx(6);
        let pick = FrequencyStrategy.pick(&mut analyzer, &ctx).unwrap();
        assert_valid_pick(&pick, &ctx);
    }
}
