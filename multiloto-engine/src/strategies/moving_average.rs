use multiloto_core::Result;

use super::{clamp_to_slot, counts_to_scores, fill_uniform, rank_desc, PickContext, Strategy};
use crate::analyzer::DataAnalyzer;

/// Fréquence restreinte aux `window` tirages les plus récents. Si la
/// fenêtre dépasse l'historique, la série complète est utilisée et
/// l'analyseur émet un avertissement — jamais un échec dur.
pub struct MovingAverageStrategy {
    window: usize,
}

impl MovingAverageStrategy {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Strategy for MovingAverageStrategy {
    fn name(&self) -> &'static str {
        "moving_average"
    }

    fn pick(&self, analyzer: &mut DataAnalyzer, ctx: &PickContext) -> Result<Vec<u8>> {
        let (counts, _truncated) =
            analyzer.group_window_frequency(ctx.analyzer_group, self.window)?;
        let scores = clamp_to_slot(counts_to_scores(&counts), ctx.slot);

        let mut selected = rank_desc(&scores, ctx.slot.count);
        fill_uniform(&mut selected, ctx.slot);
        Ok(selected)
    }
}
