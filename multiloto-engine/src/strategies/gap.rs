use rand::seq::IndexedRandom;

use multiloto_core::Result;

use super::{fill_uniform, rank_desc, PickContext, Strategy};
use crate::analyzer::DataAnalyzer;

/// Privilégie les numéros en retard : les candidats sont les 3×count
/// plus gros retards, puis `count` d'entre eux sont tirés uniformément.
/// La sous-sélection aléatoire évite une sortie dégénérée déterministe.
pub struct GapStrategy;

/// Bassin des numéros les plus en retard, par retard décroissant puis
/// valeur croissante. Un numéro jamais vu porte le retard maximal.
pub(crate) fn overdue_pool(
    analyzer: &mut DataAnalyzer,
    ctx: &PickContext,
) -> Result<Vec<u8>> {
    let gaps = analyzer.group_gap_states(ctx.analyzer_group)?;
    let scores = gaps
        .iter()
        .filter(|(&n, _)| n >= ctx.slot.range.0 && n <= ctx.slot.range.1)
        .map(|(&n, state)| (n, state.gap as f64))
        .collect();
    Ok(rank_desc(&scores, ctx.slot.count * 3))
}

impl Strategy for GapStrategy {
    fn name(&self) -> &'static str {
        "gap_analysis"
    }

    fn pick(&self, analyzer: &mut DataAnalyzer, ctx: &PickContext) -> Result<Vec<u8>> {
        let pool = overdue_pool(analyzer, ctx)?;

        let mut rng = rand::rng();
        let take = ctx.slot.count.min(pool.len());
        let mut selected: Vec<u8> = pool.choose_multiple(&mut rng, take).copied().collect();
        fill_uniform(&mut selected, ctx.slot);
        Ok(selected)
    }
}
