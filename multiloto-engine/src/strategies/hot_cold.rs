use rand::seq::IndexedRandom;

use multiloto_core::Result;

use super::{fill_uniform, PickContext, Strategy};
use crate::analyzer::DataAnalyzer;

/// Tire uniformément dans l'ensemble des numéros chauds. Les froids sont
/// exclus de la sélection, pas seulement dépréciés ; le remplissage
/// uniforme ne s'applique que si le bassin chaud est trop petit.
pub struct HotColdStrategy {
    hot_pct: f64,
    cold_pct: f64,
}

impl HotColdStrategy {
    pub fn new(hot_pct: f64, cold_pct: f64) -> Self {
        Self { hot_pct, cold_pct }
    }
}

impl Strategy for HotColdStrategy {
    fn name(&self) -> &'static str {
        "hot_cold"
    }

    fn pick(&self, analyzer: &mut DataAnalyzer, ctx: &PickContext) -> Result<Vec<u8>> {
        let hc = analyzer.group_hot_cold(ctx.analyzer_group, self.hot_pct, self.cold_pct)?;
        let pool: Vec<u8> = hc
            .hot
            .into_iter()
            .filter(|n| *n >= ctx.slot.range.0 && *n <= ctx.slot.range.1)
            .collect();

        let mut rng = rand::rng();
        let take = ctx.slot.count.min(pool.len());
        let mut selected: Vec<u8> = pool.choose_multiple(&mut rng, take).copied().collect();
        fill_uniform(&mut selected, ctx.slot);
        Ok(selected)
    }
}
