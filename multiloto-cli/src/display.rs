use std::collections::BTreeMap;

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use multiloto_core::game::GameConfig;
use multiloto_core::models::{EnsembleResult, PredictionResult};
use multiloto_engine::analyzer::{GapState, StatisticsSummary};

use crate::import::ImportResult;

pub fn display_games(games: &[GameConfig]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Nom", "Catégorie", "Format"]);

    for game in games {
        let format = game
            .groups()
            .iter()
            .map(|g| {
                if g.distinct {
                    format!("{} parmi {}-{}", g.count, g.range.0, g.range.1)
                } else {
                    format!("{} chiffres {}-{}", g.count, g.range.0, g.range.1)
                }
            })
            .collect::<Vec<_>>()
            .join(" + ");
        table.add_row(vec![&game.id, &game.name, &game.category.to_string(), &format]);
    }
    println!("{table}");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Import terminé :");
    println!("  Lignes lues : {}", result.total_lines);
    println!("  Tirages     : {}", result.records.len());
    if result.errors > 0 {
        println!("  Erreurs     : {}", result.errors);
    }
}

pub fn display_stats(
    stats: &StatisticsSummary,
    gaps: &BTreeMap<u8, GapState>,
    game: &GameConfig,
) {
    println!("\n📊 {} — statistiques sur {} tirages\n", game.name, stats.total_draws);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence", "Retard", "Statut"]);

    for &(n, count) in &stats.most_common {
        table.add_row(stat_row(n, count, gaps, stats));
    }
    println!("── Les plus fréquents ──");
    println!("{table}");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence", "Retard", "Statut"]);

    for &(n, count) in &stats.least_common {
        table.add_row(stat_row(n, count, gaps, stats));
    }
    println!("\n── Les moins fréquents ──");
    println!("{table}");

    let p = &stats.pattern;
    println!("\n── Motifs (groupe principal) ──");
    println!("  Paires consécutives : {}", p.consecutive_run_count);
    println!("  Ratio impairs       : {:.2}", p.odd_even_ratio);
    println!("  Ratio hauts         : {:.2}", p.high_low_ratio);
    println!("  Sommes              : {} à {}", p.sum_range.0, p.sum_range.1);
}

fn stat_row(
    n: u8,
    count: u32,
    gaps: &BTreeMap<u8, GapState>,
    stats: &StatisticsSummary,
) -> Vec<Cell> {
    let gap = gaps.get(&n).map(|g| g.gap.to_string()).unwrap_or_else(|| "—".to_string());
    let (status, color) = if stats.hot_numbers.contains(&n) {
        ("chaud", Color::Green)
    } else if stats.cold_numbers.contains(&n) {
        ("froid", Color::Red)
    } else {
        ("normal", Color::White)
    };
    vec![
        Cell::new(format!("{:2}", n)),
        Cell::new(count.to_string()),
        Cell::new(gap),
        Cell::new(status).fg(color),
    ]
}

pub fn display_prediction(result: &PredictionResult, game: &GameConfig, threshold: f64) {
    println!("\n🎯 Prédiction ({})\n", result.algorithm);
    println!("  {}", game.format_prediction(&result.numbers));
    println!("{}", confidence_line(result.confidence, threshold));
}

pub fn display_ensemble(result: &EnsembleResult, game: &GameConfig, threshold: f64) {
    println!("\n🎲 Prédictions par algorithme\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Algorithme", "Numéros"]);

    for (name, prediction) in &result.per_algorithm {
        table.add_row(vec![name.clone(), game.format_prediction(&prediction.numbers)]);
    }
    println!("{table}");

    println!("\n🏆 Recommandation du vote ({} tirages analysés)", result.data_points_used);
    println!("  {}", game.format_prediction(&result.recommended));
    println!("{}", confidence_line(result.confidence, threshold));
}

/// Ligne de confiance : sous le seuil configuré, le résultat est marqué
/// indicatif, jamais rejeté.
fn confidence_line(confidence: f64, threshold: f64) -> String {
    if confidence < threshold {
        format!(
            "  Confiance : {:.0} % ⚠ historique court, résultat indicatif",
            confidence * 100.0
        )
    } else {
        format!("  Confiance : {:.0} %", confidence * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_line_flags_below_threshold() {
        assert!(confidence_line(0.5, 0.6).contains("indicatif"));
        assert!(!confidence_line(0.6, 0.6).contains("indicatif"));
        assert!(confidence_line(1.0, 0.6).contains("100 %"));
    }
}
