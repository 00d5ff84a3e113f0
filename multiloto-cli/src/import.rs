use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::warn;

use multiloto_core::game::GameConfig;
use multiloto_core::models::DrawRecord;

/// Lit un historique de tirages : une ligne par tirage, champs séparés
/// par `;`, date en tête puis un numéro par champ. Les lignes
/// invalides sont comptées et signalées, jamais insérées.
pub struct ImportResult {
    pub records: Vec<DrawRecord>,
    pub total_lines: u32,
    pub errors: u32,
}

pub fn import_csv(path: &Path, game: &GameConfig) -> Result<ImportResult> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;

    let mut result = ImportResult {
        records: Vec::new(),
        total_lines: 0,
        errors: 0,
    };

    for record_result in reader.records() {
        result.total_lines += 1;
        match record_result {
            Ok(record) => match parse_record(&record, game, result.records.len()) {
                Ok(draw) => result.records.push(draw),
                Err(e) => {
                    warn!(ligne = result.total_lines, "erreur de parsing : {}", e);
                    result.errors += 1;
                }
            },
            Err(e) => {
                warn!(ligne = result.total_lines, "erreur de lecture : {}", e);
                result.errors += 1;
            }
        }
    }

    Ok(result)
}

fn parse_record(
    record: &csv::StringRecord,
    game: &GameConfig,
    index: usize,
) -> Result<DrawRecord> {
    let date = record
        .get(0)
        .map(|s| s.trim().to_string())
        .context("Champ date manquant")?;

    let expected = game.number_count();
    let mut numbers = Vec::with_capacity(expected);
    for field in record.iter().skip(1) {
        let field = field.trim();
        if field.is_empty() {
            continue;
        }
        let n = field
            .parse::<u8>()
            .with_context(|| format!("Impossible de parser le numéro '{}'", field))?;
        numbers.push(n);
    }

    if numbers.len() != expected {
        bail!(
            "{} numéros lus, {} attendus pour {}",
            numbers.len(),
            expected,
            game.name
        );
    }
    if !game.validate_numbers(&numbers) {
        bail!("Tirage invalide à la date {} : {:?}", date, numbers);
    }

    Ok(DrawRecord::new(index, date, numbers))
}

/// Écrit l'historique dans le format relu par `import_csv`.
pub fn export_csv(path: &Path, records: &[DrawRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .with_context(|| format!("Impossible de créer {:?}", path))?;

    let width = records.first().map(|r| r.numbers.len()).unwrap_or(0);
    let mut header = vec!["date".to_string()];
    for i in 1..=width {
        header.push(format!("n{}", i));
    }
    writer.write_record(&header)?;

    for record in records {
        let mut row = vec![record.date.clone()];
        row.extend(record.numbers.iter().map(|n| n.to_string()));
        writer.write_record(&row)?;
    }
    writer.flush().context("Échec de l'écriture CSV")?;
    Ok(())
}
