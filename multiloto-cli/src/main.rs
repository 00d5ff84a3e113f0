mod display;
mod import;
mod sample;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use multiloto_core::game::{builtin_games, GameConfig};
use multiloto_engine::{EngineConfig, PredictionEngine};

use crate::display::{
    display_ensemble, display_games, display_import_summary, display_prediction, display_stats,
};

#[derive(Parser)]
#[command(name = "multiloto", about = "Analyse et prédiction de tirages de loterie")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lister les jeux supportés
    Games,

    /// Générer un historique synthétique au format CSV
    Sample {
        /// Identifiant du jeu (voir : multiloto games)
        #[arg(short, long, default_value = "general")]
        game: String,

        /// Nombre de tirages à générer
        #[arg(short, long, default_value = "100")]
        count: usize,

        /// Fichier de sortie
        #[arg(short, long, default_value = "sample.csv")]
        output: PathBuf,
    },

    /// Afficher les statistiques d'un historique
    Stats {
        /// Fichier CSV d'historique
        #[arg(short, long)]
        file: PathBuf,

        /// Identifiant du jeu
        #[arg(short, long, default_value = "general")]
        game: String,
    },

    /// Prédire le prochain tirage avec une stratégie
    Predict {
        /// Fichier CSV d'historique
        #[arg(short, long)]
        file: PathBuf,

        /// Identifiant du jeu
        #[arg(short, long, default_value = "general")]
        game: String,

        /// Stratégie (frequency, hot_cold, pattern, weighted_frequency,
        /// gap_analysis, moving_average, cyclic_pattern)
        #[arg(short, long, default_value = "frequency")]
        algorithm: String,

        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },

    /// Exécuter toutes les stratégies et voter
    PredictAll {
        /// Fichier CSV d'historique
        #[arg(short, long)]
        file: PathBuf,

        /// Identifiant du jeu
        #[arg(short, long, default_value = "general")]
        game: String,

        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Games => {
            display_games(&builtin_games());
            Ok(())
        }
        Command::Sample { game, count, output } => cmd_sample(&game, count, &output),
        Command::Stats { file, game } => cmd_stats(&file, &game),
        Command::Predict { file, game, algorithm, json } => {
            cmd_predict(&file, &game, &algorithm, json)
        }
        Command::PredictAll { file, game, json } => cmd_predict_all(&file, &game, json),
    }
}

fn game_by_id(id: &str) -> Result<GameConfig> {
    match GameConfig::by_id(id) {
        Some(game) => Ok(game),
        None => bail!("Jeu inconnu : {} (voir : multiloto games)", id),
    }
}

fn cmd_sample(game_id: &str, count: usize, output: &PathBuf) -> Result<()> {
    if count == 0 {
        bail!("Le nombre de tirages doit valoir au moins 1");
    }
    let game = game_by_id(game_id)?;
    let records = sample::generate_sample(&game, count);
    import::export_csv(output, &records)?;
    println!("{} tirages {} écrits dans {}", count, game.name, output.display());
    Ok(())
}

fn load_engine(file: &PathBuf, game: &GameConfig, quiet: bool) -> Result<PredictionEngine> {
    let result = import::import_csv(file, game)?;
    if !quiet {
        display_import_summary(&result);
    }
    if result.records.is_empty() {
        bail!("Aucun tirage valide dans {}", file.display());
    }

    let mut engine = PredictionEngine::new(EngineConfig::default());
    engine
        .load(result.records, game.clone())
        .context("Chargement de l'historique")?;
    Ok(engine)
}

fn cmd_stats(file: &PathBuf, game_id: &str) -> Result<()> {
    let game = game_by_id(game_id)?;
    let mut engine = load_engine(file, &game, false)?;

    let stats = engine.get_statistics_summary()?;
    let gaps = engine.analyzer_mut().group_gap_states(0)?;
    display_stats(&stats, &gaps, &game);
    Ok(())
}

fn cmd_predict(file: &PathBuf, game_id: &str, algorithm: &str, json: bool) -> Result<()> {
    let game = game_by_id(game_id)?;
    let mut engine = load_engine(file, &game, json)?;

    let threshold = engine.config().confidence_threshold;
    let result = engine.predict(algorithm, game.number_count(), &game.number_ranges())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_prediction(&result, &game, threshold);
    }
    Ok(())
}

fn cmd_predict_all(file: &PathBuf, game_id: &str, json: bool) -> Result<()> {
    let game = game_by_id(game_id)?;
    let mut engine = load_engine(file, &game, json)?;

    let threshold = engine.config().confidence_threshold;
    let result = engine.predict_ensemble(game.number_count(), &game.number_ranges(), None)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_ensemble(&result, &game, threshold);
    }
    Ok(())
}
