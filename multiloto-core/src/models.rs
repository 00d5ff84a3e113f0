use std::collections::BTreeMap;

use serde::Serialize;

/// Un tirage historique. `draw_index` est la position chronologique dans
/// l'ordre de chargement (0 = le plus ancien) ; c'est l'unité de temps des
/// calculs de retard et de cycle, pas la date calendaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    pub draw_index: usize,
    pub date: String,
    /// Numéros principaux suivis des bonus (jeux à numéros), ou séquence
    /// de chiffres positionnelle (jeux à chiffres).
    pub numbers: Vec<u8>,
}

impl DrawRecord {
    pub fn new(draw_index: usize, date: impl Into<String>, numbers: Vec<u8>) -> Self {
        Self { draw_index, date: date.into(), numbers }
    }
}

/// Prédiction d'un algorithme : triée croissante pour les jeux à numéros,
/// positionnelle pour les jeux à chiffres.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub algorithm: String,
    pub numbers: Vec<u8>,
    /// Rampe linéaire saturante sur la taille de l'historique, dans [0,1].
    /// Signal de suffisance de données, pas une probabilité.
    pub confidence: f64,
}

/// Résultat du vote d'ensemble sur toutes les stratégies configurées.
#[derive(Debug, Clone, Serialize)]
pub struct EnsembleResult {
    pub per_algorithm: BTreeMap<String, PredictionResult>,
    pub recommended: Vec<u8>,
    pub confidence: f64,
    pub data_points_used: usize,
    pub algorithms_used: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_record_new() {
        let r = DrawRecord::new(3, "2024-01-05", vec![1, 2, 3]);
        assert_eq!(r.draw_index, 3);
        assert_eq!(r.date, "2024-01-05");
        assert_eq!(r.numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_prediction_result_serializes() {
        let p = PredictionResult {
            algorithm: "frequency".into(),
            numbers: vec![1, 7, 12],
            confidence: 0.4,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"frequency\""));
        assert!(json.contains("0.4"));
    }
}
