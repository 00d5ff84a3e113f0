use thiserror::Error;

/// Taxonomie d'erreurs du cœur : configuration malformée d'un côté,
/// paramètre d'appel invalide de l'autre. Le manque de données n'est
/// jamais une erreur — il est absorbé par le score de confiance.
#[derive(Debug, Error)]
pub enum LotoError {
    /// Configuration de jeu malformée (comptes nuls, bornes inversées).
    #[error("configuration invalide : {0}")]
    Config(String),

    /// Paramètre d'appel invalide, rejeté immédiatement à la frontière
    /// publique, jamais retenté en interne.
    #[error("paramètre invalide : {0}")]
    Param(String),
}

pub type Result<T> = std::result::Result<T, LotoError>;
