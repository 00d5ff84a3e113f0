use serde::Serialize;

use crate::error::{LotoError, Result};

/// Famille de loterie, reprise de la nomenclature des jeux chinois.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sport,
    Welfare,
    General,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Sport => write!(f, "sport"),
            Category::Welfare => write!(f, "social"),
            Category::General => write!(f, "générique"),
        }
    }
}

/// Forme du jeu : soit des numéros tirés sans remise (principaux + bonus
/// optionnels), soit une séquence de chiffres positionnelle où les
/// répétitions sont normales. Exactement une des deux formes par jeu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameFormat {
    Numbers {
        main_count: usize,
        main_range: (u8, u8),
        bonus_count: usize,
        bonus_range: (u8, u8),
    },
    Digits {
        count: usize,
        range: (u8, u8),
    },
}

/// Un groupe positionnel de la grille : `count` valeurs dans `range`,
/// sans doublon si `distinct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGroup {
    pub count: usize,
    pub range: (u8, u8),
    pub distinct: bool,
}

impl SlotGroup {
    pub fn domain_size(&self) -> usize {
        (self.range.1 - self.range.0) as usize + 1
    }
}

/// Description statique d'un jeu : domaine des numéros, validation et
/// formatage d'affichage. Aucun effet de bord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub format: GameFormat,
}

impl GameConfig {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        format: GameFormat,
    ) -> Result<Self> {
        match &format {
            GameFormat::Numbers { main_count, main_range, bonus_count, bonus_range } => {
                if *main_count == 0 {
                    return Err(LotoError::Config("compte de numéros principaux nul".into()));
                }
                check_range(*main_range)?;
                if *bonus_count > 0 {
                    check_range(*bonus_range)?;
                }
                if *main_count > range_size(*main_range) {
                    return Err(LotoError::Config(format!(
                        "{} numéros demandés dans un domaine de {}",
                        main_count,
                        range_size(*main_range)
                    )));
                }
                if *bonus_count > 0 && *bonus_count > range_size(*bonus_range) {
                    return Err(LotoError::Config(format!(
                        "{} bonus demandés dans un domaine de {}",
                        bonus_count,
                        range_size(*bonus_range)
                    )));
                }
            }
            GameFormat::Digits { count, range } => {
                if *count == 0 {
                    return Err(LotoError::Config("compte de chiffres nul".into()));
                }
                check_range(*range)?;
            }
        }
        Ok(Self { id: id.into(), name: name.into(), category, format })
    }

    pub fn is_digit_game(&self) -> bool {
        matches!(self.format, GameFormat::Digits { .. })
    }

    /// Nombre total de valeurs qu'une prédiction doit contenir.
    pub fn number_count(&self) -> usize {
        match &self.format {
            GameFormat::Numbers { main_count, bonus_count, .. } => main_count + bonus_count,
            GameFormat::Digits { count, .. } => *count,
        }
    }

    /// Bornes (min, max) alignées positionnellement avec les emplacements.
    pub fn number_ranges(&self) -> Vec<(u8, u8)> {
        let mut ranges = Vec::with_capacity(self.number_count());
        for group in self.groups() {
            for _ in 0..group.count {
                ranges.push(group.range);
            }
        }
        ranges
    }

    /// Décomposition en groupes positionnels : principaux puis bonus pour
    /// les jeux à numéros, un seul groupe pour les jeux à chiffres.
    pub fn groups(&self) -> Vec<SlotGroup> {
        match &self.format {
            GameFormat::Numbers { main_count, main_range, bonus_count, bonus_range } => {
                let mut groups = vec![SlotGroup {
                    count: *main_count,
                    range: *main_range,
                    distinct: true,
                }];
                if *bonus_count > 0 {
                    groups.push(SlotGroup {
                        count: *bonus_count,
                        range: *bonus_range,
                        distinct: true,
                    });
                }
                groups
            }
            GameFormat::Digits { count, range } => {
                vec![SlotGroup { count: *count, range: *range, distinct: false }]
            }
        }
    }

    /// Vérifie compte, bornes et unicité intra-groupe. Les répétitions
    /// entre groupes sont normales ; les jeux à chiffres les permettent
    /// partout.
    pub fn validate_numbers(&self, numbers: &[u8]) -> bool {
        if numbers.len() != self.number_count() {
            return false;
        }
        let mut offset = 0;
        for group in self.groups() {
            let slice = &numbers[offset..offset + group.count];
            for &n in slice {
                if n < group.range.0 || n > group.range.1 {
                    return false;
                }
            }
            if group.distinct {
                for i in 0..slice.len() {
                    for j in (i + 1)..slice.len() {
                        if slice[i] == slice[j] {
                            return false;
                        }
                    }
                }
            }
            offset += group.count;
        }
        true
    }

    /// Rendu lisible : groupes principaux/bonus pour les jeux à numéros,
    /// chaîne de chiffres pour les jeux à chiffres.
    pub fn format_prediction(&self, numbers: &[u8]) -> String {
        match &self.format {
            GameFormat::Digits { .. } => {
                numbers.iter().map(|d| d.to_string()).collect::<String>()
            }
            GameFormat::Numbers { main_count, bonus_count, .. } => {
                let main: Vec<String> = numbers
                    .iter()
                    .take(*main_count)
                    .map(|n| format!("{:02}", n))
                    .collect();
                if *bonus_count > 0 && numbers.len() >= main_count + bonus_count {
                    let bonus: Vec<String> = numbers
                        .iter()
                        .skip(*main_count)
                        .take(*bonus_count)
                        .map(|n| format!("{:02}", n))
                        .collect();
                    format!("{} + {}", main.join(" "), bonus.join(" "))
                } else {
                    main.join(" ")
                }
            }
        }
    }

    pub fn by_id(id: &str) -> Option<GameConfig> {
        builtin_games().into_iter().find(|g| g.id == id)
    }
}

fn check_range(range: (u8, u8)) -> Result<()> {
    if range.0 > range.1 {
        return Err(LotoError::Config(format!(
            "bornes inversées : ({}, {})",
            range.0, range.1
        )));
    }
    Ok(())
}

fn range_size(range: (u8, u8)) -> usize {
    (range.1 - range.0) as usize + 1
}

/// Registre des jeux intégrés : loteries sportives et sociales chinoises,
/// plus un jeu générique 6/49.
pub fn builtin_games() -> Vec<GameConfig> {
    let games = [
        (
            "super-lotto",
            "Super Lotto (大乐透)",
            Category::Sport,
            GameFormat::Numbers {
                main_count: 5,
                main_range: (1, 35),
                bonus_count: 2,
                bonus_range: (1, 12),
            },
        ),
        (
            "seven-star",
            "7-Star (七星彩)",
            Category::Sport,
            GameFormat::Digits { count: 7, range: (0, 9) },
        ),
        (
            "pick3",
            "Pick 3 (排列三)",
            Category::Sport,
            GameFormat::Digits { count: 3, range: (0, 9) },
        ),
        (
            "pick5",
            "Pick 5 (排列五)",
            Category::Sport,
            GameFormat::Digits { count: 5, range: (0, 9) },
        ),
        (
            "double-color",
            "Double Color Ball (双色球)",
            Category::Welfare,
            GameFormat::Numbers {
                main_count: 6,
                main_range: (1, 33),
                bonus_count: 1,
                bonus_range: (1, 16),
            },
        ),
        (
            "happy8",
            "Happy 8 (快乐8)",
            Category::Welfare,
            GameFormat::Numbers {
                main_count: 10,
                main_range: (1, 80),
                bonus_count: 0,
                bonus_range: (0, 0),
            },
        ),
        (
            "seven-happy",
            "7 Happy (七乐彩)",
            Category::Welfare,
            GameFormat::Numbers {
                main_count: 7,
                main_range: (1, 30),
                bonus_count: 1,
                bonus_range: (1, 30),
            },
        ),
        (
            "welfare-3d",
            "Welfare 3D (福彩3D)",
            Category::Welfare,
            GameFormat::Digits { count: 3, range: (0, 9) },
        ),
        (
            "general",
            "Loterie générique (通用)",
            Category::General,
            GameFormat::Numbers {
                main_count: 6,
                main_range: (1, 49),
                bonus_count: 0,
                bonus_range: (0, 0),
            },
        ),
    ];

    games
        .into_iter()
        .map(|(id, name, category, format)| {
            // Les définitions intégrées sont vérifiées par les tests.
            GameConfig::new(id, name, category, format).expect("jeu intégré invalide")
        })
        .collect()
}
