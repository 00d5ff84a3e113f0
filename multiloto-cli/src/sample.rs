use chrono::{Days, Local};
use rand::seq::IndexedRandom;
use rand::Rng;

use multiloto_core::game::GameConfig;
use multiloto_core::models::DrawRecord;

/// Génère un historique synthétique valide : un tirage par jour en
/// remontant depuis la veille, chaque groupe tiré uniformément (sans
/// remise pour les jeux à numéros). Le plus ancien en premier.
pub fn generate_sample(game: &GameConfig, count: usize) -> Vec<DrawRecord> {
    let mut rng = rand::rng();
    let today = Local::now().date_naive();

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let age = (count - i) as u64;
        let date = today
            .checked_sub_days(Days::new(age))
            .unwrap_or(today)
            .format("%Y-%m-%d")
            .to_string();

        let mut numbers = Vec::with_capacity(game.number_count());
        for group in game.groups() {
            if group.distinct {
                let pool: Vec<u8> = (group.range.0..=group.range.1).collect();
                let mut picked: Vec<u8> =
                    pool.choose_multiple(&mut rng, group.count).copied().collect();
                picked.sort_unstable();
                numbers.extend(picked);
            } else {
                for _ in 0..group.count {
                    numbers.push(rng.random_range(group.range.0..=group.range.1));
                }
            }
        }
        records.push(DrawRecord::new(i, date, numbers));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_valid_history() {
        let game = GameConfig::by_id("super-lotto").unwrap();
        let records = generate_sample(&game, 50);
        assert_eq!(records.len(), 50);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.draw_index, i);
            assert!(game.validate_numbers(&record.numbers));
        }
    }

    #[test]
    fn test_sample_digit_game() {
        let game = GameConfig::by_id("pick3").unwrap();
        let records = generate_sample(&game, 20);
        for record in &records {
            assert_eq!(record.numbers.len(), 3);
            assert!(game.validate_numbers(&record.numbers));
        }
    }

    #[test]
    fn test_sample_dates_ascend() {
        let game = GameConfig::by_id("general").unwrap();
        let records = generate_sample(&game, 10);
        for pair in records.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }
}
