//! Deterministic battle stats for circle member cards.
//!
//! Member cards are created without battle stats. Stats are derived from
//! the card id and the member's grade, so the same card always fights with
//! the same numbers no matter which client builds the deck.

use crate::core::GameRng;

/// Root seed of the per-card stat streams. Changing it rerolls every card.
const STATS_SEED: u64 = 0x00C1_4C1E;

const BASE_HP: u32 = 500;
const HP_PER_GRADE: u32 = 50;
const HP_VARIANCE: u32 = 100;

const BASE_ATTACK: u32 = 100;
const ATTACK_PER_GRADE: u32 = 20;
const ATTACK_VARIANCE: u32 = 50;

/// Flavor text attached to generated stats.
pub const DEFAULT_FLAVOR: &str = "Still can't get out of the futon today.";

/// Generated battle stats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleStats {
    pub max_hp: u32,
    pub attack: u32,
    pub flavor: &'static str,
}

/// Derive stats from a card id and grade.
///
/// `max_hp` lies in `500 + 50*grade + [0, 100)` and `attack` in
/// `100 + 20*grade + [0, 50)`.
///
/// ```
/// use circle_battle::cards::generate_stats;
///
/// assert_eq!(generate_stats("card-42", 2), generate_stats("card-42", 2));
/// ```
#[must_use]
pub fn generate_stats(card_id: &str, grade: u32) -> BattleStats {
    let mut rng = GameRng::new(STATS_SEED).for_context(card_id);

    let max_hp = BASE_HP + grade * HP_PER_GRADE + rng.gen_range(0..HP_VARIANCE);
    let attack = BASE_ATTACK + grade * ATTACK_PER_GRADE + rng.gen_range(0..ATTACK_VARIANCE);

    BattleStats {
        max_hp,
        attack,
        flavor: DEFAULT_FLAVOR,
    }
}
