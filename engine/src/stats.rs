use crate::{Ability, Dice, Stats};

/// One 4d6-drop-lowest roll. `dice` is sorted ascending, so `dice[0]` is the
/// dropped die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityRoll {
    pub ability: Ability,
    pub dice: [u8; 4],
    pub dropped: u8,
    pub total: i32,
}

impl AbilityRoll {
    /// `Rolling STR: [2, 3, 5, 6] → drop 2 → 14`
    pub fn describe(&self) -> String {
        let joined = self
            .dice
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Rolling {}: [{}] → drop {} → {}",
            self.ability, joined, self.dropped, self.total
        )
    }
}

pub fn roll_ability(dice: &mut Dice, ability: Ability) -> AbilityRoll {
    let mut rolled = [dice.d6(), dice.d6(), dice.d6(), dice.d6()];
    rolled.sort_unstable();
    let total = rolled[1..].iter().map(|&d| i32::from(d)).sum();
    AbilityRoll {
        ability,
        dice: rolled,
        dropped: rolled[0],
        total,
    }
}

/// Roll all six abilities in order, handing each result to `report` before
/// the next ability is rolled.
pub fn roll_stats(dice: &mut Dice, mut report: impl FnMut(&AbilityRoll)) -> Stats {
    let mut stats = Stats::new();
    for ability in Ability::ALL {
        let roll = roll_ability(dice, ability);
        report(&roll);
        stats.insert(ability, roll.total);
    }
    stats
}
