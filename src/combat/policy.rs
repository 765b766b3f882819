//! Per-kind turn policies
//!
//! Weighted random choices, rolled fresh every turn. There is no memory
//! between turns other than the actor's status effects.

use super::abilities;
use super::actor::CombatActor;
use super::damage::AttackFormula;
use super::dice::Dice;
use super::outcome::ActionOutcome;
use super::target::Target;

pub const HUMAN_ITEM_CHANCE: f64 = 0.30;

pub const WARRIOR_BATTLE_CRY_CHANCE: f64 = 0.30;
/// Heavy charge when a 0..=100 roll lands below this
pub const WARRIOR_CHARGE_THRESHOLD: i32 = 40;

pub const MAGE_FIREBALL_CHANCE: f64 = 0.60;

/// 30% drink a potion, otherwise attack
pub fn human_turn(
    actor: &mut CombatActor,
    target: &mut impl Target,
    dice: &mut impl Dice,
    formula: &impl AttackFormula,
) -> ActionOutcome {
    if dice.chance(HUMAN_ITEM_CHANCE) {
        abilities::use_item(actor, dice)
    } else {
        abilities::basic_attack(actor, target, dice, formula)
    }
}

/// 30% battle cry; otherwise heavy charge or a basic attack
pub fn warrior_turn(
    actor: &mut CombatActor,
    target: &mut impl Target,
    dice: &mut impl Dice,
    formula: &impl AttackFormula,
) -> ActionOutcome {
    if dice.chance(WARRIOR_BATTLE_CRY_CHANCE) {
        return abilities::battle_cry(actor);
    }
    if dice.range_inclusive(0, 100) < WARRIOR_CHARGE_THRESHOLD {
        abilities::heavy_charge(actor, target, dice, formula)
    } else {
        abilities::basic_attack(actor, target, dice, formula)
    }
}

/// 60% fireball, 40% energy ball
pub fn mage_turn(target: &mut impl Target, dice: &mut impl Dice) -> ActionOutcome {
    if dice.chance(MAGE_FIREBALL_CHANCE) {
        abilities::fireball(target, dice)
    } else {
        abilities::energy_ball(target, dice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::dice::{RngDice, ScriptedDice};
    use crate::combat::outcome::Action;
    use crate::combat::STAGGER;
    use crate::entities::{spawn_enemy, EnemyKind, Player};
    use crate::progression::WorldContext;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn standard(strength: i32, bonus: i32) -> i32 {
        strength + bonus
    }

    #[test]
    fn test_human_branches() {
        let world = WorldContext::default();
        let mut human = spawn_enemy(EnemyKind::Human, 1, &world);
        let mut player = Player::new("Hero", 200, 5, 0);

        let mut dice = ScriptedDice::new(vec![0.29, 0.0]);
        let outcome = human_turn(&mut human, &mut player, &mut dice, &standard);
        assert_eq!(outcome.action(), Some(Action::UseItem));

        let mut dice = ScriptedDice::new(vec![0.3, 0.5]);
        let outcome = human_turn(&mut human, &mut player, &mut dice, &standard);
        assert_eq!(outcome.action(), Some(Action::BasicAttack));
        assert_eq!(player.hp, 200 - human.stats.strength);
    }

    #[test]
    fn test_warrior_branches() {
        let world = WorldContext::default();
        let mut warrior = spawn_enemy(EnemyKind::Warrior, 1, &world);
        let mut player = Player::new("Hero", 500, 5, 0);

        let mut dice = ScriptedDice::new(vec![0.1]);
        let outcome = warrior_turn(&mut warrior, &mut player, &mut dice, &standard);
        assert_eq!(outcome.action(), Some(Action::BattleCry));

        // 0.3 * 101 = 30.3 -> 30 < 40: heavy charge, hit, no stagger
        let mut dice = ScriptedDice::new(vec![0.5, 0.3, 0.5, 0.9]);
        let outcome = warrior_turn(&mut warrior, &mut player, &mut dice, &standard);
        assert_eq!(outcome.action(), Some(Action::HeavyCharge));

        // 0.4 * 101 = 40.4 -> 40: basic attack
        let mut dice = ScriptedDice::new(vec![0.5, 0.4, 0.5]);
        let outcome = warrior_turn(&mut warrior, &mut player, &mut dice, &standard);
        assert_eq!(outcome.action(), Some(Action::BasicAttack));
    }

    #[test]
    fn test_warrior_forced_stagger() {
        let world = WorldContext::default();
        let mut warrior = spawn_enemy(EnemyKind::Warrior, 1, &world);
        let mut player = Player::new("Hero", 500, 5, 0);
        // no battle cry, charge, hit, stagger
        let mut dice = ScriptedDice::new(vec![0.9, 0.0, 0.9, 0.0]);

        let outcome = warrior_turn(&mut warrior, &mut player, &mut dice, &standard);
        assert_eq!(outcome.action(), Some(Action::HeavyCharge));
        assert!(player.has_status(STAGGER));
    }

    #[test]
    fn test_mage_branches() {
        let mut player = Player::adventurer("Hero");

        let mut dice = ScriptedDice::new(vec![0.59, 0.5, 0.5, 0.9]);
        assert_eq!(mage_turn(&mut player, &mut dice).action(), Some(Action::Fireball));

        let mut dice = ScriptedDice::new(vec![0.6, 0.0]);
        let outcome = mage_turn(&mut player, &mut dice);
        assert_eq!(outcome.action(), Some(Action::EnergyBall));
        assert_eq!(outcome.damage_dealt(), 5);
    }

    #[test]
    fn test_policy_weights() {
        let world = WorldContext::default();
        let mut dice = RngDice::new(StdRng::seed_from_u64(2024));
        let mut counts: HashMap<Action, u32> = HashMap::new();
        let trials = 20_000;

        let mut mage = spawn_enemy(EnemyKind::Mage, 1, &world);
        for _ in 0..trials {
            let mut player = Player::new("Hero", 10_000, 5, 0);
            if let Some(action) = mage.choose_action(&mut player, &mut dice, &standard).action() {
                *counts.entry(action).or_default() += 1;
            }
        }
        let fireballs = counts.get(&Action::Fireball).copied().unwrap_or(0) as f64;
        let ratio = fireballs / trials as f64;
        assert!((0.57..0.63).contains(&ratio), "fireball ratio {}", ratio);

        counts.clear();
        let mut warrior = spawn_enemy(EnemyKind::Warrior, 1, &world);
        for _ in 0..trials {
            let mut player = Player::new("Hero", 10_000, 5, 0);
            if let Some(action) = warrior
                .choose_action(&mut player, &mut dice, &standard)
                .action()
            {
                *counts.entry(action).or_default() += 1;
            }
        }
        let cries = counts.get(&Action::BattleCry).copied().unwrap_or(0) as f64 / trials as f64;
        let charges = counts.get(&Action::HeavyCharge).copied().unwrap_or(0) as f64 / trials as f64;
        assert!((0.27..0.33).contains(&cries), "battle cry ratio {}", cries);
        // 0.7 * 40/101
        assert!((0.25..0.30).contains(&charges), "heavy charge ratio {}", charges);
    }
}
