//! Enemy abilities
//!
//! Each ability resolves immediately and reports what happened. Rolls are
//! taken in a fixed order (miss, damage, follow-up) so a scripted dice
//! sequence always lines up with the same branch.

use super::actor::CombatActor;
use super::damage::{mitigate, AttackFormula};
use super::dice::Dice;
use super::outcome::{Action, ActionOutcome, Potion, Strike};
use super::status::{StatusEffect, STAGGER};
use super::target::Target;

pub const BASIC_MISS_CHANCE: f64 = 0.10;

pub const HEAVY_CHARGE_MISS_CHANCE: f64 = 0.30;
pub const HEAVY_CHARGE_BONUS: i32 = 10;
pub const HEAVY_CHARGE_STAGGER_CHANCE: f64 = 0.20;
pub const STAGGER_DURATION: i32 = 1;

pub const FIREBALL_MISS_CHANCE: f64 = 0.20;
pub const FIREBALL_DAMAGE: (i32, i32) = (10, 20);
pub const FIREBALL_BURN_CHANCE: f64 = 0.30;

pub const ENERGY_BALL_DAMAGE: (i32, i32) = (5, 15);

pub const BATTLE_CRY_STRENGTH: i32 = 1;

/// Apply a defense-mitigated hit to the target
fn physical_strike(action: Action, raw_damage: i32, target: &mut impl Target) -> Strike {
    let defense = target.defense();
    let damage = mitigate(raw_damage, defense);
    target.take_damage(damage);

    Strike {
        action,
        raw_damage,
        damage,
        mitigated: defense > 0,
        target_hp: target.hp(),
        inflicted: None,
        burned_item: None,
    }
}

/// Apply a spell hit; spells ignore defense
fn spell_strike(action: Action, damage: i32, target: &mut impl Target) -> Strike {
    target.take_damage(damage);

    Strike {
        action,
        raw_damage: damage,
        damage,
        mitigated: false,
        target_hp: target.hp(),
        inflicted: None,
        burned_item: None,
    }
}

/// Plain weapon swing: 10% miss, strength-based damage minus defense
pub fn basic_attack(
    actor: &CombatActor,
    target: &mut impl Target,
    dice: &mut impl Dice,
    formula: &impl AttackFormula,
) -> ActionOutcome {
    if dice.chance(BASIC_MISS_CHANCE) {
        return ActionOutcome::Missed { action: Action::BasicAttack };
    }
    let raw = formula.calculate_attack(actor.stats.strength, 0);
    ActionOutcome::Hit(physical_strike(Action::BasicAttack, raw, target))
}

/// Warrior charge: 30% miss, +10 attack bonus, 20% chance to stagger
pub fn heavy_charge(
    actor: &CombatActor,
    target: &mut impl Target,
    dice: &mut impl Dice,
    formula: &impl AttackFormula,
) -> ActionOutcome {
    if dice.chance(HEAVY_CHARGE_MISS_CHANCE) {
        return ActionOutcome::Missed { action: Action::HeavyCharge };
    }
    let raw = formula.calculate_attack(actor.stats.strength, HEAVY_CHARGE_BONUS);
    let mut strike = physical_strike(Action::HeavyCharge, raw, target);

    if dice.chance(HEAVY_CHARGE_STAGGER_CHANCE) {
        target.apply_status(STAGGER, STAGGER_DURATION);
        strike.inflicted = Some(StatusEffect {
            name: STAGGER.to_string(),
            duration: STAGGER_DURATION,
        });
    }

    ActionOutcome::Hit(strike)
}

/// Mage fireball: 20% miss, 10-20 damage, 30% chance to burn an item.
/// Burning does nothing when the target carries no items.
pub fn fireball(target: &mut impl Target, dice: &mut impl Dice) -> ActionOutcome {
    if dice.chance(FIREBALL_MISS_CHANCE) {
        return ActionOutcome::Missed { action: Action::Fireball };
    }
    let (low, high) = FIREBALL_DAMAGE;
    let damage = dice.range_inclusive(low, high);
    let mut strike = spell_strike(Action::Fireball, damage, target);

    if dice.chance(FIREBALL_BURN_CHANCE) {
        let count = target.item_count();
        if count > 0 {
            let index = dice.pick(count);
            strike.burned_item = target.destroy_item(index);
        }
    }

    ActionOutcome::Hit(strike)
}

/// Mage energy ball: never misses, 5-15 damage
pub fn energy_ball(target: &mut impl Target, dice: &mut impl Dice) -> ActionOutcome {
    let (low, high) = ENERGY_BALL_DAMAGE;
    let damage = dice.range_inclusive(low, high);
    ActionOutcome::Hit(spell_strike(Action::EnergyBall, damage, target))
}

/// Drink a specific potion. Healing stops at max HP.
pub fn drink_potion(actor: &mut CombatActor, potion: Potion) -> ActionOutcome {
    let stats = &mut actor.stats;
    match potion {
        Potion::Health => stats.hp = (stats.hp + potion.amount()).min(stats.max_hp),
        Potion::Strength => stats.strength += potion.amount(),
        Potion::Defense => stats.defense += potion.amount(),
    }

    ActionOutcome::UsedPotion {
        potion,
        hp: stats.hp,
        strength: stats.strength,
        defense: stats.defense,
    }
}

/// Drink one of the three potions, chosen uniformly
pub fn use_item(actor: &mut CombatActor, dice: &mut impl Dice) -> ActionOutcome {
    let potion = Potion::ALL[dice.pick(Potion::ALL.len())];
    drink_potion(actor, potion)
}

/// Warrior roar: +1 strength, always succeeds
pub fn battle_cry(actor: &mut CombatActor) -> ActionOutcome {
    actor.stats.strength += BATTLE_CRY_STRENGTH;
    ActionOutcome::BattleCry { strength: actor.stats.strength }
}
