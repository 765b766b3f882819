//! Turn management for combat
//!
//! Runs both sides of an encounter. Enemies expire status effects, then
//! act. The player acts (or loses the action to a stagger), then expires.

use serde::Serialize;

use crate::combat::{
    mitigate, Action, ActionOutcome, AttackFormula, CombatActor, Dice, Reveal, Strike, Target,
    STAGGER,
};
use crate::entities::Player;

/// Everything that happened on one side's turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub round: u32,
    pub actor: String,
    /// Effects that wore off during the turn
    pub expired: Vec<String>,
    pub outcome: ActionOutcome,
}

/// Tick the enemy's status effects, then let it choose and resolve an action
pub fn enemy_turn(
    round: u32,
    enemy: &mut CombatActor,
    target: &mut impl Target,
    dice: &mut impl Dice,
    formula: &impl AttackFormula,
) -> TurnReport {
    let expired = enemy.tick_status_effects().expired;
    let outcome = enemy.choose_action(target, dice, formula);

    TurnReport {
        round,
        actor: enemy.name.clone(),
        expired,
        outcome,
    }
}

/// Which side, if any, has dropped to zero HP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Victor {
    Player,
    Enemy,
}

/// One enemy against one target, round by round
#[derive(Debug, Clone)]
pub struct Encounter {
    pub enemy: CombatActor,
    round: u32,
    revealed: bool,
}

impl Encounter {
    pub fn new(enemy: CombatActor) -> Self {
        Self {
            enemy,
            round: 0,
            revealed: false,
        }
    }

    /// Current round number (0 before the first enemy turn)
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Reveal the enemy the first time this is called; later calls do nothing
    pub fn reveal(&mut self) -> Option<Reveal> {
        if self.revealed {
            return None;
        }
        self.revealed = true;
        Some(self.enemy.reveal_identity())
    }

    /// Advance the round and resolve the enemy's turn
    pub fn enemy_turn(
        &mut self,
        target: &mut impl Target,
        dice: &mut impl Dice,
        formula: &impl AttackFormula,
    ) -> TurnReport {
        self.round += 1;
        log::debug!("Round {}: {} acts", self.round, self.enemy.name);
        enemy_turn(self.round, &mut self.enemy, target, dice, formula)
    }

    /// Resolve the player's side of the coming round. A stagger costs this
    /// action; the player's effects tick down after acting, so a stagger
    /// inflicted on the enemy's turn is still there to be served.
    pub fn player_turn(
        &mut self,
        player: &mut Player,
        formula: &impl AttackFormula,
    ) -> TurnReport {
        let outcome = if player.status.has(STAGGER) {
            log::debug!("{} is staggered", player.name);
            ActionOutcome::Staggered
        } else {
            let raw = formula.calculate_attack(player.strength, 0);
            let defense = self.enemy.stats.defense;
            let damage = mitigate(raw, defense);
            self.enemy.take_damage(damage);
            ActionOutcome::Hit(Strike {
                action: Action::BasicAttack,
                raw_damage: raw,
                damage,
                mitigated: defense > 0,
                target_hp: self.enemy.hp(),
                inflicted: None,
                burned_item: None,
            })
        };
        let expired = player.tick_status_effects().expired;

        TurnReport {
            round: self.round + 1,
            actor: player.name.clone(),
            expired,
            outcome,
        }
    }

    /// Hp at or below zero ends the fight. The enemy is checked first.
    pub fn victor(&self, target: &impl Target) -> Option<Victor> {
        if !self.enemy.is_alive() {
            Some(Victor::Player)
        } else if target.hp() <= 0 {
            Some(Victor::Enemy)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ScriptedDice;
    use crate::entities::{spawn_enemy, EnemyKind};
    use crate::progression::WorldContext;

    fn standard(strength: i32, bonus: i32) -> i32 {
        strength + bonus
    }

    #[test]
    fn test_stagger_lifecycle_across_turns() {
        let enemy = spawn_enemy(EnemyKind::Generic, 1, &WorldContext::default());
        let mut encounter = Encounter::new(enemy);
        let mut player = Player::new("Hero", 100, 5, 0);
        let mut dice = ScriptedDice::new(vec![0.5]);

        // Applied with 2 turns: the first tick leaves 1, so the turn is lost
        encounter.enemy.apply_status(STAGGER, 2);
        let report = encounter.enemy_turn(&mut player, &mut dice, &standard);
        assert_eq!(report.round, 1);
        assert!(report.expired.is_empty());
        assert_eq!(report.outcome, ActionOutcome::Staggered);
        assert_eq!(player.hp, 100);

        let report = encounter.enemy_turn(&mut player, &mut dice, &standard);
        assert_eq!(report.expired, vec![STAGGER.to_string()]);
        assert!(report.outcome.damage_dealt() > 0);
        assert!(player.hp < 100);
    }

    #[test]
    fn test_player_loses_one_action_to_charge_stagger() {
        let enemy = spawn_enemy(EnemyKind::Warrior, 1, &WorldContext::default());
        let mut encounter = Encounter::new(enemy);
        let mut player = Player::new("Hero", 500, 12, 0);
        // no battle cry, charge, hit, stagger
        let mut dice = ScriptedDice::new(vec![0.9, 0.0, 0.9, 0.0]);

        let report = encounter.enemy_turn(&mut player, &mut dice, &standard);
        assert_eq!(report.outcome.action(), Some(Action::HeavyCharge));
        assert!(report.outcome.damage_dealt() > 0);
        assert!(player.has_status(STAGGER));

        let enemy_hp = encounter.enemy.hp();
        let report = encounter.player_turn(&mut player, &standard);
        assert_eq!(report.outcome, ActionOutcome::Staggered);
        assert_eq!(report.round, 2);
        assert_eq!(report.expired, vec![STAGGER.to_string()]);
        assert_eq!(encounter.enemy.hp(), enemy_hp);
        assert!(!player.has_status(STAGGER));

        let report = encounter.player_turn(&mut player, &standard);
        assert!(report.expired.is_empty());
        assert!(report.outcome.damage_dealt() > 0);
        assert!(encounter.enemy.hp() < enemy_hp);
    }

    #[test]
    fn test_player_attack_mitigated_by_enemy_defense() {
        let enemy = spawn_enemy(EnemyKind::Generic, 1, &WorldContext::default());
        let mut encounter = Encounter::new(enemy);
        let mut player = Player::new("Hero", 100, 12, 0);
        let defense = encounter.enemy.stats.defense;
        let hp = encounter.enemy.hp();

        let report = encounter.player_turn(&mut player, &standard);
        match report.outcome {
            ActionOutcome::Hit(strike) => {
                assert_eq!(strike.raw_damage, 12);
                assert_eq!(strike.damage, 12 - defense);
                assert!(strike.mitigated);
                assert_eq!(strike.target_hp, hp - (12 - defense));
            }
            other => panic!("expected a hit, got {:?}", other),
        }
    }

    #[test]
    fn test_reveal_once() {
        let enemy = spawn_enemy(EnemyKind::Warrior, 1, &WorldContext::default());
        let mut encounter = Encounter::new(enemy);
        let reveal = encounter.reveal().expect("first reveal");
        assert_eq!(reveal.name, "Corrupted Warrior");
        assert!(encounter.reveal().is_none());
    }

    #[test]
    fn test_victor() {
        let enemy = spawn_enemy(EnemyKind::Generic, 1, &WorldContext::default());
        let mut encounter = Encounter::new(enemy);
        let mut player = Player::new("Hero", 5, 5, 0);
        assert_eq!(encounter.victor(&player), None);

        player.hp = -3;
        assert_eq!(encounter.victor(&player), Some(Victor::Enemy));

        encounter.enemy.take_damage(1000);
        assert!(encounter.enemy.hp() < 0);
        assert_eq!(encounter.victor(&player), Some(Victor::Player));
    }
}
