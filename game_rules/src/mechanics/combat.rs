//! Turn-based combat between the hero and a single NPC.
//!
//! Each round the hero acts first. Rejected actions (a second special attack,
//! an empty consumable pouch, a cancelled pick) are reported and the hero is
//! asked again; the enemy only retaliates after an action that went through.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{WeakPoint, WEAK_POINT_HIT_CHANCE, WEAK_POINT_MULTIPLIER};
use crate::entities::{Hero, LevelUp, Npc};
use crate::error::{CombatError, InventoryError};
use crate::items::CombatConsumable;

/// Actions offered to the hero each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    Normal,
    Special,
    Consumable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    HeroWon,
    HeroDied,
}

impl CombatOutcome {
    pub fn hero_won(&self) -> bool {
        matches!(self, CombatOutcome::HeroWon)
    }
}

/// Narration emitted while a fight runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    Started {
        enemy: String,
    },
    RoundBegins {
        hero_health: u32,
        hero_max_health: u32,
        enemy_health: u32,
        enemy_max_health: u32,
    },
    Rejected(CombatError),
    NormalAttack {
        damage: u32,
    },
    SpecialAttack {
        damage: u32,
        line: String,
    },
    ConsumableUsed {
        item: String,
        damage: u32,
    },
    EnemyAttack {
        enemy: String,
        damage: u32,
        weak_point: Option<WeakPoint>,
    },
    Victory {
        gold: u32,
        level_up: LevelUp,
    },
    Defeat,
}

/// Decisions the hero makes during a fight, plus a narration hook.
pub trait CombatInput {
    fn choose_action(&mut self, hero: &Hero, enemy: &Npc) -> CombatAction;

    /// Pick one of `options` by position, or `None` to cancel.
    fn choose_consumable(&mut self, options: &[&CombatConsumable]) -> Option<usize>;

    fn observe(&mut self, _event: &CombatEvent) {}
}

/// Fight until one side drops. Rewards and the level-up are applied on a win.
pub fn resolve_combat(
    hero: &mut Hero,
    enemy: &mut Npc,
    input: &mut impl CombatInput,
    rng: &mut impl Rng,
) -> CombatOutcome {
    hero.begin_fight();
    tracing::debug!(hero = %hero.id, enemy = %enemy.id, name = %enemy.name, "combat started");
    input.observe(&CombatEvent::Started {
        enemy: enemy.name.clone(),
    });

    while hero.is_alive() && enemy.is_alive() {
        input.observe(&CombatEvent::RoundBegins {
            hero_health: hero.current_health(),
            hero_max_health: hero.max_health(),
            enemy_health: enemy.stats.current_health(),
            enemy_max_health: enemy.stats.max_health(),
        });

        let action = input.choose_action(hero, enemy);
        let event = match hero_turn(hero, enemy, action, input) {
            Ok(event) => event,
            Err(err) => {
                tracing::debug!(?action, %err, "combat action rejected");
                input.observe(&CombatEvent::Rejected(err));
                continue;
            }
        };
        input.observe(&event);

        if !enemy.is_alive() {
            break;
        }

        let retaliation = enemy_turn(hero, enemy, rng);
        input.observe(&retaliation);
    }

    if !hero.is_alive() {
        tracing::info!(hero = %hero.id, enemy = %enemy.name, "hero died in combat");
        input.observe(&CombatEvent::Defeat);
        return CombatOutcome::HeroDied;
    }

    let gold = enemy.gold_reward();
    hero.earn_gold(gold);
    let level_up = hero.level_up();
    tracing::info!(
        hero = %hero.id,
        enemy = %enemy.name,
        gold,
        level = level_up.level,
        "hero won combat"
    );
    input.observe(&CombatEvent::Victory { gold, level_up });
    CombatOutcome::HeroWon
}

fn hero_turn(
    hero: &mut Hero,
    enemy: &mut Npc,
    action: CombatAction,
    input: &mut impl CombatInput,
) -> Result<CombatEvent, CombatError> {
    match action {
        CombatAction::Normal => {
            let damage = hero.normal_attack_damage();
            enemy.stats.take_damage(damage);
            Ok(CombatEvent::NormalAttack { damage })
        }
        CombatAction::Special => {
            if hero.special_used_this_fight() {
                return Err(CombatError::SpecialAlreadyUsed);
            }
            let damage = hero.special_attack_damage();
            enemy.stats.take_damage(damage);
            hero.mark_special_used();
            Ok(CombatEvent::SpecialAttack {
                damage,
                line: hero.archetype().profile().special_line.to_string(),
            })
        }
        CombatAction::Consumable => {
            let pick = {
                let options = hero.combat_consumables();
                if options.is_empty() {
                    return Err(CombatError::NoCombatConsumables);
                }
                input.choose_consumable(&options).ok_or(CombatError::Cancelled)?
            };
            let item = use_combat_consumable(hero, enemy, pick)?;
            Ok(CombatEvent::ConsumableUsed {
                item: item.meta.name,
                damage: item.instant_attack,
            })
        }
    }
}

/// Remove the `nth` combat consumable from the hero and throw it at `enemy`.
pub fn use_combat_consumable(
    hero: &mut Hero,
    enemy: &mut Npc,
    nth: usize,
) -> Result<CombatConsumable, CombatError> {
    let item = hero.take_combat_consumable(nth).map_err(|err| match err {
        InventoryError::NoCombatConsumables => CombatError::NoCombatConsumables,
        _ => CombatError::InvalidSelection(nth),
    })?;
    enemy.stats.take_damage(item.instant_attack);
    Ok(item)
}

fn enemy_turn(hero: &mut Hero, enemy: &Npc, rng: &mut impl Rng) -> CombatEvent {
    let mut damage = enemy.stats.strength();
    let weak_point = if rng.gen_bool(WEAK_POINT_HIT_CHANCE) {
        damage *= WEAK_POINT_MULTIPLIER;
        Some(hero.weak_point())
    } else {
        None
    };
    hero.take_damage(damage);
    tracing::debug!(enemy = %enemy.name, damage, weak = weak_point.is_some(), "enemy retaliated");
    CombatEvent::EnemyAttack {
        enemy: enemy.name.clone(),
        damage,
        weak_point,
    }
}
