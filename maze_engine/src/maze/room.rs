//! A single room and its encounter.

use game_rules::{resolve_combat, Hero, Npc, Potion, RiskEvent, RiskOutcome};
use rand::Rng;

use crate::config::{CombatConfig, PayloadConfig, RoomConfig};
use crate::events::GameEvent;
use crate::input::{PlayerInput, RewardChoice};
use crate::shop::Vendor;

/// Whether the hero made it out of a room alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Survived,
    Died,
}

impl EncounterOutcome {
    pub fn survived(&self) -> bool {
        matches!(self, EncounterOutcome::Survived)
    }
}

impl From<RiskOutcome> for EncounterOutcome {
    fn from(outcome: RiskOutcome) -> Self {
        match outcome {
            RiskOutcome::Survived => EncounterOutcome::Survived,
            RiskOutcome::Died => EncounterOutcome::Died,
        }
    }
}

/// A fight, with the lines spoken before it and the potion dropped after.
#[derive(Debug, Clone)]
pub struct CombatSetup {
    pub ally_name: Option<String>,
    pub ally_line: String,
    pub enemy_line: String,
    /// Keeps its damage between visits: a retreating hero meets a wounded foe.
    pub enemy: Option<Npc>,
    /// Taken by the first winner, never handed out twice.
    pub reward: Option<Potion>,
}

impl From<&CombatConfig> for CombatSetup {
    fn from(config: &CombatConfig) -> Self {
        Self {
            ally_name: config.ally_name.clone(),
            ally_line: config.ally_line.clone(),
            enemy_line: config.enemy_line.clone(),
            enemy: config.enemy.as_ref().map(|enemy| enemy.spawn()),
            reward: config.reward.clone(),
        }
    }
}

/// What happens on entering a room. Exactly one kind per room.
#[derive(Debug, Clone)]
pub enum RoomPayload {
    Empty,
    Shop,
    Risk(RiskEvent),
    Combat(CombatSetup),
}

impl From<&PayloadConfig> for RoomPayload {
    fn from(config: &PayloadConfig) -> Self {
        match config {
            PayloadConfig::Empty => RoomPayload::Empty,
            PayloadConfig::Shop => RoomPayload::Shop,
            PayloadConfig::Risk(event) => RoomPayload::Risk(event.clone()),
            PayloadConfig::Combat(combat) => RoomPayload::Combat(combat.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    exits: Vec<String>,
    cleared: bool,
    payload: RoomPayload,
}

impl Room {
    pub fn new(name: impl Into<String>, exits: Vec<String>, payload: RoomPayload) -> Self {
        Self {
            name: name.into(),
            exits,
            cleared: false,
            payload,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exits(&self) -> &[String] {
        &self.exits
    }

    /// Set once the room's fight or empty event is resolved. Never reset.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn payload(&self) -> &RoomPayload {
        &self.payload
    }

    /// Run the room's encounter.
    ///
    /// Risk crossings and shops run on every visit. Fights and empty rooms
    /// run once and are inert afterwards.
    pub fn enter(
        &mut self,
        hero: &mut Hero,
        vendor: &Vendor,
        input: &mut impl PlayerInput,
        rng: &mut impl Rng,
    ) -> EncounterOutcome {
        input.narrate(&GameEvent::RoomEntered {
            room: self.name.clone(),
        });

        match &mut self.payload {
            RoomPayload::Risk(event) => {
                input.narrate(&GameEvent::RiskStarted {
                    transport: event.transport_name.clone(),
                    description: event.description.clone(),
                });
                let choice = input.risk_choice(event);
                let outcome = event.resolve(choice, rng);
                input.narrate(&GameEvent::RiskResolved { choice, outcome });
                outcome.into()
            }
            RoomPayload::Shop => {
                vendor.open(hero, input, rng);
                EncounterOutcome::Survived
            }
            _ if self.cleared => {
                input.narrate(&GameEvent::RoomAlreadyCleared {
                    room: self.name.clone(),
                });
                EncounterOutcome::Survived
            }
            RoomPayload::Empty | RoomPayload::Combat(CombatSetup { enemy: None, .. }) => {
                if let RoomPayload::Combat(setup) = &self.payload {
                    ally_speaks(setup, input);
                }
                input.narrate(&GameEvent::RoomEmpty {
                    room: self.name.clone(),
                });
                self.cleared = true;
                EncounterOutcome::Survived
            }
            RoomPayload::Combat(setup) => {
                let outcome = fight(setup, hero, input, rng);
                if outcome.survived() {
                    self.cleared = true;
                    tracing::info!(room = %self.name, "room cleared");
                }
                outcome
            }
        }
    }
}

fn ally_speaks(setup: &CombatSetup, input: &mut impl PlayerInput) {
    if let Some(ally) = &setup.ally_name {
        input.narrate(&GameEvent::AllySpeaks {
            ally: ally.clone(),
            line: setup.ally_line.clone(),
        });
    }
}

fn fight(
    setup: &mut CombatSetup,
    hero: &mut Hero,
    input: &mut impl PlayerInput,
    rng: &mut impl Rng,
) -> EncounterOutcome {
    if setup.enemy.is_none() {
        return EncounterOutcome::Survived;
    }

    ally_speaks(setup, input);
    let Some(enemy) = setup.enemy.as_mut() else {
        return EncounterOutcome::Survived;
    };
    input.narrate(&GameEvent::EnemySpeaks {
        enemy: enemy.name.clone(),
        line: setup.enemy_line.clone(),
    });

    if !resolve_combat(hero, enemy, input, rng).hero_won() {
        return EncounterOutcome::Died;
    }

    if let Some(reward) = setup.reward.take() {
        input.narrate(&GameEvent::RewardFound {
            potion: reward.meta.name.clone(),
        });
        match input.reward_choice(&reward) {
            RewardChoice::UseNow => {
                let effect = hero.apply_potion(&reward);
                input.narrate(&GameEvent::RewardUsed {
                    potion: reward.meta.name,
                    effect,
                });
            }
            RewardChoice::Keep => {
                input.narrate(&GameEvent::RewardStored {
                    potion: reward.meta.name.clone(),
                });
                hero.add_consumable(reward);
            }
        }
    }
    EncounterOutcome::Survived
}

impl From<&RoomConfig> for Room {
    fn from(config: &RoomConfig) -> Self {
        Room::new(
            config.name.clone(),
            config.exits.clone(),
            (&config.payload).into(),
        )
    }
}
