//! The progression controller.
//!
//! [`Game`] owns the hero, the maze and the current position. Each
//! [`Game::step`] resolves the current room and, if the hero survives, moves
//! along one exit. Death is handled by [`Game::handle_death`]; [`Game::run`]
//! drives both until the run ends.

use game_rules::{Hero, Potion};
use rand::Rng;

use crate::config::MazeConfig;
use crate::error::{GameError, MazeError};
use crate::events::GameEvent;
use crate::input::{DeathChoice, PlayerInput};
use crate::maze::{EncounterOutcome, Maze};
use crate::shop::Vendor;

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The hero survived and the run goes on.
    Continue,
    /// The hero died. Call [`Game::handle_death`] before stepping again.
    Died,
    /// The boss room was won. The run is over.
    Victory,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Abandoned,
}

pub struct Game {
    config: MazeConfig,
    maze: Maze,
    vendor: Vendor,
    hero: Hero,
    current: String,
    finished: Option<RunOutcome>,
}

impl Game {
    /// Start a run with an existing hero. The starter kit is handed over.
    pub fn new(config: MazeConfig, mut hero: Hero) -> Result<Self, MazeError> {
        let maze = Maze::build(&config)?;
        let vendor = Vendor::new(config.shop_stock.clone());
        grant_starter_kit(&config, &mut hero);
        let current = maze.start_room().to_string();
        tracing::info!(hero = %hero.id, start = %current, "run started");
        Ok(Self {
            config,
            maze,
            vendor,
            hero,
            current,
            finished: None,
        })
    }

    /// Start a run with a hero created through `input`.
    pub fn start(
        config: MazeConfig,
        input: &mut impl PlayerInput,
        rng: &mut impl Rng,
    ) -> Result<Self, MazeError> {
        // Validate before asking the player anything.
        Maze::build(&config)?;
        let hero = create_hero(input, rng);
        Self::new(config, hero)
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn current_room(&self) -> &str {
        &self.current
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.finished
    }

    /// Resolve the current room, then heal and travel if the hero lived.
    pub fn step(
        &mut self,
        input: &mut impl PlayerInput,
        rng: &mut impl Rng,
    ) -> Result<StepResult, GameError> {
        if self.finished.is_some() {
            return Err(GameError::RunOver);
        }

        let room = self
            .maze
            .find_by_name_mut(&self.current)
            .ok_or_else(|| MazeError::UnknownRoom {
                role: "current",
                name: self.current.clone(),
            })?;

        if room.enter(&mut self.hero, &self.vendor, input, rng) == EncounterOutcome::Died {
            // Risk deaths leave health untouched; a dead hero has none.
            self.hero.set_current_health(0);
            tracing::info!(hero = %self.hero.id, room = %self.current, "hero died");
            input.narrate(&GameEvent::HeroDied {
                room: self.current.clone(),
            });
            return Ok(StepResult::Died);
        }

        if self.current == self.maze.boss_room() {
            tracing::info!(hero = %self.hero.id, level = self.hero.level(), "boss defeated");
            self.finished = Some(RunOutcome::Victory);
            input.narrate(&GameEvent::Victory {
                hero: self.hero.name.clone(),
            });
            return Ok(StepResult::Victory);
        }

        self.heal_menu(input);
        let exits = self.maze.neighbors_of(&self.current).unwrap_or_default();
        let choice = input.exit_choice(exits);
        self.travel(choice, input);
        Ok(StepResult::Continue)
    }

    /// Move along the `choice`th exit of the current room. Out-of-range
    /// choices leave everything as it was.
    pub fn travel(&mut self, choice: usize, input: &mut impl PlayerInput) -> Option<&str> {
        let exits = self.maze.neighbors_of(&self.current).unwrap_or_default();
        let Some(next) = exits.get(choice).cloned() else {
            input.narrate(&GameEvent::InvalidExit {
                choice,
                exits: exits.len(),
            });
            return None;
        };

        tracing::debug!(from = %self.current, to = %next, "travelled");
        let from = std::mem::replace(&mut self.current, next);
        input.narrate(&GameEvent::Travelled {
            from,
            to: self.current.clone(),
        });
        Some(self.current.as_str())
    }

    /// Apply the player's choice after a death.
    pub fn handle_death(
        &mut self,
        choice: DeathChoice,
        input: &mut impl PlayerInput,
        rng: &mut impl Rng,
    ) -> Result<(), GameError> {
        if self.finished.is_some() {
            return Err(GameError::RunOver);
        }

        match choice {
            DeathChoice::RetrySameHero => {
                self.hero.restore_full_health();
                self.current = self.maze.start_room().to_string();
                tracing::info!(hero = %self.hero.id, "retrying with the same hero");
                input.narrate(&GameEvent::RetryingSameHero);
            }
            DeathChoice::NewHero => {
                input.narrate(&GameEvent::StartingOver);
                let mut hero = create_hero(input, rng);
                grant_starter_kit(&self.config, &mut hero);
                self.maze = Maze::build(&self.config)?;
                self.vendor = Vendor::new(self.config.shop_stock.clone());
                self.current = self.maze.start_room().to_string();
                tracing::info!(old = %self.hero.id, new = %hero.id, "starting over with a new hero");
                self.hero = hero;
            }
            DeathChoice::Quit => self.abandon(input),
        }
        Ok(())
    }

    /// Play until victory or until the player quits.
    pub fn run(
        &mut self,
        input: &mut impl PlayerInput,
        rng: &mut impl Rng,
    ) -> Result<RunOutcome, GameError> {
        loop {
            if let Some(outcome) = self.finished {
                return Ok(outcome);
            }
            if input.wants_to_quit() {
                self.abandon(input);
                continue;
            }
            if self.step(input, rng)? == StepResult::Died {
                let choice = input.death_choice();
                self.handle_death(choice, input, rng)?;
            }
        }
    }

    fn abandon(&mut self, input: &mut impl PlayerInput) {
        tracing::info!(hero = %self.hero.id, room = %self.current, "run abandoned");
        self.finished = Some(RunOutcome::Abandoned);
        input.narrate(&GameEvent::RunAbandoned);
    }

    /// Offer potions until the player declines.
    fn heal_menu(&mut self, input: &mut impl PlayerInput) {
        loop {
            let potions: Vec<Potion> = self.hero.potions().into_iter().cloned().collect();
            if potions.is_empty() {
                input.narrate(&GameEvent::NoPotions);
                return;
            }

            let refs: Vec<&Potion> = potions.iter().collect();
            let Some(pick) = input.heal_choice(&self.hero, &refs) else {
                return;
            };
            let Some(potion) = potions.get(pick) else {
                input.narrate(&GameEvent::InvalidPotionChoice(pick));
                continue;
            };

            let wasted = self.hero.would_overheal(potion);
            if wasted > 0 && !input.confirm_overheal(potion, wasted) {
                input.narrate(&GameEvent::PotionKept {
                    potion: potion.meta.name.clone(),
                });
                continue;
            }

            match self.hero.drink_potion(pick) {
                Ok((potion, effect)) => {
                    tracing::debug!(
                        hero = %self.hero.id,
                        potion = %potion.meta.name,
                        healed = effect.healed,
                        "potion drunk"
                    );
                    input.narrate(&GameEvent::PotionDrunk {
                        potion: potion.meta.name,
                        effect,
                    });
                }
                Err(_) => input.narrate(&GameEvent::InvalidPotionChoice(pick)),
            }
        }
    }
}

/// Ask for a blueprint until one produces a valid hero.
fn create_hero(input: &mut impl PlayerInput, rng: &mut impl Rng) -> Hero {
    loop {
        let blueprint = input.create_hero();
        match Hero::create(&blueprint, rng) {
            Ok(hero) => {
                input.narrate(&GameEvent::HeroIntroduced {
                    name: hero.name.clone(),
                    archetype: hero.archetype(),
                    weak_point: hero.weak_point(),
                });
                return hero;
            }
            Err(err) => {
                tracing::debug!(%err, "hero blueprint rejected");
                input.narrate(&GameEvent::CreationRejected(err));
            }
        }
    }
}

fn grant_starter_kit(config: &MazeConfig, hero: &mut Hero) {
    let kit = &config.starter_kit;
    if let Some(weapon) = &kit.weapon {
        hero.equip_weapon(weapon.clone());
    }
    for potion in &kit.potions {
        hero.add_consumable(potion.clone());
    }
}
