//! Narration events sent to the presentation layer.
//!
//! The engine never prints. Everything worth showing is described by a
//! [`GameEvent`] and handed to [`crate::PlayerInput::narrate`]; combat rounds go
//! through [`game_rules::CombatInput::observe`] instead.

use game_rules::{CreationError, HeroArchetype, PotionEffect, RiskChoice, RiskOutcome, WeakPoint};

use crate::error::ShopError;
use crate::shop::Purchase;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    HeroIntroduced {
        name: String,
        archetype: HeroArchetype,
        weak_point: WeakPoint,
    },
    CreationRejected(CreationError),
    RoomEntered {
        room: String,
    },
    RoomAlreadyCleared {
        room: String,
    },
    RoomEmpty {
        room: String,
    },
    AllySpeaks {
        ally: String,
        line: String,
    },
    EnemySpeaks {
        enemy: String,
        line: String,
    },
    RiskStarted {
        transport: String,
        description: String,
    },
    RiskResolved {
        choice: RiskChoice,
        outcome: RiskOutcome,
    },
    ShopOpened,
    Purchased {
        item: String,
        purchase: Purchase,
        gold_left: u32,
    },
    PurchaseFailed(ShopError),
    ShopClosed,
    RewardFound {
        potion: String,
    },
    RewardUsed {
        potion: String,
        effect: PotionEffect,
    },
    RewardStored {
        potion: String,
    },
    NoPotions,
    PotionDrunk {
        potion: String,
        effect: PotionEffect,
    },
    PotionKept {
        potion: String,
    },
    InvalidPotionChoice(usize),
    InvalidExit {
        choice: usize,
        exits: usize,
    },
    Travelled {
        from: String,
        to: String,
    },
    HeroDied {
        room: String,
    },
    RetryingSameHero,
    StartingOver,
    Victory {
        hero: String,
    },
    RunAbandoned,
}
