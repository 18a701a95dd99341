//! The merchant met in shop rooms.

use game_rules::{Hero, HeroArchetype, Item};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ShopError;
use crate::events::GameEvent;
use crate::input::{PlayerInput, ShopChoice};

/// Most items shown in a single offer.
pub const MAX_OFFER: usize = 10;

/// Where a bought item ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purchase {
    /// Weapon equipped, with the name of the weapon it replaced.
    Equipped { replaced: Option<String> },
    Stored,
}

#[derive(Debug, Clone, Default)]
pub struct Vendor {
    stock: Vec<Item>,
}

impl Vendor {
    pub fn new(stock: Vec<Item>) -> Self {
        Self { stock }
    }

    pub fn stock(&self) -> &[Item] {
        &self.stock
    }

    /// Shuffled selection of items the archetype may use, at most [`MAX_OFFER`].
    pub fn offer(&self, archetype: HeroArchetype, rng: &mut impl Rng) -> Vec<Item> {
        let mut items = self.stock.clone();
        items.shuffle(rng);
        items
            .into_iter()
            .filter(|item| item.is_allowed_for(archetype))
            .take(MAX_OFFER)
            .collect()
    }

    /// Pay for `item` and hand it over: weapons are equipped, the rest goes
    /// to the inventory.
    pub fn purchase(hero: &mut Hero, item: &Item) -> Result<Purchase, ShopError> {
        if !item.is_allowed_for(hero.archetype()) {
            return Err(ShopError::NotAllowed {
                item: item.name().to_string(),
                archetype: hero.archetype(),
            });
        }
        if !hero.spend_gold(item.price()) {
            return Err(ShopError::InsufficientGold {
                item: item.name().to_string(),
                price: item.price(),
                gold: hero.gold(),
            });
        }

        let purchase = match item.clone() {
            Item::Weapon(weapon) => Purchase::Equipped {
                replaced: hero.equip_weapon(weapon).map(|old| old.meta.name),
            },
            Item::Potion(potion) => {
                hero.add_consumable(potion);
                Purchase::Stored
            }
            Item::Combat(consumable) => {
                hero.add_consumable(consumable);
                Purchase::Stored
            }
        };
        tracing::info!(hero = %hero.id, item = item.name(), gold_left = hero.gold(), "item purchased");
        Ok(purchase)
    }

    /// Run the shop until the player leaves. A new offer is drawn every time
    /// the counter is shown.
    pub fn open(&self, hero: &mut Hero, input: &mut impl PlayerInput, rng: &mut impl Rng) {
        input.narrate(&GameEvent::ShopOpened);
        loop {
            let offer = self.offer(hero.archetype(), rng);
            let pick = match input.shop_choice(&offer, hero.gold()) {
                ShopChoice::Leave => break,
                ShopChoice::Buy(pick) => pick,
            };

            let event = match offer.get(pick) {
                None => GameEvent::PurchaseFailed(ShopError::InvalidSelection(pick)),
                Some(item) => match Self::purchase(hero, item) {
                    Ok(purchase) => GameEvent::Purchased {
                        item: item.name().to_string(),
                        purchase,
                        gold_left: hero.gold(),
                    },
                    Err(err) => GameEvent::PurchaseFailed(err),
                },
            };
            input.narrate(&event);
        }
        input.narrate(&GameEvent::ShopClosed);
    }
}
