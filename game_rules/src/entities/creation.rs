//! Character creation: difficulty, point-buy and hero blueprints.

use serde::{Deserialize, Serialize};

use super::HeroArchetype;
use crate::error::CreationError;

/// Points spent per point of max health.
pub const HEALTH_POINT_COST: u32 = 1;

/// Points spent per point of strength.
pub const STRENGTH_POINT_COST: u32 = 5;

/// Name used when the player leaves the name blank.
pub const DEFAULT_HERO_NAME: &str = "Hero";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Points available for the health/strength split.
    pub fn points(&self) -> u32 {
        match self {
            Difficulty::Easy => 300,
            Difficulty::Hard => 220,
        }
    }

    pub fn starting_gold(&self) -> u32 {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Hard => 15,
        }
    }
}

/// Automatic distribution presets, by share of points put into health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoStyle {
    Defensive,
    Aggressive,
    Balanced,
}

impl AutoStyle {
    pub fn health_ratio(&self) -> f64 {
        match self {
            AutoStyle::Defensive => 0.55,
            AutoStyle::Aggressive => 0.20,
            AutoStyle::Balanced => 0.35,
        }
    }
}

/// Resolved base stats, before entity clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: u32,
    pub strength: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointAllocation {
    /// Explicit values. Every point has to be spent.
    Manual { health: u32, strength: u32 },
    Auto(AutoStyle),
}

impl PointAllocation {
    pub fn resolve(&self, points: u32) -> Result<BaseStats, CreationError> {
        match *self {
            PointAllocation::Manual { health, strength } => {
                let cost = health
                    .saturating_mul(HEALTH_POINT_COST)
                    .saturating_add(strength.saturating_mul(STRENGTH_POINT_COST));
                if cost > points {
                    return Err(CreationError::Overspent {
                        cost,
                        available: points,
                    });
                }
                if cost < points {
                    return Err(CreationError::Unspent {
                        remaining: points - cost,
                    });
                }
                Ok(BaseStats { health, strength })
            }
            PointAllocation::Auto(style) => {
                let health = ((points as f64 * style.health_ratio()).round() as u32).min(points);
                let remaining = points - health;
                Ok(BaseStats {
                    health: health + remaining % STRENGTH_POINT_COST,
                    strength: remaining / STRENGTH_POINT_COST,
                })
            }
        }
    }
}

/// Incremental, one-point-at-a-time allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointPool {
    remaining: u32,
    health: u32,
    strength: u32,
}

impl PointPool {
    pub fn new(points: u32) -> Self {
        Self {
            remaining: points,
            health: 0,
            strength: 0,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn is_spent(&self) -> bool {
        self.remaining == 0
    }

    pub fn add_health(&mut self) -> Result<(), CreationError> {
        if self.remaining < HEALTH_POINT_COST {
            return Err(CreationError::Overspent {
                cost: HEALTH_POINT_COST,
                available: self.remaining,
            });
        }
        self.remaining -= HEALTH_POINT_COST;
        self.health += 1;
        Ok(())
    }

    pub fn add_strength(&mut self) -> Result<(), CreationError> {
        if self.remaining < STRENGTH_POINT_COST {
            return Err(CreationError::CannotAffordStrength {
                remaining: self.remaining,
                cost: STRENGTH_POINT_COST,
            });
        }
        self.remaining -= STRENGTH_POINT_COST;
        self.strength += 1;
        Ok(())
    }

    /// Turn the pool into a manual allocation once every point is spent.
    pub fn finish(&self) -> Result<PointAllocation, CreationError> {
        if !self.is_spent() {
            return Err(CreationError::Unspent {
                remaining: self.remaining,
            });
        }
        Ok(PointAllocation::Manual {
            health: self.health,
            strength: self.strength,
        })
    }
}

/// Everything the player decides before the run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroBlueprint {
    pub name: String,
    pub archetype: HeroArchetype,
    pub difficulty: Difficulty,
    pub allocation: PointAllocation,
}

impl HeroBlueprint {
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            DEFAULT_HERO_NAME
        } else {
            trimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_budgets() {
        assert_eq!(Difficulty::Easy.points(), 300);
        assert_eq!(Difficulty::Easy.starting_gold(), 20);
        assert_eq!(Difficulty::Hard.points(), 220);
        assert_eq!(Difficulty::Hard.starting_gold(), 15);
    }

    #[test]
    fn test_manual_must_spend_everything() {
        let exact = PointAllocation::Manual {
            health: 250,
            strength: 10,
        };
        assert_eq!(
            exact.resolve(300),
            Ok(BaseStats {
                health: 250,
                strength: 10
            })
        );

        let short = PointAllocation::Manual {
            health: 200,
            strength: 10,
        };
        assert_eq!(
            short.resolve(300),
            Err(CreationError::Unspent { remaining: 50 })
        );

        let over = PointAllocation::Manual {
            health: 290,
            strength: 3,
        };
        assert_eq!(
            over.resolve(300),
            Err(CreationError::Overspent {
                cost: 305,
                available: 300
            })
        );
    }

    #[test]
    fn test_auto_styles() {
        // 300 * 0.35 = 105 health, 195 left -> 39 strength, no leftover
        assert_eq!(
            PointAllocation::Auto(AutoStyle::Balanced).resolve(300),
            Ok(BaseStats {
                health: 105,
                strength: 39
            })
        );
        // 220 * 0.55 = 121 health, 99 left -> 19 strength, 4 back to health
        assert_eq!(
            PointAllocation::Auto(AutoStyle::Defensive).resolve(220),
            Ok(BaseStats {
                health: 125,
                strength: 19
            })
        );
        // 220 * 0.20 = 44 health, 176 left -> 35 strength, 1 back to health
        assert_eq!(
            PointAllocation::Auto(AutoStyle::Aggressive).resolve(220),
            Ok(BaseStats {
                health: 45,
                strength: 35
            })
        );
    }

    #[test]
    fn test_point_pool() {
        let mut pool = PointPool::new(7);
        pool.add_strength().unwrap();
        assert_eq!(
            pool.add_strength(),
            Err(CreationError::CannotAffordStrength {
                remaining: 2,
                cost: 5
            })
        );
        assert!(pool.finish().is_err());
        pool.add_health().unwrap();
        pool.add_health().unwrap();
        assert!(pool.add_health().is_err());
        assert_eq!(
            pool.finish(),
            Ok(PointAllocation::Manual {
                health: 2,
                strength: 1
            })
        );
    }

    #[test]
    fn test_blank_name_defaults() {
        let blueprint = HeroBlueprint {
            name: "   ".into(),
            archetype: HeroArchetype::Courier,
            difficulty: Difficulty::Hard,
            allocation: PointAllocation::Auto(AutoStyle::Balanced),
        };
        assert_eq!(blueprint.display_name(), DEFAULT_HERO_NAME);
    }
}
