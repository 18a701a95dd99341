//! Risk events: a single choice followed by a single survival roll.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the hero attempts the crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskChoice {
    Slow,
    Fast,
    /// The player answered with something that is neither option. The hero
    /// hesitates and gets through without a death check.
    Hesitate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskOutcome {
    Survived,
    Died,
}

impl RiskOutcome {
    pub fn survived(&self) -> bool {
        matches!(self, RiskOutcome::Survived)
    }
}

/// A dangerous crossing with two ways through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEvent {
    pub transport_name: String,
    pub description: String,
    /// Probability in `[0, 1]` of dying when going slowly.
    pub slow_death_chance: f64,
    /// Probability in `[0, 1]` of dying when going fast.
    pub fast_death_chance: f64,
}

impl RiskEvent {
    pub fn new(
        transport_name: impl Into<String>,
        description: impl Into<String>,
        slow_death_chance: f64,
        fast_death_chance: f64,
    ) -> Self {
        Self {
            transport_name: transport_name.into(),
            description: description.into(),
            slow_death_chance,
            fast_death_chance,
        }
    }

    /// Outcome for a given choice and a roll in `[0, 1)`.
    pub fn outcome_for_roll(&self, choice: RiskChoice, roll: f64) -> RiskOutcome {
        let death_chance = match choice {
            RiskChoice::Slow => self.slow_death_chance,
            RiskChoice::Fast => self.fast_death_chance,
            RiskChoice::Hesitate => return RiskOutcome::Survived,
        };
        if roll < death_chance {
            RiskOutcome::Died
        } else {
            RiskOutcome::Survived
        }
    }

    /// Draw exactly one roll and resolve the crossing.
    pub fn resolve(&self, choice: RiskChoice, rng: &mut impl Rng) -> RiskOutcome {
        let roll: f64 = rng.gen();
        let outcome = self.outcome_for_roll(choice, roll);
        tracing::debug!(
            transport = %self.transport_name,
            ?choice,
            roll,
            ?outcome,
            "risk event resolved"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn horse() -> RiskEvent {
        RiskEvent::new("Horse", "A ravine blocks the way.", 0.10, 0.75)
    }

    #[test]
    fn test_outcome_for_roll() {
        let event = horse();
        assert_eq!(event.outcome_for_roll(RiskChoice::Slow, 0.05), RiskOutcome::Died);
        assert_eq!(event.outcome_for_roll(RiskChoice::Slow, 0.10), RiskOutcome::Survived);
        assert_eq!(event.outcome_for_roll(RiskChoice::Fast, 0.50), RiskOutcome::Died);
        assert_eq!(event.outcome_for_roll(RiskChoice::Fast, 0.80), RiskOutcome::Survived);
    }

    #[test]
    fn test_hesitation_always_survives() {
        let event = RiskEvent::new("Cliff", "Certain doom.", 1.0, 1.0);
        assert_eq!(event.outcome_for_roll(RiskChoice::Hesitate, 0.0), RiskOutcome::Survived);
        assert!(event.resolve(RiskChoice::Hesitate, &mut StepRng::new(0, 0)).survived());
    }

    #[test]
    fn test_resolve_uses_the_rng() {
        let event = horse();
        // A zero draw is below any positive chance.
        let mut low = StepRng::new(0, 0);
        assert_eq!(event.resolve(RiskChoice::Slow, &mut low), RiskOutcome::Died);
        // An all-ones draw is just under 1.0.
        let mut high = StepRng::new(u64::MAX, 0);
        assert_eq!(event.resolve(RiskChoice::Fast, &mut high), RiskOutcome::Survived);
    }
}
