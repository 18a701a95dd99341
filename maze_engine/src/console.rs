//! Terminal front end: numbered menus on a reader, narration on a writer.
//!
//! Malformed answers are re-prompted here. If the reader runs dry, every
//! prompt falls back to the most passive answer so the run still ends.

use std::io::{BufRead, Write};

use game_rules::{
    AutoStyle, CombatAction, CombatConsumable, CombatEvent, CombatInput, Difficulty, Hero,
    HeroArchetype, HeroBlueprint, Item, Npc, PointAllocation, PointPool, Potion, RiskChoice,
    RiskEvent, RiskOutcome,
};
use maze_engine::{DeathChoice, GameEvent, PlayerInput, Purchase, RewardChoice, ShopChoice};
use strum::IntoEnumIterator;

pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    quiet: bool,
    closed: bool,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W, quiet: bool) -> Self {
        Self {
            reader,
            writer,
            quiet,
            closed: false,
        }
    }

    fn say(&mut self, text: impl std::fmt::Display) {
        // Nothing useful to do if the terminal is gone.
        let _ = writeln!(self.writer, "{}", text);
    }

    /// Next trimmed line, or `None` once input is exhausted.
    fn line(&mut self, prompt: &str) -> Option<String> {
        if self.closed {
            return None;
        }
        let _ = write!(self.writer, "{} ", prompt);
        let _ = self.writer.flush();

        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) | Err(_) => {
                tracing::warn!("input closed, falling back to default answers");
                self.closed = true;
                None
            }
            Ok(_) => Some(buf.trim().to_string()),
        }
    }

    /// A non-negative number, asked again until one is given.
    fn number(&mut self, prompt: &str) -> Option<usize> {
        loop {
            let answer = self.line(prompt)?;
            match answer.parse() {
                Ok(n) => return Some(n),
                Err(_) => self.say("Please type a number."),
            }
        }
    }

    /// Like [`Self::number`], limited to what fits in a stat.
    fn points(&mut self, prompt: &str) -> Option<u32> {
        loop {
            let n = self.number(prompt)?;
            match u32::try_from(n) {
                Ok(points) => return Some(points),
                Err(_) => self.say("That is far more than you have."),
            }
        }
    }

    /// Show `options` as a 1-based menu and return the 0-based pick.
    fn menu(&mut self, title: &str, options: &[String]) -> Option<usize> {
        self.say(title);
        for (i, option) in options.iter().enumerate() {
            self.say(format!("  {}) {}", i + 1, option));
        }
        loop {
            let n = self.number(">")?;
            if (1..=options.len()).contains(&n) {
                return Some(n - 1);
            }
            self.say("Invalid option.");
        }
    }

    fn allocation(&mut self, points: u32) -> Option<PointAllocation> {
        let modes = [
            "Manual (type the values)".to_string(),
            "Incremental (one point at a time)".to_string(),
            "Automatic".to_string(),
        ];
        match self.menu("How do you want to spend your points?", &modes)? {
            0 => loop {
                self.say(format!("{} points. Health costs 1, strength costs 5.", points));
                let health = self.points("Points into health:")?;
                let strength = self.points("Strength to buy:")?;
                let allocation = PointAllocation::Manual { health, strength };
                match allocation.resolve(points) {
                    Ok(_) => return Some(allocation),
                    Err(err) => self.say(format!("{}. Every point has to be spent.", err)),
                }
            },
            1 => {
                let mut pool = PointPool::new(points);
                while !pool.is_spent() {
                    let options = ["+1 health".to_string(), "+1 strength".to_string()];
                    let title = format!(
                        "{} points left | Health: {} | Strength: {}",
                        pool.remaining(),
                        pool.health(),
                        pool.strength()
                    );
                    let step = match self.menu(&title, &options)? {
                        0 => pool.add_health(),
                        _ => pool.add_strength(),
                    };
                    if let Err(err) = step {
                        self.say(err);
                    }
                }
                pool.finish().ok()
            }
            _ => {
                let styles = [
                    "Defensive (more health)".to_string(),
                    "Aggressive (more strength)".to_string(),
                    "Balanced".to_string(),
                ];
                let style = match self.menu("Pick a style:", &styles)? {
                    0 => AutoStyle::Defensive,
                    1 => AutoStyle::Aggressive,
                    _ => AutoStyle::Balanced,
                };
                Some(PointAllocation::Auto(style))
            }
        }
    }

    fn blueprint(&mut self) -> Option<HeroBlueprint> {
        let archetypes: Vec<HeroArchetype> = HeroArchetype::iter().collect();
        let names: Vec<String> = archetypes.iter().map(ToString::to_string).collect();
        let archetype = archetypes[self.menu("Who are you?", &names)?];

        let difficulties = [Difficulty::Easy, Difficulty::Hard];
        let labels: Vec<String> = difficulties
            .iter()
            .map(|d| format!("{:?} ({} points, {} gold)", d, d.points(), d.starting_gold()))
            .collect();
        let difficulty = difficulties[self.menu("Difficulty:", &labels)?];

        let allocation = self.allocation(difficulty.points())?;
        let name = self.line("Your name:")?;
        Some(HeroBlueprint {
            name,
            archetype,
            difficulty,
            allocation,
        })
    }
}

impl<R: BufRead, W: Write> CombatInput for ConsoleInput<R, W> {
    fn choose_action(&mut self, _hero: &Hero, _enemy: &Npc) -> CombatAction {
        let options = [
            "Normal attack".to_string(),
            "Special attack".to_string(),
            "Use a combat item".to_string(),
        ];
        match self.menu("Your move:", &options) {
            Some(1) => CombatAction::Special,
            Some(2) => CombatAction::Consumable,
            _ => CombatAction::Normal,
        }
    }

    fn choose_consumable(&mut self, options: &[&CombatConsumable]) -> Option<usize> {
        let mut labels: Vec<String> = options
            .iter()
            .map(|c| format!("{} ({} damage)", c.meta.name, c.instant_attack))
            .collect();
        labels.push("Back".to_string());
        self.menu("Throw what?", &labels)
            .filter(|&pick| pick < options.len())
    }

    fn observe(&mut self, event: &CombatEvent) {
        match event {
            CombatEvent::Started { enemy } => self.say(format!("\n=== Fight: {} ===", enemy)),
            CombatEvent::RoundBegins {
                hero_health,
                hero_max_health,
                enemy_health,
                enemy_max_health,
            } => self.say(format!(
                "You: {}/{} HP | Enemy: {}/{} HP",
                hero_health, hero_max_health, enemy_health, enemy_max_health
            )),
            CombatEvent::Rejected(err) => self.say(format!("Can't do that: {}.", err)),
            CombatEvent::NormalAttack { damage } => {
                self.say(format!("You strike for {} damage.", damage))
            }
            CombatEvent::SpecialAttack { damage, line } => {
                self.say(format!("\"{}\" Special attack for {} damage!", line, damage))
            }
            CombatEvent::ConsumableUsed { item, damage } => {
                self.say(format!("You throw the {}: {} damage.", item, damage))
            }
            CombatEvent::EnemyAttack {
                enemy,
                damage,
                weak_point,
            } => match weak_point {
                Some(point) => self.say(format!(
                    "{} hits your {} for {} damage! {}",
                    enemy,
                    point,
                    damage,
                    point.hit_phrase()
                )),
                None => self.say(format!("{} hits you for {} damage.", enemy, damage)),
            },
            CombatEvent::Victory { gold, level_up } => self.say(format!(
                "Victory! +{} gold. Level {}: max health {}, strength {}.",
                gold, level_up.level, level_up.max_health, level_up.strength
            )),
            CombatEvent::Defeat => self.say("You fall..."),
        }
    }
}

impl<R: BufRead, W: Write> PlayerInput for ConsoleInput<R, W> {
    fn create_hero(&mut self) -> HeroBlueprint {
        self.blueprint().unwrap_or(HeroBlueprint {
            name: String::new(),
            archetype: HeroArchetype::Nurse,
            difficulty: Difficulty::Easy,
            allocation: PointAllocation::Auto(AutoStyle::Balanced),
        })
    }

    fn risk_choice(&mut self, _event: &RiskEvent) -> RiskChoice {
        self.say("  1) Go slowly\n  2) Go fast");
        match self.line(">").as_deref() {
            Some("1") => RiskChoice::Slow,
            Some("2") => RiskChoice::Fast,
            _ => RiskChoice::Hesitate,
        }
    }

    fn reward_choice(&mut self, reward: &Potion) -> RewardChoice {
        let options = ["Use it now".to_string(), "Keep it".to_string()];
        let title = format!(
            "{} (heal {}, +{} strength)",
            reward.meta.name, reward.heal_amount, reward.strength_boost
        );
        match self.menu(&title, &options) {
            Some(0) => RewardChoice::UseNow,
            _ => RewardChoice::Keep,
        }
    }

    fn shop_choice(&mut self, offer: &[Item], gold: u32) -> ShopChoice {
        self.say(format!("\nGold: {}", gold));
        for (i, item) in offer.iter().enumerate() {
            self.say(format!("  {}) {}", i + 1, item));
        }
        self.say("  0) Leave");
        match self.number(">") {
            None | Some(0) => ShopChoice::Leave,
            Some(n) => ShopChoice::Buy(n - 1),
        }
    }

    fn heal_choice(&mut self, hero: &Hero, potions: &[&Potion]) -> Option<usize> {
        let title = format!(
            "Health {}/{}. Drink something before moving on?",
            hero.current_health(),
            hero.max_health()
        );
        let mut labels: Vec<String> = potions
            .iter()
            .map(|p| {
                format!(
                    "{} (heal {}, +{} strength)",
                    p.meta.name, p.heal_amount, p.strength_boost
                )
            })
            .collect();
        labels.push("Move on".to_string());
        self.menu(&title, &labels).filter(|&pick| pick < potions.len())
    }

    fn confirm_overheal(&mut self, potion: &Potion, wasted: u32) -> bool {
        let options = ["Drink anyway".to_string(), "Keep it".to_string()];
        let title = format!("{} would waste {} healing.", potion.meta.name, wasted);
        self.menu(&title, &options) == Some(0)
    }

    fn exit_choice(&mut self, exits: &[String]) -> usize {
        self.say("Where to?");
        for (i, exit) in exits.iter().enumerate() {
            self.say(format!("  {}) {}", i + 1, exit));
        }
        self.number(">")
            .and_then(|n| n.checked_sub(1))
            .unwrap_or(exits.len())
    }

    fn death_choice(&mut self) -> DeathChoice {
        let options = [
            "Try again with the same hero".to_string(),
            "Start over with a new hero".to_string(),
            "Quit".to_string(),
        ];
        match self.menu("You died.", &options) {
            Some(0) => DeathChoice::RetrySameHero,
            Some(1) => DeathChoice::NewHero,
            _ => DeathChoice::Quit,
        }
    }

    fn wants_to_quit(&self) -> bool {
        self.closed
    }

    fn narrate(&mut self, event: &GameEvent) {
        match event {
            GameEvent::HeroIntroduced {
                name,
                archetype,
                weak_point,
            } => {
                if !self.quiet {
                    self.say(format!("\n{}", archetype.profile().intro_text));
                }
                self.say(format!("{}, your weak point is your {}.", name, weak_point));
            }
            GameEvent::CreationRejected(err) => self.say(format!("That hero won't do: {}.", err)),
            GameEvent::RoomEntered { room } => self.say(format!("\n--- {} ---", room)),
            GameEvent::RoomAlreadyCleared { .. } => self.say("Nothing left here."),
            GameEvent::RoomEmpty { .. } => self.say("The room is quiet."),
            GameEvent::AllySpeaks { ally, line } if !self.quiet => {
                self.say(format!("{}: \"{}\"", ally, line))
            }
            GameEvent::EnemySpeaks { enemy, line } if !self.quiet => {
                self.say(format!("{}: \"{}\"", enemy, line))
            }
            GameEvent::AllySpeaks { .. } | GameEvent::EnemySpeaks { .. } => {}
            GameEvent::RiskStarted {
                transport,
                description,
            } => self.say(format!("[{}] {}", transport, description)),
            GameEvent::RiskResolved { choice, outcome } => match (choice, outcome) {
                (RiskChoice::Hesitate, _) => self.say("You hesitate... and somehow get across."),
                (_, RiskOutcome::Survived) => self.say("You make it across."),
                (_, RiskOutcome::Died) => self.say("The crossing takes you."),
            },
            GameEvent::ShopOpened => self.say("The merchant spreads out the wares."),
            GameEvent::Purchased {
                item,
                purchase,
                gold_left,
            } => match purchase {
                Purchase::Equipped {
                    replaced: Some(old),
                } => self.say(format!(
                    "You equip the {} in place of the {}. {} gold left.",
                    item, old, gold_left
                )),
                Purchase::Equipped { replaced: None } => {
                    self.say(format!("You equip the {}. {} gold left.", item, gold_left))
                }
                Purchase::Stored => {
                    self.say(format!("{} added to your bag. {} gold left.", item, gold_left))
                }
            },
            GameEvent::PurchaseFailed(err) => self.say(format!("No sale: {}.", err)),
            GameEvent::ShopClosed => self.say("You leave the shop."),
            GameEvent::RewardFound { potion } => self.say(format!("You found: {}", potion)),
            GameEvent::RewardUsed { potion, effect } | GameEvent::PotionDrunk { potion, effect } => {
                self.say(format!(
                    "You drink the {}: +{} health, +{} strength.",
                    potion, effect.healed, effect.strength_gained
                ))
            }
            GameEvent::RewardStored { potion } => self.say(format!("{} stored.", potion)),
            GameEvent::NoPotions => self.say("You have no potions."),
            GameEvent::PotionKept { potion } => self.say(format!("You keep the {}.", potion)),
            GameEvent::InvalidPotionChoice(_) => self.say("Invalid potion."),
            GameEvent::InvalidExit { .. } => self.say("There is no such way. You stay put."),
            GameEvent::Travelled { to, .. } => self.say(format!("You head to {}.", to)),
            GameEvent::HeroDied { room } => self.say(format!("You died in {}.", room)),
            GameEvent::RetryingSameHero => self.say("You wake up at the entrance, fully healed."),
            GameEvent::StartingOver => self.say("A new hero steps forward."),
            GameEvent::Victory { hero } => {
                self.say(format!("\n{} defeats the final enemy. The cure is yours.", hero))
            }
            GameEvent::RunAbandoned => self.say("Farewell."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_rules::{ItemMeta, WeakPoint};
    use maze_engine::{Game, MazeConfig, RunOutcome};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn console(script: &str) -> ConsoleInput<&[u8], Vec<u8>> {
        ConsoleInput::new(script.as_bytes(), Vec::new(), true)
    }

    #[test]
    fn test_menu_reprompts_on_garbage() {
        let mut input = console("abc\n9\n2\n");
        let options = ["a".to_string(), "b".to_string()];
        assert_eq!(input.menu("Pick", &options), Some(1));
    }

    #[test]
    fn test_closed_input_uses_passive_defaults() {
        let mut input = console("");
        assert_eq!(input.death_choice(), DeathChoice::Quit);
        assert_eq!(input.shop_choice(&[], 10), ShopChoice::Leave);
        assert_eq!(
            input.risk_choice(&RiskEvent::new("Raft", "Rapids.", 0.1, 0.7)),
            RiskChoice::Hesitate
        );
        assert_eq!(input.create_hero().difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_unrecognised_risk_answer_hesitates() {
        let mut input = console("maybe\n");
        assert_eq!(
            input.risk_choice(&RiskEvent::new("Raft", "Rapids.", 0.1, 0.7)),
            RiskChoice::Hesitate
        );
    }

    #[test]
    fn test_exit_choice_passes_out_of_range_through() {
        let mut input = console("5\n0\n");
        let exits = ["A".to_string(), "B".to_string()];
        assert_eq!(input.exit_choice(&exits), 4);
        assert_eq!(input.exit_choice(&exits), 2);
    }

    #[test]
    fn test_manual_blueprint_reasks_until_spent() {
        // Teacher, Hard (220 points), manual: 100/0 is rejected, 200/4 fits.
        let mut input = console("3\n2\n1\n100\n0\n200\n4\nMara\n");
        let blueprint = input.create_hero();
        assert_eq!(blueprint.archetype, HeroArchetype::Teacher);
        assert_eq!(blueprint.difficulty, Difficulty::Hard);
        assert_eq!(
            blueprint.allocation,
            PointAllocation::Manual {
                health: 200,
                strength: 4
            }
        );
        assert_eq!(blueprint.name, "Mara");
    }

    #[test]
    fn test_manual_blueprint_rejects_oversized_points() {
        // 2^32 + 300 would wrap to 300 and pass the Easy budget.
        let mut input = console("1\n1\n1\n4294967596\n200\n20\nMara\n");
        let blueprint = input.create_hero();
        assert_eq!(
            blueprint.allocation,
            PointAllocation::Manual {
                health: 200,
                strength: 20
            }
        );
        assert!(String::from_utf8(input.writer)
            .unwrap()
            .contains("far more than you have"));
    }

    #[test]
    fn test_closed_input_ends_run() {
        let config = MazeConfig::default_maze().unwrap();
        let hero = Hero::new("Ana", HeroArchetype::Nurse, 100, 10, 20, WeakPoint::Head);
        let mut game = Game::new(config, hero).unwrap();
        let mut input = console("");

        let outcome = game.run(&mut input, &mut StdRng::seed_from_u64(1));

        assert_eq!(outcome.unwrap(), RunOutcome::Abandoned);
        assert!(input.wants_to_quit());
        assert_eq!(game.current_room(), "Labyrinth Entrance");
    }

    #[test]
    fn test_consumable_back_cancels() {
        let bomb = CombatConsumable::new(ItemMeta::new("Damage Bomb", 18), 25);
        let mut input = console("2\n");
        assert_eq!(input.choose_consumable(&[&bomb]), None);
    }
}
