//! The out-of-battle game loop.
//!
//! [`App`] reads commands, dispatches them against the [`Session`] and hands
//! fights to the [`BattleRunner`]. Every recoverable failure is narrated and
//! the player is prompted again; only input and engine failures end the loop.
use std::str::FromStr;

use game_content::{ItemCatalog, ShopCatalog, ShopEntry, ShopStock};
use game_core::{BattleOutcome, RngSource, SkillKind};
use runtime::{
    BattleRunner, BattleSetup, CommandProvider, Encounter, EncounterSelector, ItemError,
    NarrativeSink, PromptKind, Purchase, Result, RuntimeError, SaveRepository, Session, ShopError,
    ShopkeeperGreeting, Tone, apply_level_up, buy, equip, open_treasure, parse_choice,
    spend_skill_point, use_item,
};

use crate::commands::{Command, HELP};
use crate::content::Content;

/// Whether the main loop keeps going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

enum Found {
    Fight(BattleSetup),
    Treasure,
    Shopkeeper,
}

pub struct App {
    session: Session,
    runner: BattleRunner,
    selector: EncounterSelector,
    items: ItemCatalog,
    shop: ShopCatalog,
    repo: Box<dyn SaveRepository>,
    input: Box<dyn CommandProvider>,
    sink: Box<dyn NarrativeSink>,
    rng: Box<dyn RngSource>,
}

impl App {
    pub fn new(
        session: Session,
        content: Content,
        repo: Box<dyn SaveRepository>,
        input: Box<dyn CommandProvider>,
        sink: Box<dyn NarrativeSink>,
        rng: Box<dyn RngSource>,
    ) -> Self {
        Self {
            runner: BattleRunner::new(content.config, content.items.clone()),
            selector: EncounterSelector::new(content.bestiary, content.roster),
            items: content.items,
            shop: content.shop,
            session,
            repo,
            input,
            sink,
            rng,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Resumes the session's own slot when a save exists for it.
    pub fn resume(&mut self) {
        let slot = self.session.session_id().to_string();
        if !self.repo.exists(&slot) {
            return;
        }
        self.load(Some(slot));
    }

    /// Reads and dispatches commands until the player quits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        self.sink.emit(Tone::Banner, "Welcome to Doodle!");
        self.sink.emit(Tone::Info, "Type 'help' for a list of commands.");

        loop {
            let Some(line) = self.input.read_line(PromptKind::Command).await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    self.sink.emit(Tone::Warning, &err.to_string());
                    continue;
                }
            };

            let flow = match self.dispatch(command).await {
                Ok(flow) => flow,
                Err(RuntimeError::InputClosed) => {
                    tracing::info!("input closed mid-command");
                    break;
                }
                Err(err) => return Err(err),
            };
            self.autosave();
            if flow == Flow::Quit {
                break;
            }
        }

        self.sink.emit(Tone::Info, "Farewell, adventurer.");
        Ok(())
    }

    pub async fn dispatch(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(?command, "dispatch");
        match command {
            Command::Explore => self.explore().await?,
            Command::Status => self.status(),
            Command::Shop => {
                let level = self.session.sheet().level;
                let stock: Vec<ShopEntry> = self
                    .shop
                    .available_for_level(level)
                    .into_iter()
                    .cloned()
                    .collect();
                self.sink.emit(Tone::Banner, "Welcome to the shop!");
                self.purchase(&stock).await?;
            }
            Command::UseItem => self.use_item().await?,
            Command::Equip => self.equip().await?,
            Command::Save(slot) => {
                let slot = self.slot_or_prompt(slot).await?;
                match self.session.save(self.repo.as_ref(), &slot) {
                    Ok(()) => self
                        .sink
                        .emit(Tone::Success, &format!("Game saved to '{slot}'.")),
                    Err(err) => self
                        .sink
                        .emit(Tone::Danger, &format!("Could not save: {err}")),
                }
            }
            Command::Load(slot) => {
                let slot = self.slot_or_prompt(slot).await?;
                self.load(Some(slot));
            }
            Command::Autosave(enabled) => {
                let enabled = enabled.unwrap_or(!self.session.autosave_enabled());
                self.session.set_autosave(enabled);
                let state = if enabled { "on" } else { "off" };
                self.sink
                    .emit(Tone::Info, &format!("Autosave is now {state}."));
            }
            Command::Help => {
                for (usage, description) in HELP {
                    self.sink
                        .emit(Tone::Info, &format!(" {usage:<18} {description}"));
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn explore(&mut self) -> Result<()> {
        let found = match self.selector.roll(self.session.sheet(), self.rng.as_mut()) {
            Encounter::Monster(template) => Found::Fight(BattleSetup::monster(
                template,
                self.runner.config(),
            )),
            Encounter::Boss(boss) => Found::Fight(BattleSetup::boss(boss)),
            Encounter::Treasure => Found::Treasure,
            Encounter::Shopkeeper => Found::Shopkeeper,
        };

        match found {
            Found::Fight(setup) => self.fight(setup).await,
            Found::Treasure => {
                let gold = open_treasure(
                    self.session.sheet_mut(),
                    self.runner.config(),
                    self.rng.as_mut(),
                );
                self.sink.emit(
                    Tone::Success,
                    &format!("You found a treasure chest with {gold} gold!"),
                );
                Ok(())
            }
            Found::Shopkeeper => self.shopkeeper().await,
        }
    }

    async fn fight(&mut self, setup: BattleSetup) -> Result<()> {
        let report = self
            .runner
            .run(
                setup,
                self.session.sheet_mut(),
                self.input.as_ref(),
                self.sink.as_ref(),
                self.rng.as_mut(),
            )
            .await?;

        match report.outcome {
            BattleOutcome::Victory => self.level_up().await,
            BattleOutcome::Fled => {
                self.sink.emit(Tone::Info, "You live to fight another day.");
                Ok(())
            }
            BattleOutcome::Defeat => {
                let sheet = self.session.sheet();
                self.sink.emit(
                    Tone::Danger,
                    &format!(
                        "You wake up back in town at level {} with {} gold.",
                        sheet.level, sheet.gold
                    ),
                );
                Ok(())
            }
        }
    }

    /// Applies pending levels, then asks where each unspent skill point goes.
    async fn level_up(&mut self) -> Result<()> {
        let gained = apply_level_up(self.session.sheet_mut(), self.runner.config());
        if gained > 0 {
            let sheet = self.session.sheet();
            self.sink.emit(
                Tone::Banner,
                &format!(
                    "LEVEL UP! You are now level {} with {} max HP.",
                    sheet.level, sheet.max_hp
                ),
            );
        }

        while self.session.sheet().skill_points > 0 {
            self.sink.emit(
                Tone::Info,
                &format!(
                    "You have {} skill point(s). Which skill will you train?",
                    self.session.sheet().skill_points
                ),
            );
            let line = self.input.require_line(PromptKind::SkillChoice).await?;
            let Ok(kind) = SkillKind::from_str(line.trim()) else {
                self.sink
                    .emit(Tone::Warning, &format!("'{}' is not a skill.", line.trim()));
                continue;
            };
            if let Some(value) = spend_skill_point(self.session.sheet_mut(), kind) {
                self.sink
                    .emit(Tone::Success, &format!("Your {kind} is now {value}."));
            }
        }
        Ok(())
    }

    async fn shopkeeper(&mut self) -> Result<()> {
        match self.session.shopkeeper_visit() {
            ShopkeeperGreeting::Introduction => {
                self.sink.emit(Tone::Banner, "A traveling shopkeeper blocks the road.");
                self.sink.emit(
                    Tone::Warning,
                    "\"I see you're a traveler. What brings you here?\"",
                );
                self.sink.emit(
                    Tone::Success,
                    "\"I'm LaDoodle. I carry things no ordinary shop would dare to sell.\"",
                );
            }
            ShopkeeperGreeting::Returning => {
                self.sink
                    .emit(Tone::Success, "\"You again! Take a look, friend.\"");
            }
        }
        let specials = ShopCatalog::shopkeeper_specials(self.session.sheet().level);
        self.purchase(&specials).await
    }

    async fn purchase(&mut self, stock: &[ShopEntry]) -> Result<()> {
        for (idx, entry) in stock.iter().enumerate() {
            self.sink.emit(
                Tone::Info,
                &format!(" {}. {}: {} gold", idx + 1, entry.name, entry.cost),
            );
        }
        self.sink.emit(
            Tone::Warning,
            &format!("Gold: {}", self.session.sheet().gold),
        );

        let line = self.input.require_line(PromptKind::ShopIndex).await?;
        if line.trim().is_empty() {
            self.sink.emit(Tone::Info, "Come back soon.");
            return Ok(());
        }
        let Some(index) = parse_choice(&line) else {
            let err = ShopError::NotANumber(line.trim().to_string());
            self.sink.emit(Tone::Danger, &err.to_string());
            return Ok(());
        };

        let wants_count = index
            .checked_sub(1)
            .and_then(|i| stock.get(i))
            .is_some_and(|entry| entry.stock == ShopStock::Item);
        let count = if wants_count {
            let line = self.input.require_line(PromptKind::Quantity).await?;
            match line.trim().parse::<u32>() {
                Ok(count) => count,
                Err(_) => {
                    let err = ShopError::NotANumber(line.trim().to_string());
                    self.sink.emit(Tone::Danger, &err.to_string());
                    return Ok(());
                }
            }
        } else {
            1
        };

        let entries: Vec<&ShopEntry> = stock.iter().collect();
        match buy(self.session.sheet_mut(), &entries, index, count) {
            Ok(Purchase::Weapon(name)) => {
                self.sink.emit(Tone::Success, &format!("You bought the {name}!"))
            }
            Ok(Purchase::Items { name, count }) => self
                .sink
                .emit(Tone::Success, &format!("You bought {count} x {name}.")),
            Ok(Purchase::Level(level)) => self
                .sink
                .emit(Tone::Success, &format!("You have leveled up to level {level}!")),
            Ok(Purchase::Nothing) => self.sink.emit(Tone::Info, "You buy nothing."),
            Err(err) => self.sink.emit(Tone::Danger, &err.to_string()),
        }
        Ok(())
    }

    async fn use_item(&mut self) -> Result<()> {
        let counts = self.session.sheet().item_counts();
        if counts.is_empty() {
            self.sink
                .emit(Tone::Danger, &ItemError::EmptyInventory.to_string());
            return Ok(());
        }
        for (idx, (item, count)) in counts.iter().enumerate() {
            self.sink
                .emit(Tone::Info, &format!(" {}. {item} x{count}", idx + 1));
        }

        let line = self.input.require_line(PromptKind::ItemIndex).await?;
        let Some(index) = parse_choice(&line) else {
            let err = ItemError::NotANumber(line.trim().to_string());
            self.sink.emit(Tone::Danger, &err.to_string());
            return Ok(());
        };
        match use_item(self.session.sheet_mut(), &self.items, index) {
            Ok(outcome) => self.sink.emit(Tone::Success, &outcome.to_string()),
            Err(err) => self.sink.emit(Tone::Danger, &err.to_string()),
        }
        Ok(())
    }

    async fn equip(&mut self) -> Result<()> {
        let sheet = self.session.sheet();
        for (idx, weapon) in sheet.weapons.iter().enumerate() {
            let marker = if idx == sheet.equipped { "*" } else { " " };
            self.sink
                .emit(Tone::Info, &format!("{marker}{}. {weapon}", idx + 1));
        }

        let line = self.input.require_line(PromptKind::WeaponIndex).await?;
        let Some(index) = parse_choice(&line) else {
            let err = ItemError::NotANumber(line.trim().to_string());
            self.sink.emit(Tone::Danger, &err.to_string());
            return Ok(());
        };
        match equip(self.session.sheet_mut(), index) {
            Ok(weapon) => {
                let text = format!("You equip the {weapon}.");
                self.sink.emit(Tone::Success, &text);
            }
            Err(err) => self.sink.emit(Tone::Danger, &err.to_string()),
        }
        Ok(())
    }

    fn status(&self) {
        let sheet = self.session.sheet();
        let lines = [
            format!("Level {} | XP {}", sheet.level, sheet.xp),
            format!("HP {}/{} | Gold {}", sheet.hp, sheet.max_hp, sheet.gold),
            match sheet.equipped_weapon() {
                Some(weapon) => format!("Wielding {weapon}"),
                None => "Wielding nothing".to_string(),
            },
            sheet
                .skills
                .iter()
                .map(|(kind, value)| format!("{kind} {value}"))
                .collect::<Vec<_>>()
                .join(" | "),
        ];
        for line in &lines {
            self.sink.emit(Tone::Status, line);
        }
        if sheet.skill_points > 0 {
            self.sink.emit(
                Tone::Info,
                &format!("Unspent skill points: {}", sheet.skill_points),
            );
        }
        for (item, count) in sheet.item_counts() {
            self.sink.emit(Tone::Info, &format!(" - {item} x{count}"));
        }
    }

    async fn slot_or_prompt(&self, slot: Option<String>) -> Result<String> {
        let slot = match slot {
            Some(slot) => slot,
            None => self.input.require_line(PromptKind::SlotName).await?,
        };
        let slot = slot.trim();
        Ok(if slot.is_empty() {
            self.session.session_id().to_string()
        } else {
            slot.to_string()
        })
    }

    fn load(&mut self, slot: Option<String>) {
        let slot = slot.unwrap_or_else(|| self.session.session_id().to_string());
        match self.session.load_repaired(self.repo.as_ref(), &slot) {
            Ok(None) => self
                .sink
                .emit(Tone::Warning, &format!("No save named '{slot}'.")),
            Ok(Some(report)) => {
                for fix in &report.fixes {
                    self.sink
                        .emit(Tone::Warning, &format!("Save repaired: {fix}"));
                }
                let level = self.session.sheet().level;
                self.sink.emit(
                    Tone::Success,
                    &format!("Loaded '{slot}' at level {level}."),
                );
            }
            Err(err) => self
                .sink
                .emit(Tone::Danger, &format!("Could not load '{slot}': {err}")),
        }
    }

    fn autosave(&self) {
        match self.session.autosave(self.repo.as_ref()) {
            Ok(saved) => tracing::debug!(saved, "autosave check"),
            Err(err) => self
                .sink
                .emit(Tone::Danger, &format!("Autosave failed: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, ScriptedRng, Weapon};
    use runtime::{InMemorySaveRepository, MemorySink, ScriptedCommandProvider};
    use std::sync::Arc;

    /// Forwards to a shared sink so the test can read it after the app ran.
    struct SharedSink(Arc<MemorySink>);

    impl NarrativeSink for SharedSink {
        fn emit(&self, tone: Tone, text: &str) {
            self.0.emit(tone, text);
        }
    }

    fn app_with(
        session: Session,
        lines: &[&str],
        rng: ScriptedRng,
    ) -> (App, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let app = App::new(
            session,
            Content::default(),
            Box::new(InMemorySaveRepository::new()),
            Box::new(ScriptedCommandProvider::new(lines.iter().copied())),
            Box::new(SharedSink(sink.clone())),
            Box::new(rng),
        );
        (app, sink)
    }

    #[tokio::test]
    async fn treasure_from_exploring() {
        let session = Session::new("hero", GameConfig::default());
        // Roll 90 is treasure at level 1; the chest holds 50 + 10.
        let (mut app, sink) = app_with(session, &["explore", "quit"], ScriptedRng::new().with_ints([90, 50]));
        app.run().await.unwrap();
        assert_eq!(app.session().sheet().gold, 60);
        assert!(sink.contains("60 gold"));
        assert!(sink.contains("Farewell"));
    }

    #[tokio::test]
    async fn shopkeeper_introduces_itself_then_sells_a_level() {
        let mut sheet = game_core::CharacterSheet::new_game();
        sheet.gold = 1000;
        let session = Session::with_sheet("hero", GameConfig::default(), sheet);
        // Roll 99 is the shopkeeper twice; the third special is Level Up for 300.
        let (mut app, sink) = app_with(
            session,
            &["explore", "3", "explore", ""],
            ScriptedRng::new().with_ints([99, 99]),
        );
        app.run().await.unwrap();

        assert_eq!(app.session().shopkeeper_visits(), 2);
        assert_eq!(app.session().sheet().level, 2);
        assert_eq!(app.session().sheet().gold, 700);
        assert!(sink.contains("LaDoodle"));
        assert!(sink.contains("You again"));
        assert!(sink.contains("level 2"));
    }

    #[tokio::test]
    async fn bad_choices_are_recoverable() {
        let session = Session::new("hero", GameConfig::default());
        let (mut app, sink) = app_with(
            session,
            &["dance", "use", "equip", "5", "shop", "9", "shop", "1", "two"],
            ScriptedRng::new(),
        );
        app.run().await.unwrap();

        assert!(sink.contains("unknown command 'dance'"));
        assert!(sink.contains("anything to use"));
        assert!(sink.contains("pick a number from 1 to 1"));
        assert!(sink.contains("pick a number from 1 to 2"));
        assert!(sink.contains("\"two\" is not a number"));
        assert_eq!(app.session().sheet(), &game_core::CharacterSheet::new_game());
    }

    #[tokio::test]
    async fn buying_and_using_a_potion() {
        let mut sheet = game_core::CharacterSheet::new_game();
        sheet.gold = 50;
        sheet.hp = 50;
        let session = Session::with_sheet("hero", GameConfig::default(), sheet);
        let (mut app, sink) = app_with(
            session,
            &["shop", "1", "2", "use", "1", "status"],
            ScriptedRng::new(),
        );
        app.run().await.unwrap();

        let sheet = app.session().sheet();
        assert_eq!(sheet.gold, 10);
        assert_eq!(sheet.hp, 70);
        assert_eq!(sheet.item_counts(), vec![("Small Health Potion".to_string(), 1)]);
        assert!(sink.contains("You bought 2 x Small Health Potion"));
        assert!(sink.contains("HP 70/100"));
    }

    #[tokio::test]
    async fn equip_switches_weapons() {
        let mut sheet = game_core::CharacterSheet::new_game();
        sheet.weapons.push(Weapon::new("Stone Axe", 20, 40).unwrap());
        let session = Session::with_sheet("hero", GameConfig::default(), sheet);
        let (mut app, sink) = app_with(session, &["equip", "2"], ScriptedRng::new());
        app.run().await.unwrap();
        assert_eq!(app.session().sheet().equipped, 1);
        assert!(sink.contains("You equip the Stone Axe"));
    }

    #[tokio::test]
    async fn autosave_follows_every_command() {
        let session = Session::new("hero", GameConfig::default());
        let sink = Arc::new(MemorySink::new());
        let repo = Arc::new(InMemorySaveRepository::new());

        struct SharedRepo(Arc<InMemorySaveRepository>);
        impl SaveRepository for SharedRepo {
            fn save(&self, slot: &str, save: &runtime::SaveFile) -> runtime::repository::Result<()> {
                self.0.save(slot, save)
            }
            fn load_unchecked(
                &self,
                slot: &str,
            ) -> runtime::repository::Result<Option<runtime::SaveFile>> {
                self.0.load_unchecked(slot)
            }
            fn exists(&self, slot: &str) -> bool {
                self.0.exists(slot)
            }
            fn delete(&self, slot: &str) -> runtime::repository::Result<()> {
                self.0.delete(slot)
            }
        }

        let mut app = App::new(
            session,
            Content::default(),
            Box::new(SharedRepo(repo.clone())),
            Box::new(ScriptedCommandProvider::new(["autosave on", "explore"])),
            Box::new(SharedSink(sink.clone())),
            Box::new(ScriptedRng::new().with_ints([90, 40])),
        );
        app.run().await.unwrap();

        let saved = repo.load("hero").unwrap().unwrap();
        assert!(saved.autosave);
        assert_eq!(saved.sheet.gold, 50);
    }

    #[tokio::test]
    async fn skill_points_are_spent_after_a_win() {
        let mut sheet = game_core::CharacterSheet::new_game();
        sheet.weapons = vec![Weapon::new("Reaper's Scythe", 150, 300).unwrap()];
        sheet.xp = 190;
        let session = Session::with_sheet("hero", GameConfig::default(), sheet);
        // Monster roll 10, Goblin roll 30; hit roll 0, no crit, 200 damage.
        let (mut app, sink) = app_with(
            session,
            &["explore", "attack", "charisma", "LUCK"],
            ScriptedRng::new().with_ints([10, 30, 0, 99, 200]),
        );
        app.run().await.unwrap();

        let sheet = app.session().sheet();
        assert_eq!(sheet.level, 2);
        assert_eq!(sheet.skill_points, 0);
        assert_eq!(sheet.skills.luck, 1);
        assert!(sink.contains("'charisma' is not a skill"));
        assert!(sink.contains("LEVEL UP"));
    }
}
