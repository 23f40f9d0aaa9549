use crate::config::Config;
use crate::error::Result;
use crate::logic::care::strategy_for;
use crate::logic::controller::MaintenanceReport;
use crate::logic::operations::{ArrangementKind, ArrangementTier, TaskKind};
use crate::logic::GreenhouseService;
use crate::models::{format_rand, CardType, Decoration, Plant, PlantId, PotStyle, WrapStyle};

const ACTIVITY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Layout,
    Inventory,
    Tasks,
    Shop,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Dashboard),
            '2' => Some(Screen::Layout),
            '3' => Some(Screen::Inventory),
            '4' => Some(Screen::Tasks),
            '5' => Some(Screen::Shop),
            _ => None,
        }
    }
}

pub struct LayoutState {
    pub scroll: u16,
}

impl LayoutState {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

pub struct InventoryState {
    pub selected_index: usize,
}

impl InventoryState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the cursor on a row after the list shrinks.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }
}

pub struct TasksState {
    pub routine_enabled: bool,
}

impl TasksState {
    pub fn new() -> Self {
        Self {
            routine_enabled: false,
        }
    }
}

pub struct ShopState {
    pub selected_index: usize,
    pub pot: Option<PotStyle>,
    pub wrap: Option<WrapStyle>,
    pub card: Option<CardType>,
    pub deluxe: bool,
    decorations: Vec<Decoration>,
}

impl ShopState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            pot: None,
            wrap: None,
            card: None,
            deluxe: false,
            decorations: Vec::new(),
        }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn cycle_pot(&mut self) {
        self.pot = cycle(self.pot.take(), &PotStyle::all());
        self.rebuild();
    }

    pub fn cycle_wrap(&mut self) {
        self.wrap = cycle(self.wrap.take(), &WrapStyle::all());
        self.rebuild();
    }

    pub fn cycle_card(&mut self) {
        self.card = cycle(self.card.take(), &CardType::all());
        self.rebuild();
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn reset_decorations(&mut self) {
        self.pot = None;
        self.wrap = None;
        self.card = None;
        self.decorations.clear();
    }

    fn rebuild(&mut self) {
        let pot = self.pot.clone().map(Decoration::pot);
        let wrap = self.wrap.clone().map(Decoration::wrap);
        let card = self.card.clone().map(Decoration::card);
        self.decorations = [pot, wrap, card].into_iter().flatten().collect();
    }
}

/// None -> first -> ... -> last -> None.
fn cycle<T: PartialEq + Clone>(current: Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|o| *o == value)
            .and_then(|i| options.get(i + 1))
            .cloned(),
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,
    pub service: GreenhouseService,

    // Screen states
    pub layout_state: LayoutState,
    pub inventory_state: InventoryState,
    pub tasks_state: TasksState,
    pub shop_state: ShopState,

    // UI state
    pub activity: Vec<String>,
    pub last_report: Option<MaintenanceReport>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let service = GreenhouseService::new(&config)?;
        Ok(Self {
            screen: Screen::Dashboard,
            should_quit: false,
            config,
            service,
            layout_state: LayoutState::new(),
            inventory_state: InventoryState::new(),
            tasks_state: TasksState::new(),
            shop_state: ShopState::new(),
            activity: Vec::new(),
            last_report: None,
            status_message: None,
        })
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    fn record<I: IntoIterator<Item = String>>(&mut self, entries: I) {
        self.activity.extend(entries);
        if self.activity.len() > ACTIVITY_LIMIT {
            let excess = self.activity.len() - ACTIVITY_LIMIT;
            self.activity.drain(..excess);
        }
    }

    fn report_error(&mut self, error: crate::error::GreenOpsError) {
        tracing::warn!(error = %error, "Action failed");
        self.set_status(&format!("Error: {}", error));
    }

    pub fn plants(&self) -> &[Plant] {
        self.service.manager().inventory().plants()
    }

    pub fn selected_plant_id(&self) -> Option<PlantId> {
        self.plants()
            .get(self.inventory_state.selected_index)
            .map(|p| p.id)
    }

    pub fn shop_plant_id(&self) -> Option<PlantId> {
        self.service
            .manager()
            .ready_for_sale()
            .get(self.shop_state.selected_index)
            .map(|p| p.id)
    }

    // --- Simulation ---

    pub fn advance_day(&mut self) {
        match self.service.advance_day() {
            Ok(report) => {
                let day = self.service.day();
                let mut entries = vec![format!(
                    "Day {}: {} plants tended, zones {:?} watered",
                    day, report.plants_updated, report.watering.zones
                )];
                entries.extend(report.transitions.iter().cloned());
                entries.extend(
                    report
                        .newly_ready
                        .iter()
                        .map(|id| format!("Plant #{} is ready for sale", id)),
                );
                self.record(entries);
                self.set_status(&format!("Advanced to day {}", day));
                self.last_report = Some(report);
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn next_season(&mut self) {
        let season = self.service.season().next();
        match self.service.change_season(season) {
            Ok(log) => {
                self.record(std::iter::once(format!("Season changed to {}", season)).chain(log));
                self.set_status(&format!("Season is now {}", season));
            }
            Err(e) => self.report_error(e),
        }
    }

    // --- Inventory ---

    pub fn care_for_selected(&mut self) {
        let Some(id) = self.selected_plant_id() else {
            return;
        };
        match self.service.care(id) {
            Ok(log) => {
                self.set_status(&format!("Care routine finished for plant #{}", id));
                self.record(log);
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn water_selected(&mut self) {
        let Some(id) = self.selected_plant_id() else {
            return;
        };
        let Some(plant) = self.service.manager().get(id) else {
            return;
        };
        let strategy = strategy_for(plant);
        let name = strategy.name();
        match self.service.water_with_strategy(id, strategy) {
            Ok(message) => {
                self.set_status(&format!("{} watering: {}", name, message));
                self.record([format!("Plant #{}: {}", id, message)]);
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn lifecycle_selected(&mut self) {
        let Some(id) = self.selected_plant_id() else {
            return;
        };
        match self.service.lifecycle_care(id) {
            Ok(log) => {
                if let Some(last) = log.last() {
                    self.set_status(&format!("Plant #{}: {}", id, last));
                }
                self.record(log);
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn propagate_selected(&mut self) {
        let Some(id) = self.selected_plant_id() else {
            return;
        };
        match self.service.propagate(id) {
            Ok(new_id) => {
                let message = format!("Plant #{} propagated as #{}", id, new_id);
                self.set_status(&message);
                self.record([message]);
            }
            Err(e) => self.report_error(e),
        }
    }

    // --- Tasks ---

    pub fn queue_task(&mut self, kind: TaskKind) {
        match self.service.queue_task(kind) {
            Ok(()) => self.set_status(&format!("Queued: {}", kind.as_str())),
            Err(e) => self.report_error(e),
        }
    }

    pub fn toggle_routine(&mut self) {
        self.tasks_state.routine_enabled = !self.tasks_state.routine_enabled;
        self.service.set_care_routine(self.tasks_state.routine_enabled);
        let state = if self.tasks_state.routine_enabled {
            "enabled"
        } else {
            "disabled"
        };
        self.set_status(&format!("Care routine {}", state));
    }

    pub fn run_tasks(&mut self) {
        let outcomes = self.service.run_tasks();
        if outcomes.is_empty() {
            self.set_status("No tasks to run");
            return;
        }
        let summary: Vec<String> = outcomes
            .iter()
            .map(|o| format!("{} completed by {}", o.task, o.staff))
            .collect();
        self.set_status(&format!("Executed {} tasks", outcomes.len()));
        self.record(summary);
    }

    pub fn clear_tasks(&mut self) {
        self.service.clear_tasks();
        self.set_status("Task queue cleared");
    }

    // --- Shop ---

    pub fn buy_selected(&mut self) {
        let Some(id) = self.shop_plant_id() else {
            self.set_status("Nothing is ready for sale");
            return;
        };
        let decorations = self.shop_state.decorations().to_vec();
        match self.service.purchase(id, &decorations) {
            Ok(receipt) => {
                let message = format!(
                    "Sold {} for {}",
                    receipt.description,
                    format_rand(receipt.total)
                );
                self.set_status(&message);
                self.record([message]);
                self.shop_state.reset_decorations();
                let remaining = self.service.manager().ready_for_sale().len();
                self.shop_state.selected_index =
                    self.shop_state.selected_index.min(remaining.saturating_sub(1));
                self.inventory_state.clamp(self.plants().len());
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn buy_arrangement(&mut self, kind: ArrangementKind) {
        let tier = if self.shop_state.deluxe {
            ArrangementTier::Deluxe
        } else {
            ArrangementTier::Simple
        };
        let result = self
            .service
            .build_arrangement(kind, tier, None)
            .and_then(|arrangement| self.service.purchase_arrangement(&arrangement));
        match result {
            Ok(receipt) => {
                let message = format!(
                    "Sold {} arrangement \"{}\" for {}",
                    kind.as_str(),
                    receipt.description,
                    format_rand(receipt.total)
                );
                self.set_status(&message);
                self.record([message]);
                self.shop_state.selected_index = 0;
                self.inventory_state.clamp(self.plants().len());
            }
            Err(e) => self.report_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    #[test]
    fn screen_keys() {
        assert_eq!(Screen::from_key('1'), Some(Screen::Dashboard));
        assert_eq!(Screen::from_key('5'), Some(Screen::Shop));
        assert_eq!(Screen::from_key('x'), None);
    }

    #[test]
    fn cycling_wraps_back_to_none() {
        let options = PotStyle::all();
        let mut pot = None;
        for expected in &options {
            pot = cycle(pot, &options);
            assert_eq!(pot.as_ref(), Some(expected));
        }
        assert_eq!(cycle(pot, &options), None);
    }

    #[test]
    fn shop_decorations_follow_selection() {
        let mut shop = ShopState::new();
        shop.cycle_pot();
        shop.cycle_card();
        assert_eq!(shop.decorations().len(), 2);
        shop.reset_decorations();
        assert!(shop.decorations().is_empty());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = InventoryState::new();
        state.next(2);
        state.next(2);
        assert_eq!(state.selected_index, 1);
        state.clamp(1);
        assert_eq!(state.selected_index, 0);
        state.prev();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn advancing_records_activity() {
        let mut app = app();
        app.advance_day();
        assert_eq!(app.service.day(), 1);
        assert!(app.last_report.is_some());
        assert!(app.activity[0].starts_with("Day 1"));
    }

    #[test]
    fn buying_removes_plant_and_charges() {
        let mut app = app();
        let before = app.plants().len();
        app.shop_state.cycle_pot();
        app.buy_selected();
        assert_eq!(app.plants().len(), before - 1);
        assert!(app.service.customer().balance < 5000.0);
        assert!(app.shop_state.decorations().is_empty());
    }

    #[test]
    fn failed_action_reports_error() {
        let mut config = Config::default();
        config.customer.starting_balance = 0.0;
        let mut app = App::new(config).unwrap();
        app.buy_selected();
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Error")));
    }

    #[test]
    fn activity_is_capped() {
        let mut app = app();
        app.record((0..ACTIVITY_LIMIT + 10).map(|i| i.to_string()));
        assert_eq!(app.activity.len(), ACTIVITY_LIMIT);
        assert_eq!(app.activity[0], "10");
    }
}
