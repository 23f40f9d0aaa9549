use crate::config::Config;
use crate::error::{GreenOpsError, Result};
use crate::logic::builder::{
    ArrangementDirector, GiftArrangementBuilder, LandscapeArrangementBuilder,
};
use crate::logic::care::{
    routine_for, PlantCareContext, PlantCareRoutine, PlantCareStrategy, SpeciesCare,
};
use crate::logic::commands::{
    AssistCustomerCommand, FertilizePlantsCommand, PrunePlantsCommand, TaskContext,
    TaskOutcome, TaskScheduler, WaterPlantsCommand,
};
use crate::logic::controller::{GreenhouseController, MaintenanceReport};
use crate::logic::factory::factory_for;
use crate::logic::inventory::InventoryManager;
use crate::logic::irrigation::{LegacyIrrigationSystem, WateringAdapter, WateringReport};
use crate::logic::lifecycle::PlantContext;
use crate::logic::nursery::{NurseryManager, PlantPrototype};
use crate::models::{
    decorate, format_rand, Decoration, GreenhouseComponent, LineItem, Plant, PlantArrangement,
    PlantCareStaff, PlantId, PlantState, SalesStaff, Season, Species,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangementKind {
    Gift,
    Landscape,
}

impl ArrangementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrangementKind::Gift => "Gift",
            ArrangementKind::Landscape => "Landscape",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangementTier {
    Simple,
    Deluxe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Water,
    Fertilize,
    Prune,
    AssistCustomer,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Water => "Water",
            TaskKind::Fertilize => "Fertilize",
            TaskKind::Prune => "Prune",
            TaskKind::AssistCustomer => "Assist customer",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub description: String,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub purchased_at: DateTime<Utc>,
}

impl Receipt {
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.description);
        for item in &self.items {
            out.push_str(&format!("  {:<40} {:>10}\n", item.label, format_rand(item.amount)));
        }
        out.push_str(&format!("  {:<40} {:>10}", "TOTAL", format_rand(self.total)));
        out
    }
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub balance: f64,
    pub cart: Vec<Receipt>,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            balance,
            cart: Vec::new(),
        }
    }

    fn charge(&mut self, amount: f64) -> Result<()> {
        if amount > self.balance {
            tracing::warn!(
                needed = amount,
                available = self.balance,
                "Purchase rejected: insufficient funds"
            );
            return Err(GreenOpsError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn spent(&self) -> f64 {
        self.cart.iter().map(|r| r.total).sum()
    }
}

/// Seeded stock: (section, section type, shelf number, shelf name, species, count).
const SEED_STOCK: &[(&str, &str, u32, &str, Species, usize)] = &[
    ("Tropical", "tropical", 1, "Rose Bench", Species::Rose, 3),
    ("Tropical", "tropical", 2, "Tree Corner", Species::Baobab, 1),
    ("Desert", "desert", 3, "Cactus Rack", Species::Cactus, 4),
    ("Desert", "desert", 4, "Succulent Rack", Species::Succulent, 3),
    ("Herb & Flower", "herb", 5, "Lavender Bed", Species::Lavender, 2),
];

fn seeded_layout(name: &str) -> GreenhouseComponent {
    let mut root = GreenhouseComponent::greenhouse(name);
    let mut current: Option<GreenhouseComponent> = None;
    for (section, section_type, shelf, shelf_name, _, _) in SEED_STOCK {
        if current.as_ref().map(|s| s.name.as_str()) != Some(*section) {
            if let Some(done) = current.take() {
                root = root.with_child(done);
            }
            current = Some(GreenhouseComponent::section(*section, *section_type));
        }
        if let Some(node) = current.take() {
            current = Some(node.with_child(GreenhouseComponent::shelf(*shelf_name, *shelf)));
        }
    }
    if let Some(done) = current {
        root = root.with_child(done);
    }
    root
}

/// Mature, sale-ready plant with a care history that matches its age.
fn seasoned_stock(species: Species) -> Plant {
    let mut plant = factory_for(species).create_plant();
    plant.age_days = plant.days_to_maturity;
    plant.growth_days = plant.days_to_maturity;
    plant.times_watered = plant
        .age_days
        .checked_div(plant.watering_frequency_days)
        .unwrap_or(0);
    plant.times_fertilized = plant
        .age_days
        .checked_div(plant.fertilizing_frequency_days)
        .unwrap_or(0);
    plant.state = PlantState::Mature;
    plant.ready_for_sale = true;
    plant
}

/// Store-wide orchestration: greenhouse upkeep, staff tasks and the shop counter.
pub struct GreenhouseService {
    name: String,
    day: u32,
    manager: InventoryManager,
    controller: GreenhouseController,
    nursery: NurseryManager,
    scheduler: TaskScheduler,
    customer: Customer,
    care_staff: Vec<PlantCareStaff>,
    sales_staff: Vec<SalesStaff>,
    customers_assisted: u32,
}

impl GreenhouseService {
    pub fn new(config: &Config) -> Result<Self> {
        let legacy = LegacyIrrigationSystem::from_config(&config.irrigation)?;
        let controller =
            GreenhouseController::new(Box::new(WateringAdapter::new(legacy)), Season::Spring)?;

        let mut service = Self {
            name: config.greenhouse.name.clone(),
            day: 0,
            manager: InventoryManager::new(seeded_layout(&config.greenhouse.name)),
            controller,
            nursery: NurseryManager::with_defaults(),
            scheduler: TaskScheduler::new(),
            customer: Customer::new(&config.customer.name, config.customer.starting_balance),
            care_staff: config
                .staff
                .plant_care
                .iter()
                .map(|name| PlantCareStaff::new(name.as_str()))
                .collect(),
            sales_staff: config
                .staff
                .sales
                .iter()
                .map(|name| SalesStaff::new(name.as_str()))
                .collect(),
            customers_assisted: 0,
        };

        for (_, _, shelf, _, species, count) in SEED_STOCK {
            for _ in 0..*count {
                service.manager.add_plant(seasoned_stock(*species), *shelf)?;
            }
        }
        if config.greenhouse.season != Season::Spring {
            service.change_season(config.greenhouse.season)?;
        }

        tracing::info!(
            greenhouse = %service.name,
            plants = service.manager.count(),
            season = %service.season(),
            "Greenhouse initialised"
        );
        Ok(service)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn season(&self) -> Season {
        self.controller.season()
    }

    pub fn manager(&self) -> &InventoryManager {
        &self.manager
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }

    pub fn customers_assisted(&self) -> u32 {
        self.customers_assisted
    }

    pub fn care_staff(&self) -> &[PlantCareStaff] {
        &self.care_staff
    }

    pub fn sales_staff(&self) -> &[SalesStaff] {
        &self.sales_staff
    }

    pub fn nursery_species(&self) -> Vec<Species> {
        self.nursery.species()
    }

    fn plant_mut(&mut self, id: PlantId) -> Result<&mut Plant> {
        self.manager
            .get_mut(id)
            .ok_or_else(|| GreenOpsError::NotFound(format!("plant #{}", id)))
    }

    fn plant(&self, id: PlantId) -> Result<&Plant> {
        self.manager
            .get(id)
            .ok_or_else(|| GreenOpsError::NotFound(format!("plant #{}", id)))
    }

    // --- Greenhouse upkeep ---

    pub fn advance_day(&mut self) -> Result<MaintenanceReport> {
        let report = self.controller.perform_daily_maintenance(&mut self.manager)?;
        self.day += 1;
        Ok(report)
    }

    pub fn irrigate(&mut self) -> Result<WateringReport> {
        self.controller.irrigate(&mut self.manager)
    }

    pub fn change_season(&mut self, season: Season) -> Result<Vec<String>> {
        self.controller.change_season(season, &mut self.manager)
    }

    pub fn care(&mut self, id: PlantId) -> Result<Vec<String>> {
        let plant = self.plant_mut(id)?;
        Ok(routine_for(plant.species).care_for_plant(plant))
    }

    pub fn water_with_strategy(
        &mut self,
        id: PlantId,
        strategy: Box<dyn PlantCareStrategy>,
    ) -> Result<String> {
        let plant = self.plant_mut(id)?;
        let mut context = PlantCareContext::new(plant);
        context.set_strategy(strategy);
        context.execute_care().ok_or_else(|| {
            GreenOpsError::InvalidOperation("No watering strategy selected".into())
        })
    }

    /// Water, feed and health-check a plant through its current lifecycle stage.
    pub fn lifecycle_care(&mut self, id: PlantId) -> Result<Vec<String>> {
        let plant = self.plant_mut(id)?;
        let mut context = PlantContext::new(plant);
        let mut log = vec![format!("Current state: {}", context.state_name())];
        log.push(context.water());
        log.push(context.fertilize());
        log.extend(context.check_health());
        log.push(format!("Resulting state: {}", context.state_name()));
        Ok(log)
    }

    pub fn propagate(&mut self, id: PlantId) -> Result<PlantId> {
        let source = self.plant(id)?;
        let shelf = match source.shelf_number {
            Some(shelf) => shelf,
            None => self.shelf_for(source.species)?,
        };
        let cutting = PlantPrototype::new(source.clone()).propagate(0);
        let new_id = self.manager.add_plant(cutting, shelf)?;
        tracing::info!(source = id, clone = new_id, "Plant propagated");
        Ok(new_id)
    }

    pub fn propagate_species(&mut self, species: Species) -> Result<PlantId> {
        let cutting = self.nursery.propagate(species, 0).ok_or_else(|| {
            GreenOpsError::NotFound(format!("no {} mother plant in the nursery", species))
        })?;
        let shelf = self.shelf_for(species)?;
        self.manager.add_plant(cutting, shelf)
    }

    /// Shelf already holding this species, else the first shelf in the greenhouse.
    fn shelf_for(&self, species: Species) -> Result<u32> {
        self.manager
            .iterator()
            .find(|p| p.species == species)
            .and_then(|p| p.shelf_number)
            .or_else(|| self.manager.layout().shelf_numbers().first().copied())
            .ok_or_else(|| GreenOpsError::NotFound("no shelves in the greenhouse".into()))
    }

    pub fn restock_from_csv(&mut self, path: &Path, shelf: u32) -> Result<Vec<PlantId>> {
        let contents = std::fs::read_to_string(path)?;
        self.restock_from_str(&contents, shelf)
    }

    /// Add one plant per CSV line (`id,species,age,height,health,ready`); ids are reassigned.
    pub fn restock_from_str(&mut self, contents: &str, shelf: u32) -> Result<Vec<PlantId>> {
        let plants = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter(|line| !line.to_lowercase().starts_with("id,"))
            .map(Plant::deserialize)
            .collect::<Result<Vec<_>>>()?;

        let mut ids = Vec::with_capacity(plants.len());
        for mut plant in plants {
            plant.season = self.season();
            if plant.ready_for_sale {
                plant.state = PlantState::Mature;
            }
            ids.push(self.manager.add_plant(plant, shelf)?);
        }
        tracing::info!(count = ids.len(), shelf, "Restocked from CSV");
        Ok(ids)
    }

    pub fn export_csv(&self) -> String {
        self.manager
            .iterator()
            .map(|p| p.serialize() + "\n")
            .collect()
    }

    // --- Staff ---

    pub fn queue_task(&mut self, kind: TaskKind) -> Result<()> {
        match kind {
            TaskKind::AssistCustomer => {
                let staff = self.sales_staff.first().cloned().ok_or_else(|| {
                    GreenOpsError::InvalidOperation("no sales staff on duty".into())
                })?;
                self.scheduler
                    .add_command(Box::new(AssistCustomerCommand::new(staff)));
            }
            care_task => {
                let staff = self.care_staff.first().cloned().ok_or_else(|| {
                    GreenOpsError::InvalidOperation("no plant care staff on duty".into())
                })?;
                match care_task {
                    TaskKind::Water => self
                        .scheduler
                        .add_command(Box::new(WaterPlantsCommand::new(staff))),
                    TaskKind::Fertilize => self
                        .scheduler
                        .add_command(Box::new(FertilizePlantsCommand::new(staff))),
                    _ => self
                        .scheduler
                        .add_command(Box::new(PrunePlantsCommand::new(staff))),
                }
            }
        }
        Ok(())
    }

    pub fn set_care_routine(&mut self, enabled: bool) {
        let routine: Option<Box<dyn PlantCareRoutine>> = if enabled {
            Some(Box::new(SpeciesCare))
        } else {
            None
        };
        self.scheduler.set_routine(routine);
    }

    pub fn run_tasks(&mut self) -> Vec<TaskOutcome> {
        let mut ctx = TaskContext::new(self.manager.inventory_mut().plants_mut());
        let outcomes = self.scheduler.execute_commands(&mut ctx);
        self.customers_assisted += ctx.customers_assisted;
        outcomes
    }

    pub fn clear_tasks(&mut self) {
        self.scheduler.clear_commands();
    }

    // --- Shop ---

    /// Price a decorated plant without buying it.
    pub fn quote(&self, id: PlantId, decorations: &[Decoration]) -> Result<Receipt> {
        let plant = self.plant(id)?;
        if !plant.ready_for_sale {
            return Err(GreenOpsError::InvalidOperation(format!(
                "{} is not ready for sale",
                plant.label()
            )));
        }
        let product = decorate(plant.clone(), decorations.to_vec());
        Ok(Receipt {
            description: product.description(),
            items: product.breakdown(),
            total: product.price(),
            purchased_at: Utc::now(),
        })
    }

    pub fn purchase(&mut self, id: PlantId, decorations: &[Decoration]) -> Result<Receipt> {
        let receipt = self.quote(id, decorations)?;
        self.customer.charge(receipt.total)?;
        self.manager.remove_plant(id)?;

        tracing::info!(
            plant = id,
            total = receipt.total,
            balance = self.customer.balance,
            "Plant sold"
        );
        self.customer.cart.push(receipt.clone());
        Ok(receipt)
    }

    pub fn build_arrangement(
        &self,
        kind: ArrangementKind,
        tier: ArrangementTier,
        theme: Option<&str>,
    ) -> Result<PlantArrangement> {
        let available: Vec<Plant> = self
            .manager
            .ready_for_sale()
            .into_iter()
            .cloned()
            .collect();

        let mut director = ArrangementDirector::new();
        match kind {
            ArrangementKind::Gift => {
                let mut builder = GiftArrangementBuilder::new();
                builder.set_available_plants(available);
                director.set_builder(Box::new(builder));
            }
            ArrangementKind::Landscape => {
                let mut builder = LandscapeArrangementBuilder::new();
                if let Some(theme) = theme {
                    builder = builder.with_theme(theme);
                }
                builder.set_available_plants(available);
                director.set_builder(Box::new(builder));
            }
        }

        match tier {
            ArrangementTier::Simple => director.construct_simple(),
            ArrangementTier::Deluxe => director.construct_deluxe(),
        }
    }

    pub fn purchase_arrangement(&mut self, arrangement: &PlantArrangement) -> Result<Receipt> {
        if arrangement.plants.is_empty() {
            return Err(GreenOpsError::InvalidOperation(
                "arrangement has no plants".into(),
            ));
        }
        for id in arrangement.plant_ids() {
            if !self.plant(id)?.ready_for_sale {
                return Err(GreenOpsError::InvalidOperation(format!(
                    "plant #{} is no longer for sale",
                    id
                )));
            }
        }

        let total = arrangement.total_price();
        self.customer.charge(total)?;
        for id in arrangement.plant_ids() {
            self.manager.remove_plant(id)?;
        }

        let mut items = vec![LineItem::new(
            format!("{} ({})", arrangement.name, arrangement.container),
            arrangement.base_price,
        )];
        items.extend(
            arrangement
                .plants
                .iter()
                .map(|p| LineItem::new(p.label(), crate::models::PRICE_PER_PLANT)),
        );
        let receipt = Receipt {
            description: arrangement.name.clone(),
            items,
            total,
            purchased_at: Utc::now(),
        };
        tracing::info!(name = %arrangement.name, total, "Arrangement sold");
        self.customer.cart.push(receipt.clone());
        Ok(receipt)
    }

    // --- Status ---

    pub fn greenhouse_status(&self) -> String {
        self.controller.greenhouse_status(&self.manager)
    }

    pub fn system_status(&self) -> String {
        self.controller.system_status()
    }
}
