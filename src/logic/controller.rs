use crate::error::Result;
use crate::logic::inventory::InventoryManager;
use crate::logic::irrigation::{ModernWateringSystem, WateringReport};
use crate::logic::lifecycle::PlantContext;
use crate::models::Season;

/// What one day of maintenance did to the greenhouse.
#[derive(Debug, Clone)]
pub struct MaintenanceReport {
    pub season: Season,
    pub plants_updated: usize,
    pub newly_ready: Vec<u32>,
    pub transitions: Vec<String>,
    pub watering: WateringReport,
}

pub struct GreenhouseController {
    watering: Box<dyn ModernWateringSystem>,
    season: Season,
}

impl GreenhouseController {
    pub fn new(mut watering: Box<dyn ModernWateringSystem>, season: Season) -> Result<Self> {
        watering.adjust_for_season(season)?;
        Ok(Self { watering, season })
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// Age every plant a day, run lifecycle checks, then water the irrigated zones.
    /// The irrigation cycle runs before any plant changes, so a failed cycle leaves
    /// the inventory untouched.
    pub fn perform_daily_maintenance(
        &mut self,
        manager: &mut InventoryManager,
    ) -> Result<MaintenanceReport> {
        let watering = self.watering.water_greenhouse(manager.layout())?;

        let mut newly_ready = Vec::new();
        let mut transitions = Vec::new();
        let mut plants_updated = 0;

        for plant in manager.inventory_mut().iter_mut() {
            let was_ready = plant.ready_for_sale;
            plant.update();
            let mut context = PlantContext::new(plant);
            let log = context.check_health();
            if log.len() > 1 {
                transitions.extend(log.into_iter().skip(1));
            }
            if !was_ready && plant.ready_for_sale {
                newly_ready.push(plant.id);
            }
            plants_updated += 1;
        }

        apply_watering(manager, &watering);

        tracing::info!(
            season = %self.season,
            plants = plants_updated,
            ready = newly_ready.len(),
            zones = watering.zones.len(),
            "Daily maintenance complete"
        );

        Ok(MaintenanceReport {
            season: self.season,
            plants_updated,
            newly_ready,
            transitions,
            watering,
        })
    }

    /// Run one watering cycle and water every plant in an irrigated zone.
    pub fn irrigate(&mut self, manager: &mut InventoryManager) -> Result<WateringReport> {
        let watering = self.watering.water_greenhouse(manager.layout())?;
        apply_watering(manager, &watering);
        Ok(watering)
    }

    pub fn change_season(
        &mut self,
        season: Season,
        manager: &mut InventoryManager,
    ) -> Result<Vec<String>> {
        tracing::info!(from = %self.season, to = %season, "Changing season");
        self.watering.adjust_for_season(season)?;
        self.season = season;

        let mut log = Vec::new();
        for plant in manager.inventory_mut().iter_mut() {
            if let Some(message) = PlantContext::new(plant).change_season(season) {
                log.push(message);
            }
        }
        Ok(log)
    }

    pub fn greenhouse_status(&self, manager: &InventoryManager) -> String {
        format!(
            "Season: {}\n\n{}",
            self.season,
            manager.layout().render(0)
        )
    }

    pub fn system_status(&self) -> String {
        self.watering.system_status()
    }
}

fn apply_watering(manager: &mut InventoryManager, watering: &WateringReport) {
    for id in &watering.watered_plants {
        if let Some(plant) = manager.get_mut(*id) {
            plant.water();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::factory::factory_for;
    use crate::logic::irrigation::{LegacyIrrigationSystem, WateringAdapter};
    use crate::models::{GreenhouseComponent, PlantState, Species};

    fn setup() -> (GreenhouseController, InventoryManager) {
        let layout = GreenhouseComponent::greenhouse("Test").with_child(
            GreenhouseComponent::section("Tropical", "tropical")
                .with_child(GreenhouseComponent::shelf("Roses", 1)),
        );
        let mut manager = InventoryManager::new(layout);
        manager
            .add_plant(factory_for(Species::Rose).create_plant(), 1)
            .unwrap();
        let adapter = WateringAdapter::new(LegacyIrrigationSystem::new());
        let controller = GreenhouseController::new(Box::new(adapter), Season::Spring).unwrap();
        (controller, manager)
    }

    #[test]
    fn daily_maintenance_ages_and_waters() {
        let (mut controller, mut manager) = setup();
        let report = controller.perform_daily_maintenance(&mut manager).unwrap();
        assert_eq!(report.plants_updated, 1);
        assert_eq!(report.watering.zones, vec![1]);

        let rose = manager.get(1).unwrap();
        assert_eq!(rose.age_days, 1);
        assert_eq!(rose.times_watered, 1);
        // Healthy seedling moves on to Growing during the check
        assert_eq!(rose.state, PlantState::Growing);
        assert_eq!(report.transitions.len(), 1);
    }

    #[test]
    fn plant_becomes_ready_at_maturity() {
        let (mut controller, mut manager) = setup();
        manager.get_mut(1).unwrap().days_to_maturity = 2;
        let first = controller.perform_daily_maintenance(&mut manager).unwrap();
        assert!(first.newly_ready.is_empty());
        let second = controller.perform_daily_maintenance(&mut manager).unwrap();
        assert_eq!(second.newly_ready, vec![1]);
    }

    #[test]
    fn winter_sends_plants_dormant() {
        let (mut controller, mut manager) = setup();
        manager.get_mut(1).unwrap().state = PlantState::Mature;
        let log = controller.change_season(Season::Winter, &mut manager).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(controller.season(), Season::Winter);
        let rose = manager.get(1).unwrap();
        assert_eq!(rose.state, PlantState::Dormant);
        assert_eq!(rose.season, Season::Winter);
        assert!(controller.system_status().contains("Multiplier: 0.6x"));
    }

    #[test]
    fn failed_irrigation_leaves_plants_unchanged() {
        let (_, mut manager) = setup();
        let mut adapter = WateringAdapter::new(LegacyIrrigationSystem::new());
        adapter.legacy_mut().set_active(false);
        let mut controller =
            GreenhouseController::new(Box::new(adapter), Season::Spring).unwrap();

        assert!(controller.perform_daily_maintenance(&mut manager).is_err());
        let rose = manager.get(1).unwrap();
        assert_eq!(rose.age_days, 0);
        assert_eq!(rose.times_watered, 0);
        assert_eq!(rose.state, PlantState::Seedling);
    }

    #[test]
    fn irrigation_waters_without_ageing() {
        let (mut controller, mut manager) = setup();
        let report = controller.irrigate(&mut manager).unwrap();
        assert_eq!(report.watered_plants, vec![1]);
        assert_eq!(report.duration_minutes, 10);
        let rose = manager.get(1).unwrap();
        assert_eq!(rose.times_watered, 1);
        assert_eq!(rose.age_days, 0);
    }

    #[test]
    fn greenhouse_status_renders_layout() {
        let (controller, manager) = setup();
        let status = controller.greenhouse_status(&manager);
        assert!(status.starts_with("Season: spring"));
        assert!(status.contains("- Rose #1 (Leaf)"));
    }
}
