pub mod rose;
pub mod strategy;
pub mod succulent;
pub mod tree;

pub use rose::RoseCare;
pub use strategy::{
    strategy_for, FrequentWatering, MinimalWatering, ModerateWatering, PlantCareContext,
    PlantCareStrategy,
};
pub use succulent::SucculentCare;
pub use tree::TreeCare;

use crate::models::{Plant, Species};

/// Fixed sequence of care steps; each species routine fills in the details.
pub trait PlantCareRoutine: Send + Sync {
    fn name(&self) -> &'static str;

    fn check_soil_moisture(&self, plant: &Plant) -> String;

    fn water(&self, plant: &mut Plant) -> String;

    fn fertilize(&self, plant: &mut Plant) -> String;

    fn prune(&self, plant: &mut Plant) -> String;

    /// Optional extra step at the end of the routine.
    fn additional_care(&self, _plant: &mut Plant) -> Option<String> {
        None
    }

    fn care_for_plant(&self, plant: &mut Plant) -> Vec<String> {
        tracing::debug!(routine = self.name(), plant = plant.id, "Starting care routine");
        let mut log = vec!["Starting plant care routine...".to_string()];
        log.push(self.check_soil_moisture(plant));
        log.push(self.water(plant));
        log.push(self.fertilize(plant));
        log.push(self.prune(plant));
        if let Some(extra) = self.additional_care(plant) {
            log.push(extra);
        }
        log.push("Plant care routine completed.".to_string());
        log
    }
}

pub fn routine_for(species: Species) -> Box<dyn PlantCareRoutine> {
    match species {
        Species::Rose => Box::new(RoseCare),
        Species::Baobab => Box::new(TreeCare),
        Species::Cactus | Species::Succulent | Species::Lavender => Box::new(SucculentCare),
    }
}

/// Picks the routine matching each plant's species at every step.
pub struct SpeciesCare;

impl PlantCareRoutine for SpeciesCare {
    fn name(&self) -> &'static str {
        "Species Care"
    }

    fn check_soil_moisture(&self, plant: &Plant) -> String {
        routine_for(plant.species).check_soil_moisture(plant)
    }

    fn water(&self, plant: &mut Plant) -> String {
        routine_for(plant.species).water(plant)
    }

    fn fertilize(&self, plant: &mut Plant) -> String {
        routine_for(plant.species).fertilize(plant)
    }

    fn prune(&self, plant: &mut Plant) -> String {
        routine_for(plant.species).prune(plant)
    }

    fn additional_care(&self, plant: &mut Plant) -> Option<String> {
        routine_for(plant.species).additional_care(plant)
    }
}
