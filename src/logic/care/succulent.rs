use super::PlantCareRoutine;
use crate::models::Plant;

pub struct SucculentCare;

impl PlantCareRoutine for SucculentCare {
    fn name(&self) -> &'static str {
        "Succulent Care"
    }

    fn check_soil_moisture(&self, _plant: &Plant) -> String {
        "Checking succulent soil - should be completely dry before watering".into()
    }

    fn water(&self, plant: &mut Plant) -> String {
        plant.water();
        "Watering succulent sparingly, ensuring good drainage".into()
    }

    fn fertilize(&self, plant: &mut Plant) -> String {
        plant.fertilize();
        "Applying diluted cactus fertilizer monthly".into()
    }

    fn prune(&self, plant: &mut Plant) -> String {
        plant.prune();
        "Removing dead or damaged succulent leaves".into()
    }
}
