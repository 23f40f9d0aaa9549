use super::PlantCareRoutine;
use crate::models::Plant;

/// Roses want consistently moist soil and a pest check after pruning.
pub struct RoseCare;

impl PlantCareRoutine for RoseCare {
    fn name(&self) -> &'static str {
        "Rose Care"
    }

    fn check_soil_moisture(&self, _plant: &Plant) -> String {
        "Checking rose soil moisture - should be consistently moist".into()
    }

    fn water(&self, plant: &mut Plant) -> String {
        plant.water();
        "Watering rose deeply at base, avoiding leaves".into()
    }

    fn fertilize(&self, plant: &mut Plant) -> String {
        plant.fertilize();
        "Applying balanced fertilizer for roses".into()
    }

    fn prune(&self, plant: &mut Plant) -> String {
        plant.prune();
        "Pruning dead roses and shaping bush".into()
    }

    fn additional_care(&self, _plant: &mut Plant) -> Option<String> {
        Some("Checking for pests and diseases on rose leaves".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    #[test]
    fn rose_routine_log() {
        let mut plant = Plant::new(3, Species::Rose);
        plant.set_health(50);
        let log = RoseCare.care_for_plant(&mut plant);
        assert_eq!(log[2], "Watering rose deeply at base, avoiding leaves");
        assert_eq!(log[5], "Checking for pests and diseases on rose leaves");
        // water +5, fertilize +10, prune +3
        assert_eq!(plant.health(), 68);
    }
}
