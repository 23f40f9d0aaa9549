use super::PlantCareRoutine;
use crate::models::Plant;

pub struct TreeCare;

impl PlantCareRoutine for TreeCare {
    fn name(&self) -> &'static str {
        "Tree Care"
    }

    fn check_soil_moisture(&self, _plant: &Plant) -> String {
        "Checking tree soil moisture at root depth".into()
    }

    fn water(&self, plant: &mut Plant) -> String {
        plant.water();
        "Deep watering tree at drip line".into()
    }

    fn fertilize(&self, plant: &mut Plant) -> String {
        plant.fertilize();
        "Applying slow-release tree fertilizer".into()
    }

    fn prune(&self, plant: &mut Plant) -> String {
        plant.prune();
        "Pruning dead branches and shaping tree canopy".into()
    }

    fn additional_care(&self, _plant: &mut Plant) -> Option<String> {
        Some("Checking tree trunk for damage and mulching base".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    #[test]
    fn tree_routine_ends_with_trunk_check() {
        let mut plant = Plant::new(9, Species::Baobab);
        let log = TreeCare.care_for_plant(&mut plant);
        assert_eq!(log[log.len() - 2], "Checking tree trunk for damage and mulching base");
        assert_eq!(plant.height_cm, 2.0);
    }
}
