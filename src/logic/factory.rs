use crate::models::{Plant, Species};

/// Produces fully profiled plants of one species.
pub trait PlantFactory: Send + Sync {
    fn plant_type(&self) -> Species;

    fn create_plant(&self) -> Plant {
        let species = self.plant_type();
        let profile = species.profile();
        let mut plant = Plant::with_maturity(species, profile.days_to_maturity);
        plant.apply_profile(&profile);
        plant
    }
}

pub struct RoseFactory;
pub struct CactusFactory;
pub struct SucculentFactory;
pub struct LavenderFactory;
pub struct BaobabFactory;

impl PlantFactory for RoseFactory {
    fn plant_type(&self) -> Species {
        Species::Rose
    }
}

impl PlantFactory for CactusFactory {
    fn plant_type(&self) -> Species {
        Species::Cactus
    }
}

impl PlantFactory for SucculentFactory {
    fn plant_type(&self) -> Species {
        Species::Succulent
    }
}

impl PlantFactory for LavenderFactory {
    fn plant_type(&self) -> Species {
        Species::Lavender
    }
}

impl PlantFactory for BaobabFactory {
    fn plant_type(&self) -> Species {
        Species::Baobab
    }
}

pub fn factory_for(species: Species) -> Box<dyn PlantFactory> {
    match species {
        Species::Rose => Box::new(RoseFactory),
        Species::Cactus => Box::new(CactusFactory),
        Species::Succulent => Box::new(SucculentFactory),
        Species::Lavender => Box::new(LavenderFactory),
        Species::Baobab => Box::new(BaobabFactory),
    }
}

pub fn all_factories() -> Vec<Box<dyn PlantFactory>> {
    Species::all().iter().map(|s| factory_for(*s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlantState, Season, SoilType};

    #[test]
    fn rose_factory_profile() {
        let rose = RoseFactory.create_plant();
        assert_eq!(rose.species, Species::Rose);
        assert_eq!(rose.scientific_name, "Rosa rubiginosa");
        assert_eq!(rose.days_to_maturity, 45);
        assert_eq!(rose.height_cm, 5.0);
        assert_eq!(rose.base_price, 45.0);
        assert_eq!(rose.watering_frequency_days, 3);
        assert_eq!(rose.fertilizing_frequency_days, 14);
        assert_eq!(rose.soil_type, SoilType::Loamy);
        assert_eq!(rose.season, Season::Spring);
        assert_eq!(rose.state, PlantState::Seedling);
        assert!(!rose.ready_for_sale);
    }

    #[test]
    fn baobab_factory_profile() {
        let baobab = BaobabFactory.create_plant();
        assert_eq!(baobab.scientific_name, "Adansonia");
        assert_eq!(baobab.days_to_maturity, 120);
        assert_eq!(baobab.base_price, 150.0);
        assert_eq!(baobab.watering_frequency_days, 21);
        assert_eq!(baobab.sunlight_hours, 10);
        assert_eq!(baobab.soil_type, SoilType::Sandy);
    }

    #[test]
    fn factory_for_matches_species() {
        for species in Species::all() {
            let factory = factory_for(*species);
            assert_eq!(factory.plant_type(), *species);
            assert_eq!(factory.create_plant().species, *species);
        }
    }

    #[test]
    fn all_factories_cover_every_species() {
        let factories = all_factories();
        assert_eq!(factories.len(), Species::all().len());
        let cactus = factories
            .iter()
            .find(|f| f.plant_type() == Species::Cactus)
            .unwrap()
            .create_plant();
        assert_eq!(cactus.watering_frequency_days, 14);
        assert_eq!(cactus.base_price, 25.0);
    }
}
