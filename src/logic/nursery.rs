use crate::logic::factory::factory_for;
use crate::models::{Plant, PlantId, PlantState, Species};

pub const PROPAGATED_HEALTH: i32 = 80;

/// A mother plant kept in the nursery for propagation.
#[derive(Debug, Clone)]
pub struct PlantPrototype {
    mother: Plant,
}

impl PlantPrototype {
    pub fn new(mother: Plant) -> Self {
        Self { mother }
    }

    pub fn plant_type(&self) -> Species {
        self.mother.species
    }

    pub fn plant_health(&self) -> u8 {
        self.mother.health()
    }

    pub fn set_plant_health(&mut self, health: i32) {
        self.mother.set_health(health);
    }

    pub fn mother(&self) -> &Plant {
        &self.mother
    }

    pub fn clone_prototype(&self) -> PlantPrototype {
        self.clone()
    }

    /// Take a cutting: a young copy of the mother plant with a fresh history.
    pub fn propagate(&self, id: PlantId) -> Plant {
        let mut cutting = self.mother.propagate();
        cutting.id = id;
        cutting.age_days = 0;
        cutting.growth_days = 0;
        cutting.ready_for_sale = false;
        cutting.state = PlantState::Seedling;
        cutting.set_health(PROPAGATED_HEALTH);
        cutting.location.clear();
        cutting.shelf_number = None;
        cutting
    }
}

#[derive(Debug, Default)]
pub struct NurseryManager {
    prototypes: Vec<PlantPrototype>,
}

impl NurseryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nursery stocked with rose and succulent mother plants.
    pub fn with_defaults() -> Self {
        let mut nursery = Self::new();
        for species in [Species::Rose, Species::Succulent] {
            nursery.add_prototype(PlantPrototype::new(factory_for(species).create_plant()));
        }
        nursery
    }

    /// Register a mother plant, replacing any existing one of the same species.
    pub fn add_prototype(&mut self, prototype: PlantPrototype) {
        let species = prototype.plant_type();
        self.prototypes.retain(|p| p.plant_type() != species);
        tracing::debug!(species = %species, "Registered nursery prototype");
        self.prototypes.push(prototype);
    }

    pub fn clone_prototype(&self, species: Species) -> Option<PlantPrototype> {
        self.prototypes
            .iter()
            .find(|p| p.plant_type() == species)
            .map(PlantPrototype::clone_prototype)
    }

    pub fn propagate(&self, species: Species, id: PlantId) -> Option<Plant> {
        let prototype = self.prototypes.iter().find(|p| p.plant_type() == species)?;
        tracing::info!(species = %species, id, "Propagating from nursery mother plant");
        Some(prototype.propagate(id))
    }

    pub fn species(&self) -> Vec<Species> {
        self.prototypes.iter().map(PlantPrototype::plant_type).collect()
    }
}
