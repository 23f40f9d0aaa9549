use crate::models::{Plant, PlantId};
use serde::Serialize;

pub const PRICE_PER_PLANT: f64 = 50.0;

#[derive(Debug, Clone, Serialize)]
pub struct PlantArrangement {
    pub name: String,
    pub description: String,
    pub container: String,
    pub plants: Vec<Plant>,
    pub decorations: Vec<String>,
    pub base_price: f64,
}

impl PlantArrangement {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            container: "standard".into(),
            plants: Vec::new(),
            decorations: Vec::new(),
            base_price: 0.0,
        }
    }

    pub fn add_plant(&mut self, plant: Plant) {
        self.plants.push(plant);
    }

    pub fn add_decoration(&mut self, decoration: impl Into<String>) {
        self.decorations.push(decoration.into());
    }

    pub fn total_price(&self) -> f64 {
        self.base_price + PRICE_PER_PLANT * self.plants.len() as f64
    }

    pub fn plant_ids(&self) -> Vec<PlantId> {
        self.plants.iter().map(|p| p.id).collect()
    }

    pub fn summary(&self) -> String {
        let plants: Vec<String> = self.plants.iter().map(Plant::label).collect();
        let mut out = format!("{}\n{}\n", self.name, self.description);
        out.push_str(&format!("Container: {}\n", self.container));
        out.push_str(&format!("Plants ({}): {}\n", plants.len(), plants.join(", ")));
        if !self.decorations.is_empty() {
            out.push_str(&format!("Decorations: {}\n", self.decorations.join(", ")));
        }
        out.push_str(&format!(
            "Total: {}",
            crate::models::format_rand(self.total_price())
        ));
        out
    }
}

impl Default for PlantArrangement {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    #[test]
    fn empty_arrangement_defaults() {
        let arrangement = PlantArrangement::new();
        assert_eq!(arrangement.container, "standard");
        assert_eq!(arrangement.total_price(), 0.0);
    }

    #[test]
    fn total_adds_fifty_per_plant() {
        let mut arrangement = PlantArrangement::new();
        arrangement.base_price = 150.0;
        arrangement.add_plant(Plant::new(1, Species::Rose));
        arrangement.add_plant(Plant::new(2, Species::Cactus));
        assert_eq!(arrangement.total_price(), 250.0);
        assert_eq!(arrangement.plant_ids(), vec![1, 2]);
    }

    #[test]
    fn summary_lists_contents() {
        let mut arrangement = PlantArrangement::new();
        arrangement.name = "Test".into();
        arrangement.add_plant(Plant::new(4, Species::Lavender));
        arrangement.add_decoration("Ribbon and bow");
        let summary = arrangement.summary();
        assert!(summary.contains("Lavender #4"));
        assert!(summary.contains("Decorations: Ribbon and bow"));
        assert!(summary.ends_with("Total: R50.00"));
    }
}
