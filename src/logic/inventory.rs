use crate::error::{GreenOpsError, Result};
use crate::models::{GreenhouseComponent, Plant, PlantId, PlantLocation};

pub trait PlantCollection {
    fn create_iterator(&self) -> InventoryIterator<'_>;
    fn add_plant(&mut self, plant: Plant);
    fn remove_plant(&mut self, id: PlantId) -> Option<Plant>;
    fn is_empty(&self) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct GreenhouseInventory {
    plants: Vec<Plant>,
}

impl GreenhouseInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.plants.len()
    }

    pub fn plant_at(&self, index: usize) -> Option<&Plant> {
        self.plants.get(index)
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PlantId) -> Option<&mut Plant> {
        self.plants.iter_mut().find(|p| p.id == id)
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn plants_mut(&mut self) -> &mut [Plant] {
        &mut self.plants
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Plant> {
        self.plants.iter_mut()
    }

    pub fn max_id(&self) -> PlantId {
        self.plants.iter().map(|p| p.id).max().unwrap_or(0)
    }
}

impl PlantCollection for GreenhouseInventory {
    fn create_iterator(&self) -> InventoryIterator<'_> {
        InventoryIterator::new(&self.plants)
    }

    fn add_plant(&mut self, plant: Plant) {
        self.plants.push(plant);
    }

    fn remove_plant(&mut self, id: PlantId) -> Option<Plant> {
        let index = self.plants.iter().position(|p| p.id == id)?;
        Some(self.plants.remove(index))
    }

    fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

/// Cursor over a fixed view of the inventory.
pub struct InventoryIterator<'a> {
    plants: &'a [Plant],
    index: usize,
}

impl<'a> InventoryIterator<'a> {
    pub fn new(plants: &'a [Plant]) -> Self {
        Self { plants, index: 0 }
    }

    pub fn first(&mut self) -> Option<&'a Plant> {
        self.index = 0;
        self.current_item()
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.plants.len()
    }

    pub fn current_item(&self) -> Option<&'a Plant> {
        self.plants.get(self.index)
    }
}

impl<'a> Iterator for InventoryIterator<'a> {
    type Item = &'a Plant;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current_item()?;
        self.index += 1;
        Some(item)
    }
}

/// Keeps the plant inventory and the greenhouse layout in step.
#[derive(Debug, Clone)]
pub struct InventoryManager {
    inventory: GreenhouseInventory,
    layout: GreenhouseComponent,
    next_id: PlantId,
}

impl InventoryManager {
    pub fn new(layout: GreenhouseComponent) -> Self {
        Self {
            inventory: GreenhouseInventory::new(),
            layout,
            next_id: 1,
        }
    }

    pub fn inventory(&self) -> &GreenhouseInventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut GreenhouseInventory {
        &mut self.inventory
    }

    pub fn layout(&self) -> &GreenhouseComponent {
        &self.layout
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.inventory.get(id)
    }

    pub fn get_mut(&mut self, id: PlantId) -> Option<&mut Plant> {
        self.inventory.get_mut(id)
    }

    pub fn iterator(&self) -> InventoryIterator<'_> {
        self.inventory.create_iterator()
    }

    pub fn count(&self) -> usize {
        self.inventory.count()
    }

    /// Place a plant on a shelf, giving it a fresh id. Ids are never reused, even
    /// after the plant holding the highest one is sold.
    pub fn add_plant(&mut self, mut plant: Plant, shelf: u32) -> Result<PlantId> {
        let id = self.next_id.max(self.inventory.max_id() + 1);
        plant.id = id;

        let shelf_node = self
            .layout
            .find_shelf_mut(shelf)
            .ok_or_else(|| GreenOpsError::NotFound(format!("shelf #{}", shelf)))?;
        shelf_node.add(GreenhouseComponent::leaf(plant.label(), id))?;

        plant.shelf_number = Some(shelf);
        plant.location = self
            .layout
            .location_of(id)
            .map(|loc| loc.to_string())
            .unwrap_or_default();

        tracing::info!(id, species = %plant.species, shelf, "Plant added to inventory");
        self.inventory.add_plant(plant);
        self.next_id = id + 1;
        Ok(id)
    }

    pub fn remove_plant(&mut self, id: PlantId) -> Result<Plant> {
        let plant = self
            .inventory
            .remove_plant(id)
            .ok_or_else(|| GreenOpsError::NotFound(format!("plant #{}", id)))?;
        if !self.layout.remove_plant(id) {
            tracing::warn!(id, "Removed plant had no place in the layout");
        }
        tracing::info!(id, species = %plant.species, "Plant removed from inventory");
        Ok(plant)
    }

    pub fn location_of(&self, id: PlantId) -> Option<PlantLocation> {
        self.layout.location_of(id)
    }

    pub fn ready_for_sale(&self) -> Vec<&Plant> {
        self.iterator().filter(|p| p.ready_for_sale).collect()
    }

    pub fn needing_attention(&self) -> Vec<&Plant> {
        self.iterator().filter(|p| p.needs_attention()).collect()
    }

    pub fn report(&self) -> String {
        let mut out = String::from("=== Greenhouse Inventory ===\n");
        let mut iter = self.iterator();
        let mut count = 0;
        let mut current = iter.first();
        while let Some(plant) = current {
            count += 1;
            out.push_str(&format!(
                "{:>3}. {:<14} {:<10} health {:>3}  {}\n",
                count,
                plant.label(),
                plant.state,
                plant.health(),
                plant.location
            ));
            iter.next();
            current = iter.current_item();
        }
        out.push_str(&format!("Total plants: {}\n", count));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    fn layout() -> GreenhouseComponent {
        GreenhouseComponent::greenhouse("Test")
            .with_child(
                GreenhouseComponent::section("Tropical", "tropical")
                    .with_child(GreenhouseComponent::shelf("Roses", 1)),
            )
            .with_child(
                GreenhouseComponent::section("Desert", "arid")
                    .with_child(GreenhouseComponent::shelf("Cacti", 3)),
            )
    }

    #[test]
    fn iterator_walks_in_order() {
        let mut inventory = GreenhouseInventory::new();
        inventory.add_plant(Plant::new(1, Species::Rose));
        inventory.add_plant(Plant::new(2, Species::Cactus));

        let mut iter = inventory.create_iterator();
        assert_eq!(iter.first().map(|p| p.id), Some(1));
        assert!(!iter.is_done());
        iter.next();
        assert_eq!(iter.current_item().map(|p| p.id), Some(2));
        iter.next();
        assert!(iter.is_done());
        assert!(iter.current_item().is_none());

        // first() rewinds
        assert_eq!(iter.first().map(|p| p.id), Some(1));
        let ids: Vec<_> = iter.map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn empty_iterator_is_done() {
        let inventory = GreenhouseInventory::new();
        let iter = inventory.create_iterator();
        assert!(iter.is_done());
        assert!(inventory.is_empty());
    }

    #[test]
    fn collection_remove() {
        let mut inventory = GreenhouseInventory::new();
        inventory.add_plant(Plant::new(5, Species::Rose));
        assert_eq!(inventory.remove_plant(5).map(|p| p.id), Some(5));
        assert!(inventory.remove_plant(5).is_none());
        assert_eq!(inventory.count(), 0);
    }

    #[test]
    fn manager_assigns_ids_and_location() {
        let mut manager = InventoryManager::new(layout());
        let a = manager.add_plant(Plant::new(0, Species::Rose), 1).unwrap();
        let b = manager.add_plant(Plant::new(0, Species::Cactus), 3).unwrap();
        assert_eq!((a, b), (1, 2));

        let cactus = manager.get(b).unwrap();
        assert_eq!(cactus.shelf_number, Some(3));
        assert_eq!(cactus.location, "Desert / Shelf #3");
        assert_eq!(manager.layout().plant_ids(), vec![1, 2]);
    }

    #[test]
    fn manager_ids_are_sequential() {
        let mut manager = InventoryManager::new(layout());
        manager.add_plant(Plant::new(0, Species::Rose), 1).unwrap();
        manager.add_plant(Plant::new(0, Species::Rose), 1).unwrap();
        manager.remove_plant(1).unwrap();
        let next = manager.add_plant(Plant::new(0, Species::Rose), 1).unwrap();
        assert_eq!(next, 3);
    }

    #[test]
    fn sold_ids_are_not_reused() {
        let mut manager = InventoryManager::new(layout());
        manager.add_plant(Plant::new(0, Species::Rose), 1).unwrap();
        let newest = manager.add_plant(Plant::new(0, Species::Rose), 1).unwrap();
        manager.remove_plant(newest).unwrap();
        let next = manager.add_plant(Plant::new(0, Species::Cactus), 1).unwrap();
        assert_eq!(next, 3);
        assert!(manager.get(newest).is_none());
    }

    #[test]
    fn failed_add_does_not_consume_id() {
        let mut manager = InventoryManager::new(layout());
        assert!(manager.add_plant(Plant::new(0, Species::Rose), 9).is_err());
        let id = manager.add_plant(Plant::new(0, Species::Rose), 1).unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn manager_rejects_unknown_shelf() {
        let mut manager = InventoryManager::new(layout());
        let err = manager.add_plant(Plant::new(0, Species::Rose), 9).unwrap_err();
        assert!(matches!(err, GreenOpsError::NotFound(_)));
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn manager_remove_keeps_layout_in_step() {
        let mut manager = InventoryManager::new(layout());
        let id = manager.add_plant(Plant::new(0, Species::Rose), 1).unwrap();
        let removed = manager.remove_plant(id).unwrap();
        assert_eq!(removed.species, Species::Rose);
        assert!(manager.layout().plant_ids().is_empty());
        assert!(manager.remove_plant(id).is_err());
    }

    #[test]
    fn ready_and_attention_filters() {
        let mut manager = InventoryManager::new(layout());
        let mut ready = Plant::new(0, Species::Rose);
        ready.ready_for_sale = true;
        manager.add_plant(ready, 1).unwrap();
        let mut sick = Plant::new(0, Species::Cactus);
        sick.set_health(40);
        manager.add_plant(sick, 3).unwrap();

        assert_eq!(manager.ready_for_sale().len(), 1);
        assert_eq!(manager.needing_attention().len(), 1);
    }

    #[test]
    fn report_counts_plants() {
        let mut manager = InventoryManager::new(layout());
        manager.add_plant(Plant::new(0, Species::Rose), 1).unwrap();
        let report = manager.report();
        assert!(report.starts_with("=== Greenhouse Inventory ==="));
        assert!(report.contains("Rose #1"));
        assert!(report.ends_with("Total plants: 1\n"));
    }
}
