use crate::error::{GreenOpsError, Result};
use crate::models::PlantId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ComponentKind {
    Greenhouse,
    Section { section_type: String },
    Shelf { number: u32 },
    Plant { plant_id: PlantId },
}

/// Where a plant sits in the greenhouse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantLocation {
    pub section: String,
    pub shelf: u32,
}

impl std::fmt::Display for PlantLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / Shelf #{}", self.section, self.shelf)
    }
}

/// A node in the greenhouse hierarchy. Sections and shelves nest; plants are leaves.
#[derive(Debug, Clone, Serialize)]
pub struct GreenhouseComponent {
    pub name: String,
    pub kind: ComponentKind,
    children: Vec<GreenhouseComponent>,
}

impl GreenhouseComponent {
    pub fn greenhouse(name: impl Into<String>) -> Self {
        Self::with_kind(name, ComponentKind::Greenhouse)
    }

    pub fn section(name: impl Into<String>, section_type: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            ComponentKind::Section {
                section_type: section_type.into(),
            },
        )
    }

    pub fn shelf(name: impl Into<String>, number: u32) -> Self {
        Self::with_kind(name, ComponentKind::Shelf { number })
    }

    pub fn leaf(name: impl Into<String>, plant_id: PlantId) -> Self {
        Self::with_kind(name, ComponentKind::Plant { plant_id })
    }

    fn with_kind(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn is_composite(&self) -> bool {
        !matches!(self.kind, ComponentKind::Plant { .. })
    }

    pub fn add(&mut self, child: GreenhouseComponent) -> Result<()> {
        if !self.is_composite() {
            return Err(GreenOpsError::InvalidOperation(format!(
                "Cannot add to a leaf node ({})",
                self.name
            )));
        }
        self.children.push(child);
        Ok(())
    }

    /// Builder-style add for assembling a tree of composites.
    pub fn with_child(mut self, child: GreenhouseComponent) -> Self {
        if self.is_composite() {
            self.children.push(child);
        }
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<GreenhouseComponent> {
        let index = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(index))
    }

    pub fn child(&self, index: usize) -> Option<&GreenhouseComponent> {
        self.children.get(index)
    }

    pub fn children(&self) -> &[GreenhouseComponent] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn section_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| matches!(c.kind, ComponentKind::Section { .. }))
            .count()
    }

    pub fn render(&self, depth: usize) -> String {
        let indent = "  ".repeat(depth);
        let mut out = String::new();
        match &self.kind {
            ComponentKind::Greenhouse => {
                out.push_str(&format!("{}=== GREENHOUSE: {} ===\n", indent, self.name));
                for child in &self.children {
                    out.push_str(&child.render(depth + 1));
                }
                out.push_str(&format!("{}=== END OF GREENHOUSE ===\n", indent));
            }
            ComponentKind::Section { section_type } => {
                out.push_str(&format!(
                    "{}++ Section: {} ({})\n",
                    indent, self.name, section_type
                ));
                for child in &self.children {
                    out.push_str(&child.render(depth + 1));
                }
            }
            ComponentKind::Shelf { number } => {
                out.push_str(&format!("{}+ Shelf #{}: {}\n", indent, number, self.name));
                for child in &self.children {
                    out.push_str(&child.render(depth + 1));
                }
            }
            ComponentKind::Plant { .. } => {
                out.push_str(&format!("{}- {} (Leaf)\n", indent, self.name));
            }
        }
        out
    }

    pub fn plant_ids(&self) -> Vec<PlantId> {
        let mut ids = Vec::new();
        self.collect_plant_ids(&mut ids);
        ids
    }

    fn collect_plant_ids(&self, ids: &mut Vec<PlantId>) {
        if let ComponentKind::Plant { plant_id } = self.kind {
            ids.push(plant_id);
        }
        for child in &self.children {
            child.collect_plant_ids(ids);
        }
    }

    pub fn shelf_numbers(&self) -> Vec<u32> {
        let mut numbers = Vec::new();
        if let ComponentKind::Shelf { number } = self.kind {
            numbers.push(number);
        }
        for child in &self.children {
            numbers.extend(child.shelf_numbers());
        }
        numbers
    }

    pub fn find_shelf_mut(&mut self, number: u32) -> Option<&mut GreenhouseComponent> {
        if self.kind == (ComponentKind::Shelf { number }) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_shelf_mut(number))
    }

    /// Detach the leaf for `plant_id` wherever it sits. Returns whether it was found.
    pub fn remove_plant(&mut self, plant_id: PlantId) -> bool {
        let before = self.children.len();
        self.children
            .retain(|c| c.kind != ComponentKind::Plant { plant_id });
        if self.children.len() != before {
            return true;
        }
        self.children
            .iter_mut()
            .any(|child| child.remove_plant(plant_id))
    }

    pub fn location_of(&self, plant_id: PlantId) -> Option<PlantLocation> {
        self.locate(plant_id, None, None)
    }

    fn locate(
        &self,
        plant_id: PlantId,
        section: Option<&str>,
        shelf: Option<u32>,
    ) -> Option<PlantLocation> {
        let (section, shelf) = match &self.kind {
            ComponentKind::Section { .. } => (Some(self.name.as_str()), shelf),
            ComponentKind::Shelf { number } => (section, Some(*number)),
            ComponentKind::Plant { plant_id: id } if *id == plant_id => {
                return Some(PlantLocation {
                    section: section.unwrap_or("Unassigned").to_string(),
                    shelf: shelf.unwrap_or(0),
                });
            }
            _ => (section, shelf),
        };
        self.children
            .iter()
            .find_map(|child| child.locate(plant_id, section, shelf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GreenhouseComponent {
        GreenhouseComponent::greenhouse("Main")
            .with_child(
                GreenhouseComponent::section("Tropical", "tropical").with_child(
                    GreenhouseComponent::shelf("Roses", 1)
                        .with_child(GreenhouseComponent::leaf("Rose #1", 1))
                        .with_child(GreenhouseComponent::leaf("Rose #2", 2)),
                ),
            )
            .with_child(
                GreenhouseComponent::section("Desert", "arid").with_child(
                    GreenhouseComponent::shelf("Cacti", 3)
                        .with_child(GreenhouseComponent::leaf("Cactus #3", 3)),
                ),
            )
    }

    #[test]
    fn leaf_rejects_children() {
        let mut leaf = GreenhouseComponent::leaf("Rose #1", 1);
        assert!(!leaf.is_composite());
        let err = leaf.add(GreenhouseComponent::leaf("Rose #2", 2)).unwrap_err();
        assert!(err.to_string().contains("Cannot add to a leaf node"));
    }

    #[test]
    fn composite_add_remove_child() {
        let mut section = GreenhouseComponent::section("Herbs", "herb");
        section.add(GreenhouseComponent::shelf("Lavender", 5)).unwrap();
        assert_eq!(section.child_count(), 1);
        assert_eq!(section.child(0).map(|c| c.name.as_str()), Some("Lavender"));
        assert!(section.child(1).is_none());

        assert!(section.remove("Lavender").is_some());
        assert!(section.remove("Lavender").is_none());
        assert_eq!(section.child_count(), 0);
    }

    #[test]
    fn render_tree() {
        let expected = "\
=== GREENHOUSE: Main ===
  ++ Section: Tropical (tropical)
    + Shelf #1: Roses
      - Rose #1 (Leaf)
      - Rose #2 (Leaf)
  ++ Section: Desert (arid)
    + Shelf #3: Cacti
      - Cactus #3 (Leaf)
=== END OF GREENHOUSE ===
";
        assert_eq!(sample().render(0), expected);
    }

    #[test]
    fn collects_plant_ids_and_shelves() {
        let tree = sample();
        assert_eq!(tree.plant_ids(), vec![1, 2, 3]);
        assert_eq!(tree.shelf_numbers(), vec![1, 3]);
        assert_eq!(tree.section_count(), 2);
    }

    #[test]
    fn find_shelf_and_add_leaf() {
        let mut tree = sample();
        let shelf = tree.find_shelf_mut(3).unwrap();
        shelf.add(GreenhouseComponent::leaf("Cactus #9", 9)).unwrap();
        assert!(tree.find_shelf_mut(42).is_none());
        assert_eq!(
            tree.location_of(9),
            Some(PlantLocation {
                section: "Desert".into(),
                shelf: 3
            })
        );
    }

    #[test]
    fn remove_plant_detaches_leaf() {
        let mut tree = sample();
        assert!(tree.remove_plant(2));
        assert!(!tree.remove_plant(2));
        assert_eq!(tree.plant_ids(), vec![1, 3]);
        assert!(tree.location_of(2).is_none());
    }

    #[test]
    fn location_display() {
        let location = sample().location_of(1).unwrap();
        assert_eq!(location.to_string(), "Tropical / Shelf #1");
    }
}
