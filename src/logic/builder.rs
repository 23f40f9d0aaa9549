use crate::error::{GreenOpsError, Result};
use crate::models::{Plant, PlantArrangement};

/// Step-by-step construction of a plant arrangement.
pub trait PlantArrangementBuilder: Send {
    fn kind(&self) -> &'static str;
    fn reset(&mut self);
    fn set_basic_info(&mut self);
    fn select_container(&mut self);
    fn add_plants(&mut self);
    fn add_decorations(&mut self);
    fn calculate_price(&mut self);
    fn take_arrangement(&mut self) -> PlantArrangement;
}

pub const GIFT_PLANT_COUNT: usize = 3;
pub const LANDSCAPE_PLANT_COUNT: usize = 7;

#[derive(Debug, Default)]
pub struct GiftArrangementBuilder {
    arrangement: PlantArrangement,
    available_plants: Vec<Plant>,
}

impl GiftArrangementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_available_plants(&mut self, plants: Vec<Plant>) {
        self.available_plants = plants;
    }
}

impl PlantArrangementBuilder for GiftArrangementBuilder {
    fn kind(&self) -> &'static str {
        "gift"
    }

    fn reset(&mut self) {
        self.arrangement = PlantArrangement::new();
    }

    fn set_basic_info(&mut self) {
        self.arrangement.name = "Premium Gift Arrangement".into();
        self.arrangement.description =
            "Beautiful gift arrangement perfect for any occasion".into();
    }

    fn select_container(&mut self) {
        self.arrangement.container = "decorative_basket".into();
    }

    fn add_plants(&mut self) {
        for plant in self.available_plants.iter().take(GIFT_PLANT_COUNT) {
            self.arrangement.add_plant(plant.clone());
        }
    }

    fn add_decorations(&mut self) {
        for decoration in ["Ribbon and bow", "Greeting card", "Tissue paper wrapping"] {
            self.arrangement.add_decoration(decoration);
        }
    }

    fn calculate_price(&mut self) {
        self.arrangement.base_price = 150.0;
    }

    fn take_arrangement(&mut self) -> PlantArrangement {
        std::mem::take(&mut self.arrangement)
    }
}

#[derive(Debug)]
pub struct LandscapeArrangementBuilder {
    arrangement: PlantArrangement,
    available_plants: Vec<Plant>,
    theme: String,
}

impl LandscapeArrangementBuilder {
    pub fn new() -> Self {
        Self {
            arrangement: PlantArrangement::new(),
            available_plants: Vec::new(),
            theme: "mixed".into(),
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn set_available_plants(&mut self, plants: Vec<Plant>) {
        self.available_plants = plants;
    }
}

impl Default for LandscapeArrangementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantArrangementBuilder for LandscapeArrangementBuilder {
    fn kind(&self) -> &'static str {
        "landscape"
    }

    fn reset(&mut self) {
        self.arrangement = PlantArrangement::new();
    }

    fn set_basic_info(&mut self) {
        self.arrangement.name = format!("Landscape Collection - {}", self.theme);
        self.arrangement.description =
            "Professional landscape arrangement for outdoor spaces".into();
    }

    fn select_container(&mut self) {
        self.arrangement.container = "large_planter_box".into();
    }

    fn add_plants(&mut self) {
        for plant in self.available_plants.iter().take(LANDSCAPE_PLANT_COUNT) {
            self.arrangement.add_plant(plant.clone());
        }
    }

    fn add_decorations(&mut self) {
        for decoration in ["Decorative stones", "Mulch layer", "Plant markers"] {
            self.arrangement.add_decoration(decoration);
        }
    }

    fn calculate_price(&mut self) {
        self.arrangement.base_price = 500.0;
    }

    fn take_arrangement(&mut self) -> PlantArrangement {
        std::mem::take(&mut self.arrangement)
    }
}

#[derive(Default)]
pub struct ArrangementDirector {
    builder: Option<Box<dyn PlantArrangementBuilder>>,
}

impl ArrangementDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_builder(&mut self, builder: Box<dyn PlantArrangementBuilder>) {
        tracing::debug!(kind = builder.kind(), "Arrangement builder set");
        self.builder = Some(builder);
    }

    pub fn construct_simple(&mut self) -> Result<PlantArrangement> {
        self.construct(false)
    }

    pub fn construct_deluxe(&mut self) -> Result<PlantArrangement> {
        self.construct(true)
    }

    pub fn construct_custom(&mut self, include_decorations: bool) -> Result<PlantArrangement> {
        self.construct(include_decorations)
    }

    fn construct(&mut self, include_decorations: bool) -> Result<PlantArrangement> {
        let builder = self.builder.as_mut().ok_or_else(|| {
            GreenOpsError::InvalidOperation("No arrangement builder set".into())
        })?;

        builder.reset();
        builder.set_basic_info();
        builder.select_container();
        builder.add_plants();
        if include_decorations {
            builder.add_decorations();
        }
        builder.calculate_price();

        let arrangement = builder.take_arrangement();
        tracing::info!(
            name = %arrangement.name,
            plants = arrangement.plants.len(),
            total = arrangement.total_price(),
            "Arrangement constructed"
        );
        Ok(arrangement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    fn stock(n: u32) -> Vec<Plant> {
        (1..=n).map(|id| Plant::new(id, Species::Succulent)).collect()
    }

    #[test]
    fn director_without_builder_errors() {
        let mut director = ArrangementDirector::new();
        assert!(matches!(
            director.construct_simple(),
            Err(GreenOpsError::InvalidOperation(_))
        ));
    }

    #[test]
    fn simple_gift_has_no_decorations() {
        let mut builder = GiftArrangementBuilder::new();
        builder.set_available_plants(stock(5));
        let mut director = ArrangementDirector::new();
        director.set_builder(Box::new(builder));

        let gift = director.construct_simple().unwrap();
        assert_eq!(gift.name, "Premium Gift Arrangement");
        assert_eq!(gift.container, "decorative_basket");
        assert_eq!(gift.plants.len(), 3);
        assert!(gift.decorations.is_empty());
        assert_eq!(gift.base_price, 150.0);
        assert_eq!(gift.total_price(), 300.0);
    }

    #[test]
    fn deluxe_gift_has_decorations() {
        let mut builder = GiftArrangementBuilder::new();
        builder.set_available_plants(stock(2));
        let mut director = ArrangementDirector::new();
        director.set_builder(Box::new(builder));

        let gift = director.construct_deluxe().unwrap();
        assert_eq!(gift.plants.len(), 2);
        assert_eq!(
            gift.decorations,
            vec!["Ribbon and bow", "Greeting card", "Tissue paper wrapping"]
        );
        assert_eq!(gift.total_price(), 250.0);
    }

    #[test]
    fn landscape_uses_theme_and_seven_plants() {
        let mut builder = LandscapeArrangementBuilder::new().with_theme("tropical");
        builder.set_available_plants(stock(10));
        let mut director = ArrangementDirector::new();
        director.set_builder(Box::new(builder));

        let landscape = director.construct_custom(true).unwrap();
        assert_eq!(landscape.name, "Landscape Collection - tropical");
        assert_eq!(landscape.container, "large_planter_box");
        assert_eq!(landscape.plants.len(), 7);
        assert_eq!(landscape.decorations.len(), 3);
        assert_eq!(landscape.total_price(), 850.0);
    }

    #[test]
    fn landscape_default_theme_is_mixed() {
        let mut director = ArrangementDirector::new();
        director.set_builder(Box::new(LandscapeArrangementBuilder::new()));
        let landscape = director.construct_custom(false).unwrap();
        assert_eq!(landscape.name, "Landscape Collection - mixed");
        assert!(landscape.plants.is_empty());
        assert_eq!(landscape.total_price(), 500.0);
    }

    #[test]
    fn repeated_construction_starts_fresh() {
        let mut builder = GiftArrangementBuilder::new();
        builder.set_available_plants(stock(3));
        let mut director = ArrangementDirector::new();
        director.set_builder(Box::new(builder));

        director.construct_deluxe().unwrap();
        let second = director.construct_simple().unwrap();
        assert_eq!(second.plants.len(), 3);
        assert!(second.decorations.is_empty());
    }
}
