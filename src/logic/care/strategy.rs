use crate::models::Plant;

/// Interchangeable watering approach.
pub trait PlantCareStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn interval_days(&self) -> u32;
    fn description(&self) -> &'static str;

    /// Water the plant and put it on this strategy's schedule.
    fn care_for_plant(&self, plant: &mut Plant) -> String {
        plant.water();
        plant.watering_frequency_days = self.interval_days();
        self.description().to_string()
    }
}

pub struct FrequentWatering;
pub struct ModerateWatering;
pub struct MinimalWatering;

impl PlantCareStrategy for FrequentWatering {
    fn name(&self) -> &'static str {
        "Frequent"
    }

    fn interval_days(&self) -> u32 {
        1
    }

    fn description(&self) -> &'static str {
        "Watering daily, keeping soil consistently moist"
    }
}

impl PlantCareStrategy for ModerateWatering {
    fn name(&self) -> &'static str {
        "Moderate"
    }

    fn interval_days(&self) -> u32 {
        4
    }

    fn description(&self) -> &'static str {
        "Watering when top inch of soil is dry, maintaining moderate moisture"
    }
}

impl PlantCareStrategy for MinimalWatering {
    fn name(&self) -> &'static str {
        "Minimal"
    }

    fn interval_days(&self) -> u32 {
        7
    }

    fn description(&self) -> &'static str {
        "Watering sparingly, allowing soil to dry completely between waterings"
    }
}

/// Recommend a strategy from the plant's own watering schedule.
pub fn strategy_for(plant: &Plant) -> Box<dyn PlantCareStrategy> {
    match plant.watering_frequency_days {
        0..=3 => Box::new(FrequentWatering),
        4..=7 => Box::new(ModerateWatering),
        _ => Box::new(MinimalWatering),
    }
}

pub struct PlantCareContext<'a> {
    plant: &'a mut Plant,
    strategy: Option<Box<dyn PlantCareStrategy>>,
}

impl<'a> PlantCareContext<'a> {
    pub fn new(plant: &'a mut Plant) -> Self {
        Self {
            plant,
            strategy: None,
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PlantCareStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    pub fn execute_care(&mut self) -> Option<String> {
        let strategy = self.strategy.as_ref()?;
        tracing::debug!(
            plant = self.plant.id,
            strategy = strategy.name(),
            "Applying watering strategy"
        );
        Some(strategy.care_for_plant(self.plant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    #[test]
    fn no_strategy_does_nothing() {
        let mut plant = Plant::new(1, Species::Rose);
        let mut ctx = PlantCareContext::new(&mut plant);
        assert!(ctx.execute_care().is_none());
        assert!(ctx.strategy_name().is_none());
        assert_eq!(plant.times_watered, 0);
    }

    #[test]
    fn strategy_waters_and_sets_interval() {
        let mut plant = Plant::new(1, Species::Cactus);
        let mut ctx = PlantCareContext::new(&mut plant);
        ctx.set_strategy(Box::new(MinimalWatering));
        assert_eq!(
            ctx.execute_care().as_deref(),
            Some("Watering sparingly, allowing soil to dry completely between waterings")
        );
        assert_eq!(plant.times_watered, 1);
        assert_eq!(plant.watering_frequency_days, 7);
    }

    #[test]
    fn strategy_can_be_swapped() {
        let mut plant = Plant::new(1, Species::Rose);
        let mut ctx = PlantCareContext::new(&mut plant);
        ctx.set_strategy(Box::new(FrequentWatering));
        ctx.execute_care();
        ctx.set_strategy(Box::new(ModerateWatering));
        assert_eq!(ctx.strategy_name(), Some("Moderate"));
        ctx.execute_care();
        assert_eq!(plant.watering_frequency_days, 4);
        assert_eq!(plant.times_watered, 2);
    }

    #[test]
    fn recommendation_by_frequency() {
        let mut plant = Plant::new(1, Species::Rose);
        plant.watering_frequency_days = 3;
        assert_eq!(strategy_for(&plant).name(), "Frequent");
        plant.watering_frequency_days = 7;
        assert_eq!(strategy_for(&plant).name(), "Moderate");
        plant.watering_frequency_days = 14;
        assert_eq!(strategy_for(&plant).name(), "Minimal");
    }
}
