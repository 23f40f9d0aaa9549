use crate::models::{Plant, PlantState, Season};

/// Result of a lifecycle health check.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthCheck {
    pub message: &'static str,
    pub next: Option<PlantState>,
}

/// Care behavior for one lifecycle stage.
pub trait LifecycleStage: Send + Sync {
    fn state(&self) -> PlantState;
    fn water(&self, plant: &mut Plant) -> &'static str;
    fn fertilize(&self, plant: &mut Plant) -> &'static str;
    fn check_health(&self, plant: &Plant) -> HealthCheck;
}

pub struct SeedlingStage;
pub struct GrowingStage;
pub struct MatureStage;
pub struct FloweringStage;
pub struct DormantStage;

impl LifecycleStage for SeedlingStage {
    fn state(&self) -> PlantState {
        PlantState::Seedling
    }

    fn water(&self, plant: &mut Plant) -> &'static str {
        plant.modify_health(10);
        "Watering seedling with small amounts to avoid overwatering."
    }

    fn fertilize(&self, plant: &mut Plant) -> &'static str {
        plant.modify_health(5);
        "Applying light fertilizer to seedling for growth."
    }

    fn check_health(&self, plant: &Plant) -> HealthCheck {
        HealthCheck {
            message: "Checking seedling health: Requires frequent care to progress to Growing state.",
            next: (plant.health() > 50).then_some(PlantState::Growing),
        }
    }
}

impl LifecycleStage for GrowingStage {
    fn state(&self) -> PlantState {
        PlantState::Growing
    }

    fn water(&self, plant: &mut Plant) -> &'static str {
        plant.modify_health(15);
        "Watering growing plant with moderate amounts."
    }

    fn fertilize(&self, plant: &mut Plant) -> &'static str {
        plant.modify_health(10);
        "Applying balanced fertilizer to support growth."
    }

    fn check_health(&self, plant: &Plant) -> HealthCheck {
        HealthCheck {
            message: "Checking growing plant health: Progressing towards Mature state.",
            next: (plant.health() > 80).then_some(PlantState::Mature),
        }
    }
}

impl LifecycleStage for MatureStage {
    fn state(&self) -> PlantState {
        PlantState::Mature
    }

    fn water(&self, plant: &mut Plant) -> &'static str {
        plant.modify_health(10);
        "Watering mature plant with regular schedule."
    }

    fn fertilize(&self, plant: &mut Plant) -> &'static str {
        plant.modify_health(5);
        "Applying maintenance fertilizer to mature plant."
    }

    fn check_health(&self, _plant: &Plant) -> HealthCheck {
        HealthCheck {
            message: "Checking mature plant health: Stable and ready for sale.",
            next: None,
        }
    }
}

impl LifecycleStage for FloweringStage {
    fn state(&self) -> PlantState {
        PlantState::Flowering
    }

    fn water(&self, plant: &mut Plant) -> &'static str {
        plant.modify_health(15);
        "Watering flowering plant with extra care to support blooms."
    }

    fn fertilize(&self, plant: &mut Plant) -> &'static str {
        plant.modify_health(10);
        "Applying bloom-boosting fertilizer."
    }

    fn check_health(&self, _plant: &Plant) -> HealthCheck {
        HealthCheck {
            message: "Checking flowering plant health: Blooms indicate peak health.",
            next: None,
        }
    }
}

impl LifecycleStage for DormantStage {
    fn state(&self) -> PlantState {
        PlantState::Dormant
    }

    fn water(&self, plant: &mut Plant) -> &'static str {
        plant.modify_health(5);
        "Minimizing water for dormant plant to prevent rot."
    }

    fn fertilize(&self, _plant: &mut Plant) -> &'static str {
        "No fertilizing needed for dormant plant."
    }

    fn check_health(&self, _plant: &Plant) -> HealthCheck {
        HealthCheck {
            message: "Checking dormant plant health: Awaiting active growth season.",
            next: None,
        }
    }
}

pub fn stage_for(state: PlantState) -> &'static dyn LifecycleStage {
    match state {
        PlantState::Seedling => &SeedlingStage,
        PlantState::Growing => &GrowingStage,
        PlantState::Mature => &MatureStage,
        PlantState::Flowering => &FloweringStage,
        PlantState::Dormant => &DormantStage,
    }
}

/// Lifecycle state the season pushes a plant into, if any.
pub fn seasonal_transition(state: PlantState, season: Season) -> Option<PlantState> {
    match (season, state) {
        (
            Season::Winter,
            PlantState::Growing | PlantState::Mature | PlantState::Flowering,
        ) => Some(PlantState::Dormant),
        (Season::Spring, PlantState::Dormant) => Some(PlantState::Growing),
        (Season::Summer, PlantState::Mature) => Some(PlantState::Flowering),
        (Season::Fall, PlantState::Flowering) => Some(PlantState::Mature),
        _ => None,
    }
}

/// Drives a plant through its lifecycle, delegating care to the current stage.
pub struct PlantContext<'a> {
    plant: &'a mut Plant,
}

impl<'a> PlantContext<'a> {
    pub fn new(plant: &'a mut Plant) -> Self {
        Self { plant }
    }

    pub fn state(&self) -> PlantState {
        self.plant.state
    }

    pub fn state_name(&self) -> &'static str {
        self.plant.state.as_str()
    }

    pub fn plant(&self) -> &Plant {
        &*self.plant
    }

    pub fn set_state(&mut self, state: PlantState) {
        if self.plant.state != state {
            tracing::info!(
                plant = self.plant.id,
                from = %self.plant.state,
                to = %state,
                "Lifecycle transition"
            );
        }
        self.plant.state = state;
        if state.is_sellable() {
            self.plant.ready_for_sale = true;
        }
    }

    pub fn water(&mut self) -> String {
        stage_for(self.plant.state).water(self.plant).to_string()
    }

    pub fn fertilize(&mut self) -> String {
        stage_for(self.plant.state).fertilize(self.plant).to_string()
    }

    /// Run the stage's health check, applying any transition it calls for.
    pub fn check_health(&mut self) -> Vec<String> {
        let check = stage_for(self.plant.state).check_health(self.plant);
        let mut log = vec![check.message.to_string()];
        if let Some(next) = check.next {
            log.push(format!(
                "{} is healthy enough to transition to {} state.",
                self.plant.label(),
                next
            ));
            self.set_state(next);
        }
        log
    }

    pub fn change_season(&mut self, season: Season) -> Option<String> {
        self.plant.season = season;
        let next = seasonal_transition(self.plant.state, season)?;
        let message = format!(
            "{} moves from {} to {} for {}.",
            self.plant.label(),
            self.plant.state,
            next,
            season
        );
        self.set_state(next);
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    fn plant_in(state: PlantState, health: i32) -> Plant {
        let mut plant = Plant::new(1, Species::Rose);
        plant.state = state;
        plant.set_health(health);
        plant
    }

    #[test]
    fn stage_effects_on_health() {
        let cases = [
            (PlantState::Seedling, 10, 5),
            (PlantState::Growing, 15, 10),
            (PlantState::Mature, 10, 5),
            (PlantState::Flowering, 15, 10),
            (PlantState::Dormant, 5, 0),
        ];
        for (state, water_gain, fert_gain) in cases {
            let mut plant = plant_in(state, 20);
            let mut ctx = PlantContext::new(&mut plant);
            ctx.water();
            assert_eq!(ctx.plant().health() as i32, 20 + water_gain, "{}", state);
            ctx.fertilize();
            assert_eq!(
                ctx.plant().health() as i32,
                20 + water_gain + fert_gain,
                "{}",
                state
            );
        }
    }

    #[test]
    fn stage_messages() {
        let mut plant = plant_in(PlantState::Seedling, 20);
        let mut ctx = PlantContext::new(&mut plant);
        assert_eq!(
            ctx.water(),
            "Watering seedling with small amounts to avoid overwatering."
        );
        ctx.set_state(PlantState::Dormant);
        assert_eq!(ctx.fertilize(), "No fertilizing needed for dormant plant.");
    }

    #[test]
    fn healthy_seedling_grows() {
        let mut plant = plant_in(PlantState::Seedling, 60);
        let mut ctx = PlantContext::new(&mut plant);
        let log = ctx.check_health();
        assert_eq!(log.len(), 2);
        assert_eq!(ctx.state(), PlantState::Growing);
    }

    #[test]
    fn weak_seedling_stays() {
        let mut plant = plant_in(PlantState::Seedling, 50);
        let mut ctx = PlantContext::new(&mut plant);
        assert_eq!(ctx.check_health().len(), 1);
        assert_eq!(ctx.state_name(), "Seedling");
    }

    #[test]
    fn growing_to_mature_marks_ready() {
        let mut plant = plant_in(PlantState::Growing, 81);
        {
            let mut ctx = PlantContext::new(&mut plant);
            ctx.check_health();
        }
        assert_eq!(plant.state, PlantState::Mature);
        assert!(plant.ready_for_sale);
    }

    #[test]
    fn growing_needs_more_than_eighty() {
        let mut plant = plant_in(PlantState::Growing, 80);
        PlantContext::new(&mut plant).check_health();
        assert_eq!(plant.state, PlantState::Growing);
        assert!(!plant.ready_for_sale);
    }

    #[test]
    fn mature_never_transitions_on_health() {
        let mut plant = plant_in(PlantState::Mature, 100);
        PlantContext::new(&mut plant).check_health();
        assert_eq!(plant.state, PlantState::Mature);
    }

    #[test]
    fn seasonal_transitions() {
        assert_eq!(
            seasonal_transition(PlantState::Mature, Season::Winter),
            Some(PlantState::Dormant)
        );
        assert_eq!(seasonal_transition(PlantState::Seedling, Season::Winter), None);
        assert_eq!(
            seasonal_transition(PlantState::Dormant, Season::Spring),
            Some(PlantState::Growing)
        );
        assert_eq!(
            seasonal_transition(PlantState::Mature, Season::Summer),
            Some(PlantState::Flowering)
        );
        assert_eq!(
            seasonal_transition(PlantState::Flowering, Season::Fall),
            Some(PlantState::Mature)
        );
        assert_eq!(seasonal_transition(PlantState::Growing, Season::Summer), None);
    }

    #[test]
    fn change_season_updates_plant() {
        let mut plant = plant_in(PlantState::Mature, 90);
        let message = PlantContext::new(&mut plant).change_season(Season::Summer);
        assert!(message.is_some());
        assert_eq!(plant.state, PlantState::Flowering);
        assert_eq!(plant.season, Season::Summer);

        let none = PlantContext::new(&mut plant).change_season(Season::Spring);
        assert!(none.is_none());
        assert_eq!(plant.season, Season::Spring);
    }

    #[test]
    fn set_state_forces() {
        let mut plant = plant_in(PlantState::Seedling, 10);
        PlantContext::new(&mut plant).set_state(PlantState::Flowering);
        assert_eq!(plant.state, PlantState::Flowering);
        assert!(plant.ready_for_sale);
    }
}
