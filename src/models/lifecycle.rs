use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantState {
    #[default]
    Seedling,
    Growing,
    Mature,
    Flowering,
    Dormant,
}

impl PlantState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantState::Seedling => "Seedling",
            PlantState::Growing => "Growing",
            PlantState::Mature => "Mature",
            PlantState::Flowering => "Flowering",
            PlantState::Dormant => "Dormant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "seedling" => Some(PlantState::Seedling),
            "growing" => Some(PlantState::Growing),
            "mature" => Some(PlantState::Mature),
            "flowering" => Some(PlantState::Flowering),
            "dormant" => Some(PlantState::Dormant),
            _ => None,
        }
    }

    pub fn all() -> &'static [PlantState] {
        &[
            PlantState::Seedling,
            PlantState::Growing,
            PlantState::Mature,
            PlantState::Flowering,
            PlantState::Dormant,
        ]
    }

    /// Mature and flowering plants can be sold.
    pub fn is_sellable(&self) -> bool {
        matches!(self, PlantState::Mature | PlantState::Flowering)
    }
}

impl std::fmt::Display for PlantState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
