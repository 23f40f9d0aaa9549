use crate::error::{GreenOpsError, Result};
use crate::models::PlantState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PlantId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Rose,
    Cactus,
    Succulent,
    Lavender,
    Baobab,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Rose => "Rose",
            Species::Cactus => "Cactus",
            Species::Succulent => "Succulent",
            Species::Lavender => "Lavender",
            Species::Baobab => "Baobab",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rose" => Some(Species::Rose),
            "cactus" => Some(Species::Cactus),
            "succulent" => Some(Species::Succulent),
            "lavender" | "lavendar" => Some(Species::Lavender),
            "baobab" | "baobab tree" => Some(Species::Baobab),
            _ => None,
        }
    }

    pub fn all() -> &'static [Species] {
        &[
            Species::Rose,
            Species::Cactus,
            Species::Succulent,
            Species::Lavender,
            Species::Baobab,
        ]
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Species::Rose => Color::LightRed,
            Species::Cactus => Color::Green,
            Species::Succulent => Color::LightGreen,
            Species::Lavender => Color::Magenta,
            Species::Baobab => Color::Yellow,
        }
    }

    /// Care and pricing profile a freshly grown plant of this species starts with.
    pub fn profile(&self) -> SpeciesProfile {
        match self {
            Species::Rose => SpeciesProfile {
                scientific_name: "Rosa rubiginosa",
                days_to_maturity: 45,
                height_cm: 5.0,
                base_price: 45.0,
                watering_frequency_days: 3,
                sunlight_hours: 6,
                fertilizing_frequency_days: 14,
                soil_type: SoilType::Loamy,
                season: Season::Spring,
            },
            Species::Cactus => SpeciesProfile {
                scientific_name: "Cactaceae",
                days_to_maturity: 30,
                height_cm: 3.0,
                base_price: 25.0,
                watering_frequency_days: 14,
                sunlight_hours: 8,
                fertilizing_frequency_days: 60,
                soil_type: SoilType::Sandy,
                season: Season::Summer,
            },
            Species::Succulent => SpeciesProfile {
                scientific_name: "Crassulaceae",
                days_to_maturity: 40,
                height_cm: 2.5,
                base_price: 20.0,
                watering_frequency_days: 10,
                sunlight_hours: 6,
                fertilizing_frequency_days: 45,
                soil_type: SoilType::Sandy,
                season: Season::Summer,
            },
            Species::Lavender => SpeciesProfile {
                scientific_name: "Lavandula",
                days_to_maturity: 60,
                height_cm: 8.0,
                base_price: 35.0,
                watering_frequency_days: 7,
                sunlight_hours: 7,
                fertilizing_frequency_days: 30,
                soil_type: SoilType::Sandy,
                season: Season::Summer,
            },
            Species::Baobab => SpeciesProfile {
                scientific_name: "Adansonia",
                days_to_maturity: 120,
                height_cm: 15.0,
                base_price: 150.0,
                watering_frequency_days: 21,
                sunlight_hours: 10,
                fertilizing_frequency_days: 90,
                soil_type: SoilType::Sandy,
                season: Season::Summer,
            },
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesProfile {
    pub scientific_name: &'static str,
    pub days_to_maturity: u32,
    pub height_cm: f64,
    pub base_price: f64,
    pub watering_frequency_days: u32,
    pub sunlight_hours: u32,
    pub fertilizing_frequency_days: u32,
    pub soil_type: SoilType,
    pub season: Season,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Clay => "clay",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sandy" | "sand" => Some(SoilType::Sandy),
            "loamy" | "loam" => Some(SoilType::Loamy),
            "clay" => Some(SoilType::Clay),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    #[serde(alias = "autumn")]
    Fall,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const HEALTH_MAX: u8 = 100;
pub const HEALTHY_THRESHOLD: u8 = 70;
pub const PRUNE_HEIGHT_CM: f64 = 50.0;
pub const MAX_PRUNES: u32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub species: Species,
    pub scientific_name: String,
    pub age_days: u32,
    pub height_cm: f64,
    pub base_price: f64,
    pub ready_for_sale: bool,
    health: u8,

    pub watering_frequency_days: u32,
    pub sunlight_hours: u32,
    pub fertilizing_frequency_days: u32,
    pub soil_type: SoilType,

    pub days_to_maturity: u32,
    pub growth_days: u32,
    pub season: Season,
    pub state: PlantState,

    pub last_watered: Option<DateTime<Utc>>,
    pub last_fertilized: Option<DateTime<Utc>>,
    pub last_pruned: Option<DateTime<Utc>>,
    pub times_watered: u32,
    pub times_fertilized: u32,
    pub times_pruned: u32,

    pub location: String,
    pub shelf_number: Option<u32>,
}

impl Plant {
    pub fn new(id: PlantId, species: Species) -> Self {
        Self {
            id,
            species,
            scientific_name: String::new(),
            age_days: 0,
            height_cm: 0.0,
            base_price: 0.0,
            ready_for_sale: false,
            health: HEALTH_MAX,
            watering_frequency_days: 7,
            sunlight_hours: 6,
            fertilizing_frequency_days: 30,
            soil_type: SoilType::Loamy,
            days_to_maturity: 60,
            growth_days: 0,
            season: Season::Spring,
            state: PlantState::Seedling,
            last_watered: None,
            last_fertilized: None,
            last_pruned: None,
            times_watered: 0,
            times_fertilized: 0,
            times_pruned: 0,
            location: String::new(),
            shelf_number: None,
        }
    }

    pub fn with_maturity(species: Species, days_to_maturity: u32) -> Self {
        let mut plant = Self::new(0, species);
        plant.days_to_maturity = days_to_maturity;
        plant
    }

    pub fn apply_profile(&mut self, profile: &SpeciesProfile) {
        self.scientific_name = profile.scientific_name.to_string();
        self.days_to_maturity = profile.days_to_maturity;
        self.height_cm = profile.height_cm;
        self.base_price = profile.base_price;
        self.watering_frequency_days = profile.watering_frequency_days;
        self.sunlight_hours = profile.sunlight_hours;
        self.fertilizing_frequency_days = profile.fertilizing_frequency_days;
        self.soil_type = profile.soil_type;
        self.season = profile.season;
        self.set_health(HEALTH_MAX as i32);
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(0, HEALTH_MAX as i32) as u8;
    }

    pub fn modify_health(&mut self, delta: i32) {
        self.set_health(self.health as i32 + delta);
    }

    pub fn grow(&mut self, amount_cm: f64) {
        self.height_cm += amount_cm;
    }

    pub fn water(&mut self) {
        self.times_watered += 1;
        self.modify_health(5);
        self.last_watered = Some(Utc::now());
        tracing::debug!(plant = self.id, health = self.health, "{} watered", self.species);
    }

    pub fn fertilize(&mut self) {
        self.times_fertilized += 1;
        self.modify_health(10);
        self.grow(2.0);
        self.last_fertilized = Some(Utc::now());
        tracing::debug!(
            plant = self.id,
            health = self.health,
            height_cm = self.height_cm,
            "{} fertilized",
            self.species
        );
    }

    pub fn prune(&mut self) {
        self.times_pruned += 1;
        self.modify_health(3);
        self.last_pruned = Some(Utc::now());
        tracing::debug!(plant = self.id, "{} pruned", self.species);
    }

    pub fn increment_growth_days(&mut self) {
        self.growth_days += 1;
        if self.growth_days >= self.days_to_maturity && !self.ready_for_sale {
            self.ready_for_sale = true;
            tracing::info!(
                plant = self.id,
                "{} #{} is now mature and ready for sale",
                self.species,
                self.id
            );
        }
    }

    pub fn is_mature(&self) -> bool {
        self.growth_days >= self.days_to_maturity
    }

    pub fn needs_water(&self) -> bool {
        self.age_days
            .checked_div(self.watering_frequency_days)
            .is_some_and(|due| self.times_watered < due)
    }

    pub fn needs_fertilizer(&self) -> bool {
        self.age_days
            .checked_div(self.fertilizing_frequency_days)
            .is_some_and(|due| self.times_fertilized < due)
    }

    pub fn needs_pruning(&self) -> bool {
        self.height_cm > PRUNE_HEIGHT_CM && self.times_pruned < MAX_PRUNES
    }

    pub fn is_healthy(&self) -> bool {
        self.health > HEALTHY_THRESHOLD
    }

    pub fn needs_attention(&self) -> bool {
        self.needs_water() || self.needs_fertilizer() || self.needs_pruning() || !self.is_healthy()
    }

    /// Advance the plant by one simulated day.
    pub fn update(&mut self) {
        self.age_days += 1;
        self.increment_growth_days();

        if self.needs_water() {
            self.modify_health(-2);
        }
        if self.needs_fertilizer() {
            self.modify_health(-1);
        }

        if self.is_healthy() {
            self.grow(0.5);
        }
    }

    pub fn care_description(&self) -> String {
        format!(
            "Water every {} days, Fertilize every {} days",
            self.watering_frequency_days, self.fertilizing_frequency_days
        )
    }

    /// Copy used for propagation: same attributes, fresh care history.
    pub fn propagate(&self) -> Plant {
        let mut clone = self.clone();
        clone.times_watered = 0;
        clone.times_fertilized = 0;
        clone.times_pruned = 0;
        clone.last_watered = None;
        clone.last_fertilized = None;
        clone.last_pruned = None;
        clone
    }

    pub fn label(&self) -> String {
        format!("{} #{}", self.species, self.id)
    }

    /// CSV line: `id,species,age,height,health,ready`.
    pub fn serialize(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.id,
            self.species,
            self.age_days,
            self.height_cm,
            self.health,
            u8::from(self.ready_for_sale)
        )
    }

    pub fn deserialize(line: &str) -> Result<Plant> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(GreenOpsError::InvalidData(format!(
                "expected 6 fields in plant record, found {}: '{}'",
                fields.len(),
                line.trim()
            )));
        }

        let invalid = |name: &str, value: &str| {
            GreenOpsError::InvalidData(format!("invalid {} '{}' in plant record", name, value))
        };

        let id: PlantId = fields[0].parse().map_err(|_| invalid("id", fields[0]))?;
        let species = Species::from_str(fields[1]).ok_or_else(|| invalid("species", fields[1]))?;
        let age_days: u32 = fields[2].parse().map_err(|_| invalid("age", fields[2]))?;
        let height_cm: f64 = fields[3].parse().map_err(|_| invalid("height", fields[3]))?;
        let health: i32 = fields[4].parse().map_err(|_| invalid("health", fields[4]))?;
        let ready_for_sale = match fields[5] {
            "1" | "true" => true,
            "0" | "false" => false,
            other => return Err(invalid("ready flag", other)),
        };

        let profile = species.profile();
        let mut plant = Plant::with_maturity(species, profile.days_to_maturity);
        plant.apply_profile(&profile);
        plant.id = id;
        plant.age_days = age_days;
        plant.growth_days = age_days;
        plant.height_cm = height_cm;
        plant.set_health(health);
        plant.ready_for_sale = ready_for_sale;
        Ok(plant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rose() -> Plant {
        let profile = Species::Rose.profile();
        let mut plant = Plant::with_maturity(Species::Rose, profile.days_to_maturity);
        plant.apply_profile(&profile);
        plant.id = 1;
        plant
    }

    #[test]
    fn species_from_str_valid() {
        assert_eq!(Species::from_str("Rose"), Some(Species::Rose));
        assert_eq!(Species::from_str("cactus"), Some(Species::Cactus));
        assert_eq!(Species::from_str("Lavendar"), Some(Species::Lavender));
        assert_eq!(Species::from_str("Baobab Tree"), Some(Species::Baobab));
    }

    #[test]
    fn species_from_str_invalid() {
        assert_eq!(Species::from_str("orchid"), None);
        assert_eq!(Species::from_str(""), None);
    }

    #[test]
    fn season_accepts_autumn() {
        assert_eq!(Season::from_str("autumn"), Some(Season::Fall));
        assert_eq!(Season::from_str("Winter"), Some(Season::Winter));
        assert_eq!(Season::from_str("monsoon"), None);
        assert_eq!(Season::Winter.next(), Season::Spring);
    }

    #[test]
    fn generic_constructor_defaults() {
        let plant = Plant::new(7, Species::Cactus);
        assert_eq!(plant.id, 7);
        assert_eq!(plant.health(), 100);
        assert_eq!(plant.watering_frequency_days, 7);
        assert_eq!(plant.days_to_maturity, 60);
        assert_eq!(plant.soil_type, SoilType::Loamy);
        assert_eq!(plant.state, PlantState::Seedling);
        assert!(!plant.ready_for_sale);
    }

    #[test]
    fn health_is_clamped() {
        let mut plant = rose();
        plant.modify_health(50);
        assert_eq!(plant.health(), 100);
        plant.set_health(-20);
        assert_eq!(plant.health(), 0);
        plant.set_health(65);
        plant.modify_health(-10);
        assert_eq!(plant.health(), 55);
    }

    #[test]
    fn care_actions_update_history() {
        let mut plant = rose();
        plant.set_health(50);

        plant.water();
        assert_eq!(plant.health(), 55);
        assert_eq!(plant.times_watered, 1);
        assert!(plant.last_watered.is_some());

        plant.fertilize();
        assert_eq!(plant.health(), 65);
        assert_eq!(plant.height_cm, 7.0);
        assert_eq!(plant.times_fertilized, 1);

        plant.prune();
        assert_eq!(plant.health(), 68);
        assert_eq!(plant.times_pruned, 1);
    }

    #[test]
    fn becomes_ready_for_sale_at_maturity() {
        let mut plant = Plant::with_maturity(Species::Succulent, 2);
        plant.increment_growth_days();
        assert!(!plant.ready_for_sale);
        assert!(!plant.is_mature());
        plant.increment_growth_days();
        assert!(plant.ready_for_sale);
        assert!(plant.is_mature());
    }

    #[test]
    fn needs_water_follows_frequency() {
        let mut plant = rose();
        assert!(!plant.needs_water());
        plant.age_days = 6;
        // Two waterings due after six days on a three-day schedule
        assert!(plant.needs_water());
        plant.water();
        assert!(plant.needs_water());
        plant.water();
        assert!(!plant.needs_water());
    }

    #[test]
    fn zero_frequency_never_needs_care() {
        let mut plant = rose();
        plant.age_days = 30;
        plant.watering_frequency_days = 0;
        plant.fertilizing_frequency_days = 0;
        assert!(!plant.needs_water());
        assert!(!plant.needs_fertilizer());
    }

    #[test]
    fn needs_pruning_only_when_tall() {
        let mut plant = rose();
        assert!(!plant.needs_pruning());
        plant.height_cm = 55.0;
        assert!(plant.needs_pruning());
        plant.prune();
        plant.prune();
        plant.prune();
        assert!(!plant.needs_pruning());
    }

    #[test]
    fn neglected_plant_loses_health() {
        let mut plant = rose();
        for _ in 0..3 {
            plant.update();
        }
        // Day 3 on a three-day schedule: watering is overdue
        assert_eq!(plant.age_days, 3);
        assert_eq!(plant.health(), 98);
        assert!(plant.needs_attention());
    }

    #[test]
    fn healthy_plant_grows_daily() {
        let mut plant = rose();
        plant.update();
        assert_eq!(plant.height_cm, 5.5);
        assert_eq!(plant.growth_days, 1);
    }

    #[test]
    fn care_description_format() {
        let plant = rose();
        assert_eq!(
            plant.care_description(),
            "Water every 3 days, Fertilize every 14 days"
        );
    }

    #[test]
    fn propagate_resets_history() {
        let mut plant = rose();
        plant.water();
        plant.prune();
        plant.height_cm = 12.0;

        let clone = plant.propagate();
        assert_eq!(clone.species, Species::Rose);
        assert_eq!(clone.height_cm, 12.0);
        assert_eq!(clone.times_watered, 0);
        assert_eq!(clone.times_pruned, 0);
        assert!(clone.last_watered.is_none());
    }

    #[test]
    fn serialize_csv_line() {
        let mut plant = rose();
        plant.age_days = 12;
        plant.height_cm = 7.5;
        plant.set_health(88);
        plant.ready_for_sale = true;
        assert_eq!(plant.serialize(), "1,Rose,12,7.5,88,1");
    }

    #[test]
    fn deserialize_restores_fields() {
        let plant = Plant::deserialize("4, Cactus, 10, 3, 90, 0").unwrap();
        assert_eq!(plant.id, 4);
        assert_eq!(plant.species, Species::Cactus);
        assert_eq!(plant.age_days, 10);
        assert_eq!(plant.height_cm, 3.0);
        assert_eq!(plant.health(), 90);
        assert!(!plant.ready_for_sale);
        assert_eq!(plant.scientific_name, "Cactaceae");
        assert_eq!(plant.watering_frequency_days, 14);
    }

    #[test]
    fn deserialize_rejects_malformed_lines() {
        assert!(Plant::deserialize("1,Rose,12").is_err());
        assert!(Plant::deserialize("x,Rose,1,1,1,1").is_err());
        assert!(Plant::deserialize("1,Orchid,1,1,1,1").is_err());
        assert!(Plant::deserialize("1,Rose,1,1,1,maybe").is_err());
    }
}
