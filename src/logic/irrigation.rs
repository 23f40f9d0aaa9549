use crate::config::IrrigationConfig;
use crate::error::{GreenOpsError, Result};
use crate::models::{ComponentKind, GreenhouseComponent, PlantId, Season};
use chrono::{DateTime, Utc};

pub const MIN_PRESSURE: u8 = 1;
pub const MAX_PRESSURE: u8 = 10;
pub const DEFAULT_PRESSURE: u8 = 5;
pub const DRY_AFTER_DAYS: u32 = 5;
pub const BASE_DURATION_MINUTES: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LegacyMode {
    #[default]
    Manual,
    Timer,
    Sensor,
}

impl LegacyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyMode::Manual => "manual",
            LegacyMode::Timer => "timer",
            LegacyMode::Sensor => "sensor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Some(LegacyMode::Manual),
            "timer" => Some(LegacyMode::Timer),
            "sensor" => Some(LegacyMode::Sensor),
            _ => None,
        }
    }
}

impl std::fmt::Display for LegacyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneActivation {
    pub zone: u32,
    pub duration_minutes: u32,
    pub pressure: u8,
    pub mode: LegacyMode,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub passed: bool,
    pub checks: Vec<(&'static str, bool)>,
}

/// Zone-based irrigation controller with its own pressure and mode settings.
#[derive(Debug, Clone)]
pub struct LegacyIrrigationSystem {
    pressure: u8,
    mode: LegacyMode,
    active: bool,
    activation_count: u64,
    last_activation: Option<ZoneActivation>,
}

impl LegacyIrrigationSystem {
    pub fn new() -> Self {
        Self {
            pressure: DEFAULT_PRESSURE,
            mode: LegacyMode::Manual,
            active: true,
            activation_count: 0,
            last_activation: None,
        }
    }

    pub fn from_config(config: &IrrigationConfig) -> Result<Self> {
        let mut system = Self::new();
        system.set_pressure(config.pressure as i32)?;
        system.set_mode(&config.mode)?;
        Ok(system)
    }

    pub fn pressure(&self) -> u8 {
        self.pressure
    }

    pub fn mode(&self) -> LegacyMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn activation_count(&self) -> u64 {
        self.activation_count
    }

    pub fn last_activation(&self) -> Option<&ZoneActivation> {
        self.last_activation.as_ref()
    }

    pub fn set_pressure(&mut self, pressure: i32) -> Result<()> {
        if !(MIN_PRESSURE as i32..=MAX_PRESSURE as i32).contains(&pressure) {
            tracing::warn!(pressure, "Rejected irrigation pressure");
            return Err(GreenOpsError::Irrigation(format!(
                "Pressure must be between {}-{}, got {}",
                MIN_PRESSURE, MAX_PRESSURE, pressure
            )));
        }
        self.pressure = pressure as u8;
        tracing::debug!(pressure, "Irrigation pressure adjusted");
        Ok(())
    }

    pub fn set_mode(&mut self, mode: &str) -> Result<()> {
        let mode = LegacyMode::from_str(mode).ok_or_else(|| {
            GreenOpsError::Irrigation(format!(
                "Invalid mode '{}'. Use 'manual', 'timer', or 'sensor'",
                mode
            ))
        })?;
        self.set_operating_mode(mode);
        Ok(())
    }

    pub fn set_operating_mode(&mut self, mode: LegacyMode) {
        self.mode = mode;
        tracing::debug!(mode = %mode, "Irrigation mode set");
    }

    pub fn activate_zone(&mut self, zone: u32, duration_minutes: u32) -> Result<ZoneActivation> {
        if !self.active {
            return Err(GreenOpsError::Irrigation("System is not active".into()));
        }
        let activation = ZoneActivation {
            zone,
            duration_minutes,
            pressure: self.pressure,
            mode: self.mode,
            at: Utc::now(),
        };
        tracing::info!(
            zone,
            duration_minutes,
            pressure = self.pressure,
            mode = %self.mode,
            "Activating irrigation zone"
        );
        self.activation_count += 1;
        self.last_activation = Some(activation.clone());
        Ok(activation)
    }

    pub fn deactivate_zone(&mut self, zone: u32) {
        tracing::debug!(zone, "Deactivating irrigation zone");
    }

    /// A zone is dry once it has gone more than five days without water.
    pub fn check_moisture(&self, zone: u32, days_since_last_water: u32) -> bool {
        let dry = days_since_last_water > DRY_AFTER_DAYS;
        tracing::debug!(zone, days_since_last_water, dry, "Moisture check");
        dry
    }

    pub fn status(&self) -> String {
        let last = match &self.last_activation {
            Some(a) => format!(
                "zone {} for {} min at {}",
                a.zone,
                a.duration_minutes,
                a.at.format("%H:%M:%S")
            ),
            None => "never".to_string(),
        };
        format!(
            "Active: {}\nMode: {}\nPressure: {}/10\nActivations: {}\nLast Run: {}\nSystem Version: 1.2",
            if self.active { "YES" } else { "NO" },
            self.mode,
            self.pressure,
            self.activation_count,
            last
        )
    }

    pub fn run_diagnostic(&self) -> Diagnostic {
        let checks = vec![
            ("valves", true),
            ("pressure", (MIN_PRESSURE..=MAX_PRESSURE).contains(&self.pressure)),
            ("zones", self.active),
        ];
        let passed = checks.iter().all(|(_, ok)| *ok);
        if passed {
            tracing::info!("Irrigation diagnostic complete - all systems operational");
        } else {
            tracing::warn!("Irrigation diagnostic found problems");
        }
        Diagnostic { passed, checks }
    }
}

impl Default for LegacyIrrigationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WateringReport {
    pub season: Season,
    pub multiplier: f64,
    pub duration_minutes: u32,
    pub zones: Vec<u32>,
    pub watered_plants: Vec<PlantId>,
}

/// Season-aware watering interface used by the greenhouse controller.
pub trait ModernWateringSystem: Send {
    fn water_greenhouse(&mut self, greenhouse: &GreenhouseComponent) -> Result<WateringReport>;
    fn adjust_for_season(&mut self, season: Season) -> Result<()>;
    fn system_status(&self) -> String;
}

pub fn seasonal_settings(season: Season) -> (f64, u8) {
    match season {
        Season::Spring => (1.0, 5),
        Season::Summer => (1.5, 7),
        Season::Fall => (0.8, 5),
        Season::Winter => (0.6, 4),
    }
}

/// Drives the legacy zone controller through the modern watering interface.
#[derive(Debug)]
pub struct WateringAdapter {
    legacy: LegacyIrrigationSystem,
    season: Season,
    multiplier: f64,
    zone_count: u32,
}

impl WateringAdapter {
    pub fn new(mut legacy: LegacyIrrigationSystem) -> Self {
        legacy.set_operating_mode(LegacyMode::Manual);
        Self {
            legacy,
            season: Season::Spring,
            multiplier: 1.0,
            zone_count: 1,
        }
    }

    pub fn legacy(&self) -> &LegacyIrrigationSystem {
        &self.legacy
    }

    pub fn legacy_mut(&mut self) -> &mut LegacyIrrigationSystem {
        &mut self.legacy
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn duration_minutes(&self) -> u32 {
        (BASE_DURATION_MINUTES * self.multiplier) as u32
    }
}

impl ModernWateringSystem for WateringAdapter {
    fn water_greenhouse(&mut self, greenhouse: &GreenhouseComponent) -> Result<WateringReport> {
        let duration = self.duration_minutes();

        // One zone per top-level section; a greenhouse without sections is a single zone.
        let sections: Vec<&GreenhouseComponent> = greenhouse
            .children()
            .iter()
            .filter(|c| matches!(c.kind, ComponentKind::Section { .. }))
            .collect();

        let mut zones = Vec::new();
        let mut watered_plants = Vec::new();
        if sections.is_empty() {
            self.legacy.activate_zone(1, duration)?;
            zones.push(1);
            watered_plants.extend(greenhouse.plant_ids());
        } else {
            for (index, section) in sections.iter().enumerate() {
                let zone = index as u32 + 1;
                self.legacy.activate_zone(zone, duration)?;
                zones.push(zone);
                watered_plants.extend(section.plant_ids());
            }
        }
        for zone in &zones {
            self.legacy.deactivate_zone(*zone);
        }
        self.zone_count = zones.len() as u32;

        Ok(WateringReport {
            season: self.season,
            multiplier: self.multiplier,
            duration_minutes: duration,
            zones,
            watered_plants,
        })
    }

    fn adjust_for_season(&mut self, season: Season) -> Result<()> {
        let (multiplier, pressure) = seasonal_settings(season);
        self.legacy.set_pressure(pressure as i32)?;
        tracing::info!(
            from = %self.season,
            to = %season,
            multiplier,
            pressure,
            "Watering adjusted for season"
        );
        self.season = season;
        self.multiplier = multiplier;
        Ok(())
    }

    fn system_status(&self) -> String {
        format!(
            "Adapter Layer: ACTIVE\nSeason: {}\nMultiplier: {}x\nActive Zones: {}\n-- Legacy system --\n{}",
            self.season,
            self.multiplier,
            self.zone_count,
            self.legacy.status()
        )
    }
}
