use crate::error::{GreenOpsError, Result};
use crate::models::Season;
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub greenhouse: GreenhouseConfig,
    #[serde(default)]
    pub customer: CustomerConfig,
    #[serde(default)]
    pub irrigation: IrrigationConfig,
    #[serde(default)]
    pub staff: StaffConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GreenhouseConfig {
    pub name: String,
    #[serde(default)]
    pub season: Season,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomerConfig {
    #[serde(default = "default_customer_name")]
    pub name: String,
    #[serde(default = "default_balance")]
    pub starting_balance: f64,
}

impl Default for CustomerConfig {
    fn default() -> Self {
        Self {
            name: default_customer_name(),
            starting_balance: default_balance(),
        }
    }
}

fn default_customer_name() -> String {
    "Walk-in Customer".into()
}

fn default_balance() -> f64 {
    5000.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IrrigationConfig {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_pressure")]
    pub pressure: u8,
}

impl Default for IrrigationConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            pressure: default_pressure(),
        }
    }
}

fn default_mode() -> String {
    "manual".into()
}

fn default_pressure() -> u8 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaffConfig {
    #[serde(default = "default_plant_care_staff")]
    pub plant_care: Vec<String>,
    #[serde(default = "default_sales_staff")]
    pub sales: Vec<String>,
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            plant_care: default_plant_care_staff(),
            sales: default_sales_staff(),
        }
    }
}

fn default_plant_care_staff() -> Vec<String> {
    vec!["Thandi".into()]
}

fn default_sales_staff() -> Vec<String> {
    vec!["Sipho".into()]
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(GreenOpsError::Config(format!(
                "Config file not found at {:?}. Run `greenops init` to set up.",
                config_path
            )));
        }

        Self::from_file(&config_path)
    }

    /// Load the config, falling back to built-in defaults when no file exists.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if Self::exists(config_override.as_ref()) {
            return Self::load(config_override);
        }
        tracing::warn!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| GreenOpsError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| GreenOpsError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.greenhouse.name.trim().is_empty() {
            return Err(GreenOpsError::Config("greenhouse.name must not be empty".into()));
        }
        if !(1..=10).contains(&self.irrigation.pressure) {
            return Err(GreenOpsError::Config(format!(
                "irrigation.pressure must be between 1 and 10, got {}",
                self.irrigation.pressure
            )));
        }
        if !matches!(
            self.irrigation.mode.to_lowercase().as_str(),
            "manual" | "timer" | "sensor"
        ) {
            return Err(GreenOpsError::Config(format!(
                "irrigation.mode must be manual, timer or sensor, got '{}'",
                self.irrigation.mode
            )));
        }
        let balance = self.customer.starting_balance;
        if !balance.is_finite() || balance < 0.0 {
            return Err(GreenOpsError::Config(format!(
                "customer.starting_balance must be a non-negative amount, got {}",
                balance
            )));
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("greenops").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/greenops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GreenOpsError::Config("Cannot determine config directory".into()))?
            .join("greenops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up GreenOps!");
        println!();

        println!("Greenhouse");
        let name: String = Input::new()
            .with_prompt("  Greenhouse name")
            .default("Main Greenhouse".into())
            .interact_text()
            .map_err(|e| GreenOpsError::Config(format!("Input error: {}", e)))?;

        let season_str: String = Input::new()
            .with_prompt("  Current season (spring, summer, fall, winter)")
            .default("spring".into())
            .validate_with(|s: &String| -> std::result::Result<(), &str> {
                Season::from_str(s).map(|_| ()).ok_or("unknown season")
            })
            .interact_text()
            .map_err(|e| GreenOpsError::Config(format!("Input error: {}", e)))?;
        let season = Season::from_str(&season_str).unwrap_or_default();

        println!();

        println!("Shop");
        let starting_balance: f64 = Input::new()
            .with_prompt("  Customer starting balance (R)")
            .default(default_balance())
            .interact_text()
            .map_err(|e| GreenOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Staff (comma separated names)");
        let plant_care: String = Input::new()
            .with_prompt("  Plant care staff")
            .default(default_plant_care_staff().join(", "))
            .interact_text()
            .map_err(|e| GreenOpsError::Config(format!("Input error: {}", e)))?;

        let sales: String = Input::new()
            .with_prompt("  Sales staff")
            .default(default_sales_staff().join(", "))
            .interact_text()
            .map_err(|e| GreenOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            greenhouse: GreenhouseConfig { name, season },
            customer: CustomerConfig {
                starting_balance,
                ..CustomerConfig::default()
            },
            irrigation: IrrigationConfig::default(),
            staff: StaffConfig {
                plant_care: split_names(&plant_care),
                sales: split_names(&sales),
            },
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        config.write_to(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| GreenOpsError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# GreenOps Configuration\n# Generated by `greenops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

fn split_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greenhouse: GreenhouseConfig {
                name: "Main Greenhouse".into(),
                season: Season::Spring,
            },
            customer: CustomerConfig::default(),
            irrigation: IrrigationConfig::default(),
            staff: StaffConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.customer.starting_balance, 5000.0);
        assert_eq!(config.irrigation.pressure, 5);
        assert_eq!(config.greenhouse.season, Season::Spring);
    }

    #[test]
    fn load_minimal_file_fills_defaults() {
        let file = write_config("greenhouse:\n  name: Test House\n  season: winter\n");
        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.greenhouse.name, "Test House");
        assert_eq!(config.greenhouse.season, Season::Winter);
        assert_eq!(config.irrigation.mode, "manual");
        assert_eq!(config.staff.plant_care, vec!["Thandi".to_string()]);
    }

    #[test]
    fn load_full_file() {
        let file = write_config(
            "greenhouse:\n  name: Cape Nursery\n  season: summer\ncustomer:\n  name: Lindiwe\n  starting_balance: 250.5\nirrigation:\n  mode: timer\n  pressure: 7\nstaff:\n  plant_care: [Ann, Ben]\n  sales: [Cara]\n",
        );
        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.customer.name, "Lindiwe");
        assert_eq!(config.customer.starting_balance, 250.5);
        assert_eq!(config.irrigation.pressure, 7);
        assert_eq!(config.staff.plant_care.len(), 2);
        assert_eq!(config.staff.sales, vec!["Cara".to_string()]);
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = Config::load(Some(path)).unwrap_err();
        assert!(matches!(err, GreenOpsError::Config(_)));
    }

    #[test]
    fn load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let config = Config::load_or_default(Some(path)).unwrap();
        assert_eq!(config.greenhouse.name, "Main Greenhouse");
    }

    #[test]
    fn invalid_pressure_rejected() {
        let file = write_config("greenhouse:\n  name: X\nirrigation:\n  pressure: 11\n");
        assert!(Config::load(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn autumn_is_read_as_fall() {
        let file = write_config("greenhouse:\n  name: X\n  season: autumn\n");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.greenhouse.season, Season::Fall);
    }

    #[test]
    fn non_finite_balance_rejected() {
        let mut config = Config::default();
        config.customer.starting_balance = f64::NAN;
        assert!(config.validate().is_err());
        config.customer.starting_balance = f64::INFINITY;
        assert!(config.validate().is_err());
        config.customer.starting_balance = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_mode_rejected() {
        let mut config = Config::default();
        config.irrigation.mode = "flood".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_vars_substituted() {
        std::env::set_var("GREENOPS_TEST_HOUSE", "Env House");
        let file = write_config("greenhouse:\n  name: ${GREENOPS_TEST_HOUSE}\n");
        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.greenhouse.name, "Env House");
    }

    #[test]
    fn unknown_env_var_left_in_place() {
        let out = Config::substitute_env_vars("name: ${GREENOPS_DEFINITELY_UNSET_VAR}");
        assert_eq!(out, "name: ${GREENOPS_DEFINITELY_UNSET_VAR}");
    }

    #[test]
    fn write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let mut config = Config::default();
        config.greenhouse.name = "Written".into();
        config.write_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# GreenOps Configuration"));
        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded.greenhouse.name, "Written");
    }

    #[test]
    fn split_names_trims_and_skips_empty() {
        assert_eq!(split_names(" a, b ,,c "), vec!["a", "b", "c"]);
    }
}
