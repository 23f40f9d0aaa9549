use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "greenops", version, about = "Greenhouse management simulation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// Validate config and run an irrigation diagnostic
    Check,
    /// Print the greenhouse section/shelf/plant hierarchy
    Layout,
    /// List plants in the greenhouse
    Inventory {
        /// Print one CSV record per plant
        #[arg(long, conflicts_with = "json")]
        csv: bool,
        /// Print the inventory as JSON
        #[arg(long)]
        json: bool,
        /// Only show plants that are ready for sale
        #[arg(long)]
        ready: bool,
    },
    /// Run daily maintenance for a number of days
    Simulate {
        #[arg(default_value_t = 7)]
        days: u32,
        /// Season to switch to before simulating
        #[arg(long)]
        season: Option<String>,
    },
    /// Run the species care routine on a plant
    Care { plant_id: u32 },
    /// Water a plant using a watering strategy
    Water {
        #[arg(value_enum)]
        strategy: StrategyArg,
        plant_id: u32,
    },
    /// Walk a plant through its lifecycle states
    Lifecycle { plant_id: u32 },
    /// Water the greenhouse through the legacy irrigation adapter
    Irrigate {
        /// Season to adjust for before watering
        #[arg(long)]
        season: Option<String>,
    },
    /// Queue staff tasks and execute them
    Schedule {
        #[arg(value_enum, required = true)]
        tasks: Vec<TaskArg>,
        /// Apply the species care routine before the batch
        #[arg(long)]
        routine: bool,
    },
    /// Buy a plant with optional decorations
    Buy {
        plant_id: u32,
        /// Pot style (ceramic, terracotta, modern, vintage)
        #[arg(long)]
        pot: Option<String>,
        #[arg(long, default_value = "white")]
        pot_color: String,
        /// Gift wrap style (classic, modern, festive, elegant)
        #[arg(long)]
        wrap: Option<String>,
        #[arg(long, default_value = "red")]
        ribbon: String,
        #[arg(long)]
        no_bow: bool,
        /// Greeting card type (birthday, thank_you, get_well, congratulations, custom)
        #[arg(long)]
        card: Option<String>,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long, default_value = "")]
        to: String,
        #[arg(long, default_value = "")]
        from: String,
    },
    /// Build a plant arrangement and optionally buy it
    Arrange {
        #[arg(value_enum)]
        kind: ArrangementArg,
        #[arg(long)]
        deluxe: bool,
        /// Landscape theme
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        buy: bool,
    },
    /// Propagate a plant by cloning it, or from a nursery mother plant
    Propagate {
        #[arg(required_unless_present = "species")]
        plant_id: Option<u32>,
        #[arg(long, conflicts_with = "plant_id")]
        species: Option<String>,
    },
    /// Add plants to the greenhouse from a CSV file
    Restock {
        file: PathBuf,
        #[arg(long, default_value_t = 1)]
        shelf: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Frequent,
    Moderate,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskArg {
    Water,
    Fertilize,
    Prune,
    Assist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArrangementArg {
    Gift,
    Landscape,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["greenops"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_buy_with_decorations() {
        let cli = Cli::try_parse_from([
            "greenops", "buy", "3", "--pot", "ceramic", "--card", "birthday", "--to", "Mom",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Buy {
                plant_id,
                pot,
                pot_color,
                card,
                to,
                no_bow,
                ..
            }) => {
                assert_eq!(plant_id, 3);
                assert_eq!(pot.as_deref(), Some("ceramic"));
                assert_eq!(pot_color, "white");
                assert_eq!(card.as_deref(), Some("birthday"));
                assert_eq!(to, "Mom");
                assert!(!no_bow);
            }
            _ => panic!("expected buy"),
        }
    }

    #[test]
    fn parses_schedule_tasks() {
        let cli =
            Cli::try_parse_from(["greenops", "-vv", "schedule", "water", "prune", "assist"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Schedule { tasks, routine }) => {
                assert_eq!(tasks, vec![TaskArg::Water, TaskArg::Prune, TaskArg::Assist]);
                assert!(!routine);
            }
            _ => panic!("expected schedule"),
        }
    }

    #[test]
    fn propagate_requires_target() {
        assert!(Cli::try_parse_from(["greenops", "propagate"]).is_err());
        assert!(Cli::try_parse_from(["greenops", "propagate", "--species", "rose"]).is_ok());
        assert!(Cli::try_parse_from(["greenops", "propagate", "2"]).is_ok());
    }

    #[test]
    fn simulate_defaults_to_a_week() {
        let cli = Cli::try_parse_from(["greenops", "simulate"]).unwrap();
        match cli.command {
            Some(Commands::Simulate { days, season }) => {
                assert_eq!(days, 7);
                assert!(season.is_none());
            }
            _ => panic!("expected simulate"),
        }
    }
}
