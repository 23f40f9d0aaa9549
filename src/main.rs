mod app;
mod cli;
mod config;
mod error;
mod logic;
mod models;
mod ui;

use anyhow::{anyhow, Context};
use app::{App, Screen};
use clap::Parser;
use cli::{ArrangementArg, Cli, Commands, StrategyArg, TaskArg};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use logic::care::{FrequentWatering, MinimalWatering, ModerateWatering, PlantCareStrategy};
use logic::irrigation::LegacyIrrigationSystem;
use logic::operations::{ArrangementKind, ArrangementTier, TaskKind};
use logic::GreenhouseService;
use models::{format_rand, CardType, Decoration, PotStyle, Season, Species, WrapStyle};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{DashboardScreen, InventoryScreen, LayoutScreen, ShopScreen, TasksScreen};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            Ok(())
        }
        Some(Commands::Check) => check(cli.config),
        Some(command) => {
            let config = Config::load_or_default(cli.config)?;
            let mut service = GreenhouseService::new(&config)?;
            run_command(&mut service, command)
        }
        None => {
            let config = Config::load_or_default(cli.config)?;
            run_tui(config)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn check(config_override: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let config = Config::load(config_override)?;
    println!("Configuration OK: {}", config.greenhouse.name);
    println!(
        "  Season {}, customer {} with {}",
        config.greenhouse.season,
        config.customer.name,
        format_rand(config.customer.starting_balance)
    );
    println!(
        "  Staff: {} plant care, {} sales",
        config.staff.plant_care.len(),
        config.staff.sales.len()
    );
    println!();

    let irrigation = LegacyIrrigationSystem::from_config(&config.irrigation)?;
    println!("{}", irrigation.status());
    let diagnostic = irrigation.run_diagnostic();
    for (name, ok) in &diagnostic.checks {
        println!("  {:<10} {}", name, if *ok { "OK" } else { "FAIL" });
    }
    if !diagnostic.passed {
        return Err(anyhow!("irrigation diagnostic failed"));
    }
    println!("All systems operational");
    Ok(())
}

fn parse_season(value: Option<String>) -> anyhow::Result<Option<Season>> {
    value
        .map(|s| Season::from_str(&s).ok_or_else(|| anyhow!("unknown season '{}'", s)))
        .transpose()
}

fn strategy(arg: StrategyArg) -> Box<dyn PlantCareStrategy> {
    match arg {
        StrategyArg::Frequent => Box::new(FrequentWatering),
        StrategyArg::Moderate => Box::new(ModerateWatering),
        StrategyArg::Minimal => Box::new(MinimalWatering),
    }
}

fn task_kind(arg: TaskArg) -> TaskKind {
    match arg {
        TaskArg::Water => TaskKind::Water,
        TaskArg::Fertilize => TaskKind::Fertilize,
        TaskArg::Prune => TaskKind::Prune,
        TaskArg::Assist => TaskKind::AssistCustomer,
    }
}

fn run_command(service: &mut GreenhouseService, command: Commands) -> anyhow::Result<()> {
    match command {
        // Handled in main before the greenhouse is seeded
        Commands::Init | Commands::Check => {}
        Commands::Layout => {
            println!("{}", service.greenhouse_status());
        }
        Commands::Inventory { csv, json, ready } => {
            let plants: Vec<&models::Plant> = service
                .manager()
                .iterator()
                .filter(|p| !ready || p.ready_for_sale)
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&plants)?);
            } else if csv && !ready {
                print!("{}", service.export_csv());
            } else if csv {
                for plant in plants {
                    println!("{}", plant.serialize());
                }
            } else if ready {
                println!("=== Ready for Sale ===");
                for plant in &plants {
                    println!(
                        "{:<14} {:>10}  {}",
                        plant.label(),
                        format_rand(plant.base_price),
                        plant.location
                    );
                }
                println!("Total ready: {}", plants.len());
            } else {
                print!("{}", service.manager().report());
            }
        }
        Commands::Simulate { days, season } => {
            if let Some(season) = parse_season(season)? {
                for line in service.change_season(season)? {
                    println!("{}", line);
                }
            }
            for _ in 0..days {
                let report = service.advance_day()?;
                println!(
                    "Day {:>3}: {} plants, zones {:?} watered {} min",
                    service.day(),
                    report.plants_updated,
                    report.watering.zones,
                    report.watering.duration_minutes
                );
                for line in &report.transitions {
                    println!("         {}", line);
                }
                for id in &report.newly_ready {
                    println!("         Plant #{} is ready for sale", id);
                }
            }
            println!();
            print!("{}", service.manager().report());
        }
        Commands::Care { plant_id } => {
            for line in service.care(plant_id)? {
                println!("{}", line);
            }
        }
        Commands::Water { strategy: arg, plant_id } => {
            let message = service.water_with_strategy(plant_id, strategy(arg))?;
            println!("{}", message);
        }
        Commands::Lifecycle { plant_id } => {
            for line in service.lifecycle_care(plant_id)? {
                println!("{}", line);
            }
        }
        Commands::Irrigate { season } => {
            if let Some(season) = parse_season(season)? {
                service.change_season(season)?;
            }
            let report = service.irrigate()?;
            println!(
                "Watered {} plants in zones {:?} for {} minutes ({}x {})",
                report.watered_plants.len(),
                report.zones,
                report.duration_minutes,
                report.multiplier,
                report.season
            );
            println!();
            println!("{}", service.system_status());
        }
        Commands::Schedule { tasks, routine } => {
            for task in tasks {
                service.queue_task(task_kind(task))?;
            }
            service.set_care_routine(routine);
            for outcome in service.run_tasks() {
                println!("== {} ({}) ==", outcome.task, outcome.staff);
                for line in &outcome.log {
                    println!("  {}", line);
                }
            }
            println!("Customers assisted: {}", service.customers_assisted());
        }
        Commands::Buy {
            plant_id,
            pot,
            pot_color,
            wrap,
            ribbon,
            no_bow,
            card,
            message,
            to,
            from,
        } => {
            let mut decorations = Vec::new();
            if let Some(style) = pot {
                decorations.push(Decoration::Pot {
                    style: PotStyle::from(style.as_str()),
                    color: pot_color,
                });
            }
            if let Some(style) = wrap {
                decorations.push(Decoration::Wrap {
                    style: WrapStyle::from(style.as_str()),
                    ribbon_color: ribbon,
                    bow: !no_bow,
                });
            }
            if let Some(card_type) = card {
                decorations.push(Decoration::Card {
                    card_type: CardType::from(card_type.as_str()),
                    message,
                    recipient: to,
                    sender: from,
                });
            }
            let receipt = service.purchase(plant_id, &decorations)?;
            println!("{}", receipt.render());
            println!(
                "Remaining balance: {}",
                format_rand(service.customer().balance)
            );
        }
        Commands::Arrange {
            kind,
            deluxe,
            theme,
            buy,
        } => {
            let kind = match kind {
                ArrangementArg::Gift => ArrangementKind::Gift,
                ArrangementArg::Landscape => ArrangementKind::Landscape,
            };
            let tier = if deluxe {
                ArrangementTier::Deluxe
            } else {
                ArrangementTier::Simple
            };
            let arrangement = service.build_arrangement(kind, tier, theme.as_deref())?;
            println!("{}", arrangement.summary());
            if buy {
                let receipt = service.purchase_arrangement(&arrangement)?;
                println!();
                println!("{}", receipt.render());
                println!(
                    "Remaining balance: {}",
                    format_rand(service.customer().balance)
                );
            }
        }
        Commands::Propagate { plant_id, species } => {
            let new_id = match (plant_id, species) {
                (Some(id), _) => service.propagate(id)?,
                (None, Some(name)) => {
                    let species = Species::from_str(&name).ok_or_else(|| {
                        let known: Vec<&str> =
                            service.nursery_species().iter().map(|s| s.as_str()).collect();
                        anyhow!(
                            "unknown species '{}' (nursery stocks: {})",
                            name,
                            known.join(", ")
                        )
                    })?;
                    service.propagate_species(species)?
                }
                (None, None) => return Err(anyhow!("give a plant id or --species")),
            };
            let plant = service
                .manager()
                .get(new_id)
                .context("propagated plant missing from inventory")?;
            println!("Propagated {} at {}", plant.label(), plant.location);
        }
        Commands::Restock { file, shelf } => {
            let ids = service
                .restock_from_csv(&file, shelf)
                .with_context(|| format!("restocking from {}", file.display()))?;
            println!("Added {} plants to shelf #{}", ids.len(), shelf);
            print!("{}", service.manager().report());
        }
    }
    Ok(())
}

fn run_tui(config: Config) -> anyhow::Result<()> {
    let mut app = App::new(config)?;
    app.set_status("Welcome - press [n] to advance a day");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let service = &app.service;

            match app.screen {
                Screen::Dashboard => {
                    let screen = DashboardScreen::new(service, &app.activity)
                        .with_starting_balance(app.config.customer.starting_balance)
                        .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Layout => {
                    let screen = LayoutScreen::new(service)
                        .with_report(app.last_report.as_ref())
                        .with_scroll(app.layout_state.scroll);
                    f.render_widget(screen, area);
                }
                Screen::Inventory => {
                    let screen = InventoryScreen::new(app.plants())
                        .with_selection(app.inventory_state.selected_index);
                    f.render_widget(screen, area);
                }
                Screen::Tasks => {
                    let screen =
                        TasksScreen::new(service).with_routine(app.tasks_state.routine_enabled);
                    f.render_widget(screen, area);
                }
                Screen::Shop => {
                    let screen = ShopScreen::new(service)
                        .with_selection(app.shop_state.selected_index)
                        .with_decorations(app.shop_state.decorations())
                        .deluxe(app.shop_state.deluxe);
                    f.render_widget(screen, area);
                }
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('q') => app.quit(),
                    KeyCode::Esc => app.switch_screen(Screen::Dashboard),
                    KeyCode::Char('n') => app.advance_day(),
                    KeyCode::Char(c) => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => handle_screen_input(app, key.code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Dashboard => handle_dashboard_input(app, code),
        Screen::Layout => handle_layout_input(app, code),
        Screen::Inventory => handle_inventory_input(app, code),
        Screen::Tasks => handle_tasks_input(app, code),
        Screen::Shop => handle_shop_input(app, code),
    }
}

fn handle_dashboard_input(app: &mut App, code: KeyCode) {
    if let KeyCode::Char('s') = code {
        app.next_season();
    }
}

fn handle_layout_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up => app.layout_state.scroll_up(),
        KeyCode::Down => app.layout_state.scroll_down(),
        KeyCode::Char('s') => app.next_season(),
        _ => {}
    }
}

fn handle_inventory_input(app: &mut App, code: KeyCode) {
    let count = app.plants().len();
    match code {
        KeyCode::Up => app.inventory_state.prev(),
        KeyCode::Down => app.inventory_state.next(count),
        KeyCode::Char('c') => app.care_for_selected(),
        KeyCode::Char('w') => app.water_selected(),
        KeyCode::Char('l') => app.lifecycle_selected(),
        KeyCode::Char('p') => app.propagate_selected(),
        _ => {}
    }
}

fn handle_tasks_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('w') => app.queue_task(TaskKind::Water),
        KeyCode::Char('f') => app.queue_task(TaskKind::Fertilize),
        KeyCode::Char('p') => app.queue_task(TaskKind::Prune),
        KeyCode::Char('a') => app.queue_task(TaskKind::AssistCustomer),
        KeyCode::Char('r') => app.toggle_routine(),
        KeyCode::Char('x') => app.run_tasks(),
        KeyCode::Char('c') => app.clear_tasks(),
        _ => {}
    }
}

fn handle_shop_input(app: &mut App, code: KeyCode) {
    let count = app.service.manager().ready_for_sale().len();
    match code {
        KeyCode::Up => app.shop_state.prev(),
        KeyCode::Down => app.shop_state.next(count),
        KeyCode::Char('o') => app.shop_state.cycle_pot(),
        KeyCode::Char('g') => app.shop_state.cycle_wrap(),
        KeyCode::Char('k') => app.shop_state.cycle_card(),
        KeyCode::Char('d') => app.shop_state.deluxe = !app.shop_state.deluxe,
        KeyCode::Enter => app.buy_selected(),
        KeyCode::Char('a') => app.buy_arrangement(ArrangementKind::Gift),
        KeyCode::Char('l') => app.buy_arrangement(ArrangementKind::Landscape),
        _ => {}
    }
}
