use crate::models::PlantState;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Greenhouse palette
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const LEAF: Color = Color::Rgb(106, 168, 79);
    pub const SOIL: Color = Color::Rgb(153, 102, 51);
    pub const SKY: Color = Color::Cyan;
    pub const BLOOM: Color = Color::Magenta;
    pub const SPROUT: Color = Color::LightGreen;

    // Alerts
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Plant health bands and the till
    pub const HEALTH_GOOD: Color = Color::Green;
    pub const HEALTH_FAIR: Color = Color::Yellow;
    pub const HEALTH_POOR: Color = Color::Red;
    pub const MONEY: Color = Color::LightYellow;

    pub const HEALTH_GOOD_FROM: u8 = 70;
    pub const HEALTH_FAIR_FROM: u8 = 40;

    pub fn title() -> Style {
        Style::default().fg(Self::LEAF).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default().fg(Self::SKY).add_modifier(Modifier::BOLD)
    }

    /// Selected table row: the soil colour behind white text.
    pub fn selected() -> Style {
        Style::default()
            .bg(Self::SOIL)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn money() -> Style {
        Style::default().fg(Self::MONEY).add_modifier(Modifier::BOLD)
    }

    pub fn health_color(health: u8) -> Color {
        if health >= Self::HEALTH_GOOD_FROM {
            Self::HEALTH_GOOD
        } else if health >= Self::HEALTH_FAIR_FROM {
            Self::HEALTH_FAIR
        } else {
            Self::HEALTH_POOR
        }
    }

    pub fn stage_color(state: PlantState) -> Color {
        match state {
            PlantState::Seedling => Self::SPROUT,
            PlantState::Growing => Self::LEAF,
            PlantState::Mature => Self::SKY,
            PlantState::Flowering => Self::BLOOM,
            PlantState::Dormant => Self::DIM,
        }
    }

    pub fn stage(state: PlantState) -> Style {
        let style = Style::default().fg(Self::stage_color(state));
        match state {
            PlantState::Flowering => style.add_modifier(Modifier::BOLD),
            PlantState::Dormant => style.add_modifier(Modifier::ITALIC),
            _ => style,
        }
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::LEAF).add_modifier(Modifier::BOLD)
    }

    pub fn key_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::LEAF)
    }
}
