use crate::models::Plant;
use crate::ui::components::nav_bar;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Widget},
};

pub struct InventoryScreen<'a> {
    pub plants: &'a [Plant],
    pub selected_index: usize,
}

impl<'a> InventoryScreen<'a> {
    pub fn new(plants: &'a [Plant]) -> Self {
        Self {
            plants,
            selected_index: 0,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    fn selected(&self) -> Option<&Plant> {
        self.plants.get(self.selected_index)
    }
}

impl Widget for InventoryScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Table
                Constraint::Length(7), // Details
                Constraint::Length(1), // Nav
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_table(chunks[1], buf);
        self.render_details(chunks[2], buf);

        let nav = nav_bar(&[
            ("↑↓", "Navigate"),
            ("c", "Care routine"),
            ("w", "Water"),
            ("l", "Lifecycle"),
            ("p", "Propagate"),
            ("Esc", "Back"),
        ]);
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

impl InventoryScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Plant Inventory", Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let ready = self.plants.iter().filter(|p| p.ready_for_sale).count();
        let info = Line::from(vec![
            Span::styled(format!("{} plants", self.plants.len()), Theme::dim()),
            Span::styled(format!(" ({} ready for sale)", ready), Theme::dim()),
        ]);
        Paragraph::new(info).block(block).render(area, buf);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let header_cells = [
            "ID", "Species", "State", "Age", "Height", "Health", "Location", "Sale",
        ]
        .iter()
        .map(|h| Cell::from(*h).style(Theme::header()));

        let header = Row::new(header_cells).height(1);

        let rows: Vec<Row> = self
            .plants
            .iter()
            .enumerate()
            .map(|(i, plant)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Theme::normal()
                };

                let cells = vec![
                    Cell::from(plant.id.to_string()),
                    Cell::from(plant.species.as_str())
                        .style(Style::default().fg(plant.species.color())),
                    Cell::from(plant.state.as_str()).style(Theme::stage(plant.state)),
                    Cell::from(format!("{}d", plant.age_days)),
                    Cell::from(format!("{:.1}cm", plant.height_cm)),
                    Cell::from(format!("{}%", plant.health()))
                        .style(Style::default().fg(Theme::health_color(plant.health()))),
                    Cell::from(plant.location.clone()),
                    Cell::from(if plant.ready_for_sale { "yes" } else { "-" }),
                ];

                Row::new(cells).style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Min(20),
            Constraint::Length(5),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .row_highlight_style(Theme::selected());

        let mut state = TableState::default();
        if !self.plants.is_empty() {
            state.select(Some(self.selected_index));
        }

        ratatui::widgets::StatefulWidget::render(table, area, buf, &mut state);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Details", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let Some(plant) = self.selected() else {
            Paragraph::new(Span::styled("No plants in stock", Theme::dim()))
                .block(block)
                .render(area, buf);
            return;
        };

        let flag = |on: bool, text: &'static str| {
            if on {
                Span::styled(format!("{} ", text), Theme::warning())
            } else {
                Span::raw("")
            }
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(plant.label(), Theme::highlight()),
                Span::styled(format!("  {}", plant.scientific_name), Theme::dim()),
                Span::styled(format!("  R{:.2}", plant.base_price), Theme::money()),
            ]),
            Line::from(Span::styled(plant.care_description(), Theme::normal())),
            Line::from(Span::styled(
                format!(
                    "Watered {}x  Fertilized {}x  Pruned {}x  Growth {}/{} days",
                    plant.times_watered,
                    plant.times_fertilized,
                    plant.times_pruned,
                    plant.growth_days,
                    plant.days_to_maturity
                ),
                Theme::dim(),
            )),
            Line::from(vec![
                flag(plant.needs_water(), "needs water"),
                flag(plant.needs_fertilizer(), "needs fertilizer"),
                flag(plant.needs_pruning(), "needs pruning"),
                flag(!plant.is_healthy(), "unhealthy"),
            ]),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
