use crate::logic::GreenhouseService;
use crate::models::{format_rand, Plant};
use crate::ui::components::{balance_gauge, health_gauge, screen_tabs, share_gauge};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct DashboardScreen<'a> {
    pub service: &'a GreenhouseService,
    pub activity: &'a [String],
    pub starting_balance: f64,
    pub status_message: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(service: &'a GreenhouseService, activity: &'a [String]) -> Self {
        Self {
            service,
            activity,
            starting_balance: service.customer().balance,
            status_message: None,
        }
    }

    pub fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }

    fn average_health(&self) -> Option<f64> {
        let plants = self.service.manager().inventory().plants();
        if plants.is_empty() {
            return None;
        }
        let total: f64 = plants.iter().map(|p| p.health() as f64).sum();
        Some(total / plants.len() as f64)
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Gauges row
                Constraint::Min(8),    // Attention and activity
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_gauges(chunks[1], buf);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        self.render_attention(middle[0], buf);
        self.render_activity(middle[1], buf);
        self.render_status_message(chunks[3], buf);

        Paragraph::new(screen_tabs()).render(chunks[4], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = format!("GreenOps - {}", self.service.name());
        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let customer = self.service.customer();
        let info = Line::from(vec![
            Span::styled(format!("Day {}", self.service.day()), Theme::highlight()),
            Span::styled(format!("  Season: {}", self.service.season()), Theme::dim()),
            Span::styled(
                format!("  Plants: {}", self.service.manager().count()),
                Theme::dim(),
            ),
            Span::styled(format!("  Customer: {} ", customer.name), Theme::dim()),
            Span::styled(format_rand(customer.balance), Theme::money()),
        ]);
        Paragraph::new(info).block(block).render(area, buf);
    }

    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        let manager = self.service.manager();
        health_gauge("Avg Health", self.average_health()).render(gauge_chunks[0], buf);
        share_gauge(
            "Ready for Sale",
            manager.ready_for_sale().len(),
            manager.count(),
        )
        .render(gauge_chunks[1], buf);
        balance_gauge(
            "Balance",
            self.service.customer().balance,
            self.starting_balance,
        )
        .render(gauge_chunks[2], buf);
    }

    fn render_attention(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Needs Attention", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let plants = self.service.manager().needing_attention();
        if plants.is_empty() {
            Paragraph::new(Span::styled("All plants are thriving", Theme::dim()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = plants.iter().map(|p| attention_item(p)).collect();
        List::new(items).render(inner, buf);
    }

    fn render_activity(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Recent Activity", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.activity.is_empty() {
            Paragraph::new(Span::styled("Nothing has happened yet", Theme::dim()))
                .render(inner, buf);
            return;
        }

        // Newest entries at the top
        let items: Vec<ListItem> = self
            .activity
            .iter()
            .rev()
            .take(inner.height as usize)
            .map(|entry| ListItem::new(Span::styled(entry.as_str(), Theme::normal())))
            .collect();
        List::new(items).render(inner, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.starts_with("Error") {
                Theme::error()
            } else {
                Theme::success()
            };
            Paragraph::new(Span::styled(msg, style)).render(area, buf);
        }
    }
}

fn attention_item(plant: &Plant) -> ListItem<'static> {
    let mut reasons = Vec::new();
    if plant.needs_water() {
        reasons.push("water");
    }
    if plant.needs_fertilizer() {
        reasons.push("fertilizer");
    }
    if plant.needs_pruning() {
        reasons.push("pruning");
    }
    if !plant.is_healthy() {
        reasons.push("low health");
    }

    let title = Line::from(vec![
        Span::styled(plant.label(), Style::default().fg(plant.species.color())),
        Span::styled(
            format!(" {}%", plant.health()),
            Style::default().fg(Theme::health_color(plant.health())),
        ),
    ]);
    let detail = Line::from(Span::styled(
        format!("  needs {}", reasons.join(", ")),
        Theme::dim(),
    ));
    ListItem::new(vec![title, detail])
}
