use crate::logic::controller::MaintenanceReport;
use crate::logic::GreenhouseService;
use crate::ui::components::nav_bar;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct LayoutScreen<'a> {
    pub service: &'a GreenhouseService,
    pub last_report: Option<&'a MaintenanceReport>,
    pub scroll: u16,
}

impl<'a> LayoutScreen<'a> {
    pub fn new(service: &'a GreenhouseService) -> Self {
        Self {
            service,
            last_report: None,
            scroll: 0,
        }
    }

    pub fn with_report(mut self, report: Option<&'a MaintenanceReport>) -> Self {
        self.last_report = report;
        self
    }

    pub fn with_scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for LayoutScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[0]);

        self.render_tree(columns[0], buf);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(13), Constraint::Min(5)])
            .split(columns[1]);
        self.render_irrigation(right[0], buf);
        self.render_report(right[1], buf);

        let nav = nav_bar(&[
            ("↑↓", "Scroll"),
            ("s", "Next season"),
            ("n", "Next day"),
            ("Esc", "Back"),
        ]);
        Paragraph::new(nav).render(chunks[1], buf);
    }
}

impl LayoutScreen<'_> {
    fn render_tree(&self, area: Rect, buf: &mut Buffer) {
        let layout = self.service.manager().layout();
        let title = format!(
            "Greenhouse Layout ({} sections, season {})",
            layout.section_count(),
            self.service.season()
        );
        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());

        let lines: Vec<Line> = layout
            .render(0)
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), tree_style(line))))
            .collect();

        Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }

    fn render_irrigation(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Irrigation", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let lines: Vec<Line> = self
            .service
            .system_status()
            .lines()
            .map(|line| match line.split_once(':') {
                Some((key, value)) => Line::from(vec![
                    Span::styled(format!("{}:", key), Theme::dim()),
                    Span::styled(value.to_string(), Theme::normal()),
                ]),
                None => Line::from(Span::styled(line.to_string(), Theme::highlight())),
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_report(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Last Maintenance", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let Some(report) = self.last_report else {
            Paragraph::new(Span::styled("Press [n] to run a day", Theme::dim()))
                .block(block)
                .render(area, buf);
            return;
        };

        let zones: Vec<String> = report.watering.zones.iter().map(|z| z.to_string()).collect();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} plants updated", report.plants_updated),
                Theme::normal(),
            )),
            Line::from(Span::styled(
                format!(
                    "Watered zones {} for {} min",
                    zones.join(", "),
                    report.watering.duration_minutes
                ),
                Theme::normal(),
            )),
            Line::from(Span::styled(
                format!("{} newly ready for sale", report.newly_ready.len()),
                Theme::success(),
            )),
        ];
        lines.extend(
            report
                .transitions
                .iter()
                .map(|t| Line::from(Span::styled(t.clone(), Theme::dim()))),
        );

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

fn tree_style(line: &str) -> Style {
    match line.trim_start() {
        l if l.starts_with("===") => Theme::title(),
        l if l.starts_with("++") => Theme::highlight(),
        l if l.starts_with('+') => Theme::header(),
        _ => Theme::normal(),
    }
}
