use crate::logic::commands::TaskOutcome;
use crate::logic::GreenhouseService;
use crate::models::StaffMember;
use crate::ui::components::nav_bar;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct TasksScreen<'a> {
    pub service: &'a GreenhouseService,
    pub routine_enabled: bool,
}

impl<'a> TasksScreen<'a> {
    pub fn new(service: &'a GreenhouseService) -> Self {
        Self {
            service,
            routine_enabled: false,
        }
    }

    pub fn with_routine(mut self, enabled: bool) -> Self {
        self.routine_enabled = enabled;
        self
    }
}

impl Widget for TasksScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(8)])
            .split(columns[0]);

        self.render_queue(left[0], buf);
        self.render_staff(left[1], buf);
        self.render_history(columns[1], buf);

        let nav = nav_bar(&[
            ("w", "Water"),
            ("f", "Fertilize"),
            ("p", "Prune"),
            ("a", "Assist"),
            ("r", "Routine"),
            ("x", "Execute"),
            ("c", "Clear"),
            ("Esc", "Back"),
        ]);
        Paragraph::new(nav).render(chunks[1], buf);
    }
}

impl TasksScreen<'_> {
    fn render_queue(&self, area: Rect, buf: &mut Buffer) {
        let title = format!("Task Queue ({})", self.service.scheduler().command_count());
        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());

        let inner = block.inner(area);
        block.render(area, buf);

        let routine = if self.routine_enabled {
            Span::styled("Care routine: ON", Theme::success())
        } else {
            Span::styled("Care routine: off", Theme::dim())
        };

        let mut items = vec![ListItem::new(Line::from(routine))];
        let pending = self.service.scheduler().pending();
        if pending.is_empty() {
            items.push(ListItem::new(Span::styled("No tasks queued", Theme::dim())));
        }
        items.extend(pending.iter().enumerate().map(|(i, (task, staff))| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Theme::dim()),
                Span::styled(task.to_string(), Theme::normal()),
                Span::styled(format!(" ({})", staff), Theme::dim()),
            ]))
        }));

        List::new(items).render(inner, buf);
    }

    fn render_staff(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Staff on Duty", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let care = self
            .service
            .care_staff()
            .iter()
            .map(|s| staff_item(s.name(), s.role()));
        let sales = self
            .service
            .sales_staff()
            .iter()
            .map(|s| staff_item(s.name(), s.role()));

        let mut items: Vec<ListItem> = care.chain(sales).collect();
        items.push(ListItem::new(Span::styled(
            format!("Customers assisted: {}", self.service.customers_assisted()),
            Theme::dim(),
        )));
        List::new(items).render(inner, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Completed Tasks", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let history = self.service.scheduler().history();
        if history.is_empty() {
            Paragraph::new(Span::styled("No tasks executed yet", Theme::dim()))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = history.iter().rev().flat_map(outcome_lines).collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

fn staff_item<'a>(name: &'a str, role: &'a str) -> ListItem<'a> {
    ListItem::new(Line::from(vec![
        Span::styled(name, Theme::normal()),
        Span::styled(format!(" - {}", role), Theme::dim()),
    ]))
}

fn outcome_lines(outcome: &TaskOutcome) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            outcome.executed_at.format("%H:%M:%S ").to_string(),
            Theme::dim(),
        ),
        Span::styled(outcome.task.as_str(), Theme::highlight()),
        Span::styled(format!(" by {}", outcome.staff), Theme::dim()),
    ])];
    lines.extend(
        outcome
            .log
            .iter()
            .map(|entry| Line::from(Span::styled(format!("  {}", entry), Theme::normal()))),
    );
    lines
}
