use crate::logic::operations::Receipt;
use crate::logic::GreenhouseService;
use crate::models::{format_rand, Decoration, Plant};
use crate::ui::components::nav_bar;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Widget},
};

pub struct ShopScreen<'a> {
    pub service: &'a GreenhouseService,
    pub stock: Vec<&'a Plant>,
    pub decorations: &'a [Decoration],
    pub selected_index: usize,
    pub deluxe: bool,
}

impl<'a> ShopScreen<'a> {
    pub fn new(service: &'a GreenhouseService) -> Self {
        Self {
            service,
            stock: service.manager().ready_for_sale(),
            decorations: &[],
            selected_index: 0,
            deluxe: false,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn with_decorations(mut self, decorations: &'a [Decoration]) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn deluxe(mut self, deluxe: bool) -> Self {
        self.deluxe = deluxe;
        self
    }

    fn quote(&self) -> Option<Receipt> {
        let plant = self.stock.get(self.selected_index)?;
        self.service.quote(plant.id, self.decorations).ok()
    }
}

impl Widget for ShopScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Stock and basket
                Constraint::Length(1), // Nav
            ])
            .split(area);

        self.render_header(chunks[0], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.render_stock(columns[0], buf);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(8)])
            .split(columns[1]);
        self.render_quote(right[0], buf);
        self.render_purchases(right[1], buf);

        let nav = nav_bar(&[
            ("↑↓", "Select"),
            ("o", "Pot"),
            ("g", "Wrap"),
            ("k", "Card"),
            ("Enter", "Buy"),
            ("a", "Gift set"),
            ("l", "Landscape"),
            ("d", "Deluxe"),
            ("Esc", "Back"),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl ShopScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let customer = self.service.customer();
        let block = Block::default()
            .title(Span::styled("Garden Shop", Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let tier = if self.deluxe { "Deluxe" } else { "Simple" };
        let info = Line::from(vec![
            Span::styled(format!("{} - balance ", customer.name), Theme::dim()),
            Span::styled(format_rand(customer.balance), Theme::money()),
            Span::styled(format!("  Arrangements: {}", tier), Theme::dim()),
        ]);
        Paragraph::new(info).block(block).render(area, buf);
    }

    fn render_stock(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(
            ["ID", "Plant", "Health", "Price"]
                .iter()
                .map(|h| Cell::from(*h).style(Theme::header())),
        );

        let rows: Vec<Row> = self
            .stock
            .iter()
            .enumerate()
            .map(|(i, plant)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Theme::normal()
                };
                Row::new(vec![
                    Cell::from(plant.id.to_string()),
                    Cell::from(plant.species.as_str())
                        .style(Style::default().fg(plant.species.color())),
                    Cell::from(format!("{}%", plant.health())),
                    Cell::from(format_rand(plant.base_price)),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(7),
            Constraint::Length(10),
        ];

        let title = format!("Ready for Sale ({})", self.stock.len());
        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(Span::styled(title, Theme::header()))
                    .borders(Borders::ALL)
                    .border_style(Theme::border_focused()),
            )
            .row_highlight_style(Theme::selected());

        let mut state = TableState::default();
        if !self.stock.is_empty() {
            state.select(Some(self.selected_index));
        }
        ratatui::widgets::StatefulWidget::render(table, area, buf, &mut state);
    }

    fn render_quote(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Quote", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let Some(receipt) = self.quote() else {
            Paragraph::new(Span::styled("Nothing selected", Theme::dim()))
                .block(block)
                .render(area, buf);
            return;
        };

        let mut lines = vec![Line::from(Span::styled(
            receipt.description.clone(),
            Theme::highlight(),
        ))];
        lines.extend(receipt.items.iter().map(|item| {
            Line::from(vec![
                Span::styled(format!("{:<28}", item.label), Theme::normal()),
                Span::styled(format_rand(item.amount), Theme::dim()),
            ])
        }));
        lines.push(Line::from(vec![
            Span::styled(format!("{:<28}", "TOTAL"), Theme::header()),
            Span::styled(format_rand(receipt.total), Theme::money()),
        ]));

        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_purchases(&self, area: Rect, buf: &mut Buffer) {
        let customer = self.service.customer();
        let block = Block::default()
            .title(Span::styled(
                format!("Purchases ({})", customer.cart.len()),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let mut lines: Vec<Line> = customer
            .cart
            .iter()
            .rev()
            .map(|r| {
                Line::from(vec![
                    Span::styled(format!("{:<28}", r.description), Theme::normal()),
                    Span::styled(format_rand(r.total), Theme::dim()),
                ])
            })
            .collect();
        if lines.is_empty() {
            lines.push(Line::from(Span::styled("No purchases yet", Theme::dim())));
        } else {
            lines.insert(
                0,
                Line::from(vec![
                    Span::styled(format!("{:<28}", "Spent"), Theme::header()),
                    Span::styled(format_rand(customer.spent()), Theme::money()),
                ]),
            );
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
