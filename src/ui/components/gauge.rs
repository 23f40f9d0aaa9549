use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct GaugeWidget<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
    precision: usize,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
            precision: 0,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn color_for(&self, value: f64) -> Color {
        self.thresholds
            .iter()
            .rev()
            .find(|(threshold, _)| value >= *threshold)
            .map(|(_, color)| *color)
            .unwrap_or(Theme::FG)
    }

    fn ratio(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(value) = self.value else {
            Paragraph::new(Span::styled("N/A", Theme::dim())).render(inner, buf);
            return;
        };

        let color = self.color_for(value);
        let value_str = format!("{:.prec$}{}", value, self.unit, prec = self.precision);
        Paragraph::new(Line::from(Span::styled(value_str, Style::default().fg(color))))
            .render(inner, buf);

        if inner.height >= 2 {
            let y = inner.y + 1;
            let filled = (inner.width as f64 * self.ratio(value)) as u16;
            for x in inner.x..inner.x + inner.width {
                let ch = if x < inner.x + filled { '█' } else { '░' };
                buf[(x, y)].set_char(ch).set_fg(color);
            }
        }
    }
}

/// Average plant health on a 0-100 scale.
pub fn health_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%").thresholds(vec![
        (0.0, Theme::HEALTH_POOR),
        (40.0, Theme::HEALTH_FAIR),
        (70.0, Theme::HEALTH_GOOD),
    ])
}

/// Share of stock matching some condition, e.g. ready for sale.
pub fn share_gauge(title: &str, count: usize, total: usize) -> GaugeWidget<'_> {
    let value = (total > 0).then(|| count as f64 / total as f64 * 100.0);
    GaugeWidget::new(title, value, "%").thresholds(vec![
        (0.0, Theme::WARNING),
        (25.0, Theme::SKY),
        (50.0, Theme::SUCCESS),
    ])
}

pub fn balance_gauge(title: &str, balance: f64, starting: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, Some(balance), "")
        .range(0.0, starting.max(1.0))
        .precision(2)
        .thresholds(vec![
            (0.0, Theme::ERROR),
            (starting * 0.2, Theme::WARNING),
            (starting * 0.5, Theme::MONEY),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_follows_highest_threshold_reached() {
        let gauge = health_gauge("Health", Some(55.0));
        assert_eq!(gauge.color_for(55.0), Theme::HEALTH_FAIR);
        assert_eq!(gauge.color_for(90.0), Theme::HEALTH_GOOD);
        assert_eq!(gauge.color_for(5.0), Theme::HEALTH_POOR);
    }

    #[test]
    fn ratio_is_clamped() {
        let gauge = GaugeWidget::new("x", None, "").range(0.0, 10.0);
        assert_eq!(gauge.ratio(-5.0), 0.0);
        assert_eq!(gauge.ratio(5.0), 0.5);
        assert_eq!(gauge.ratio(50.0), 1.0);
    }

    #[test]
    fn share_of_empty_stock_is_unknown() {
        assert!(share_gauge("Ready", 0, 0).value.is_none());
        assert_eq!(share_gauge("Ready", 1, 4).value, Some(25.0));
    }

    #[test]
    fn renders_value_and_bar() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        health_gauge("Health", Some(50.0)).render(area, &mut buf);
        let row: String = (1..19).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.starts_with("50%"));
        assert_eq!(buf[(1, 2)].symbol(), "█");
        assert_eq!(buf[(18, 2)].symbol(), "░");
    }
}
