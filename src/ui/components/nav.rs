use crate::ui::Theme;
use ratatui::text::{Line, Span};

/// Key hints rendered as `[k]Label` pairs.
pub fn nav_bar<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let spans: Vec<Span<'a>> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, label))| {
            let label = if i + 1 < hints.len() {
                format!("{} ", label)
            } else {
                label.to_string()
            };
            [
                Span::styled(format!("[{}]", key), Theme::key_hint()),
                Span::styled(label, Theme::key_label()),
            ]
        })
        .collect();
    Line::from(spans)
}

pub fn screen_tabs() -> Line<'static> {
    nav_bar(&[
        ("1", "Dashboard"),
        ("2", "Layout"),
        ("3", "Inventory"),
        ("4", "Tasks"),
        ("5", "Shop"),
        ("n", "Next day"),
        ("q", "Quit"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_are_bracketed_and_spaced() {
        let line = nav_bar(&[("a", "Add"), ("d", "Delete")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[a]Add [d]Delete");
    }
}
