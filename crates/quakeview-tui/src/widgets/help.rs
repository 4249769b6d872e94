//! Help popup listing the keybindings, including any remapped in
//! `[keybindings]`. Toggle with `?`; close with `?` or `Escape`.

use crate::event::Keymap;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const WIDTH: u16 = 72;
const FOOTER: &str = "  filter terms are comma-separated; any match shows the row";

pub struct HelpPopup<'a> {
    theme: &'a Theme,
    keymap: &'a Keymap,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme, keymap: &'a Keymap) -> Self {
        Self { theme, keymap }
    }

    fn bindings(&self) -> Vec<(String, &'static str)> {
        let k = self.keymap;
        vec![
            ("q  /  Ctrl+c".into(), "Quit"),
            ("Tab".into(), "Switch focus: table ↔ filter"),
            (k.filter_focus.to_string(), "Focus the location filter"),
            ("Escape".into(), "Return focus from filter"),
            ("↑ k  /  ↓ j".into(), "Move through rows"),
            ("PageUp  /  Ctrl+u".into(), "Page up"),
            ("PageDown / Ctrl+d".into(), "Page down"),
            (format!("{}  /  {}", k.scroll_top, k.scroll_bottom), "First / last row"),
            (k.toggle_age.to_string(), "Toggle the Time Ago column"),
            (":".into(), "Command line (quit, theme, age, clear, …)"),
            ("?".into(), "Toggle this help popup"),
        ]
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bindings = self.bindings();
        // Rows, blank line, footer, two borders.
        let height = bindings.len() as u16 + 4;
        let [popup] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(WIDTH)])
            .flex(Flex::Center)
            .areas(popup);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" quakeview keybindings (? to close) ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = Style::default().add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = bindings
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {key:<22}"), key_style),
                    Span::raw(desc),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::styled(FOOTER, Style::default().add_modifier(Modifier::DIM)));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(keymap: &Keymap) -> String {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 80, 21);
        let mut buf = Buffer::empty(area);
        HelpPopup::new(&theme, keymap).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_default_keys() {
        let text = rendered(&Keymap::default());
        assert!(text.contains("g  /  G"));
        assert!(text.contains("Toggle the Time Ago column"));
    }

    #[test]
    fn shows_remapped_keys() {
        let keymap = Keymap {
            toggle_age: 'w',
            scroll_top: 't',
            scroll_bottom: 'b',
            ..Keymap::default()
        };
        let text = rendered(&keymap);
        let age_row = text
            .lines()
            .find(|l| l.contains("Time Ago"))
            .unwrap();
        assert!(age_row.contains("  w "), "{age_row}");
        assert!(text.contains("t  /  b"));
    }

    #[test]
    fn popup_is_centred() {
        let text = rendered(&Keymap::default());
        let first = text.lines().position(|l| l.contains('┌')).unwrap();
        // 21-row area, 15-row popup.
        assert_eq!(first, 3);
        let row = text.lines().nth(first).unwrap();
        assert_eq!(row.chars().position(|c| c == '┌'), Some(4));
    }
}
