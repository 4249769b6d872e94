//! Header panel: the listing's title, subtitle and note above the table.

use crate::theme::Theme;
use quakeview_core::HeaderInfo;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Renders the non-empty header lines, one per row, with keybinding hints
/// right-aligned on the first row.
pub struct HeaderPanel<'a> {
    header: &'a HeaderInfo,
    theme: &'a Theme,
}

impl<'a> HeaderPanel<'a> {
    pub fn new(header: &'a HeaderInfo, theme: &'a Theme) -> Self {
        Self { header, theme }
    }

    /// Rows needed to show every non-empty header line (at least one, for
    /// the hints).
    pub fn height(header: &HeaderInfo) -> u16 {
        header.lines().count().max(1) as u16
    }
}

impl Widget for HeaderPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let h = self.header;
        let styled = [
            (&h.title, self.theme.header_title),
            (&h.subtitle, self.theme.header_subtitle),
            (&h.note, self.theme.header_note),
        ];
        let lines: Vec<Line> = styled
            .into_iter()
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, style)| Line::styled(text.as_str(), style))
            .collect();

        Paragraph::new(lines).render(area, buf);

        let hint = " /:filter  q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_counts_non_empty_lines() {
        let mut h = HeaderInfo::default();
        assert_eq!(HeaderPanel::height(&h), 1);
        h.title = "T".into();
        h.note = "N".into();
        assert_eq!(HeaderPanel::height(&h), 2);
    }

    #[test]
    fn renders_title() {
        let h = HeaderInfo {
            title: "SON DEPREMLER".into(),
            ..HeaderInfo::default()
        };
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HeaderPanel::new(&h, &theme).render(area, &mut buf);
        let row: String = (0..13).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row, "SON DEPREMLER");
    }
}
