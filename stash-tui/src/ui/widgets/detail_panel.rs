use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use stash::DetailSink;

use crate::icons::IconGlyph;
use crate::ui::theme::Theme;

/// The detail view: holds whatever the selection controller last
/// published. Starts blank and is only ever written through `display`.
#[derive(Debug, Default)]
pub struct DetailPanelState {
    icon: Option<IconGlyph>,
    name: String,
    description: String,
    stat_text: String,
}

impl DetailPanelState {
    pub fn icon(&self) -> Option<IconGlyph> {
        self.icon
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stat_text(&self) -> &str {
        &self.stat_text
    }
}

impl DetailSink<IconGlyph> for DetailPanelState {
    fn display(&mut self, icon: IconGlyph, name: &str, description: &str, stat_text: &str) {
        self.icon = Some(icon);
        self.name = name.to_string();
        self.description = description.to_string();
        self.stat_text = stat_text.to_string();
    }
}

/// Bordered panel presenting the published record fields.
pub struct DetailPanel<'a> {
    state: &'a DetailPanelState,
    theme: &'a Theme,
}

impl<'a> DetailPanel<'a> {
    pub fn new(state: &'a DetailPanelState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Item Info ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let label = Style::default()
            .fg(self.theme.label)
            .add_modifier(Modifier::BOLD);
        let value = Style::default().fg(self.theme.value);

        let title_style = Style::default()
            .fg(self.theme.icon)
            .add_modifier(Modifier::BOLD);
        let icon_line = match self.state.icon() {
            Some(glyph) => Line::from(vec![
                Span::styled(format!("{} ", glyph.symbol), title_style),
                Span::styled(self.state.name().to_string(), title_style),
            ]),
            None => Line::raw(""),
        };

        let lines = vec![
            icon_line,
            Line::raw(""),
            Line::from(vec![
                Span::styled("Stat: ", label),
                Span::styled(self.state.stat_text().to_string(), value),
            ]),
            Line::raw(""),
            Line::from(Span::styled(self.state.description().to_string(), value)),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
