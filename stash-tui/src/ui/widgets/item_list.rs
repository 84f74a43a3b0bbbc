use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use stash::{IconError, IconLookup, ItemRecord, ItemRow};

use crate::icons::{IconGlyph, IconTable};
use crate::ui::theme::Theme;

/// One visual row: the record's name, its resolved glyph, and the
/// highlight flag the selection controller drives.
#[derive(Debug, Clone)]
pub struct RowEntry {
    pub name: String,
    pub glyph: IconGlyph,
    highlighted: bool,
}

impl RowEntry {
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

impl ItemRow for RowEntry {
    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

/// State for the scrollable item list: the rows, the scroll offset, and
/// the viewport recorded at render time so click positions can be
/// resolved to row indices.
pub struct ItemListState {
    rows: Vec<RowEntry>,
    offset: usize,
    viewport: Option<Rect>,
}

impl ItemListState {
    /// Build one row per record, resolving each record's glyph up front.
    /// A record with an unresolvable icon index fails the whole build.
    pub fn build(items: &[ItemRecord], icons: &IconTable) -> Result<Self, IconError> {
        let mut rows = Vec::with_capacity(items.len());
        for record in items {
            let glyph = icons.resolve(record.icon_index)?;
            rows.push(RowEntry {
                name: record.name.clone(),
                glyph,
                highlighted: false,
            });
        }
        Ok(Self {
            rows,
            offset: 0,
            viewport: None,
        })
    }

    pub fn rows(&self) -> &[RowEntry] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [RowEntry] {
        &mut self.rows
    }

    /// Resolve a terminal-cell click position to a row index, honoring
    /// the current scroll offset. `None` for clicks outside the list or
    /// past its last row.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let viewport = self.viewport?;
        if !viewport.contains(Position { x: column, y: row }) {
            return None;
        }
        let index = self.offset + (row - viewport.y) as usize;
        (index < self.rows.len()).then_some(index)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.max_offset();
        self.offset = (self.offset + lines).min(max);
    }

    /// Move the scroll offset the minimal amount that brings `index`
    /// into view. A no-op before the first render.
    pub fn ensure_visible(&mut self, index: usize) {
        let Some(viewport) = self.viewport else {
            return;
        };
        let height = viewport.height as usize;
        if height == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + height {
            self.offset = index + 1 - height;
        }
    }

    fn max_offset(&self) -> usize {
        let height = self.viewport.map(|v| v.height as usize).unwrap_or(0);
        self.rows.len().saturating_sub(height.max(1))
    }
}

/// Renders the item list into a bordered panel and records the inner
/// viewport on the state for click resolution.
pub struct ItemListWidget<'a> {
    theme: &'a Theme,
}

impl<'a> ItemListWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl StatefulWidget for ItemListWidget<'_> {
    type State = ItemListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .title(format!(" Inventory ({}) ", state.rows.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        state.viewport = Some(inner);
        state.offset = state.offset.min(state.max_offset());

        let visible = inner.height as usize;
        let lines: Vec<Line> = state
            .rows
            .iter()
            .skip(state.offset)
            .take(visible)
            .map(|row| {
                let (prefix, style) = if row.is_highlighted() {
                    (
                        "► ",
                        Style::default()
                            .fg(self.theme.selected_fg)
                            .bg(self.theme.selected_bg)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("  ", Style::default().fg(self.theme.row_text))
                };
                let icon_style = if row.is_highlighted() {
                    style
                } else {
                    style.fg(self.theme.row_icon)
                };
                Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{} ", row.glyph.symbol), icon_style),
                    Span::styled(row.name.clone(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash::StatValue;

    fn record(name: &str, icon_index: usize) -> ItemRecord {
        ItemRecord {
            name: name.to_string(),
            description: String::new(),
            icon_index,
            stat: StatValue::Integer(1),
        }
    }

    fn rendered_state(count: usize, height: u16) -> ItemListState {
        let items: Vec<ItemRecord> = (0..count).map(|i| record(&format!("item-{}", i), 0)).collect();
        let mut state = ItemListState::build(&items, &IconTable::builtin()).unwrap();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, height);
        let mut buf = Buffer::empty(area);
        StatefulWidget::render(ItemListWidget::new(&theme), area, &mut buf, &mut state);
        state
    }

    #[test]
    fn test_build_resolves_glyphs() {
        let items = vec![record("a", 0), record("b", 2)];
        let state = ItemListState::build(&items, &IconTable::builtin()).unwrap();
        assert_eq!(state.rows()[1].glyph.name, "potion");
    }

    #[test]
    fn test_build_fails_on_bad_icon_index() {
        let items = vec![record("a", 0), record("b", 99)];
        let result = ItemListState::build(&items, &IconTable::builtin());
        assert!(matches!(
            result,
            Err(IconError::IndexOutOfRange { index: 99, .. })
        ));
    }

    #[test]
    fn test_row_at_requires_render() {
        let items = vec![record("a", 0)];
        let state = ItemListState::build(&items, &IconTable::builtin()).unwrap();
        assert_eq!(state.row_at(1, 1), None);
    }

    #[test]
    fn test_row_at_maps_clicks_inside_viewport() {
        // 10-cell-high panel: border rows at y=0 and y=9, rows at y=1..=8.
        let state = rendered_state(20, 10);
        assert_eq!(state.row_at(5, 1), Some(0));
        assert_eq!(state.row_at(5, 4), Some(3));
    }

    #[test]
    fn test_row_at_rejects_border_and_outside() {
        let state = rendered_state(20, 10);
        assert_eq!(state.row_at(5, 0), None); // top border
        assert_eq!(state.row_at(5, 9), None); // bottom border
        assert_eq!(state.row_at(31, 4), None); // right of the panel
    }

    #[test]
    fn test_row_at_rejects_past_last_row() {
        // 3 rows in an 8-row viewport; y=5 is empty space.
        let state = rendered_state(3, 10);
        assert_eq!(state.row_at(5, 3), Some(2));
        assert_eq!(state.row_at(5, 5), None);
    }

    #[test]
    fn test_row_at_honors_scroll_offset() {
        let mut state = rendered_state(20, 10);
        state.scroll_down(4);
        assert_eq!(state.row_at(5, 1), Some(4));
    }

    #[test]
    fn test_scroll_down_clamps_at_end() {
        let mut state = rendered_state(10, 10);
        state.scroll_down(100);
        // 8 visible rows of 10 leaves a max offset of 2.
        assert_eq!(state.row_at(5, 1), Some(2));
    }

    #[test]
    fn test_ensure_visible_scrolls_forward_and_back() {
        let mut state = rendered_state(20, 10);
        state.ensure_visible(15);
        assert_eq!(state.row_at(5, 8), Some(15));
        state.ensure_visible(0);
        assert_eq!(state.row_at(5, 1), Some(0));
    }
}
