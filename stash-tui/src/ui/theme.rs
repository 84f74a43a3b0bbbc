use ratatui::style::Color;

/// All colors used by the browser UI, grouped by purpose.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Panel chrome ──────────────────────────────────────────────
    pub panel_border: Color,

    // ── List rows ─────────────────────────────────────────────────
    pub row_text: Color,
    pub row_icon: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,

    // ── Detail panel ──────────────────────────────────────────────
    pub label: Color,
    pub value: Color,
    pub icon: Color,

    // ── Help line ─────────────────────────────────────────────────
    pub muted: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            panel_border: Color::Cyan,
            row_text: Color::White,
            row_icon: Color::Cyan,
            selected_fg: Color::Yellow,
            selected_bg: Color::DarkGray,
            label: Color::Cyan,
            value: Color::White,
            icon: Color::Yellow,
            muted: Color::DarkGray,
        }
    }
}
