use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use stash::{catalog, Selection};

use crate::icons::IconTable;
use crate::ui::theme::Theme;
use crate::ui::widgets::{DetailPanel, DetailPanelState, ItemListState, ItemListWidget};

/// Demo payload compiled into the binary; the default when no payload
/// path is given on the command line.
pub const DEMO_ITEMS: &str = include_str!("../../assets/items.json");

/// Where the item payload comes from.
#[derive(Debug, Clone)]
pub enum PayloadSource {
    BuiltIn,
    File(PathBuf),
}

impl PayloadSource {
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Self::BuiltIn => Ok(DEMO_ITEMS.to_string()),
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading item payload {}", path.display())),
        }
    }
}

/// The fully wired browser: the selection controller plus the host-side
/// collaborators it drives (rows, detail panel, icon table).
struct Browser {
    selection: Selection,
    list: ItemListState,
    detail: DetailPanelState,
    icons: IconTable,
}

impl Browser {
    /// Parse, replicate, build rows, and select row 0. Any failure here
    /// is a startup failure; nothing is partially wired.
    fn build(payload: &str, scale: usize) -> anyhow::Result<Self> {
        let items = catalog::load(payload, scale).context("loading item list")?;
        let icons = IconTable::builtin();
        let mut list = ItemListState::build(&items, &icons).context("building item rows")?;
        let mut detail = DetailPanelState::default();

        let mut selection = Selection::new(items);
        selection
            .initialize(list.rows_mut(), &mut detail, &icons)
            .context("initializing selection")?;

        Ok(Self {
            selection,
            list,
            detail,
            icons,
        })
    }

    fn select(&mut self, index: usize) {
        match self
            .selection
            .select(index, self.list.rows_mut(), &mut self.detail, &self.icons)
        {
            Ok(()) => {
                self.list.ensure_visible(index);
                tracing::debug!(index, "row selected");
            }
            Err(e) => tracing::warn!("selection rejected: {}", e),
        }
    }

    fn move_up(&mut self) {
        if let Some(index) = self.selection.selected() {
            if index > 0 {
                self.select(index - 1);
            }
        }
    }

    fn move_down(&mut self) {
        if let Some(index) = self.selection.selected() {
            if index + 1 < self.selection.items().len() {
                self.select(index + 1);
            }
        }
    }

    /// Re-read the payload and rebuild the whole list. On failure the
    /// current list stays in place.
    fn reload(&mut self, source: &PayloadSource, scale: usize) {
        match source.read().and_then(|payload| Browser::build(&payload, scale)) {
            Ok(next) => {
                // Tear down the old list before the replacement takes over.
                self.selection.teardown(self.list.rows_mut());
                *self = next;
                tracing::info!(items = self.selection.items().len(), "payload reloaded");
            }
            Err(e) => tracing::warn!("reload failed, keeping current list: {:#}", e),
        }
    }
}

/// Run the TUI browser until the user quits.
pub fn run_app(source: PayloadSource, scale: usize) -> anyhow::Result<()> {
    // Wire everything before entering the terminal so startup failures
    // land on stderr.
    let payload = source.read()?;
    let mut browser = Browser::build(&payload, scale)?;
    tracing::info!(items = browser.selection.items().len(), scale, "browser wired");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_browser(&mut terminal, &mut browser, &source, scale);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_browser(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    browser: &mut Browser,
    source: &PayloadSource,
    scale: usize,
) -> anyhow::Result<()> {
    let theme = Theme::dark();

    loop {
        terminal.draw(|f| draw(f, browser, &theme))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                    KeyCode::Up | KeyCode::Char('k') => browser.move_up(),
                    KeyCode::Down | KeyCode::Char('j') => browser.move_down(),
                    KeyCode::Char('r') => browser.reload(source, scale),
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(index) = browser.list.row_at(mouse.column, mouse.row) {
                            browser.select(index);
                        }
                    }
                    MouseEventKind::ScrollUp => browser.list.scroll_up(1),
                    MouseEventKind::ScrollDown => browser.list.scroll_down(1),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

fn draw(f: &mut Frame, browser: &mut Browser, theme: &Theme) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(vertical[0]);

    f.render_stateful_widget(ItemListWidget::new(theme), panels[0], &mut browser.list);
    f.render_widget(DetailPanel::new(&browser.detail, theme), panels[1]);

    let help = Line::from(Span::styled(
        "↑/↓ or j/k: Move  Click: Select  Wheel: Scroll  r: Reload  q: Quit",
        Style::default().fg(theme.muted),
    ));
    f.render_widget(Paragraph::new(help), vertical[1]);
}
