//! Terminal runtime and entry point.
//!
//! This is the thin integration layer between the Tastebook library and the
//! terminal: it owns raw mode and the alternate screen, translates key events
//! into application events per input mode, sizes its input-poll timeout from
//! the filter's debounce deadline, and executes the actions the handler
//! returns.
//!
//! # Event loop
//!
//! ```text
//! poll(min(idle, debounce deadline)) ─► key?  → map per mode → handle_event
//!                                   └► none? → Tick          → handle_event
//! ```
//!
//! A timer tick is what commits a debounced filter edit; bounding the poll
//! timeout by the pending deadline means the commit lands on time without a
//! busy loop.
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`k`/arrows: move cursor
//! - `space`: toggle the cursor row's checkbox
//! - `a`: tri-state select-all over the visible rows
//! - `d`: delete selected reviews
//! - `1`/`2`/`3`: cycle sort on Name/Rating/Review
//! - `/`: search, `n`: new review, `q`/Ctrl+C: quit, `Esc`: clear filter
//!
//! Search mode (typing): type to edit, `Enter` browse results, `Esc` clear.
//! Search mode (browsing): `j`/`k` move, `space` select, `/` edit query.
//! Form mode: type into the focused field, `Tab` next field, `Enter` save,
//! `Esc` discard.

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute};
use std::io::Write;
use std::time::{Duration, Instant};

use tastebook::app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
use tastebook::table::SortColumn;
use tastebook::Config;

/// Poll timeout while no debounce deadline is pending.
const IDLE_POLL: Duration = Duration::from_millis(200);

fn main() -> tastebook::Result<()> {
    let config = Config::from_env();
    tastebook::observability::init_tracing(&config);

    tracing::debug!(config = ?config, "starting tastebook");

    let mut state = tastebook::initialize(&config);
    state.apply_view();

    enable_raw_mode()?;
    execute!(
        std::io::stdout(),
        terminal::EnterAlternateScreen,
        cursor::Hide
    )?;

    let result = run_loop(&mut state);

    execute!(
        std::io::stdout(),
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    disable_raw_mode()?;

    result
}

/// Drives the render/input/handle cycle until a quit action arrives.
fn run_loop(state: &mut AppState) -> tastebook::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            let (cols, rows) = terminal::size().unwrap_or((80, 24));
            tastebook::ui::render(state, rows as usize, cols as usize);
            std::io::stdout().flush()?;
            needs_render = false;
        }

        let app_event = if event::poll(poll_timeout(state))? {
            match event::read()? {
                TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    match map_key_event(state, &key) {
                        Some(mapped) => mapped,
                        None => continue,
                    }
                }
                TermEvent::Resize(_, _) => {
                    needs_render = true;
                    continue;
                }
                _ => continue,
            }
        } else {
            Event::Tick
        };

        let (should_render, actions) = handle_event(state, &app_event)?;
        needs_render |= should_render;

        for action in actions {
            match action {
                Action::Quit => {
                    tracing::debug!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

/// Input poll timeout: the pending debounce deadline bounds the idle timeout.
fn poll_timeout(state: &AppState) -> Duration {
    state.next_deadline().map_or(IDLE_POLL, |deadline| {
        deadline
            .saturating_duration_since(Instant::now())
            .min(IDLE_POLL)
    })
}

/// Maps a key event to an application event, depending on the input mode.
///
/// Returns `None` for keys with no meaning in the current mode.
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    Some(match state.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Event::CursorDown,
            KeyCode::Up | KeyCode::Char('k') => Event::CursorUp,
            KeyCode::Char(' ') => Event::ToggleSelect,
            KeyCode::Char('a') => Event::ToggleSelectAll,
            KeyCode::Char('d') => Event::DeleteSelected,
            KeyCode::Char('n') => Event::OpenForm,
            KeyCode::Char('/') => Event::SearchMode,
            KeyCode::Char('1') => Event::CycleSort(SortColumn::Name),
            KeyCode::Char('2') => Event::CycleSort(SortColumn::Rating),
            KeyCode::Char('3') => Event::CycleSort(SortColumn::Comment),
            KeyCode::Char('q') => Event::Quit,
            KeyCode::Esc => Event::Escape,
            _ => return None,
        },
        InputMode::Search(SearchFocus::Typing) => match key.code {
            KeyCode::Esc => Event::ExitSearch,
            KeyCode::Enter => Event::FocusResults,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        },
        InputMode::Search(SearchFocus::Navigating) => match key.code {
            KeyCode::Esc => Event::ExitSearch,
            KeyCode::Char('/') => Event::FocusSearchBar,
            KeyCode::Down | KeyCode::Char('j') => Event::CursorDown,
            KeyCode::Up | KeyCode::Char('k') => Event::CursorUp,
            KeyCode::Char(' ') => Event::ToggleSelect,
            KeyCode::Char('a') => Event::ToggleSelectAll,
            KeyCode::Char('d') => Event::DeleteSelected,
            _ => return None,
        },
        InputMode::Form => match key.code {
            KeyCode::Esc => Event::Escape,
            KeyCode::Tab => Event::NextField,
            KeyCode::Enter => Event::Submit,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        },
    })
}
