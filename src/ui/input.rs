//! # Key Handling
//!
//! Translates crossterm key events into [`Action`]s for the current view.
//!
//! ## Guarantees
//! - Only `Press` events produce actions (release/repeat reports are ignored)
//! - `Ctrl+C` always quits, even while typing in the simulator
//! - No panics on any key combination
//!
//! On the Live Simulator screen printable characters go to the prompt input,
//! so the single-letter shortcuts of the other screens are not available there.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::router::View;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PreviousView,
    Navigate(View),
    ToggleSidebar,
    CycleTheme,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    /// Copy the displayed source to the clipboard.
    CopySource,
    /// Save the displayed source as `chainforge.py`.
    DownloadSource,
    InputChar(char),
    InputBackspace,
    ClearInput,
    Submit,
    ClearLog,
    /// Stop holding a scroll position and follow the newest log line again.
    FollowLog,
    None,
}

/// Map `key` to an action for `view`.
pub fn translate_key(view: View, key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Tab => return Action::NextView,
        KeyCode::BackTab => return Action::PreviousView,
        KeyCode::F(n) => {
            return View::from_hotkey(u32::from(n)).map_or(Action::None, Action::Navigate);
        }
        _ => {}
    }

    if view == View::Playground {
        return translate_playground_key(key.code, ctrl);
    }

    if ctrl {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char(c @ '1'..='4') => c
            .to_digit(10)
            .and_then(View::from_hotkey)
            .map_or(Action::None, Action::Navigate),
        KeyCode::Char('m') => Action::ToggleSidebar,
        KeyCode::Char('t') => Action::CycleTheme,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('g') | KeyCode::Home => Action::ScrollTop,
        KeyCode::Char('G') | KeyCode::End => Action::ScrollBottom,
        KeyCode::Enter if view == View::Home => Action::Navigate(View::Source),
        KeyCode::Char('c') if view == View::Source => Action::CopySource,
        KeyCode::Char('d') if view == View::Source => Action::DownloadSource,
        _ => Action::None,
    }
}

fn translate_playground_key(code: KeyCode, ctrl: bool) -> Action {
    if ctrl {
        return match code {
            KeyCode::Char('l') => Action::ClearLog,
            KeyCode::Char('u') => Action::ClearInput,
            _ => Action::None,
        };
    }

    match code {
        KeyCode::Char(c) => Action::InputChar(c),
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Enter => Action::Submit,
        KeyCode::Up => Action::ScrollUp,
        KeyCode::Down => Action::ScrollDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::End => Action::FollowLog,
        KeyCode::Esc => Action::Navigate(View::Home),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for view in View::ALL {
            assert_eq!(translate_key(view, ctrl('c')), Action::Quit);
        }
    }

    #[test]
    fn test_release_events_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate_key(View::Home, key), Action::None);
    }

    #[test]
    fn test_q_quits_outside_playground_only() {
        assert_eq!(translate_key(View::Docs, press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            translate_key(View::Playground, press(KeyCode::Char('q'))),
            Action::InputChar('q')
        );
    }

    #[test]
    fn test_number_hotkeys() {
        assert_eq!(
            translate_key(View::Home, press(KeyCode::Char('3'))),
            Action::Navigate(View::Playground)
        );
        assert_eq!(translate_key(View::Home, press(KeyCode::Char('5'))), Action::None);
        assert_eq!(
            translate_key(View::Playground, press(KeyCode::F(4))),
            Action::Navigate(View::Docs)
        );
        assert_eq!(translate_key(View::Home, press(KeyCode::F(9))), Action::None);
    }

    #[test]
    fn test_tab_cycles_in_every_view() {
        for view in View::ALL {
            assert_eq!(translate_key(view, press(KeyCode::Tab)), Action::NextView);
            assert_eq!(translate_key(view, press(KeyCode::BackTab)), Action::PreviousView);
        }
    }

    #[test]
    fn test_view_specific_keys() {
        assert_eq!(
            translate_key(View::Home, press(KeyCode::Enter)),
            Action::Navigate(View::Source)
        );
        assert_eq!(translate_key(View::Docs, press(KeyCode::Enter)), Action::None);
        assert_eq!(
            translate_key(View::Source, press(KeyCode::Char('c'))),
            Action::CopySource
        );
        assert_eq!(
            translate_key(View::Source, press(KeyCode::Char('d'))),
            Action::DownloadSource
        );
        assert_eq!(translate_key(View::Docs, press(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn test_playground_editing_keys() {
        let view = View::Playground;
        assert_eq!(
            translate_key(view, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Action::InputChar('A')
        );
        assert_eq!(translate_key(view, press(KeyCode::Backspace)), Action::InputBackspace);
        assert_eq!(translate_key(view, press(KeyCode::Enter)), Action::Submit);
        assert_eq!(translate_key(view, ctrl('l')), Action::ClearLog);
        assert_eq!(translate_key(view, ctrl('u')), Action::ClearInput);
        assert_eq!(translate_key(view, press(KeyCode::End)), Action::FollowLog);
        assert_eq!(
            translate_key(view, press(KeyCode::Esc)),
            Action::Navigate(View::Home)
        );
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(translate_key(View::Source, press(KeyCode::Char('j'))), Action::ScrollDown);
        assert_eq!(translate_key(View::Source, press(KeyCode::Up)), Action::ScrollUp);
        assert_eq!(translate_key(View::Docs, press(KeyCode::Char('G'))), Action::ScrollBottom);
        assert_eq!(translate_key(View::Docs, press(KeyCode::Char('g'))), Action::ScrollTop);
        assert_eq!(translate_key(View::Playground, press(KeyCode::PageUp)), Action::PageUp);
    }
}
