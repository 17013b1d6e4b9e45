use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use term_desk::catalog::AppId;
use term_desk::desktop::Desktop;
use term_desk::session::Session;

fn desktop() -> Desktop {
    let mut desktop = Desktop::new(Session::new(500));
    desktop.layout(Rect::new(0, 0, 140, 44));
    desktop
}

fn press(desktop: &mut Desktop, code: KeyCode, mods: KeyModifiers) {
    desktop.handle_event(&Event::Key(KeyEvent::new(code, mods)));
}

#[test]
fn opening_focuses_and_reopening_raises() {
    let mut desktop = desktop();
    desktop.request_open(AppId::Console);
    desktop.request_open(AppId::Mail);
    desktop.request_open(AppId::Files);
    assert_eq!(desktop.registry().top_visible(), Some(AppId::Files));

    desktop.request_open(AppId::Console);
    assert_eq!(desktop.registry().top_visible(), Some(AppId::Console));
    assert_eq!(
        desktop.registry().stack(),
        &[AppId::Mail, AppId::Files, AppId::Console]
    );
}

#[test]
fn tab_cycles_forward_and_backtab_cycles_backward() {
    let mut desktop = desktop();
    desktop.request_open(AppId::Console);
    desktop.request_open(AppId::Mail);
    desktop.request_open(AppId::Files);

    press(&mut desktop, KeyCode::Tab, KeyModifiers::NONE);
    assert_eq!(desktop.registry().top_visible(), Some(AppId::Console));
    press(&mut desktop, KeyCode::Tab, KeyModifiers::NONE);
    assert_eq!(desktop.registry().top_visible(), Some(AppId::Mail));

    // BackTab undoes one rotation.
    press(&mut desktop, KeyCode::BackTab, KeyModifiers::NONE);
    assert_eq!(desktop.registry().top_visible(), Some(AppId::Console));
}

#[test]
fn minimize_hands_focus_to_the_next_visible_window() {
    let mut desktop = desktop();
    desktop.request_open(AppId::Console);
    desktop.request_open(AppId::Mail);

    press(&mut desktop, KeyCode::Char('m'), KeyModifiers::ALT);
    assert!(!desktop.registry().is_visible(AppId::Mail));
    assert!(desktop.registry().is_open(AppId::Mail));
    assert_eq!(desktop.registry().top_visible(), Some(AppId::Console));

    // Minimizing the last visible window leaves nothing focused; the
    // shortcut then has nothing to act on.
    press(&mut desktop, KeyCode::Char('m'), KeyModifiers::ALT);
    assert_eq!(desktop.registry().top_visible(), None);
    press(&mut desktop, KeyCode::Char('m'), KeyModifiers::ALT);
    assert_eq!(desktop.registry().top_visible(), None);
}

#[test]
fn restore_is_positional_unless_the_preference_raises() {
    let mut desktop = desktop();
    desktop.request_open(AppId::Console);
    desktop.request_open(AppId::Mail);
    desktop.minimize_window(AppId::Console);

    // Default: reappear in place, focus stays with the top window.
    assert!(desktop.restore_window(AppId::Console));
    assert_eq!(desktop.registry().stack(), &[AppId::Console, AppId::Mail]);
    assert_eq!(desktop.registry().top_visible(), Some(AppId::Mail));

    desktop.minimize_window(AppId::Console);
    desktop.session_mut().settings_mut().raise_on_restore = true;
    assert!(desktop.restore_window(AppId::Console));
    assert_eq!(desktop.registry().stack(), &[AppId::Mail, AppId::Console]);
    assert_eq!(desktop.registry().top_visible(), Some(AppId::Console));
}

#[test]
fn close_focused_falls_back_to_the_window_below() {
    let mut desktop = desktop();
    desktop.request_open(AppId::Console);
    desktop.request_open(AppId::Mail);

    press(&mut desktop, KeyCode::Char('w'), KeyModifiers::CONTROL);
    assert!(!desktop.registry().is_open(AppId::Mail));
    assert_eq!(desktop.registry().top_visible(), Some(AppId::Console));

    press(&mut desktop, KeyCode::Char('w'), KeyModifiers::CONTROL);
    assert_eq!(desktop.registry().top_visible(), None);
    // With nothing open the shortcut is inert.
    press(&mut desktop, KeyCode::Char('w'), KeyModifiers::CONTROL);
}

#[test]
fn keys_reach_the_focused_app_only() {
    let mut terminal = Terminal::new(TestBackend::new(140, 44)).unwrap();
    let mut desktop = desktop();
    desktop.request_open(AppId::Store);
    desktop.request_open(AppId::Task);
    // A draw populates both app views; the store row under the cursor is
    // the cheapest product.
    terminal.draw(|frame| desktop.render(frame)).unwrap();

    // Task is focused, so Enter toggles a checklist row, not a purchase.
    press(&mut desktop, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(desktop.session().wallet(), 500);

    // With Task minimized the store takes the keyboard.
    press(&mut desktop, KeyCode::Char('m'), KeyModifiers::ALT);
    press(&mut desktop, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(desktop.session().wallet(), 400);
    assert!(desktop.session().owns("Synapse Cloud"));
}
