use super::*;

#[test]
fn test_file_commands_are_global() {
    let service = KeybindingService::new();

    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(
        service.resolve(KeybindingContext::Global, &key),
        Some(&Command::Save)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &key),
        Some(&Command::Save)
    );
    assert_eq!(
        service.resolve(KeybindingContext::RecentsMenu, &key),
        Some(&Command::Save)
    );
}

#[test]
fn test_enter_depends_on_context() {
    let service = KeybindingService::new();
    let enter = Key::simple(KeyCode::Enter);

    assert_eq!(
        service.resolve(KeybindingContext::Editor, &enter),
        Some(&Command::InsertNewline)
    );
    assert_eq!(
        service.resolve(KeybindingContext::RecentsMenu, &enter),
        Some(&Command::RecentsAccept)
    );
    assert_eq!(service.resolve(KeybindingContext::Global, &enter), None);
}

#[test]
fn test_font_toggles_use_alt() {
    let service = KeybindingService::new();

    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::alt(KeyCode::Char('b'))),
        Some(&Command::ToggleBold)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::alt(KeyCode::Char('i'))),
        Some(&Command::ToggleItalic)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::alt(KeyCode::Char('u'))),
        Some(&Command::ToggleUnderline)
    );
}
