//! Translates terminal key events into registry lookups.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::motion::MotionContext;
use crate::registry::{Dispatch, Registry};

/// The lookup keys a single key event can resolve to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyName {
    /// Modifier combination such as `ctrl+r`. Checked first.
    pub combo: Option<String>,
    /// Plain binding: the character itself, or `Escape`, `Enter`,
    /// `Backspace`, `Tab`.
    pub plain: Option<String>,
    /// Character for the any-key sink. Only set without ctrl/alt.
    pub printable: Option<char>,
}

pub fn translate(event: &KeyEvent) -> KeyName {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    match event.code {
        KeyCode::Char(c) => {
            let combo = (ctrl || alt).then(|| {
                let mut combo = String::new();
                if ctrl {
                    combo.push_str("ctrl+");
                }
                if alt {
                    combo.push_str("alt+");
                }
                combo.push(c.to_ascii_lowercase());
                combo
            });
            KeyName {
                combo,
                plain: Some(c.to_string()),
                printable: (!ctrl && !alt).then_some(c),
            }
        }
        KeyCode::Esc => named("Escape"),
        KeyCode::Enter => named("Enter"),
        KeyCode::Backspace => named("Backspace"),
        KeyCode::Tab => named("Tab"),
        _ => KeyName::default(),
    }
}

fn named(name: &str) -> KeyName {
    KeyName {
        plain: Some(name.to_string()),
        ..KeyName::default()
    }
}

impl KeyName {
    /// Lookup keys for a key identifier such as `"w"`, `"Escape"` or
    /// `"ctrl+r"`. Only a single non-control character is printable.
    pub fn from_identifier(key: &str) -> KeyName {
        let mut chars = key.chars();
        let printable = match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        };
        KeyName {
            combo: None,
            plain: Some(key.to_string()),
            printable,
        }
    }
}

/// Dispatch one key event. Release events are ignored.
pub fn handle_key<F>(
    event: &KeyEvent,
    registry: &Registry,
    ctx: &mut dyn MotionContext,
    any_key: F,
) -> Dispatch
where
    F: FnMut(&mut dyn MotionContext, char) -> bool,
{
    if event.kind == KeyEventKind::Release {
        return Dispatch::Unknown;
    }
    dispatch(&translate(event), registry, ctx, any_key)
}

/// Resolve `name` against `registry`.
///
/// A registered combination binding always wins over the plain binding for
/// the same letter. A printable character that no applicable motion handled
/// goes to `any_key`, which reports whether it consumed it.
pub fn dispatch<F>(
    name: &KeyName,
    registry: &Registry,
    ctx: &mut dyn MotionContext,
    mut any_key: F,
) -> Dispatch
where
    F: FnMut(&mut dyn MotionContext, char) -> bool,
{
    if let Some(combo) = name.combo.as_deref() {
        if registry.contains(combo) {
            return registry.execute(combo, ctx, None);
        }
    }

    let mut outcome = Dispatch::Unknown;
    if let Some(plain) = name.plain.as_deref() {
        outcome = registry.execute(plain, ctx, None);
        if outcome.is_handled() {
            return outcome;
        }
    }

    if let Some(c) = name.printable {
        if any_key(ctx, c) {
            return Dispatch::Handled;
        }
    }
    outcome
}
