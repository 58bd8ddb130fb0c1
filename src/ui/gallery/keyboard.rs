// SPDX-License-Identifier: MPL-2.0
//! Keyboard interpreter.
//!
//! Maps named keys to viewer intents. Modifiers are ignored so that
//! shortcuts keep working with Caps Lock or a held Shift.

use super::Intent;
use iced::keyboard::key::Named;
use iced::keyboard::Key;

/// Returns the intent bound to `key`, if any.
#[must_use]
pub fn interpret(key: &Key) -> Option<Intent> {
    match key {
        Key::Named(Named::Escape) => Some(Intent::Close),
        Key::Named(Named::ArrowLeft) => Some(Intent::Previous),
        Key::Named(Named::ArrowRight) => Some(Intent::Next),
        Key::Named(Named::Home) => Some(Intent::First),
        Key::Named(Named::End) => Some(Intent::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_map_to_intents() {
        assert_eq!(interpret(&Key::Named(Named::Escape)), Some(Intent::Close));
        assert_eq!(interpret(&Key::Named(Named::ArrowLeft)), Some(Intent::Previous));
        assert_eq!(interpret(&Key::Named(Named::ArrowRight)), Some(Intent::Next));
        assert_eq!(interpret(&Key::Named(Named::Home)), Some(Intent::First));
        assert_eq!(interpret(&Key::Named(Named::End)), Some(Intent::Last));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(interpret(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(interpret(&Key::Named(Named::Space)), None);
        assert_eq!(interpret(&Key::Character("q".into())), None);
        assert_eq!(interpret(&Key::Unidentified), None);
    }
}
