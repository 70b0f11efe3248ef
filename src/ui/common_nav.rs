use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Transition;

/// Return `Transition::Pop` on Esc so popups close the same way everywhere.
pub fn esc_to_back(k: KeyEvent) -> Option<Transition> {
    if matches!(k.code, KeyCode::Esc) {
        Some(Transition::Pop)
    } else {
        None
    }
}

/// Ctrl+Q, the global quit chord.
pub fn is_quit_chord(k: &KeyEvent) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL) && matches!(k.code, KeyCode::Char('q' | 'Q'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_q_is_the_quit_chord_in_either_case() {
        assert!(is_quit_chord(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(is_quit_chord(&KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)));

        assert!(!is_quit_chord(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!is_quit_chord(&KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)));
        assert!(!is_quit_chord(&KeyEvent::new(KeyCode::Esc, KeyModifiers::CONTROL)));
    }

    #[test]
    fn esc_pops() {
        assert!(matches!(esc_to_back(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)), Some(Transition::Pop)));
        assert!(esc_to_back(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_none());
    }
}
