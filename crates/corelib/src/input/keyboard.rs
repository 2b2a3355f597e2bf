use crate::utils::EnumSet;
use nohash_hasher::IsEnabled;
use std::hash::Hasher;
use strum::EnumCount;
use strum_macros::EnumIter;

#[derive(
    Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, strum_macros::EnumCount, EnumIter,
)]
#[repr(u8)]
pub enum KeyCode {
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Up,
    Down,
    Left,
    Right,
    Return,
    Space,
    Escape,
    Tab,
    Backspace,
    Delete,
    LShift,
    RShift,
    LControl,
    RControl,
    LAlt,
    RAlt,

    // Unknown is the last value
    Unknown,
}

const KEY_CODE_COUNT_POT2: usize = KeyCode::COUNT.next_power_of_two();

#[derive(Default, Clone)]
pub struct KeyCodeList {
    set: EnumSet<UniqueKeyCode, KEY_CODE_COUNT_POT2>,
}

impl KeyCodeList {
    pub fn insert(&mut self, key: KeyCode) -> bool {
        self.set.insert(UniqueKeyCode(key)).unwrap_or_default()
    }

    pub fn contains(&self, key: KeyCode) -> bool {
        self.set.contains(&UniqueKeyCode(key))
    }

    pub fn remove(&mut self, key: KeyCode) -> bool {
        self.set.remove(&UniqueKeyCode(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.set.iter().map(|unique_key| unique_key.0)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn clear(&mut self) {
        self.set.clear()
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
struct UniqueKeyCode(KeyCode);
impl std::hash::Hash for UniqueKeyCode {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        hasher.write_u8(self.0 as _)
    }
}

impl IsEnabled for UniqueKeyCode {}

impl std::fmt::Debug for KeyCodeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Keyboard state derived from the events dispatched each frame
#[derive(Clone, Debug, Default)]
pub struct KeyboardState {
    pub(crate) pressed: KeyCodeList,
    pub(crate) released: KeyCodeList,
    pub(crate) down: KeyCodeList,
}

impl KeyboardState {
    pub fn press(&mut self, key: KeyCode) {
        if self.down.contains(key) {
            return;
        }

        self.pressed.insert(key);
        self.down.insert(key);
        self.released.remove(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        if !self.down.contains(key) {
            return;
        }

        self.released.insert(key);
        self.down.remove(key);
        self.pressed.remove(key);
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(key)
    }

    pub fn is_released(&self, key: KeyCode) -> bool {
        self.released.contains(key)
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(key)
    }

    /// Clears the per-frame press/release edges, keys stay down
    pub fn tick(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_list_fits_every_key() {
        let mut list = KeyCodeList::default();
        for key in KeyCode::iter() {
            assert!(!list.contains(key));
            list.insert(key);
            assert!(list.contains(key));
        }
        assert_eq!(list.len(), KeyCode::COUNT);
    }

    #[test]
    fn test_state_press_and_release() {
        let mut state = KeyboardState::default();

        state.press(KeyCode::Space);
        assert!(state.is_pressed(KeyCode::Space));
        assert!(state.is_down(KeyCode::Space));
        assert!(!state.is_released(KeyCode::Space));

        state.release(KeyCode::Space);
        assert!(!state.is_pressed(KeyCode::Space));
        assert!(!state.is_down(KeyCode::Space));
        assert!(state.is_released(KeyCode::Space));
    }

    #[test]
    fn test_repeated_press_is_ignored_while_down() {
        let mut state = KeyboardState::default();
        state.press(KeyCode::Return);
        state.tick();

        // OS key-repeat sends press again while the key is held
        state.press(KeyCode::Return);
        assert!(!state.is_pressed(KeyCode::Return));
        assert!(state.is_down(KeyCode::Return));
    }

    #[test]
    fn test_state_tick() {
        let mut state = KeyboardState::default();
        state.press(KeyCode::Up);
        state.press(KeyCode::Down);
        state.release(KeyCode::Down);

        state.tick();

        assert!(state.pressed.is_empty());
        assert!(state.released.is_empty());
        assert!(state.is_down(KeyCode::Up));
    }
}
