use crate::math::Vec2;
use crate::utils::EnumSet;
use nohash_hasher::IsEnabled;
use std::hash::Hasher;
use strum::EnumCount;
use strum_macros::EnumIter;

#[derive(
    Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, strum_macros::EnumCount, EnumIter,
)]
#[repr(u8)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Back,
    Forward,

    // Unknown is the last value
    Unknown,
}

const MOUSE_BUTTON_COUNT_POT2: usize = MouseButton::COUNT.next_power_of_two();

#[derive(Default, Clone)]
pub struct MouseButtonList {
    set: EnumSet<UniqueMouseButton, MOUSE_BUTTON_COUNT_POT2>,
}

impl MouseButtonList {
    pub fn insert(&mut self, btn: MouseButton) -> bool {
        self.set.insert(UniqueMouseButton(btn)).unwrap_or_default()
    }

    pub fn contains(&self, btn: MouseButton) -> bool {
        self.set.contains(&UniqueMouseButton(btn))
    }

    pub fn remove(&mut self, btn: MouseButton) -> bool {
        self.set.remove(&UniqueMouseButton(btn))
    }

    pub fn iter(&self) -> impl Iterator<Item = MouseButton> + '_ {
        self.set.iter().map(|unique_btn| unique_btn.0)
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
struct UniqueMouseButton(MouseButton);
impl std::hash::Hash for UniqueMouseButton {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        hasher.write_u8(self.0 as _)
    }
}

impl IsEnabled for UniqueMouseButton {}

impl std::fmt::Debug for MouseButtonList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pointer state derived from the events dispatched each frame
#[derive(Clone, Debug, Default)]
pub struct MouseState {
    pub(crate) position: Vec2,
    pub(crate) pressed: MouseButtonList,
    pub(crate) released: MouseButtonList,
    pub(crate) down: MouseButtonList,
}

impl MouseState {
    /// Last known pointer position in real window coordinates
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn press(&mut self, btn: MouseButton) {
        if self.down.contains(btn) {
            return;
        }

        self.pressed.insert(btn);
        self.down.insert(btn);
        self.released.remove(btn);
    }

    pub fn release(&mut self, btn: MouseButton) {
        if !self.down.contains(btn) {
            return;
        }

        self.released.insert(btn);
        self.down.remove(btn);
        self.pressed.remove(btn);
    }

    pub fn is_pressed(&self, btn: MouseButton) -> bool {
        self.pressed.contains(btn)
    }

    pub fn is_released(&self, btn: MouseButton) -> bool {
        self.released.contains(btn)
    }

    pub fn is_down(&self, btn: MouseButton) -> bool {
        self.down.contains(btn)
    }

    /// Clears the per-frame press/release edges, buttons stay down
    pub fn tick(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}
