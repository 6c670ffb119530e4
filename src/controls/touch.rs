//! Controls domain: virtual button state with per-pointer ownership.

use bevy::prelude::*;

use crate::movement::DirectionalState;

/// On-screen buttons shown on touch devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualButton {
    Up,
    Down,
    Left,
    Right,
    Jump,
}

impl VirtualButton {
    pub const ALL: [VirtualButton; 5] = [
        VirtualButton::Up,
        VirtualButton::Down,
        VirtualButton::Left,
        VirtualButton::Right,
        VirtualButton::Jump,
    ];

    fn index(self) -> usize {
        match self {
            VirtualButton::Up => 0,
            VirtualButton::Down => 1,
            VirtualButton::Left => 2,
            VirtualButton::Right => 3,
            VirtualButton::Jump => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VirtualButton::Up => "▲",
            VirtualButton::Down => "▼",
            VirtualButton::Left => "◀",
            VirtualButton::Right => "▶",
            VirtualButton::Jump => "JUMP",
        }
    }
}

/// Which pointer currently holds a button down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonOwnership {
    pub pressed_by: Option<u64>,
}

impl ButtonOwnership {
    pub fn claim(&mut self, pointer: u64) {
        self.pressed_by = Some(pointer);
    }

    /// Clear ownership if `pointer` is the owner. Returns whether it was.
    pub fn release(&mut self, pointer: u64) -> bool {
        if self.pressed_by == Some(pointer) {
            self.pressed_by = None;
            true
        } else {
            false
        }
    }

    pub fn is_owned_by(&self, pointer: u64) -> bool {
        self.pressed_by == Some(pointer)
    }
}

/// Pressed state of the virtual buttons.
///
/// The latest pointer to press a button owns it, and only that pointer can
/// release it, so one finger lifting never drops a button another finger is
/// holding. Jump is latched on press and stays latched until a jump actually
/// starts or the owning finger lifts.
#[derive(Resource, Debug, Default, Clone)]
pub struct TouchControls {
    active: bool,
    pressed: [bool; 5],
    owners: [ButtonOwnership; 5],
}

impl TouchControls {
    /// Touch state only takes part in input resolution once active.
    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn press(&mut self, button: VirtualButton, pointer: u64) {
        let i = button.index();
        self.pressed[i] = true;
        self.owners[i].claim(pointer);
    }

    /// Release `button` if `pointer` owns it. Returns whether anything changed.
    pub fn release(&mut self, button: VirtualButton, pointer: u64) -> bool {
        let i = button.index();
        if self.owners[i].release(pointer) {
            self.pressed[i] = false;
            true
        } else {
            false
        }
    }

    /// Buttons currently owned by `pointer`.
    pub fn owned_by(&self, pointer: u64) -> Vec<VirtualButton> {
        VirtualButton::ALL
            .into_iter()
            .filter(|b| self.owners[b.index()].is_owned_by(pointer))
            .collect()
    }

    pub fn owner(&self, button: VirtualButton) -> ButtonOwnership {
        self.owners[button.index()]
    }

    pub fn is_pressed(&self, button: VirtualButton) -> bool {
        self.pressed[button.index()]
    }

    pub fn directions(&self) -> DirectionalState {
        DirectionalState {
            up: self.is_pressed(VirtualButton::Up),
            down: self.is_pressed(VirtualButton::Down),
            left: self.is_pressed(VirtualButton::Left),
            right: self.is_pressed(VirtualButton::Right),
        }
    }

    /// Whether a jump press is waiting to be consumed.
    pub fn jump_latched(&self) -> bool {
        self.is_pressed(VirtualButton::Jump)
    }

    /// Clear the jump latch once a jump has started. Ownership is kept until
    /// the finger lifts.
    pub fn clear_jump(&mut self) {
        self.pressed[VirtualButton::Jump.index()] = false;
    }
}
