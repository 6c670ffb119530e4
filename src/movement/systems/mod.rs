//! Movement domain: system modules for walking updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{animate_avatar, apply_jump, apply_motion, start_jump};
