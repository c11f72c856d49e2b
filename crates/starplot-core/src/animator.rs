//! Transition playback hook for the mapper

use crate::table::MappedPoints;

/// Plays the transition between two successive projections.
///
/// When a [`MapperController`](crate::MapperController) has an animator it
/// stops writing `x`/`y` into its source and leaves that to the animator.
pub trait Animator {
    /// `previous` is `None` on the first mapping.
    fn animation_sequence(&mut self, previous: Option<&MappedPoints>, next: &MappedPoints);
}
