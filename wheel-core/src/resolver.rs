//! Angle to sector mapping.
//!
//! Sectors are drawn clockwise from `rotation - π/2`, one per entry, each
//! `2π / count` wide. The pointer sits at `-π/2`, so relative to the wheel it
//! reads the angle `-rotation`. Sector `i` owns pointer offsets in the
//! half-open interval `[i * slice, (i + 1) * slice)`.

use serde::Serialize;

use crate::constants::{FULL_TURN, POINTER_ANGLE};

/// Index of the sector under the pointer once the wheel rests at
/// `final_rotation`. `None` for an empty wheel or a non-finite angle.
pub fn resolve_winner(final_rotation: f64, entry_count: usize) -> Option<usize> {
    if entry_count == 0 || !final_rotation.is_finite() {
        return None;
    }
    let slice = FULL_TURN / entry_count as f64;
    let normalized = final_rotation.rem_euclid(FULL_TURN);
    let offset = (FULL_TURN - normalized) % FULL_TURN;
    // The final modulo absorbs an offset that rounds up to a full turn.
    Some((offset / slice).floor() as usize % entry_count)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sector {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl Sector {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Drawing angles for every sector at `rotation`.
pub fn sector_layout(rotation: f64, entry_count: usize) -> Vec<Sector> {
    if entry_count == 0 {
        return Vec::new();
    }
    let slice = FULL_TURN / entry_count as f64;
    let origin = rotation + POINTER_ANGLE;
    (0..entry_count)
        .map(|index| {
            let start = origin + index as f64 * slice;
            Sector {
                index,
                start,
                end: start + slice,
            }
        })
        .collect()
}

/// Sector drawn under the pointer. Same arithmetic as `resolve_winner`, so
/// edge angles land on the same side for drawing and elimination.
pub fn pointer_sector(rotation: f64, entry_count: usize) -> Option<usize> {
    resolve_winner(rotation, entry_count)
}

/// Sector covering the absolute drawing angle `angle`: the one that would sit
/// under the pointer if the wheel were turned back by `angle - POINTER_ANGLE`.
pub fn sector_at(rotation: f64, entry_count: usize, angle: f64) -> Option<usize> {
    if !angle.is_finite() {
        return None;
    }
    resolve_winner(rotation - (angle - POINTER_ANGLE), entry_count)
}
