//! Image sources of a shoebox room
//!
//! Mirroring the room `n` times along one axis moves the source by a multiple
//! of the edge length. With the source at the origin and the receiver at the
//! far corner, the source/receiver offset along that axis is always an odd
//! multiple of the edge: `d(n) = n + parity(n) - 1`.
//!
//! | n    | -3 | -2 | -1 | 0  | 1 | 2 | 3 |
//! |------|----|----|----|----|---|---|---|
//! | d(n) | -3 | -3 | -1 | -1 | 1 | 1 | 3 |

use serde::Serialize;

/// Source/receiver offset along one axis, in multiples of the edge length.
///
/// `|d(n)|` never decreases as `n` walks away from zero in either direction.
#[inline]
pub fn mirror_factor(index: i32) -> f64 {
    f64::from(index - 1 + index.rem_euclid(2))
}

/// Reflection order of an image index triple (L1 norm).
#[inline]
pub fn reflection_order(indices: [i32; 3]) -> u32 {
    indices.iter().map(|n| n.unsigned_abs()).sum()
}

/// A qualifying image source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageSource {
    /// Mirrored-room index along x, y and z
    pub indices: [i32; 3],
    /// Number of wall reflections along the path
    pub order: u32,
    /// Path length from image source to receiver (m)
    pub distance: f64,
    /// Arrival delay after emission (s)
    pub delay: f64,
}

impl ImageSource {
    pub(crate) fn new(indices: [i32; 3], distance_squared: f64, speed_of_sound: f64) -> Self {
        let distance = distance_squared.sqrt();
        Self {
            indices,
            order: reflection_order(indices),
            distance,
            delay: distance / speed_of_sound,
        }
    }
}
