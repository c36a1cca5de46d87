//! Image-source reflection path counting
//!
//! Every integer triple `(i, j, k)` indexes one mirrored copy of the room. A
//! triple is a reflection path when
//!
//! - its reflection order `|i| + |j| + |k|` is at most the requested order, and
//! - its squared path length
//!   `Lx² d(i)² + Ly² d(j)² + Lz² d(k)²` is strictly below `(c T60)²`,
//!
//! where `d` is [`mirror_factor`]. Since each axis term grows with `|n|` on
//! both half-lines, every loop walks outward from zero and stops at the first
//! miss. The result is identical to the plain triple loop over the order
//! window, only faster.

use crate::config::Scenario;
use crate::error::{ReflectionError, Result};
use crate::image_source::{ImageSource, mirror_factor, reflection_order};
use crate::room::RoomDimensions;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::RangeInclusive;

/// Counts image sources of one scenario.
///
/// Construction validates the scenario; counting never fails afterwards.
#[derive(Debug, Clone)]
pub struct ReflectionCounter {
    order: i32,
    length_squared: [f64; 3],
    max_distance_squared: f64,
    speed_of_sound: f64,
}

impl ReflectionCounter {
    pub fn new(scenario: &Scenario) -> Result<Self> {
        scenario.validate()?;
        let order = i32::try_from(scenario.order).map_err(|_| {
            ReflectionError::invalid("order", format!("must fit in i32, got {}", scenario.order))
        })?;
        let [lx, ly, lz] = scenario.room.as_array();
        let max_distance = scenario.max_distance();
        log::debug!(
            "counting image sources up to order {} within {:.3} m",
            order,
            max_distance
        );
        Ok(Self {
            order,
            length_squared: [lx * lx, ly * ly, lz * lz],
            max_distance_squared: max_distance * max_distance,
            speed_of_sound: scenario.speed_of_sound,
        })
    }

    /// Maximum reflection order considered.
    pub fn order(&self) -> u32 {
        self.order.unsigned_abs()
    }

    /// Number of qualifying image sources.
    pub fn count(&self) -> i64 {
        sum_outward(self.order, |i| self.visit_plane(i, &mut |_: [i32; 3], _: f64| {}))
    }

    /// Same as [`count`](Self::count), with the x axis sharded over the rayon pool.
    pub fn count_parallel(&self) -> i64 {
        self.reachable_planes()
            .into_par_iter()
            .map(|i| self.visit_plane(i, &mut |_: [i32; 3], _: f64| {}))
            .sum()
    }

    /// Range of `x = i` planes holding at least one qualifying triple.
    ///
    /// `(i, 0, 0)` is the nearest triple of its plane, so a plane is empty
    /// exactly when that triple misses. Empty when the direct path misses.
    fn reachable_planes(&self) -> RangeInclusive<i32> {
        let [lx_sq, ly_sq, lz_sq] = self.length_squared;
        let reaches = |i: i32| {
            let fx = mirror_factor(i);
            lx_sq * fx * fx + ly_sq + lz_sq < self.max_distance_squared
        };
        if !reaches(0) {
            return 1..=0;
        }
        let mut high = 0;
        while high < self.order && reaches(high + 1) {
            high += 1;
        }
        let mut low = 0;
        while low > -self.order && reaches(low - 1) {
            low -= 1;
        }
        low..=high
    }

    /// Qualifying image sources per reflection order.
    ///
    /// Index `n` holds the count for order `n`. The vector stops at the highest
    /// order that has at least one image source, so it is empty when even the
    /// direct path is out of reach.
    pub fn count_by_order(&self) -> Vec<i64> {
        let mut histogram: Vec<i64> = Vec::new();
        self.for_each_image_source(|indices, _| {
            let order = reflection_order(indices) as usize;
            if histogram.len() <= order {
                histogram.resize(order + 1, 0);
            }
            histogram[order] += 1;
        });
        histogram
    }

    /// Every qualifying image source, nearest first.
    pub fn image_sources(&self) -> Vec<ImageSource> {
        let mut images = Vec::new();
        self.for_each_image_source(|indices, distance_squared| {
            images.push(ImageSource::new(
                indices,
                distance_squared,
                self.speed_of_sound,
            ));
        });
        images.sort_by(nearest_first);
        images
    }

    /// The `limit` nearest qualifying image sources, nearest first.
    ///
    /// Same as the head of [`image_sources`](Self::image_sources), but only
    /// `limit` records are ever held in memory.
    pub fn nearest_image_sources(&self, limit: usize) -> Vec<ImageSource> {
        if limit == 0 {
            return Vec::new();
        }
        let mut heap: BinaryHeap<ByDistance> = BinaryHeap::with_capacity(limit + 1);
        self.for_each_image_source(|indices, distance_squared| {
            let image = ImageSource::new(indices, distance_squared, self.speed_of_sound);
            if heap.len() < limit {
                heap.push(ByDistance(image));
            } else if heap
                .peek()
                .is_some_and(|farthest| nearest_first(&image, &farthest.0) == Ordering::Less)
            {
                heap.pop();
                heap.push(ByDistance(image));
            }
        });
        heap.into_sorted_vec()
            .into_iter()
            .map(|entry| entry.0)
            .collect()
    }

    /// Calls `visit(indices, distance_squared)` for every qualifying triple and
    /// returns how many there were.
    pub fn for_each_image_source<F>(&self, mut visit: F) -> i64
    where
        F: FnMut([i32; 3], f64),
    {
        sum_outward(self.order, |i| self.visit_plane(i, &mut visit))
    }

    /// Walks the `x = i` plane of the lattice.
    fn visit_plane<F>(&self, i: i32, visit: &mut F) -> i64
    where
        F: FnMut([i32; 3], f64),
    {
        let [lx_sq, ly_sq, lz_sq] = self.length_squared;
        let fx = mirror_factor(i);
        let x = lx_sq * fx * fx;
        let budget = self.order - i.abs();

        sum_outward(budget, |j| {
            let fy = mirror_factor(j);
            let xy = x + ly_sq * fy * fy;
            sum_outward(budget - j.abs(), |k| {
                let fz = mirror_factor(k);
                let distance_squared = xy + lz_sq * fz * fz;
                if distance_squared < self.max_distance_squared {
                    visit([i, j, k], distance_squared);
                    1
                } else {
                    0
                }
            })
        })
    }
}

fn nearest_first(a: &ImageSource, b: &ImageSource) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.indices.cmp(&b.indices))
}

/// Heap entry ordered by [`nearest_first`]; the max-heap top is the farthest.
struct ByDistance(ImageSource);

impl PartialEq for ByDistance {
    fn eq(&self, other: &Self) -> bool {
        nearest_first(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for ByDistance {}

impl PartialOrd for ByDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        nearest_first(&self.0, &other.0)
    }
}

/// Sums `visit(n)` for `n = 0, 1, .., budget` then `n = -1, .., -budget`,
/// abandoning each direction at the first zero.
fn sum_outward(budget: i32, mut visit: impl FnMut(i32) -> i64) -> i64 {
    let mut total = 0;
    for index in 0..=budget {
        let found = visit(index);
        if found == 0 {
            break;
        }
        total += found;
    }
    for index in 1..=budget {
        let found = visit(-index);
        if found == 0 {
            break;
        }
        total += found;
    }
    total
}

/// Count reflection paths in a shoebox room.
///
/// # Arguments
/// * `order` - Maximum reflection order
/// * `room_dims` - Room edge lengths `[Lx, Ly, Lz]` in meters
/// * `c` - Speed of sound in m/s
/// * `t60` - Reverberation time in seconds
///
/// # Errors
/// Returns [`ReflectionError::InvalidArgument`] when an edge, `c` or `t60` is
/// not a finite positive number.
///
/// # Example
/// ```
/// let count = reflection_count::count_reflections(50, [3.29, 6.23, 2.58], 343.0, 0.827)?;
/// assert_eq!(count, 171672);
/// # Ok::<(), reflection_count::ReflectionError>(())
/// ```
pub fn count_reflections(order: u32, room_dims: [f64; 3], c: f64, t60: f64) -> Result<i64> {
    let scenario = Scenario::new(order, RoomDimensions::from(room_dims), c, t60)?;
    Ok(ReflectionCounter::new(&scenario)?.count())
}
