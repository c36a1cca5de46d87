//! Integration tests for reflection path counting
//!
//! Fixture counts were produced by the native counting routine on the same
//! inputs and pin the exact pruning behaviour.

use reflection_count::{ReflectionCounter, RoomDimensions, Scenario, count_reflections};

const ROOM: [f64; 3] = [3.29, 6.23, 2.58];
const C: f64 = 343.0;

fn counter(order: u32, dims: [f64; 3], c: f64, t60: f64) -> ReflectionCounter {
    let scenario = Scenario::new(order, RoomDimensions::from(dims), c, t60).unwrap();
    ReflectionCounter::new(&scenario).unwrap()
}

#[test]
fn test_reference_scenario() {
    let count = count_reflections(50, ROOM, C, 0.827).unwrap();
    assert_eq!(count, 171672);
}

#[test]
fn test_fixture_table() {
    let fixtures: [(u32, f64, i64); 8] = [
        (0, 0.827, 1),
        (1, 0.827, 7),
        (2, 0.827, 25),
        (5, 0.827, 231),
        (10, 0.827, 1561),
        (20, 0.827, 11521),
        (30, 0.3, 33744),
        (30, 0.5, 37856),
    ];
    for (order, t60, expected) in fixtures {
        assert_eq!(
            count_reflections(order, ROOM, C, t60).unwrap(),
            expected,
            "order={order} t60={t60}"
        );
    }
}

#[test]
fn test_zero_order_is_direct_path() {
    assert_eq!(count_reflections(0, ROOM, C, 0.827).unwrap(), 1);
    // Diagonal is ~7.5 m, out of reach within 1 ms.
    assert_eq!(count_reflections(0, ROOM, C, 0.001).unwrap(), 0);
}

#[test]
fn test_monotonic_in_order() {
    let mut previous = 0;
    for order in 0..=40 {
        let count = count_reflections(order, ROOM, C, 0.3).unwrap();
        assert!(count >= previous, "order {order}: {count} < {previous}");
        previous = count;
    }
}

#[test]
fn test_monotonic_in_t60() {
    let mut previous = 0;
    for step in 1..=40 {
        let t60 = step as f64 * 0.025;
        let count = count_reflections(25, ROOM, C, t60).unwrap();
        assert!(count >= previous, "t60 {t60}: {count} < {previous}");
        previous = count;
    }
}

#[test]
fn test_axis_permutation_symmetry() {
    let [a, b, c] = ROOM;
    let expected = count_reflections(50, ROOM, C, 0.827).unwrap();
    for dims in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
        assert_eq!(count_reflections(50, dims, C, 0.827).unwrap(), expected);
    }
    // A pruned regime as well.
    let expected = count_reflections(30, ROOM, C, 0.3).unwrap();
    assert_eq!(count_reflections(30, [c, a, b], C, 0.3).unwrap(), expected);
}

#[test]
fn test_deterministic() {
    let c = counter(35, ROOM, C, 0.4);
    let first = c.count();
    for _ in 0..3 {
        assert_eq!(c.count(), first);
        assert_eq!(c.count_parallel(), first);
    }
}

#[test]
fn test_speed_time_scaling_invariance() {
    let base = count_reflections(50, ROOM, C, 0.827).unwrap();
    assert_eq!(count_reflections(50, ROOM, 2.0 * C, 0.827 / 2.0).unwrap(), base);

    let pruned = count_reflections(30, ROOM, C, 0.3).unwrap();
    assert_eq!(count_reflections(30, ROOM, C / 2.0, 0.6).unwrap(), pruned);
}

#[test]
fn test_high_order_does_not_overflow() {
    let c = counter(200, ROOM, C, 0.827);
    assert_eq!(c.count_parallel(), 1808320);

    // With a long T60 every triple of the order-200 octahedron qualifies:
    // (2n + 1)(2n² + 2n + 3) / 3 for n = 200.
    let n: i64 = 200;
    let full = (2 * n + 1) * (2 * n * n + 2 * n + 3) / 3;
    assert_eq!(full, 10747201);
    assert_eq!(counter(200, ROOM, C, 4.0).count_parallel(), full);
}

#[test]
fn test_histogram_and_listing_agree_with_count() {
    let c = counter(30, ROOM, C, 0.3);
    let count = c.count();
    let histogram = c.count_by_order();
    assert!(histogram.len() <= 31);
    assert_eq!(histogram.iter().sum::<i64>(), count);
    assert_eq!(c.image_sources().len() as i64, count);
}

#[test]
fn test_invalid_arguments() {
    for (dims, c, t60) in [
        ([0.0, 6.23, 2.58], C, 0.827),
        ([3.29, -6.23, 2.58], C, 0.827),
        ([3.29, 6.23, f64::INFINITY], C, 0.827),
        (ROOM, 0.0, 0.827),
        (ROOM, C, -0.827),
        (ROOM, C, f64::NAN),
    ] {
        let err = count_reflections(10, dims, c, t60).unwrap_err();
        assert!(err.is_invalid_argument(), "{dims:?} {c} {t60}: {err}");
    }
}
