use proptest::prelude::*;

use viewkit_canvas::grid::GridCache;
use viewkit_core::constants::{GRID_CELL_SIZE, GRID_UPDATE_UNIT};
use viewkit_core::ViewRect;

#[test]
fn test_padding_scenario() {
    let mut grid = GridCache::new();
    grid.update(ViewRect::new(-210.0, -130.0, 210.0, 130.0));

    assert_eq!(grid.coverage(), ViewRect::new(-500.0, -500.0, 500.0, 500.0));
    // 11 horizontals + 11 verticals from -500 to 500 step 100.
    assert_eq!(grid.lines().len(), 22);
    let horizontals = grid
        .lines()
        .iter()
        .filter(|l| l.start.y == l.end.y)
        .count();
    let verticals = grid
        .lines()
        .iter()
        .filter(|l| l.start.x == l.end.x)
        .count();
    assert_eq!(horizontals, 11);
    assert_eq!(verticals, 11);
}

#[test]
fn test_edges_on_exact_multiples_still_get_a_margin() {
    let mut grid = GridCache::new();
    grid.update(ViewRect::new(-500.0, -500.0, 500.0, 500.0));
    // Each aligned edge is pushed out a full update unit.
    assert_eq!(
        grid.coverage(),
        ViewRect::new(-1000.0, -1000.0, 1000.0, 1000.0)
    );
}

#[test]
fn test_hysteresis_keeps_cache_for_small_moves() {
    let mut grid = GridCache::new();
    grid.update(ViewRect::new(-210.0, -130.0, 210.0, 130.0));
    let coverage = grid.coverage();
    let lines = grid.lines().to_vec();

    // Nudges that keep every padded edge within one update unit.
    for rect in [
        ViewRect::new(-215.0, -130.0, 205.0, 130.0),
        ViewRect::new(-210.0, -180.0, 210.0, 80.0),
        ViewRect::new(-10.0, -10.0, 10.0, 10.0),
    ] {
        grid.update(rect);
        assert_eq!(grid.coverage(), coverage);
        assert_eq!(grid.lines(), &lines[..]);
    }
}

#[test]
fn test_large_move_regenerates() {
    let mut grid = GridCache::new();
    grid.update(ViewRect::new(-210.0, -130.0, 210.0, 130.0));
    let before = grid.coverage();

    grid.update(ViewRect::new(790.0, -130.0, 1210.0, 130.0));
    assert_ne!(grid.coverage(), before);
    assert_eq!(grid.coverage(), ViewRect::new(500.0, -500.0, 1500.0, 500.0));
}

#[test]
fn test_regeneration_coverage_invariants() {
    let mut grid = GridCache::new();
    let rect = ViewRect::new(-123.4, 56.7, 891.0, 234.5);
    grid.update(rect);

    let coverage = grid.coverage();
    assert!(coverage.contains_rect(&rect));
    for edge in [coverage.left, coverage.top, coverage.right, coverage.bottom] {
        assert_eq!(edge.rem_euclid(GRID_UPDATE_UNIT), 0.0, "edge {edge}");
    }
    for line in grid.lines() {
        for coord in [line.start.x, line.start.y, line.end.x, line.end.y] {
            assert_eq!(coord.rem_euclid(GRID_CELL_SIZE), 0.0, "coord {coord}");
        }
    }
}

#[test]
fn test_lines_span_the_full_coverage() {
    let mut grid = GridCache::new();
    grid.update(ViewRect::new(0.0, 0.0, 800.0, 600.0));
    let coverage = grid.coverage();

    for line in grid.lines() {
        if line.start.y == line.end.y {
            assert_eq!(line.start.x, coverage.left);
            assert_eq!(line.end.x, coverage.right);
        } else {
            assert_eq!(line.start.y, coverage.top);
            assert_eq!(line.end.y, coverage.bottom);
        }
    }
}

#[test]
fn test_custom_spacing() {
    let mut grid = GridCache::with_spacing(100.0, 10.0);
    grid.update(ViewRect::new(-5.0, -5.0, 5.0, 5.0));
    assert_eq!(grid.coverage(), ViewRect::new(-100.0, -100.0, 100.0, 100.0));
    // 21 lines per axis for a 200-unit span at 10-unit cells.
    assert_eq!(grid.lines().len(), 42);
}

proptest! {
    #[test]
    fn prop_coverage_contains_trigger_rect(
        left in -10_000.0..10_000.0f64,
        top in -10_000.0..10_000.0f64,
        width in 0.0..5_000.0f64,
        height in 0.0..5_000.0f64,
    ) {
        let rect = ViewRect::new(left, top, left + width, top + height);
        let mut grid = GridCache::new();
        grid.update(rect);

        let coverage = grid.coverage();
        prop_assert!(coverage.contains_rect(&rect));
        // Padding guarantees a strictly positive margin on every side.
        prop_assert!(coverage.left < rect.left);
        prop_assert!(coverage.top < rect.top);
        prop_assert!(coverage.right > rect.right);
        prop_assert!(coverage.bottom > rect.bottom);
    }
}
