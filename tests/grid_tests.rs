//! GridPuzzle tests - construction, rotation, and win detection

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rubik_table::core::{GridPuzzle, PuzzleError};
use rubik_table::types::Color::{Blue as B, Green as G, Purple as P, Red as R};
use rubik_table::types::{Arrow, Axis, Color, Shift, MAX_GRID_SIZE, MIN_GRID_SIZE, PALETTE};

fn counts<'a>(colors: impl IntoIterator<Item = &'a Color>) -> HashMap<Color, usize> {
    let mut map = HashMap::new();
    for &color in colors {
        *map.entry(color).or_insert(0) += 1;
    }
    map
}

fn random_move(rng: &mut StdRng, size: usize) -> (Axis, i32, Shift) {
    let axis = if rng.gen_bool(0.5) { Axis::Row } else { Axis::Column };
    let shift = if rng.gen_bool(0.5) {
        Shift::Forward
    } else {
        Shift::Backward
    };
    (axis, rng.gen_range(0..size) as i32, shift)
}

#[test]
fn test_construction_is_never_solved() {
    for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        for seed in 0..200 {
            let puzzle = GridPuzzle::with_seed(size, seed).unwrap();
            assert!(
                !puzzle.is_solved(),
                "size {} seed {} produced a solved grid:\n{}",
                size,
                seed,
                puzzle
            );
        }
    }
}

#[test]
fn test_unseeded_construction_is_never_solved() {
    for _ in 0..50 {
        assert!(!GridPuzzle::new(2).unwrap().is_solved());
    }
}

#[test]
fn test_construction_uses_each_palette_color_size_times() {
    for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        let puzzle = GridPuzzle::with_seed(size, 42).unwrap();
        assert_eq!(puzzle.size(), size);
        assert_eq!(puzzle.cells().len(), size * size);
        assert_eq!(puzzle.palette(), &PALETTE[..size]);

        let counts = counts(puzzle.cells());
        assert_eq!(counts.len(), size);
        for color in puzzle.palette() {
            assert_eq!(counts[color], size, "{:?} count in {}x{}", color, size, size);
        }
    }
}

#[test]
fn test_same_seed_same_grid() {
    let a = GridPuzzle::with_seed(6, 2024).unwrap();
    let b = GridPuzzle::with_seed(6, 2024).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_invalid_sizes_rejected() {
    for size in [0, 1, MAX_GRID_SIZE + 1, 100] {
        assert_eq!(
            GridPuzzle::new(size),
            Err(PuzzleError::InvalidSize {
                size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            })
        );
    }
}

#[test]
fn test_solved_by_uniform_rows() {
    let puzzle = GridPuzzle::from_rows(&[[R, R], [B, B]]).unwrap();
    assert!(puzzle.rows_uniform());
    assert!(!puzzle.columns_uniform());
    assert!(puzzle.is_solved());
}

#[test]
fn test_solved_by_uniform_columns() {
    let puzzle = GridPuzzle::from_rows(&[[R, B], [R, B]]).unwrap();
    assert!(!puzzle.rows_uniform());
    assert!(puzzle.columns_uniform());
    assert!(puzzle.is_solved());
}

#[test]
fn test_checkerboard_not_solved() {
    let puzzle = GridPuzzle::from_rows(&[[R, B], [B, R]]).unwrap();
    assert!(!puzzle.is_solved());
}

#[test]
fn test_partially_uniform_rows_not_solved() {
    // Two rows uniform, two mixed, no column uniform.
    let puzzle = GridPuzzle::from_rows(&[
        [R, R, R, R],
        [B, B, B, B],
        [G, P, G, P],
        [P, G, P, G],
    ])
    .unwrap();
    assert!(!puzzle.is_solved());
}

#[test]
fn test_from_rows_validation() {
    assert_eq!(
        GridPuzzle::from_rows(&[vec![R, B], vec![R]]),
        Err(PuzzleError::RaggedRow {
            row: 1,
            len: 1,
            size: 2
        })
    );
    assert_eq!(
        GridPuzzle::from_rows(&[[R, G], [B, B]]),
        Err(PuzzleError::ForeignColor {
            row: 0,
            col: 1,
            color: G,
            size: 2
        })
    );
    assert!(matches!(
        GridPuzzle::from_rows(&[[R]]),
        Err(PuzzleError::InvalidSize { size: 1, .. })
    ));
}

fn column(puzzle: &GridPuzzle, col: usize) -> Vec<Color> {
    puzzle.column(col).unwrap().collect()
}

fn row(puzzle: &GridPuzzle, r: usize) -> Vec<Color> {
    puzzle.row(r).unwrap().to_vec()
}

#[test]
fn test_row_and_column_views() {
    let puzzle = four_by_four();
    assert_eq!(puzzle.row(2), Some(&[B, R, R, P][..]));
    assert_eq!(column(&puzzle, 3), vec![B, B, P, G]);
    assert_eq!(
        puzzle.line(Axis::Column, 3).unwrap().as_slice(),
        column(&puzzle, 3).as_slice()
    );

    assert!(puzzle.row(4).is_none());
    assert!(puzzle.column(4).is_none());
}

/// 4x4 grid whose column 0 reads R, G, B, P top to bottom.
fn four_by_four() -> GridPuzzle {
    GridPuzzle::from_rows(&[
        [R, B, B, B],
        [G, B, R, B],
        [B, R, R, P],
        [P, G, G, G],
    ])
    .unwrap()
}

#[test]
fn test_up_then_down_on_column() {
    let mut puzzle = four_by_four();
    assert_eq!(column(&puzzle, 0), vec![R, G, B, P]);

    puzzle.apply(Arrow::Up, 0).unwrap();
    assert_eq!(column(&puzzle, 0), vec![G, B, P, R]);

    puzzle.apply(Arrow::Down, 0).unwrap();
    assert_eq!(column(&puzzle, 0), vec![R, G, B, P]);
    assert_eq!(puzzle, four_by_four());
}

#[test]
fn test_left_and_right_on_row() {
    let mut puzzle = four_by_four();
    assert_eq!(row(&puzzle, 1), vec![G, B, R, B]);

    // Left: each cell takes the color one column to its right.
    puzzle.apply(Arrow::Left, 1).unwrap();
    assert_eq!(row(&puzzle, 1), vec![B, R, B, G]);

    // Right: the rightmost cell wraps to the front.
    let mut puzzle = four_by_four();
    puzzle.apply(Arrow::Right, 1).unwrap();
    assert_eq!(row(&puzzle, 1), vec![B, G, B, R]);
}

#[test]
fn test_forward_backward_match_arrows() {
    let mut by_arrow = four_by_four();
    let mut by_shift = four_by_four();
    for arrow in Arrow::ALL {
        by_arrow.apply(arrow, 2).unwrap();
        by_shift.rotate(arrow.axis(), 2, arrow.shift()).unwrap();
        assert_eq!(by_arrow, by_shift);
    }
}

#[test]
fn test_rotation_touches_only_its_line() {
    let mut rng = StdRng::seed_from_u64(7);
    for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        let mut puzzle = GridPuzzle::with_seed(size, size as u64).unwrap();
        for _ in 0..100 {
            let (axis, index, shift) = random_move(&mut rng, size);
            let before = puzzle.clone();
            puzzle.rotate(axis, index, shift).unwrap();

            let line = index as usize;
            let old = before.line(axis, line).unwrap();
            let new = puzzle.line(axis, line).unwrap();
            assert_eq!(counts(old.iter()), counts(new.iter()));

            for r in 0..size {
                for c in 0..size {
                    let on_line = match axis {
                        Axis::Row => r == line,
                        Axis::Column => c == line,
                    };
                    if !on_line {
                        assert_eq!(
                            before.color_at(r as i32, c as i32),
                            puzzle.color_at(r as i32, c as i32)
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_rotation_has_period_size() {
    for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        let start = GridPuzzle::with_seed(size, 11).unwrap();
        for axis in [Axis::Row, Axis::Column] {
            for shift in [Shift::Forward, Shift::Backward] {
                for index in 0..size as i32 {
                    let mut puzzle = start.clone();
                    for _ in 0..size {
                        puzzle.rotate(axis, index, shift).unwrap();
                    }
                    assert_eq!(puzzle, start);
                }
            }
        }
    }
}

#[test]
fn test_forward_then_backward_is_identity() {
    let start = GridPuzzle::with_seed(5, 3).unwrap();
    for axis in [Axis::Row, Axis::Column] {
        for index in 0..5 {
            let mut puzzle = start.clone();
            puzzle.rotate(axis, index, Shift::Forward).unwrap();
            puzzle.rotate(axis, index, Shift::Backward).unwrap();
            assert_eq!(puzzle, start);

            puzzle.rotate(axis, index, Shift::Backward).unwrap();
            puzzle.rotate(axis, index, Shift::Forward).unwrap();
            assert_eq!(puzzle, start);
        }
    }
}

#[test]
fn test_out_of_range_indices_rejected_without_mutation() {
    for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        let mut puzzle = GridPuzzle::with_seed(size, 5).unwrap();
        let before = puzzle.clone();
        let n = size as i32;

        assert_eq!(
            puzzle.rotate(Axis::Row, n, Shift::Forward),
            Err(PuzzleError::IndexOutOfRange { index: n, size })
        );
        assert_eq!(
            puzzle.rotate(Axis::Column, -1, Shift::Backward),
            Err(PuzzleError::IndexOutOfRange { index: -1, size })
        );
        assert_eq!(
            puzzle.apply(Arrow::Up, n + 3),
            Err(PuzzleError::IndexOutOfRange { index: n + 3, size })
        );
        assert_eq!(
            puzzle.color_at(-1, 0),
            Err(PuzzleError::IndexOutOfRange { index: -1, size })
        );
        assert_eq!(
            puzzle.color_at(0, n),
            Err(PuzzleError::IndexOutOfRange { index: n, size })
        );
        assert_eq!(puzzle, before);
    }
}

#[test]
fn test_column_move_breaks_and_restores_rows() {
    let mut puzzle = GridPuzzle::from_rows(&[[R, R, R], [B, B, B], [P, P, P]]).unwrap();
    assert!(puzzle.is_solved());

    // Break and restore with a column move.
    puzzle.apply(Arrow::Down, 1).unwrap();
    assert!(!puzzle.is_solved());
    puzzle.apply(Arrow::Up, 1).unwrap();
    assert!(puzzle.is_solved());
}
