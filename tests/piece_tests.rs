//! Piece geometry tests

use fruitris::core::{Piece, SimpleRng, PIVOT};
use fruitris::types::{Fruit, ShapeKind, SPAWN_COL, SPAWN_ROW};

const FRUITS: [Fruit; 4] = [Fruit::Orange, Fruit::Lime, Fruit::Cherry, Fruit::Blueberry];

#[test]
fn test_all_shapes_spawn_at_anchor() {
    for kind in ShapeKind::ALL {
        let piece = Piece::new(kind, FRUITS);
        assert_eq!((piece.col, piece.row), (SPAWN_COL, SPAWN_ROW));
        assert_eq!(piece.cell_positions()[PIVOT], (SPAWN_COL, SPAWN_ROW));
        assert!(piece.in_bounds(), "{:?} spawns off the board", kind);
    }
}

#[test]
fn test_four_rotations_restore_offsets() {
    for kind in ShapeKind::ALL {
        let piece = Piece::new(kind, FRUITS).at(4, 10);
        let turned = piece.rotated().rotated().rotated().rotated();
        assert_eq!(turned, piece, "{:?}", kind);
    }
}

#[test]
fn test_rotation_moves_cells_about_anchor() {
    // I lies flat to the right of the anchor; a quarter turn stands it below
    let piece = Piece::new(ShapeKind::I, FRUITS).at(4, 10);
    let rotated = piece.rotated();
    assert_eq!(
        rotated.cell_positions(),
        [(4, 11), (4, 9), (4, 10), (4, 8)]
    );
    assert_eq!(rotated.fruits, FRUITS);
}

#[test]
fn test_rotated_cells_stay_distinct() {
    for kind in ShapeKind::ALL {
        let mut piece = Piece::new(kind, FRUITS).at(4, 10);
        for _ in 0..4 {
            let pos = piece.cell_positions();
            for i in 0..4 {
                for j in i + 1..4 {
                    assert_ne!(pos[i], pos[j], "{:?} overlaps itself", kind);
                }
            }
            piece = piece.rotated();
        }
    }
}

#[test]
fn test_shift_keeps_shape() {
    let piece = Piece::new(ShapeKind::T, FRUITS);
    let moved = piece.shifted(-2, -5);
    for (a, b) in piece.cell_positions().iter().zip(moved.cell_positions()) {
        assert_eq!((a.0 - 2, a.1 - 5), b);
    }
}

#[test]
fn test_spawn_is_deterministic_per_seed() {
    let mut a = SimpleRng::new(2024);
    let mut b = SimpleRng::new(2024);
    for _ in 0..50 {
        assert_eq!(Piece::spawn(&mut a), Piece::spawn(&mut b));
    }
}

#[test]
fn test_shuffle_redraws_fruit_only() {
    let mut rng = SimpleRng::new(5);
    let piece = Piece::new(ShapeKind::Z, FRUITS).at(3, 12);
    let mut changed = false;
    for _ in 0..10 {
        let shuffled = piece.shuffled(&mut rng);
        assert_eq!(shuffled.cell_positions(), piece.cell_positions());
        changed |= shuffled.fruits != piece.fruits;
    }
    assert!(changed, "ten shuffles never changed a fruit");
}
