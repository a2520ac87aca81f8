use darksquare::{evaluate, Grid, Position, Side};

fn grid_of(pieces: &[(usize, usize, i8)]) -> Grid {
    let mut grid: Grid = [[0; 8]; 8];
    for &(row, col, v) in pieces {
        grid[row][col] = v;
    }
    grid
}

#[test]
fn initial_position_is_exactly_balanced() {
    let score = evaluate(&Position::initial());
    assert_eq!(score, 0.0, "symmetric start must cancel exactly, got {score}");
}

#[test]
fn evaluation_is_deterministic() {
    let pos = Position::initial();
    assert_eq!(evaluate(&pos).to_bits(), evaluate(&pos).to_bits());
}

#[test]
fn material_advantage_dominates() {
    let red_up = Position::from_grid(&grid_of(&[(4, 3, 1), (5, 4, 1), (2, 3, -1)]), Side::Red)
        .expect("from_grid");
    assert!(evaluate(&red_up) > 0.0);

    let black_up = Position::from_grid(&grid_of(&[(4, 3, 1), (2, 3, -1), (3, 4, -1)]), Side::Red)
        .expect("from_grid");
    assert!(evaluate(&black_up) < 0.0);
}

#[test]
fn king_outweighs_man_on_the_same_square() {
    let man = Position::from_grid(&grid_of(&[(4, 3, 1), (3, 4, -1)]), Side::Red).expect("grid");
    let king = Position::from_grid(&grid_of(&[(4, 3, 2), (3, 4, -1)]), Side::Red).expect("grid");
    assert!(evaluate(&king) > evaluate(&man));
}

#[test]
fn center_scores_above_edge() {
    // Same red king, centered vs pushed to the boundary file.
    let center = Position::from_grid(&grid_of(&[(4, 3, 2), (0, 1, -2)]), Side::Red).expect("grid");
    let edge = Position::from_grid(&grid_of(&[(4, 7, 2), (0, 1, -2)]), Side::Red).expect("grid");
    assert!(evaluate(&center) > evaluate(&edge));
}

#[test]
fn advancement_rewards_men_marching() {
    // A red man one row from promotion vs one still at home, opponent fixed.
    let far = Position::from_grid(&grid_of(&[(1, 2, 1), (4, 5, -2)]), Side::Red).expect("grid");
    let home = Position::from_grid(&grid_of(&[(6, 1, 1), (4, 5, -2)]), Side::Red).expect("grid");
    assert!(evaluate(&far) > evaluate(&home));
}
