use darksquare::{apply_move, legal_moves, sq_index, Grid, Move, Position, Side};

fn grid_of(pieces: &[(usize, usize, i8)]) -> Grid {
    let mut grid: Grid = [[0; 8]; 8];
    for &(row, col, v) in pieces {
        grid[row][col] = v;
    }
    grid
}

fn pos_of(pieces: &[(usize, usize, i8)], to_move: Side) -> Position {
    Position::from_grid(&grid_of(pieces), to_move).expect("from_grid")
}

fn sq(row: i32, col: i32) -> u8 {
    sq_index(row, col).expect("dark square")
}

#[test]
fn opening_has_seven_red_steps() {
    let moves = legal_moves(&Position::initial());
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| !m.is_capture()), "no captures in the opening");
    // Single scan in ascending square order: first mover is the man on (5,0).
    assert_eq!(moves[0], Move::Step { from: sq(5, 0), to: sq(4, 1) });
}

#[test]
fn move_list_is_deterministic() {
    let pos = Position::initial();
    assert_eq!(legal_moves(&pos), legal_moves(&pos));
}

#[test]
fn men_step_forward_only() {
    // Lone red man in the open: two forward steps, nothing backward.
    let pos = pos_of(&[(4, 3, 1)], Side::Red);
    let moves = legal_moves(&pos);
    assert_eq!(
        moves,
        vec![
            Move::Step { from: sq(4, 3), to: sq(3, 2) },
            Move::Step { from: sq(4, 3), to: sq(3, 4) },
        ]
    );
}

#[test]
fn kings_step_in_all_four_directions() {
    let pos = pos_of(&[(4, 3, 2)], Side::Red);
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 4);
    let targets: Vec<u8> = moves.iter().map(Move::to_sq).collect();
    assert_eq!(targets, vec![sq(3, 2), sq(3, 4), sq(5, 2), sq(5, 4)]);
}

#[test]
fn capture_is_mandatory() {
    // The man on (4,3) can jump; the man on (6,1) has quiet steps that must
    // be excluded from the move set.
    let pos = pos_of(&[(4, 3, 1), (6, 1, 1), (3, 2, -1)], Side::Red);
    let moves = legal_moves(&pos);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(Move::is_capture), "only captures when one exists");
    assert_eq!(
        moves,
        vec![Move::Jump {
            from: sq(4, 3),
            captures: vec![sq(3, 2)],
            to: sq(2, 1),
        }]
    );
}

#[test]
fn multi_jump_chain_is_one_atomic_move() {
    // (5,0) jumps (4,1) to (3,2), then must continue over (2,3) to (1,4).
    let pos = pos_of(&[(5, 0, 1), (4, 1, -1), (2, 3, -1)], Side::Red);
    let moves = legal_moves(&pos);
    assert_eq!(
        moves,
        vec![Move::Jump {
            from: sq(5, 0),
            captures: vec![sq(4, 1), sq(2, 3)],
            to: sq(1, 4),
        }],
        "the chain must be returned whole, never truncated after one jump"
    );
}

#[test]
fn men_do_not_capture_backward() {
    // Black man behind the red man: no capture available, quiet steps only.
    let pos = pos_of(&[(4, 3, 1), (5, 4, -1)], Side::Red);
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn king_captures_backward() {
    let pos = pos_of(&[(4, 3, 2), (5, 4, -1)], Side::Red);
    let moves = legal_moves(&pos);
    assert_eq!(
        moves,
        vec![Move::Jump {
            from: sq(4, 3),
            captures: vec![sq(5, 4)],
            to: sq(6, 5),
        }]
    );
}

#[test]
fn blocked_landing_square_forbids_the_jump() {
    // Landing square (2,1) is occupied, so no capture exists.
    let pos = pos_of(&[(4, 3, 1), (3, 2, -1), (2, 1, -1)], Side::Red);
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn promotion_ends_the_capture_chain() {
    // Rules decision, pinned here: a man promoting mid-capture stops on the
    // back rank even though the new king would have another jump available.
    let pos = pos_of(&[(2, 1, 1), (1, 2, -1), (1, 4, -1)], Side::Red);
    let moves = legal_moves(&pos);
    assert_eq!(
        moves,
        vec![Move::Jump {
            from: sq(2, 1),
            captures: vec![sq(1, 2)],
            to: sq(0, 3),
        }]
    );

    let next = apply_move(&pos, &moves[0]);
    assert!(next.is_king(sq(0, 3)), "man promotes on the back rank");
    assert_eq!(next.to_move(), Side::Black);
}

#[test]
fn black_man_promotes_on_row_seven() {
    let pos = pos_of(&[(6, 1, -1)], Side::Black);
    let mv = Move::Step { from: sq(6, 1), to: sq(7, 0) };
    assert!(legal_moves(&pos).contains(&mv));
    let next = apply_move(&pos, &mv);
    assert!(next.is_king(sq(7, 0)));
    assert_eq!(next.to_grid()[7][0], -2);
}

#[test]
fn apply_move_removes_every_jumped_piece() {
    let pos = pos_of(&[(5, 0, 1), (4, 1, -1), (2, 3, -1)], Side::Red);
    let moves = legal_moves(&pos);
    let next = apply_move(&pos, &moves[0]);
    assert_eq!(next.piece_count(Side::Black), 0);
    assert_eq!(next.owner_at(sq(1, 4)), Some(Side::Red));
    assert_eq!(next.owner_at(sq(5, 0)), None);
    // The parent position is untouched.
    assert_eq!(pos.piece_count(Side::Black), 2);
}

#[test]
fn chain_cannot_jump_the_same_piece_twice() {
    // Red king surrounded by a single black piece reachable from two sides
    // of a circular path; the chain must terminate rather than loop.
    let pos = pos_of(&[(4, 3, 2), (3, 2, -1)], Side::Red);
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].captured(), &[sq(3, 2)]);
}
