//! A small chained-capture game used to exercise the engine end to end.
//!
//! Placement game on a 5x5 grid. Placing a stone captures every orthogonally
//! adjacent enemy stone that ends up with more of the mover's stones around
//! it than of its own; a capturing placement keeps the turn, so one turn can
//! chain several placements. A side left without stones while the opponent
//! still has some has lost.

#![allow(dead_code)]

use oust_core::{GameState, IllegalMove, OutOfBoard, Player};

pub const DIM: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clash {
    cells: [Option<Player>; 25],
    turn: Player,
}

impl Clash {
    /// Build a position from five rows of `.` (empty), `x` (One), `o` (Two).
    pub fn from_rows(rows: [&str; 5], turn: Player) -> Self {
        let mut cells = [None; 25];
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), 5, "row {row} must have 5 cells");
            for (col, ch) in line.chars().enumerate() {
                cells[row * 5 + col] = match ch {
                    '.' => None,
                    'x' => Some(Player::One),
                    'o' => Some(Player::Two),
                    other => panic!("unknown cell character {other:?}"),
                };
            }
        }
        Self {
            cells,
            turn,
        }
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    fn idx(row: u8, col: u8) -> usize {
        row as usize * DIM as usize + col as usize
    }

    fn neighbors(row: u8, col: u8) -> Vec<(u8, u8)> {
        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push((row - 1, col));
        }
        if row + 1 < DIM {
            out.push((row + 1, col));
        }
        if col > 0 {
            out.push((row, col - 1));
        }
        if col + 1 < DIM {
            out.push((row, col + 1));
        }
        out
    }
}

impl GameState for Clash {
    type Move = (u8, u8);

    fn current_player(&self) -> Player {
        self.turn
    }

    fn legal_moves(&self) -> Vec<(u8, u8)> {
        if self.is_game_over() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for row in 0..DIM {
            for col in 0..DIM {
                if self.cells[Self::idx(row, col)].is_none() {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    fn apply_move(&mut self, mv: &(u8, u8)) -> Result<(), IllegalMove> {
        let (row, col) = *mv;
        if row >= DIM || col >= DIM || self.is_game_over() {
            return Err(IllegalMove);
        }
        let idx = Self::idx(row, col);
        if self.cells[idx].is_some() {
            return Err(IllegalMove);
        }

        let mover = self.turn;
        self.cells[idx] = Some(mover);

        // Captures are simultaneous: decide on the board as placed, then
        // remove.
        let mut captured = Vec::new();
        for (r, c) in Self::neighbors(row, col) {
            if self.cells[Self::idx(r, c)] != Some(mover.opponent()) {
                continue;
            }
            let mut attackers = 0;
            let mut friends = 0;
            for (nr, nc) in Self::neighbors(r, c) {
                match self.cells[Self::idx(nr, nc)] {
                    Some(p) if p == mover => attackers += 1,
                    Some(_) => friends += 1,
                    None => {}
                }
            }
            if attackers > friends {
                captured.push(Self::idx(r, c));
            }
        }

        if captured.is_empty() {
            self.turn = mover.opponent();
        } else {
            for cell in captured {
                self.cells[cell] = None;
            }
        }
        Ok(())
    }

    fn is_game_over(&self) -> bool {
        (self.count(Player::One) == 0) != (self.count(Player::Two) == 0)
    }

    fn winner(&self) -> Option<Player> {
        if !self.is_game_over() {
            return None;
        }
        if self.count(Player::One) > 0 {
            Some(Player::One)
        } else {
            Some(Player::Two)
        }
    }

    fn color_at(&self, row: u8, col: u8) -> Result<Option<Player>, OutOfBoard> {
        if row < DIM && col < DIM {
            Ok(self.cells[Self::idx(row, col)])
        } else {
            Err(OutOfBoard { row, col })
        }
    }
}

/// A dense middlegame position with a handful of empty cells; both sides
/// hold stones, nobody has won.
pub fn middlegame() -> Clash {
    Clash::from_rows(
        [
            "xxo.o", //
            "oxx.o", //
            "xo.ox", //
            "ox.xo", //
            "xoxo.", //
        ],
        Player::One,
    )
}

/// A sparse position that keeps deep searches busy.
pub fn open_position() -> Clash {
    Clash::from_rows(
        [
            "x.o..", //
            ".ox..", //
            ".....", //
            "..x..", //
            "...o.", //
        ],
        Player::One,
    )
}

/// One empty cell at (0,0); Two's only stones sit at (0,1) and (0,2), each
/// capturable in sequence. One's single turn is forced: capture at (0,0),
/// then capture again at the freed (0,1), wiping Two off the board.
pub fn forced_double_capture() -> Clash {
    Clash::from_rows(
        [
            ".ooxx", //
            "xxxxx", //
            "xxxxx", //
            "xxxxx", //
            "xxxxx", //
        ],
        Player::One,
    )
}
