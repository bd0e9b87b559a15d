//! Scripted rules engine used by unit tests.

use oust_core::{GameState, IllegalMove, OutOfBoard, Player};

/// Square-grid test double with fully scripted turn behavior.
///
/// Moves are placements on empty cells. Placing on a cell listed in
/// `chain_cells` keeps the turn with the mover (a "capture"); any other
/// placement passes the turn. Cells in `rejected` are listed as legal but
/// refused by `apply_move`, and placements listed in `wins` end the game.
/// `dim` should be odd so the corner probe of the span discovery lands.
#[derive(Debug, Clone)]
pub struct GridState {
    pub dim: u8,
    pub cells: Vec<Option<Player>>,
    pub turn: Player,
    pub chain_cells: Vec<(u8, u8)>,
    pub rejected: Vec<(u8, u8)>,
    pub wins: Vec<((u8, u8), Player)>,
    pub over: bool,
    pub winner: Option<Player>,
}

impl GridState {
    pub fn empty(dim: u8) -> Self {
        Self {
            dim,
            cells: vec![None; dim as usize * dim as usize],
            turn: Player::One,
            chain_cells: Vec::new(),
            rejected: Vec::new(),
            wins: Vec::new(),
            over: false,
            winner: None,
        }
    }

    fn idx(&self, row: u8, col: u8) -> usize {
        row as usize * self.dim as usize + col as usize
    }

    pub fn set(&mut self, row: u8, col: u8, occupant: Option<Player>) {
        let idx = self.idx(row, col);
        self.cells[idx] = occupant;
    }
}

impl GameState for GridState {
    type Move = (u8, u8);

    fn current_player(&self) -> Player {
        self.turn
    }

    fn legal_moves(&self) -> Vec<(u8, u8)> {
        if self.over {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for row in 0..self.dim {
            for col in 0..self.dim {
                if self.cells[self.idx(row, col)].is_none() {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    fn apply_move(&mut self, mv: &(u8, u8)) -> Result<(), IllegalMove> {
        let (row, col) = *mv;
        if self.over || row >= self.dim || col >= self.dim || self.rejected.contains(mv) {
            return Err(IllegalMove);
        }
        let idx = self.idx(row, col);
        if self.cells[idx].is_some() {
            return Err(IllegalMove);
        }

        self.cells[idx] = Some(self.turn);
        if let Some((_, winner)) = self.wins.iter().find(|(cell, _)| cell == mv) {
            self.over = true;
            self.winner = Some(*winner);
        } else if !self.chain_cells.contains(mv) {
            self.turn = self.turn.opponent();
        }
        Ok(())
    }

    fn is_game_over(&self) -> bool {
        self.over
    }

    fn winner(&self) -> Option<Player> {
        self.winner
    }

    fn color_at(&self, row: u8, col: u8) -> Result<Option<Player>, OutOfBoard> {
        if row < self.dim && col < self.dim {
            Ok(self.cells[self.idx(row, col)])
        } else {
            Err(OutOfBoard { row, col })
        }
    }
}
