//! FEN piece-placement import/export.
//!
//! Only the placement field and the optional side-to-move field are read;
//! castling, en-passant and clock fields are accepted and ignored since the
//! rule set has no use for them. The first FEN rank (rank 8) is board row 0.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> ChessResult<(Board, Color)> {
    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFen("empty FEN string".to_owned()))?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(ChessError::InvalidFen(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| ChessError::InvalidFen(format!("invalid piece character '{ch}'")))?;
            if col >= BOARD_SIZE {
                return Err(ChessError::InvalidFen(format!("rank {} overflows", 8 - row)));
            }
            board = board.with_piece(Square::new(row as u8, col as u8), piece);
            col += 1;
        }
        if col != BOARD_SIZE {
            return Err(ChessError::InvalidFen(format!(
                "rank {} has {col} squares",
                8 - row
            )));
        }
    }

    let side = match fields.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(ChessError::InvalidFen(format!("invalid side to move '{other}'")));
        }
    };

    Ok((board, side))
}

pub fn generate_fen(board: &Board, side_to_move: Color) -> String {
    let mut out = String::with_capacity(72);
    for (row, cells) in board.rows().iter().enumerate() {
        let mut empty = 0u8;
        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece_to_fen_char(*piece));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }
    out.push(' ');
    out.push(match side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });
    out
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
