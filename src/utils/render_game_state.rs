//! Terminal-oriented Unicode board renderer.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Render the board with rank 8 (row 0) at the top. Squares listed in
/// `highlights` are drawn as `*` when empty.
pub fn render_board(board: &Board, highlights: &[Square]) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for (row, cells) in board.rows().iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            let square = Square::new(row as u8, col as u8);
            let ch = match cell {
                Some(piece) => piece_to_unicode(*piece),
                None if highlights.contains(&square) => '*',
                None => '·',
            };
            out.push(ch);
            if col + 1 < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn start_position_renders_black_on_top() {
        let text = render_board(&Board::standard(), &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
    }

    #[test]
    fn highlighted_empty_squares_are_marked() {
        let text = render_board(&Board::standard(), &[Square::new(5, 4), Square::new(4, 4)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5], "4 · · · · * · · · 4");
        assert_eq!(lines[6], "3 · · · · * · · · 3");
    }
}
