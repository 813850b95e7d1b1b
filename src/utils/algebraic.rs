//! Conversions between board coordinates and algebraic squares (`e4`).

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{ChessMove, Square};

/// Convert algebraic notation (for example: "e4") to a board square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parse a move written as `e2e4`, `e2 e4` or `e2-e4`.
pub fn parse_move(text: &str) -> ChessResult<ChessMove> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }
    let from = algebraic_to_square(&compact[..2])?;
    let to = algebraic_to_square(&compact[2..])?;
    Ok(ChessMove::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, parse_move, square_to_algebraic};
    use crate::game_state::chess_types::{ChessMove, Square};

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), Square::new(0, 0));
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), Square::new(7, 7));
        assert_eq!(square_to_algebraic(Square::new(6, 4)), "e2");
    }

    #[test]
    fn moves_parse_in_several_spellings() {
        let expected = ChessMove::from_coords(6, 4, 4, 4);
        assert_eq!(parse_move("e2e4").expect("compact move should parse"), expected);
        assert_eq!(parse_move("e2 e4").expect("spaced move should parse"), expected);
        assert_eq!(parse_move("E2-E4").expect("dashed move should parse"), expected);
    }

    #[test]
    fn bad_squares_are_rejected() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("a").is_err());
        assert!(parse_move("e2e").is_err());
        assert!(parse_move("é2e4").is_err());
    }
}
