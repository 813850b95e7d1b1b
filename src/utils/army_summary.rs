//! Human-readable army descriptions ("1 king, 1 queen, 8 pawns").

use crate::game_state::chess_types::PieceKind;

const SUMMARY_ORDER: [PieceKind; 6] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
];

pub fn summarize_army(army: &[PieceKind]) -> String {
    if army.is_empty() {
        return "None".to_owned();
    }
    SUMMARY_ORDER
        .iter()
        .filter_map(|kind| {
            let count = army.iter().filter(|k| *k == kind).count();
            match count {
                0 => None,
                1 => Some(format!("1 {kind}")),
                n => Some(format!("{n} {kind}s")),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
