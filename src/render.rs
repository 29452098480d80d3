//! Text-art hand rendering.
//!
//! Pure formatting: a hand becomes a multi-line block of card frames laid
//! side by side. A concealed hand draws its first card face-down.

use crate::card::Card;

/// Height of a rendered card frame, in lines.
const FRAME_HEIGHT: usize = 9;

/// Renders a hand as side-by-side card frames.
///
/// When `revealed` is false the first card is drawn as a filled-in back; the
/// rest of the hand stays face-up.
#[must_use]
pub fn render_hand(cards: &[Card], revealed: bool) -> String {
    let mut lines = vec![String::new(); FRAME_HEIGHT];

    for (index, card) in cards.iter().enumerate() {
        if index == 0 && !revealed {
            push_back(&mut lines);
        } else {
            push_face(&mut lines, *card);
        }
    }

    lines.join("\n")
}

/// Appends one face-up card frame to the right of the block.
fn push_face(lines: &mut [String], card: Card) {
    let rank = card.label();
    let suit = card.suit.glyph();

    lines[0].push_str("┌─────────────┐");
    lines[1].push_str(&format!("│{rank:<2}           │"));
    lines[2].push_str("│             │");
    lines[3].push_str("│             │");
    lines[4].push_str(&format!("│      {suit}      │"));
    lines[5].push_str("│             │");
    lines[6].push_str("│             │");
    lines[7].push_str(&format!("│           {rank:>2}│"));
    lines[8].push_str("└─────────────┘");
}

/// Appends one face-down card frame to the right of the block.
fn push_back(lines: &mut [String]) {
    lines[0].push_str("┌─────────────┐");
    for line in &mut lines[1..FRAME_HEIGHT - 1] {
        line.push_str("│░░░░░░░░░░░░░│");
    }
    lines[FRAME_HEIGHT - 1].push_str("└─────────────┘");
}
