//! The five mana colors.

use serde::{Deserialize, Serialize};

/// A mana color. Cards carry one (or none, for colorless cards) and lands
/// produce exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Green,
    Blue,
    Black,
}

impl Color {
    /// All colors, in the order generic costs are drawn from a pool.
    pub const PAYMENT_ORDER: [Color; 5] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Black,
    ];

    /// Cost shorthand symbol (`W`, `R`, `G`, `U`, `B`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'U',
            Color::Black => 'B',
        }
    }

    /// Inverse of `symbol`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'W' => Some(Color::White),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Black => "black",
        };
        f.write_str(name)
    }
}
