use crate::parsing::BinaryOperator;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Key {
    digit(u8),
    operator(BinaryOperator),
    clear,
}

impl Key {
    pub fn from_label(label: char) -> Option<Self> {
        use BinaryOperator::*;
        match label {
            '0'..='9' => Some(Key::digit(label as u8 - b'0')),
            '+' => Some(Key::operator(addition)),
            '-' => Some(Key::operator(subtraction)),
            '*' => Some(Key::operator(multiplication)),
            '/' => Some(Key::operator(division)),
            'C' | 'c' => Some(Key::clear),
            _ => None,
        }
    }

    /// The character a press of this key appends to the expression.
    pub fn label(&self) -> char {
        match self {
            Key::digit(value) => (b'0' + value) as char,
            Key::operator(operator) => operator.symbol(),
            Key::clear => 'C',
        }
    }

    pub fn icon(&self) -> &'static str {
        use BinaryOperator::*;
        match self {
            Key::operator(addition) => "➕",
            Key::operator(subtraction) => "➖",
            Key::operator(multiplication) => "✖️",
            Key::operator(division) => "➗",
            Key::digit(_) | Key::clear => "",
        }
    }
}

pub const ROWS: usize = 4;
pub const COLUMNS: usize = 4;

/// Row-major keypad labels; a space is the blank filler cell.
const LAYOUT: [[char; COLUMNS]; ROWS] = [
    ['7', '8', '9', '+'],
    ['4', '5', '6', '-'],
    ['1', '2', '3', '*'],
    ['0', '/', 'C', ' '],
];

pub fn layout() -> [[Option<Key>; COLUMNS]; ROWS] {
    LAYOUT.map(|row| row.map(Key::from_label))
}
