//! Solver move vocabulary: tokens, explanations, and solution statistics.
//!
//! Tokens follow standard cube notation: a face or slice letter, optionally
//! suffixed with `'` (counter-clockwise) or `2` (half turn). Slice moves
//! (M, E, S) rotate the layer between two opposite faces.

use std::fmt;

use cubist_common::{CubistError, CubistResult};

/// Face or slice layer a move rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    U,
    D,
    L,
    R,
    F,
    B,
    /// Middle slice, between L and R.
    M,
    /// Equatorial slice, between U and D.
    E,
    /// Standing slice, between F and B.
    S,
}

impl Layer {
    /// All layers in display order.
    pub const ALL: [Layer; 9] = [
        Layer::U,
        Layer::D,
        Layer::L,
        Layer::R,
        Layer::F,
        Layer::B,
        Layer::M,
        Layer::E,
        Layer::S,
    ];

    /// The notation letter.
    pub fn letter(self) -> char {
        match self {
            Layer::U => 'U',
            Layer::D => 'D',
            Layer::L => 'L',
            Layer::R => 'R',
            Layer::F => 'F',
            Layer::B => 'B',
            Layer::M => 'M',
            Layer::E => 'E',
            Layer::S => 'S',
        }
    }

    /// Resolve a notation letter.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(Layer::U),
            'D' => Some(Layer::D),
            'L' => Some(Layer::L),
            'R' => Some(Layer::R),
            'F' => Some(Layer::F),
            'B' => Some(Layer::B),
            'M' => Some(Layer::M),
            'E' => Some(Layer::E),
            'S' => Some(Layer::S),
            _ => None,
        }
    }

    /// Position of this layer in [`Layer::ALL`].
    pub fn index(self) -> usize {
        match self {
            Layer::U => 0,
            Layer::D => 1,
            Layer::L => 2,
            Layer::R => 3,
            Layer::F => 4,
            Layer::B => 5,
            Layer::M => 6,
            Layer::E => 7,
            Layer::S => 8,
        }
    }

    /// Descriptive noun for explanations.
    fn noun(self) -> &'static str {
        match self {
            Layer::U => "Up face",
            Layer::D => "Down face",
            Layer::L => "Left face",
            Layer::R => "Right face",
            Layer::F => "Front face",
            Layer::B => "Back face",
            Layer::M => "Middle slice",
            Layer::E => "Equatorial slice",
            Layer::S => "Standing slice",
        }
    }

    /// For slice moves, the face whose turn direction they follow.
    fn slice_reference(self) -> Option<&'static str> {
        match self {
            Layer::M => Some("L"),
            Layer::E => Some("D"),
            Layer::S => Some("F"),
            _ => None,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Rotation amount of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Turn {
    /// Quarter turn clockwise (no suffix).
    #[default]
    Clockwise,
    /// Quarter turn counter-clockwise (`'` suffix).
    CounterClockwise,
    /// Half turn (`2` suffix).
    Half,
}

impl Turn {
    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

/// One move of a solution sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub layer: Layer,
    pub turn: Turn,
}

impl Move {
    /// Parse one token, e.g. `R`, `R'`, or `R2`.
    pub fn parse(token: &str) -> CubistResult<Self> {
        let mut chars = token.chars();
        let layer = chars
            .next()
            .and_then(Layer::from_letter)
            .ok_or_else(|| CubistError::solver(format!("unrecognized move token {token:?}")))?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Half,
            _ => {
                return Err(CubistError::solver(format!(
                    "unrecognized move token {token:?}"
                )))
            }
        };
        Ok(Self { layer, turn })
    }

    /// Human-readable description, e.g. "Right face counterclockwise".
    pub fn explanation(&self) -> String {
        let noun = self.layer.noun();
        match (self.layer.slice_reference(), self.turn) {
            (Some(face), Turn::Clockwise) => format!("{noun} (like {face})"),
            (Some(face), Turn::CounterClockwise) => format!("{noun} (like {face}')"),
            (None, Turn::Clockwise) => format!("{noun} clockwise"),
            (None, Turn::CounterClockwise) => format!("{noun} counterclockwise"),
            (_, Turn::Half) => format!("{noun} 180\u{00b0}"),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.layer.letter(), self.turn.suffix())
    }
}

/// An ordered sequence of solver moves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub moves: Vec<Move>,
}

impl Solution {
    /// The empty solution: the cube is already solved.
    pub fn solved() -> Self {
        Self::default()
    }

    /// Parse a space-separated move sequence as emitted by the solver.
    pub fn parse(line: &str) -> CubistResult<Self> {
        let moves = line
            .split_whitespace()
            .map(Move::parse)
            .collect::<CubistResult<Vec<_>>>()?;
        Ok(Self { moves })
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Summary statistics over the move sequence.
    pub fn stats(&self) -> SolutionStats {
        let mut quarter_turns = 0;
        let mut half_turns = 0;
        let mut usage = [0usize; 9];
        for mv in &self.moves {
            match mv.turn {
                Turn::Half => half_turns += 1,
                _ => quarter_turns += 1,
            }
            usage[mv.layer.index()] += 1;
        }

        let face_usage = Layer::ALL
            .into_iter()
            .zip(usage)
            .filter(|(_, count)| *count > 0)
            .collect();

        SolutionStats {
            total_moves: self.moves.len(),
            quarter_turns,
            half_turns,
            face_usage,
            rating: SolutionRating::for_move_count(self.moves.len()),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for mv in &self.moves {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
            first = false;
        }
        Ok(())
    }
}

/// Summary statistics for a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionStats {
    pub total_moves: usize,
    /// Moves turning a quarter in either direction.
    pub quarter_turns: usize,
    /// Moves with the `2` suffix.
    pub half_turns: usize,
    /// Per-layer move counts, in display order, zero counts omitted.
    pub face_usage: Vec<(Layer, usize)>,
    pub rating: SolutionRating,
}

/// Rough quality tier of a solution by move count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionRating {
    /// No moves needed.
    Perfect,
    Excellent,
    Good,
    Fair,
    Long,
}

impl SolutionRating {
    /// Tier boundaries: 15, 20, and 25 moves.
    pub fn for_move_count(n: usize) -> Self {
        match n {
            0 => SolutionRating::Perfect,
            1..=15 => SolutionRating::Excellent,
            16..=20 => SolutionRating::Good,
            21..=25 => SolutionRating::Fair,
            _ => SolutionRating::Long,
        }
    }
}

impl fmt::Display for SolutionRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolutionRating::Perfect => "Perfect",
            SolutionRating::Excellent => "Excellent",
            SolutionRating::Good => "Good",
            SolutionRating::Fair => "Fair",
            SolutionRating::Long => "Long",
        };
        f.write_str(s)
    }
}
