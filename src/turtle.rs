//! Turtle state, command vocabulary, and drawing configuration.
//!
//! The vocabulary is a closed set of drawing primitives ([`TurtleOp`]); a
//! [`MoveMapper`] translates arbitrary grammar alphabets onto it, and a
//! [`TurtleConfiguration`] acts as the "pen style" for interpretation:
//! step length, turn angle, colors, and the symbol mapping travel together
//! and are replaced wholesale, never partially mutated.

use crate::interpreter::TurtleError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An RGB color triple, each channel in `0.0..=1.0`.
pub type Rgb = [f32; 3];

/// The closed set of turtle drawing commands.
///
/// Grammar symbols reach this vocabulary through a [`MoveMapper`]; symbols
/// that resolve to none of these are ignored by the interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move forward by the configured step with the pen down (`F`).
    ForwardDraw,
    /// Move forward by the configured step with the pen up (`f`).
    ForwardNoDraw,
    /// Rotate counter-clockwise by the configured angle (`+`).
    TurnLeft,
    /// Rotate clockwise by the configured angle (`-`).
    TurnRight,
    /// Save `{position, heading}` onto the state stack (`[`).
    Push,
    /// Restore the most recently pushed state (`]`).
    Pop,
}

impl TurtleOp {
    /// Every operator, in canonical order.
    pub const ALL: [TurtleOp; 6] = [
        TurtleOp::ForwardDraw,
        TurtleOp::ForwardNoDraw,
        TurtleOp::TurnLeft,
        TurtleOp::TurnRight,
        TurtleOp::Push,
        TurtleOp::Pop,
    ];

    /// The canonical single-character spelling of this operator.
    pub const fn symbol(self) -> char {
        match self {
            TurtleOp::ForwardDraw => 'F',
            TurtleOp::ForwardNoDraw => 'f',
            TurtleOp::TurnLeft => '+',
            TurtleOp::TurnRight => '-',
            TurtleOp::Push => '[',
            TurtleOp::Pop => ']',
        }
    }

    /// Parses a canonical operator symbol. Returns `None` for any other
    /// character.
    pub fn from_symbol(symbol: char) -> Option<TurtleOp> {
        match symbol {
            'F' => Some(TurtleOp::ForwardDraw),
            'f' => Some(TurtleOp::ForwardNoDraw),
            '+' => Some(TurtleOp::TurnLeft),
            '-' => Some(TurtleOp::TurnRight),
            '[' => Some(TurtleOp::Push),
            ']' => Some(TurtleOp::Pop),
            _ => None,
        }
    }
}

/// Translation table from grammar symbols to operator symbols.
///
/// Grammars whose alphabet already is the operator vocabulary need no
/// entries at all; grammars with abstract letters (`L`, `R`, `X`) map them
/// onto `F`, `+`, etc. Unmapped symbols resolve to themselves, which makes
/// them drawing commands only if they happen to spell an operator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMapper {
    map: HashMap<char, char>,
}

impl MoveMapper {
    /// The identity mapping: every symbol resolves to itself.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Builds a mapper from `(grammar symbol, operator symbol)` pairs.
    pub fn new(map: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            map: map.into_iter().collect(),
        }
    }

    /// Resolves a grammar symbol to an operator symbol, or passes it
    /// through unchanged when unmapped.
    pub fn resolve(&self, symbol: char) -> char {
        self.map.get(&symbol).copied().unwrap_or(symbol)
    }
}

/// Configuration for turtle interpretation.
///
/// An immutable value object; to change anything, build a new configuration
/// and hand it to a fresh interpreter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfiguration {
    /// Distance covered by each forward move, in world units. Must be
    /// positive and finite.
    pub forward_step: f32,
    /// Degrees added/subtracted per turn command. Must be finite.
    pub angle: f32,
    /// Heading in degrees before any moves (east = 0, counter-clockwise
    /// positive). Must be finite.
    pub initial_heading_angle: f32,
    /// Presentation-only pacing hint for animated consumers. Never
    /// consulted for geometry.
    pub speed: u8,
    /// Color attached to every drawn segment.
    pub fg_color: Rgb,
    /// Background color hint for the rendering surface.
    pub bg_color: Rgb,
    /// Grammar-symbol to operator-symbol translation.
    pub move_mapper: MoveMapper,
}

impl Default for TurtleConfiguration {
    fn default() -> Self {
        Self {
            forward_step: 10.0,
            angle: 90.0,
            initial_heading_angle: 0.0,
            speed: 0,
            fg_color: [0.0, 0.0, 0.0],
            bg_color: [1.0, 1.0, 1.0],
            move_mapper: MoveMapper::identity(),
        }
    }
}

impl TurtleConfiguration {
    /// Checks the numeric fields, rejecting values the interpreter cannot
    /// do geometry with.
    pub fn validate(&self) -> Result<(), TurtleError> {
        if !(self.forward_step.is_finite() && self.forward_step > 0.0) {
            return Err(TurtleError::InvalidArgument(format!(
                "forward_step must be positive and finite, got {}",
                self.forward_step
            )));
        }
        if !self.angle.is_finite() {
            return Err(TurtleError::InvalidArgument(format!(
                "angle must be finite, got {}",
                self.angle
            )));
        }
        if !self.initial_heading_angle.is_finite() {
            return Err(TurtleError::InvalidArgument(format!(
                "initial_heading_angle must be finite, got {}",
                self.initial_heading_angle
            )));
        }
        Ok(())
    }
}

/// The mutable state of the drawing turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the pen.
    pub position: Vec2,
    /// Current heading in degrees, normalized into `[0, 360)`.
    pub heading: f32,
    /// Whether the last forward move drew.
    pub pen_down: bool,
}

impl TurtleState {
    /// The initial state for a given configuration: origin, configured
    /// heading, pen down.
    pub fn initial(config: &TurtleConfiguration) -> Self {
        Self {
            position: Vec2::ZERO,
            heading: config.initial_heading_angle.rem_euclid(360.0),
            pen_down: true,
        }
    }

    /// Unit vector along the current heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading.to_radians())
    }
}

/// Axis-aligned bounding box accumulated over drawn geometry.
///
/// Widened monotonically by [`include`](Self::include); never narrowed
/// except by replacing it with [`BoundingBox::default`] to start a new
/// measurement epoch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Default for BoundingBox {
    /// An empty box: any included point becomes both corners.
    fn default() -> Self {
        Self {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }
}

impl BoundingBox {
    /// Widens the box to contain `point`.
    pub fn include(&mut self, point: Vec2) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    /// True until the first point is included.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }

    pub fn width(&self) -> f32 {
        if self.is_empty() { 0.0 } else { self.max_x - self.min_x }
    }

    pub fn height(&self) -> f32 {
        if self.is_empty() { 0.0 } else { self.max_y - self.min_y }
    }

    /// Inclusive containment check, with a small tolerance for float
    /// round-off.
    pub fn contains(&self, point: Vec2) -> bool {
        const SLACK: f32 = 1e-4;
        point.x >= self.min_x - SLACK
            && point.x <= self.max_x + SLACK
            && point.y >= self.min_y - SLACK
            && point.y <= self.max_y + SLACK
    }

    /// `(min_x, min_y, max_x, max_y)`.
    pub fn to_tuple(&self) -> (f32, f32, f32, f32) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }
}
