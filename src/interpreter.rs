//! Interpreter that executes an L-System word against mutable turtle state.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfiguration`], then feed it symbols one at a time via
//! [`TurtleInterpreter::step`]. Pen-down forward moves come back as
//! [`Segment`]s in world coordinates and widen the running
//! [`BoundingBox`]; everything else only mutates state.

use crate::turtle::{BoundingBox, Rgb, TurtleConfiguration, TurtleOp, TurtleState};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Errors raised while configuring or driving the turtle.
#[derive(Debug, thiserror::Error)]
pub enum TurtleError {
    /// A configuration value was out of range or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A pop arrived with no matching push. Indicates a malformed or
    /// mismatched bracketed grammar, so it always propagates.
    #[error("pop with no matching push (state stack is empty)")]
    StackUnderflow,
}

/// A single drawn line, in world coordinates until a
/// [`FitTransform`](crate::renderer::FitTransform) projects it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Rgb,
}

/// Snapshot saved by `[` and restored by `]`. Pen state is deliberately
/// excluded: a branch resumes drawing wherever the next move decides.
#[derive(Clone, Copy, Debug)]
struct Saved {
    position: Vec2,
    heading: f32,
}

/// State machine that replays turtle commands.
///
/// States are implicit in `{position, heading, pen_down, stack depth}`;
/// the transitions are the six [`TurtleOp`]s. There is no terminal state;
/// the interpreter is simply exhausted when the symbol sequence ends.
///
/// The interpreter exclusively owns its mutable state; snapshots pushed by
/// `[` are copies, never references into it.
#[derive(Debug)]
pub struct TurtleInterpreter {
    config: TurtleConfiguration,
    state: TurtleState,
    stack: Vec<Saved>,
    bounds: BoundingBox,
    animate: bool,
}

impl TurtleInterpreter {
    /// Creates an interpreter at the initial state: origin, configured
    /// heading, pen down, empty stack.
    ///
    /// Fails with [`TurtleError::InvalidArgument`] when the configuration
    /// does not validate.
    pub fn new(config: TurtleConfiguration) -> Result<Self, TurtleError> {
        config.validate()?;
        let state = TurtleState::initial(&config);
        Ok(Self {
            config,
            state,
            stack: Vec::new(),
            bounds: BoundingBox::default(),
            animate: false,
        })
    }

    /// The configuration this interpreter was built with.
    pub fn config(&self) -> &TurtleConfiguration {
        &self.config
    }

    /// Current turtle state (position, heading, pen).
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    /// Number of saved states on the branch stack.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Bounding box accumulated over every pen-down move since the last
    /// [`reset_bounds`](Self::reset_bounds).
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Presentation toggle: whether a consumer should render incrementally.
    /// Has no effect on geometry.
    pub fn animate(&mut self, on: bool) {
        self.animate = on;
    }

    pub fn is_animated(&self) -> bool {
        self.animate
    }

    /// Executes one grammar symbol.
    ///
    /// The symbol is first resolved through the configured
    /// [`MoveMapper`](crate::turtle::MoveMapper); a symbol that resolves to
    /// nothing in the operator vocabulary is a tolerated no-op and returns
    /// `Ok(None)`. A pen-down forward move returns the drawn segment.
    pub fn step(&mut self, symbol: char) -> Result<Option<Segment>, TurtleError> {
        let resolved = self.config.move_mapper.resolve(symbol);
        let Some(op) = TurtleOp::from_symbol(resolved) else {
            return Ok(None);
        };

        match op {
            TurtleOp::ForwardDraw => {
                let start = self.state.position;
                let end = start + self.state.direction() * self.config.forward_step;
                self.state.pen_down = true;
                self.state.position = end;
                self.bounds.include(start);
                self.bounds.include(end);
                Ok(Some(Segment {
                    start,
                    end,
                    color: self.config.fg_color,
                }))
            }
            TurtleOp::ForwardNoDraw => {
                self.state.pen_down = false;
                self.state.position += self.state.direction() * self.config.forward_step;
                Ok(None)
            }
            TurtleOp::TurnLeft => {
                self.state.heading = (self.state.heading + self.config.angle).rem_euclid(360.0);
                Ok(None)
            }
            TurtleOp::TurnRight => {
                self.state.heading = (self.state.heading - self.config.angle).rem_euclid(360.0);
                Ok(None)
            }
            TurtleOp::Push => {
                self.stack.push(Saved {
                    position: self.state.position,
                    heading: self.state.heading,
                });
                Ok(None)
            }
            TurtleOp::Pop => {
                let saved = self.stack.pop().ok_or(TurtleError::StackUnderflow)?;
                self.state.position = saved.position;
                self.state.heading = saved.heading;
                Ok(None)
            }
        }
    }

    /// Restores position, heading, pen, and stack to the initial state.
    ///
    /// The bounding box is left alone; the caller controls measurement
    /// epochs via [`reset_bounds`](Self::reset_bounds).
    pub fn reset(&mut self) {
        self.state = TurtleState::initial(&self.config);
        self.stack.clear();
    }

    /// Starts a fresh measurement epoch with an empty bounding box.
    pub fn reset_bounds(&mut self) {
        self.bounds = BoundingBox::default();
    }
}
