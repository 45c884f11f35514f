//! Two-pass coordinate normalization and segment emission.
//!
//! A generated curve's spatial extent is unknown until it has been fully
//! interpreted (it depends jointly on axiom, productions, iteration count,
//! and angle), so no fixed viewport can be chosen ahead of generation.
//! [`Renderer`] therefore replays the word twice against the same
//! interpreter configuration: a **measure** pass that only accumulates the
//! bounding box, then a **draw** pass that projects every segment through
//! the [`FitTransform`] computed from those extents and hands it to a
//! [`SegmentSink`]. Both passes traverse the symbols in the same order, so
//! the output is bit-for-bit reproducible for the same inputs.

use crate::grammar::Derivation;
use crate::interpreter::{Segment, TurtleError, TurtleInterpreter};
use crate::turtle::{BoundingBox, TurtleConfiguration};
use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Guards degenerate single-axis figures (a straight line collapses one
/// extent to zero) from dividing by zero during viewport fitting.
const EPSILON: f32 = 1e-5;

/// Target drawing surface dimensions, in output units (pixels, points, …).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
        }
    }
}

/// World-to-viewport mapping that shows the whole figure undistorted.
///
/// The world window is anchored at the measured minimum corner and spans a
/// square of side `max(w, h)`: the shorter axis is stretched by
/// `r = max(w, h) / (min(w, h) + ε)`, which keeps the figure's own aspect
/// ratio and never clips it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitTransform {
    window_min: Vec2,
    window_size: Vec2,
    viewport: Viewport,
}

impl FitTransform {
    /// Computes the transform for measured `bounds` onto `viewport`.
    ///
    /// An empty bounding box (nothing was drawn) produces a unit window at
    /// the origin so projection stays finite.
    pub fn fit(bounds: &BoundingBox, viewport: Viewport) -> Self {
        if bounds.is_empty() {
            return Self {
                window_min: Vec2::ZERO,
                window_size: Vec2::ONE,
                viewport,
            };
        }

        let w = bounds.width();
        let h = bounds.height();
        let r = w.max(h) / (w.min(h) + EPSILON);
        // Stretching the shorter extent by r makes the window square with
        // side max(w, h); the epsilon keeps a flat extent from collapsing.
        let (size_x, size_y) = if w > h {
            (w, (h + EPSILON) * r)
        } else {
            ((w + EPSILON) * r, h)
        };
        Self {
            window_min: vec2(bounds.min_x, bounds.min_y),
            window_size: vec2(size_x.max(EPSILON), size_y.max(EPSILON)),
            viewport,
        }
    }

    /// Maps a world-space point into viewport coordinates.
    pub fn project(&self, world: Vec2) -> Vec2 {
        let normalized = (world - self.window_min) / self.window_size;
        vec2(
            normalized.x * self.viewport.width,
            normalized.y * self.viewport.height,
        )
    }

    /// Projects both endpoints of a segment, keeping its color.
    pub fn project_segment(&self, segment: Segment) -> Segment {
        Segment {
            start: self.project(segment.start),
            end: self.project(segment.end),
            color: segment.color,
        }
    }
}

/// Which replay of the word a progress signal belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPass {
    Measure,
    Draw,
}

/// Port through which drawn segments leave the core.
///
/// Implementations render, collect, or export; returning `false` from
/// [`draw`](Self::draw) stops the draw pass gracefully (for example when
/// the user closed the surface being rendered to).
pub trait SegmentSink {
    /// Receives one projected segment. Return `false` to stop rendering.
    fn draw(&mut self, segment: Segment) -> bool;

    /// Progress signal, fired once per consumed symbol in each pass.
    fn progress(&mut self, pass: RenderPass, done: usize, total: usize) {
        let _ = (pass, done, total);
    }
}

/// Collection-style sink: keeps every segment, never stops.
impl SegmentSink for Vec<Segment> {
    fn draw(&mut self, segment: Segment) -> bool {
        self.push(segment);
        true
    }
}

/// How a draw pass ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderOutcome {
    /// Every symbol was replayed and every segment delivered.
    Completed,
    /// The sink declined a segment; rendering stopped between committed
    /// operations.
    Stopped,
}

/// Result of a draw pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderReport {
    pub outcome: RenderOutcome,
    /// Extents the fit was computed from.
    pub bounds: BoundingBox,
    /// The world-to-viewport mapping that was active.
    pub transform: FitTransform,
    /// Segments actually delivered to the sink.
    pub segments_drawn: usize,
}

/// Replays a [`Derivation`] twice to fit an a-priori-unbounded figure into
/// a fixed viewport.
pub struct Renderer {
    interpreter: TurtleInterpreter,
    viewport: Viewport,
}

impl Renderer {
    /// Creates a renderer for one configuration and target viewport.
    ///
    /// Fails with [`TurtleError::InvalidArgument`] when the configuration
    /// does not validate.
    pub fn new(config: TurtleConfiguration, viewport: Viewport) -> Result<Self, TurtleError> {
        Ok(Self {
            interpreter: TurtleInterpreter::new(config)?,
            viewport,
        })
    }

    /// The interpreter driven by both passes.
    pub fn interpreter(&self) -> &TurtleInterpreter {
        &self.interpreter
    }

    /// Presentation toggle forwarded to the interpreter; geometry is
    /// unaffected.
    pub fn animate(&mut self, on: bool) {
        self.interpreter.animate(on);
    }

    /// Measure pass: replays the whole word with drawing suppressed and
    /// returns the accumulated extents.
    pub fn measure(
        &mut self,
        word: &Derivation,
        sink: &mut (impl SegmentSink + ?Sized),
    ) -> Result<BoundingBox, TurtleError> {
        self.interpreter.reset();
        self.interpreter.reset_bounds();

        let total = word.len();
        for (i, symbol) in word.symbols().enumerate() {
            // Segments are discarded; only the bounding box commits.
            self.interpreter.step(symbol)?;
            sink.progress(RenderPass::Measure, i + 1, total);
        }

        let bounds = *self.interpreter.bounding_box();
        debug!(symbols = total, bounds = ?bounds.to_tuple(), "measure pass complete");
        Ok(bounds)
    }

    /// Draw pass: replays the identical word in the identical order,
    /// projecting each drawn segment through the fit computed from
    /// `bounds` and forwarding it to `sink`.
    ///
    /// Interpreter state is reset first; the bounding box is not, so the
    /// measured epoch stays queryable. A sink that returns `false` stops
    /// the pass with [`RenderOutcome::Stopped`] and no partially-applied
    /// interpreter state.
    pub fn draw(
        &mut self,
        word: &Derivation,
        bounds: &BoundingBox,
        sink: &mut (impl SegmentSink + ?Sized),
    ) -> Result<RenderReport, TurtleError> {
        let transform = FitTransform::fit(bounds, self.viewport);
        self.interpreter.reset();

        let total = word.len();
        let mut segments_drawn = 0;
        for (i, symbol) in word.symbols().enumerate() {
            if let Some(segment) = self.interpreter.step(symbol)? {
                if !sink.draw(transform.project_segment(segment)) {
                    debug!(delivered = segments_drawn, "sink stopped the draw pass");
                    return Ok(RenderReport {
                        outcome: RenderOutcome::Stopped,
                        bounds: *bounds,
                        transform,
                        segments_drawn,
                    });
                }
                segments_drawn += 1;
            }
            sink.progress(RenderPass::Draw, i + 1, total);
        }

        debug!(delivered = segments_drawn, "draw pass complete");
        Ok(RenderReport {
            outcome: RenderOutcome::Completed,
            bounds: *bounds,
            transform,
            segments_drawn,
        })
    }

    /// Measure then draw, as two explicit calls against the same
    /// interpreter configuration.
    pub fn render(
        &mut self,
        word: &Derivation,
        sink: &mut (impl SegmentSink + ?Sized),
    ) -> Result<RenderReport, TurtleError> {
        let bounds = self.measure(word, sink)?;
        self.draw(word, &bounds, sink)
    }
}
