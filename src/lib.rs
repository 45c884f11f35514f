//! # lsystem-turtle
//!
//! A sovereign L-System crate that expands string-rewriting grammars and
//! interprets the result with a stack-based 2-D turtle, producing
//! engine-agnostic vector geometry.
//!
//! It decouples the *Genotype* (the [`LSystem`] grammar and its generated
//! [`Derivation`]) from the *Phenotype* (the line segments the turtle
//! draws). No rendering backend is assumed: the two-pass [`Renderer`]
//! measures the figure's extents, fits them into a caller-chosen
//! [`Viewport`] without distortion, and streams projected [`Segment`]s to
//! any [`SegmentSink`]: a window, an SVG writer, a plotter, a test.
//!
//! ```
//! use lsystem_turtle::{LSystem, Renderer, Segment, TurtleConfiguration, Viewport};
//!
//! let koch = LSystem::new("koch", "F", [('F', "F+F--F+F".to_string())]);
//! let word = koch.apply(3);
//!
//! let config = TurtleConfiguration { angle: 60.0, ..TurtleConfiguration::default() };
//! let mut renderer = Renderer::new(config, Viewport::default())?;
//! let mut segments: Vec<Segment> = Vec::new();
//! let report = renderer.render(&word, &mut segments)?;
//! assert_eq!(report.segments_drawn, segments.len());
//! # Ok::<(), lsystem_turtle::TurtleError>(())
//! ```

pub mod catalog;
pub mod grammar;
pub mod interpreter;
pub mod random;
pub mod renderer;
pub mod turtle;

pub use catalog::*;
pub use grammar::*;
pub use interpreter::*;
pub use random::*;
pub use renderer::*;
pub use turtle::*;
