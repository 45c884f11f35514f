// tests/render_pipeline.rs
use lsystem_turtle::{
    BoundingBox, Catalog, Derivation, LSystem, RenderOutcome, RenderPass, Renderer, Segment,
    SegmentSink, TurtleConfiguration, TurtleInterpreter, Viewport,
};

fn koch_config() -> TurtleConfiguration {
    TurtleConfiguration {
        forward_step: 4.0,
        angle: 60.0,
        ..TurtleConfiguration::default()
    }
}

fn koch_word(n: u32) -> Derivation {
    LSystem::new("koch-curve", "F", [('F', "F+F--F+F".to_string())]).apply(n)
}

/// Sink that records progress signals and stops after a segment quota.
#[derive(Default)]
struct Recorder {
    segments: Vec<Segment>,
    draw_progress: Vec<(usize, usize)>,
    stop_after: Option<usize>,
}

impl SegmentSink for Recorder {
    fn draw(&mut self, segment: Segment) -> bool {
        if self.stop_after.is_some_and(|limit| self.segments.len() >= limit) {
            return false;
        }
        self.segments.push(segment);
        true
    }

    fn progress(&mut self, pass: RenderPass, done: usize, total: usize) {
        if pass == RenderPass::Draw {
            self.draw_progress.push((done, total));
        }
    }
}

#[test]
fn test_world_segments_stay_inside_measured_bounds() {
    let word = koch_word(3);

    // Measure epoch, then a replay of the identical word: every endpoint
    // the draw pass would emit lies inside the final box.
    let mut turtle = TurtleInterpreter::new(koch_config()).unwrap();
    for symbol in word.symbols() {
        turtle.step(symbol).unwrap();
    }
    let bounds = *turtle.bounding_box();

    turtle.reset();
    for symbol in word.symbols() {
        if let Some(segment) = turtle.step(symbol).unwrap() {
            assert!(bounds.contains(segment.start));
            assert!(bounds.contains(segment.end));
        }
    }
}

#[test]
fn test_projected_segments_stay_inside_the_viewport() {
    let word = koch_word(3);
    let viewport = Viewport {
        width: 640.0,
        height: 480.0,
    };
    let mut renderer = Renderer::new(koch_config(), viewport).unwrap();
    let mut segments: Vec<Segment> = Vec::new();
    let report = renderer.render(&word, &mut segments).unwrap();

    assert_eq!(report.outcome, RenderOutcome::Completed);
    assert!(!segments.is_empty());
    for segment in &segments {
        for point in [segment.start, segment.end] {
            assert!(point.x >= -1e-2 && point.x <= viewport.width + 1e-2);
            assert!(point.y >= -1e-2 && point.y <= viewport.height + 1e-2);
        }
    }
}

#[test]
fn test_two_pass_render_is_reproducible() {
    let word = koch_word(4);

    let mut first: Vec<Segment> = Vec::new();
    Renderer::new(koch_config(), Viewport::default())
        .unwrap()
        .render(&word, &mut first)
        .unwrap();

    let mut second: Vec<Segment> = Vec::new();
    Renderer::new(koch_config(), Viewport::default())
        .unwrap()
        .render(&word, &mut second)
        .unwrap();

    assert_eq!(first, second, "identical inputs must project identically");
}

#[test]
fn test_straight_line_word_fits_without_division_by_zero() {
    // A grammar that only ever walks east has zero height.
    let word = LSystem::new("line", "F", [('F', "FF".to_string())]).apply(4);
    let mut renderer = Renderer::new(koch_config(), Viewport::default()).unwrap();
    let mut segments: Vec<Segment> = Vec::new();
    let report = renderer.render(&word, &mut segments).unwrap();

    assert_eq!(report.outcome, RenderOutcome::Completed);
    for segment in &segments {
        assert!(segment.start.x.is_finite() && segment.start.y.is_finite());
        assert!(segment.end.x.is_finite() && segment.end.y.is_finite());
    }
}

#[test]
fn test_sink_cancellation_stops_between_committed_segments() {
    let word = koch_word(3);
    let mut renderer = Renderer::new(koch_config(), Viewport::default()).unwrap();

    let mut sink = Recorder {
        stop_after: Some(5),
        ..Recorder::default()
    };
    let report = renderer.render(&word, &mut sink).unwrap();

    assert_eq!(report.outcome, RenderOutcome::Stopped);
    assert_eq!(report.segments_drawn, 5);
    assert_eq!(sink.segments.len(), 5);
}

#[test]
fn test_progress_counts_every_symbol_of_the_draw_pass() {
    let word = koch_word(2);
    let mut renderer = Renderer::new(koch_config(), Viewport::default()).unwrap();

    let mut sink = Recorder::default();
    renderer.render(&word, &mut sink).unwrap();

    assert_eq!(sink.draw_progress.len(), word.len());
    assert_eq!(sink.draw_progress.last(), Some(&(word.len(), word.len())));
    for (done, total) in &sink.draw_progress {
        assert!(*done <= *total);
        assert_eq!(*total, word.len());
    }
}

#[test]
fn test_report_bounds_match_a_separate_measure_pass() {
    let word = koch_word(3);
    let mut renderer = Renderer::new(koch_config(), Viewport::default()).unwrap();

    let mut scratch: Vec<Segment> = Vec::new();
    let measured = renderer.measure(&word, &mut scratch).unwrap();
    let report = renderer.draw(&word, &measured, &mut scratch).unwrap();

    assert_eq!(report.bounds, measured);
    assert!(!scratch.is_empty());
}

#[test]
fn test_catalog_plants_render_with_balanced_stacks() {
    let catalog = Catalog::standard();
    for name in ["plant-a", "plant-d", "dragon-curve"] {
        let entry = catalog.find(name).expect("standard catalog entry");
        let word = entry.system.apply(3);
        let mut renderer = Renderer::new(entry.config.clone(), Viewport::default()).unwrap();
        let mut segments: Vec<Segment> = Vec::new();
        let report = renderer
            .render(&word, &mut segments)
            .unwrap_or_else(|e| panic!("{name} should render cleanly: {e}"));
        assert_eq!(report.outcome, RenderOutcome::Completed, "{name}");
        assert!(!segments.is_empty(), "{name} should draw something");
    }
}

#[test]
fn test_empty_word_measures_an_empty_box() {
    let no_rules: [(char, String); 0] = [];
    let word = LSystem::new("empty", "", no_rules).apply(5);
    let mut renderer = Renderer::new(koch_config(), Viewport::default()).unwrap();
    let mut scratch: Vec<Segment> = Vec::new();
    let bounds = renderer.measure(&word, &mut scratch).unwrap();
    assert!(bounds.is_empty());
    assert_eq!(BoundingBox::default(), bounds);
}
