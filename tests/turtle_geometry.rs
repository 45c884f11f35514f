// tests/turtle_geometry.rs
use glam::vec2;
use lsystem_turtle::{
    MoveMapper, TurtleConfiguration, TurtleError, TurtleInterpreter,
};

fn interpreter(config: TurtleConfiguration) -> TurtleInterpreter {
    TurtleInterpreter::new(config).expect("configuration should validate")
}

#[test]
fn test_square_walk_returns_to_origin() {
    // F+F+F+F at 90 degrees traces a unit square back to the start.
    let mut turtle = interpreter(TurtleConfiguration {
        forward_step: 1.0,
        angle: 90.0,
        ..TurtleConfiguration::default()
    });

    for symbol in "F+F+F+F".chars() {
        turtle.step(symbol).unwrap();
    }
    assert!(turtle.state().position.abs_diff_eq(vec2(0.0, 0.0), 1e-5));

    let (min_x, min_y, max_x, max_y) = turtle.bounding_box().to_tuple();
    assert!((min_x - 0.0).abs() < 1e-5 && (max_x - 1.0).abs() < 1e-5);
    assert!((min_y - 0.0).abs() < 1e-5 && (max_y - 1.0).abs() < 1e-5);
}

#[test]
fn test_push_pop_restores_position_and_heading_exactly() {
    let mut turtle = interpreter(TurtleConfiguration {
        angle: 25.7,
        ..TurtleConfiguration::default()
    });

    // Wander a bit first so the saved state is nontrivial.
    for symbol in "F+F-".chars() {
        turtle.step(symbol).unwrap();
    }
    let before = *turtle.state();

    turtle.step('[').unwrap();
    for symbol in "+FF-F".chars() {
        turtle.step(symbol).unwrap();
    }
    turtle.step(']').unwrap();

    assert_eq!(turtle.state().position, before.position);
    assert_eq!(turtle.state().heading, before.heading);
    assert_eq!(turtle.stack_depth(), 0);
}

#[test]
fn test_nested_branches_unwind_in_lifo_order() {
    let mut turtle = interpreter(TurtleConfiguration::default());

    turtle.step('[').unwrap();
    turtle.step('F').unwrap();
    let inner = turtle.state().position;
    turtle.step('[').unwrap();
    turtle.step('F').unwrap();
    turtle.step(']').unwrap();
    assert_eq!(turtle.state().position, inner);
    turtle.step(']').unwrap();
    assert!(turtle.state().position.abs_diff_eq(vec2(0.0, 0.0), 1e-6));
}

#[test]
fn test_unbalanced_pop_propagates_stack_underflow() {
    let mut turtle = interpreter(TurtleConfiguration::default());
    turtle.step('[').unwrap();
    turtle.step(']').unwrap();
    assert!(matches!(turtle.step(']'), Err(TurtleError::StackUnderflow)));
}

#[test]
fn test_mapped_alphabet_draws_like_operators() {
    // Dragon-style grammars spell moves as L/R; the mapper turns both into
    // pen-down forward moves.
    let mut mapped = interpreter(TurtleConfiguration {
        move_mapper: MoveMapper::new([('L', 'F'), ('R', 'F')]),
        ..TurtleConfiguration::default()
    });
    let mut plain = interpreter(TurtleConfiguration::default());

    for (a, b) in "L+R-L".chars().zip("F+F-F".chars()) {
        let mapped_segment = mapped.step(a).unwrap();
        let plain_segment = plain.step(b).unwrap();
        assert_eq!(mapped_segment, plain_segment);
    }
}

#[test]
fn test_unknown_symbols_are_tolerated_no_ops() {
    // Node-rewriting plants keep X as pure structure; the turtle must skip
    // it without touching state.
    let mut turtle = interpreter(TurtleConfiguration::default());
    turtle.step('F').unwrap();
    let before = *turtle.state();
    let depth = turtle.stack_depth();

    assert!(turtle.step('X').unwrap().is_none());
    assert_eq!(*turtle.state(), before);
    assert_eq!(turtle.stack_depth(), depth);
}

#[test]
fn test_initial_heading_orients_the_first_move() {
    let mut turtle = interpreter(TurtleConfiguration {
        forward_step: 1.0,
        initial_heading_angle: 90.0,
        ..TurtleConfiguration::default()
    });
    let segment = turtle.step('F').unwrap().expect("F should draw");
    assert!(segment.end.abs_diff_eq(vec2(0.0, 1.0), 1e-6));
}

#[test]
fn test_reset_restarts_state_but_keeps_bounds() {
    let mut turtle = interpreter(TurtleConfiguration::default());
    for symbol in "F+F[".chars() {
        turtle.step(symbol).unwrap();
    }
    let bounds = *turtle.bounding_box();

    turtle.reset();
    assert!(turtle.state().position.abs_diff_eq(vec2(0.0, 0.0), 1e-6));
    assert_eq!(turtle.stack_depth(), 0);
    assert_eq!(*turtle.bounding_box(), bounds);

    turtle.reset_bounds();
    assert!(turtle.bounding_box().is_empty());
}
