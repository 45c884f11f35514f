//! Constructed-once registry of classic example systems.
//!
//! Replaces ambient application state with an explicit value: build a
//! [`Catalog`] once and pass it to whatever needs to enumerate or select
//! examples by name. The entries are the classic curves and bracketed
//! plants from Prusinkiewicz & Lindenmayer, each paired with the turtle
//! configuration it is usually drawn with.

use crate::grammar::LSystem;
use crate::turtle::{MoveMapper, TurtleConfiguration};
use serde::{Deserialize, Serialize};

/// A grammar together with the configuration it renders well under.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub system: LSystem,
    pub config: TurtleConfiguration,
}

/// An immutable list of example systems, selectable by [`LSystem::name`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog from arbitrary entries.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The classic textbook systems.
    pub fn standard() -> Self {
        // Edge-rewriting curves over an abstract L/R alphabet draw through
        // an L/R -> F mapper; node-rewriting plants keep X as a structural
        // symbol that the turtle ignores.
        let abstract_edges = MoveMapper::new([('L', 'F'), ('R', 'F')]);

        let curve = |angle: f32| TurtleConfiguration {
            angle,
            ..TurtleConfiguration::default()
        };
        let mapped_curve = |angle: f32| TurtleConfiguration {
            angle,
            move_mapper: abstract_edges.clone(),
            ..TurtleConfiguration::default()
        };
        let plant = |angle: f32| TurtleConfiguration {
            angle,
            initial_heading_angle: 90.0,
            forward_step: 5.0,
            ..TurtleConfiguration::default()
        };

        Self::new([
            CatalogEntry {
                system: LSystem::new(
                    "dragon-curve",
                    "L",
                    [('L', "L+R+".to_string()), ('R', "-L-R".to_string())],
                ),
                config: mapped_curve(90.0),
            },
            CatalogEntry {
                system: LSystem::new(
                    "sierpinski-gasket",
                    "R",
                    [('L', "R+L+R".to_string()), ('R', "L-R-L".to_string())],
                ),
                config: mapped_curve(60.0),
            },
            CatalogEntry {
                system: LSystem::new(
                    "hexagonal-gosper-curve",
                    "L",
                    [
                        ('L', "L+R++R-L--LL-R+".to_string()),
                        ('R', "-L+RR++R+L--L-R".to_string()),
                    ],
                ),
                config: mapped_curve(60.0),
            },
            CatalogEntry {
                system: LSystem::new(
                    "koch-island",
                    "F-F-F-F",
                    [('F', "F-F+F+FF-F-F+F".to_string())],
                ),
                config: curve(90.0),
            },
            CatalogEntry {
                system: LSystem::new(
                    "quadratic-snowflake",
                    "-F",
                    [('F', "F+F-F-F+F".to_string())],
                ),
                config: curve(90.0),
            },
            CatalogEntry {
                system: LSystem::new(
                    "islands-and-lakes",
                    "F+F+F+F",
                    [
                        ('F', "F+f-FF+F+FF+Ff+FF-f+FF-F-FF-Ff-FFF".to_string()),
                        ('f', "ffffff".to_string()),
                    ],
                ),
                config: curve(90.0),
            },
            CatalogEntry {
                system: LSystem::new("plant-a", "F", [('F', "F[+F]F[-F]F".to_string())]),
                config: plant(25.7),
            },
            CatalogEntry {
                system: LSystem::new(
                    "plant-d",
                    "X",
                    [('X', "F[+X]F[-X]+X".to_string()), ('F', "FF".to_string())],
                ),
                config: plant(20.0),
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Looks an entry up by its grammar's name.
    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.system.name() == name)
    }
}
