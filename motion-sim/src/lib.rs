//! Headless particle simulation over a runtime-selected sequence.
//!
//! A star sits in a viewport while comets drift in from the edges and are
//! retired once they leave. The bodies are stored in whichever
//! [`motion_seq`] backing the configuration's `list` token names, which makes
//! the simulation a realistic workload for comparing backings: one append
//! per spawn, a full indexed scan per tick, and back-to-front removals.
//!
//! ```
//! use motion_sim::{Config, Simulation};
//!
//! let config = Config::parse("list = double\ngen_x = 0.5\ngen_y = 0.5");
//! let mut sim = Simulation::with_seed(config, 7).unwrap();
//!
//! for _ in 0..100 {
//!     sim.tick();
//! }
//! assert_eq!(sim.ticks(), 100);
//! assert!(sim.bodies().size() >= 1);
//! ```

#![warn(missing_docs)]

pub mod body;
pub mod config;
pub mod sim;

pub use body::{Body, Kind};
pub use config::{Config, ConfigError};
pub use sim::{Simulation, TickReport};
