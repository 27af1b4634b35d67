//! The tick loop.
//!
//! Each tick advances every body, maybe spawns comets on the viewport edges,
//! then retires comets that have left the viewport. Bodies live in a
//! sequence picked by the configuration's `list` token; the loop only uses
//! `append`, `get`, `get_mut`, `size` and `remove_at`, so every backing
//! produces the same run for the same seed.

use motion_seq::{Backing, Sequence, from_token};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Body, Config, Kind};

/// Counts for one completed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based tick number.
    pub tick: u64,
    /// Comets added this tick.
    pub spawned: usize,
    /// Comets retired this tick.
    pub retired: usize,
    /// Bodies alive after the tick, star included.
    pub live: usize,
}

/// A running simulation.
pub struct Simulation {
    config: Config,
    bodies: Box<dyn Sequence<Body>>,
    rng: SmallRng,
    tick: u64,
}

impl Simulation {
    /// Builds a simulation seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Fails if `config.list` names no backing.
    pub fn new(config: Config) -> Result<Self, motion_seq::Error> {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Builds a reproducible simulation.
    ///
    /// # Errors
    ///
    /// Fails if `config.list` names no backing.
    pub fn with_seed(config: Config, seed: u64) -> Result<Self, motion_seq::Error> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: SmallRng) -> Result<Self, motion_seq::Error> {
        let mut bodies = from_token::<Body>(Some(config.list.as_str()))?;
        bodies.append(Body {
            kind: Kind::Star,
            cx: config.star_x,
            cy: config.star_y,
            vx: config.star_vx,
            vy: config.star_vy,
            radius: config.star_size,
        });

        Ok(Self {
            config,
            bodies,
            rng,
            tick: 0,
        })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns which backing holds the bodies.
    pub fn backing(&self) -> Backing {
        self.bodies.backing()
    }

    /// Returns the live bodies, star first.
    pub fn bodies(&self) -> &dyn Sequence<Body> {
        self.bodies.as_ref()
    }

    /// Returns the number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Adds a body outside the regular spawn schedule.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.append(body);
    }

    /// Runs one tick.
    ///
    /// # Panics
    ///
    /// Panics if the backing rejects an index below its own `size()`.
    pub fn tick(&mut self) -> TickReport {
        for i in 0..self.bodies.size() {
            self.bodies
                .get_mut(i)
                .expect("index below size")
                .step();
        }

        let mut spawned = 0;
        if let Some(body) = self.maybe_spawn_top_bottom() {
            self.bodies.append(body);
            spawned += 1;
        }
        if let Some(body) = self.maybe_spawn_left_right() {
            self.bodies.append(body);
            spawned += 1;
        }

        // Back to front, so removals never shift an index still to be visited
        let (width, height) = (self.config.window_width, self.config.window_height);
        let mut retired = 0;
        for i in (0..self.bodies.size()).rev() {
            let body = self.bodies.get(i).expect("index below size");
            if body.kind == Kind::Comet && body.is_off_screen(width, height) {
                self.bodies.remove_at(i).expect("index below size");
                retired += 1;
            }
        }

        self.tick += 1;
        TickReport {
            tick: self.tick,
            spawned,
            retired,
            live: self.bodies.size(),
        }
    }

    /// With probability `gen_x`, a comet enters from the top or bottom edge
    /// heading inward.
    fn maybe_spawn_top_bottom(&mut self) -> Option<Body> {
        if self.rng.random::<f64>() >= self.config.gen_x {
            return None;
        }

        let size = self.config.body_size;
        let from_top = self.rng.random_bool(0.5);
        let cx = self.rng.random_range(0..self.config.window_width);
        // Offsets wrap like body motion does
        let cy = if from_top {
            size.wrapping_neg()
        } else {
            self.config.window_height.wrapping_add(size)
        };
        let vx = self.random_velocity();
        let vy = self.random_velocity();
        let vy = if from_top { vy.abs() } else { -vy.abs() };

        Some(self.comet(cx, cy, vx, vy))
    }

    /// With probability `gen_y`, a comet enters from the left or right edge
    /// heading inward.
    fn maybe_spawn_left_right(&mut self) -> Option<Body> {
        if self.rng.random::<f64>() >= self.config.gen_y {
            return None;
        }

        let size = self.config.body_size;
        let from_left = self.rng.random_bool(0.5);
        let cx = if from_left {
            size.wrapping_neg()
        } else {
            self.config.window_width.wrapping_add(size)
        };
        let cy = self.rng.random_range(0..self.config.window_height);
        let vx = self.random_velocity();
        let vy = self.random_velocity();
        let vx = if from_left { vx.abs() } else { -vx.abs() };

        Some(self.comet(cx, cy, vx, vy))
    }

    /// Uniform in `-max..=max`, excluding zero.
    fn random_velocity(&mut self) -> i32 {
        let max = self.config.body_velocity;
        loop {
            let v = self.rng.random_range(-max..=max);
            if v != 0 {
                return v;
            }
        }
    }

    fn comet(&self, cx: i32, cy: i32, vx: i32, vy: i32) -> Body {
        Body {
            kind: Kind::Comet,
            cx,
            cy,
            vx,
            vy,
            radius: self.config.body_size,
        }
    }
}

impl core::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Simulation")
            .field("backing", &self.bodies.backing())
            .field("bodies", &self.bodies.size())
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config(list: &str) -> Config {
        Config {
            list: list.to_string(),
            gen_x: 0.0,
            gen_y: 0.0,
            window_width: 100,
            window_height: 100,
            ..Config::default()
        }
    }

    fn snapshot(sim: &Simulation) -> Vec<Body> {
        let bodies = sim.bodies();
        (0..bodies.size())
            .map(|i| bodies.get(i).cloned().unwrap())
            .collect()
    }

    #[test]
    fn starts_with_the_star() {
        let sim = Simulation::with_seed(Config::default(), 1).unwrap();

        assert_eq!(sim.backing(), Backing::Array);
        assert_eq!(sim.bodies().size(), 1);

        let star = sim.bodies().get(0).unwrap();
        assert_eq!(star.kind, Kind::Star);
        assert_eq!((star.cx, star.cy, star.radius), (512, 384, 30));
    }

    #[test]
    fn unknown_list_token_fails_startup() {
        let config = Config {
            list: "tree".into(),
            ..Config::default()
        };
        assert!(matches!(
            Simulation::with_seed(config, 1),
            Err(motion_seq::Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn list_token_selects_backing() {
        for backing in Backing::ALL {
            let sim = Simulation::with_seed(quiet_config(backing.token()), 1).unwrap();
            assert_eq!(sim.backing(), backing);
        }
    }

    #[test]
    fn star_is_never_retired() {
        let mut config = quiet_config("single");
        config.star_vx = 50;

        let mut sim = Simulation::with_seed(config, 1).unwrap();
        for _ in 0..10 {
            sim.tick();
        }

        let star = sim.bodies().get(0).unwrap();
        assert!(star.is_off_screen(100, 100));
        assert_eq!(sim.bodies().size(), 1);
    }

    #[test]
    fn off_screen_comets_are_retired() {
        let mut sim = Simulation::with_seed(quiet_config("double"), 1).unwrap();
        sim.add_body(Body {
            kind: Kind::Comet,
            cx: 50,
            cy: 50,
            vx: 0,
            vy: 0,
            radius: 5,
        });
        sim.add_body(Body {
            kind: Kind::Comet,
            cx: 102,
            cy: 50,
            vx: 2,
            vy: 0,
            radius: 5,
        });

        let first = sim.tick();
        assert_eq!(first.retired, 0);
        assert_eq!(first.live, 3);

        // 106 - 5 > 100 after the second step, 104 - 5 did not after the first
        let second = sim.tick();
        assert_eq!(second.retired, 1);
        assert_eq!(second.live, 2);
        assert_eq!(sim.bodies().get(1).unwrap().cx, 50);
    }

    #[test]
    fn certain_spawn_adds_two_comets_heading_inward() {
        let config = Config {
            gen_x: 1.0,
            gen_y: 1.0,
            ..quiet_config("dummyhead")
        };
        let mut sim = Simulation::with_seed(config, 7).unwrap();

        let report = sim.tick();
        assert_eq!(report.spawned, 2);
        assert_eq!(report.retired, 0);
        assert_eq!(report.live, 3);

        for i in 1..3 {
            let comet = sim.bodies().get(i).unwrap();
            assert_eq!(comet.kind, Kind::Comet);
            assert_ne!(comet.vx, 0);
            assert_ne!(comet.vy, 0);
            if comet.cy < 0 {
                assert!(comet.vy > 0);
            } else if comet.cy > 100 {
                assert!(comet.vy < 0);
            } else if comet.cx < 0 {
                assert!(comet.vx > 0);
            } else {
                assert!(comet.cx > 100 && comet.vx < 0);
            }
        }
    }

    #[test]
    fn velocities_stay_within_configured_range() {
        let config = Config {
            gen_x: 1.0,
            gen_y: 1.0,
            body_velocity: 2,
            ..quiet_config("arraylist")
        };
        let mut sim = Simulation::with_seed(config, 3).unwrap();
        for _ in 0..50 {
            sim.tick();
        }

        for body in snapshot(&sim).iter().filter(|b| b.kind == Kind::Comet) {
            assert!((1..=2).contains(&body.vx.abs()));
            assert!((1..=2).contains(&body.vy.abs()));
        }
    }

    #[test]
    fn extreme_config_values_keep_ticking() {
        let configs = [
            "window_size_x=2147483647\nwindow_size_y=2147483647\ngen_x=1\ngen_y=1",
            "star_velocity_x=2000000000\nstar_velocity_y=-2000000000",
            "body_size=2147483647\nbody_velocity=2147483647\ngen_x=1\ngen_y=1",
            "body_size=-2147483648\ngen_x=1\ngen_y=1",
        ];

        for text in configs {
            let mut sim = Simulation::with_seed(Config::parse(text), 1).unwrap();
            for _ in 0..20 {
                let report = sim.tick();
                assert!(report.live >= 1, "{text}");
            }
            assert_eq!(sim.ticks(), 20);
            assert_eq!(sim.bodies().get(0).unwrap().kind, Kind::Star);
        }
    }

    #[test]
    fn same_seed_same_run_on_every_backing() {
        let mut runs = Vec::new();
        for backing in Backing::ALL {
            let config = Config {
                list: backing.token().to_string(),
                gen_x: 0.3,
                gen_y: 0.3,
                ..Config::default()
            };
            let mut sim = Simulation::with_seed(config, 42).unwrap();
            let reports: Vec<TickReport> = (0..400).map(|_| sim.tick()).collect();
            runs.push((reports, snapshot(&sim)));
        }

        assert!(runs.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(runs[0].0.last().map(|r| r.tick), Some(400));
    }
}
