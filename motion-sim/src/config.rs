//! Simulation configuration.
//!
//! The file format is a small properties dialect: one entry per line, the
//! key ending at the first `=`, `:` or whitespace (`key = value`,
//! `key: value`, `key value`), with `#` or `!` starting a comment line.
//! Escapes and line continuations are not recognised.
//! Keys that are missing, or whose numeric value does not parse, take their
//! default. Integer keys accept decimal text and round it (`2.6` becomes 3).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}", path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Tunables for one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Pause between ticks when running in real time.
    pub timer_delay: Duration,
    /// Backing token handed to [`motion_seq::from_token`].
    pub list: String,
    /// Viewport width in pixels.
    pub window_width: i32,
    /// Viewport height in pixels.
    pub window_height: i32,
    /// Star center, x.
    pub star_x: i32,
    /// Star center, y.
    pub star_y: i32,
    /// Star radius.
    pub star_size: i32,
    /// Star velocity per tick, x.
    pub star_vx: i32,
    /// Star velocity per tick, y.
    pub star_vy: i32,
    /// Per-tick probability of a comet entering from the top or bottom edge.
    pub gen_x: f64,
    /// Per-tick probability of a comet entering from the left or right edge.
    pub gen_y: f64,
    /// Comet radius.
    pub body_size: i32,
    /// Largest absolute comet speed per axis. Always at least 1.
    pub body_velocity: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer_delay: Duration::from_millis(75),
            list: "arraylist".to_string(),
            window_width: 1024,
            window_height: 768,
            star_x: 512,
            star_y: 384,
            star_size: 30,
            star_vx: 0,
            star_vy: 0,
            gen_x: 0.06,
            gen_y: 0.06,
            body_size: 10,
            body_velocity: 3,
        }
    }
}

impl Config {
    /// Reads and parses the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Parses configuration text, falling back to defaults key by key.
    pub fn parse(text: &str) -> Self {
        let props = Properties::parse(text);
        let d = Self::default();

        let timer_delay = props.int("timer_delay", d.timer_delay.as_millis() as i32);

        Self {
            timer_delay: Duration::from_millis(timer_delay.max(0) as u64),
            list: props.get("list").unwrap_or(&d.list).to_string(),
            window_width: props.int("window_size_x", d.window_width).max(1),
            window_height: props.int("window_size_y", d.window_height).max(1),
            star_x: props.int("star_position_x", d.star_x),
            star_y: props.int("star_position_y", d.star_y),
            star_size: props.int("star_size", d.star_size),
            star_vx: props.int("star_velocity_x", d.star_vx),
            star_vy: props.int("star_velocity_y", d.star_vy),
            gen_x: props.float("gen_x", d.gen_x),
            gen_y: props.float("gen_y", d.gen_y),
            body_size: props.int("body_size", d.body_size),
            body_velocity: props.int("body_velocity", d.body_velocity).max(1),
        }
    }
}

/// Raw key/value pairs from a properties file.
#[derive(Debug, Default)]
struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let key_end = line
                .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
                .unwrap_or(line.len());
            let (key, rest) = line.split_at(key_end);
            // At most one separator character, surrounded by optional blanks
            let rest = rest.trim_start();
            let value = rest.strip_prefix(['=', ':']).unwrap_or(rest).trim();
            // Later entries win
            entries.insert(key.to_string(), value.to_string());
        }

        Self { entries }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn int(&self, key: &str, default: i32) -> i32 {
        self.get(key)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map_or(default, |v| v.round() as i32)
    }

    fn float(&self, key: &str, default: f64) -> f64 {
        self.get(key)
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(default)
    }
}
