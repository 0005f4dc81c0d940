//! Startup dimensions.

use crate::viewport::Size;
use std::ops::RangeInclusive;

pub const DEFAULT_WORLD_WIDTH: usize = 150;
pub const DEFAULT_WORLD_HEIGHT: usize = 40;
pub const VALID_DIMENSION: RangeInclusive<i64> = 5..=1000;

/// World dimensions after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
        }
    }
}

impl WorldConfig {
    /// Builds a config from raw user input. Missing values take the default;
    /// values outside [`VALID_DIMENSION`] fall back to the default with a
    /// warning.
    pub fn from_requested(width: Option<i64>, height: Option<i64>) -> Self {
        WorldConfig {
            width: validate("width", width, DEFAULT_WORLD_WIDTH),
            height: validate("height", height, DEFAULT_WORLD_HEIGHT),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

fn validate(name: &str, requested: Option<i64>, default: usize) -> usize {
    match requested {
        None => default,
        Some(value) if VALID_DIMENSION.contains(&value) => value as usize,
        Some(value) => {
            log::warn!(
                "world {name} {value} outside {}..={}, using {default}",
                VALID_DIMENSION.start(),
                VALID_DIMENSION.end()
            );
            default
        }
    }
}
