use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Which layout the scene is heading toward
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    #[default]
    Scattered,
    TreeShape,
}

impl Mode {
    /// Progress value this mode pulls toward
    pub fn target(self) -> f32 {
        match self {
            Mode::Scattered => 0.0,
            Mode::TreeShape => 1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Scattered => Mode::TreeShape,
            Mode::TreeShape => Mode::Scattered,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Scattered => "SCATTERED",
            Mode::TreeShape => "TREE_SHAPE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCATTERED" => Ok(Mode::Scattered),
            "TREE_SHAPE" => Ok(Mode::TreeShape),
            other => Err(SceneError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        assert_eq!(Mode::Scattered.target(), 0.0);
        assert_eq!(Mode::TreeShape.target(), 1.0);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Mode::default(), Mode::Scattered);
        assert_eq!(Mode::Scattered.toggled(), Mode::TreeShape);
        assert_eq!(Mode::Scattered.toggled().toggled(), Mode::Scattered);
    }

    #[test]
    fn test_parse() {
        assert_eq!("TREE_SHAPE".parse::<Mode>().ok(), Some(Mode::TreeShape));
        assert_eq!(Mode::TreeShape.to_string(), "TREE_SHAPE");
        assert!("tree".parse::<Mode>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let mode: Mode = serde_yaml::from_str("TREE_SHAPE").unwrap();
        assert_eq!(mode, Mode::TreeShape);
    }
}
