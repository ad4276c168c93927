use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::PresenceError;

/// Two-tone icon color written as `"#STROKE,#FILL"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconColor {
    stroke: String,
    fill: String,
}

impl IconColor {
    /// Parse `"#RRGGBB,#RRGGBB"`. Surrounding whitespace is ignored and hex
    /// digits are normalized to upper case.
    pub fn parse(value: &str) -> Result<Self, PresenceError> {
        let invalid = || PresenceError::InvalidColor {
            value: value.to_string(),
        };

        let (stroke, fill) = value.split_once(',').ok_or_else(invalid)?;
        let stroke = parse_hex_color(stroke.trim()).ok_or_else(invalid)?;
        let fill = parse_hex_color(fill.trim()).ok_or_else(invalid)?;

        Ok(Self { stroke, fill })
    }

    pub fn stroke(&self) -> &str {
        &self.stroke
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }
}

fn parse_hex_color(part: &str) -> Option<String> {
    let digits = part.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", digits.to_ascii_uppercase()))
}

impl FromStr for IconColor {
    type Err = PresenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.stroke, self.fill)
    }
}
