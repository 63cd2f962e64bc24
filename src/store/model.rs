//! Profile and coordinate records
//!
//! These types double as the on-disk JSON schema: a profile serializes to
//! `{"seed": "...", "coords": [...]}` and a coordinate to
//! `{"name": "...", "x": .., "y": .., "z": ..}`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{StoreError, StoreResult};

/// One coordinate component
///
/// Whole numbers stay integers on disk, anything else is kept as a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Parse user-entered text ("-3237", "64", "12.5")
    pub fn parse(field: &str, text: &str) -> StoreResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::validation(field, "must be a number"));
        }

        if let Ok(value) = text.parse::<i64>() {
            return Ok(Number::Int(value));
        }

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number::Float(value)),
            _ => Err(StoreError::validation(
                field,
                format!("'{text}' is not a number"),
            )),
        }
    }

    fn validate(self, field: &str) -> StoreResult<()> {
        match self {
            Number::Float(value) if !value.is_finite() => {
                Err(StoreError::validation(field, "must be a finite number"))
            }
            _ => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}

struct NumberVisitor;

impl Visitor<'_> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Number, E> {
        Ok(Number::Int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Number, E> {
        Ok(i64::try_from(value).map_or(Number::Float(value as f64), Number::Int))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Number, E> {
        // serde_json hands a JSON `-0` over as negative zero
        if value == 0.0 && value.is_sign_negative() {
            return Ok(Number::Int(0));
        }
        Ok(Number::Float(value))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => {
                let text = value.to_string();
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A named location inside a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub name: String,
    pub x: Number,
    pub y: Number,
    pub z: Number,
}

impl Coordinate {
    pub fn new(
        name: impl Into<String>,
        x: impl Into<Number>,
        y: impl Into<Number>,
        z: impl Into<Number>,
    ) -> Self {
        Self {
            name: name.into(),
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation("name", "coordinate name must not be empty"));
        }
        self.x.validate("x")?;
        self.y.validate("y")?;
        self.z.validate("z")?;
        Ok(())
    }

    /// Text placed on the clipboard by "Copy selected"
    pub fn clipboard_text(&self) -> String {
        format!("{}: x={} y={} z={}", self.name, self.x, self.y, self.z)
    }

    /// Line written to stdout by "Print to console"
    pub fn console_line(&self, profile: &str) -> String {
        format!("[{profile}] {}", self.clipboard_text())
    }
}

/// Raw text from the entry fields, before numeric parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateInput {
    pub name: String,
    pub x: String,
    pub y: String,
    pub z: String,
}

impl CoordinateInput {
    pub fn parse(&self) -> StoreResult<Coordinate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StoreError::validation("name", "give the coordinate a name"));
        }

        Ok(Coordinate {
            name: name.to_string(),
            x: Number::parse("x", &self.x)?,
            y: Number::parse("y", &self.y)?,
            z: Number::parse("z", &self.z)?,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<&Coordinate> for CoordinateInput {
    fn from(coord: &Coordinate) -> Self {
        Self {
            name: coord.name.clone(),
            x: coord.x.to_string(),
            y: coord.y.to_string(),
            z: coord.z.to_string(),
        }
    }
}

/// A world/server: optional seed plus its coordinates in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(
        default,
        deserialize_with = "deserialize_seed",
        serialize_with = "serialize_seed"
    )]
    pub seed: Option<String>,
    #[serde(rename = "coords", default)]
    pub coordinates: Vec<Coordinate>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first coordinate with this name
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.coordinates.iter().position(|c| c.name == name)
    }

    pub fn seed_str(&self) -> &str {
        self.seed.as_deref().unwrap_or("")
    }
}

/// Blank seeds are stored as "no seed"
pub(crate) fn normalize_seed(seed: Option<String>) -> Option<String> {
    seed.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn deserialize_seed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let seed = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_seed(seed))
}

fn serialize_seed<S>(seed: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(seed.as_deref().unwrap_or(""))
}
