// MIT License

// Copyright (c) 2022 AnonmousDapper

use serde::Deserialize;

use crate::life::Coord;

const PATTERNS: &str = include_str!("data/patterns.toml");

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Pattern {
    name: String,

    #[serde(alias = "offsets")]
    cells: Vec<Coord>,
}

impl Pattern {
    pub fn new(name: &str, cells: Vec<Coord>) -> Self {
        Self {
            name: name.to_owned(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Offsets from the stamp origin.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}

#[derive(Deserialize)]
struct Library {
    #[serde(default, rename = "pattern")]
    patterns: Vec<Pattern>,
}

pub fn from_toml(source: &str) -> Result<Vec<Pattern>, toml::de::Error> {
    toml::from_str::<Library>(source).map(|lib| lib.patterns)
}

/// The library compiled into the binary.
pub fn load() -> Result<Vec<Pattern>, toml::de::Error> {
    from_toml(PATTERNS)
}
