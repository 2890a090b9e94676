//! Common domain type definitions
//!
//! This module contains the demographic enum types used across domain
//! models and stratum keys.

use serde::{Deserialize, Serialize};

/// Sex of an individual
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Unknown or not specified
    Unknown,
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for Sex {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

/// Race category of an individual
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RaceCategory {
    /// White
    White,
    /// Black
    Black,
    /// Hispanic
    Hispanic,
    /// Any other category
    Other,
    /// Unknown or not specified
    Unknown,
}

impl From<&str> for RaceCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "white" | "1" => Self::White,
            "black" | "2" => Self::Black,
            "hispanic" | "3" => Self::Hispanic,
            "other" | "4" => Self::Other,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for RaceCategory {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::White,
            2 => Self::Black,
            3 => Self::Hispanic,
            4 => Self::Other,
            _ => Self::Unknown,
        }
    }
}
