//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! This module provides the closed enumerations of the canonical model:
//!
//! - [`AirportCode`] - Supported IATA airport codes
//! - [`CabinClass`] - Canonical cabin classes
//! - [`Supplier`] - Integrated flight offer suppliers
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported IATA airport codes.
///
/// The set is closed; unknown codes are rejected when parsed at the
/// boundary and never reach the aggregation engine.
///
/// # Examples
///
/// ```
/// use deflight::domain::value_objects::enums::AirportCode;
///
/// let lhr: AirportCode = "lhr".parse().unwrap();
/// assert_eq!(lhr, AirportCode::LHR);
/// assert_eq!(lhr.to_string(), "LHR");
/// ```
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirportCode {
    /// London Heathrow.
    LHR,
    /// Amsterdam Schiphol.
    AMS,
    /// Paris Charles de Gaulle.
    CDG,
    /// Frankfurt.
    FRA,
    /// Madrid Barajas.
    MAD,
    /// Barcelona El Prat.
    BCN,
    /// Rome Fiumicino.
    FCO,
    /// Istanbul.
    IST,
    /// Dubai International.
    DXB,
    /// New York John F. Kennedy.
    JFK,
}

impl AirportCode {
    /// All supported codes, in declaration order.
    pub const ALL: [AirportCode; 10] = [
        Self::LHR,
        Self::AMS,
        Self::CDG,
        Self::FRA,
        Self::MAD,
        Self::BCN,
        Self::FCO,
        Self::IST,
        Self::DXB,
        Self::JFK,
    ];

    /// Returns the three-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LHR => "LHR",
            Self::AMS => "AMS",
            Self::CDG => "CDG",
            Self::FRA => "FRA",
            Self::MAD => "MAD",
            Self::BCN => "BCN",
            Self::FCO => "FCO",
            Self::IST => "IST",
            Self::DXB => "DXB",
            Self::JFK => "JFK",
        }
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AirportCode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| ParseEnumError::InvalidValue("AirportCode", s.to_string()))
    }
}

/// Canonical cabin class.
///
/// Optional on results, since not every supplier reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinClass {
    /// Economy cabin.
    Economy,
    /// Business cabin.
    Business,
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Economy => write!(f, "ECONOMY"),
            Self::Business => write!(f, "BUSINESS"),
        }
    }
}

impl FromStr for CabinClass {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ECONOMY" => Ok(Self::Economy),
            "BUSINESS" => Ok(Self::Business),
            _ => Err(ParseEnumError::InvalidValue("CabinClass", s.to_string())),
        }
    }
}

/// Identity of the supplier that produced a result.
///
/// One variant per integrated supplier.
///
/// # Examples
///
/// ```
/// use deflight::domain::value_objects::enums::Supplier;
///
/// assert_eq!(Supplier::ToughJet.to_string(), "TOUGH_JET");
/// assert_eq!("crazy-air".parse::<Supplier>().unwrap(), Supplier::CrazyAir);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Supplier {
    /// CrazyAir: flat fares with explicit cabin codes.
    CrazyAir,
    /// ToughJet: component fares with instant timestamps.
    ToughJet,
}

impl Supplier {
    /// Every integrated supplier.
    pub const ALL: [Supplier; 2] = [Self::CrazyAir, Self::ToughJet];

    /// Returns the key naming this supplier in configuration files.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::CrazyAir => "crazy_air",
            Self::ToughJet => "tough_jet",
        }
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CrazyAir => write!(f, "CRAZY_AIR"),
            Self::ToughJet => write!(f, "TOUGH_JET"),
        }
    }
}

impl FromStr for Supplier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "CRAZY_AIR" | "CRAZYAIR" => Ok(Self::CrazyAir),
            "TOUGH_JET" | "TOUGHJET" => Ok(Self::ToughJet),
            _ => Err(ParseEnumError::InvalidValue("Supplier", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
