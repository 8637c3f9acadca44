//! Colormap names and parsing

use std::str::FromStr;

use crate::display_pipeline::common::error::DisplayError;

/// Named mapping from scalar intensity to display color.
///
/// Applied only to single-channel images; color images keep their native
/// channel interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMap {
    #[default]
    Gray,
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Turbo,
    Jet,
    Hot,
    Cool,
}

impl ColorMap {
    pub fn name(&self) -> &'static str {
        match self {
            ColorMap::Gray => "gray",
            ColorMap::Viridis => "viridis",
            ColorMap::Plasma => "plasma",
            ColorMap::Inferno => "inferno",
            ColorMap::Magma => "magma",
            ColorMap::Turbo => "turbo",
            ColorMap::Jet => "jet",
            ColorMap::Hot => "hot",
            ColorMap::Cool => "cool",
        }
    }
}

impl FromStr for ColorMap {
    type Err = DisplayError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "gray" | "grey" => Ok(ColorMap::Gray),
            "viridis" => Ok(ColorMap::Viridis),
            "plasma" => Ok(ColorMap::Plasma),
            "inferno" => Ok(ColorMap::Inferno),
            "magma" => Ok(ColorMap::Magma),
            "turbo" => Ok(ColorMap::Turbo),
            "jet" => Ok(ColorMap::Jet),
            "hot" => Ok(ColorMap::Hot),
            "cool" => Ok(ColorMap::Cool),
            _ => Err(DisplayError::UnknownColorMap(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Viridis".parse::<ColorMap>().unwrap(), ColorMap::Viridis);
        assert_eq!("GRAY".parse::<ColorMap>().unwrap(), ColorMap::Gray);
        assert_eq!("grey".parse::<ColorMap>().unwrap(), ColorMap::Gray);
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "sepia".parse::<ColorMap>().unwrap_err();
        assert!(matches!(err, DisplayError::UnknownColorMap(name) if name == "sepia"));
    }

    #[test]
    fn test_default_is_gray() {
        assert_eq!(ColorMap::default(), ColorMap::Gray);
    }
}
