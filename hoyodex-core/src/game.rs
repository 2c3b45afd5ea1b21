use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// The games the catalog knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Gi,
    Hsr,
    Zzz,
}

/// JSON keys holding each collection in a game's document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetKeys {
    pub characters: &'static str,
    pub weapons: &'static str,
    pub artifacts: &'static str,
}

impl Game {
    pub const ALL: [Self; 3] = [Self::Gi, Self::Hsr, Self::Zzz];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gi => "gi",
            Self::Hsr => "hsr",
            Self::Zzz => "zzz",
        }
    }

    #[must_use]
    pub const fn dataset_keys(self) -> DatasetKeys {
        match self {
            Self::Gi => DatasetKeys {
                characters: "characters",
                weapons: "weapons",
                artifacts: "artifacts",
            },
            Self::Hsr => DatasetKeys {
                characters: "characters",
                weapons: "lightcones",
                artifacts: "relics",
            },
            Self::Zzz => DatasetKeys {
                characters: "agents",
                weapons: "w-engine",
                artifacts: "drive-disks",
            },
        }
    }

    /// Translation key for a view's label in this game.
    #[must_use]
    pub fn view_label_key(self, view: View) -> String {
        format!("views.{}.{}", self.as_str(), view.as_str())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gi" => Ok(Self::Gi),
            "hsr" => Ok(Self::Hsr),
            "zzz" => Ok(Self::Zzz),
            other => Err(CatalogError::UnsupportedGame(other.to_string())),
        }
    }
}

/// Top-level list screens available for every game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Characters,
    Weapons,
    Artifacts,
}

impl View {
    pub const ALL: [Self; 3] = [Self::Characters, Self::Weapons, Self::Artifacts];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Weapons => "weapons",
            Self::Artifacts => "artifacts",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.as_str() == s)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
