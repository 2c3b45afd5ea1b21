use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::DataLoader;
use crate::assets::data_path;
use crate::error::CatalogError;
use crate::game::{Game, View};

/// Per-game attribute block of a record. Which keys are present depends on the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Attributes {
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default, rename = "weaponType")]
    pub weapon_type: Option<String>,
    #[serde(default, rename = "pathType")]
    pub path_type: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub arkhe: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Media {
    #[serde(default)]
    pub portrait: Option<String>,
}

/// One entry of a character kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Skill {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Rarity is a star count in some documents and a label in others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rarity {
    Stars(u64),
    Label(String),
}

impl Rarity {
    /// Whole numbers (`5`, `4.0`) are star counts; other numbers and strings are labels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64().map(Self::Stars).or_else(|| {
                let stars = n
                    .as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && f.fract().abs() < f64::EPSILON)
                    .map(|f| Self::Stars(f as u64));
                stars.or_else(|| Some(Self::Label(n.to_string())))
            }),
            Value::String(s) => Some(Self::Label(s.clone())),
            _ => None,
        }
    }

    /// Zero stars and empty labels count as no rarity.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Stars(n) => *n > 0,
            Self::Label(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stars(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Rarity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| D::Error::custom(format!("rarity must be a number or string, got {value}")))
    }
}

/// `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rarity values of any other JSON type are treated as missing.
fn lenient_rarity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Rarity>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Rarity::from_value))
}

/// A record as it appears in a game document.
///
/// Every field is optional; keys this type does not model are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RawEntity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_rarity")]
    pub rarity: Option<Rarity>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Attributes,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Media,
    #[serde(default)]
    pub skills: Option<Vec<Skill>>,
    #[serde(default)]
    pub talents: Option<Vec<Skill>>,
    #[serde(default)]
    pub abilities: Option<Vec<Skill>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawEntity {
    /// The character kit: `skills`, then `talents`, then `abilities`.
    ///
    /// The first key present wins even when its list is empty.
    #[must_use]
    pub fn kit(&self) -> &[Skill] {
        self.skills
            .as_deref()
            .or(self.talents.as_deref())
            .or(self.abilities.as_deref())
            .unwrap_or_default()
    }
}

/// Uniform projection of one game's document.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDataset {
    pub game: Game,
    pub characters: Vec<RawEntity>,
    pub weapons: Vec<RawEntity>,
    pub artifacts: Vec<RawEntity>,
}

impl GameDataset {
    #[must_use]
    pub fn empty(game: Game) -> Self {
        Self {
            game,
            characters: Vec::new(),
            weapons: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    /// Project a parsed document through the game's field-mapping table.
    #[must_use]
    pub fn from_document(game: Game, document: &Value) -> Self {
        let keys = game.dataset_keys();
        Self {
            game,
            characters: read_collection(document, keys.characters),
            weapons: read_collection(document, keys.weapons),
            artifacts: read_collection(document, keys.artifacts),
        }
    }

    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON.
    pub fn from_json(game: Game, json: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(json)?;
        Ok(Self::from_document(game, &document))
    }

    #[must_use]
    pub fn collection(&self, view: View) -> &[RawEntity] {
        match view {
            View::Characters => &self.characters,
            View::Weapons => &self.weapons,
            View::Artifacts => &self.artifacts,
        }
    }

    /// Look an entry up by id within one view
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no entry carries `id`.
    pub fn entity(&self, view: View, id: &str) -> Result<&RawEntity, CatalogError> {
        self.collection(view)
            .iter()
            .find(|entity| entity.id == id)
            .ok_or_else(|| CatalogError::NotFound {
                view: view.as_str().to_string(),
                id: id.to_string(),
            })
    }
}

fn read_collection(document: &Value, key: &str) -> Vec<RawEntity> {
    let Some(entries) = document.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| match RawEntity::deserialize(entry) {
            Ok(entity) => Some(entity),
            Err(err) => {
                log::warn!("skipping {key}[{idx}]: {err}");
                None
            }
        })
        .collect()
}

/// Fetch and project the document for `game`.
///
/// The game identifier is validated before any request is issued.
///
/// # Errors
///
/// Returns [`CatalogError::UnsupportedGame`] for an unknown identifier,
/// [`CatalogError::Fetch`] when the loader fails and [`CatalogError::Parse`]
/// when the body is not JSON.
#[allow(clippy::future_not_send)]
pub async fn load_game_data<L: DataLoader>(
    loader: &L,
    game: &str,
) -> Result<GameDataset, CatalogError> {
    let game: Game = game.parse()?;
    let path = data_path(game);
    log::debug!("loading {path}");
    let body = loader
        .fetch_document(&path)
        .await
        .map_err(|err| CatalogError::Fetch {
            path: path.clone(),
            reason: err.to_string(),
        })?;
    GameDataset::from_json(game, &body)
}
