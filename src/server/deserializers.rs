use serde::{Deserialize, Deserializer};

// the frontend sends ids from <select> elements as strings, so both "2" and 2 are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "NumberOrString")]
pub struct LenientI64(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

impl TryFrom<NumberOrString> for LenientI64 {
    type Error = String;

    fn try_from(value: NumberOrString) -> Result<Self, Self::Error> {
        match value {
            NumberOrString::Number(v) => Ok(LenientI64(v)),
            NumberOrString::Text(text) => match text.trim().parse::<i64>() {
                Ok(v) => Ok(LenientI64(v)),
                Err(_) => Err(format!("Wrong value {text}, can not parse to i64")),
            },
        }
    }
}

/// Quiz category as sent by clients: a bare id or the `{"id": .., "type": ..}`
/// object the frontend keeps for the selected category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategorySelector {
    Id(LenientI64),
    Object { id: LenientI64 },
}

impl CategorySelector {
    pub fn id(&self) -> i64 {
        match self {
            CategorySelector::Id(id) | CategorySelector::Object { id } => id.0,
        }
    }
}

// with #[serde(default)] this tells an absent field (None) from an explicit null (Some(None))
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
