use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Records keyed by category, in the order the categories were served.
pub type Grouped<T> = IndexMap<String, Vec<T>>;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub link: String,
    pub title: String,
    pub pub_date: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
    /// Numeric id, also used to locate the portrait.
    pub ename: u32,
    /// Display name.
    pub cname: String,
    #[serde(default)]
    pub hot: u8,
    pub hero_type: u8,
    #[serde(default)]
    pub hero_type2: Option<u8>,
}

impl Hero {
    pub fn is_hot(&self) -> bool {
        self.hot == 1
    }

    pub fn has_type(&self, hero_type: u8) -> bool {
        self.hero_type == hero_type || self.hero_type2 == Some(hero_type)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub link: String,
    pub cover: String,
    pub title: String,
    #[serde(deserialize_with = "string_or_number")]
    pub play_number: String,
    pub pub_date: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    String(String),
    Number(serde_json::Number),
}

// Play counts are served either pre-formatted ("1.2万") or as plain numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Text::deserialize(deserializer)? {
        Text::String(value) => value,
        Text::Number(value) => value.to_string(),
    })
}
