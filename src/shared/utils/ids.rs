use serde::{Deserialize, Deserializer};

/// Backend ids arrive as strings or numbers depending on the collection
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// `deserialize_with` helper that accepts either form and keeps a string
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
