//! Tolerant decoding for answer values coming from browser clients
//!
//! Front-ends send answers as strings, booleans (true/false questions) or numbers, and
//! leave unanswered slots as `null`. All of them are normalised to plain strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Loose {
    fn into_string(self) -> String {
        match self {
            Loose::Str(s) => s,
            Loose::Bool(b) => b.to_string(),
            Loose::Int(i) => i.to_string(),
            Loose::Float(f) => f.to_string(),
        }
    }
}

/// Deserialize a string, bool, number or null into a `String` (`null` becomes `""`)
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?
        .map(Loose::into_string)
        .unwrap_or_default())
}

/// Deserialize a list of loosely typed values into strings
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Vec::<Option<Loose>>::deserialize(deserializer)?
        .into_iter()
        .map(|v| v.map(Loose::into_string).unwrap_or_default())
        .collect())
}
