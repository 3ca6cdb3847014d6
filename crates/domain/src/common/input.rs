//! Client-submitted text fields.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A field a client was supposed to send as a string.
///
/// Deserialization never fails on the value's type: a number, boolean,
/// array or object lands in [`TextInput::NotText`], leaving it to
/// validation to reject the field by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    Text(String),
    NotText,
}

impl TextInput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::NotText => None,
        }
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<'de> Deserialize<'de> for TextInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextInputVisitor)
    }
}

struct TextInputVisitor;

impl<'de> Visitor<'de> for TextInputVisitor {
    type Value = TextInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<TextInput, E> {
        Ok(TextInput::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<TextInput, E> {
        Ok(TextInput::Text(value))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<TextInput, E> {
        Ok(TextInput::NotText)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<TextInput, E> {
        Ok(TextInput::NotText)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<TextInput, E> {
        Ok(TextInput::NotText)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<TextInput, E> {
        Ok(TextInput::NotText)
    }

    fn visit_unit<E: de::Error>(self) -> Result<TextInput, E> {
        Ok(TextInput::NotText)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TextInput, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(TextInput::NotText)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TextInput, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(TextInput::NotText)
    }
}
