//! Serde adapter storing [`Color`] as a CSS hex string.

use planar_engine::paint::Color;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S: Serializer>(colour: &Color, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&colour.to_hex())
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Color, D::Error> {
    let raw = String::deserialize(d)?;
    Color::from_hex(&raw).ok_or_else(|| D::Error::custom(format!("invalid colour `{raw}`")))
}
