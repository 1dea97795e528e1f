// Derived from asciinema (https://github.com/asciinema/asciinema)
// Copyright (c) asciinema authors
// Licensed under GPL-3.0-or-later

//! Terminal color theme carried in recording headers.

use image::Rgb;
use serde::{Deserialize, Deserializer};

/// Terminal theme (colors)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    #[serde(deserialize_with = "deserialize_color")]
    pub fg: Rgb<u8>,
    #[serde(deserialize_with = "deserialize_color")]
    pub bg: Rgb<u8>,
    /// Always 16 entries; an 8-color palette is repeated for the bright half
    #[serde(deserialize_with = "deserialize_palette")]
    pub palette: Vec<Rgb<u8>>,
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Rgb<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: &str = Deserialize::deserialize(deserializer)?;
    parse_hex_color(value).ok_or_else(|| serde::de::Error::custom("invalid hex triplet"))
}

fn deserialize_palette<'de, D>(deserializer: D) -> Result<Vec<Rgb<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: &str = Deserialize::deserialize(deserializer)?;
    let mut colors = value
        .split(':')
        .map(parse_hex_color)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| serde::de::Error::custom("invalid hex triplet in palette"))?;

    match colors.len() {
        8 => colors.extend_from_within(..),
        16 => {}
        _ => return Err(serde::de::Error::custom("expected 8 or 16 hex triplets")),
    }
    Ok(colors)
}

/// Parse `#rrggbb`.
pub fn parse_hex_color(rgb: &str) -> Option<Rgb<u8>> {
    let hex = rgb.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Rgb([r, g, b]))
}
