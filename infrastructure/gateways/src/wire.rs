use serde::{Deserialize, Deserializer, de::Error};

/// 64-bit integers may arrive as JSON numbers or, from protobuf JSON gateways, as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireInt {
    Signed(i64),
    Unsigned(u64),
    Str(String),
}

pub fn de_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match WireInt::deserialize(deserializer)? {
        WireInt::Signed(value) => Ok(value),
        WireInt::Unsigned(value) => i64::try_from(value).map_err(D::Error::custom),
        WireInt::Str(raw) => raw.trim().parse().map_err(D::Error::custom),
    }
}

pub fn de_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match WireInt::deserialize(deserializer)? {
        WireInt::Signed(value) => u64::try_from(value).map_err(D::Error::custom),
        WireInt::Unsigned(value) => Ok(value),
        WireInt::Str(raw) => raw.trim().parse().map_err(D::Error::custom),
    }
}

pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
