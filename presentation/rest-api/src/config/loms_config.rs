use super::env::required;

/// Base URL of the order management service (stock and orders).
#[derive(Debug, Clone)]
pub struct LomsConfig {
    pub url: String,
}

impl LomsConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            url: required("LOMS_URL")?,
        })
    }
}
