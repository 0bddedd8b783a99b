use super::env::required;

/// Where the product catalog lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct ProductServiceConfig {
    pub url: String,
    pub token: String,
}

impl ProductServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            url: required("PRODUCT_SERVICE_URL")?,
            token: required("PRODUCT_SERVICE_TOKEN")?,
        })
    }
}
