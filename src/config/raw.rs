use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("posreview.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub reviews: Option<Reviews>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reviews {
    pub approval_quorum: u32,
}

impl Default for Reviews {
    fn default() -> Self {
        Config::default().reviews.expect("Reviews configuration")
    }
}
