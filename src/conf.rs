use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub service_name: String,
    pub base_url: String,
    pub store_path: String,
    //identity
    pub auto_verify_email: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "Faculty Jobs • Neo")?
            .set_default("base_url", "http://localhost:8080/")?
            .set_default("store_path", "facultyjobs.json")?
            .set_default("auto_verify_email", true)?
            .add_source(Environment::default().try_parsing(true))
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        if !s.base_url.ends_with('/') && !s.base_url.contains('#') {
            s.base_url.push('/');
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
