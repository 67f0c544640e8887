use serde::Deserialize;

use crate::core;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub session: core::Config,
}
