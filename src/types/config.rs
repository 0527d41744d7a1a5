use std::fs::File;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub listen_port: u16,
    pub log_level: String,

    pub catalog_path: String,
    pub payload_limit: u64,
}

impl Config {
    pub fn parse_from_file(path: &str) -> Self {
        let file = File::open(path).expect("Couldn't open config file");
        let config: Self = serde_yaml::from_reader(file).expect("Couldn't parse config");
        config
    }
}
