use std::{env, path::PathBuf};
use tracing::warn;

pub const DEFAULT_DATA_PATH: &str = "data/airports.json";
pub const DEFAULT_PORT: u16 = 3000;

const DATA_PATH_VAR: &str = "AIRPORT_DATA_PATH";
const PORT_VAR: &str = "PORT";

#[derive(Debug)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.into(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_sources(
            env::args().nth(1),
            env::var(DATA_PATH_VAR).ok(),
            env::var(PORT_VAR).ok(),
        )
    }

    /// Dataset path from the first argument, then `AIRPORT_DATA_PATH`.
    /// Port from `PORT`, ignored when it does not parse.
    pub fn from_sources(
        arg_path: Option<String>,
        env_path: Option<String>,
        env_port: Option<String>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(path) = arg_path.or(env_path) {
            config.data_path = path.into();
        }
        if let Some(port) = env_port {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(err) => warn!("Ignoring {PORT_VAR}={port}: {err}"),
            }
        }
        config
    }
}

#[test]
fn defaults_test() {
    let config = Config::from_sources(None, None, None);
    assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn argument_wins_over_env_test() {
    let config = Config::from_sources(
        Some("from_arg.json".into()),
        Some("from_env.json".into()),
        None,
    );
    assert_eq!(config.data_path, PathBuf::from("from_arg.json"));
}

#[test]
fn env_path_test() {
    let config = Config::from_sources(None, Some("from_env.json".into()), None);
    assert_eq!(config.data_path, PathBuf::from("from_env.json"));
}

#[test]
fn port_test() {
    let config = Config::from_sources(None, None, Some("8080".into()));
    assert_eq!(config.port, 8080);
}

#[test]
fn invalid_port_falls_back_test() {
    let config = Config::from_sources(None, None, Some("eighty".into()));
    assert_eq!(config.port, DEFAULT_PORT);
    let config = Config::from_sources(None, None, Some("70000".into()));
    assert_eq!(config.port, DEFAULT_PORT);
}
