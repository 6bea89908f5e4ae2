use std::{env, path::PathBuf};

use serde::Deserialize;

use chatori_entities::geo::MapPoint;

const DEFAULT_DATA_PATH: &str = "chatori.json";
const DEFAULT_HOME_SECTION_LIMIT: usize = 10;
const CONFIG_FILE: &str = "chatori.toml";

#[derive(Debug, Clone)]
pub struct Cfg {
    pub data_path: PathBuf,
    pub home_section_limit: usize,
    pub position: Option<MapPoint>,
}

#[derive(Debug, Default, Deserialize)]
struct CfgFile {
    data_path: Option<PathBuf>,
    home_section_limit: Option<usize>,
    position: Option<String>,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        let file = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => match toml::from_str::<CfgFile>(&contents) {
                Ok(file) => file,
                Err(err) => {
                    log::warn!("Ignoring malformed {CONFIG_FILE}: {err}");
                    CfgFile::default()
                }
            },
            Err(_) => CfgFile::default(),
        };
        if let Some(data_path) = file.data_path {
            cfg.data_path = data_path;
        }
        if let Some(limit) = file.home_section_limit {
            cfg.home_section_limit = limit;
        }
        if let Some(position) = file.position {
            cfg.position = parse_position(&position);
        }
        if let Ok(data_path) = env::var("CHATORI_DATA") {
            cfg.data_path = data_path.into();
        }
        if let Ok(position) = env::var("CHATORI_POSITION") {
            cfg.position = parse_position(&position);
        }
        cfg
    }
}

fn parse_position(position: &str) -> Option<MapPoint> {
    match position.parse() {
        Ok(pos) => Some(pos),
        Err(err) => {
            log::warn!("Ignoring invalid position {position:?}: {err}");
            None
        }
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.into(),
            home_section_limit: DEFAULT_HOME_SECTION_LIMIT,
            position: None,
        }
    }
}
