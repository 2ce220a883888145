use serde::Deserialize;
use std::path::PathBuf;

fn default_overlap() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub regions: Option<PathBuf>,
    #[serde(default)]
    pub query: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_overlap")]
    pub overlap: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("mapoverlap.toml"));
    paths.push(PathBuf::from(".mapoverlap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mapoverlap").join("config.toml"));
        paths.push(config_dir.join("mapoverlap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".mapoverlap.toml"));
        paths.push(home.join(".config").join("mapoverlap").join("config.toml"));
    }

    paths
}
