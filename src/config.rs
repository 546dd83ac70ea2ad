use std::env;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE;
use crate::error::TriageResult;
use crate::triage::RuleTables;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub token: Option<String>,
    #[serde(default)]
    pub rule_tables_path: Option<String>,
}

pub fn load_config() -> Config {
    let Some(home_dir) = dirs::home_dir() else {
        return Config::default();
    };
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        fs::read_to_string(&config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

/// The classifier vocabulary is replaceable data: when the config names a
/// JSON rule-tables file it is loaded once at startup, otherwise the built-in
/// tables apply.
pub fn load_rule_tables(config: &Config) -> TriageResult<RuleTables> {
    match &config.rule_tables_path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(RuleTables::default()),
    }
}

pub fn get_token() -> Result<String, Box<dyn std::error::Error>> {
    // Environment variable takes precedence over the config file
    if let Ok(token) = env::var("GITHUB_TOKEN") {
        return Ok(token);
    }

    let config = load_config();
    if let Some(token) = config.token {
        return Ok(token);
    }

    Err("No GitHub token found. Set GITHUB_TOKEN or run 'ghtriage auth' to configure.".into())
}
