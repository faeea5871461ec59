// ABOUTME: Configuration management for the scanforge application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputDirsConfig,

    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDirsConfig {
    #[serde(default = "default_cfg_dir")]
    pub cfg_dir: PathBuf,

    #[serde(default = "default_commands_dir")]
    pub commands_dir: PathBuf,

    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_cfg_dir() -> PathBuf {
    PathBuf::from("GEN_cff_files")
}

fn default_commands_dir() -> PathBuf {
    PathBuf::from("RunningCommands")
}

fn default_root_dir() -> PathBuf {
    PathBuf::from("../GEN_root_files")
}

fn default_template_path() -> PathBuf {
    PathBuf::from(
        "Templates/TEMPLATE_DisplacedSUSY_squarkToQuarkChi_MSquark_MSQUARK_MChi_MCHI_ctau_CTAUmm_TuneCP5_14TeV_pythia8_cff.py",
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputDirsConfig::default(),
            template_path: default_template_path(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for OutputDirsConfig {
    fn default() -> Self {
        Self {
            cfg_dir: default_cfg_dir(),
            commands_dir: default_commands_dir(),
            root_dir: default_root_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = serde_yaml::from_str(&contents)?;
            config.merge_env();
            Ok(config)
        } else {
            let mut config = Config::default();
            config.merge_env();
            Ok(config)
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Result<PathBuf> {
        let possible_paths = vec![
            PathBuf::from("scanforge.yaml"),
            PathBuf::from("scanforge.yml"),
            PathBuf::from(".scanforge.yaml"),
            PathBuf::from(".scanforge.yml"),
        ];

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".scanforge").join("config.yaml");
            if home_config.exists() {
                return Ok(home_config);
            }
        }

        // Check current directory
        for path in possible_paths {
            if path.exists() {
                return Ok(path);
            }
        }

        // Return default path (may not exist)
        Ok(PathBuf::from("scanforge.yaml"))
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(dir) = std::env::var("SCANFORGE_CFG_DIR") {
            self.output.cfg_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("SCANFORGE_COMMANDS_DIR") {
            self.output.commands_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("SCANFORGE_ROOT_DIR") {
            self.output.root_dir = PathBuf::from(dir);
        }
        if let Ok(path) = std::env::var("SCANFORGE_TEMPLATE") {
            self.template_path = PathBuf::from(path);
        }
        if let Ok(level) = std::env::var("SCANFORGE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SCANFORGE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}
