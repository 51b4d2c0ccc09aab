use std::{
    env,
    path::{Path, PathBuf},
};

use color_eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::warn;

use crate::form::{contact_schema, FormSchema};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

/// Presentation overrides for the form (`[form]` table).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormConfig {
    pub title: String,
    pub min_width: u16,
    pub min_height: u16,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "Contact Form".to_string(),
            min_width: 60,
            min_height: 32,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub form: FormConfig,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(&get_config_dir(), &get_data_dir())
    }

    /// Build the configuration from defaults plus optional `config.json5` /
    /// `config.toml` files in `config_dir`.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            warn!("No configuration file found in {config_dir:?}, using defaults");
        }

        let cfg: Self = builder.build()?.try_deserialize()?;

        Ok(cfg)
    }

    /// Contact form schema with the configured title and size hints applied.
    pub fn schema(&self) -> FormSchema {
        contact_schema()
            .title(self.form.title.clone())
            .min_size(self.form.min_width, self.form.min_height)
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "contact-form", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let cfg = Config::load(dir, &dir.join("data")).unwrap();
        assert_eq!(cfg.form, FormConfig::default());
        assert_eq!(cfg.config.config_dir, dir.to_path_buf());
        assert_eq!(cfg.config.data_dir, dir.join("data"));
    }

    #[test]
    fn toml_overrides_form_table() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(
            dir.join("config.toml"),
            "[form]\ntitle = \"Get in touch\"\nmin_width = 72\n",
        )
        .unwrap();
        let cfg = Config::load(dir, dir).unwrap();
        assert_eq!(cfg.form.title, "Get in touch");
        assert_eq!(cfg.form.min_width, 72);
        assert_eq!(cfg.form.min_height, 32);

        let schema = cfg.schema();
        assert_eq!(schema.title, "Get in touch");
        assert_eq!(schema.min_width, 72);
    }

    #[test]
    fn json5_config_is_read() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(
            dir.join("config.json5"),
            "{ form: { min_height: 40 } } // comment",
        )
        .unwrap();
        let cfg = Config::load(dir, dir).unwrap();
        assert_eq!(cfg.form.min_height, 40);
        assert_eq!(cfg.form.title, "Contact Form");
    }
}
