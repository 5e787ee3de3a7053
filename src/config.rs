use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    core::{submission, view::FormLayout},
    error::{FormError, Result},
    models::FormVariant,
};

pub const DEFAULT_CONFIG_FILE: &str = "prepost-form.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub variant: FormVariant,
    pub state_dir: PathBuf,
    pub log_filter: String,
    pub early_entry_days: Vec<String>,
    pub late_checkout_days: Vec<String>,
    /// Per-variant suffix appended to the form id to build the endpoint URL.
    pub form_ids: HashMap<FormVariant, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: FormVariant::IngresoAnticipado,
            state_dir: PathBuf::from("./data"),
            log_filter: "info".into(),
            early_entry_days: days(&["Domingo", "Lunes", "Martes", "Miércoles"]),
            late_checkout_days: days(&["Lunes", "Martes"]),
            form_ids: HashMap::new(),
        }
    }
}

fn days(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Optional keys accepted in the TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    variant: Option<String>,
    state_dir: Option<PathBuf>,
    log_filter: Option<String>,
    early_entry_days: Option<Vec<String>>,
    late_checkout_days: Option<Vec<String>>,
    #[serde(default)]
    form_ids: HashMap<String, String>,
}

impl Settings {
    pub fn day_options(&self) -> &[String] {
        if self.variant.is_early_entry() {
            &self.early_entry_days
        } else {
            &self.late_checkout_days
        }
    }

    pub fn layout(&self) -> FormLayout {
        FormLayout {
            variant: self.variant,
            day_options: self.day_options().to_vec(),
        }
    }

    /// Endpoint for the current variant, if its id is configured.
    pub fn form_url(&self) -> Option<String> {
        self.form_ids
            .get(&self.variant)
            .map(|id| submission::submission_url(self.variant, id))
    }

    pub fn apply_toml(&mut self, raw: &str, path: &Path) -> Result<()> {
        let file_cfg: FileSettings = toml::from_str(raw).map_err(|err| FormError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        if let Some(v) = file_cfg.variant {
            self.variant = v.parse()?;
        }
        if let Some(v) = file_cfg.state_dir {
            self.state_dir = v;
        }
        if let Some(v) = file_cfg.log_filter {
            self.log_filter = v;
        }
        if let Some(v) = file_cfg.early_entry_days {
            self.early_entry_days = v;
        }
        if let Some(v) = file_cfg.late_checkout_days {
            self.late_checkout_days = v;
        }
        for (slug, id) in file_cfg.form_ids {
            self.form_ids.insert(slug.parse()?, id);
        }
        Ok(())
    }

    /// Applies `PREPOST_*` overrides and every variant's form id variable
    /// (`PRE_ID`, `PRE_PROV_ID`, `LCO_ID`, `LCO_PROV_ID`).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PREPOST_VARIANT") {
            self.variant = v.parse()?;
        }
        if let Some(v) = lookup("PREPOST_STATE_DIR") {
            self.state_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("PREPOST_LOG") {
            self.log_filter = v;
        }
        for variant in FormVariant::ALL {
            if let Some(id) = lookup(submission::form_id_env(variant)) {
                self.form_ids.insert(variant, id);
            }
        }
        Ok(())
    }
}

/// Defaults, then the TOML file, then the environment. An explicit `path`
/// must exist; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();

    let (file, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    match fs::read_to_string(&file) {
        Ok(raw) => settings.apply_toml(&raw, &file)?,
        Err(err) if err.kind() == ErrorKind::NotFound && !required => {}
        Err(err) => {
            return Err(FormError::Config {
                path: file,
                message: err.to_string(),
            });
        }
    }

    settings.apply_env(|key| std::env::var(key).ok())?;
    Ok(settings)
}
