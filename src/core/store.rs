//! Draft persistence: one JSON blob per form variant, the desktop stand-in
//! for browser local storage.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    error::{FormError, Result},
    models::{FormState, FormVariant},
};

const STORAGE_KEY_PREFIX: &str = "prePostEventFormState";

pub fn storage_key(variant: FormVariant) -> String {
    format!("{STORAGE_KEY_PREFIX}-{variant}")
}

/// String key/value storage with local-storage semantics.
pub trait StateRepository {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
    fn clear(&self, key: &str) -> Result<()>;
}

impl<R: StateRepository + ?Sized> StateRepository for Box<R> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn clear(&self, key: &str) -> Result<()> {
        (**self).clear(key)
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateRepository for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FormError::Storage {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let storage_err = |source| FormError::Storage {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(storage_err)?;
        fs::write(self.entry_path(key), value).map_err(storage_err)
    }

    fn clear(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FormError::Storage {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// Process-local storage, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StateRepository for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Rehydrates the draft for `variant`. Missing, unreadable or malformed
/// entries yield the empty default state.
pub fn load_state<R: StateRepository + ?Sized>(repo: &R, variant: FormVariant) -> FormState {
    let key = storage_key(variant);
    let raw = match repo.load(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return FormState::default(),
        Err(err) => {
            tracing::warn!(%key, error = %err, "could not read stored form state, starting empty");
            return FormState::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!(%key, error = %err, "stored form state is malformed, starting empty");
            FormState::default()
        }
    }
}

pub fn persist_state<R: StateRepository + ?Sized>(
    repo: &R,
    variant: FormVariant,
    state: &FormState,
) -> Result<()> {
    let raw = serde_json::to_string(state)?;
    repo.save(&storage_key(variant), &raw)
}
