pub mod config;
pub mod core;
pub mod error;
pub mod models;

pub use config::{Settings, load_settings};
pub use core::{Action, CapacityTable, FormMachine, FormView};
pub use error::FormError;
pub use models::{FormState, FormVariant, MemberField, MemberRecord};

#[cfg(feature = "gui")]
pub mod gui;
