mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from prepost_form for tests
pub use prepost_form::core::{
    Action, CapacityTable, FileStore, FormLayout, FormMachine, FormView, MemoryStore,
    StateRepository, Trigger, load_state, persist_state, reduce, render, storage_key, validate,
};
pub use prepost_form::models::{FormState, FormVariant, MemberField, MemberRecord};
