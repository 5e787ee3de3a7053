pub mod capacity;
pub mod defer;
pub mod machine;
pub mod reducer;
pub mod store;
pub mod submission;
pub mod validation;
pub mod view;

pub use capacity::CapacityTable;
pub use machine::FormMachine;
pub use reducer::{Action, MemberValue, reduce};
pub use store::{FileStore, MemoryStore, StateRepository, load_state, persist_state, storage_key};
pub use submission::{Submission, submission_url};
pub use validation::{Trigger, ValidationReport, alert_text, validate};
pub use view::{FormLayout, FormView, render};
