use crate::{
    config::Settings,
    core::{FileStore, FormMachine, MemoryStore, StateRepository},
};

pub type DynRepository = Box<dyn StateRepository>;

pub struct AppState {
    pub settings: Settings,
    pub machine: FormMachine<DynRepository>,
    /// Validation message currently shown in the alert dialog.
    pub alert: Option<String>,
    /// Set while an add/submit is waiting for its deferred dispatch.
    pub pending: bool,
    pub submit_sent: bool,
    /// Last storage failure, shown under the form.
    pub storage_error: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings, ephemeral: bool) -> Self {
        let repo: DynRepository = if ephemeral {
            Box::new(MemoryStore::new())
        } else {
            Box::new(FileStore::new(&settings.state_dir))
        };
        let machine = FormMachine::new(settings.layout(), repo);
        let submit_sent = machine.state().is_form_finished;

        Self {
            settings,
            machine,
            alert: None,
            pending: false,
            submit_sent,
            storage_error: None,
        }
    }

    /// An add or submit is in flight, or the form already went out.
    pub fn is_busy(&self) -> bool {
        self.pending || self.submit_sent
    }

    /// Claims the single deferred slot. Returns `false` while another add or
    /// submit is still waiting on its dispatch.
    pub fn begin_deferred(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn finish_deferred(&mut self) {
        self.pending = false;
    }
}
