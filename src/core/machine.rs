use crate::{
    core::{
        capacity::CapacityTable,
        reducer::{Action, reduce},
        store::{StateRepository, load_state, persist_state, storage_key},
        view::{FormLayout, FormView, render},
    },
    error::Result,
    models::{FormState, FormVariant},
};

/// Owns the form state and runs every action through
/// reduce → tag → render → persist.
#[derive(Debug)]
pub struct FormMachine<R: StateRepository> {
    state: FormState,
    view: FormView,
    table: CapacityTable,
    layout: FormLayout,
    repo: R,
}

impl<R: StateRepository> FormMachine<R> {
    /// Rehydrates from `repo` (or starts empty), renders once and writes the
    /// snapshot back, so an unreadable entry is replaced right away.
    pub fn new(layout: FormLayout, repo: R) -> Self {
        let state = load_state(&repo, layout.variant);
        let machine = Self::with_state(layout, repo, state);
        if let Err(err) = persist_state(&machine.repo, machine.layout.variant, &machine.state) {
            tracing::warn!(error = %err, variant = %machine.layout.variant, "could not persist loaded form state");
        }
        machine
    }

    pub fn with_state(layout: FormLayout, repo: R, state: FormState) -> Self {
        let table = CapacityTable::for_variant(layout.variant);
        let view = render(&state, &table, &layout);
        Self {
            state,
            view,
            table,
            layout,
            repo,
        }
    }

    /// Applies `action` and persists the new snapshot. The transition is kept
    /// even when persisting fails; the error is returned for reporting.
    pub fn dispatch(&mut self, action: Action) -> Result<&FormView> {
        let mut next = reduce(&self.state, &action, &self.table);
        next.last_action = Some(action.name().to_string());
        tracing::debug!(
            action = action.name(),
            area = %next.area,
            grupo = %next.grupo,
            members = next.members.len(),
            finished = next.is_form_finished,
            "dispatched form action"
        );

        self.state = next;
        self.view = render(&self.state, &self.table, &self.layout);
        persist_state(&self.repo, self.layout.variant, &self.state)?;
        Ok(&self.view)
    }

    /// Forgets the draft, both in memory and in storage.
    pub fn reset(&mut self) -> Result<&FormView> {
        self.repo.clear(&storage_key(self.layout.variant))?;
        self.state = FormState::default();
        self.view = render(&self.state, &self.table, &self.layout);
        Ok(&self.view)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn table(&self) -> &CapacityTable {
        &self.table
    }

    pub fn variant(&self) -> FormVariant {
        self.layout.variant
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }
}
