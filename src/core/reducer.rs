use serde::{Deserialize, Serialize};

use crate::{
    core::capacity::CapacityTable,
    models::{FormState, MemberField, MemberRecord},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberValue {
    pub field: MemberField,
    pub value: String,
}

/// Named transitions of the form. Serialized with a `type` tag so actions can
/// be scripted as JSON, e.g. `{"type":"SET_AREA","area":"Camps"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetArea { area: String },
    SetGrupo { grupo: String },
    SetDescripcion { descripcion: String },
    SetMemberValue { payload: MemberValue },
    RemoveMember,
    AddMember,
    SubmitForm,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetArea { .. } => "SET_AREA",
            Action::SetGrupo { .. } => "SET_GRUPO",
            Action::SetDescripcion { .. } => "SET_DESCRIPCION",
            Action::SetMemberValue { .. } => "SET_MEMBER_VALUE",
            Action::RemoveMember => "REMOVE_MEMBER",
            Action::AddMember => "ADD_MEMBER",
            Action::SubmitForm => "SUBMIT_FORM",
        }
    }

    pub fn set_member_value(field: MemberField, value: impl Into<String>) -> Self {
        Action::SetMemberValue {
            payload: MemberValue {
                field,
                value: value.into(),
            },
        }
    }
}

/// Pure transition: returns the next snapshot, leaving `state` untouched.
pub fn reduce(state: &FormState, action: &Action, table: &CapacityTable) -> FormState {
    let mut next = state.clone();

    if next.is_form_finished {
        tracing::debug!(action = action.name(), "form already submitted, ignoring action");
        return next;
    }

    match action {
        Action::SetArea { area } => {
            next.area = area.clone();
            next.grupo.clear();
            next.members.clear();
        }
        Action::SetGrupo { grupo } => {
            next.grupo = grupo.clone();
            next.members.clear();
            open_slot_if_room(&mut next, table);
        }
        Action::SetDescripcion { descripcion } => {
            next.descripcion = descripcion.clone();
        }
        Action::SetMemberValue { payload } => match next.members.last_mut() {
            Some(member) if !member.is_submitted => {
                member.set(payload.field, payload.value.clone());
            }
            _ => {
                tracing::debug!(field = %payload.field, "no open member slot to write into");
            }
        },
        Action::RemoveMember => {
            next.members.pop();
        }
        Action::AddMember => {
            for member in &mut next.members {
                member.is_submitted = true;
            }
            open_slot_if_room(&mut next, table);
        }
        Action::SubmitForm => {
            next.is_form_finished = true;
        }
    }

    next
}

fn open_slot_if_room(state: &mut FormState, table: &CapacityTable) {
    let capacity = table.capacity(&state.area, &state.grupo) as usize;
    if state.members.len() < capacity {
        state.members.push(MemberRecord::default());
    }
}
