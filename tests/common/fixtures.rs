use prepost_form::core::{Action, CapacityTable, FormLayout, FormMachine, MemoryStore, reduce};
use prepost_form::models::{FormState, FormVariant, MemberField};

pub const TEST_DAYS: [&str; 3] = ["Domingo", "Lunes", "Martes"];

pub fn layout(variant: FormVariant) -> FormLayout {
    FormLayout {
        variant,
        day_options: TEST_DAYS.iter().map(|day| day.to_string()).collect(),
    }
}

/// A machine backed by in-memory storage, starting from an empty draft.
pub fn memory_machine(variant: FormVariant) -> FormMachine<MemoryStore> {
    FormMachine::new(layout(variant), MemoryStore::new())
}

/// Runs `actions` through the pure reducer starting from the empty state.
pub fn reduce_all(variant: FormVariant, actions: &[Action]) -> FormState {
    let table = CapacityTable::for_variant(variant);
    actions
        .iter()
        .fold(FormState::default(), |state, action| reduce(&state, action, &table))
}

pub fn select(area: &str, grupo: &str) -> Vec<Action> {
    vec![
        Action::SetArea {
            area: area.to_string(),
        },
        Action::SetGrupo {
            grupo: grupo.to_string(),
        },
    ]
}

/// Actions that fill the open slot with a valid person.
pub fn fill_person(nombre: &str, dni: &str) -> Vec<Action> {
    vec![
        Action::set_member_value(MemberField::Nombre, nombre),
        Action::set_member_value(MemberField::Dni, dni),
        Action::set_member_value(MemberField::Dia, "Lunes"),
    ]
}

/// Actions that fill the open slot with a valid supplier entry.
pub fn fill_supplier(dni: &str) -> Vec<Action> {
    MemberField::SUPPLIER
        .iter()
        .map(|&field| {
            let value = match field {
                MemberField::ProveedorDni | MemberField::ReceptorDni => dni.to_string(),
                MemberField::ProveedorDia => "Lunes".to_string(),
                _ => format!("valor {}", field.label()),
            };
            Action::set_member_value(field, value)
        })
        .collect()
}
