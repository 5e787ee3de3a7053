use std::fmt;

use crate::models::{FormState, FormVariant, MemberField};

/// Which control triggered validation; selects the alert wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    AddMember,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMemberFields {
    /// Zero-based position in the roster.
    pub index: usize,
    pub fields: Vec<MemberField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub missing_area: bool,
    pub missing_grupo: bool,
    pub members: Vec<MissingMemberFields>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        !self.missing_area && !self.missing_grupo && self.members.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing_area {
            writeln!(f, "- Área")?;
        }
        if self.missing_grupo {
            writeln!(f, "- Grupo")?;
        }
        for member in &self.members {
            let labels: Vec<&str> = member.fields.iter().map(|field| field.label()).collect();
            writeln!(f, "- Persona {}: {}", member.index + 1, labels.join(", "))?;
        }
        Ok(())
    }
}

pub fn validate(state: &FormState, variant: FormVariant) -> ValidationReport {
    let required = variant.required_fields();
    let members = state
        .members
        .iter()
        .enumerate()
        .filter_map(|(index, member)| {
            let fields: Vec<MemberField> = required
                .iter()
                .copied()
                .filter(|field| !member.is_filled(*field))
                .collect();
            (!fields.is_empty()).then_some(MissingMemberFields { index, fields })
        })
        .collect();

    ValidationReport {
        missing_area: state.area.trim().is_empty(),
        missing_grupo: state.grupo.trim().is_empty(),
        members,
    }
}

pub fn alert_message(variant: FormVariant, trigger: Trigger) -> &'static str {
    match (trigger, variant.is_supplier()) {
        (Trigger::AddMember, true) => concat!(
            "Por favor complete todos los campos requeridos:\n",
            "  1. Área y Grupo\n",
            "  2. Datos de los proveedores (Nombre, DNI, Tipo de proveedor, Día de ingreso)\n",
            "  3. Quién recibirá los proveedores (Nombre, Apellido, DNI, Teléfono).",
        ),
        (Trigger::AddMember, false) => concat!(
            "Por favor complete todos los campos requeridos:\n",
            "  Área, Grupo, Datos de las personas (Nombre, DNI, y Día de ingreso).",
        ),
        (Trigger::Submit, _) => concat!(
            "Por favor complete todos los campos requeridos: Área, Grupo, ",
            "Datos de las personas (Nombre, DNI, Teléfono y Día de ingreso).",
        ),
    }
}

/// Full alert text: the variant's message followed by what is missing.
pub fn alert_text(variant: FormVariant, trigger: Trigger, report: &ValidationReport) -> String {
    format!(
        "{}\n\nFaltan:\n{}",
        alert_message(variant, trigger),
        report
    )
}
