use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// The four editions of the access form. Each has its own capacity table,
/// member template and storage entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormVariant {
    IngresoAnticipado,
    IngresoAnticipadoProveedores,
    LateCheckout,
    LateCheckoutProveedores,
}

impl FormVariant {
    pub const ALL: [FormVariant; 4] = [
        FormVariant::IngresoAnticipado,
        FormVariant::IngresoAnticipadoProveedores,
        FormVariant::LateCheckout,
        FormVariant::LateCheckoutProveedores,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            FormVariant::IngresoAnticipado => "ingreso-anticipado",
            FormVariant::IngresoAnticipadoProveedores => "ingreso-anticipado-proveedores",
            FormVariant::LateCheckout => "late-checkout",
            FormVariant::LateCheckoutProveedores => "late-checkout-proveedores",
        }
    }

    pub fn is_supplier(self) -> bool {
        self.slug().ends_with("proveedores")
    }

    pub fn is_early_entry(self) -> bool {
        matches!(
            self,
            FormVariant::IngresoAnticipado | FormVariant::IngresoAnticipadoProveedores
        )
    }

    pub fn title(self) -> &'static str {
        match self {
            FormVariant::IngresoAnticipado => "Ingreso anticipado",
            FormVariant::IngresoAnticipadoProveedores => "Ingreso anticipado - Proveedores",
            FormVariant::LateCheckout => "Late checkout",
            FormVariant::LateCheckoutProveedores => "Late checkout - Proveedores",
        }
    }

    /// Fields rendered in each member card, in template order.
    pub fn template_fields(self) -> &'static [MemberField] {
        if self.is_supplier() {
            &MemberField::SUPPLIER
        } else {
            &MemberField::PERSON
        }
    }

    /// Fields that must be non-blank on every member before it can be
    /// committed or the form submitted.
    pub fn required_fields(self) -> &'static [MemberField] {
        if self.is_supplier() {
            &MemberField::SUPPLIER
        } else {
            &[MemberField::Nombre, MemberField::Dni, MemberField::Dia]
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FormVariant {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormVariant::ALL
            .into_iter()
            .find(|variant| variant.slug() == s.trim())
            .ok_or_else(|| FormError::UnknownVariant(s.to_string()))
    }
}

/// A member input, serialized by the label the form uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MemberField {
    Nombre,
    Apellido,
    #[serde(rename = "DNI")]
    Dni,
    Telefono,
    Dia,
    #[serde(rename = "Proveedor: Nombre")]
    ProveedorNombre,
    #[serde(rename = "Proveedor: Apellido")]
    ProveedorApellido,
    #[serde(rename = "Proveedor: DNI")]
    ProveedorDni,
    #[serde(rename = "Proveedor: Tipo de proveedor")]
    ProveedorTipo,
    #[serde(rename = "Proveedor: Dia")]
    ProveedorDia,
    #[serde(rename = "Proveedor: Quién recibirá: Nombre")]
    ReceptorNombre,
    #[serde(rename = "Proveedor: Quién recibirá: Apellido")]
    ReceptorApellido,
    #[serde(rename = "Proveedor: Quién recibirá: DNI")]
    ReceptorDni,
    #[serde(rename = "Proveedor: Quién recibirá: Teléfono")]
    ReceptorTelefono,
}

impl MemberField {
    pub const PERSON: [MemberField; 5] = [
        MemberField::Nombre,
        MemberField::Apellido,
        MemberField::Dni,
        MemberField::Telefono,
        MemberField::Dia,
    ];

    pub const SUPPLIER: [MemberField; 9] = [
        MemberField::ProveedorNombre,
        MemberField::ProveedorApellido,
        MemberField::ProveedorDni,
        MemberField::ProveedorTipo,
        MemberField::ProveedorDia,
        MemberField::ReceptorNombre,
        MemberField::ReceptorApellido,
        MemberField::ReceptorDni,
        MemberField::ReceptorTelefono,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MemberField::Nombre => "Nombre",
            MemberField::Apellido => "Apellido",
            MemberField::Dni => "DNI",
            MemberField::Telefono => "Telefono",
            MemberField::Dia => "Dia",
            MemberField::ProveedorNombre => "Proveedor: Nombre",
            MemberField::ProveedorApellido => "Proveedor: Apellido",
            MemberField::ProveedorDni => "Proveedor: DNI",
            MemberField::ProveedorTipo => "Proveedor: Tipo de proveedor",
            MemberField::ProveedorDia => "Proveedor: Dia",
            MemberField::ReceptorNombre => "Proveedor: Quién recibirá: Nombre",
            MemberField::ReceptorApellido => "Proveedor: Quién recibirá: Apellido",
            MemberField::ReceptorDni => "Proveedor: Quién recibirá: DNI",
            MemberField::ReceptorTelefono => "Proveedor: Quién recibirá: Teléfono",
        }
    }

    /// Day fields render as a dropdown instead of a free text input.
    pub fn is_day(self) -> bool {
        matches!(self, MemberField::Dia | MemberField::ProveedorDia)
    }
}

impl fmt::Display for MemberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    #[serde(flatten)]
    pub fields: BTreeMap<MemberField, String>,
    #[serde(rename = "isSubmitted", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_submitted: bool,
}

impl MemberRecord {
    pub fn get(&self, field: MemberField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// True when the field holds something other than whitespace.
    pub fn is_filled(&self, field: MemberField) -> bool {
        self.get(field).is_some_and(|value| !value.trim().is_empty())
    }

    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub grupo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
    #[serde(default)]
    pub is_form_finished: bool,
    #[serde(default)]
    pub last_action: Option<String>,
}

impl FormState {
    pub fn any_submitted(&self) -> bool {
        self.members.iter().any(|member| member.is_submitted)
    }

    /// Vacuously true for an empty roster.
    pub fn all_submitted(&self) -> bool {
        self.members.iter().all(|member| member.is_submitted)
    }

    /// Area and group inputs stop accepting changes once someone is committed.
    pub fn is_selection_locked(&self) -> bool {
        self.any_submitted() || self.is_form_finished
    }

    pub fn open_member(&self) -> Option<&MemberRecord> {
        self.members.last().filter(|member| !member.is_submitted)
    }
}
