//! Payload for the external form endpoint that receives a finished roster.

use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    error::Result,
    models::{FormState, FormVariant},
};

const FORM_URL_PREFIX: &str = "https://docs.google.com/forms/u/0/d/e";

/// Base form id per variant; the deployment appends its own suffix.
fn form_base_id(variant: FormVariant) -> &'static str {
    match variant {
        FormVariant::IngresoAnticipado => {
            "1FAIpQLSfO2H29d6QY_K7QIp7A4s1-wX3IMCLQPH7cE7LLuLe8p3"
        }
        FormVariant::IngresoAnticipadoProveedores => {
            "1FAIpQLSddybkyHuel2SXtsRo75HScR25lEcN5bpbwMAkx_LKAbR"
        }
        FormVariant::LateCheckout => "1FAIpQLScwYW8fpTss_ia2KZ5ggdyVm1DUiDO8mvZwzym8B0F87P",
        FormVariant::LateCheckoutProveedores => {
            "1FAIpQLSd_5_fCJOYXUuKbab41oUwMMW-IyKR1bdsky41CY40VYQ"
        }
    }
}

/// Environment variable holding the id suffix for `variant`.
pub fn form_id_env(variant: FormVariant) -> &'static str {
    match variant {
        FormVariant::IngresoAnticipado => "PRE_ID",
        FormVariant::IngresoAnticipadoProveedores => "PRE_PROV_ID",
        FormVariant::LateCheckout => "LCO_ID",
        FormVariant::LateCheckoutProveedores => "LCO_PROV_ID",
    }
}

pub fn submission_url(variant: FormVariant, id_suffix: &str) -> String {
    format!(
        "{FORM_URL_PREFIX}/{}{}/formResponse",
        form_base_id(variant),
        id_suffix
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub variant: FormVariant,
    pub url: Option<String>,
    pub submitted_at: String,
    pub entries: Vec<(String, String)>,
}

impl Submission {
    /// Flattens the state into ordered `(label, value)` entries. Unfilled
    /// member fields are left out.
    pub fn from_state(
        variant: FormVariant,
        state: &FormState,
        url: Option<String>,
        submitted_at: OffsetDateTime,
    ) -> Result<Self> {
        let mut entries = vec![
            ("Area".to_string(), state.area.clone()),
            ("Grupo".to_string(), state.grupo.clone()),
            ("Descripcion".to_string(), state.descripcion.clone()),
        ];

        for member in &state.members {
            for &field in variant.template_fields() {
                if let Some(value) = member.get(field).filter(|value| !value.trim().is_empty()) {
                    entries.push((field.label().to_string(), value.trim().to_string()));
                }
            }
        }

        let submitted_at = submitted_at.format(&Rfc3339)?;

        Ok(Self {
            variant,
            url,
            submitted_at,
            entries,
        })
    }
}
