//! Tests for the add/submit validity check and its alert text.

mod common;

use common::*;
use prepost_form::core::{alert_text, validation::alert_message};

#[test]
fn test_empty_form_is_invalid() {
    let report = validate(&FormState::default(), FormVariant::IngresoAnticipado);

    assert!(!report.is_valid());
    assert!(report.missing_area);
    assert!(report.missing_grupo);
    assert!(report.members.is_empty());
}

#[test]
fn test_person_member_needs_name_dni_and_day() {
    let mut actions = select("Camps", "Dorado");
    actions.push(Action::set_member_value(MemberField::Nombre, "Ana"));
    actions.push(Action::set_member_value(MemberField::Dia, "Lunes"));
    let state = reduce_all(FormVariant::IngresoAnticipado, &actions);

    let report = validate(&state, FormVariant::IngresoAnticipado);

    assert!(!report.is_valid());
    assert_eq!(report.members.len(), 1);
    assert_eq!(report.members[0].index, 0);
    assert_eq!(report.members[0].fields, [MemberField::Dni]);
}

#[test]
fn test_whitespace_counts_as_missing() {
    let mut actions = select("Camps", "Dorado");
    actions.extend(fill_person("   ", "123"));
    let state = reduce_all(FormVariant::IngresoAnticipado, &actions);

    let report = validate(&state, FormVariant::IngresoAnticipado);
    assert_eq!(report.members[0].fields, [MemberField::Nombre]);
}

#[test]
fn test_phone_and_surname_are_optional_for_people() {
    let mut actions = select("Camps", "Dorado");
    actions.extend(fill_person("Ana", "123"));
    let state = reduce_all(FormVariant::LateCheckout, &actions);

    assert!(validate(&state, FormVariant::LateCheckout).is_valid());
}

#[test]
fn test_supplier_member_needs_every_supplier_field() {
    let variant = FormVariant::IngresoAnticipadoProveedores;
    let mut actions = select("Arte", "Huasi");
    actions.extend(fill_supplier("999"));
    let complete = reduce_all(variant, &actions);
    assert!(validate(&complete, variant).is_valid());

    actions.push(Action::set_member_value(MemberField::ReceptorTelefono, " "));
    let incomplete = reduce_all(variant, &actions);
    let report = validate(&incomplete, variant);
    assert_eq!(report.members[0].fields, [MemberField::ReceptorTelefono]);
}

#[test]
fn test_missing_dni_blocks_add_and_leaves_roster_unchanged() {
    let variant = FormVariant::IngresoAnticipado;
    let mut machine = memory_machine(variant);
    for action in select("Camps", "Cabra Camp") {
        machine.dispatch(action).expect("dispatch");
    }
    machine
        .dispatch(Action::set_member_value(MemberField::Nombre, "Ana"))
        .expect("dispatch");
    machine
        .dispatch(Action::set_member_value(MemberField::Dia, "Lunes"))
        .expect("dispatch");
    let before = machine.state().clone();

    let report = validate(machine.state(), variant);
    assert!(!report.is_valid());

    let alert = alert_text(variant, Trigger::AddMember, &report);
    assert!(alert.starts_with(alert_message(variant, Trigger::AddMember)));
    assert!(alert.contains("Persona 1: DNI"));

    // the caller cancels the action, so nothing is dispatched
    assert_eq!(machine.state(), &before);
    assert_eq!(machine.state().members.len(), 1);
    assert!(!machine.state().members[0].is_submitted);
}

#[test]
fn test_alert_wording_per_variant() {
    let person = alert_message(FormVariant::LateCheckout, Trigger::AddMember);
    let supplier = alert_message(FormVariant::LateCheckoutProveedores, Trigger::AddMember);
    let submit = alert_message(FormVariant::LateCheckoutProveedores, Trigger::Submit);

    assert!(person.contains("Datos de las personas"));
    assert!(supplier.contains("Quién recibirá los proveedores"));
    assert!(submit.contains("Teléfono y Día de ingreso"));
}
