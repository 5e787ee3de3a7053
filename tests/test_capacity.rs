//! Tests for the per-variant capacity tables.

mod common;

use common::*;

#[test]
fn test_person_tables_have_bespoke_caps() {
    let early = CapacityTable::for_variant(FormVariant::IngresoAnticipado);
    let late = CapacityTable::for_variant(FormVariant::LateCheckout);

    assert_eq!(early.capacity("Camps", "Cabra Camp"), 2);
    assert_eq!(late.capacity("Camps", "Cabra Camp"), 0);
    assert_eq!(early.capacity("Camps", "Purmalandia"), 12);
    assert_eq!(late.capacity("Camps", "Purmalandia"), 15);
    assert_eq!(early.capacity("Templo", "Aiko 2025"), 15);
    assert_eq!(late.capacity("Templo", "Aiko 2025"), 30);
    assert_eq!(early.capacity("Arte", "HORUS "), 0, "HORUS belongs to Camps");
    assert_eq!(early.capacity("Camps", "HORUS "), 11);
}

#[test]
fn test_supplier_tables_are_flat_thirty_except_closed_groups() {
    let closed = ["Cafeteria", "Dorado", "Entre Pares", "La Cantina", "Planta Base Camp"];

    for variant in [
        FormVariant::IngresoAnticipadoProveedores,
        FormVariant::LateCheckoutProveedores,
    ] {
        let table = CapacityTable::for_variant(variant);
        for area in table.areas() {
            for (group, capacity) in table.groups(area) {
                let expected = if area == "Camps" && closed.contains(&group) { 0 } else { 30 };
                assert_eq!(capacity, expected, "{variant} {area}/{group}");
            }
        }
    }
}

#[test]
fn test_closed_supplier_group_never_opens_a_slot() {
    let variant = FormVariant::IngresoAnticipadoProveedores;
    let mut actions = select("Camps", "Cafeteria");
    actions.push(Action::AddMember);
    actions.push(Action::AddMember);

    let state = reduce_all(variant, &actions);

    assert!(state.members.is_empty());
    assert!(!CapacityTable::for_variant(variant).is_group_open("Camps", "Cafeteria"));
}

#[test]
fn test_unknown_pairs() {
    let table = CapacityTable::for_variant(FormVariant::IngresoAnticipado);

    assert_eq!(table.lookup("Camps", "No existe"), None);
    assert_eq!(table.lookup("", ""), None);
    assert_eq!(table.capacity("Nada", "Nada"), 0);
    assert_eq!(table.groups("Nada").count(), 0);
}

#[test]
fn test_areas_and_groups_keep_table_order() {
    let table = CapacityTable::for_variant(FormVariant::LateCheckout);

    assert_eq!(
        table.areas().collect::<Vec<_>>(),
        ["Arte", "Camps", "Infra", "Man", "Templo"]
    );
    let arte: Vec<&str> = table.groups("Arte").map(|(group, _)| group).collect();
    assert_eq!(arte.len(), 38);
    assert_eq!(arte.first(), Some(&"Campito sonoro"));
    assert_eq!(arte.last(), Some(&"VIRGEN FUEGO"));
    assert_eq!(table.groups("Infra").collect::<Vec<_>>(), [("Infra", 30)]);
}
