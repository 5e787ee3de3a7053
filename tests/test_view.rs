//! Tests for the declarative form view.

mod common;

use common::*;
use prepost_form::core::view::{
    ADD_ANOTHER_LABEL, COMMIT_LABEL, FieldInput, SUBMIT_LABEL,
};

const EARLY: FormVariant = FormVariant::IngresoAnticipado;

fn view_after(variant: FormVariant, actions: &[Action]) -> FormView {
    let state = reduce_all(variant, actions);
    render(&state, &CapacityTable::for_variant(variant), &layout(variant))
}

#[test]
fn test_empty_state_hides_groups_and_roster() {
    let view = view_after(EARLY, &[]);

    assert_eq!(view.area.value, "");
    assert!(!view.area.locked);
    assert_eq!(view.area.options, ["Arte", "Camps", "Infra", "Man", "Templo"]);
    assert!(view.group_selectors.iter().all(|selector| !selector.visible && !selector.enabled));
    assert!(view.roster.is_none());
    assert!(!view.thank_you_visible);
    assert!(!view.submit_controls_hidden);
}

#[test]
fn test_only_current_area_group_selector_is_visible() {
    let view = view_after(
        EARLY,
        &[Action::SetArea {
            area: "Camps".to_string(),
        }],
    );

    let visible: Vec<_> = view
        .group_selectors
        .iter()
        .filter(|selector| selector.visible)
        .collect();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].area, "Camps");
    assert!(visible[0].enabled);
    assert_eq!(visible[0].options.first().map(|o| o.name.as_str()), Some("Cabra Camp"));
    assert_eq!(visible[0].options.len(), 18);
    assert!(view.roster.is_none(), "roster stays hidden until a group is chosen");
}

#[test]
fn test_open_member_exposes_controls() {
    let view = view_after(EARLY, &select("Camps", "Dorado"));
    let roster = view.roster.as_ref().expect("roster visible");

    assert_eq!(roster.capacity, 4);
    assert_eq!(roster.remaining, 3);
    assert_eq!(roster.members.len(), 1);

    let card = &roster.members[0];
    assert!(!card.disabled);
    assert!(card.remove.visible);
    assert!(card.commit.visible);
    assert_eq!(card.commit.label, COMMIT_LABEL);
    assert!(roster.add_another.is_none());
    assert_eq!(
        card.fields.iter().map(|f| f.field).collect::<Vec<_>>(),
        MemberField::PERSON
    );
}

#[test]
fn test_submitted_member_locks_selection_and_fields() {
    let mut actions = select("Camps", "Dorado");
    actions.extend(fill_person("Ana", "123"));
    actions.push(Action::AddMember);
    let view = view_after(EARLY, &actions);

    assert!(view.area.locked);
    assert!(view.visible_group_selector().is_some_and(|selector| selector.locked));

    let roster = view.roster.as_ref().expect("roster visible");
    let committed = &roster.members[0];
    assert!(committed.disabled);
    assert!(!committed.remove.visible);
    assert!(!committed.commit.visible);
    assert!(committed.fields.iter().all(|field| field.disabled));
    assert!(!roster.members[1].disabled);
}

#[test]
fn test_day_field_preselects_stored_option() {
    let mut actions = select("Camps", "Dorado");
    actions.extend(fill_person("Ana", "123"));
    let view = view_after(EARLY, &actions);

    let card = &view.roster.as_ref().expect("roster visible").members[0];
    let day = card
        .fields
        .iter()
        .find(|field| field.field == MemberField::Dia)
        .expect("day field rendered");
    match &day.input {
        FieldInput::Day { options, selected } => {
            assert_eq!(options.len(), TEST_DAYS.len());
            assert_eq!(selected.as_deref(), Some("Lunes"));
        }
        other => panic!("expected day selector, got {other:?}"),
    }

    let name = card
        .fields
        .iter()
        .find(|field| field.field == MemberField::Nombre)
        .expect("name field rendered");
    assert_eq!(
        name.input,
        FieldInput::Text {
            value: "Ana".to_string()
        }
    );
}

#[test]
fn test_removed_open_slot_shows_add_another() {
    let mut actions = select("Camps", "Dorado");
    actions.extend(fill_person("Ana", "123"));
    actions.push(Action::AddMember);
    actions.push(Action::RemoveMember);
    let view = view_after(EARLY, &actions);

    let roster = view.roster.as_ref().expect("roster visible");
    let add_another = roster.add_another.as_ref().expect("add another control");
    assert_eq!(add_another.label, ADD_ANOTHER_LABEL);
    assert!(add_another.visible);
    assert_eq!(view.trailing_add_control(), Some(add_another));
}

#[test]
fn test_full_roster_reads_enviar_and_shows_thank_you() {
    let mut actions = select("Camps", "Cabra Camp");
    actions.extend(fill_person("Ana", "1"));
    actions.push(Action::AddMember);
    actions.extend(fill_person("Beto", "2"));
    actions.push(Action::AddMember);
    let view = view_after(EARLY, &actions);

    let roster = view.roster.as_ref().expect("roster visible");
    assert_eq!(roster.members.len(), 2);
    assert!(roster.add_another.is_none());
    assert_eq!(
        view.trailing_add_control().map(|control| control.label.as_str()),
        Some(SUBMIT_LABEL)
    );
    assert!(view.thank_you_visible);
    assert!(view.submit_controls_hidden);
}

#[test]
fn test_last_open_slot_commit_reads_enviar() {
    let mut actions = select("Camps", "Cabra Camp");
    actions.extend(fill_person("Ana", "1"));
    actions.push(Action::AddMember);
    let view = view_after(EARLY, &actions);

    let roster = view.roster.as_ref().expect("roster visible");
    let last = roster.members.last().expect("open slot");
    assert!(last.commit.visible);
    assert_eq!(last.commit.label, SUBMIT_LABEL);
    assert!(!view.thank_you_visible);
}

#[test]
fn test_finished_form_disables_everything() {
    let mut actions = select("Camps", "Dorado");
    actions.extend(fill_person("Ana", "1"));
    actions.push(Action::SubmitForm);
    let view = view_after(EARLY, &actions);

    assert!(view.area.locked);
    let roster = view.roster.as_ref().expect("roster visible");
    assert!(roster.members.iter().all(|card| card.disabled));
    assert!(roster.add_another.is_none());
    assert_ne!(roster.members[0].commit.label, SUBMIT_LABEL);
    assert!(view.thank_you_visible);
}

#[test]
fn test_zero_capacity_group_shows_thank_you_at_once() {
    let view = view_after(
        FormVariant::IngresoAnticipadoProveedores,
        &select("Camps", "Cafeteria"),
    );

    let roster = view.roster.as_ref().expect("roster visible");
    assert_eq!(roster.capacity, 0);
    assert!(roster.members.is_empty());
    assert!(roster.add_another.is_none());
    assert!(view.trailing_add_control().is_none());
    assert!(view.thank_you_visible);
    assert!(view.submit_controls_hidden);
}

#[test]
fn test_supplier_cards_use_supplier_template() {
    let view = view_after(
        FormVariant::LateCheckoutProveedores,
        &select("Arte", "Centro"),
    );

    let card = &view.roster.as_ref().expect("roster visible").members[0];
    assert_eq!(
        card.fields.iter().map(|f| f.field).collect::<Vec<_>>(),
        MemberField::SUPPLIER
    );
}
