//! Declarative rendering: builds the whole form as a plain view tree from a
//! state snapshot. The GUI turns this tree into widgets and the toolkit
//! reconciles it against what is on screen.

use crate::{
    core::capacity::CapacityTable,
    models::{FormState, FormVariant, MemberField, MemberRecord},
};

pub const COMMIT_LABEL: &str = "Agregar";
pub const ADD_ANOTHER_LABEL: &str = "Agregar otrx";
pub const SUBMIT_LABEL: &str = "Enviar";
pub const REMOVE_LABEL: &str = "Quitar";

/// Static parts of the form that are not derived from state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub variant: FormVariant,
    pub day_options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub variant: FormVariant,
    pub area: AreaView,
    pub group_selectors: Vec<GroupSelectorView>,
    pub descripcion: String,
    /// `None` while no group is chosen.
    pub roster: Option<RosterView>,
    pub thank_you_visible: bool,
    pub submit_controls_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaView {
    pub value: String,
    pub options: Vec<String>,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSelectorView {
    pub area: String,
    pub options: Vec<GroupOption>,
    pub value: String,
    pub visible: bool,
    pub enabled: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOption {
    pub name: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    pub capacity: u32,
    pub remaining: u32,
    pub members: Vec<MemberCardView>,
    pub add_another: Option<ControlView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCardView {
    pub index: usize,
    pub fields: Vec<FieldView>,
    pub disabled: bool,
    pub remove: ControlView,
    pub commit: ControlView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: MemberField,
    pub input: FieldInput,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text { value: String },
    Day { options: Vec<String>, selected: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub label: String,
    pub visible: bool,
}

impl ControlView {
    fn new(label: &str, visible: bool) -> Self {
        Self {
            label: label.to_string(),
            visible,
        }
    }
}

impl FormView {
    pub fn visible_group_selector(&self) -> Option<&GroupSelectorView> {
        self.group_selectors.iter().find(|selector| selector.visible)
    }

    /// The last add/commit control in document order, whether or not it is
    /// currently shown.
    pub fn trailing_add_control(&self) -> Option<&ControlView> {
        let roster = self.roster.as_ref()?;
        roster
            .add_another
            .as_ref()
            .or_else(|| roster.members.last().map(|card| &card.commit))
    }
}

pub fn render(state: &FormState, table: &CapacityTable, layout: &FormLayout) -> FormView {
    let locked = state.is_selection_locked();

    let area = AreaView {
        value: state.area.clone(),
        options: table.areas().map(str::to_string).collect(),
        locked,
    };

    let group_selectors = table
        .areas()
        .map(|area_name| {
            let current = !state.area.is_empty() && area_name == state.area;
            GroupSelectorView {
                area: area_name.to_string(),
                options: table
                    .groups(area_name)
                    .map(|(name, capacity)| GroupOption {
                        name: name.to_string(),
                        capacity,
                    })
                    .collect(),
                value: if current { state.grupo.clone() } else { String::new() },
                visible: current,
                enabled: current,
                locked: current && locked,
            }
        })
        .collect();

    let capacity = table.capacity(&state.area, &state.grupo);
    let is_max = state.members.len() == capacity as usize;
    let roster = (!state.grupo.is_empty())
        .then(|| render_roster(state, layout, capacity, is_max));

    let roster_complete = is_max && state.all_submitted();
    let has_selection = !state.area.is_empty() && !state.grupo.is_empty();
    let finished = has_selection && (roster_complete || state.is_form_finished);

    FormView {
        variant: layout.variant,
        area,
        group_selectors,
        descripcion: state.descripcion.clone(),
        roster,
        thank_you_visible: finished,
        submit_controls_hidden: finished,
    }
}

fn render_roster(state: &FormState, layout: &FormLayout, capacity: u32, is_max: bool) -> RosterView {
    let mut members: Vec<MemberCardView> = state
        .members
        .iter()
        .enumerate()
        .map(|(index, member)| render_member(index, member, state.is_form_finished, layout))
        .collect();

    let add_another = (state.all_submitted() && !is_max && !state.is_form_finished)
        .then(|| ControlView::new(ADD_ANOTHER_LABEL, true));

    if is_max && !state.is_form_finished {
        if let Some(card) = members.last_mut() {
            card.commit.label = SUBMIT_LABEL.to_string();
        }
    }

    RosterView {
        capacity,
        remaining: capacity.saturating_sub(state.members.len() as u32),
        members,
        add_another,
    }
}

fn render_member(
    index: usize,
    member: &MemberRecord,
    form_finished: bool,
    layout: &FormLayout,
) -> MemberCardView {
    let disabled = member.is_submitted || form_finished;

    let fields = layout
        .variant
        .template_fields()
        .iter()
        .map(|&field| {
            let value = member.get(field).unwrap_or_default();
            let input = if field.is_day() {
                let selected = layout
                    .day_options
                    .iter()
                    .find(|option| option.as_str() == value)
                    .cloned();
                FieldInput::Day {
                    options: layout.day_options.clone(),
                    selected,
                }
            } else {
                FieldInput::Text {
                    value: value.to_string(),
                }
            };
            FieldView {
                field,
                input,
                disabled,
            }
        })
        .collect();

    MemberCardView {
        index,
        fields,
        disabled,
        remove: ControlView::new(REMOVE_LABEL, !disabled),
        commit: ControlView::new(COMMIT_LABEL, !disabled),
    }
}
