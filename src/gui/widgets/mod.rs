use iced::{
    Color, Element, Length, Theme, border,
    widget::{Column, button, column, container, container::Style, pick_list, row, text, text_input},
};
use iced_widget::container::bordered_box;

use crate::{
    core::view::{ControlView, FieldInput, FieldView, MemberCardView, RosterView},
    gui::Message,
};

/// Darkened box used for inputs that can no longer change.
fn muted(theme: &Theme) -> Style {
    let mut color_rgba = theme.palette().background.into_rgba8();
    color_rgba[0] /= 2;
    color_rgba[1] /= 2;
    color_rgba[2] /= 2;
    bordered_box(theme).background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
}

fn card_style(disabled: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        if disabled {
            muted(theme)
        } else {
            bordered_box(theme).border(border::width(2))
        }
    }
}

pub fn section<'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut inner = Column::new().spacing(12);
    if !title.is_empty() {
        inner = inner.push(text(title).size(20));
    }
    container(inner.push(content))
        .style(bordered_box)
        .padding(16)
        .width(Length::Fill)
        .into()
}

pub fn locked_value<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    column![
        text(label),
        container(text(value)).style(muted).padding(8).width(Length::Fill),
    ]
    .spacing(4)
    .into()
}

pub fn alert_banner(message: &str) -> Element<'_, Message> {
    container(column![
        text(message),
        button(text("Entendido")).on_press(Message::AlertClosed),
    ]
    .spacing(8))
    .style(card_style(false))
    .padding(12)
    .width(Length::Fill)
    .into()
}

/// `on_press` is `None` while the form is busy, leaving the button inert.
fn control<'a>(
    control: &'a ControlView,
    on_press: Option<Message>,
) -> Option<Element<'a, Message>> {
    control
        .visible
        .then(|| button(text(control.label.as_str())).on_press_maybe(on_press).into())
}

pub fn roster(roster: &RosterView, busy: bool) -> Element<'_, Message> {
    let mut list = Column::new().spacing(12).push(text(format!(
        "Personas: {} de {} (quedan {})",
        roster.members.len(),
        roster.capacity,
        roster.remaining
    )));

    for card in &roster.members {
        list = list.push(member_card(card, busy));
    }

    if let Some(add_another) = &roster.add_another {
        if let Some(element) = control(add_another, (!busy).then_some(Message::AddMemberPressed)) {
            list = list.push(element);
        }
    }

    section("Integrantes", list)
}

pub fn member_card(card: &MemberCardView, busy: bool) -> Element<'_, Message> {
    let mut fields = Column::new()
        .spacing(8)
        .push(text(format!("Persona {}", card.index + 1)).size(16));

    for field in &card.fields {
        fields = fields.push(member_field(field));
    }

    let controls = [
        control(&card.remove, (!busy).then_some(Message::RemoveMember)),
        control(&card.commit, (!busy).then_some(Message::AddMemberPressed)),
    ];
    let mut buttons = row![].spacing(8);
    for element in controls.into_iter().flatten() {
        buttons = buttons.push(element);
    }

    container(fields.push(buttons))
        .style(card_style(card.disabled))
        .padding(12)
        .width(Length::Fill)
        .into()
}

fn member_field(view: &FieldView) -> Element<'_, Message> {
    let field = view.field;
    let input: Element<'_, Message> = match &view.input {
        FieldInput::Text { value } => text_input(field.label(), value)
            .on_input_maybe(
                (!view.disabled).then_some(move |value: String| Message::MemberFieldChanged(field, value)),
            )
            .into(),
        FieldInput::Day { selected, .. } if view.disabled => container(text(
            selected.as_deref().unwrap_or("-"),
        ))
        .style(muted)
        .padding(8)
        .width(Length::Fill)
        .into(),
        FieldInput::Day { options, selected } => pick_list(
            options.as_slice(),
            selected.clone(),
            move |value| Message::MemberFieldChanged(field, value),
        )
        .placeholder("Elegí un día")
        .into(),
    };

    column![text(field.label()).size(14), input].spacing(4).into()
}
