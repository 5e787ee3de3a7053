use iced::{
    Element, Length, Task, Theme,
    widget::{button, column, container, pick_list, scrollable, text, text_input},
};
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};
use time::OffsetDateTime;

use super::{AppState, Message, widgets};
use crate::{
    config::Settings,
    core::{
        Action, Submission, Trigger, alert_text, defer, validate,
        view::{FormView, SUBMIT_LABEL},
    },
};

const SENT_LABEL: &str = "Enviado!";
const THANK_YOU: &str = "¡Gracias! Recibimos tus datos.";

pub struct FormApp {
    state: AppState,
}

impl FormApp {
    pub fn new(settings: Settings, ephemeral: bool) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(settings, ephemeral),
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AreaSelected(area) => self.dispatch(Action::SetArea { area }),
            Message::GrupoSelected(grupo) => self.dispatch(Action::SetGrupo { grupo }),
            Message::DescripcionChanged(descripcion) => {
                self.dispatch(Action::SetDescripcion { descripcion })
            }
            Message::MemberFieldChanged(field, value) => {
                self.dispatch(Action::set_member_value(field, value))
            }
            Message::RemoveMember => self.dispatch(Action::RemoveMember),
            Message::AddMemberPressed => {
                if !self.state.begin_deferred() {
                    return Task::none();
                }
                if let Some(alert) = self.check(Trigger::AddMember) {
                    self.state.finish_deferred();
                    return alert;
                }
                Task::perform(defer::settle(), |_| Message::Deferred(Action::AddMember))
            }
            Message::SubmitPressed => {
                if !self.state.begin_deferred() {
                    return Task::none();
                }
                if let Some(alert) = self.check(Trigger::Submit) {
                    self.state.finish_deferred();
                    return alert;
                }
                Task::perform(defer::settle(), |_| Message::SubmitSettled)
            }
            Message::Deferred(action) => {
                self.state.finish_deferred();
                self.dispatch(action)
            }
            Message::SubmitSettled => {
                self.state.finish_deferred();
                let task = self.dispatch(Action::SubmitForm);
                self.state.submit_sent = true;
                self.log_submission();
                task
            }
            Message::AlertClosed => {
                self.state.alert = None;
                Task::none()
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Task<Message> {
        match self.state.machine.dispatch(action) {
            Ok(_) => self.state.storage_error = None,
            Err(err) => {
                tracing::error!(error = %err, "failed to persist form state");
                self.state.storage_error = Some(err.to_string());
            }
        }
        Task::none()
    }

    /// Returns the alert task when the form is not ready for `trigger`.
    fn check(&mut self, trigger: Trigger) -> Option<Task<Message>> {
        let variant = self.state.machine.variant();
        let report = validate(self.state.machine.state(), variant);
        if report.is_valid() {
            return None;
        }

        let description = alert_text(variant, trigger, &report);
        tracing::debug!(?trigger, missing = %report, "blocked by validation");
        self.state.alert = Some(description.clone());

        let dialog = AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Faltan datos")
            .set_description(description)
            .set_buttons(MessageButtons::Ok)
            .show();
        Some(Task::perform(dialog, |_| Message::AlertClosed))
    }

    fn log_submission(&self) {
        let submission = Submission::from_state(
            self.state.machine.variant(),
            self.state.machine.state(),
            self.state.settings.form_url(),
            OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
        );
        match submission.and_then(|submission| Ok(serde_json::to_string(&submission)?)) {
            Ok(payload) => tracing::info!(%payload, "form submitted"),
            Err(err) => tracing::error!(error = %err, "could not build submission payload"),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let form = self.state.machine.view();

        let mut content = column![text(form.variant.title()).size(28)]
            .spacing(16)
            .padding(20)
            .width(Length::Fill);

        content = content.push(self.selection_section(form));

        if let Some(roster) = &form.roster {
            content = content.push(widgets::roster(roster, self.state.is_busy()));
        }

        if let Some(alert) = &self.state.alert {
            content = content.push(widgets::alert_banner(alert));
        }

        if form.thank_you_visible || self.state.submit_sent {
            content = content.push(widgets::section("", text(THANK_YOU).size(20)));
        }

        if self.state.submit_sent {
            content = content.push(button(text(SENT_LABEL)));
        } else if !form.submit_controls_hidden {
            content = content.push(
                button(text(SUBMIT_LABEL))
                    .on_press_maybe((!self.state.is_busy()).then_some(Message::SubmitPressed)),
            );
        }

        if let Some(err) = &self.state.storage_error {
            content = content.push(text(format!("No se pudo guardar el borrador: {err}")).size(12));
        }

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn selection_section<'a>(&'a self, form: &'a FormView) -> Element<'a, Message> {
        let finished = self.state.machine.state().is_form_finished;

        let area: Element<'a, Message> = if form.area.locked {
            widgets::locked_value("Área", &form.area.value)
        } else {
            column![
                text("Área"),
                pick_list(
                    form.area.options.clone(),
                    (!form.area.value.is_empty()).then(|| form.area.value.clone()),
                    Message::AreaSelected,
                )
                .placeholder("Elegí un área"),
            ]
            .spacing(4)
            .into()
        };

        let mut section = column![area].spacing(12);

        if let Some(selector) = form.visible_group_selector() {
            let grupo: Element<'a, Message> = if selector.locked {
                widgets::locked_value("Grupo", &selector.value)
            } else {
                let options: Vec<String> =
                    selector.options.iter().map(|option| option.name.clone()).collect();
                column![
                    text("Grupo"),
                    pick_list(
                        options,
                        (!selector.value.is_empty()).then(|| selector.value.clone()),
                        Message::GrupoSelected,
                    )
                    .placeholder("Elegí un grupo"),
                ]
                .spacing(4)
                .into()
            };
            section = section.push(grupo);
        }

        section = section.push(column![
            text("Descripción"),
            text_input("Contanos algo más (opcional)", &form.descripcion)
                .on_input_maybe((!finished).then_some(Message::DescripcionChanged)),
        ]
        .spacing(4));

        widgets::section("Datos del grupo", section)
    }
}
