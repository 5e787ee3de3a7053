mod app;
mod message;
mod state;
mod widgets;

pub use app::FormApp;
pub use message::Message;
pub use state::AppState;

use crate::config::Settings;

/// Opens the form window and blocks until it is closed.
pub fn run(settings: Settings, ephemeral: bool) -> iced::Result {
    let title = format!("Registro - {}", settings.variant.title());
    iced::application(
        move || FormApp::new(settings.clone(), ephemeral),
        FormApp::update,
        FormApp::view,
    )
    .title(move |_: &FormApp| title.clone())
    .theme(FormApp::theme)
    .run()
}
