use crate::{core::Action, models::MemberField};

#[derive(Debug, Clone)]
pub enum Message {
    AreaSelected(String),
    GrupoSelected(String),
    DescripcionChanged(String),
    MemberFieldChanged(MemberField, String),
    RemoveMember,
    AddMemberPressed,
    SubmitPressed,
    /// An action held back for one tick after the click that produced it.
    Deferred(Action),
    SubmitSettled,
    AlertClosed,
}
