//! Conversation coordinator
//!
//! Ties the [`SessionStore`], the state machine and the [`Publisher`]
//! together. Every inbound event for a chat goes through
//! [`Conversation::handle`], which returns a [`Reply`] describing what the
//! bot should send back. Events for one chat arrive one at a time, so the
//! read-modify-write on the store never races with itself.

use std::sync::Arc;
use teloxide::types::ChatId;
use tracing::{debug, error, info};

use crate::dialogue::{Event, SubmissionState};
use crate::draft::{DraftField, PhotoRef};
use crate::publisher::{PublishError, Publisher};
use crate::renderer::render;
use crate::session_store::{Session, SessionStore};
use crate::state_machine::{self, Effect, NextState};

/// What the bot should send in response to an event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Nothing,
    Ask(DraftField),
    AskReplacement(DraftField),
    Reprompt(SubmissionState),
    Preview { report: String, photo: PhotoRef },
    EditMenu,
    Published,
    PublishFailed,
    Cancelled,
    NothingToCancel,
}

pub struct Conversation {
    sessions: Arc<SessionStore>,
    publisher: Arc<dyn Publisher>,
}

impl Conversation {
    pub fn new(sessions: Arc<SessionStore>, publisher: Arc<dyn Publisher>) -> Self {
        Self {
            sessions,
            publisher,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Process one event for `chat_id`
    pub async fn handle(&self, chat_id: ChatId, event: Event) -> Reply {
        let mut session = match (&event, self.sessions.get(chat_id)) {
            (Event::Submit, existing) => {
                if existing.is_some() {
                    info!(chat_id = %chat_id, "Restarting submission, discarding previous draft");
                } else {
                    info!(chat_id = %chat_id, "Starting submission");
                }
                Session::new(chat_id)
            }
            (_, Some(session)) => session,
            (Event::Cancel, None) => return Reply::NothingToCancel,
            (_, None) => {
                debug!(chat_id = %chat_id, event = ?event, "No active session, ignoring event");
                return Reply::Nothing;
            }
        };

        let transition = state_machine::apply(session.state, event, &mut session.draft);
        debug!(
            chat_id = %chat_id,
            from = ?session.state,
            next = ?transition.next,
            effect = ?transition.effect,
            "Applied transition"
        );

        match transition.next {
            NextState::Stay => {
                if transition.effect == Effect::None {
                    return Reply::Nothing;
                }
                session.touch();
                self.sessions.put(session.clone());
            }
            NextState::Go(state) => {
                session.state = state;
                session.touch();
                self.sessions.put(session.clone());
            }
            NextState::Finish => {}
        }

        match transition.effect {
            Effect::None => Reply::Nothing,
            Effect::Ask(field) => Reply::Ask(field),
            Effect::AskReplacement(field) => Reply::AskReplacement(field),
            Effect::Reprompt(state) => Reply::Reprompt(state),
            Effect::EditMenu => Reply::EditMenu,
            Effect::Preview => match session.draft.photo.clone() {
                Some(photo) => Reply::Preview {
                    report: render(&session.draft),
                    photo,
                },
                None => {
                    error!(chat_id = %chat_id, "Preview requested without a photo");
                    Reply::Nothing
                }
            },
            Effect::Publish => self.publish(session).await,
            Effect::Cancelled => {
                self.sessions.delete(chat_id);
                info!(chat_id = %chat_id, "Submission cancelled");
                Reply::Cancelled
            }
        }
    }

    async fn publish(&self, mut session: Session) -> Reply {
        let chat_id = session.chat_id;
        let result = match (session.draft.missing_field(), session.draft.photo.as_ref()) {
            (None, Some(photo)) => {
                self.publisher
                    .publish(&render(&session.draft), photo)
                    .await
            }
            (Some(field), _) => Err(PublishError::IncompleteDraft(field)),
            (None, None) => Err(PublishError::IncompleteDraft(DraftField::Photo)),
        };

        match result {
            Ok(()) => {
                self.sessions.delete(chat_id);
                info!(chat_id = %chat_id, "Submission published");
                Reply::Published
            }
            Err(e) => {
                error!(chat_id = %chat_id, error = %e, "Failed to publish submission");
                session.state = SubmissionState::Confirmation;
                session.touch();
                self.sessions.put(session);
                Reply::PublishFailed
            }
        }
    }
}
