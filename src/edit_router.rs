//! Edit sub-flow reached from the confirmation step.
//!
//! `EditChoice` lets the user pick one field; the matching `Edit*` state takes
//! the replacement and always lands back on `Confirmation`.

use tracing::debug;

use crate::dialogue::{CallbackTag, Event, SubmissionState};
use crate::draft::{Draft, DraftField};
use crate::state_machine::{Effect, Transition};

/// Apply an event whose kind `state` already accepts
pub fn apply(state: SubmissionState, event: Event, draft: &mut Draft) -> Transition {
    match (state, event) {
        (SubmissionState::EditChoice, Event::Button(CallbackTag::DoneEditing)) => {
            Transition::back_to_confirmation()
        }
        (SubmissionState::EditChoice, Event::Button(tag)) => match tag.edit_target() {
            Some(field) => Transition::go(
                SubmissionState::editing(field),
                Effect::AskReplacement(field),
            ),
            None => {
                debug!(tag = %tag, "Button is not part of the edit menu, ignoring");
                Transition::ignore()
            }
        },
        (SubmissionState::EditPhoto, Event::Photo(photo)) => {
            draft.set_photo(photo);
            Transition::back_to_confirmation()
        }
        (state, Event::Text(text)) => match state.field() {
            Some(field) if field != DraftField::Photo => {
                if draft.set_text(field, &text) {
                    Transition::back_to_confirmation()
                } else {
                    Transition::reprompt(state)
                }
            }
            _ => Transition::ignore(),
        },
        _ => Transition::ignore(),
    }
}
