//! State machine driving the main submission flow
//!
//! [`apply`] is the single transition table for a chat: it checks the event
//! against the input kind the current state expects, mutates the draft for
//! legal transitions and reports the next state plus the effect the caller
//! should perform. States belonging to the edit sub-flow are delegated to
//! [`crate::edit_router`].

use tracing::debug;

use crate::dialogue::{CallbackTag, Event, SubmissionState};
use crate::draft::{Draft, DraftField};
use crate::edit_router;

/// Where the session goes after an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextState {
    /// Keep the current state
    Stay,
    Go(SubmissionState),
    /// The session is over and should be removed
    Finish,
}

/// Side effect requested by a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Explicit no-op for events matching no transition
    None,
    /// Ask for a field in the main flow
    Ask(DraftField),
    /// Ask for a new value while editing
    AskReplacement(DraftField),
    /// Wrong input kind; ask again for what this state expects
    Reprompt(SubmissionState),
    Preview,
    EditMenu,
    Publish,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: NextState,
    pub effect: Effect,
}

impl Transition {
    pub fn go(state: SubmissionState, effect: Effect) -> Self {
        Self {
            next: NextState::Go(state),
            effect,
        }
    }

    pub fn finish(effect: Effect) -> Self {
        Self {
            next: NextState::Finish,
            effect,
        }
    }

    pub fn reprompt(state: SubmissionState) -> Self {
        Self {
            next: NextState::Stay,
            effect: Effect::Reprompt(state),
        }
    }

    pub fn ignore() -> Self {
        Self {
            next: NextState::Stay,
            effect: Effect::None,
        }
    }

    /// Return to the confirmation step and show the refreshed preview
    pub fn back_to_confirmation() -> Self {
        Self::go(SubmissionState::Confirmation, Effect::Preview)
    }
}

/// Apply `event` to a session in `state`, mutating `draft` on legal transitions
pub fn apply(state: SubmissionState, event: Event, draft: &mut Draft) -> Transition {
    match event {
        Event::Submit => {
            *draft = Draft::default();
            return Transition::go(
                SubmissionState::AskLocation,
                Effect::Ask(DraftField::Location),
            );
        }
        Event::Cancel => return Transition::finish(Effect::Cancelled),
        _ => {}
    }

    match event.input_kind() {
        Some(kind) if state.accepts(kind) => {}
        _ => {
            debug!(state = ?state, event = ?event, "Input kind not accepted, re-prompting");
            return Transition::reprompt(state);
        }
    }

    if state.is_editing() {
        return edit_router::apply(state, event, draft);
    }

    match (state, event) {
        (SubmissionState::AskLocation, Event::Text(text)) => {
            if !draft.set_text(DraftField::Location, &text) {
                return Transition::reprompt(state);
            }
            Transition::go(
                SubmissionState::AskClearTime,
                Effect::Ask(DraftField::ClearTime),
            )
        }
        (SubmissionState::AskClearTime, Event::Text(text)) => {
            if !draft.set_text(DraftField::ClearTime, &text) {
                return Transition::reprompt(state);
            }
            Transition::go(
                SubmissionState::AskAdditionalInfo,
                Effect::Ask(DraftField::AdditionalInfo),
            )
        }
        (SubmissionState::AskAdditionalInfo, Event::Text(text)) => {
            // Blank additional info is allowed, so this always succeeds
            draft.set_text(DraftField::AdditionalInfo, &text);
            Transition::go(SubmissionState::AskPhoto, Effect::Ask(DraftField::Photo))
        }
        (SubmissionState::AskAdditionalInfo, Event::Button(CallbackTag::SkipAdditionalInfo)) => {
            draft.additional_info.clear();
            Transition::go(SubmissionState::AskPhoto, Effect::Ask(DraftField::Photo))
        }
        (SubmissionState::AskPhoto, Event::Photo(photo)) => {
            draft.set_photo(photo);
            Transition::back_to_confirmation()
        }
        (SubmissionState::Confirmation, Event::Button(CallbackTag::Submit)) => {
            Transition::finish(Effect::Publish)
        }
        (SubmissionState::Confirmation, Event::Button(CallbackTag::Edit)) => {
            Transition::go(SubmissionState::EditChoice, Effect::EditMenu)
        }
        (state, event) => {
            debug!(state = ?state, event = ?event, "No transition for event, ignoring");
            Transition::ignore()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::PhotoRef;

    #[test]
    fn test_text_advances_from_location() {
        let mut draft = Draft::default();
        let transition = apply(
            SubmissionState::AskLocation,
            Event::Text("Arc B2".to_string()),
            &mut draft,
        );
        assert_eq!(
            transition,
            Transition::go(
                SubmissionState::AskClearTime,
                Effect::Ask(DraftField::ClearTime)
            )
        );
        assert_eq!(draft.location, "Arc B2");
    }

    #[test]
    fn test_photo_in_location_state_reprompts() {
        let mut draft = Draft::default();
        let transition = apply(
            SubmissionState::AskLocation,
            Event::Photo(PhotoRef::new("p")),
            &mut draft,
        );
        assert_eq!(transition, Transition::reprompt(SubmissionState::AskLocation));
        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn test_blank_location_reprompts() {
        let mut draft = Draft::default();
        let transition = apply(
            SubmissionState::AskLocation,
            Event::Text(" \u{3000} ".to_string()),
            &mut draft,
        );
        assert_eq!(transition, Transition::reprompt(SubmissionState::AskLocation));
        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn test_unknown_button_in_confirmation_is_ignored() {
        let mut draft = Draft::default();
        let transition = apply(
            SubmissionState::Confirmation,
            Event::Button(CallbackTag::EditLocation),
            &mut draft,
        );
        assert_eq!(transition, Transition::ignore());
    }

    #[test]
    fn test_cancel_finishes_from_any_state() {
        let mut draft = Draft::default();
        let transition = apply(SubmissionState::EditPhoto, Event::Cancel, &mut draft);
        assert_eq!(transition, Transition::finish(Effect::Cancelled));
    }
}
