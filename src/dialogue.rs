//! Submission dialogue module: conversation states, inbound events and callback tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::draft::{DraftField, PhotoRef};

/// Represents where a chat currently is in the submission dialogue
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    AskLocation,
    AskClearTime,
    AskAdditionalInfo,
    AskPhoto,
    Confirmation,
    EditChoice,
    EditLocation,
    EditClearTime,
    EditAdditionalInfo,
    EditPhoto,
}

/// The kind of input a state is waiting for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Photo,
    Button,
}

impl SubmissionState {
    /// Edit state collecting a replacement for `field`
    pub fn editing(field: DraftField) -> Self {
        match field {
            DraftField::Location => SubmissionState::EditLocation,
            DraftField::ClearTime => SubmissionState::EditClearTime,
            DraftField::AdditionalInfo => SubmissionState::EditAdditionalInfo,
            DraftField::Photo => SubmissionState::EditPhoto,
        }
    }

    /// The draft field this state collects, if it collects one
    pub fn field(&self) -> Option<DraftField> {
        match self {
            SubmissionState::AskLocation | SubmissionState::EditLocation => {
                Some(DraftField::Location)
            }
            SubmissionState::AskClearTime | SubmissionState::EditClearTime => {
                Some(DraftField::ClearTime)
            }
            SubmissionState::AskAdditionalInfo | SubmissionState::EditAdditionalInfo => {
                Some(DraftField::AdditionalInfo)
            }
            SubmissionState::AskPhoto | SubmissionState::EditPhoto => Some(DraftField::Photo),
            SubmissionState::Confirmation | SubmissionState::EditChoice => None,
        }
    }

    /// States owned by the edit sub-flow
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            SubmissionState::EditChoice
                | SubmissionState::EditLocation
                | SubmissionState::EditClearTime
                | SubmissionState::EditAdditionalInfo
                | SubmissionState::EditPhoto
        )
    }

    /// Whether an input of `kind` is legal here.
    /// `AskAdditionalInfo` takes text or the Skip button.
    pub fn accepts(&self, kind: InputKind) -> bool {
        match self {
            SubmissionState::AskAdditionalInfo => {
                matches!(kind, InputKind::Text | InputKind::Button)
            }
            SubmissionState::Confirmation | SubmissionState::EditChoice => {
                kind == InputKind::Button
            }
            SubmissionState::AskPhoto | SubmissionState::EditPhoto => kind == InputKind::Photo,
            SubmissionState::AskLocation
            | SubmissionState::AskClearTime
            | SubmissionState::EditLocation
            | SubmissionState::EditClearTime
            | SubmissionState::EditAdditionalInfo => kind == InputKind::Text,
        }
    }
}

/// Fixed callback data attached to inline keyboard buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallbackTag {
    SkipAdditionalInfo,
    Submit,
    Edit,
    EditLocation,
    EditClearTime,
    EditAdditionalInfo,
    EditPhoto,
    DoneEditing,
}

impl CallbackTag {
    pub const ALL: [CallbackTag; 8] = [
        CallbackTag::SkipAdditionalInfo,
        CallbackTag::Submit,
        CallbackTag::Edit,
        CallbackTag::EditLocation,
        CallbackTag::EditClearTime,
        CallbackTag::EditAdditionalInfo,
        CallbackTag::EditPhoto,
        CallbackTag::DoneEditing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackTag::SkipAdditionalInfo => "skip_additional_info",
            CallbackTag::Submit => "submit",
            CallbackTag::Edit => "edit",
            CallbackTag::EditLocation => "edit_location",
            CallbackTag::EditClearTime => "edit_cleartime",
            CallbackTag::EditAdditionalInfo => "edit_additionalinfo",
            CallbackTag::EditPhoto => "edit_photo",
            CallbackTag::DoneEditing => "done_editing",
        }
    }

    /// Field targeted by one of the edit-menu buttons
    pub fn edit_target(&self) -> Option<DraftField> {
        match self {
            CallbackTag::EditLocation => Some(DraftField::Location),
            CallbackTag::EditClearTime => Some(DraftField::ClearTime),
            CallbackTag::EditAdditionalInfo => Some(DraftField::AdditionalInfo),
            CallbackTag::EditPhoto => Some(DraftField::Photo),
            _ => None,
        }
    }
}

impl fmt::Display for CallbackTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown callback data: {0}")]
pub struct UnknownCallbackTag(pub String);

impl FromStr for CallbackTag {
    type Err = UnknownCallbackTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CallbackTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownCallbackTag(s.to_string()))
    }
}

/// A typed inbound event for one chat
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// `/submit`: start (or restart) a submission
    Submit,
    /// `/cancel`: drop the current submission
    Cancel,
    Text(String),
    Photo(PhotoRef),
    Button(CallbackTag),
    /// Any other message (sticker, document, voice, ...)
    OtherMessage,
}

impl Event {
    /// Input kind carried by the event; commands have none and
    /// `OtherMessage` never matches a state's expected kind.
    pub fn input_kind(&self) -> Option<InputKind> {
        match self {
            Event::Text(_) => Some(InputKind::Text),
            Event::Photo(_) => Some(InputKind::Photo),
            Event::Button(_) => Some(InputKind::Button),
            Event::Submit | Event::Cancel | Event::OtherMessage => None,
        }
    }
}
