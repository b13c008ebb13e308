//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::dialogue::{CallbackTag, SubmissionState};
use crate::draft::DraftField;
use crate::localization::t;
use crate::renderer::{fit_caption, MAX_CAPTION_CHARS};

fn button(label_key: &str, tag: CallbackTag) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(t(label_key), tag.as_str())
}

/// Prompt for a field in the main flow
pub fn ask_text(field: DraftField) -> String {
    match field {
        DraftField::Location => t("prompt-location"),
        DraftField::ClearTime => t("prompt-clear-time"),
        DraftField::AdditionalInfo => t("prompt-additional-info"),
        DraftField::Photo => t("prompt-photo"),
    }
}

/// Prompt for a replacement value during editing
pub fn replacement_text(field: DraftField) -> String {
    match field {
        DraftField::Location => t("prompt-new-location"),
        DraftField::ClearTime => t("prompt-new-clear-time"),
        DraftField::AdditionalInfo => t("prompt-new-additional-info"),
        DraftField::Photo => t("prompt-new-photo"),
    }
}

/// Message sent when the input kind does not fit `state`
pub fn reprompt_text(state: SubmissionState) -> String {
    match state.field() {
        Some(DraftField::Location) => t("reprompt-location"),
        Some(DraftField::ClearTime) => t("reprompt-clear-time"),
        Some(DraftField::AdditionalInfo) => t("reprompt-additional-info"),
        Some(DraftField::Photo) => t("reprompt-photo"),
        None => t("reprompt-buttons"),
    }
}

/// Keyboard offering to skip the additional info
pub fn skip_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![button(
        "button-skip",
        CallbackTag::SkipAdditionalInfo,
    )]])
}

/// Preview caption: the report followed by the confirmation question
pub fn preview_caption(report: &str) -> String {
    fit_caption(
        &format!("{}\n{}", report, t("preview-confirm")),
        MAX_CAPTION_CHARS,
    )
}

/// Edit / Submit keyboard attached to the preview
pub fn preview_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![button("button-edit", CallbackTag::Edit)],
        vec![button("button-submit", CallbackTag::Submit)],
    ])
}

/// One button per editable field plus "Done Editing"
pub fn edit_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![button("button-location", CallbackTag::EditLocation)],
        vec![button("button-clear-time", CallbackTag::EditClearTime)],
        vec![button("button-additional-info", CallbackTag::EditAdditionalInfo)],
        vec![button("button-photo", CallbackTag::EditPhoto)],
        vec![button("button-done-editing", CallbackTag::DoneEditing)],
    ])
}
