//! Draft module holding the in-progress food sighting for one chat.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a photo already uploaded to Telegram (its file id)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef(pub String);

impl PhotoRef {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self(file_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The fields a user can fill in or revise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    Location,
    ClearTime,
    AdditionalInfo,
    Photo,
}

impl DraftField {
    /// Whether a draft must carry a non-empty value for this field
    pub fn is_required(&self) -> bool {
        !matches!(self, DraftField::AdditionalInfo)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DraftField::Location => "location",
            DraftField::ClearTime => "clear_time",
            DraftField::AdditionalInfo => "additional_info",
            DraftField::Photo => "photo",
        };
        f.write_str(name)
    }
}

/// A food sighting being assembled through the dialogue
///
/// `location`, `clear_time` and `photo` are required before the draft can be
/// previewed or published. `additional_info` stays empty when skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub location: String,
    pub clear_time: String,
    pub additional_info: String,
    pub photo: Option<PhotoRef>,
}

impl Draft {
    /// Overwrite one of the text fields, trimming surrounding whitespace
    ///
    /// Returns `false` and leaves the draft untouched for
    /// [`DraftField::Photo`], which is not a text field, and for a required
    /// field whose text is blank after trimming.
    pub fn set_text(&mut self, field: DraftField, text: &str) -> bool {
        let value = text.trim();
        if value.is_empty() && field.is_required() {
            return false;
        }

        let value = value.to_string();
        match field {
            DraftField::Location => self.location = value,
            DraftField::ClearTime => self.clear_time = value,
            DraftField::AdditionalInfo => self.additional_info = value,
            DraftField::Photo => return false,
        }
        true
    }

    pub fn set_photo(&mut self, photo: PhotoRef) {
        self.photo = Some(photo);
    }

    /// First required field that is still unset, if any
    pub fn missing_field(&self) -> Option<DraftField> {
        if self.location.is_empty() {
            Some(DraftField::Location)
        } else if self.clear_time.is_empty() {
            Some(DraftField::ClearTime)
        } else if self.photo.is_none() {
            Some(DraftField::Photo)
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}
