/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Photo attachments picked by the user.

use reqwest::multipart::Part;

use crate::error::SubmitError;

/// A file the user attached to the inspection request.
///
/// Only the declared content type is checked; the bytes are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// True when the declared content type is `image/*`.
    pub fn is_image(&self) -> bool {
        self.content_type
            .trim()
            .get(..6)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
    }

    /// Multipart field name for the attachment at `index` (`photo_1`, `photo_2`, ...).
    pub fn part_name(index: usize) -> String {
        format!("photo_{}", index + 1)
    }

    pub(crate) fn to_part(&self) -> Result<Part, SubmitError> {
        Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.content_type)
            .map_err(|err| SubmitError::InvalidAttachment {
                file_name: self.file_name.clone(),
                reason: err.to_string(),
            })
    }
}
