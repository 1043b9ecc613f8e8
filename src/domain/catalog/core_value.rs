//! CoreValue - a value people across the political spectrum may prioritize.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ValidationError, ValueId};

/// A candidate core value the quiz can attribute to a user.
///
/// Besides display metadata, each value carries how it is commonly expressed
/// on the left and on the right, and the ground both sides share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreValue {
    pub id: ValueId,
    pub name: String,
    pub description: String,
    /// Icon reference understood by the rendering layer (e.g. an SF Symbol name).
    pub icon: String,
    /// How progressives often express this value.
    pub left_frame: String,
    /// How conservatives often express this value.
    pub right_frame: String,
    /// Where both sides meet.
    pub common_ground: String,
}

impl CoreValue {
    /// Creates a value with display metadata only.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = ValueId::try_new(id)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            icon: icon.into(),
            left_frame: String::new(),
            right_frame: String::new(),
            common_ground: String::new(),
        })
    }

    /// Adds the left/right framings and their common ground.
    pub fn with_frames(
        mut self,
        left_frame: impl Into<String>,
        right_frame: impl Into<String>,
        common_ground: impl Into<String>,
    ) -> Self {
        self.left_frame = left_frame.into();
        self.right_frame = right_frame.into();
        self.common_ground = common_ground.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_id_and_name() {
        assert!(CoreValue::new("", "Fairness", "scale.3d", "").is_err());
        assert!(CoreValue::new("fairness", " ", "scale.3d", "").is_err());
    }

    #[test]
    fn with_frames_fills_framing_fields() {
        let value = CoreValue::new("voice", "Having a Voice", "megaphone.fill", "Be heard.")
            .unwrap()
            .with_frames("left", "right", "shared");

        assert_eq!(value.id.as_str(), "voice");
        assert_eq!(value.left_frame, "left");
        assert_eq!(value.right_frame, "right");
        assert_eq!(value.common_ground, "shared");
    }
}
