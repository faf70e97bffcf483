//! Form field identifiers and descriptors

use crate::prompt::{DETAIL_LEVELS, DIAGRAM_TYPES};
use std::fmt;

/// How a field collects its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single choice from a fixed option list
    Choice(&'static [&'static str]),
    /// Free text
    Text { multiline: bool },
}

/// The four fields of the prompt form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    DiagramType,
    Selection,
    DetailLevel,
    Notes,
}

impl FieldName {
    /// Fields in the order they are laid out on screen
    pub const ALL: [FieldName; 4] = [
        FieldName::DiagramType,
        FieldName::Selection,
        FieldName::DetailLevel,
        FieldName::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DiagramType => "diagramType",
            Self::Selection => "selection",
            Self::DetailLevel => "detailLevel",
            Self::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DiagramType => "Diagram Type",
            Self::Selection => "Selection",
            Self::DetailLevel => "Level of Detail",
            Self::Notes => "Notes",
        }
    }

    /// Hint shown in an empty, unfocused field
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::DiagramType | Self::DetailLevel => "Select",
            Self::Selection => "Describe what to illustrate",
            Self::Notes => "Any additional notes or context",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::DiagramType => FieldKind::Choice(DIAGRAM_TYPES),
            Self::DetailLevel => FieldKind::Choice(DETAIL_LEVELS),
            Self::Selection | Self::Notes => FieldKind::Text { multiline: true },
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind(), FieldKind::Text { multiline: true })
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_fields_use_option_lists() {
        assert_eq!(FieldName::DiagramType.kind(), FieldKind::Choice(DIAGRAM_TYPES));
        assert_eq!(FieldName::DetailLevel.kind(), FieldKind::Choice(DETAIL_LEVELS));
    }

    #[test]
    fn test_text_fields_are_multiline() {
        assert!(FieldName::Selection.is_multiline());
        assert!(FieldName::Notes.is_multiline());
        assert!(!FieldName::DiagramType.is_multiline());
    }

    #[test]
    fn test_display_uses_field_name() {
        assert_eq!(FieldName::DetailLevel.to_string(), "detailLevel");
    }
}
