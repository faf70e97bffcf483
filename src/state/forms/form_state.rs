//! Prompt form values and focus handling

use super::field::{FieldKind, FieldName};
use crate::prompt::{
    next_option, prev_option, render_prompt, DEFAULT_DETAIL_LEVEL, DEFAULT_DIAGRAM_TYPE,
};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The values that drive prompt generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub diagram_type: String,
    pub selection: String,
    pub detail_level: String,
    pub notes: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            diagram_type: DEFAULT_DIAGRAM_TYPE.to_string(),
            selection: String::new(),
            detail_level: DEFAULT_DETAIL_LEVEL.to_string(),
            notes: String::new(),
        }
    }
}

/// A single-field change, consumed by [`FormState::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: FieldName,
    pub value: String,
}

impl FieldUpdate {
    pub fn new(field: FieldName, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl FormState {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::DiagramType => &self.diagram_type,
            FieldName::Selection => &self.selection,
            FieldName::DetailLevel => &self.detail_level,
            FieldName::Notes => &self.notes,
        }
    }

    /// Store `value` in one field. Values are never validated, so a choice
    /// field may hold something its selector does not offer.
    pub fn apply(&mut self, update: FieldUpdate) {
        let FieldUpdate { field, value } = update;
        let slot = match field {
            FieldName::DiagramType => &mut self.diagram_type,
            FieldName::Selection => &mut self.selection,
            FieldName::DetailLevel => &mut self.detail_level,
            FieldName::Notes => &mut self.notes,
        };
        *slot = value;
    }

    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.apply(FieldUpdate::new(field, value));
    }

    pub fn render_prompt(&self) -> String {
        render_prompt(self)
    }
}

/// The prompt form: values plus keyboard focus.
///
/// Focus indices 0..=3 are the fields in [`FieldName::ALL`] order, index 4
/// is the Copy Prompt button.
#[derive(Debug, Clone, Default)]
pub struct PromptForm {
    pub values: FormState,
    pub active_field_index: usize,
}

impl PromptForm {
    pub const COPY_BUTTON_INDEX: usize = FieldName::ALL.len();

    pub fn new(values: FormState) -> Self {
        Self {
            values,
            active_field_index: 0,
        }
    }

    /// Field under focus, `None` when the Copy Prompt button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_copy_button_active(&self) -> bool {
        self.active_field_index == Self::COPY_BUTTON_INDEX
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field_name()
            .is_some_and(|field| field.is_multiline())
    }

    /// Move the focused selector to its next (or previous) option.
    /// Does nothing when a text field or the button is focused.
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        if let FieldKind::Choice(options) = field.kind() {
            let current = self.values.get(field);
            let value = if forward {
                next_option(options, current)
            } else {
                prev_option(options, current)
            };
            tracing::debug!(%field, value, "Option changed");
            self.values.update_field(field, value);
        }
    }

    /// Append text to the focused text field
    pub fn insert_str(&mut self, text: &str) {
        let Some(field) = self.active_text_field() else {
            return;
        };
        let mut value = self.values.get(field).to_string();
        value.push_str(text);
        self.values.update_field(field, value);
    }

    pub fn input_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    pub fn newline(&mut self) {
        if self.is_active_field_multiline() {
            self.insert_str("\n");
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.active_text_field() else {
            return;
        };
        let mut value = self.values.get(field).to_string();
        if value.pop().is_some() {
            self.values.update_field(field, value);
        }
    }

    fn active_text_field(&self) -> Option<FieldName> {
        self.active_field_name()
            .filter(|field| matches!(field.kind(), FieldKind::Text { .. }))
    }
}

impl Form for PromptForm {
    fn field_count(&self) -> usize {
        5 // four fields, copy button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::COPY_BUTTON_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus(form: &mut PromptForm, field: FieldName) {
        let index = FieldName::ALL.iter().position(|f| *f == field).unwrap();
        form.set_active_field(index);
    }

    mod form_state {
        use super::*;

        #[test]
        fn test_defaults() {
            let state = FormState::default();
            assert_eq!(state.diagram_type, "sequence diagram");
            assert_eq!(state.selection, "");
            assert_eq!(state.detail_level, "intermediate");
            assert_eq!(state.notes, "");
        }

        #[test]
        fn test_update_leaves_other_fields_untouched() {
            let mut state = FormState::default();
            state.update_field(FieldName::Selection, "order checkout");
            state.update_field(FieldName::Notes, "show retries");
            let before = state.clone();

            state.update_field(FieldName::DetailLevel, "detailed");

            assert_eq!(state.detail_level, "detailed");
            assert_eq!(state.diagram_type, before.diagram_type);
            assert_eq!(state.selection, before.selection);
            assert_eq!(state.notes, before.notes);
        }

        #[test]
        fn test_apply_accepts_out_of_set_values() {
            let mut state = FormState::default();
            state.apply(FieldUpdate::new(FieldName::DiagramType, "quadrant chart"));
            state.apply(FieldUpdate::new(FieldName::DetailLevel, "exhaustive"));

            assert_eq!(state.get(FieldName::DiagramType), "quadrant chart");
            assert_eq!(state.get(FieldName::DetailLevel), "exhaustive");
            assert!(state.render_prompt().contains("**Mermaid quadrant chart**"));
        }

        #[test]
        fn test_get_returns_each_field() {
            let state = FormState {
                diagram_type: "pie".to_string(),
                selection: "budget".to_string(),
                detail_level: "basic".to_string(),
                notes: "percentages".to_string(),
            };
            assert_eq!(state.get(FieldName::DiagramType), "pie");
            assert_eq!(state.get(FieldName::Selection), "budget");
            assert_eq!(state.get(FieldName::DetailLevel), "basic");
            assert_eq!(state.get(FieldName::Notes), "percentages");
        }
    }

    mod prompt_form {
        use super::*;

        #[test]
        fn test_new_focuses_first_field() {
            let form = PromptForm::default();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_field_name(), Some(FieldName::DiagramType));
            assert!(!form.is_copy_button_active());
        }

        #[test]
        fn test_field_count() {
            let form = PromptForm::default();
            assert_eq!(form.field_count(), 5);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = PromptForm::default();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_copy_button() {
            let mut form = PromptForm::default();
            form.prev_field();
            assert!(form.is_copy_button_active());
            assert_eq!(form.active_field_name(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = PromptForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, PromptForm::COPY_BUTTON_INDEX);
        }

        #[test]
        fn test_cycle_option_on_selector() {
            let mut form = PromptForm::default();
            focus(&mut form, FieldName::DetailLevel);

            form.cycle_option(true);
            assert_eq!(form.values.detail_level, "detailed");
            form.cycle_option(true);
            assert_eq!(form.values.detail_level, "basic");
            form.cycle_option(false);
            assert_eq!(form.values.detail_level, "detailed");
        }

        #[test]
        fn test_cycle_option_ignored_on_text_field() {
            let mut form = PromptForm::default();
            focus(&mut form, FieldName::Selection);
            form.cycle_option(true);
            assert_eq!(form.values, FormState::default());
        }

        #[test]
        fn test_typing_into_text_field() {
            let mut form = PromptForm::default();
            focus(&mut form, FieldName::Selection);
            for c in "login".chars() {
                form.input_char(c);
            }
            form.newline();
            form.input_char('é');
            form.backspace();
            form.input_char('x');

            assert_eq!(form.values.selection, "login\nx");
        }

        #[test]
        fn test_typing_ignored_on_selector() {
            let mut form = PromptForm::default();
            form.input_char('x');
            form.backspace();
            form.newline();
            assert_eq!(form.values, FormState::default());
        }

        #[test]
        fn test_backspace_on_empty_field() {
            let mut form = PromptForm::default();
            focus(&mut form, FieldName::Notes);
            form.backspace();
            assert_eq!(form.values.notes, "");
        }

        #[test]
        fn test_insert_str_appends_pasted_text() {
            let mut form = PromptForm::default();
            focus(&mut form, FieldName::Notes);
            form.insert_str("use swimlanes");
            form.insert_str(", left to right");
            assert_eq!(form.values.notes, "use swimlanes, left to right");
        }

        #[test]
        fn test_copy_button_ignores_edits() {
            let mut form = PromptForm::default();
            form.set_active_field(PromptForm::COPY_BUTTON_INDEX);
            form.insert_str("text");
            form.cycle_option(true);
            assert_eq!(form.values, FormState::default());
        }
    }
}
