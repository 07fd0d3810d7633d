use super::form::{FormError, FormField, PenguinForm};
use super::notifications::DeletePrompt;
use crate::model::penguin::Penguin;

/// Everything the catalog page renders from.
///
/// `records` is only ever replaced as a whole by a reload, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    /// Last snapshot returned by the store, in store order.
    pub records: Vec<Penguin>,
    pub is_loading: bool,
    pub is_modal_open: bool,
    /// The record the form is editing; `None` while adding.
    pub editing: Option<Penguin>,
    pub form: PenguinForm,
    /// Required inputs left blank at the last submit attempt.
    pub form_errors: Vec<FormError>,
    /// Record awaiting delete confirmation.
    pub pending_delete: Option<Penguin>,
}

impl CatalogState {
    /// The "no penguins found" placeholder is hidden while a load is in flight.
    pub fn show_empty_state(&self) -> bool {
        self.records.is_empty() && !self.is_loading
    }

    pub fn form_title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Penguin"
        } else {
            "Add New Penguin"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update Penguin"
        } else {
            "Add Penguin"
        }
    }

    pub fn delete_prompt(&self) -> Option<DeletePrompt> {
        self.pending_delete.as_ref().map(DeletePrompt::for_penguin)
    }

    pub fn error_for(&self, field: FormField) -> Option<&'static str> {
        self.form_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub(crate) fn reset_form(&mut self) {
        self.editing = None;
        self.form = PenguinForm::default();
        self.form_errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_penguins;

    #[test]
    fn test_empty_state_hidden_while_loading() {
        let mut state = CatalogState::default();
        assert!(state.show_empty_state());

        state.is_loading = true;
        assert!(!state.show_empty_state());

        state.is_loading = false;
        let [emperor, ..] = default_penguins();
        state.records = vec![emperor.with_id("a")];
        assert!(!state.show_empty_state());
    }

    #[test]
    fn test_titles_follow_edit_mode() {
        let mut state = CatalogState::default();
        assert_eq!(state.form_title(), "Add New Penguin");
        assert_eq!(state.submit_label(), "Add Penguin");

        let [_, king, _] = default_penguins();
        state.editing = Some(king.with_id("k"));
        assert_eq!(state.form_title(), "Edit Penguin");
        assert_eq!(state.submit_label(), "Update Penguin");
    }
}
