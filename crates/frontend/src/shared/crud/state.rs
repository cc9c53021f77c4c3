use contracts::domain::common::ValidationErrors;

/// Last known-good collection plus the error of the latest fetch/mutation
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loaded: false,
            error: None,
        }
    }
}

impl<T> CollectionState<T> {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// A failed fetch keeps the previous items
    pub fn fetched(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

/// Create/edit dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    Open {
        /// `None` creates a record
        editing: Option<i32>,
        error: Option<String>,
        field_errors: ValidationErrors,
        submitting: bool,
    },
}

impl DialogState {
    pub fn open(editing: Option<i32>) -> Self {
        DialogState::Open {
            editing,
            error: None,
            field_errors: ValidationErrors::default(),
            submitting: false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open { .. })
    }

    pub fn editing(&self) -> Option<i32> {
        match self {
            DialogState::Open { editing, .. } => *editing,
            DialogState::Closed => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, DialogState::Open { submitting: true, .. })
    }

    pub fn error(&self) -> Option<String> {
        match self {
            DialogState::Open { error, .. } => error.clone(),
            DialogState::Closed => None,
        }
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        match self {
            DialogState::Open { field_errors, .. } => field_errors.get(field).map(str::to_string),
            DialogState::Closed => None,
        }
    }

    /// Client-side validation failed: nothing is sent
    pub fn reject(&mut self, errors: ValidationErrors) {
        if let DialogState::Open {
            field_errors,
            error,
            submitting,
            ..
        } = self
        {
            *field_errors = errors;
            *error = None;
            *submitting = false;
        }
    }

    pub fn begin_submit(&mut self) {
        if let DialogState::Open {
            field_errors,
            error,
            submitting,
            ..
        } = self
        {
            *field_errors = ValidationErrors::default();
            *error = None;
            *submitting = true;
        }
    }

    /// The server refused the mutation; the dialog stays open
    pub fn submit_failed(&mut self, message: String, fields: ValidationErrors) {
        if let DialogState::Open {
            field_errors,
            error,
            submitting,
            ..
        } = self
        {
            *field_errors = fields;
            *error = Some(message);
            *submitting = false;
        }
    }

    pub fn close(&mut self) {
        *self = DialogState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_fetch_keeps_items() {
        let mut state = CollectionState::default();
        state.begin_fetch();
        state.fetched(Ok(vec!["Lancha", "Veleiro"]));
        assert!(state.loaded);

        state.begin_fetch();
        state.fetched(Err("Ocorreu um erro".to_string()));
        assert_eq!(state.items, vec!["Lancha", "Veleiro"]);
        assert_eq!(state.error.as_deref(), Some("Ocorreu um erro"));
        assert!(!state.loading);

        state.fetched(Ok(vec!["Lancha"]));
        assert_eq!(state.error, None);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_rejected_form_stays_open() {
        let mut dialog = DialogState::open(None);
        let mut errors = ValidationErrors::new();
        errors.push("name", "Nome é obrigatório");
        dialog.reject(errors);
        assert!(dialog.is_open());
        assert!(!dialog.is_submitting());
        assert_eq!(dialog.field_error("name").as_deref(), Some("Nome é obrigatório"));
    }

    #[test]
    fn test_server_failure_keeps_dialog_open() {
        let mut dialog = DialogState::open(Some(7));
        dialog.begin_submit();
        assert!(dialog.is_submitting());
        dialog.submit_failed("País com este código já existe".into(), ValidationErrors::default());
        assert!(dialog.is_open());
        assert_eq!(dialog.editing(), Some(7));
        assert_eq!(dialog.error().as_deref(), Some("País com este código já existe"));
        assert!(!dialog.is_submitting());
    }

    #[test]
    fn test_transitions_on_closed_dialog_are_ignored() {
        let mut dialog = DialogState::Closed;
        dialog.begin_submit();
        dialog.submit_failed("x".into(), ValidationErrors::default());
        assert_eq!(dialog, DialogState::Closed);
        assert_eq!(dialog.error(), None);
    }
}
