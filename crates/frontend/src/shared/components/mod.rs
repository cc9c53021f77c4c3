pub mod confirm_dialog;
pub mod form_dialog;
pub mod form_field;
pub mod modal;
pub mod page_header;
pub mod row_actions;

pub use confirm_dialog::ConfirmDialog;
pub use form_dialog::FormDialog;
pub use form_field::FormField;
pub use modal::Modal;
pub use page_header::PageHeader;
pub use row_actions::RowActions;
