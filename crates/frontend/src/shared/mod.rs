pub mod api_utils;
pub mod components;
pub mod crud;
pub mod data_table;
pub mod date_utils;
pub mod form_utils;
pub mod icons;
pub mod list_utils;
