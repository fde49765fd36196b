pub mod api;
pub mod components;
pub mod date_utils;
pub mod list_view;
pub mod mutation;
