pub mod listing;
pub mod pagination;
pub mod phone;
pub mod quiz_selector;
pub mod validators;
