// src/models/mod.rs

pub mod artist;
pub mod category;
pub mod form;
pub mod question;
pub mod show;
pub mod venue;
