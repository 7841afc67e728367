pub mod appointment;
pub mod branch;
pub mod chat;
pub mod diagnostics;
pub mod doctor;
pub mod faq;
pub mod knowledge;
pub mod maintenance;
pub mod offer;
pub mod reports;
pub mod service;
