pub mod appointments;
pub mod branches;
pub mod doctors;
pub mod faq;
pub mod offers;
pub mod services;
