pub mod api;
mod page;

pub use page::FaqPage;
