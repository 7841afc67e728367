pub mod error_banner;
pub mod field_errors;
pub mod stat_card;

pub use error_banner::ErrorBanner;
pub use field_errors::FieldErrors;
pub use stat_card::StatCard;
