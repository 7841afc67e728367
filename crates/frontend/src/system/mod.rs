pub mod health;
pub mod knowledge;
pub mod maintenance;
pub mod reports;
pub mod test_chat;
