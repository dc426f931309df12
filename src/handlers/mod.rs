pub mod health;
pub mod journals;
pub mod summarize;
pub mod users;
