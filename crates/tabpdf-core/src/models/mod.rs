pub mod credentials;
pub mod export;
pub mod listing;
