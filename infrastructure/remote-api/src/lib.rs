pub mod client;
pub mod country_directory;
pub mod dto;
pub mod user_gateway;
