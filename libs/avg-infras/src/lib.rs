pub mod config;
pub mod external;
