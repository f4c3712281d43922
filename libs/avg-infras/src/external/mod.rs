pub mod mock_numbers;
pub mod number_service;

pub use number_service::{FetchError, NumberServiceClient};
