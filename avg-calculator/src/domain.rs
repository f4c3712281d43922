pub mod model;
pub mod service;
pub mod window;
pub mod window_store;
