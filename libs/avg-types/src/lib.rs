pub mod number_type;

pub use number_type::{NumberType, ParseNumberTypeError};
