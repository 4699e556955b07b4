/// CustomError implementation: construction, Display, Error.
pub mod custom_error;
