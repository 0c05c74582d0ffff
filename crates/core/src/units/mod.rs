//! Time, weight and temperature conversion tables.

pub mod category;
pub mod converter;
pub mod error;
pub mod temperature;
pub mod time;
pub mod transform;
pub mod weight;


pub use category::Category;
pub use converter::convert;
pub use error::UnitError;
pub use transform::{Conversion, Transform};
