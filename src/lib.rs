pub mod error;
pub mod min_max;
pub mod pair;

pub use error::{Error, Result};
pub use min_max::{max_comparisons, min_max, min_max_by, min_max_by_key};
pub use pair::Pair;
