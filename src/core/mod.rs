pub mod showcase;

pub use crate::domain::model::{City, Customer};
pub use crate::domain::ports::ProfileProvider;
pub use crate::utils::error::Result;
