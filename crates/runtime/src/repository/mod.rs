//! Save persistence.
//!
//! [`SaveRepository`] is the contract; [`FileSaveRepository`] writes JSON
//! files and [`InMemorySaveRepository`] backs tests.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;
pub use traits::SaveRepository;
pub use types::{SAVE_VERSION, SaveFile};
