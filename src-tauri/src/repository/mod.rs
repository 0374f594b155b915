//! Repository Layer
//!
//! Data access abstractions and implementations.

mod todo_repo;
mod traits;


pub use todo_repo::TodoRepository;
pub use traits::Repository;
