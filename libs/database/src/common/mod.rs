//! Types shared by every backend

mod error;

pub use error::{DatabaseError, DatabaseResult};
