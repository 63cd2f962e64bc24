//! Profile/coordinate store and its JSON persistence
//!
//! - **model**: Profile, Coordinate and the numeric component type
//! - **state**: the Store itself, with write-through saving and import/export
//! - **error**: StoreError and the user-facing ErrorKind

pub mod error;
pub mod model;
pub mod state;

pub use error::{ErrorKind, StoreError, StoreResult};
pub use model::{Coordinate, CoordinateInput, Number, Profile};
pub use state::{ImportMode, ProfileMap, Store};
