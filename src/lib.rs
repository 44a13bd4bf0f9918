//! devprep core: question records, persistence and derived statistics
//!
//! The crate is organized as:
//! - [`questions`]: the data model, the single-slot JSON store and the
//!   read-modify-write CRUD repository over it
//! - [`stats`]: pure aggregate computations (dashboard numbers, topic
//!   breakdown, filtering) over an in-memory snapshot
//! - [`context`]: the cached, id-indexed state container that frontends
//!   hold and mutate through

pub mod context;
pub mod questions;
pub mod stats;
