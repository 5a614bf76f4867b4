//! Note storage backends.
//!
//! Two [`nb_core::NoteStore`] implementations live here: the durable
//! [`PostgresNoteStore`] and the infrastructure-free [`MemoryNoteStore`],
//! plus the startup connection supervisor.

pub mod memory;
pub mod postgres;
pub mod supervisor;

pub use memory::MemoryNoteStore;
pub use postgres::PostgresNoteStore;
pub use supervisor::{RetryPolicy, establish};
