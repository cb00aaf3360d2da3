//! Asynchronous validation against the backend.

pub mod remote;

pub use remote::{CampoUnico, RemoteUniquenessValidator};
