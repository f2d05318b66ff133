//! Domain Layer
//!
//! Pure types and rules for the release ledger and activation protocol.
//! Nothing in here spawns processes or touches the filesystem; the
//! infrastructure layer implements the ports declared in [`ports`].

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
