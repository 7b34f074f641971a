//! Kitstrap SDK - Lightweight interfaces for embedding the bootstrap core
//!
//! This crate provides the minimal traits an embedding application (or a
//! collaborator implementation) needs to plug into the kitstrap boot
//! sequence without depending on the full runtime:
//!
//! - [`Interp`]: handle to one interpreter instance of the embedded
//!   scripting engine (variable table, environment view, result slot)
//! - [`ScriptEngine`] / [`UiToolkit`]: the two engine initializers driven
//!   by the boot sequence
//! - [`VfsDriver`]: the archive filesystem driver that exposes the
//!   executable's appended archive as a path hierarchy
//! - [`StaticExtension`]: optional bundled sub-toolkits registered after a
//!   successful UI init
//!
//! The runtime crate only ever talks to collaborators through these seams,
//! so embedders can substitute any implementation (including test doubles).

#![warn(missing_docs)]

mod error;
mod interp;
mod services;

pub use error::{InitError, InitResult};
pub use interp::Interp;
pub use services::{ScriptEngine, StaticExtension, UiToolkit, VfsDriver};
