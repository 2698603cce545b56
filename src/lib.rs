// alcloader/src/lib.rs
//
//! Runtime loading of the OpenAL library and capability probing for ALC devices.
//!
//! A [`Loader`] opens the platform's OpenAL library, binds the ALC entry points, and opens
//! [`Device`]s. Every device carries the [`Capabilities`] it was probed with: the ALC version,
//! the extension names the device confirmed, and typed entry points for the extensions that add
//! functions. An extension's functions can only be reached through its [`Capability`], so
//! nothing calls an entry point the device didn't confirm.
//!
//! ```no_run
//! let loader = alcloader::Loader::new()?;
//! let device = loader.create_device(None)?;
//! if device.capabilities().supports("ALC_EXT_EFX") {
//!     // ...
//! }
//! # Ok::<(), alcloader::Error>(())
//! ```

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod ffi;

pub mod error;
pub use crate::error::{AlcError, Error};

mod info;
pub use crate::info::ALCVersion;

pub mod platform;
pub use crate::platform::{LibraryNames, Platform};

pub mod config;
pub use crate::config::LoaderConfig;

mod library;
pub use crate::library::{FunctionAddress, NativeLibrary};

mod loader;
pub use crate::loader::{FunctionProvider, Loader};

mod functions;
pub use crate::functions::AlcFunctions;

pub mod extensions;

mod capabilities;
pub use crate::capabilities::{check_extension, Capabilities, Capability};

pub mod strings;

mod device;
pub use crate::device::Device;
