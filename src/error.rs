// alcloader/src/error.rs
//
//! Various errors that methods can produce.

use crate::ffi::{self, ALCenum};

use thiserror::Error;

/// Various errors that methods can produce.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// The current platform is not one of the platforms OpenAL is known to ship for.
    #[error("OpenAL is not supported on this platform")]
    UnsupportedOnThisPlatform,
    /// None of the candidate library files could be opened.
    #[error("failed to locate the OpenAL library")]
    NoALLibraryFound,
    /// An entry point required to bootstrap the loader or to probe a device is absent.
    #[error("a core ALC function is missing: {0}; make sure that OpenAL has been loaded")]
    CoreFunctionMissing(&'static str),
    /// The device couldn't be opened.
    #[error("failed to open the device")]
    DeviceOpenFailed,
    /// The device returned no extension string at all.
    #[error("the device extension string could not be queried")]
    ExtensionStringUnavailable,
    /// A method was called that needs an extension the device doesn't support.
    #[error("{0} is not available on this device")]
    ExtensionUnavailable(&'static str),
    /// A device or function name contained an interior NUL byte.
    #[error("the name contains an interior NUL byte")]
    InvalidName,
    /// A native ALC call reported failure.
    #[error("ALC call failed: {0:?}")]
    Alc(AlcError),
    /// The named native call returned failure without setting an ALC error code.
    #[error("{0} failed")]
    CallFailed(&'static str),
}

/// The error codes `alcGetError` can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlcError {
    /// The device handle or specifier names an inaccessible driver/server.
    InvalidDevice,
    /// The context argument does not name a valid context.
    InvalidContext,
    /// A token used is not valid, or not applicable.
    InvalidEnum,
    /// A value (e.g. attribute) is not valid, or not applicable.
    InvalidValue,
    /// Unable to allocate memory.
    OutOfMemory,
    /// A code ALC doesn't define.
    Unknown(ALCenum),
}

pub(crate) trait ToAlcError {
    /// Returns `None` for `ALC_NO_ERROR`.
    fn to_alc_error(self) -> Option<AlcError>;
}

impl ToAlcError for ALCenum {
    fn to_alc_error(self) -> Option<AlcError> {
        match self {
            ffi::ALC_NO_ERROR => None,
            ffi::ALC_INVALID_DEVICE => Some(AlcError::InvalidDevice),
            ffi::ALC_INVALID_CONTEXT => Some(AlcError::InvalidContext),
            ffi::ALC_INVALID_ENUM => Some(AlcError::InvalidEnum),
            ffi::ALC_INVALID_VALUE => Some(AlcError::InvalidValue),
            ffi::ALC_OUT_OF_MEMORY => Some(AlcError::OutOfMemory),
            other => Some(AlcError::Unknown(other)),
        }
    }
}
