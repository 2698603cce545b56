// alcloader/src/ffi.rs
//
//! Raw ALC types, tokens, and the entry point signatures the loader binds.

#![allow(non_camel_case_types)]

use libc::{c_char, c_int, c_uint, c_void};

pub type ALCboolean = c_char;
pub type ALCchar = c_char;
pub type ALCint = c_int;
pub type ALCuint = c_uint;
pub type ALCsizei = c_int;
pub type ALCenum = c_int;
pub type ALCvoid = c_void;
pub type ALCint64SOFT = i64;

/// An opaque native audio device.
pub enum ALCdevice {}

/// An opaque native rendering context.
pub enum ALCcontext {}

pub const ALC_FALSE: ALCboolean = 0;
pub const ALC_TRUE: ALCboolean = 1;

// ALC 1.0
pub const ALC_FREQUENCY: ALCenum = 0x1007;
pub const ALC_REFRESH: ALCenum = 0x1008;
pub const ALC_SYNC: ALCenum = 0x1009;
pub const ALC_NO_ERROR: ALCenum = 0;
pub const ALC_INVALID_DEVICE: ALCenum = 0xa001;
pub const ALC_INVALID_CONTEXT: ALCenum = 0xa002;
pub const ALC_INVALID_ENUM: ALCenum = 0xa003;
pub const ALC_INVALID_VALUE: ALCenum = 0xa004;
pub const ALC_OUT_OF_MEMORY: ALCenum = 0xa005;
pub const ALC_DEFAULT_DEVICE_SPECIFIER: ALCenum = 0x1004;
pub const ALC_DEVICE_SPECIFIER: ALCenum = 0x1005;
pub const ALC_EXTENSIONS: ALCenum = 0x1006;
pub const ALC_MAJOR_VERSION: ALCenum = 0x1000;
pub const ALC_MINOR_VERSION: ALCenum = 0x1001;
pub const ALC_ATTRIBUTES_SIZE: ALCenum = 0x1002;
pub const ALC_ALL_ATTRIBUTES: ALCenum = 0x1003;

// ALC 1.1
pub const ALC_MONO_SOURCES: ALCenum = 0x1010;
pub const ALC_STEREO_SOURCES: ALCenum = 0x1011;
pub const ALC_DEFAULT_ALL_DEVICES_SPECIFIER: ALCenum = 0x1012;
pub const ALC_ALL_DEVICES_SPECIFIER: ALCenum = 0x1013;
pub const ALC_CAPTURE_DEVICE_SPECIFIER: ALCenum = 0x310;
pub const ALC_CAPTURE_DEFAULT_DEVICE_SPECIFIER: ALCenum = 0x311;
pub const ALC_CAPTURE_SAMPLES: ALCenum = 0x312;

// ALC_EXT_disconnect
pub const ALC_CONNECTED: ALCenum = 0x313;

// ALC_SOFT_HRTF
pub const ALC_HRTF_SOFT: ALCenum = 0x1992;
pub const ALC_HRTF_STATUS_SOFT: ALCenum = 0x1993;
pub const ALC_NUM_HRTF_SPECIFIERS_SOFT: ALCenum = 0x1994;
pub const ALC_HRTF_SPECIFIER_SOFT: ALCenum = 0x1995;
pub const ALC_HRTF_ID_SOFT: ALCenum = 0x1996;

// ALC_SOFT_device_clock
pub const ALC_DEVICE_CLOCK_SOFT: ALCenum = 0x1600;
pub const ALC_DEVICE_LATENCY_SOFT: ALCenum = 0x1601;
pub const ALC_DEVICE_CLOCK_LATENCY_SOFT: ALCenum = 0x1602;

// Bootstrap entry points. Without these, capability probing cannot proceed.
pub type AlcGetProcAddressFn =
    unsafe extern "C" fn(device: *mut ALCdevice, funcname: *const ALCchar) -> *mut c_void;
pub type AlcGetIntegervFn = unsafe extern "C" fn(device: *mut ALCdevice,
                                                 param: ALCenum,
                                                 size: ALCsizei,
                                                 values: *mut ALCint);
pub type AlcGetStringFn =
    unsafe extern "C" fn(device: *mut ALCdevice, param: ALCenum) -> *const ALCchar;
pub type AlcIsExtensionPresentFn =
    unsafe extern "C" fn(device: *mut ALCdevice, extname: *const ALCchar) -> ALCboolean;
pub type AlcOpenDeviceFn = unsafe extern "C" fn(devicename: *const ALCchar) -> *mut ALCdevice;
pub type AlcCloseDeviceFn = unsafe extern "C" fn(device: *mut ALCdevice) -> ALCboolean;
pub type AlcGetErrorFn = unsafe extern "C" fn(device: *mut ALCdevice) -> ALCenum;
