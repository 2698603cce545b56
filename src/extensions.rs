// alcloader/src/extensions.rs
//
//! Entry points of the ALC extensions that add functions.
//!
//! Extensions that only add tokens (`ALC_EXT_disconnect`, `ALC_ENUMERATE_ALL_EXT`, ...) have no
//! bundle here; test for them with [`crate::Capabilities::supports`].

use crate::ffi::{ALCboolean, ALCchar, ALCcontext, ALCdevice, ALCenum, ALCint, ALCint64SOFT};
use crate::ffi::{ALCsizei, ALCuint, ALCvoid};
use crate::loader::FunctionProvider;

/// Audio capture: core in ALC 1.1, `ALC_EXT_CAPTURE` on 1.0 implementations.
///
/// These are exported by the library rather than looked up per device.
#[allow(non_snake_case)]
#[derive(Clone, Copy)]
pub struct CaptureFunctions {
    pub CaptureOpenDevice: unsafe extern "C" fn(devicename: *const ALCchar,
                                                frequency: ALCuint,
                                                format: ALCenum,
                                                buffersize: ALCsizei)
                                                -> *mut ALCdevice,
    pub CaptureCloseDevice: unsafe extern "C" fn(device: *mut ALCdevice) -> ALCboolean,
    pub CaptureStart: unsafe extern "C" fn(device: *mut ALCdevice),
    pub CaptureStop: unsafe extern "C" fn(device: *mut ALCdevice),
    pub CaptureSamples: unsafe extern "C" fn(device: *mut ALCdevice,
                                             buffer: *mut ALCvoid,
                                             samples: ALCsizei),
}

impl CaptureFunctions {
    pub const NAME: &'static str = "ALC_EXT_CAPTURE";

    /// Resolves every capture entry point from the library, or returns `None` if any is
    /// missing.
    pub fn load(provider: &dyn FunctionProvider) -> Option<CaptureFunctions> {
        let get = |name: &str| provider.get_function_address(name);
        unsafe {
            Some(CaptureFunctions {
                CaptureOpenDevice: get("alcCaptureOpenDevice").cast()?,
                CaptureCloseDevice: get("alcCaptureCloseDevice").cast()?,
                CaptureStart: get("alcCaptureStart").cast()?,
                CaptureStop: get("alcCaptureStop").cast()?,
                CaptureSamples: get("alcCaptureSamples").cast()?,
            })
        }
    }
}

alc_extension! {
    /// `ALC_EXT_thread_local_context`: per-thread current contexts.
    pub struct ThreadLocalContextFunctions("ALC_EXT_thread_local_context") {
        SetThreadContext => "alcSetThreadContext":
            unsafe extern "C" fn(context: *mut ALCcontext) -> ALCboolean,
        GetThreadContext => "alcGetThreadContext":
            unsafe extern "C" fn() -> *mut ALCcontext,
    }
}

alc_extension! {
    /// `ALC_SOFT_loopback`: render mixed output into application buffers.
    pub struct LoopbackFunctions("ALC_SOFT_loopback") {
        LoopbackOpenDeviceSOFT => "alcLoopbackOpenDeviceSOFT":
            unsafe extern "C" fn(devicename: *const ALCchar) -> *mut ALCdevice,
        IsRenderFormatSupportedSOFT => "alcIsRenderFormatSupportedSOFT":
            unsafe extern "C" fn(device: *mut ALCdevice,
                                 frequency: ALCsizei,
                                 channels: ALCenum,
                                 sample_type: ALCenum) -> ALCboolean,
        RenderSamplesSOFT => "alcRenderSamplesSOFT":
            unsafe extern "C" fn(device: *mut ALCdevice, buffer: *mut ALCvoid, samples: ALCsizei),
    }
}

alc_extension! {
    /// `ALC_SOFT_pause_device`
    pub struct PauseDeviceFunctions("ALC_SOFT_pause_device") {
        DevicePauseSOFT => "alcDevicePauseSOFT":
            unsafe extern "C" fn(device: *mut ALCdevice),
        DeviceResumeSOFT => "alcDeviceResumeSOFT":
            unsafe extern "C" fn(device: *mut ALCdevice),
    }
}

alc_extension! {
    /// `ALC_SOFT_HRTF`: enumerate HRTF data sets and reset the device to select one.
    pub struct HrtfFunctions("ALC_SOFT_HRTF") {
        GetStringiSOFT => "alcGetStringiSOFT":
            unsafe extern "C" fn(device: *mut ALCdevice,
                                 param: ALCenum,
                                 index: ALCsizei) -> *const ALCchar,
        ResetDeviceSOFT => "alcResetDeviceSOFT":
            unsafe extern "C" fn(device: *mut ALCdevice, attribs: *const ALCint) -> ALCboolean,
    }
}

alc_extension! {
    /// `ALC_SOFT_reopen_device`
    pub struct ReopenDeviceFunctions("ALC_SOFT_reopen_device") {
        ReopenDeviceSOFT => "alcReopenDeviceSOFT":
            unsafe extern "C" fn(device: *mut ALCdevice,
                                 devicename: *const ALCchar,
                                 attribs: *const ALCint) -> ALCboolean,
    }
}

alc_extension! {
    /// `ALC_SOFT_device_clock`
    pub struct DeviceClockFunctions("ALC_SOFT_device_clock") {
        GetInteger64vSOFT => "alcGetInteger64vSOFT":
            unsafe extern "C" fn(device: *mut ALCdevice,
                                 pname: ALCenum,
                                 size: ALCsizei,
                                 values: *mut ALCint64SOFT),
    }
}
