// alcloader/src/functions.rs
//
//! Typed tables of ALC entry points.

use crate::Error;
use crate::ffi::{self, ALCboolean, ALCchar, ALCcontext, ALCdevice, ALCenum, ALCint};
use crate::loader::FunctionProvider;
use crate::strings;

use std::ffi::CString;
use std::ptr;

/// The entry points capability probing needs before it can query anything.
#[allow(non_snake_case)]
#[derive(Clone, Copy)]
pub(crate) struct BootstrapFunctions {
    pub(crate) GetIntegerv: ffi::AlcGetIntegervFn,
    pub(crate) GetString: ffi::AlcGetStringFn,
    pub(crate) IsExtensionPresent: ffi::AlcIsExtensionPresentFn,
}

impl BootstrapFunctions {
    /// Resolves all three entry points, failing if any of them is absent.
    pub(crate) fn resolve(provider: &dyn FunctionProvider) -> Result<BootstrapFunctions, Error> {
        unsafe {
            let get_integerv: Option<ffi::AlcGetIntegervFn> =
                provider.get_function_address("alcGetIntegerv").cast();
            let get_string: Option<ffi::AlcGetStringFn> =
                provider.get_function_address("alcGetString").cast();
            let is_extension_present: Option<ffi::AlcIsExtensionPresentFn> =
                provider.get_function_address("alcIsExtensionPresent").cast();
            match (get_integerv, get_string, is_extension_present) {
                (Some(get_integerv), Some(get_string), Some(is_extension_present)) => {
                    Ok(BootstrapFunctions {
                        GetIntegerv: get_integerv,
                        GetString: get_string,
                        IsExtensionPresent: is_extension_present,
                    })
                }
                (None, _, _) => Err(Error::CoreFunctionMissing("alcGetIntegerv")),
                (_, None, _) => Err(Error::CoreFunctionMissing("alcGetString")),
                (_, _, None) => Err(Error::CoreFunctionMissing("alcIsExtensionPresent")),
            }
        }
    }
}

/// The ALC 1.0 core entry points, resolved from the library when it is loaded.
///
/// Any entry point the library doesn't export is `None`. The capture entry points live in
/// [`crate::extensions::CaptureFunctions`], which a device only hands out once it has confirmed
/// capture support.
#[allow(non_snake_case)]
#[derive(Clone, Copy, Default)]
pub struct AlcFunctions {
    pub CreateContext: Option<unsafe extern "C" fn(device: *mut ALCdevice,
                                                   attrlist: *const ALCint)
                                                   -> *mut ALCcontext>,
    pub MakeContextCurrent: Option<unsafe extern "C" fn(context: *mut ALCcontext) -> ALCboolean>,
    pub ProcessContext: Option<unsafe extern "C" fn(context: *mut ALCcontext)>,
    pub SuspendContext: Option<unsafe extern "C" fn(context: *mut ALCcontext)>,
    pub DestroyContext: Option<unsafe extern "C" fn(context: *mut ALCcontext)>,
    pub GetCurrentContext: Option<unsafe extern "C" fn() -> *mut ALCcontext>,
    pub GetContextsDevice: Option<unsafe extern "C" fn(context: *mut ALCcontext)
                                                       -> *mut ALCdevice>,
    pub OpenDevice: Option<ffi::AlcOpenDeviceFn>,
    pub CloseDevice: Option<ffi::AlcCloseDeviceFn>,
    pub GetError: Option<ffi::AlcGetErrorFn>,
    pub IsExtensionPresent: Option<ffi::AlcIsExtensionPresentFn>,
    pub GetProcAddress: Option<ffi::AlcGetProcAddressFn>,
    pub GetEnumValue: Option<unsafe extern "C" fn(device: *mut ALCdevice,
                                                  enumname: *const ALCchar)
                                                  -> ALCenum>,
    pub GetString: Option<ffi::AlcGetStringFn>,
    pub GetIntegerv: Option<ffi::AlcGetIntegervFn>,
}

impl AlcFunctions {
    pub fn load(provider: &dyn FunctionProvider) -> AlcFunctions {
        let get = |name: &str| provider.get_function_address(name);
        unsafe {
            AlcFunctions {
                CreateContext: get("alcCreateContext").cast(),
                MakeContextCurrent: get("alcMakeContextCurrent").cast(),
                ProcessContext: get("alcProcessContext").cast(),
                SuspendContext: get("alcSuspendContext").cast(),
                DestroyContext: get("alcDestroyContext").cast(),
                GetCurrentContext: get("alcGetCurrentContext").cast(),
                GetContextsDevice: get("alcGetContextsDevice").cast(),
                OpenDevice: get("alcOpenDevice").cast(),
                CloseDevice: get("alcCloseDevice").cast(),
                GetError: get("alcGetError").cast(),
                IsExtensionPresent: get("alcIsExtensionPresent").cast(),
                GetProcAddress: get("alcGetProcAddress").cast(),
                GetEnumValue: get("alcGetEnumValue").cast(),
                GetString: get("alcGetString").cast(),
                GetIntegerv: get("alcGetIntegerv").cast(),
            }
        }
    }

    /// Queries a token whose value is a list of strings, such as `ALC_ALL_DEVICES_SPECIFIER`
    /// or `ALC_CAPTURE_DEVICE_SPECIFIER`. `device` may be null for enumeration tokens.
    ///
    /// Returns `Ok(None)` if the implementation doesn't support the query.
    ///
    /// # Safety
    ///
    /// `device` must be null or a valid device opened through the library these functions
    /// were loaded from.
    pub unsafe fn string_list(&self, device: *mut ALCdevice, token: ALCenum)
                              -> Result<Option<Vec<String>>, Error> {
        let get_string = self.GetString.ok_or(Error::CoreFunctionMissing("alcGetString"))?;
        Ok(strings::decode_string_list(get_string(device, token)))
    }

    /// Names of all playback devices. Uses `ALC_ENUMERATE_ALL_EXT` when the library has it.
    pub fn enumerate_devices(&self) -> Result<Vec<String>, Error> {
        let token = if self.is_extension_present("ALC_ENUMERATE_ALL_EXT")? {
            ffi::ALC_ALL_DEVICES_SPECIFIER
        } else {
            ffi::ALC_DEVICE_SPECIFIER
        };
        unsafe { Ok(self.string_list(ptr::null_mut(), token)?.unwrap_or_default()) }
    }

    /// Names of all capture devices, or an empty list without `ALC_EXT_CAPTURE`.
    pub fn enumerate_capture_devices(&self) -> Result<Vec<String>, Error> {
        if !self.is_extension_present("ALC_EXT_CAPTURE")? {
            return Ok(vec![]);
        }
        unsafe {
            Ok(self.string_list(ptr::null_mut(), ffi::ALC_CAPTURE_DEVICE_SPECIFIER)?
                   .unwrap_or_default())
        }
    }

    /// The name of the device opening `None` would pick.
    pub fn default_device_name(&self) -> Result<Option<String>, Error> {
        let get_string = self.GetString.ok_or(Error::CoreFunctionMissing("alcGetString"))?;
        let token = if self.is_extension_present("ALC_ENUMERATE_ALL_EXT")? {
            ffi::ALC_DEFAULT_ALL_DEVICES_SPECIFIER
        } else {
            ffi::ALC_DEFAULT_DEVICE_SPECIFIER
        };
        unsafe { Ok(strings::decode_string(get_string(ptr::null_mut(), token))) }
    }

    /// Whether the library itself, as opposed to a particular device, reports the extension.
    pub fn is_extension_present(&self, name: &str) -> Result<bool, Error> {
        let is_extension_present =
            self.IsExtensionPresent.ok_or(Error::CoreFunctionMissing("alcIsExtensionPresent"))?;
        let name = CString::new(name).map_err(|_| Error::InvalidName)?;
        unsafe { Ok(is_extension_present(ptr::null_mut(), name.as_ptr()) != ffi::ALC_FALSE) }
    }
}
