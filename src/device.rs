// alcloader/src/device.rs
//
//! An open audio device and its capabilities.

use crate::capabilities::Capabilities;
use crate::error::{AlcError, ToAlcError};
use crate::ffi::{self, ALCdevice, ALCenum, ALCint, ALCint64SOFT};
use crate::functions::BootstrapFunctions;
use crate::info::ALCVersion;
use crate::loader::FunctionProvider;
use crate::strings;
use crate::Error;

use std::ffi::CString;
use std::ptr;

/// An open native device.
///
/// The device is closed when this is dropped. It borrows the function provider it was opened
/// with, so the library can't be released underneath it.
pub struct Device<'a> {
    provider: &'a dyn FunctionProvider,
    native_device: *mut ALCdevice,
    bootstrap: BootstrapFunctions,
    close_device: Option<ffi::AlcCloseDeviceFn>,
    get_error: Option<ffi::AlcGetErrorFn>,
    capabilities: Capabilities,
}

impl<'a> Device<'a> {
    /// Opens the named device, or the default device if `name` is `None`, and probes its
    /// capabilities.
    pub fn open(provider: &'a dyn FunctionProvider, name: Option<&str>)
                -> Result<Device<'a>, Error> {
        let open_device: Option<ffi::AlcOpenDeviceFn> =
            unsafe { provider.get_function_address("alcOpenDevice").cast() };
        let open_device = open_device.ok_or(Error::CoreFunctionMissing("alcOpenDevice"))?;

        let name = match name {
            Some(name) => Some(CString::new(name).map_err(|_| Error::InvalidName)?),
            None => None,
        };
        let native_device = unsafe {
            open_device(name.as_ref().map_or(ptr::null(), |name| name.as_ptr()))
        };
        if native_device.is_null() {
            return Err(Error::DeviceOpenFailed);
        }

        unsafe { Device::from_native_device(provider, native_device) }
    }

    /// Takes ownership of an already opened device and probes its capabilities.
    ///
    /// If probing fails, the device is closed before the error is returned.
    ///
    /// # Safety
    ///
    /// `native_device` must be a valid device opened through `provider`'s library, and nothing
    /// else may close it.
    pub unsafe fn from_native_device(provider: &'a dyn FunctionProvider,
                                     native_device: *mut ALCdevice)
                                     -> Result<Device<'a>, Error> {
        let close_device: Option<ffi::AlcCloseDeviceFn> =
            provider.get_function_address("alcCloseDevice").cast();
        let get_error: Option<ffi::AlcGetErrorFn> =
            provider.get_function_address("alcGetError").cast();

        let probed = BootstrapFunctions::resolve(provider).and_then(|bootstrap| {
            let capabilities = Capabilities::probe_with(&bootstrap, provider, native_device)?;
            Ok((bootstrap, capabilities))
        });
        match probed {
            Ok((bootstrap, capabilities)) => Ok(Device {
                provider,
                native_device,
                bootstrap,
                close_device,
                get_error,
                capabilities,
            }),
            Err(err) => {
                if let Some(close_device) = close_device {
                    close_device(native_device);
                }
                Err(err)
            }
        }
    }

    #[inline]
    pub fn native_device(&self) -> *mut ALCdevice {
        self.native_device
    }

    #[inline]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[inline]
    pub fn version(&self) -> ALCVersion {
        self.capabilities.version()
    }

    #[inline]
    pub fn provider(&self) -> &'a dyn FunctionProvider {
        self.provider
    }

    pub fn get_integer(&self, token: ALCenum) -> ALCint {
        let mut value = 0;
        unsafe {
            (self.bootstrap.GetIntegerv)(self.native_device, token, 1, &mut value);
        }
        value
    }

    pub fn get_string(&self, token: ALCenum) -> Option<String> {
        unsafe { strings::decode_string((self.bootstrap.GetString)(self.native_device, token)) }
    }

    /// Queries a token whose value is a list of strings. `None` means the query isn't
    /// supported.
    pub fn string_list(&self, token: ALCenum) -> Option<Vec<String>> {
        unsafe {
            strings::decode_string_list((self.bootstrap.GetString)(self.native_device, token))
        }
    }

    /// Returns and clears the device's error state.
    pub fn error(&self) -> Option<AlcError> {
        let get_error = self.get_error?;
        unsafe { get_error(self.native_device).to_alc_error() }
    }

    // Drains errors left by earlier calls.
    fn clear_error(&self) {
        let _ = self.error();
    }

    // The error for a call that reported failure through its return value.
    fn failure(&self, function: &'static str) -> Error {
        match self.error() {
            Some(err) => Error::Alc(err),
            None => Error::CallFailed(function),
        }
    }

    fn check_error(&self) -> Result<(), Error> {
        match self.error() {
            None => Ok(()),
            Some(err) => Err(Error::Alc(err)),
        }
    }

    /// Whether the device is still connected. Needs `ALC_EXT_disconnect`.
    pub fn is_connected(&self) -> Result<bool, Error> {
        if !self.capabilities.supports("ALC_EXT_disconnect") {
            return Err(Error::ExtensionUnavailable("ALC_EXT_disconnect"));
        }
        Ok(self.get_integer(ffi::ALC_CONNECTED) != 0)
    }

    /// Pauses mixing. Needs `ALC_SOFT_pause_device`.
    pub fn pause(&self) -> Result<(), Error> {
        let functions = self.capabilities
                            .soft_pause_device
                            .as_ref()
                            .ok_or(Error::ExtensionUnavailable("ALC_SOFT_pause_device"))?;
        self.clear_error();
        unsafe { (functions.DevicePauseSOFT)(self.native_device) }
        self.check_error()
    }

    /// Resumes mixing after [`Device::pause`]. Needs `ALC_SOFT_pause_device`.
    pub fn resume(&self) -> Result<(), Error> {
        let functions = self.capabilities
                            .soft_pause_device
                            .as_ref()
                            .ok_or(Error::ExtensionUnavailable("ALC_SOFT_pause_device"))?;
        self.clear_error();
        unsafe { (functions.DeviceResumeSOFT)(self.native_device) }
        self.check_error()
    }

    /// Names of the HRTF data sets the device can use. Needs `ALC_SOFT_HRTF`.
    pub fn hrtf_specifiers(&self) -> Result<Vec<String>, Error> {
        let functions = self.capabilities
                            .soft_hrtf
                            .as_ref()
                            .ok_or(Error::ExtensionUnavailable("ALC_SOFT_HRTF"))?;
        self.clear_error();
        let count = self.get_integer(ffi::ALC_NUM_HRTF_SPECIFIERS_SOFT);
        self.check_error()?;
        let mut specifiers = vec![];
        for index in 0..count {
            let specifier = unsafe {
                (functions.GetStringiSOFT)(self.native_device, ffi::ALC_HRTF_SPECIFIER_SOFT, index)
            };
            match unsafe { strings::decode_string(specifier) } {
                Some(specifier) => specifiers.push(specifier),
                None => return Err(self.failure("alcGetStringiSOFT")),
            }
        }
        Ok(specifiers)
    }

    /// Resets the device with new attributes, e.g. to select an HRTF. Needs `ALC_SOFT_HRTF`.
    ///
    /// `attributes` are key/value pairs; the terminating zero is appended here.
    pub fn reset(&self, attributes: &[ALCint]) -> Result<(), Error> {
        let functions = self.capabilities
                            .soft_hrtf
                            .as_ref()
                            .ok_or(Error::ExtensionUnavailable("ALC_SOFT_HRTF"))?;
        let attributes = zero_terminated(attributes);
        self.clear_error();
        let result = unsafe { (functions.ResetDeviceSOFT)(self.native_device, attributes.as_ptr()) };
        if result == ffi::ALC_FALSE {
            return Err(self.failure("alcResetDeviceSOFT"));
        }
        Ok(())
    }

    /// Moves the device to another output without closing it. Needs `ALC_SOFT_reopen_device`.
    pub fn reopen(&self, name: Option<&str>, attributes: &[ALCint]) -> Result<(), Error> {
        let functions = self.capabilities
                            .soft_reopen_device
                            .as_ref()
                            .ok_or(Error::ExtensionUnavailable("ALC_SOFT_reopen_device"))?;
        let name = match name {
            Some(name) => Some(CString::new(name).map_err(|_| Error::InvalidName)?),
            None => None,
        };
        let attributes = zero_terminated(attributes);
        self.clear_error();
        let result = unsafe {
            (functions.ReopenDeviceSOFT)(self.native_device,
                                         name.as_ref().map_or(ptr::null(), |name| name.as_ptr()),
                                         attributes.as_ptr())
        };
        if result == ffi::ALC_FALSE {
            return Err(self.failure("alcReopenDeviceSOFT"));
        }
        Ok(())
    }

    /// The device clock and output latency, both in nanoseconds. Needs
    /// `ALC_SOFT_device_clock`.
    pub fn clock_latency(&self) -> Result<(i64, i64), Error> {
        let functions = self.capabilities
                            .soft_device_clock
                            .as_ref()
                            .ok_or(Error::ExtensionUnavailable("ALC_SOFT_device_clock"))?;
        let mut values: [ALCint64SOFT; 2] = [0; 2];
        self.clear_error();
        unsafe {
            (functions.GetInteger64vSOFT)(self.native_device,
                                          ffi::ALC_DEVICE_CLOCK_LATENCY_SOFT,
                                          2,
                                          values.as_mut_ptr());
        }
        self.check_error()?;
        Ok((values[0], values[1]))
    }
}

impl<'a> Drop for Device<'a> {
    fn drop(&mut self) {
        if let Some(close_device) = self.close_device {
            if unsafe { close_device(self.native_device) } == ffi::ALC_FALSE {
                debug!("alcCloseDevice failed");
            }
        }
    }
}

fn zero_terminated(attributes: &[ALCint]) -> Vec<ALCint> {
    let mut terminated = Vec::with_capacity(attributes.len() + 1);
    terminated.extend_from_slice(attributes);
    terminated.push(0);
    terminated
}
