// alcloader/src/loader.rs
//
//! The loader owns the OpenAL library and hands out function addresses from it.

use crate::config::LoaderConfig;
use crate::device::Device;
use crate::ffi::{self, ALCdevice, ALCenum};
use crate::functions::AlcFunctions;
use crate::library::{FunctionAddress, NativeLibrary};
use crate::platform::Platform;
use crate::Error;

use libc::c_void;
use std::ffi::CString;
use std::path::Path;

/// A source of ALC function addresses.
///
/// [`Loader`] is the real implementation; capability probing and devices only depend on this
/// trait.
pub trait FunctionProvider {
    /// Looks up a function exported by the library. Returns [`FunctionAddress::NULL`] if it is
    /// absent.
    fn get_function_address(&self, name: &str) -> FunctionAddress;

    /// Looks up a device-local extension function. Returns [`FunctionAddress::NULL`] if it is
    /// absent.
    ///
    /// # Safety
    ///
    /// `device` must be null or a valid device opened through this provider's library.
    unsafe fn get_extension_address(&self, device: *mut ALCdevice, name: &str)
                                    -> FunctionAddress;
}

/// An open OpenAL library.
///
/// Construct one at startup and pass it to whatever needs ALC. The library is released when
/// the loader is dropped; devices borrow the loader, so that can't happen while one is open.
pub struct Loader {
    functions: AlcFunctions,
    get_proc_address: ffi::AlcGetProcAddressFn,
    library: NativeLibrary,
}

impl Loader {
    /// Loads OpenAL using the locations named by the environment. See
    /// [`LoaderConfig::from_env`].
    #[inline]
    pub fn new() -> Result<Loader, Error> {
        Loader::with_config(&LoaderConfig::from_env())
    }

    pub fn with_config(config: &LoaderConfig) -> Result<Loader, Error> {
        let names = Platform::current()?.library_names();
        let candidates = config.candidates(&names);
        let library = NativeLibrary::open(&candidates)?;
        Loader::from_library(library)
    }

    /// Binds an already opened library.
    ///
    /// Fails if it doesn't export `alcGetProcAddress`, in which case the library is released.
    pub fn from_library(library: NativeLibrary) -> Result<Loader, Error> {
        let get_proc_address: Option<ffi::AlcGetProcAddressFn> =
            unsafe { library.symbol_address("alcGetProcAddress").cast() };
        let get_proc_address = match get_proc_address {
            Some(get_proc_address) => get_proc_address,
            None => return Err(Error::CoreFunctionMissing("alcGetProcAddress")),
        };

        let mut loader = Loader { functions: AlcFunctions::default(), get_proc_address, library };
        loader.functions = AlcFunctions::load(&loader);
        Ok(loader)
    }

    /// The core entry points, bound when the library was loaded.
    #[inline]
    pub fn functions(&self) -> &AlcFunctions {
        &self.functions
    }

    #[inline]
    pub fn library_path(&self) -> &Path {
        self.library.path()
    }

    /// Opens a device and probes its capabilities. `None` opens the default device.
    #[inline]
    pub fn create_device(&self, name: Option<&str>) -> Result<Device, Error> {
        Device::open(self, name)
    }

    /// See [`AlcFunctions::string_list`].
    ///
    /// # Safety
    ///
    /// `device` must be null or a valid device opened through this loader.
    #[inline]
    pub unsafe fn string_list(&self, device: *mut ALCdevice, token: ALCenum)
                              -> Result<Option<Vec<String>>, Error> {
        self.functions.string_list(device, token)
    }

    /// Names of all playback devices.
    #[inline]
    pub fn enumerate_devices(&self) -> Result<Vec<String>, Error> {
        self.functions.enumerate_devices()
    }

    /// Names of all capture devices, or an empty list if capture isn't supported.
    #[inline]
    pub fn enumerate_capture_devices(&self) -> Result<Vec<String>, Error> {
        self.functions.enumerate_capture_devices()
    }

    /// The name of the device `create_device(None)` would open.
    #[inline]
    pub fn default_device_name(&self) -> Result<Option<String>, Error> {
        self.functions.default_device_name()
    }
}

impl FunctionProvider for Loader {
    #[inline]
    fn get_function_address(&self, name: &str) -> FunctionAddress {
        self.library.symbol_address(name)
    }

    #[inline]
    unsafe fn get_extension_address(&self, device: *mut ALCdevice, name: &str)
                                    -> FunctionAddress {
        extension_address(self.get_proc_address, device, name)
    }
}

/// Looks up `name` with `alcGetProcAddress`. Names with an interior NUL resolve to NULL without
/// calling into the library.
pub(crate) unsafe fn extension_address(get_proc_address: ffi::AlcGetProcAddressFn,
                                       device: *mut ALCdevice,
                                       name: &str)
                                       -> FunctionAddress {
    let function_name = match CString::new(name) {
        Ok(function_name) => function_name,
        Err(_) => return FunctionAddress::NULL,
    };
    let address = get_proc_address(device, function_name.as_ptr());
    if address.is_null() {
        debug!("Failed to locate address for ALC extension function {}", name);
    }
    FunctionAddress(address as *const c_void)
}
