// alcloader/src/capabilities.rs
//
//! What a device supports, determined once when the device is opened.

use crate::extensions::{CaptureFunctions, DeviceClockFunctions, HrtfFunctions};
use crate::extensions::LoopbackFunctions;
use crate::extensions::{PauseDeviceFunctions, ReopenDeviceFunctions, ThreadLocalContextFunctions};
use crate::ffi::{self, ALCdevice, ALCint};
use crate::functions::BootstrapFunctions;
use crate::info::ALCVersion;
use crate::loader::FunctionProvider;
use crate::strings;
use crate::Error;

use fnv::FnvHashSet;
use std::ffi::CString;

/// The entry points of an extension, if the device fully supports it.
#[derive(Clone, Copy, Debug)]
pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> Capability<T> {
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(*self, Capability::Available(_))
    }

    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        match *self {
            Capability::Available(ref functions) => Some(functions),
            Capability::Unavailable => None,
        }
    }
}

/// Turns the entry points loaded for an advertised extension into a capability.
///
/// `None` means the device reported the extension but at least one entry point is missing;
/// that is logged and the extension is treated as unsupported.
pub fn check_extension<T>(extension: &str, functions: Option<T>) -> Capability<T> {
    match functions {
        Some(functions) => Capability::Available(functions),
        None => {
            warn!("[ALC] {} was reported as available but an entry point is missing.", extension);
            Capability::Unavailable
        }
    }
}

/// The capability set of one device: its version, the version tokens it implies, the
/// confirmed extension names, and the entry points of function-carrying extensions.
pub struct Capabilities {
    version: ALCVersion,
    tokens: FnvHashSet<String>,
    pub capture: Capability<CaptureFunctions>,
    pub thread_local_context: Capability<ThreadLocalContextFunctions>,
    pub soft_loopback: Capability<LoopbackFunctions>,
    pub soft_pause_device: Capability<PauseDeviceFunctions>,
    pub soft_hrtf: Capability<HrtfFunctions>,
    pub soft_reopen_device: Capability<ReopenDeviceFunctions>,
    pub soft_device_clock: Capability<DeviceClockFunctions>,
}

impl Capabilities {
    /// Probes `device`.
    ///
    /// Fails before querying the device at all if `alcGetIntegerv`, `alcGetString` or
    /// `alcIsExtensionPresent` can't be resolved.
    ///
    /// # Safety
    ///
    /// `device` must be a valid device opened through `provider`'s library. [`crate::Device`]
    /// probes the devices it opens, so most callers never need this.
    ///
    /// ```compile_fail
    /// # fn probe(provider: &dyn alcloader::FunctionProvider) {
    /// let _ = alcloader::Capabilities::probe(provider, std::ptr::null_mut());
    /// # }
    /// ```
    pub unsafe fn probe(provider: &dyn FunctionProvider, device: *mut ALCdevice)
                        -> Result<Capabilities, Error> {
        let bootstrap = BootstrapFunctions::resolve(provider)?;
        Capabilities::probe_with(&bootstrap, provider, device)
    }

    pub(crate) unsafe fn probe_with(bootstrap: &BootstrapFunctions,
                                    provider: &dyn FunctionProvider,
                                    device: *mut ALCdevice)
                                    -> Result<Capabilities, Error> {
        let (mut major, mut minor): (ALCint, ALCint) = (0, 0);
        (bootstrap.GetIntegerv)(device, ffi::ALC_MAJOR_VERSION, 1, &mut major);
        (bootstrap.GetIntegerv)(device, ffi::ALC_MINOR_VERSION, 1, &mut minor);
        let version = ALCVersion::from_raw(major, minor);

        let mut tokens: FnvHashSet<String> = version.version_tokens().into_iter().collect();

        let extensions = strings::decode_string((bootstrap.GetString)(device, ffi::ALC_EXTENSIONS))
            .ok_or(Error::ExtensionStringUnavailable)?;

        // Some implementations advertise names they don't actually support, so each name is
        // confirmed individually.
        for name in strings::extension_names(&extensions) {
            let c_name = match CString::new(name) {
                Ok(c_name) => c_name,
                Err(_) => continue,
            };
            let present = (bootstrap.IsExtensionPresent)(device, c_name.as_ptr());
            if present != ffi::ALC_FALSE {
                tokens.insert(name.to_owned());
            }
        }

        // Capture is core in ALC 1.1, so the version token alone enables it.
        let capture = if tokens.contains("OpenALC11") || tokens.contains(CaptureFunctions::NAME) {
            let capture = check_extension(CaptureFunctions::NAME, CaptureFunctions::load(provider));
            if !capture.is_available() {
                tokens.remove(CaptureFunctions::NAME);
            }
            capture
        } else {
            Capability::Unavailable
        };

        let thread_local_context =
            load_extension(&mut tokens, ThreadLocalContextFunctions::NAME, || {
                ThreadLocalContextFunctions::load(provider, device)
            });
        let soft_loopback = load_extension(&mut tokens, LoopbackFunctions::NAME, || {
            LoopbackFunctions::load(provider, device)
        });
        let soft_pause_device = load_extension(&mut tokens, PauseDeviceFunctions::NAME, || {
            PauseDeviceFunctions::load(provider, device)
        });
        let soft_hrtf = load_extension(&mut tokens, HrtfFunctions::NAME, || {
            HrtfFunctions::load(provider, device)
        });
        let soft_reopen_device = load_extension(&mut tokens, ReopenDeviceFunctions::NAME, || {
            ReopenDeviceFunctions::load(provider, device)
        });
        let soft_device_clock = load_extension(&mut tokens, DeviceClockFunctions::NAME, || {
            DeviceClockFunctions::load(provider, device)
        });

        debug!("Device supports ALC {} with {} capability tokens", version, tokens.len());

        Ok(Capabilities {
            version,
            tokens,
            capture,
            thread_local_context,
            soft_loopback,
            soft_pause_device,
            soft_hrtf,
            soft_reopen_device,
            soft_device_clock,
        })
    }

    /// The version the device reported.
    #[inline]
    pub fn version(&self) -> ALCVersion {
        self.version
    }

    /// Whether `token` (an extension name or a version token such as `OpenALC11`) is in the
    /// set. Names are compared case-sensitively.
    #[inline]
    pub fn supports(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    #[inline]
    pub fn open_alc_10(&self) -> bool {
        self.supports("OpenALC10")
    }

    #[inline]
    pub fn open_alc_11(&self) -> bool {
        self.supports("OpenALC11")
    }

    /// All tokens, sorted.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.tokens.iter().map(|token| &token[..]).collect();
        tokens.sort_unstable();
        tokens
    }
}

// Extensions the device didn't advertise are silently unavailable. Advertised ones whose entry
// points are incomplete are dropped from the token set, so the set and the bundles agree.
fn load_extension<T, F>(tokens: &mut FnvHashSet<String>, extension: &str, load: F)
                        -> Capability<T>
                        where F: FnOnce() -> Option<T> {
    if !tokens.contains(extension) {
        return Capability::Unavailable;
    }
    let capability = check_extension(extension, load());
    if !capability.is_available() {
        tokens.remove(extension);
    }
    capability
}
