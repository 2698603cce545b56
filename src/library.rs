// alcloader/src/library.rs
//
//! Locating and opening the native library, and looking up its symbols.

use crate::Error;

use libc::c_void;
use libloading::Library;
use std::mem;
use std::path::{Path, PathBuf};
use std::ptr;

/// The address of a native function. Null means "not found".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionAddress(pub *const c_void);

impl FunctionAddress {
    pub const NULL: FunctionAddress = FunctionAddress(ptr::null());

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Reinterprets the address as a typed function pointer, or `None` if it is null.
    ///
    /// # Safety
    ///
    /// `F` must be an `extern "C" fn` type matching the real signature of the function at this
    /// address.
    pub unsafe fn cast<F>(self) -> Option<F> where F: Copy {
        debug_assert_eq!(mem::size_of::<F>(), mem::size_of::<*const c_void>());
        if self.is_null() {
            None
        } else {
            Some(mem::transmute_copy::<*const c_void, F>(&self.0))
        }
    }
}

/// An open shared library. The OS handle is released when this is dropped.
pub struct NativeLibrary {
    library: Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Tries each candidate in order and returns the first one that opens.
    ///
    /// Every failed attempt is logged with the error the OS loader gave.
    pub fn open<P>(candidates: &[P]) -> Result<NativeLibrary, Error> where P: AsRef<Path> {
        for candidate in candidates {
            let path = candidate.as_ref();
            // Running a library's initializers is inherently unsafe; OpenAL's are benign.
            match unsafe { Library::new(path) } {
                Ok(library) => {
                    info!("Loaded {}", path.display());
                    return Ok(NativeLibrary { library, path: path.to_owned() });
                }
                Err(err) => debug!("Failed to load {}: {}", path.display(), err),
            }
        }
        Err(Error::NoALLibraryFound)
    }

    /// The candidate path this library was opened from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up an exported symbol without logging.
    pub fn find(&self, name: &str) -> FunctionAddress {
        unsafe {
            match self.library.get::<unsafe extern "C" fn()>(name.as_bytes()) {
                Ok(symbol) => FunctionAddress(*symbol as *const c_void),
                Err(_) => FunctionAddress::NULL,
            }
        }
    }

    /// Looks up an exported symbol, logging a warning if it's absent.
    pub fn symbol_address(&self, name: &str) -> FunctionAddress {
        let address = self.find(name);
        if address.is_null() {
            warn!("Failed to locate address for ALC function {}", name);
        }
        address
    }
}
