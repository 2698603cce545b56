// alcloader/src/macros.rs
//
//! A macro declaring the typed entry points of one ALC extension.

/// Declares a struct holding every entry point of an ALC extension, plus a `load` constructor
/// that resolves them through a `FunctionProvider` for a given device.
///
/// `load` returns `None` unless every entry point resolved, so a partially exported extension
/// is never usable.
macro_rules! alc_extension {
    (
        $(#[$attr:meta])*
        pub struct $name:ident($extension:literal) {
            $(
                $field:ident => $symbol:literal:
                    unsafe extern "C" fn($($arg:ident: $arg_ty:ty),*) $(-> $ret:ty)?,
            )*
        }
    ) => {
        $(#[$attr])*
        #[allow(non_snake_case)]
        #[derive(Clone, Copy)]
        pub struct $name {
            $(pub $field: unsafe extern "C" fn($($arg: $arg_ty),*) $(-> $ret)?,)*
        }

        impl $name {
            /// The extension name, as it appears in the device's extension string.
            pub const NAME: &'static str = $extension;

            /// Resolves every entry point for `device`.
            ///
            /// # Safety
            ///
            /// `device` must be null or a valid device opened through `provider`'s library.
            pub unsafe fn load(provider: &dyn $crate::loader::FunctionProvider,
                               device: *mut $crate::ffi::ALCdevice)
                               -> Option<$name> {
                Some($name {
                    $($field: provider.get_extension_address(device, $symbol).cast()?,)*
                })
            }
        }
    };
}
