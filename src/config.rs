// alcloader/src/config.rs
//
//! Where the loader looks for the OpenAL library.

use crate::platform::LibraryNames;

use std::env;
use std::path::PathBuf;

/// Names an explicit library file, tried before anything else.
pub const LIBRARY_ENV_VAR: &str = "OPENAL_LIBRARY";
/// A platform path list of directories to search for the library.
pub const LIBRARY_PATH_ENV_VAR: &str = "OPENAL_LIBRARY_PATH";

/// Options controlling how the OpenAL library is located.
#[derive(Clone, Debug, PartialEq)]
pub struct LoaderConfig {
    /// A specific library file to try first.
    pub library_path: Option<PathBuf>,
    /// Directories to search, in order, for each platform file name.
    pub search_paths: Vec<PathBuf>,
    /// Whether to finally try the bare platform file names, letting the OS loader search its
    /// default locations.
    pub system_search: bool,
}

impl Default for LoaderConfig {
    fn default() -> LoaderConfig {
        LoaderConfig { library_path: None, search_paths: vec![], system_search: true }
    }
}

impl LoaderConfig {
    /// Reads `OPENAL_LIBRARY` and `OPENAL_LIBRARY_PATH`. Empty values are ignored.
    pub fn from_env() -> LoaderConfig {
        let library_path = env::var_os(LIBRARY_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let search_paths = match env::var_os(LIBRARY_PATH_ENV_VAR) {
            Some(value) => env::split_paths(&value)
                .filter(|path| !path.as_os_str().is_empty())
                .collect(),
            None => vec![],
        };
        LoaderConfig { library_path, search_paths, system_search: true }
    }

    #[inline]
    pub fn library_path<P>(mut self, path: P) -> LoaderConfig where P: Into<PathBuf> {
        self.library_path = Some(path.into());
        self
    }

    #[inline]
    pub fn search_path<P>(mut self, path: P) -> LoaderConfig where P: Into<PathBuf> {
        self.search_paths.push(path.into());
        self
    }

    #[inline]
    pub fn system_search(mut self, enabled: bool) -> LoaderConfig {
        self.system_search = enabled;
        self
    }

    /// The ordered list of paths the locator should try for the given platform names.
    pub fn candidates(&self, names: &LibraryNames) -> Vec<PathBuf> {
        let mut candidates = vec![];
        if let Some(ref library_path) = self.library_path {
            candidates.push(library_path.clone());
        }
        for directory in &self.search_paths {
            for file_name in names.file_names {
                candidates.push(directory.join(file_name));
            }
        }
        if self.system_search {
            candidates.extend(names.file_names.iter().map(PathBuf::from));
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::{LoaderConfig, LIBRARY_ENV_VAR, LIBRARY_PATH_ENV_VAR};
    use crate::platform::Platform;

    use serial_test::serial;
    use std::env;
    use std::path::PathBuf;

    #[test]
    fn test_candidate_order() {
        let names = Platform::Linux.library_names();
        let config = LoaderConfig::default()
            .library_path("/opt/al/custom.so")
            .search_path("/a")
            .search_path("/b");
        let expected: Vec<PathBuf> = [
            "/opt/al/custom.so",
            "/a/libopenal.so.1",
            "/a/libopenal.so",
            "/b/libopenal.so.1",
            "/b/libopenal.so",
            "libopenal.so.1",
            "libopenal.so",
        ].iter().map(PathBuf::from).collect();
        assert_eq!(config.candidates(&names), expected);
    }

    #[test]
    fn test_no_candidates_without_system_search() {
        let names = Platform::Windows.library_names();
        let config = LoaderConfig::default().system_search(false);
        assert!(config.candidates(&names).is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        let search = env::join_paths(["/x/lib", "/y/lib"]).unwrap();
        env::set_var(LIBRARY_ENV_VAR, "/x/lib/libopenal.so.1");
        env::set_var(LIBRARY_PATH_ENV_VAR, &search);
        let config = LoaderConfig::from_env();
        env::remove_var(LIBRARY_ENV_VAR);
        env::remove_var(LIBRARY_PATH_ENV_VAR);

        assert_eq!(config.library_path, Some(PathBuf::from("/x/lib/libopenal.so.1")));
        assert_eq!(config.search_paths, vec![PathBuf::from("/x/lib"), PathBuf::from("/y/lib")]);
        assert!(config.system_search);
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_empty_values() {
        env::set_var(LIBRARY_ENV_VAR, "");
        env::remove_var(LIBRARY_PATH_ENV_VAR);
        let config = LoaderConfig::from_env();
        env::remove_var(LIBRARY_ENV_VAR);
        assert_eq!(config, LoaderConfig::default());
    }
}
