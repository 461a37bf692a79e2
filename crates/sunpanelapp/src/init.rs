//! # Locating the Data Directory
//!
//! A site's content lives in a `.sunpanel/` directory, normally at the root of
//! the site's repository. Commands may be run from anywhere below it.
//!
//! ## Resolution Flow
//!
//! [`initialize`] picks the data directory in this order:
//! 1. If `data_override` is provided, use it. A path already named
//!    `.sunpanel` is used as-is; otherwise `.sunpanel` is appended.
//! 2. Otherwise walk up from `cwd` with [`find_data_dir`] looking for an
//!    existing `.sunpanel/` directory. The innermost one wins.
//! 3. Otherwise fall back to `cwd/.sunpanel` (which `sunpanel init` creates).
//!
//! The walk stops at the user's home directory or the filesystem root.
//!
//! ## Config Directory
//!
//! User-level config lives in the OS config directory reported by the
//! `directories` crate, unless `SUNPANEL_CONFIG_DIR` is set. Config files are
//! merged from there and from the data directory, the data directory winning.

use crate::api::{SunpanelApi, SunpanelPaths};
use crate::config::SunpanelConfig;
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = ".sunpanel";

pub struct SunpanelContext {
    pub api: SunpanelApi<FileStore>,
    pub config: SunpanelConfig,
}

/// Walks up from `cwd` to the nearest directory holding `.sunpanel/` and
/// returns the path of that `.sunpanel/` directory.
pub fn find_data_dir(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        if home_dir.as_ref() == Some(&current) {
            return None;
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => return None,
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var_os("SUNPANEL_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "sunpanel", "sunpanel").map(|d| d.config_dir().to_path_buf())
        })
}

/// Builds the context every CLI command runs in.
///
/// ```ignore
/// // Detect from the working directory
/// let ctx = initialize(&cwd, None);
///
/// // Explicit site root, `.sunpanel` is appended
/// let ctx = initialize(&cwd, Some(PathBuf::from("/srv/site")));
/// ```
pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> SunpanelContext {
    let data_dir = match data_override {
        Some(path) => {
            if path.file_name().is_some_and(|name| name == DATA_DIR_NAME) {
                path
            } else {
                path.join(DATA_DIR_NAME)
            }
        }
        None => find_data_dir(cwd).unwrap_or_else(|| cwd.join(DATA_DIR_NAME)),
    };

    let config_dir = config_dir();

    let mut search_paths = Vec::new();
    if let Some(dir) = &config_dir {
        search_paths.push(SearchPath::Path(dir.clone()));
    }
    search_paths.push(SearchPath::Path(data_dir.clone()));

    let config: SunpanelConfig = Clapfig::builder()
        .app_name("sunpanel")
        .file_name("sunpanel.toml")
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default();

    let store = FileStore::new_fs(data_dir.clone()).with_pretty_json(config.pretty_json);
    let paths = SunpanelPaths {
        data_dir,
        config_dir,
    };
    let api = SunpanelApi::new(store, paths);

    SunpanelContext { api, config }
}
