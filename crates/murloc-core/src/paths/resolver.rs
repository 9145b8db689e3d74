//! Resolves every launcher path for a configuration in one call.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::env_file::ENV_FILE_NAME;
use super::error::PathError;
use super::platform::{assets_dir, data_root, install_root};
use crate::config::LauncherConfig;

/// Directory downloads go to: `target_path` under the install root.
///
/// `.` components are dropped, so `./Data` resolves to `<root>/Data`.
pub fn target_dir(install_root: &Path, config: &LauncherConfig) -> PathBuf {
    let relative: PathBuf = Path::new(config.target_path())
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    install_root.join(relative)
}

/// Full path of the completion sound inside the assets directory.
pub fn end_sound_path(assets_dir: &Path, config: &LauncherConfig) -> PathBuf {
    assets_dir.join(config.end_sound())
}

/// All launcher paths for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory the launcher runs from.
    pub install_root: PathBuf,
    /// Destination for downloaded data.
    pub target_dir: PathBuf,
    /// Launcher assets (sounds).
    pub assets_dir: PathBuf,
    /// Completion sound file.
    pub end_sound: PathBuf,
    /// Root for user data.
    pub data_root: PathBuf,
    /// Persisted overrides.
    pub env_file: PathBuf,
}

impl ResolvedPaths {
    /// Resolve using the current environment.
    pub fn resolve(config: &LauncherConfig) -> Result<Self, PathError> {
        let install_root = install_root()?;
        let assets_dir = assets_dir(&install_root)?;
        let data_root = data_root()?;

        Ok(Self::from_roots(config, install_root, assets_dir, data_root))
    }

    /// Resolve against explicit roots without consulting the environment.
    pub fn from_roots(
        config: &LauncherConfig,
        install_root: PathBuf,
        assets_dir: PathBuf,
        data_root: PathBuf,
    ) -> Self {
        Self {
            target_dir: target_dir(&install_root, config),
            end_sound: end_sound_path(&assets_dir, config),
            env_file: data_root.join(ENV_FILE_NAME),
            install_root,
            assets_dir,
            data_root,
        }
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "install_root = {}", self.install_root.display())?;
        writeln!(f, "target_dir = {}", self.target_dir.display())?;
        writeln!(f, "assets_dir = {}", self.assets_dir.display())?;
        writeln!(f, "end_sound = {}", self.end_sound.display())?;
        writeln!(f, "data_root = {}", self.data_root.display())?;
        write!(f, "env_file = {}", self.env_file.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::platform::{ENV_ASSETS_DIR, ENV_DATA_DIR, ENV_INSTALL_DIR};
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    fn resolved() -> ResolvedPaths {
        ResolvedPaths::from_roots(
            &LauncherConfig::builtin(),
            PathBuf::from("/games/murloc"),
            PathBuf::from("/games/murloc/assets"),
            PathBuf::from("/home/player/.local/share/murloc-launcher"),
        )
    }

    #[test]
    fn test_target_dir_drops_current_dir() {
        let paths = resolved();
        assert_eq!(paths.target_dir, PathBuf::from("/games/murloc/Data"));
    }

    #[test]
    fn test_end_sound_under_assets() {
        let paths = resolved();
        assert_eq!(paths.end_sound, PathBuf::from("/games/murloc/assets/murloc.mp3"));
        assert_eq!(
            paths.env_file,
            PathBuf::from("/home/player/.local/share/murloc-launcher/.env")
        );
    }

    #[test]
    fn test_nested_target_path() {
        let config = LauncherConfig {
            target_path: "./game/./Data".to_string(),
            ..LauncherConfig::builtin()
        };
        assert_eq!(
            target_dir(Path::new("/root"), &config),
            PathBuf::from("/root/game/Data")
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _install = EnvVarGuard::set(ENV_INSTALL_DIR, "/games/murloc");
        let _assets = EnvVarGuard::unset(ENV_ASSETS_DIR);
        let _data = EnvVarGuard::set(ENV_DATA_DIR, "/var/lib/murloc");
        let config = LauncherConfig::builtin();

        let first = ResolvedPaths::resolve(&config).unwrap();
        let second = ResolvedPaths::resolve(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.target_dir, PathBuf::from("/games/murloc/Data"));
        assert_eq!(first.end_sound, PathBuf::from("/games/murloc/assets/murloc.mp3"));
        assert_eq!(first.env_file, crate::paths::env_file_path().unwrap());
    }

    #[test]
    fn test_display_format_is_parseable() {
        let output = resolved().to_string();
        for key in [
            "install_root = ",
            "target_dir = ",
            "assets_dir = ",
            "end_sound = ",
            "data_root = ",
            "env_file = ",
        ] {
            assert!(output.contains(key), "missing {key}");
        }
    }
}
