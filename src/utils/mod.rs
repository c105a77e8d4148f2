pub mod layout;
pub mod path;
pub mod text_input;

use anyhow::{Context, Result};
use std::path::Path;

pub use layout::{center_rect, create_shell_layout};
pub use path::{
    get_config_dir, get_config_path, get_home_dir, get_log_dir, get_log_path,
    get_session_path,
};
pub use text_input::TextInput;

/// Write `content` to `path`, creating parent directories, with owner-only
/// permissions (600) on unix. Config and session files both hold secrets.
pub fn write_private_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {:?}", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)
            .with_context(|| format!("Failed to get file metadata: {:?}", path))?
            .permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)
            .with_context(|| format!("Failed to set file permissions: {:?}", path))?;
    }

    Ok(())
}
