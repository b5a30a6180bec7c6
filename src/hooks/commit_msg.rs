//! Commit message hook
//!
//! The installed script hands the message file git passes to `commit-msg`
//! back to `gitcc message --file`, with the same validator selection the
//! hook was installed with.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{HookOutcome, HookState};
use crate::error::HookError;
use crate::validation::ValidatorSelection;

pub const HOOK_FILE: &str = "commit-msg";

const SHEBANG: &str = "#!/usr/bin/env sh";
const MARKER: &str = "# commit-msg hook installed by gitcc";
const COMMAND_SUFFIX: &str = " message --file \"$1\"";

fn command_prefix() -> String {
    format!("exec {}", env!("CARGO_PKG_NAME"))
}

/// Script content for the given validator selection
pub fn render_script(selection: &ValidatorSelection) -> String {
    let mut command = command_prefix();
    for arg in selection.hook_args() {
        command.push(' ');
        command.push_str(&shell_quote(&arg));
    }
    command.push_str(COMMAND_SUFFIX);
    format!("{SHEBANG}\n{MARKER}\n{command}\n")
}

/// Whether `content` is a script produced by [`render_script`], whatever validator it embeds
pub fn is_managed(content: &str) -> bool {
    let mut lines = content.strip_suffix('\n').unwrap_or(content).split('\n');
    let (Some(shebang), Some(marker), Some(command), None) =
        (lines.next(), lines.next(), lines.next(), lines.next())
    else {
        return false;
    };
    shebang == SHEBANG
        && marker == MARKER
        && command
            .strip_prefix(&command_prefix())
            .and_then(|rest| rest.strip_suffix(COMMAND_SUFFIX))
            .is_some_and(|args| args.is_empty() || args.starts_with(' '))
}

/// Current state of the hook file in `hooks_dir`
pub fn state(hooks_dir: &Path) -> Result<HookState, HookError> {
    let path = hooks_dir.join(HOOK_FILE);
    if !path.exists() {
        return Ok(HookState::Absent);
    }
    let content = fs::read(&path).map_err(|source| HookError::Io {
        path: path.clone(),
        source,
    })?;
    // Binary or non UTF-8 scripts were never written by gitcc
    Ok(match std::str::from_utf8(&content) {
        Ok(content) if is_managed(content) => HookState::Managed,
        _ => HookState::Foreign,
    })
}

/// Write the hook script, refusing to replace an existing file unless `force` is set
pub fn install(
    hooks_dir: &Path,
    force: bool,
    selection: &ValidatorSelection,
) -> Result<HookOutcome, HookError> {
    let path = hooks_dir.join(HOOK_FILE);
    if !force && path.exists() {
        return Err(HookError::AlreadyExists { path });
    }

    fs::create_dir_all(hooks_dir).map_err(|source| HookError::Io {
        path: hooks_dir.to_path_buf(),
        source,
    })?;
    write_script(&path, &render_script(selection))?;

    tracing::info!("Installed {} hook at {}", HOOK_FILE, path.display());
    Ok(HookOutcome::Installed(path))
}

/// Delete the hook script.
///
/// Missing hooks are not an error. With `strict`, a hook that was not written
/// by gitcc is only removed when `force` is set.
pub fn remove(hooks_dir: &Path, strict: bool, force: bool) -> Result<HookOutcome, HookError> {
    let path = hooks_dir.join(HOOK_FILE);
    if strict && !force && state(hooks_dir)? == HookState::Foreign {
        return Err(HookError::Customized { path });
    }

    match fs::remove_file(&path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(HookOutcome::NotInstalled(path));
        }
        Err(source) => return Err(HookError::Io { path, source }),
    }
    tracing::info!("Removed {} hook at {}", HOOK_FILE, path.display());
    Ok(HookOutcome::Removed(path))
}

/// Write to a sibling temporary file and rename it over `path`
fn write_script(path: &Path, content: &str) -> Result<(), HookError> {
    let tmp_path = tmp_path_for(path);
    let io_error = |source| HookError::Io {
        path: path.to_path_buf(),
        source,
    };

    let result = (|| {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        drop(file);
        make_executable(&tmp_path)?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result.map_err(io_error)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| HOOK_FILE.to_string());
    path.with_file_name(format!(".{name}.gitcc-tmp"))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Quote an argument for a POSIX shell when it contains anything special
fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:=@%+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
