use anyhow::{Context, bail};
use std::path::Path;
use std::process::Command;

/// Open a local file with the platform's default handler.
pub fn open_file(path: &Path) -> anyhow::Result<()> {
    let path = path
        .canonicalize()
        .with_context(|| format!("resolve {}", path.display()))?;

    #[cfg(target_os = "macos")]
    let (program, mut cmd) = ("open", {
        let mut c = Command::new("open");
        c.arg(&path);
        c
    });

    #[cfg(target_os = "windows")]
    let (program, mut cmd) = ("cmd /C start", {
        let mut c = Command::new("cmd");
        c.arg("/C").arg("start").arg("").arg(&path);
        c
    });

    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    let (program, mut cmd) = ("xdg-open", {
        let mut c = Command::new("xdg-open");
        c.arg(&path);
        c
    });

    let status = cmd
        .status()
        .with_context(|| format!("failed to execute `{program}`"))?;
    if !status.success() {
        bail!("`{program}` exited with status {status}");
    }
    Ok(())
}
