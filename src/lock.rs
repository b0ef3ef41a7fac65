use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum LockMode {
  Exclusive,
  Shared,
}

#[derive(Debug)]
pub(crate) struct StoreLock {
  file: File,
  mode: LockMode,
  path: PathBuf,
}

impl StoreLock {
  pub(crate) const FILE_NAME: &'static str = ".lock";

  pub(crate) fn acquire(root: &Path, mode: LockMode) -> Result<Self, Error> {
    let path = root.join(Self::FILE_NAME);

    let file = OpenOptions::new()
      .read(true)
      .write(true)
      .create(true)
      .truncate(false)
      .open(&path)
      .map_err(Error::storage(&path))?;

    let locked = match mode {
      LockMode::Exclusive => FileExt::lock_exclusive(&file),
      LockMode::Shared => FileExt::lock_shared(&file),
    };

    locked.map_err(Error::storage(&path))?;

    debug!(path = %path.display(), ?mode, "acquired store lock");

    Ok(Self { file, mode, path })
  }
}

impl Drop for StoreLock {
  fn drop(&mut self) {
    match FileExt::unlock(&self.file) {
      Ok(()) => debug!(path = %self.path.display(), mode = ?self.mode, "released store lock"),
      Err(error) => warn!(path = %self.path.display(), %error, "failed to release store lock"),
    }
  }
}
