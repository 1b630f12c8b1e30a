use crate::error::AccessError;
use filetime::FileTime;
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// The two timestamps of one file, as read before it is rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// `None` when the platform or filesystem does not record a birth time.
    pub created: Option<SystemTime>,
    pub modified: SystemTime,
}

/// Whether `set_timestamps` could write the creation time as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationSupport {
    Set,
    Unsupported,
}

pub fn get_timestamps(path: &Path) -> Result<FileRecord, AccessError> {
    let metadata = fs::metadata(path).map_err(|e| AccessError::from_io(path, e))?;
    let modified = metadata
        .modified()
        .map_err(|e| AccessError::from_io(path, e))?;
    let created = match metadata.created() {
        Ok(created) => Some(created),
        Err(e) => {
            trace!("No creation time for {}: {}", path.display(), e);
            None
        }
    };

    Ok(FileRecord {
        path: path.to_path_buf(),
        created,
        modified,
    })
}

/// Sets both the creation and the modification time of `path` to `time`.
///
/// Access time is left alone. On platforms without a settable creation time
/// only the modification time changes and `CreationSupport::Unsupported` is
/// returned; this is not an error.
pub fn set_timestamps(path: &Path, time: SystemTime) -> Result<CreationSupport, AccessError> {
    let support = set_created(path, time).map_err(|e| AccessError::from_io(path, e))?;
    filetime::set_file_mtime(path, FileTime::from_system_time(time))
        .map_err(|e| AccessError::from_io(path, e))?;
    Ok(support)
}

#[cfg(windows)]
fn set_created(path: &Path, time: SystemTime) -> std::io::Result<CreationSupport> {
    use std::fs::{FileTimes, OpenOptions};
    use std::os::windows::fs::{FileTimesExt, OpenOptionsExt};

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;

    let file = OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .open(path)?;
    file.set_times(FileTimes::new().set_created(time))?;
    Ok(CreationSupport::Set)
}

#[cfg(target_os = "macos")]
fn set_created(path: &Path, time: SystemTime) -> std::io::Result<CreationSupport> {
    use std::fs::{File, FileTimes};
    use std::os::macos::fs::FileTimesExt;

    let file = File::open(path)?;
    file.set_times(FileTimes::new().set_created(time))?;
    Ok(CreationSupport::Set)
}

#[cfg(not(any(windows, target_os = "macos")))]
fn set_created(_path: &Path, _time: SystemTime) -> std::io::Result<CreationSupport> {
    Ok(CreationSupport::Unsupported)
}
