use crate::metadata::FileRecord;
use std::fmt;
use std::time::SystemTime;

/// Which of a file's two timestamps is written back to both fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Earliest,
    ModifyOnly,
    CreateOnly,
}

impl Mode {
    /// Picks the instant to write for `record`.
    ///
    /// A file without a readable creation time is treated as if its creation
    /// time matched its modification time.
    pub fn choose(self, record: &FileRecord) -> SystemTime {
        let modified = record.modified;
        let created = record.created.unwrap_or(modified);
        match self {
            Mode::Earliest => created.min(modified),
            Mode::ModifyOnly => modified,
            Mode::CreateOnly => created,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Earliest => "earliest",
            Mode::ModifyOnly => "modify",
            Mode::CreateOnly => "create",
        };
        write!(f, "{}", name)
    }
}
