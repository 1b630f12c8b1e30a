use crate::error::SyncError;
use crate::utils::format_timestamp;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP: &str = "filedatesync help
 Usage: filedatesync [arguments] [directory]

Some arguments will ignore further arguments (eg help)

Arguments
 -h --help\tShows this help page
 -e --earliest\tUse the earliest date time (out of create and modify) (DEFAULT)
 -m --modify\tUse the last modified/write time
 -c --create\tUse the creation time
 -k --keep-going\tReport files that cannot be updated and carry on";

pub fn banner() -> String {
    format!("filedatesync Version {}", VERSION)
}

pub fn help_page() -> &'static str {
    HELP
}

/// One line of the run report: `<chosen-timestamp> <file-path>`.
pub fn write_report<W: Write>(out: &mut W, time: SystemTime, path: &Path) -> io::Result<()> {
    writeln!(out, "{} {}", format_timestamp(time), path.display())
}

pub fn error_line(err: &SyncError) -> String {
    format!("{}: {}", err.kind(), err)
}

/// Prints `err` in red on stderr; plain text when stderr is not a terminal.
pub fn print_error(err: &SyncError) {
    let line = error_line(err);
    if io::stderr().is_tty() {
        eprintln!("{}", line.red());
    } else {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_write_report_format() {
        let mut out = Vec::new();
        let time = SystemTime::now();
        write_report(&mut out, time, Path::new("/d/a.txt")).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert_eq!(line, format!("{} /d/a.txt\n", format_timestamp(time)));
    }

    #[test]
    fn test_error_line_has_kind_and_message() {
        let err = SyncError::DirectoryNotFound(PathBuf::from("/missing"));
        assert_eq!(error_line(&err), "DirectoryNotFoundError: /missing");
    }

    #[test]
    fn test_help_lists_every_flag() {
        for flag in ["--help", "--earliest", "--modify", "--create", "--keep-going"] {
            assert!(help_page().contains(flag), "help is missing {}", flag);
        }
    }
}
