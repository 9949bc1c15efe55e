//! Command-line arguments, log set-up and start-up failure classification.

use std::{fs::File, path::PathBuf, process::ExitCode, sync::Mutex};

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use derive_more::{Display, Error};

use crate::loader::{LoadFileError, Loader};

/// Command-line arguments of the maze game.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Arguments {
    /// Maze file to play.
    #[arg(value_name = "MAZE")]
    pub maze: PathBuf,

    /// Reject rows longer than the first line instead of truncating them.
    #[arg(long)]
    pub strict: bool,

    /// Write JSON logs to this file.
    #[arg(long = "logs", value_name = "PATH")]
    pub log_filepath: Option<PathBuf>,
}

impl Arguments {
    /// Installs a JSON log subscriber writing to the requested log file.
    ///
    /// Nothing is installed when no log file was given, since the terminal itself belongs to the
    /// game interface.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created or a global subscriber is already set.
    pub fn init_tracing(&self) -> Result<()> {
        let Some(log_filepath) = &self.log_filepath else {
            return Ok(());
        };
        let log_file = File::create(log_filepath)?;

        tracing_subscriber::fmt()
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .json()
            .try_init()
            .map_err(|err| eyre!(err))?;

        Ok(())
    }

    /// Builds the loader these arguments ask for.
    #[must_use]
    pub const fn loader(&self) -> Loader {
        Loader::new().strict(self.strict)
    }
}

/// Categories of start-up failure, each with its own process exit status.
///
/// Errors outside these categories, such as a log file that cannot be created or a terminal I/O
/// failure, go through the `color-eyre` report instead and also exit with status 1.
#[derive(Debug, Display, Error)]
pub enum Failure {
    /// The command line was malformed.
    #[display(fmt = "{_0}")]
    Argument(clap::Error),
    /// The maze file could not be read.
    #[display(fmt = "{_0}")]
    FileAccess(LoadFileError),
    /// The maze file was read but is not a valid maze.
    #[display(fmt = "{_0}")]
    MazeFormat(LoadFileError),
}

impl Failure {
    /// Exit status for malformed arguments.
    pub const ARGUMENT_STATUS: u8 = 1;
    /// Exit status for an unreadable maze file.
    pub const FILE_ACCESS_STATUS: u8 = 2;
    /// Exit status for an invalid maze file.
    pub const MAZE_FORMAT_STATUS: u8 = 3;

    /// Numeric exit status of this failure.
    #[must_use]
    pub const fn status(&self) -> u8 {
        match self {
            Self::Argument(_) => Self::ARGUMENT_STATUS,
            Self::FileAccess(_) => Self::FILE_ACCESS_STATUS,
            Self::MazeFormat(_) => Self::MAZE_FORMAT_STATUS,
        }
    }

    /// Process exit code of this failure.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

impl From<LoadFileError> for Failure {
    fn from(err: LoadFileError) -> Self {
        match err {
            LoadFileError::Access { .. } => Self::FileAccess(err),
            LoadFileError::Format { .. } => Self::MazeFormat(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_args_definition() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn test_cli_args_parse_minimal() {
        let args = Arguments::try_parse_from(["mazewalk", "maze.txt"]).expect("args should parse");

        assert_eq!(args.maze, PathBuf::from("maze.txt"));
        assert!(!args.strict, "strict should default to off");
        assert!(args.log_filepath.is_none(), "logs should default to none");
    }

    #[test]
    fn test_cli_args_parse_all_options() {
        let args =
            Arguments::try_parse_from(["mazewalk", "--strict", "--logs", "run.log", "maze.txt"])
                .expect("args should parse");

        assert!(args.strict, "strict should be set");
        assert_eq!(args.log_filepath, Some(PathBuf::from("run.log")));
        assert_eq!(args.loader(), Loader::new().strict(true));
    }

    #[test]
    fn test_cli_args_missing_maze_is_argument_failure() {
        let err = Arguments::try_parse_from(["mazewalk"]).expect_err("maze path is required");

        assert_eq!(Failure::Argument(err).status(), 1);
    }

    #[test]
    fn test_cli_args_extra_positional_is_argument_failure() {
        assert!(
            Arguments::try_parse_from(["mazewalk", "a.txt", "b.txt"]).is_err(),
            "only one maze path is accepted"
        );
    }

    #[test]
    fn test_failure_status_for_missing_file() {
        let path = env::temp_dir().join(format!("mazewalk-cli-missing-{}.txt", process::id()));
        let err = Loader::new()
            .load_file(&path)
            .expect_err("missing file should fail");

        assert_eq!(Failure::from(err).status(), 2);
    }

    #[test]
    fn test_failure_status_for_non_utf8_maze() {
        let path = env::temp_dir().join(format!("mazewalk-cli-utf8-{}.txt", process::id()));
        fs::write(&path, b"S####\n#   #\n# \xff #\n#   #\n####E")
            .expect("failed to write test file");

        let result = Loader::new().load_file(&path);
        let _ = fs::remove_file(&path);

        let err = result.expect_err("non-UTF-8 byte should fail");
        assert_eq!(Failure::from(err).status(), 3);
    }

    #[test]
    fn test_failure_status_for_bad_maze() {
        let path = env::temp_dir().join(format!("mazewalk-cli-bad-{}.txt", process::id()));
        fs::write(&path, "S####\n#   #\n#   #\n#   #\n#####").expect("failed to write test file");

        let result = Loader::new().load_file(&path);
        let _ = fs::remove_file(&path);

        let err = result.expect_err("maze without exit should fail");
        assert_eq!(Failure::from(err).status(), 3);
    }
}
