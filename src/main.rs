//! This crate contains the source code for the binary for the maze game mazewalk.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

use clap::{error::ErrorKind, Parser as _};
use color_eyre::{eyre::Result, install};
use mazewalk::{
    cli::{Arguments, Failure},
    session::Session,
    App,
};

fn main() -> Result<ExitCode> {
    install()?;

    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => {
            err.print()?;
            return Ok(Failure::Argument(err).exit_code());
        }
    };
    args.init_tracing()?;

    let grid = match args.loader().load_file(&args.maze) {
        Ok(grid) => grid,
        Err(err) => {
            let failure = Failure::from(err);
            eprintln!("Error: {failure}");
            return Ok(failure.exit_code());
        }
    };

    let title = args.maze.file_name().map_or_else(
        || args.maze.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let mut app = App::new(Session::new(grid), title);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;

    if app.has_won() {
        println!("Congratulations, you win!");
    }

    Ok(ExitCode::SUCCESS)
}
