//! Process-level conveniences: exiting on bad configuration and the
//! `--print-env` flag. Nothing else in the crate writes output or exits.

use crate::{error::print_error, set::VarSet};
use clap::{Arg, ArgAction, ArgMatches};
use std::{
    io::{self, Write},
    ops::ControlFlow,
    process,
};

/// Exit status used when the environment does not hold a valid configuration
pub const EXIT_INVALID_ENV: i32 = 2;

/// Exit status after printing the variables, same as after `--help`
pub const EXIT_PRINTED: i32 = 0;

/// Id and long name of the argument built by [`print_env_arg`]
pub const PRINT_ENV_ARG: &str = "print-env";

impl<'a> VarSet<'a> {
    /// Parses the process environment; on failure prints the problems to
    /// stderr and exits with status 2.
    ///
    /// Use [`VarSet::try_parse`] to handle failures yourself.
    pub fn parse(&mut self) {
        if let Err(error) = self.try_parse() {
            print_error(&error, &mut io::stderr().lock()).ok();
            process::exit(EXIT_INVALID_ENV);
        }
    }

    /// Prints the shell script form of all variables to stdout
    pub fn print(&self) -> io::Result<()> {
        self.write_script(&mut io::stdout().lock())
    }

    /// Flag action that prints every supported variable in shell format
    pub fn print_action(&self) -> PrintAction<'_, 'a> {
        PrintAction { vars: self }
    }
}

/// `--print-env` style switch: when triggered, writes the variables as a shell
/// script and asks the caller to stop the way `--help` does.
///
/// # Example
/// ```no_run
/// use clap::Command;
/// use env_loadr::{new_int, print_env_arg, required, VarSet};
///
/// let mut vars = VarSet::new();
/// vars.add("PORT", required(), new_int(8080), "Port to listen on");
///
/// let matches = Command::new("server").arg(print_env_arg()).get_matches();
/// vars.print_action().handle_matches(&matches);
/// vars.parse();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrintAction<'s, 'a> {
    vars: &'s VarSet<'a>,
}

impl PrintAction<'_, '_> {
    /// Writes the script to `out` when `triggered`.
    ///
    /// `Break` means the output was produced and the caller should not carry
    /// on processing arguments.
    pub fn apply(&self, triggered: bool, out: &mut impl Write) -> io::Result<ControlFlow<()>> {
        if !triggered {
            return Ok(ControlFlow::Continue(()));
        }
        self.vars.write_script(out)?;
        out.flush()?;
        Ok(ControlFlow::Break(()))
    }

    /// Same as [`PrintAction::apply`], reading the switch from clap matches
    /// built with [`print_env_arg`]
    pub fn apply_matches(
        &self,
        matches: &ArgMatches,
        out: &mut impl Write,
    ) -> io::Result<ControlFlow<()>> {
        let triggered = matches!(matches.try_get_one::<bool>(PRINT_ENV_ARG), Ok(Some(true)));
        self.apply(triggered, out)
    }

    /// Prints to stdout and exits with status 0 when `triggered`
    pub fn handle(&self, triggered: bool) {
        finish(self.apply(triggered, &mut io::stdout().lock()));
    }

    /// Prints to stdout and exits with status 0 when `--print-env` was given
    pub fn handle_matches(&self, matches: &ArgMatches) {
        finish(self.apply_matches(matches, &mut io::stdout().lock()));
    }
}

fn finish(outcome: io::Result<ControlFlow<()>>) {
    match outcome {
        Ok(ControlFlow::Continue(())) => {}
        Ok(ControlFlow::Break(())) => process::exit(EXIT_PRINTED),
        Err(e) => {
            eprintln!("failed to print environment variables: {}", e);
            process::exit(EXIT_INVALID_ENV);
        }
    }
}

/// `--print-env` switch to register on a clap `Command`
pub fn print_env_arg() -> Arg {
    Arg::new(PRINT_ENV_ARG)
        .long(PRINT_ENV_ARG)
        .action(ArgAction::SetTrue)
        .help("Print all supported environment variables in shell format and exit")
}
