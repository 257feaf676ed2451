mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

pub use commands::build_cli;
pub use dispatch::{CheckParams, DumpParams, ExecParams, TraceParams};

/// `--color` setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Stream a command writes its colored text to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    /// Program dumps and traces.
    Stdout,
    /// Compile diagnostics.
    Stderr,
}

impl ColorChoice {
    /// Unknown or missing values fall back to `auto`.
    pub fn from_arg(value: Option<&str>) -> Self {
        match value {
            Some("always") => ColorChoice::Always,
            Some("never") => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    pub fn enabled_for(self, stream: Stream) -> bool {
        use std::io::IsTerminal;

        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => match stream {
                Stream::Stdout => std::io::stdout().is_terminal(),
                Stream::Stderr => std::io::stderr().is_terminal(),
            },
        }
    }
}
