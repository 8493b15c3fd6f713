use std::io;

mod shell;
mod terminal;

use clap::ArgAction;
use shell::{InputPolicy, Shell, ShellOptions};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Abort on malformed numeric input instead of re-prompting
    #[arg(long)]
    strict_input: bool,

    /// Disable colored status lines
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let policy = if self.strict_input {
            InputPolicy::Strict
        } else {
            InputPolicy::Lenient
        };
        let options = ShellOptions {
            policy,
            color: !self.no_color && terminal::supports_color(),
        };

        let stdin = io::stdin();
        let stdout = io::stdout();
        Shell::new(stdin.lock(), stdout.lock(), options).run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the menu protocol, so diagnostics go to stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
