// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::process::ExitCode;

const HELP: &str = "\
Iced Gallery

USAGE:
  iced_gallery [OPTIONS] [SOURCE]

ARGS:
  SOURCE                 Gallery base URL or directory containing images.json

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --refresh <SECS>       Reload the gallery every SECS seconds (0 disables)
  -h, --help             Print this help
";

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,wgpu=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let refresh_secs = args.opt_value_from_str("--refresh")?;
    let source = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        source,
        lang,
        config_dir,
        refresh_secs,
    }))
}

fn main() -> ExitCode {
    init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "gallery failed to start");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
