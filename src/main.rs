// SPDX-License-Identifier: MPL-2.0
use samiske_gallery::app::{self, Flags};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `samiske_gallery=debug`.
const LOG_ENV: &str = "SAMISKE_GALLERY_LOG";

const HELP: &str = "\
samiske_gallery - image gallery viewer

USAGE:
  samiske_gallery [OPTIONS] [PATH]

ARGS:
  PATH                 Image directory, image file or gallery manifest (.toml)

OPTIONS:
  --lang LANG          Interface language (en-US, nb-NO)
  --config-dir DIR     Directory holding settings.toml
  --start INDEX        Open the viewer at INDEX once the gallery loads
  --title TITLE        Heading shown in the viewer
  -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        start: args.opt_value_from_str("--start")?,
        title: args.opt_value_from_str("--title")?,
        path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
