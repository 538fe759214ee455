// SPDX-License-Identifier: MPL-2.0
use casino_overlays::app::{self, paths, Flags};

const USAGE: &str = "\
Usage: casino_overlays [OPTIONS]

Options:
  --config-dir DIR   Directory holding settings.toml
  --max-toasts N     Maximum number of toasts shown at once
  --position P       top-center | top-right | bottom-center | bottom-right
  -h, --help         Print this help";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        max_toasts: args.opt_value_from_str("--max-toasts")?,
        position: args.opt_value_from_str("--position")?,
    })
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
