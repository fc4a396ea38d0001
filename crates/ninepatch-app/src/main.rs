//! ninepatch command-line entry point.
//!
//! Stands in for the host environment: discovers patch images, decodes
//! their markers, and writes one composited PNG (plus optional CSS
//! declarations) per requested content size. Every size is an independent
//! recomposite, the same as a host element being resized.

mod args;
mod commands;
mod discover;

use anyhow::Result;

use args::{Command, OutputOptions, USAGE};
use ninepatch_core::NinePatchConfig;

fn apply_options(config: &mut NinePatchConfig, options: &OutputOptions) {
    if let Some(dir) = &options.output_dir {
        config.output_dir = dir.clone();
    }
    if options.emit_css {
        config.emit_css = true;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = NinePatchConfig::load()?;
    let argv: Vec<String> = std::env::args().skip(1).collect();

    match args::parse(&argv)? {
        Command::Help => println!("{USAGE}"),
        Command::Inspect(path) => println!("{}", commands::inspect(&path)?),
        Command::Render {
            path,
            sizes,
            options,
        } => {
            apply_options(&mut config, &options);
            let written = commands::render_file(&path, &sizes, &config)?;
            log::info!("Rendered {} file(s) from {}", written.len(), path.display());
        }
        Command::Scan {
            dir,
            sizes,
            options,
        } => {
            apply_options(&mut config, &options);
            let rendered = commands::scan(&dir, &sizes, &config)?;
            println!(
                "Rendered {rendered} patch image(s) into {}/",
                config.output_dir.display()
            );
        }
    }
    Ok(())
}
