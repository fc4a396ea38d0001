//! Command-line argument parsing.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

pub const USAGE: &str = "\
Usage:
  ninepatch-app inspect <image.9.png>
  ninepatch-app render  <image.9.png> <WxH>... [-o DIR] [--css]
  ninepatch-app scan    <dir> [<WxH>...] [-o DIR] [--css]

Sizes are content-box sizes; decoded padding is added around them.
Each size triggers an independent render.";

/// Flags shared by the rendering commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub output_dir: Option<PathBuf>,
    pub emit_css: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Inspect(PathBuf),
    Render {
        path: PathBuf,
        sizes: Vec<(u32, u32)>,
        options: OutputOptions,
    },
    Scan {
        dir: PathBuf,
        sizes: Vec<(u32, u32)>,
        options: OutputOptions,
    },
    Help,
}

/// Parse a `WxH` size such as `120x48`.
pub fn parse_size(text: &str) -> Result<(u32, u32)> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .with_context(|| format!("size '{text}' is not WxH"))?;
    let w: u32 = w.parse().with_context(|| format!("bad width in '{text}'"))?;
    let h: u32 = h.parse().with_context(|| format!("bad height in '{text}'"))?;
    if w == 0 || h == 0 {
        bail!("size '{text}' must be positive");
    }
    Ok((w, h))
}

fn parse_rest(rest: &[String]) -> Result<(Vec<(u32, u32)>, OutputOptions)> {
    let mut sizes = Vec::new();
    let mut options = OutputOptions::default();
    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let dir = iter.next().context("-o needs a directory")?;
                options.output_dir = Some(PathBuf::from(dir));
            }
            "--css" => options.emit_css = true,
            other => sizes.push(parse_size(other)?),
        }
    }
    Ok((sizes, options))
}

pub fn parse(args: &[String]) -> Result<Command> {
    let Some((cmd, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };
    match cmd.as_str() {
        "inspect" => {
            let [path] = rest else {
                bail!("inspect takes exactly one image path\n\n{USAGE}");
            };
            Ok(Command::Inspect(PathBuf::from(path)))
        }
        "render" => {
            let (path, rest) = rest
                .split_first()
                .with_context(|| format!("render needs an image path\n\n{USAGE}"))?;
            let (sizes, options) = parse_rest(rest)?;
            if sizes.is_empty() {
                bail!("render needs at least one WxH size\n\n{USAGE}");
            }
            Ok(Command::Render {
                path: PathBuf::from(path),
                sizes,
                options,
            })
        }
        "scan" => {
            let (dir, rest) = rest
                .split_first()
                .with_context(|| format!("scan needs a directory\n\n{USAGE}"))?;
            let (sizes, options) = parse_rest(rest)?;
            Ok(Command::Scan {
                dir: PathBuf::from(dir),
                sizes,
                options,
            })
        }
        "help" | "-h" | "--help" => Ok(Command::Help),
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    }
}
