use anyhow::{Context, Result};
use bmpblend_core::{bmp, composite, PixelGrid};
use log::{debug, error, info};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;

const BLEND_OUTPUT: &str = "blend.bmp";
const CHECKER_OUTPUT: &str = "checker.bmp";

/// Operand that selects standard input instead of a file.
const STDIN_OPERAND: &str = "-";

/// Where an input bitmap comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    fn from_operand(operand: &str) -> Self {
        if operand == STDIN_OPERAND {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(operand))
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::Stdin => "standard input".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Exactly two positional operands, or `None`.
fn parse_args<I>(args: I) -> Option<[Source; 2]>
where
    I: IntoIterator<Item = String>,
{
    let operands: Vec<String> = args.into_iter().collect();
    match operands.as_slice() {
        [first, second] => Some([Source::from_operand(first), Source::from_operand(second)]),
        _ => None,
    }
}

fn print_usage() {
    println!("Usage: bmpblend <input file> <input file>");
    println!("  Use '-' to read an input from standard input.");
    println!("  Writes {BLEND_OUTPUT} and {CHECKER_OUTPUT} to the current directory.");
}

/// Decode one input. Standard input is read in place so two bitmaps can be
/// read back to back from it.
fn read_image(source: &Source) -> Result<PixelGrid> {
    let grid = match source {
        Source::Stdin => bmp::decode(io::stdin().lock()),
        Source::File(path) => {
            let file =
                File::open(path).with_context(|| format!("Can't open {}", path.display()))?;
            bmp::decode(BufReader::new(file))
        }
    }
    .with_context(|| format!("Can't read bitmap from {}", source.describe()))?;

    debug!(
        "read {}x{} image from {}",
        grid.cols(),
        grid.rows(),
        source.describe()
    );
    Ok(grid)
}

/// Encode `grid` into a temporary file next to `path`.
///
/// The temporary file is removed again if encoding fails.
fn stage_image(path: &Path, grid: &PixelGrid) -> Result<PathBuf> {
    let staged = path.with_extension("bmp.partial");
    let written = File::create(&staged)
        .map_err(anyhow::Error::from)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            bmp::encode(grid, &mut writer)?;
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
            Ok(())
        });

    if let Err(err) = written {
        let _ = fs::remove_file(&staged);
        return Err(err.context(format!("Can't write {}", path.display())));
    }
    Ok(staged)
}

/// Decode both inputs, composite them and write both outputs into `out_dir`.
///
/// Nothing appears under the final output names unless both outputs were
/// encoded completely.
fn run(sources: &[Source; 2], out_dir: &Path) -> Result<()> {
    let first = read_image(&sources[0])?;
    let second = read_image(&sources[1])?;

    let (blended, checkered) = thread::scope(|s| {
        let blend = s.spawn(|| composite::blend(&first, &second));
        let checker = composite::checker(&first, &second);
        (blend.join(), checker)
    });
    let blended = blended.map_err(|_| anyhow::anyhow!("blend worker panicked"))?;
    info!("composited {}x{} outputs", blended.cols(), blended.rows());

    let targets = [
        (out_dir.join(BLEND_OUTPUT), &blended),
        (out_dir.join(CHECKER_OUTPUT), &checkered),
    ];
    let mut staged = Vec::with_capacity(targets.len());
    for (path, grid) in &targets {
        match stage_image(path, grid) {
            Ok(tmp) => staged.push((tmp, path)),
            Err(err) => {
                for (tmp, _) in &staged {
                    let _ = fs::remove_file(tmp);
                }
                return Err(err);
            }
        }
    }

    commit_staged(staged)
}

/// Rename each staged file onto its target, in order.
///
/// If a rename fails, the staged files not yet renamed are removed.
fn commit_staged<P: AsRef<Path>>(staged: Vec<(PathBuf, P)>) -> Result<()> {
    let mut pending = staged.into_iter();
    while let Some((tmp, path)) = pending.next() {
        let path = path.as_ref();
        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            for (rest, _) in pending {
                let _ = fs::remove_file(rest);
            }
            return Err(err).with_context(|| format!("Can't write {}", path.display()));
        }
        info!("wrote {}", path.display());
    }
    Ok(())
}

/// Main entry point for the `bmpblend` binary.
fn main() -> ExitCode {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(sources) = parse_args(std::env::args().skip(1)) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(&sources, Path::new(".")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
