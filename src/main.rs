use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use huffpack::format;

#[derive(Parser, Debug)]
#[command(about = "Huffman file compressor")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a code table from FILE and write the encoded document
    Encode {
        file: PathBuf,
        /// Destination path, defaults to <stem>_encoded.txt
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Read an encoded document and restore the original bytes
    Decode {
        file: PathBuf,
        /// Destination path, defaults to <stem>_decoded.txt
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    match Args::parse().command {
        Command::Encode { file, output } => {
            let input = fs::read(&file).context("read input file")?;
            let encoded = format::encode(&input).context("encode input")?;
            let Some(encoded) = encoded else {
                println!("{} is empty, nothing to encode", file.display());
                return Ok(());
            };
            let output = output.unwrap_or_else(|| derive_output_name(&file, "_encoded.txt"));
            fs::write(&output, encoded.into_bytes()).context("write encoded file")?;
            println!("encoded {} -> {}", file.display(), output.display());
        }
        Command::Decode { file, output } => {
            let input = fs::read(&file).context("read input file")?;
            let decoded = format::decode(&input).context("decode document")?;
            let output = output.unwrap_or_else(|| derive_output_name(&file, "_decoded.txt"));
            fs::write(&output, decoded).context("write decoded file")?;
            println!("decoded {} -> {}", file.display(), output.display());
        }
    }

    Ok(())
}

/// Replace the text after the last '.' in the file name with `suffix`. A
/// name without a dot keeps the whole name.
fn derive_output_name(source: &Path, suffix: &str) -> PathBuf {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match name.rfind('.') {
        Some(at) => &name[..at],
        None => name.as_str(),
    };
    source.with_file_name(format!("{stem}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_replaces_the_last_extension() {
        assert_eq!(
            derive_output_name(Path::new("lorem.txt"), "_encoded.txt"),
            PathBuf::from("lorem_encoded.txt")
        );
        assert_eq!(
            derive_output_name(Path::new("dir/archive.tar.gz"), "_decoded.txt"),
            PathBuf::from("dir/archive.tar_decoded.txt")
        );
    }

    #[test]
    fn output_name_without_an_extension_keeps_the_name() {
        assert_eq!(
            derive_output_name(Path::new("README"), "_encoded.txt"),
            PathBuf::from("README_encoded.txt")
        );
    }
}
