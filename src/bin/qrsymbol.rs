use clap::{Args, Parser, Subcommand};
use qrsymbol::encoder::tables::max_payload_bytes;
use qrsymbol::render::{RenderOptions, save_image, to_image_fitted, to_terminal_string};
use qrsymbol::{EncoderConfig, Symbol, SymbolGenerator};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrsymbol", version, about = "Generate small QR codes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Common {
    /// Text to encode (UTF-8, byte mode)
    text: String,
    /// Light border around the symbol, in modules
    #[arg(long)]
    quiet_zone: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the symbol to the terminal
    Print {
        #[command(flatten)]
        common: Common,
    },
    /// Write the symbol to an image file (format from extension)
    Png {
        #[command(flatten)]
        common: Common,
        #[arg(long)]
        out: PathBuf,
        /// Target side length in pixels
        #[arg(long, conflicts_with = "module_px")]
        size: Option<u32>,
        /// Pixels per module
        #[arg(long)]
        module_px: Option<u32>,
    },
    /// Show version and layout details without rendering
    Info {
        #[command(flatten)]
        common: Common,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Print { common } => {
            generate(&common).map(|symbol| print!("{}", to_terminal_string(&symbol)))
        }
        Command::Png {
            common,
            out,
            size,
            module_px,
        } => generate(&common).and_then(|s| png_cmd(&s, &out, size, module_px)),
        Command::Info { common } => generate(&common).map(|s| info_cmd(&common.text, &s)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn generate(common: &Common) -> Result<Symbol, String> {
    let mut config = EncoderConfig::default();
    if let Some(modules) = common.quiet_zone {
        config = config.with_quiet_zone(modules);
    }

    let mut generator = SymbolGenerator::with_config(config);
    match generator.set_text(&common.text) {
        Ok(Some(symbol)) => Ok(symbol.clone()),
        Ok(None) => Err("Nothing to encode: text is empty".to_string()),
        Err(err) => Err(format!(
            "{err} (at most {} UTF-8 bytes are supported)",
            max_payload_bytes()
        )),
    }
}

fn png_cmd(
    symbol: &Symbol,
    out: &Path,
    size: Option<u32>,
    module_px: Option<u32>,
) -> Result<(), String> {
    let mut options = RenderOptions::default();
    if let Some(px) = module_px {
        options.module_px = px;
    }

    let written = match size {
        Some(target) => to_image_fitted(symbol, target, &options)
            .and_then(|image| image.save(out).map_err(Into::into)),
        None => save_image(symbol, out, &options),
    };
    written.map_err(|err| format!("Failed to write {}: {}", out.display(), err))?;

    println!(
        "Saved version {} symbol ({}x{} modules) to {}",
        symbol.version().number(),
        symbol.module_count(),
        symbol.module_count(),
        out.display()
    );
    Ok(())
}

fn info_cmd(text: &str, symbol: &Symbol) {
    let info = symbol.version().info();
    println!("Payload: {} bytes", text.len());
    println!(
        "Version: {} ({}x{} modules)",
        info.version, info.module_count, info.module_count
    );
    println!(
        "Codewords: {} data + {} ecc, error correction {:?}, mask {:?}",
        info.data_codewords(),
        info.ecc_codewords,
        symbol.ec_level(),
        symbol.mask_pattern()
    );
    println!(
        "Dark modules: {} of {}",
        symbol.modules().dark_count(),
        symbol.module_count() * symbol.module_count()
    );
    println!("Quiet zone: {} modules", symbol.quiet_zone());
}
