use clap::{Parser, Subcommand};
use rust_qr_gen::encoder::config::{default_module_px, default_raster_supersample};
use rust_qr_gen::encoder::tables::version_table;
use rust_qr_gen::render::raster::render_supersampled;
use rust_qr_gen::render::svg::render_svg;
use rust_qr_gen::render::text::render_text;
use rust_qr_gen::{QrCode, encode};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "RustQR Gen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write an SVG symbol to a file or stdout
    Svg {
        text: String,
        #[arg(long)]
        module_px: Option<u32>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write a supersampled PNG bitmap
    Png {
        text: String,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        module_px: Option<u32>,
        #[arg(long)]
        supersample: Option<u32>,
    },
    /// Print symbol structure and a text preview
    Inspect { text: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Svg {
            text,
            module_px,
            output,
        } => svg_cmd(&text, module_px, output.as_deref()),
        Command::Png {
            text,
            output,
            module_px,
            supersample,
        } => png_cmd(&text, &output, module_px, supersample),
        Command::Inspect { text } => inspect_cmd(&text),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("qrgen: {}", msg);
            ExitCode::FAILURE
        }
    }
}

fn encode_or_report(text: &str) -> Result<QrCode, String> {
    encode(text).map_err(|err| format!("cannot encode {:?}: {}", text, err))
}

fn svg_cmd(text: &str, module_px: Option<u32>, output: Option<&Path>) -> Result<(), String> {
    let qr = encode_or_report(text)?;
    let svg = render_svg(&qr, module_px.unwrap_or_else(default_module_px))
        .map_err(|err| err.to_string())?;
    match output {
        Some(path) => std::fs::write(path, svg)
            .map_err(|err| format!("failed to write {}: {}", path.display(), err)),
        None => {
            println!("{}", svg);
            Ok(())
        }
    }
}

fn png_cmd(
    text: &str,
    output: &Path,
    module_px: Option<u32>,
    supersample: Option<u32>,
) -> Result<(), String> {
    let qr = encode_or_report(text)?;
    let img = render_supersampled(
        &qr,
        module_px.unwrap_or_else(default_module_px),
        supersample.unwrap_or_else(default_raster_supersample),
    )
    .map_err(|err| err.to_string())?;
    img.save(output)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    println!(
        "Wrote {} ({}x{} px, version {})",
        output.display(),
        img.width(),
        img.height(),
        qr.version.number()
    );
    Ok(())
}

fn inspect_cmd(text: &str) -> Result<(), String> {
    let qr = encode_or_report(text)?;
    let table = version_table(qr.version);
    println!("Payload: {} bytes", text.chars().count());
    println!(
        "Version: {} ({}x{} modules), EC level {:?}, mask {:?}",
        qr.version.number(),
        qr.size(),
        qr.size(),
        qr.error_correction,
        qr.mask_pattern
    );
    println!(
        "Codewords: {} data + {} EC = {} total in {} block(s), capacity {} bytes",
        qr.data_codewords.len(),
        qr.ec_codewords.len(),
        table.total_codewords,
        table.num_blocks,
        table.max_payload_len()
    );
    println!(
        "Dark modules: {} / {}",
        qr.modules.count_ones(),
        qr.size() * qr.size()
    );
    print!("{}", render_text(&qr));
    Ok(())
}
