use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use fluid_type::settings::{Field, Settings};
use fluid_type::tuner::{Clipboard, CopyFeedback, NoClipboard, PropertyMap, SystemClipboard, Tuner};

#[derive(Parser)]
#[command(name = "fluid-type", version)]
#[command(about = "Fluid typography tuner: clamp()-based CSS from a few type settings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated CSS for the given settings
    Generate {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,

        /// Also copy the CSS to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show the computed base size at the mobile, tablet and desktop widths
    Preview {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Start the interactive tuner in the browser
    Dev {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Server port
        #[arg(long, default_value_t = 3333)]
        port: u16,
    },
}

/// Raw control values. Numeric values outside the slider range are
/// clamped with a warning; unknown options are rejected.
#[derive(Args)]
struct SettingsArgs {
    /// Base font size in px (14-20)
    #[arg(long, default_value = "16")]
    base_font_size: String,

    /// Type scale ratio (1.125-1.5, step 0.025)
    #[arg(long, default_value = "1.25")]
    type_scale: String,

    /// Line height: 1.25, 1.5 or 1.75
    #[arg(long, default_value = "1.5")]
    line_height: String,

    /// Letter spacing: -0.025em, 0 or 0.025em
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    letter_spacing: String,

    /// Viewport scaling in vw (0.25-2, step 0.25)
    #[arg(long, default_value = "0.5")]
    viewport_scale: String,

    /// individual (utility classes) or global (.typography rules)
    #[arg(long, default_value = "individual")]
    method: String,
}

impl SettingsArgs {
    fn resolve(&self) -> fluid_type::error::Result<Settings> {
        fluid_type::settings_from_raw([
            (Field::BaseFontSize, self.base_font_size.as_str()),
            (Field::TypeScale, self.type_scale.as_str()),
            (Field::LineHeight, self.line_height.as_str()),
            (Field::LetterSpacing, self.letter_spacing.as_str()),
            (Field::ViewportScale, self.viewport_scale.as_str()),
            (Field::Method, self.method.as_str()),
        ])
    }
}

/// Output format for the generate command.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The generated stylesheet (default)
    Css,
    /// Settings and every derived value as JSON
    Json,
    /// The four preview custom properties, one per line
    Properties,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fluid_type=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            settings,
            format,
            o,
            copy,
        } => generate(&settings, format, o, copy),
        Commands::Preview { settings } => preview(&settings),
        Commands::Dev { settings, port } => dev(&settings, port),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn generate(
    args: &SettingsArgs,
    format: OutputFormat,
    out: Option<PathBuf>,
    copy: bool,
) -> anyhow::Result<()> {
    let mut tuner = Tuner::with_settings(args.resolve()?, PropertyMap::new());

    let output = match format {
        OutputFormat::Css => tuner.css().to_string(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&serde_json::json!({
                "settings": tuner.settings(),
                "derived": tuner.derived(),
            }))?;
            json.push('\n');
            json
        }
        OutputFormat::Properties => {
            fluid_type::codegen::properties::declarations(&tuner.derived().custom_properties)
        }
    };

    if copy {
        let mut clipboard: Box<dyn Clipboard> = match SystemClipboard::open() {
            Ok(c) => Box::new(c),
            Err(e) => Box::new(NoClipboard::new(e)),
        };
        match tuner.copy_css(clipboard.as_mut()) {
            CopyFeedback::Copied => {
                eprintln!("copied CSS to clipboard ({} bytes)", tuner.css().len())
            }
            _ => eprintln!("warning: could not copy CSS to clipboard"),
        }
    }

    match out {
        Some(path) => {
            fs::write(&path, &output)
                .with_context(|| format!("cannot write '{}'", path.display()))?;
            eprintln!("wrote {} ({} bytes)", path.display(), output.len());
        }
        None => print!("{output}"),
    }
    Ok(())
}

fn preview(args: &SettingsArgs) -> anyhow::Result<()> {
    let settings = args.resolve()?;
    let derived = fluid_type::derive(&settings);
    println!(
        "base {}  scale {}  viewport {}",
        derived.display.base_font_size, derived.display.type_scale, derived.display.viewport_scale
    );
    for bp in derived.breakpoints.iter() {
        println!(
            "  {:<8} @ {:>4}px  {}",
            bp.device.name(),
            bp.viewport_width,
            bp.label
        );
    }
    Ok(())
}

fn dev(args: &SettingsArgs, port: u16) -> anyhow::Result<()> {
    let settings = args.resolve()?;
    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(async {
        fluid_type::server::run_dev_server(settings, port)
            .await
            .map_err(|e| anyhow::anyhow!("dev server failed: {e}"))
    })
}
