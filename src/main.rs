use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use matcha_grade::{GradingPipeline, ImageSource};
use matcha_grader::api::ApiDoc;
use matcha_grader::models::{AppConfig, GradeReport};
use matcha_grader::server;

#[derive(Parser)]
#[command(name = "matcha-grader")]
#[command(about = "Grade matcha quality from a photo of the sample")]
struct Cli {
    /// YAML configuration file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade one or more image files
    Grade {
        /// Image files to grade
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print one JSON object per file
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
    /// Show stage dimensions and HSV means for one image
    Analyze {
        /// Image file to analyze
        file: PathBuf,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
    /// Start the HTTP upload service
    Serve,
}

/// Overrides for the configured pipeline options
#[derive(Args)]
struct PipelineArgs {
    /// Bound on the longer image side in pixels
    #[arg(long)]
    max_dimension: Option<u32>,

    /// Fraction of each side kept by the center crop, in (0, 1]
    #[arg(long)]
    crop_fraction: Option<f64>,
}

/// One line of `grade --json` output
#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a str,
    #[serde(flatten)]
    report: GradeReport,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = AppConfig::resolve_path(cli.config);

    match cli.command {
        Some(Commands::Grade {
            files,
            json,
            pipeline,
        }) => {
            init_cli_logging();
            let config = AppConfig::load(config_path.as_deref());
            run_grade_command(&config, &pipeline, &files, json)
        }
        Some(Commands::Analyze { file, pipeline }) => {
            init_cli_logging();
            let config = AppConfig::load(config_path.as_deref());
            run_analyze_command(&config, &pipeline, &file)
        }
        Some(Commands::Serve) => run_server(config_path.as_deref()).await,
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

fn init_cli_logging() {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matcha_grader=warn,matcha_grade=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Build a validated pipeline from config plus command-line overrides
fn build_pipeline(config: &AppConfig, args: &PipelineArgs) -> anyhow::Result<GradingPipeline> {
    let mut options = config.pipeline_options();
    if let Some(max_dimension) = args.max_dimension {
        options = options.max_dimension(max_dimension);
    }
    if let Some(fraction) = args.crop_fraction {
        options = options.crop_fraction(fraction);
    }

    GradingPipeline::new(options).map_err(|e| anyhow::anyhow!("{e}"))
}

/// Grade each file and print the result
fn run_grade_command(
    config: &AppConfig,
    args: &PipelineArgs,
    files: &[PathBuf],
    json: bool,
) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config, args)?;

    for file in files {
        let outcome = pipeline.grade(ImageSource::Path(file));
        let name = file.display().to_string();

        if json {
            let line = FileReport {
                file: &name,
                report: outcome.into(),
            };
            println!("{}", serde_json::to_string(&line)?);
        } else {
            match outcome.grade {
                Some(grade) => println!("{name}: {grade} - {}", outcome.tip),
                None => println!("{name}: {}", outcome.tip),
            }
        }
    }

    Ok(())
}

/// Run the pipeline on one file and print every intermediate figure
fn run_analyze_command(config: &AppConfig, args: &PipelineArgs, file: &Path) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config, args)?;
    let analysis = pipeline
        .analyze(ImageSource::Path(file))
        .map_err(|e| anyhow::anyhow!("{}: {e}", file.display()))?;

    let (sw, sh) = analysis.source_dimensions;
    let (rw, rh) = analysis.resized_dimensions;
    let (cw, ch) = analysis.crop_dimensions;

    println!("File:        {}", file.display());
    println!("Decoded:     {sw}x{sh}");
    println!("Resized:     {rw}x{rh} (max {})", pipeline.options().max_dimension);
    println!("Crop:        {cw}x{ch} (fraction {})", pipeline.options().crop_fraction);
    println!("Mean hue:    {:.1} deg", analysis.stats.mean_hue);
    println!("Mean sat:    {:.1}", analysis.stats.mean_saturation);
    println!("Mean value:  {:.1}", analysis.stats.mean_value);
    println!("Grade:       {}", analysis.result.grade);
    println!("Tip:         {}", analysis.result.tip);

    Ok(())
}

/// Display status information about the current configuration
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config = AppConfig::load(config_path);

    println!("Matcha Grader v{VERSION}");
    println!("Grades matcha samples from their color\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    println!("\nPipeline:");
    println!("  max_dimension = {}", config.pipeline.max_dimension);
    println!("  crop_fraction = {}", config.pipeline.crop_fraction);
    println!("\nUpload:");
    println!("  max_bytes     = {}", config.upload.max_bytes);

    println!("\nCommands:");
    println!("  matcha-grader grade <FILES>...   Grade image files");
    println!("  matcha-grader analyze <FILE>     Show HSV statistics for one file");
    println!("  matcha-grader serve              Start the upload service");
}

async fn run_server(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matcha_grader=debug,matcha_grade=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::load(config_path);

    // Create application state using shared server module
    let state = server::create_app_state(config)?;

    // Build router: start with shared routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Matcha grader listening");

    axum::serve(listener, app).await?;
    Ok(())
}
