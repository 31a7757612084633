use std::path::Path;

use anyhow::Result;
use clap::Parser;

use release_resolve::cli::{self, CliOptions};
use release_resolve::publisher::{ConsolePublisher, EnvFilePublisher, VariablePublisher};
use release_resolve::workflow::{self, WorkflowOptions};
use release_resolve::{config, descriptor, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-resolve",
    about = "Resolve release and development versions for pipeline builds"
)]
struct Args {
    #[arg(
        short = 't',
        long,
        help = "Build type: major, minor, patch, or bug-fix"
    )]
    build_type: Option<String>,

    #[arg(short, long, help = "Descriptor file holding the current version")]
    descriptor: Option<String>,

    #[arg(long, help = "Release immediately without snapshot development versions")]
    no_snapshots: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Write variables to this env file instead of stdout")]
    output: Option<String>,

    #[arg(long, help = "Append to the output file instead of replacing it")]
    append: bool,

    #[arg(short, long, help = "Console output format: env, exports, or json")]
    format: Option<String>,

    #[arg(long, help = "Preview what would happen without publishing")]
    dry_run: bool,

    #[arg(short, long, help = "Suppress status messages")]
    quiet: bool,

    #[arg(short = 'v', long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-resolve {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Command line flags win over configuration
    let cli = CliOptions {
        build_type: args.build_type,
        descriptor: args.descriptor,
        no_snapshots: args.no_snapshots,
        output: args.output,
        append: args.append,
        format: args.format,
    };
    let settings = match cli::merge(cli, config) {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let reader = match descriptor::reader_for(Path::new(&settings.descriptor)) {
        Ok(reader) => reader,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let mut publisher: Box<dyn VariablePublisher> = match settings.output_file.as_deref() {
        Some(path) => Box::new(EnvFilePublisher::new(path, settings.append)),
        None => Box::new(ConsolePublisher::new(settings.format)),
    };

    if !args.quiet {
        ui::display_status(&format!(
            "Resolving {} release from [{}]",
            settings.build_type, settings.descriptor
        ));
    }

    let options = WorkflowOptions {
        build_type: settings.build_type,
        snapshots: settings.snapshots,
        dry_run: args.dry_run,
    };

    let outcome = match workflow::run(&options, &*reader, &mut *publisher) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if !args.quiet {
        ui::display_success(&format!(
            "Final release version [{}] and development version [{}]",
            outcome.resolution.release, outcome.resolution.development
        ));

        if args.dry_run {
            ui::display_status("Dry run, nothing was published:");
            for (name, value) in workflow::variables(&outcome.resolution) {
                ui::display_status(&format!("  {}={}", name, value));
            }
        }
    }

    Ok(())
}
