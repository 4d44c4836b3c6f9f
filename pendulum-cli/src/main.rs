mod viewer;

use clap::{Args, Parser, Subcommand};
use pendulum_core::{
    build_simulation_context, DoublePendulumConfig, PendulumConfig, SimulationConfig,
    SimulationContext,
};
use tracing::Level;
use viewer::ViewerApp;

#[derive(Parser)]
#[command(name = "pendulum")]
#[command(about = "Animate a single or double pendulum", long_about = None)]
struct Cli {
    /// Most ticks run in one frame when catching up after a stall (0 = unbounded)
    #[arg(long, global = true, default_value_t = 240)]
    max_catch_up: u32,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single pendulum
    Pendulum(PendulumArgs),
    /// Run a double pendulum
    DoublePendulum(DoublePendulumArgs),
}

#[derive(Args)]
struct PendulumArgs {
    #[arg(long, default_value_t = 400.0)]
    pivot_x: f64,
    #[arg(long, default_value_t = 400.0)]
    pivot_y: f64,
    #[arg(long, default_value_t = 5.0)]
    arm_length: f64,
    /// Initial angle from the vertical, in radians
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    angle: f64,
    /// Number of past positions kept for the trail
    #[arg(long, default_value_t = 1000)]
    trace: usize,
}

#[derive(Args)]
struct DoublePendulumArgs {
    #[arg(long, default_value_t = 400.0)]
    pivot_x: f64,
    #[arg(long, default_value_t = 200.0)]
    pivot_y: f64,
    #[arg(long, default_value_t = 5.0)]
    first_arm_length: f64,
    #[arg(long, default_value_t = 5.0)]
    second_arm_length: f64,
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    first_angle: f64,
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    second_angle: f64,
    #[arg(long, default_value_t = 10.0)]
    first_mass: f64,
    #[arg(long, default_value_t = 10.0)]
    second_mass: f64,
    /// Number of past positions kept per bob
    #[arg(long, default_value_t = 3000)]
    trace: usize,
}

impl From<PendulumArgs> for SimulationConfig {
    fn from(args: PendulumArgs) -> Self {
        PendulumConfig {
            pivot_x: args.pivot_x,
            pivot_y: args.pivot_y,
            arm_length: args.arm_length,
            angle: args.angle,
            trace: args.trace,
        }
        .into()
    }
}

impl From<DoublePendulumArgs> for SimulationConfig {
    fn from(args: DoublePendulumArgs) -> Self {
        DoublePendulumConfig {
            pivot_x: args.pivot_x,
            pivot_y: args.pivot_y,
            first_arm_length: args.first_arm_length,
            second_arm_length: args.second_arm_length,
            first_angle: args.first_angle,
            second_angle: args.second_angle,
            first_mass: args.first_mass,
            second_mass: args.second_mass,
            trace: args.trace,
        }
        .into()
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config: SimulationConfig = match cli.command {
        Commands::Pendulum(args) => args.into(),
        Commands::DoublePendulum(args) => args.into(),
    };
    let max_catch_up = (cli.max_catch_up > 0).then_some(cli.max_catch_up);

    // Configuration errors are reported before any window exists
    let ctx = match build_simulation_context(&config, max_catch_up) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::debug!(error = ?e, "invalid configuration");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_viewer(ctx) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_viewer(ctx: SimulationContext) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([viewer::WINDOW_SIZE, viewer::WINDOW_SIZE])
            .with_title("Pendulum"),
        ..Default::default()
    };

    tracing::info!("opening viewer");
    eframe::run_native(
        "Pendulum",
        options,
        Box::new(|cc| Ok(Box::new(ViewerApp::new(ctx, cc)))),
    )
}
