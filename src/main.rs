use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use construction_board::codec;
use construction_board::config::BoardOptions;
use construction_board::coords::{AxisLabel, AxisLabels, Point, display_polar};
use construction_board::engine::EngineCore;
use construction_board::error::SceneError;
use construction_board::selection::Role;
use construction_board::trigger::{AnswerFields, Field, MemoryFields, UpdateTrigger};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Scene(#[from] SceneError),
}

#[derive(Parser, Debug)]
#[command(
    name = "construction-board",
    about = "Inspect and re-save stored construction board answers",
    after_help = "Board options are read from BOARD_CHECK_SOK, BOARD_CHECK_BP, \
                  BOARD_WITH_VECTOR_BUTTON, BOARD_WITH_PHASOR_DIAGRAM, \
                  BOARD_TAPE_PRECISION and BOARD_READOUT_DIGITS."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a stored scene record and list its entries and marks.
    Inspect(InputArgs),
    /// Restore a stored scene record and print every published field.
    Save(SaveArgs),
    /// Print the displayed polar form of a point.
    #[command(allow_negative_numbers = true)]
    Polar {
        x: f64,
        y: f64,
        /// Label of the x axis (-Im, -Re, Im, Re).
        #[arg(long, default_value = "")]
        x_axis: AxisLabel,
        /// Label of the y axis (-Im, -Re, Im, Re).
        #[arg(long, default_value = "")]
        y_axis: AxisLabel,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Stored scene record, or `-` for stdin.
    input: PathBuf,
}

#[derive(Args, Debug)]
struct SaveArgs {
    #[command(flatten)]
    scene: InputArgs,
    /// Stored phasor endpoints, restored on boards with a phasor diagram.
    #[arg(long)]
    phasor: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = BoardOptions::from_env();
    match cli.command {
        Command::Inspect(args) => run_inspect(&args),
        Command::Save(args) => run_save(&args, options),
        Command::Polar {
            x,
            y,
            x_axis,
            y_axis,
        } => {
            let axes = AxisLabels::new(x_axis, y_axis);
            run_polar(Point::new(x, y), axes, options.readout_digits);
            Ok(())
        }
    }
}

fn read_input(args: &InputArgs) -> Result<String, CliError> {
    read_path(&args.input)
}

fn read_path(input: &Path) -> Result<String, CliError> {
    let path = input.to_string_lossy().into_owned();
    let result = if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(input)
    };
    result.map_err(|source| CliError::Read { path, source })
}

/// Strict decode: a malformed record is an error here rather than an empty scene.
fn run_inspect(args: &InputArgs) -> Result<(), CliError> {
    let text = read_input(args)?;
    let Some((registry, marks)) = codec::decode(&text)? else {
        println!("empty scene");
        return Ok(());
    };
    for composite in registry.iter() {
        let state = serde_json::to_string(&composite.state()).map_err(SceneError::from)?;
        println!("{}\t{}\t{state}", composite.id(), composite.kind());
    }
    println!(
        "selected: {}",
        marks.selected().map_or_else(|| "none".to_owned(), ToString::to_string)
    );
    println!("locus: {}", role_text(marks.locus()));
    println!("operating point: {}", role_text(marks.operating_point()));
    Ok(())
}

fn role_text(role: &Role) -> String {
    role.id().map_or_else(|| "unset".to_owned(), ToString::to_string)
}

/// Same path a board takes on page load followed by an update notification.
fn run_save(args: &SaveArgs, options: BoardOptions) -> Result<(), CliError> {
    let mut stored = MemoryFields::new();
    stored.write(Field::Scene, &read_input(&args.scene)?);
    if let Some(path) = &args.phasor {
        stored.write(Field::Phasor, &read_path(path)?);
    }

    let mut engine = EngineCore::new(options);
    let mut trigger = UpdateTrigger::new();
    trigger.load(&mut engine, &stored);

    let mut fields = MemoryFields::new();
    trigger.fire(&engine, &mut fields)?;
    let published = [
        ("locus", Field::Locus),
        ("operating point", Field::OperatingPoint),
        ("scene", Field::Scene),
        ("phasor", Field::Phasor),
    ];
    for (label, field) in published {
        println!("{label}: {}", fields.get(field).unwrap_or("(not published)"));
    }
    Ok(())
}

fn run_polar(p: Point, axes: AxisLabels, digits: usize) {
    let polar = display_polar(p, axes);
    println!("r= {:.digits$}, φ= {:.digits$}°", polar.magnitude, polar.angle);
}
