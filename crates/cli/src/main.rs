use anyhow::{anyhow, Context};
use config::{Config, Environment, File};
use hexlayout::{HexPoint, Layout, LayoutConfig, OrientationKind, Point2};
use log::{debug, info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{path::PathBuf, process};
use structopt::{clap::AppSettings, StructOpt};

/// Prefix for environment variables that override config fields. Nested
/// fields are separated by a double underscore, e.g. `HEXLAYOUT_SCALE__X`.
const ENV_PREFIX: &str = "HEXLAYOUT";

/// CLI for converting between hex tiles and pixels with hexlayout.
///
/// The layout is built from (in increasing priority): defaults, the config
/// file, `HEXLAYOUT_*` environment variables, then command line flags.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "hexlayout",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Path to a config file that defines the layout. Supported formats: JSON,
    /// TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Orientation of the tiles: pointy or flat
    #[structopt(short, long)]
    orientation: Option<OrientationKind>,

    /// Horizontal scale of each tile (center to corner distance)
    #[structopt(long)]
    scale_x: Option<f64>,

    /// Vertical scale of each tile (center to corner distance)
    #[structopt(long)]
    scale_y: Option<f64>,

    /// Pixel X coordinate of the center of tile (0, 0)
    #[structopt(long)]
    origin_x: Option<f64>,

    /// Pixel Y coordinate of the center of tile (0, 0)
    #[structopt(long)]
    origin_y: Option<f64>,

    /// Round output points to whole pixels. Has no effect on hex output.
    #[structopt(short, long)]
    pixel: bool,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print the pixel at the center of a tile
    HexToPoint { q: i32, r: i32 },
    /// Print the fractional hex coordinates of a pixel
    PointToHex { x: f64, y: f64 },
    /// Print the offset from any tile's center to one of its corners
    CornerOffset { corner: i32 },
    /// Print all 6 corners of a tile
    Corners { q: i32, r: i32 },
    /// Print the full layout config that would be used, in TOML format
    ShowConfig,
}

/// Load the layout config from every source, highest priority last. CLI
/// flags are applied separately, in [apply_overrides].
fn load_config(config_path: Option<&PathBuf>) -> anyhow::Result<LayoutConfig> {
    let mut settings = Config::new();
    // Seed every leaf field, so a source that only sets part of a nested
    // field (e.g. just `scale.x`) still deserializes
    let defaults = LayoutConfig::default();
    settings
        .set_default("orientation", defaults.orientation.to_string())?
        .set_default("scale.x", defaults.scale.x)?
        .set_default("scale.y", defaults.scale.y)?
        .set_default("origin.x", defaults.origin.x)?
        .set_default("origin.y", defaults.origin.y)?;
    if let Some(config_path) = config_path {
        let path_str = config_path.to_str().ok_or_else(|| {
            anyhow!("invalid character in path {:?}", config_path)
        })?;
        settings
            .merge(File::with_name(path_str))
            .context("error reading config file")?;
        info!("Loaded layout config from {:?}", config_path);
    }
    settings
        .merge(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .context("error reading config from environment")?;
    settings.try_into().context("error reading config")
}

/// Apply any layout fields given as CLI flags on top of a loaded config
fn apply_overrides(opt: &Opt, mut config: LayoutConfig) -> LayoutConfig {
    if let Some(orientation) = opt.orientation {
        config.orientation = orientation;
    }
    if let Some(x) = opt.scale_x {
        config.scale.x = x;
    }
    if let Some(y) = opt.scale_y {
        config.scale.y = y;
    }
    if let Some(x) = opt.origin_x {
        config.origin.x = x;
    }
    if let Some(y) = opt.origin_y {
        config.origin.y = y;
    }
    config
}

/// Serialize a point, snapping it to the pixel grid first if asked to
fn point_json(point: Point2, pixel: bool) -> serde_json::Result<String> {
    if pixel {
        to_json(&point.to_pixel())
    } else {
        to_json(&point)
    }
}

fn to_json(value: &impl Serialize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Evaluate a single command against the given config, and return the text
/// that should be printed
fn run_command(
    command: &Command,
    config: LayoutConfig,
    pixel: bool,
) -> anyhow::Result<String> {
    let layout = Layout::from_config(config).context("invalid layout config")?;
    let output = match *command {
        Command::HexToPoint { q, r } => {
            point_json(layout.hex_to_point(HexPoint::new(q, r)), pixel)?
        }
        Command::PointToHex { x, y } => {
            to_json(&layout.point_to_hex(Point2::new(x, y)))?
        }
        Command::CornerOffset { corner } => {
            point_json(layout.hex_corner_offset(corner), pixel)?
        }
        Command::Corners { q, r } => {
            let corners = layout.hexagon_corners(HexPoint::new(q, r));
            if pixel {
                to_json(&corners.map(Point2::to_pixel))?
            } else {
                to_json(&corners)?
            }
        }
        Command::ShowConfig => toml::to_string_pretty(&config)
            .context("error serializing config")?,
    };
    Ok(output)
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = load_config(opt.config.as_ref())?;
    let config = apply_overrides(&opt, config);
    debug!("Using layout config {:?}", config);

    let output = run_command(&opt.command, config, opt.pixel)?;
    println!("{}", output);
    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlayout::PixelPoint;

    fn parse(args: &[&str]) -> Opt {
        Opt::from_iter_safe(
            std::iter::once("hexlayout").chain(args.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_negative_args() {
        let opt = parse(&["--scale-x", "-2.5", "hex-to-point", "-3", "4"]);
        assert_eq!(opt.scale_x, Some(-2.5));
        assert!(matches!(opt.command, Command::HexToPoint { q: -3, r: 4 }));
    }

    #[test]
    fn test_apply_overrides() {
        let opt = parse(&[
            "--orientation",
            "flat",
            "--scale-y",
            "8",
            "--origin-x",
            "-40",
            "show-config",
        ]);
        let config = apply_overrides(&opt, LayoutConfig::default());
        assert_eq!(
            config,
            LayoutConfig {
                orientation: OrientationKind::Flat,
                scale: Point2::new(1.0, 8.0),
                origin: Point2::new(-40.0, 0.0),
            }
        );
    }

    #[test]
    fn test_run_command() {
        let config = LayoutConfig {
            orientation: OrientationKind::Flat,
            scale: Point2::new(10.0, 10.0),
            origin: Point2::new(100.0, 50.0),
        };

        let output =
            run_command(&Command::HexToPoint { q: 0, r: 0 }, config, false)
                .unwrap();
        let point: Point2 = serde_json::from_str(&output).unwrap();
        assert_eq!(point, Point2::new(100.0, 50.0));

        let output =
            run_command(&Command::Corners { q: 1, r: 0 }, config, true)
                .unwrap();
        let corners: Vec<PixelPoint> = serde_json::from_str(&output).unwrap();
        assert_eq!(corners.len(), 6);
        // Corner 0 of a flat tile points due east: 100 + 15 + 10
        assert_eq!(corners[0], PixelPoint { x: 125, y: 59 });
    }

    #[test]
    fn test_run_command_invalid_config() {
        let config = LayoutConfig {
            scale: Point2::new(f64::NAN, 1.0),
            ..Default::default()
        };
        assert!(run_command(&Command::ShowConfig, config, false).is_err());
    }

    /// Write a config file into the temp dir, named uniquely for this process
    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("hexlayout-{}-{}", process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    // Environment variables are global to the process, so every check that
    // touches them lives in this one test
    #[test]
    fn test_load_config_layering() {
        // Nothing given, everything is default
        assert_eq!(load_config(None).unwrap(), LayoutConfig::default());

        // A file that only sets half of the scale
        let toml_path = write_config(
            "partial.toml",
            "orientation = \"flat\"\n[scale]\nx = 5.0\n",
        );
        assert_eq!(
            load_config(Some(&toml_path)).unwrap(),
            LayoutConfig {
                orientation: OrientationKind::Flat,
                scale: Point2::new(5.0, 1.0),
                origin: Point2::ORIGIN,
            }
        );

        let json_path = write_config(
            "partial.json",
            r#"{"origin": {"y": -20.5}, "scale": {"x": 2.0, "y": 3.0}}"#,
        );
        assert_eq!(
            load_config(Some(&json_path)).unwrap(),
            LayoutConfig {
                orientation: OrientationKind::Pointy,
                scale: Point2::new(2.0, 3.0),
                origin: Point2::new(0.0, -20.5),
            }
        );

        // Env vars on their own, again only half of the scale
        std::env::set_var("HEXLAYOUT_SCALE__X", "5");
        assert_eq!(
            load_config(None).unwrap(),
            LayoutConfig {
                scale: Point2::new(5.0, 1.0),
                ..Default::default()
            }
        );

        // Env vars win over the file
        std::env::set_var("HEXLAYOUT_SCALE__X", "7.5");
        std::env::set_var("HEXLAYOUT_ORIENTATION", "pointy");
        assert_eq!(
            load_config(Some(&toml_path)).unwrap(),
            LayoutConfig {
                orientation: OrientationKind::Pointy,
                scale: Point2::new(7.5, 1.0),
                origin: Point2::ORIGIN,
            }
        );

        std::env::remove_var("HEXLAYOUT_SCALE__X");
        std::env::remove_var("HEXLAYOUT_ORIENTATION");
        std::fs::remove_file(toml_path).unwrap();
        std::fs::remove_file(json_path).unwrap();
    }
}
