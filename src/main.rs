use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use glam::Vec4;
use log::{info, warn};

use webgl_helpers::{hex_to_rgb, normalize_color, Axis, Cone, Floor, MeshBuffers};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse()?;

    let diffuse_override = options.diffuse.as_deref().map(parse_diffuse).transpose()?;

    let (mut mesh, name, diffuse, line_list) = match &options.source {
        Source::Axis => {
            options.reject(&["--spacing", "--radius", "--height", "--segments"])?;
            let mut axis = Axis::new(options.dimension.unwrap_or(10.0));
            if let Some(diffuse) = diffuse_override {
                axis.set_diffuse(diffuse);
            }
            let name = axis.alias().to_string();
            (axis.buffers(), name, Some(axis.diffuse), true)
        }
        Source::Floor => {
            options.reject(&["--radius", "--height", "--segments"])?;
            let mut floor = Floor::new(
                options.dimension.unwrap_or(50.0),
                options.spacing.unwrap_or(5.0),
            );
            if let Some(diffuse) = diffuse_override {
                floor.set_diffuse(diffuse);
            }
            let name = floor.alias().to_string();
            (floor.buffers(), name, Some(floor.diffuse), true)
        }
        Source::Cone => {
            options.reject(&["--dimension", "--spacing"])?;
            let mut cone = Cone::new(
                options.radius.unwrap_or(3.0),
                options.height.unwrap_or(6.0),
                options.segments.unwrap_or(17),
            );
            if let Some(diffuse) = diffuse_override {
                cone.set_diffuse(diffuse);
            }
            let name = cone.alias().to_string();
            (cone.buffers(), name, Some(cone.diffuse), false)
        }
        Source::File(path) => {
            options.reject(&[
                "--dimension",
                "--spacing",
                "--radius",
                "--height",
                "--segments",
                "--diffuse",
            ])?;
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let mesh = MeshBuffers::from_json(&data)?;
            info!("read mesh from {}", path.display());
            (mesh, path.display().to_string(), None, false)
        }
    };

    println!(
        "Loaded {name} with {} vertices ({} indices)",
        mesh.vertex_count(),
        mesh.indices.len()
    );
    if line_list {
        println!(" - {} line segments", mesh.indices.len() / 2);
    } else {
        println!(" - {} triangles", mesh.triangle_count());
    }
    if let Some(diffuse) = diffuse {
        println!(
            " - diffuse ({:.3}, {:.3}, {:.3}, {:.3})",
            diffuse.x, diffuse.y, diffuse.z, diffuse.w
        );
    }

    if options.normals {
        if line_list {
            warn!("{name} indices describe line segments; averaged normals will be degenerate");
        }
        mesh.compute_normals().context("failed to compute normals")?;
        if let Some(normals) = &mesh.normals {
            println!(" - {} normals", normals.len() / 3);
        }
    }

    if let Some(path) = &options.output {
        fs::write(path, mesh.to_json()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn parse_diffuse(hex: &str) -> Result<Vec4> {
    let rgb = hex_to_rgb(hex)
        .ok_or_else(|| anyhow!("invalid diffuse color {hex}; expected #rrggbb"))?;
    let channels = normalize_color(&[rgb[0] as f32, rgb[1] as f32, rgb[2] as f32]);
    Ok(Vec4::new(channels[0], channels[1], channels[2], 1.0))
}

enum Source {
    Axis,
    Floor,
    Cone,
    File(PathBuf),
}

impl Source {
    fn describe(&self) -> &'static str {
        match self {
            Source::Axis => "axis",
            Source::Floor => "floor",
            Source::Cone => "cone",
            Source::File(_) => "a mesh file",
        }
    }
}

struct CliOptions {
    source: Source,
    dimension: Option<f32>,
    spacing: Option<f32>,
    radius: Option<f32>,
    height: Option<f32>,
    segments: Option<u32>,
    diffuse: Option<String>,
    normals: bool,
    output: Option<PathBuf>,
}

impl CliOptions {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let Some(source) = args.next() else {
            return Err(anyhow!(
                "Usage: webgl-helpers <axis|floor|cone|mesh.json> [--dimension <n>] \
                 [--spacing <n>] [--radius <n>] [--height <n>] [--segments <n>] \
                 [--diffuse <#rrggbb>] [--normals] [--output <path>]"
            ));
        };
        let source = match source.as_str() {
            "axis" => Source::Axis,
            "floor" => Source::Floor,
            "cone" => Source::Cone,
            path if path.ends_with(".json") => Source::File(PathBuf::from(path)),
            other => {
                return Err(anyhow!(
                    "Unknown source: {other}. Expected axis, floor, cone or a .json mesh path"
                ));
            }
        };

        let mut options = Self {
            source,
            dimension: None,
            spacing: None,
            radius: None,
            height: None,
            segments: None,
            diffuse: None,
            normals: false,
            output: None,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dimension" => options.dimension = Some(float_value(&mut args, "--dimension")?),
                "--spacing" => options.spacing = Some(float_value(&mut args, "--spacing")?),
                "--radius" => options.radius = Some(float_value(&mut args, "--radius")?),
                "--height" => options.height = Some(float_value(&mut args, "--height")?),
                "--segments" => {
                    let value = flag_value(&mut args, "--segments")?;
                    options.segments = Some(
                        value
                            .parse()
                            .map_err(|_| anyhow!("invalid value for --segments: {value}"))?,
                    );
                }
                "--diffuse" => options.diffuse = Some(flag_value(&mut args, "--diffuse")?),
                "--normals" => options.normals = true,
                "--output" => {
                    options.output = Some(PathBuf::from(flag_value(&mut args, "--output")?));
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument: {other}. Expected --dimension, --spacing, --radius, \
                         --height, --segments, --diffuse, --normals or --output"
                    ));
                }
            }
        }
        Ok(options)
    }

    /// Errors when a flag that makes no sense for the chosen source was set.
    fn reject(&self, flags: &[&str]) -> Result<()> {
        for flag in flags {
            let given = match *flag {
                "--dimension" => self.dimension.is_some(),
                "--spacing" => self.spacing.is_some(),
                "--radius" => self.radius.is_some(),
                "--height" => self.height.is_some(),
                "--segments" => self.segments.is_some(),
                "--diffuse" => self.diffuse.is_some(),
                _ => false,
            };
            if given {
                return Err(anyhow!(
                    "{flag} does not apply to {}",
                    self.source.describe()
                ));
            }
        }
        Ok(())
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| anyhow!("{flag} expects a value"))
}

fn float_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<f32> {
    let value = flag_value(args, flag)?;
    value
        .parse()
        .map_err(|_| anyhow!("invalid value for {flag}: {value}"))
}
