use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use vistra::layout::{GraphEdge, GraphNode, GridCell, TrieEdge, TrieNode};
use vistra::template::{GraphTemplate, GridTemplate, Scene, TreeTemplate};
use vistra::{LayoutConfig, LayoutKind, Trace};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Trace(vistra::Error),
    Json(serde_json::Error),
    NoStep(usize),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Trace(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoStep(index) => write!(f, "No step at index {index}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<vistra::Error> for CliError {
    fn from(value: vistra::Error) -> Self {
        Self::Trace(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Steps,
    Validate,
    Scene,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    step: usize,
    kind: Option<LayoutKind>,
    width: f64,
    height: f64,
    node_size: Option<f64>,
    gap: Option<f64>,
}

#[derive(Serialize)]
struct StepOut<'a> {
    index: usize,
    id: u64,
    description: &'a str,
    variables: Vec<&'a str>,
    highlights: &'a [usize],
}

#[derive(Serialize)]
struct ValidateOut {
    steps: usize,
    ok: bool,
}

fn usage() -> &'static str {
    "vistra-cli\n\
\n\
USAGE:\n\
  vistra-cli [steps] [--pretty] [<path>|-]\n\
  vistra-cli validate [<path>|-]\n\
  vistra-cli scene --step <n> [--type circle|grid|hierarchical|tree|custom] [--width <w>] [--height <h>] [--node-size <r>] [--gap <g>] [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the trace JSON is read from stdin.\n\
  - steps prints one summary record per step.\n\
  - scene resolves the selected step's structures to drawable geometry:\n\
    nodes/edges are read from step data ('nodes', 'edges'); grid scenes read\n\
    'rows', 'cols' and 'cells'; the step's highlight list lights grid cells.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        width: 800.0,
        height: 600.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "steps" => args.command = Command::Steps,
            "validate" => args.command = Command::Validate,
            "scene" => args.command = Command::Scene,
            "--pretty" => args.pretty = true,
            "--step" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.step = n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--type" => {
                let Some(kind) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.kind = Some(LayoutKind::parse(kind));
            }
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.width = w.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.height = h.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--node-size" => {
                let Some(r) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.node_size = Some(r.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--gap" => {
                let Some(g) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.gap = Some(g.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

/// Pulls a typed array out of step data; a missing key is an empty list,
/// matching the loosely populated records generators emit.
fn data_array<T: serde::de::DeserializeOwned>(data: &Value, key: &str) -> Result<Vec<T>, CliError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(v) => Ok(serde_json::from_value(v.clone())?),
    }
}

fn resolve_scene(args: &Args, trace: &Trace) -> Result<Scene, CliError> {
    let step = trace.get(args.step).ok_or(CliError::NoStep(args.step))?;

    let mut config = LayoutConfig::default().with_bounds(args.width, args.height);
    if let Some(kind) = args.kind {
        config = config.with_kind(kind);
    }
    if let Some(node_size) = args.node_size {
        config = config.with_node_size(node_size);
    }
    if let Some(gap) = args.gap {
        config.gap = gap;
    }

    // Scenes resolve at t=0: every element settled at its target, which is
    // what a one-shot inspection wants.
    let scene = match config.kind {
        LayoutKind::Tree => {
            let nodes: Vec<TrieNode> = data_array(&step.data, "nodes")?;
            let edges: Vec<TrieEdge> = data_array(&step.data, "edges")?;
            TreeTemplate::new(config).frame(&nodes, &edges, 0.0)
        }
        LayoutKind::Grid if step.data.get("cells").is_some() => {
            let cells: Vec<GridCell> = data_array(&step.data, "cells")?;
            let rows = step.data.get("rows").and_then(Value::as_u64).unwrap_or(0) as usize;
            let cols = step.data.get("cols").and_then(Value::as_u64).unwrap_or(0) as usize;
            GridTemplate::new(config).frame(&cells, rows, cols, &step.highlights, 0.0)
        }
        _ => {
            let nodes: Vec<GraphNode> = data_array(&step.data, "nodes")?;
            let edges: Vec<GraphEdge> = data_array(&step.data, "edges")?;
            GraphTemplate::new(config).frame(&nodes, &edges, 0.0)
        }
    };
    Ok(scene)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let trace = Trace::from_json_str(&text)?;

    match args.command {
        Command::Steps => {
            let out: Vec<StepOut<'_>> = trace
                .steps()
                .iter()
                .enumerate()
                .map(|(index, step)| StepOut {
                    index,
                    id: step.id,
                    description: &step.description,
                    variables: step.variables.names().collect(),
                    highlights: &step.highlights,
                })
                .collect();
            write_json(&out, args.pretty)
        }
        Command::Validate => {
            trace.validate()?;
            write_json(
                &ValidateOut {
                    steps: trace.len(),
                    ok: true,
                },
                args.pretty,
            )
        }
        Command::Scene => {
            let scene = resolve_scene(&args, &trace)?;
            write_json(&scene, args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
