//! # frame-offset CLI
//!
//! Usage:
//!   frame-offset scene.json --offset 16 -o resized.json
//!   cat scene.json | frame-offset --offset 8
//!   frame-offset --suggest 4
//!   frame-offset --example > scene.json
//!
//! Set `RUST_LOG=frame_offset=debug` to see per-container details.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use frame_offset::config::Config;
use frame_offset::model::Scene;
use frame_offset::plugin::{self, Parameters, SceneHost, OFFSET_PARAMETER};
use frame_offset::suggest::suggestions;
use frame_offset::PluginError;
use tracing_subscriber::EnvFilter;

/// Flags that take a value.
const VALUE_FLAGS: [&str; 4] = ["-o", "--offset", "--config", "--suggest"];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_scene_json());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e.user_message());
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), PluginError> {
    let config = match flag_value(args, "--config") {
        Some(path) => Config::from_file(Path::new(path))?,
        None => Config::default(),
    };

    if let Some(query) = flag_value(args, "--suggest") {
        for s in suggestions(&config.suggestions, query) {
            println!("{}", s);
        }
        return Ok(());
    }

    // Read input
    let input = match positional(args) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let scene: Scene = serde_json::from_str(&input)?;

    let mut params = Parameters::new();
    if let Some(offset) = flag_value(args, "--offset") {
        params.insert(OFFSET_PARAMETER.to_string(), offset.to_string());
    } else if let Some(offset) = config.default_offset {
        params.insert(OFFSET_PARAMETER.to_string(), offset.to_string());
    }

    let mut host = SceneHost::new(scene);
    plugin::start_with_parameters(&mut host, &params)?;
    let message = host.last_notification().unwrap_or_default().to_string();

    let out = serde_json::to_string_pretty(&host.scene)?;
    match flag_value(args, "-o") {
        Some(path) => fs::write(path, out)?,
        None => println!("{}", out),
    }
    eprintln!("✓ {}", message);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// First argument that is neither a flag nor a flag's value.
fn positional(args: &[String]) -> Option<&str> {
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if !arg.starts_with('-') {
            return Some(arg.as_str());
        }
    }
    None
}

fn example_scene_json() -> &'static str {
    r##"{
  "selection": [
    {
      "id": "1:2",
      "name": "Card",
      "type": "FRAME",
      "x": 0,
      "y": 0,
      "width": 120,
      "height": 120,
      "children": [
        { "id": "1:3", "name": "Avatar", "type": "RECTANGLE", "x": 10, "y": 10, "width": 20, "height": 20 },
        { "id": "1:4", "name": "Badge", "type": "RECTANGLE", "x": 50, "y": 50, "width": 10, "height": 10 }
      ]
    },
    {
      "id": "1:5",
      "name": "Button",
      "type": "COMPONENT",
      "x": 200,
      "y": 0,
      "width": 96,
      "height": 40,
      "layoutMode": "HORIZONTAL",
      "padding": { "left": 4, "top": 4, "right": 4, "bottom": 4 },
      "children": [
        { "id": "1:6", "name": "Label", "type": "TEXT", "x": 4, "y": 4, "width": 88, "height": 32 }
      ]
    }
  ]
}
"##
}
