use std::path::Path;

use anyhow::{bail, Context, Result};
use folio_blocks::{nav_menu_items, parse_blocks_json, BlockNode};
use folio_engine::input::InputEvent;
use folio_engine::logging::{init_logging, LoggingConfig};
use folio_ui::prelude::*;
use folio_ui::widgets::gradient_picker::position;

const USAGE: &str = "\
usage:
  folio-studio menu <blocks.json>
  folio-studio drag <from%> <to%> [--config picker.json]";

/// Bar used by the scripted drag; wide enough that one pixel is one percent
/// with the default picker config.
const BAR: Rect = Rect::new(0.0, 0.0, 128.0, 24.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("menu") => {
            let path = args.get(1).context("menu needs a block JSON file")?;
            run_menu(Path::new(path))
        }
        Some("drag") => {
            let from = parse_percent(args.get(1))?;
            let to = parse_percent(args.get(2))?;
            let config = match args.iter().position(|a| a == "--config") {
                Some(i) => {
                    let path = args.get(i + 1).context("--config needs a file")?;
                    load_config(Path::new(path))?
                }
                None => GradientPickerConfig::default(),
            };
            run_drag(from, to, config)
        }
        _ => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

fn parse_percent(arg: Option<&String>) -> Result<f32> {
    let raw = arg.context("missing percentage")?;
    let value: f32 = raw.parse().with_context(|| format!("not a number: {raw:?}"))?;
    if !(0.0..=100.0).contains(&value) {
        bail!("percentage {value} is outside 0..=100");
    }
    Ok(value)
}

fn load_config(path: &Path) -> Result<GradientPickerConfig> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&src).with_context(|| format!("parsing {}", path.display()))
}

// ── menu ──────────────────────────────────────────────────────────────────

fn run_menu(path: &Path) -> Result<()> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let blocks = parse_blocks_json(&src).with_context(|| format!("parsing {}", path.display()))?;

    // A single navigation-menu block contributes its children; anything else
    // is taken as the list of top-level items.
    let items = match blocks.as_slice() {
        [menu] if menu.name.as_deref() == Some("core/navigation-menu") => nav_menu_items(menu),
        roots => folio_blocks::flatten_menu(roots),
    };
    log::info!(
        "{} menu items from {} blocks",
        items.len(),
        blocks.iter().map(BlockNode::count).sum::<usize>()
    );
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}

// ── drag ──────────────────────────────────────────────────────────────────

/// Presses the stop at `from` percent, drags it to `to` in one-percent steps
/// and releases, printing every emitted gradient.
fn run_drag(from: f32, to: f32, config: GradientPickerConfig) -> Result<()> {
    let gradient = Gradient::default().with_color_stop_added(from, Rgba::opaque(255, 200, 0));
    let index = gradient.len() - 1;

    let mut picker = GradientPicker::new(gradient)
        .config(config.clone())
        .on_change(|g| match serde_json::to_string(g) {
            Ok(json) => println!("change: {json}"),
            Err(err) => log::error!("could not serialize gradient: {err}"),
        });
    picker.set_bounds(Some(BAR));
    let mut listeners = PointerListeners::new();

    let x_for = |p: f32| {
        position::marker_center_x(p, Some(BAR), &config).context("bar is not measurable")
    };

    let mut script = vec![InputEvent::primary_pressed(x_for(from)?, 12.0)];
    let steps = (to - from).abs().ceil() as usize;
    for step in 1..=steps {
        let p = from + (to - from) * step as f32 / steps as f32;
        script.push(InputEvent::moved(x_for(p)?, 12.0));
    }
    script.push(InputEvent::primary_released(x_for(to)?, 12.0));

    for input in &script {
        if let Some(event) = UiEvent::from_input(input) {
            picker.on_event(&event, &mut listeners);
        }
    }

    if let Some(stop) = picker.open_popover() {
        println!("clicked stop {stop}: color popover would open");
    }
    match picker.gradient().percent_at(index) {
        Some(p) => println!("stop {index} ends at {p}%"),
        None => bail!("dragged stop {index} lost its position"),
    }
    if listeners.active_count() != 0 {
        bail!("{} pointer listeners leaked", listeners.active_count());
    }
    Ok(())
}
