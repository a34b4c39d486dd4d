//! # Gravelly CLI Application
//!
//! Terminal front end for the gravel quantity calculator. Plays the role of
//! the presentation layer: prompts for raw inputs, formats the results, and
//! drives the history store. All arithmetic lives in `gravel_core`.
//!
//! Last-used values are restored as prompt defaults from a form snapshot in
//! the working directory, alongside the history file.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rand::thread_rng;

use gravel_core::calculator::{calculate, CalculationInput, CalculationResult};
use gravel_core::history::{HistoryRecord, HistoryStore, HISTORY_FILE};
use gravel_core::materials::GravelType;
use gravel_core::shapes::{PlotDimensions, Shape};
use gravel_core::snapshot::{FormSnapshot, SNAPSHOT_FILE};
use gravel_core::tips::pro_tip;
use gravel_core::units::{AreaUnit, LinearUnit};

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

/// Prompt for a number, falling back to the snapshot value for this field
/// and then to the hard default when the user just presses Enter.
fn prompt_f64(snapshot: &FormSnapshot, field: &str, label: &str, default: f64) -> f64 {
    let default = snapshot
        .get(field)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default);

    let input = match read_line(&format!("{} [{}]: ", label, default)) {
        Some(input) => input,
        None => return default,
    };
    if input.is_empty() {
        return default;
    }
    input.parse().unwrap_or_else(|_| {
        println!("  Not a number, using {}", default);
        default
    })
}

/// Prompt for anything with a `FromStr` (units, shapes, gravel types).
fn prompt_parsed<T>(snapshot: &FormSnapshot, field: &str, label: &str, default: T) -> T
where
    T: FromStr + ToString + Copy,
{
    let default = snapshot
        .get(field)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default);

    let input = match read_line(&format!("{} [{}]: ", label, default.to_string())) {
        Some(input) => input,
        None => return default,
    };
    if input.is_empty() {
        return default;
    }
    input.parse().unwrap_or_else(|_| {
        println!("  Unrecognized, using {}", default.to_string());
        default
    })
}

fn prompt_dimensions(snapshot: &FormSnapshot, shape: Shape) -> PlotDimensions {
    match shape {
        Shape::Rectangular => PlotDimensions::Rectangular {
            length: prompt_f64(snapshot, "length", "Length", 10.0),
            length_unit: prompt_parsed(snapshot, "length-unit", "Length unit (ft/m/in/yd/cm/mm)", LinearUnit::Feet),
            width: prompt_f64(snapshot, "width", "Width", 10.0),
            width_unit: prompt_parsed(snapshot, "width-unit", "Width unit (ft/m/in/yd/cm/mm)", LinearUnit::Feet),
        },
        Shape::Circular => PlotDimensions::Circular {
            diameter: prompt_f64(snapshot, "diameter", "Diameter", 10.0),
            diameter_unit: prompt_parsed(snapshot, "diameter-unit", "Diameter unit (ft/m/in/yd/cm/mm)", LinearUnit::Feet),
        },
        Shape::Triangular => PlotDimensions::Triangular {
            base: prompt_f64(snapshot, "base", "Base", 10.0),
            base_unit: prompt_parsed(snapshot, "base-unit", "Base unit (ft/m/in/yd/cm/mm)", LinearUnit::Feet),
            height: prompt_f64(snapshot, "height", "Height", 10.0),
            height_unit: prompt_parsed(snapshot, "height-unit", "Height unit (ft/m/in/yd/cm/mm)", LinearUnit::Feet),
        },
        Shape::Irregular => PlotDimensions::Irregular {
            area: prompt_f64(snapshot, "area", "Area", 100.0),
            area_unit: prompt_parsed(snapshot, "area-unit", "Area unit (sqft/sqm/sqyd)", AreaUnit::SquareFeet),
        },
    }
}

/// Remember the raw values the user settled on for the next run.
fn remember_inputs(snapshot: &mut FormSnapshot, input: &CalculationInput) {
    match &input.dimensions {
        PlotDimensions::Rectangular {
            length,
            length_unit,
            width,
            width_unit,
        } => {
            snapshot.set("length", length.to_string());
            snapshot.set("length-unit", length_unit.to_string());
            snapshot.set("width", width.to_string());
            snapshot.set("width-unit", width_unit.to_string());
        }
        PlotDimensions::Circular {
            diameter,
            diameter_unit,
        } => {
            snapshot.set("diameter", diameter.to_string());
            snapshot.set("diameter-unit", diameter_unit.to_string());
        }
        PlotDimensions::Triangular {
            base,
            base_unit,
            height,
            height_unit,
        } => {
            snapshot.set("base", base.to_string());
            snapshot.set("base-unit", base_unit.to_string());
            snapshot.set("height", height.to_string());
            snapshot.set("height-unit", height_unit.to_string());
        }
        PlotDimensions::Irregular { area, area_unit } => {
            snapshot.set("area", area.to_string());
            snapshot.set("area-unit", area_unit.to_string());
        }
    }
    snapshot.set("shape", input.dimensions.shape().to_string());
    snapshot.set("depth", input.depth.to_string());
    snapshot.set("depth-unit", input.depth_unit.to_string());
    snapshot.set("density", input.density_tons_per_cuyd.to_string());
    if let Some(price) = input.price_per_ton {
        snapshot.set("price", price.to_string());
    }
    snapshot.save();
}

fn print_results(result: &CalculationResult) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  GRAVEL CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Volume:");
    println!("  {:.2} yd³  ({:.2} ft³ | {:.2} m³)", result.volume_cuyd, result.volume_cuft, result.volume_cum);
    println!();
    println!("Weight:");
    println!("  {:.2} tons  ({:.0} lbs | {:.0} kg)", result.weight_tons, result.weight_lbs, result.weight_kg);
    println!();
    println!("Area:");
    println!("  {:.2} ft²  ({:.2} m²)", result.area_sqft, result.area_sqm());
    println!();
    if result.total_cost > 0.0 {
        println!("Estimated Cost:");
        println!("  ${:.2}  (${:.2} per ton)", result.total_cost, result.total_cost / result.weight_tons);
    } else {
        println!("Estimated Cost:");
        println!("  -  (enter a price per ton to estimate)");
    }
    println!();
    println!("Alternative Measurements:");
    println!("  Bags (50 lb):                {} bags needed", result.bags_50lb());
    println!("  Bags (40 lb):                {} bags needed", result.bags_40lb());
    println!("  Dump truck loads (10 yd³):   {:.2} loads", result.dump_truck_loads());
    println!("  Wheelbarrows (3 ft³):        {} trips", result.wheelbarrow_trips());
    println!("  Coverage at {:.1}\" depth:      {:.2} ft²", result.depth_ft * 12.0, result.area_sqft);
    println!();
    println!("Pro Tip:");
    println!("  {}", pro_tip(result, &mut thread_rng()));
    println!("═══════════════════════════════════════");
}

fn main() {
    // Keep the handle alive so warnings from the core reach stderr.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .ok()
        .and_then(|logger| logger.start().ok());

    println!("Gravelly CLI - Gravel Quantity Calculator");
    println!("=========================================");
    println!();

    let mut snapshot = FormSnapshot::open(SNAPSHOT_FILE);
    let mut history = HistoryStore::open(HISTORY_FILE);
    if !history.is_empty() {
        println!("({} previous calculations on record)", history.len());
        println!();
    }

    println!("Shapes: rectangular, circular, triangular, irregular");
    let shape: Shape = prompt_parsed(&snapshot, "shape", "Plot shape", Shape::Rectangular);
    let dimensions = prompt_dimensions(&snapshot, shape);

    let depth = prompt_f64(&snapshot, "depth", "Fill depth", 3.0);
    let depth_unit = prompt_parsed(&snapshot, "depth-unit", "Depth unit (ft/m/in/yd/cm/mm)", LinearUnit::Inches);

    println!();
    println!("Gravel types:");
    for gravel in GravelType::ALL {
        println!("  {:<20} {:.2} tons/yd³", gravel.label(), gravel.density_tons_per_cuyd());
    }
    let default_density = snapshot
        .get("density")
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| GravelType::PeaGravel.density_tons_per_cuyd());
    let density = match read_line(&format!("Gravel type or density (tons/yd³) [{}]: ", default_density)) {
        Some(input) if !input.is_empty() => match input.parse::<GravelType>() {
            Ok(gravel) => gravel.density_tons_per_cuyd(),
            Err(_) => input.parse().unwrap_or(default_density),
        },
        _ => default_density,
    };

    let price = prompt_f64(&snapshot, "price", "Price per ton (0 to skip)", 0.0);

    let input = CalculationInput {
        dimensions,
        depth,
        depth_unit,
        density_tons_per_cuyd: density,
        price_per_ton: if price > 0.0 { Some(price) } else { None },
    };

    match calculate(&input) {
        Ok(result) => {
            print_results(&result);

            history.append(HistoryRecord::new(shape, &result));
            println!();
            println!("Saved to history ({} calculations total).", history.len());

            remember_inputs(&mut snapshot, &input);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
