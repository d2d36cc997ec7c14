//! stitchcut CLI - divide a straight sketch line into stitch cuts
//!
//! Builds an in-memory sketch around the given line, validates the
//! selection, and either opens the interactive parameter form or runs
//! the solver directly from command-line parameters.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use stitchcut_core::{generate, solve, CutParameters, Segment};
use stitchcut_math::Point3;
use stitchcut_sketch::{
    apply_cuts, resolve_selected_line, Document, DocumentObject, Selection, Sketch, SketchGeometry,
};

mod dialog;

use dialog::{CutDialog, DialogOutcome};

#[derive(Parser)]
#[command(name = "stitchcut")]
#[command(about = "Divide a straight sketch line into evenly spaced stitch cuts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive parameter form for a line
    Cut {
        /// Line start point as "x,y,z"
        #[arg(long, value_parser = parse_point)]
        start: Point3,
        /// Line end point as "x,y,z"
        #[arg(long, value_parser = parse_point)]
        end: Point3,
        /// Name for the sketch holding the line
        #[arg(long, default_value = "Sketch")]
        sketch: String,
    },
    /// Compute the cut length for a line length and parameter set
    Solve {
        /// Total line length in mm
        #[arg(long)]
        length: f64,
        /// Offset reserved at each end of the line
        #[arg(long, default_value_t = 3.0)]
        offset: f64,
        /// Gap between consecutive cuts
        #[arg(long, default_value_t = 3.0)]
        gap: f64,
        /// Number of cuts
        #[arg(long, default_value_t = 5)]
        count: u32,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate replacement segments without the interactive form
    Generate {
        /// Line start point as "x,y,z"
        #[arg(long, value_parser = parse_point)]
        start: Point3,
        /// Line end point as "x,y,z"
        #[arg(long, value_parser = parse_point)]
        end: Point3,
        /// Offset reserved at each end of the line
        #[arg(long, default_value_t = 3.0)]
        offset: f64,
        /// Gap between consecutive cuts
        #[arg(long, default_value_t = 3.0)]
        gap: f64,
        /// Number of cuts
        #[arg(long, default_value_t = 5)]
        count: u32,
        /// Emit the segments as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cut { start, end, sketch } => run_cut(start, end, &sketch),
        Commands::Solve {
            length,
            offset,
            gap,
            count,
            json,
        } => run_solve(length, offset, gap, count, json),
        Commands::Generate {
            start,
            end,
            offset,
            gap,
            count,
            json,
        } => run_generate(start, end, offset, gap, count, json),
    }
}

fn run_cut(start: Point3, end: Point3, sketch_name: &str) -> Result<()> {
    let mut sketch = Sketch::new(sketch_name);
    let edge = sketch.add_geometry(SketchGeometry::LineSegment { start, end });
    let mut doc = Document::new();
    let object = doc.add_object(DocumentObject::Sketch(sketch));

    let target = resolve_selected_line(&doc, &Selection::single_edge(object, edge))?;

    match CutDialog::new(target.line.length()).run()? {
        DialogOutcome::Cancelled => {
            println!("Cancelled, sketch unchanged.");
        }
        DialogOutcome::Accepted(params, solved) => {
            let segments = generate(&target.line, &params, &solved);
            apply_cuts(&mut doc, &target, &segments)?;

            println!(
                "Stitch cuts applied: {} cuts of {:.3} mm",
                params.count, solved.cut_length
            );
            if let Some(sketch) = doc.object(object).and_then(|obj| obj.as_sketch()) {
                for (i, geometry) in sketch.iter().enumerate() {
                    if let Some((a, b)) = geometry.line_endpoints() {
                        println!(
                            "  edge {}: ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
                            i, a.x, a.y, a.z, b.x, b.y, b.z
                        );
                    }
                }
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct SolveOutput {
    length: f64,
    edge_offset: f64,
    gap: f64,
    count: u32,
    usable_length: f64,
    cut_length: f64,
}

fn run_solve(length: f64, offset: f64, gap: f64, count: u32, json: bool) -> Result<()> {
    let params = CutParameters::new(offset, gap, count)?;
    let solved = solve(length, &params)?;

    if json {
        let output = SolveOutput {
            length,
            edge_offset: params.edge_offset,
            gap: params.gap,
            count: params.count,
            usable_length: solved.usable_length,
            cut_length: solved.cut_length,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "usable length: {:.3} mm, cut length: {:.3} mm",
            solved.usable_length, solved.cut_length
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct GenerateOutput {
    cut_length: f64,
    segments: Vec<Segment>,
}

fn run_generate(
    start: Point3,
    end: Point3,
    offset: f64,
    gap: f64,
    count: u32,
    json: bool,
) -> Result<()> {
    let line = stitchcut_core::LineSpec::new(start, end)?;
    let params = CutParameters::new(offset, gap, count)?;
    let solved = solve(line.length(), &params)?;
    let segments = generate(&line, &params, &solved);

    if json {
        let output = GenerateOutput {
            cut_length: solved.cut_length,
            segments,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("cut length: {:.3} mm", solved.cut_length);
        for (i, segment) in segments.iter().enumerate() {
            println!(
                "  cut {}: ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
                i,
                segment.start.x,
                segment.start.y,
                segment.start.z,
                segment.end.x,
                segment.end.y,
                segment.end.z
            );
        }
    }
    Ok(())
}

fn parse_point(text: &str) -> std::result::Result<Point3, String> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected \"x,y,z\", got {:?}", text));
    }
    let mut coords = [0.0_f64; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("{:?} is not a number", part.trim()))?;
    }
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}
