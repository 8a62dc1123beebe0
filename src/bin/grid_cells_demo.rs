use grid_cells::config::{self, RunConfig, StageConfig, TileConfig};
use grid_cells::diagnostics::{GridReport, InputDescriptor, StageTrace};
use grid_cells::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use grid_cells::image::extract_regions;
use grid_cells::tiler::{GridTiler, PitchSession, SessionStep};
use grid_cells::LineAggregator;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;
    let (width, height) = config.dimensions()?;

    let trace = match &config.stage {
        StageConfig::Lines(lines) => {
            let aggregator = LineAggregator::new(lines.params);
            let (cells, stage) = aggregator
                .detect_with_report(&lines.line_segments(), width, height)
                .map_err(|e| e.to_string())?;
            (cells, StageTrace::Lines(stage))
        }
        StageConfig::Tile(tile) => run_tile(tile, width, height)?,
    };
    let (cells, trace) = trace;

    let report = GridReport {
        input: InputDescriptor {
            width,
            height,
            source: config.input.as_ref().map(|p| p.display().to_string()),
        },
        cells,
        trace,
    };
    print_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(dir) = &config.output.regions_dir {
        save_regions(&config, &report, dir)?;
    }
    Ok(())
}

fn run_tile(
    tile: &TileConfig,
    width: usize,
    height: usize,
) -> Result<(grid_cells::GridCells, StageTrace), String> {
    let anchor = tile.resolve_anchor()?;
    let mut params = tile.params;

    if !tile.proposals.is_empty() {
        let mut session = PitchSession::new(anchor, width, height, params.anchor_mode)
            .map_err(|e| e.to_string())?;
        for &[x, y] in &tile.proposals {
            match session.propose(x, y).map_err(|e| e.to_string())? {
                SessionStep::Preview(cells) => {
                    println!("preview offsets=({x}, {y}) cells={}", cells.len())
                }
                SessionStep::Finished(_) => break,
            }
        }
        if !session.is_finished() {
            log::warn!("offset proposals ended without confirmation; using the last preview");
        }
        let [x, y] = session.offsets();
        params = params.with_offsets(x, y);
    }

    let (cells, stage) = GridTiler::new(params)
        .tile_with_report(anchor, width, height)
        .map_err(|e| e.to_string())?;
    Ok((cells, StageTrace::Tile(stage)))
}

fn save_regions(config: &RunConfig, report: &GridReport, dir: &Path) -> Result<(), String> {
    let input = config
        .input
        .as_ref()
        .ok_or("regions_dir requires an input image")?;
    let gray = load_grayscale_image(input)?;
    let regions = extract_regions(&gray.as_view(), &report.cells.boxes, config.output.regions)
        .map_err(|e| e.to_string())?;
    let cols = report.cells.shape.cols.max(1);
    for (idx, region) in regions.iter().enumerate() {
        let path = dir.join(format!("cell_r{}_c{}.png", idx / cols, idx % cols));
        save_grayscale_u8(region, &path)?;
    }
    println!("Saved {} regions to {}", regions.len(), dir.display());
    Ok(())
}

fn print_summary(report: &GridReport) {
    let shape = report.cells.shape;
    println!("Grid summary");
    println!("  image: {}x{}", report.input.width, report.input.height);
    println!("  shape: {} rows x {} cols", shape.rows, shape.cols);
    println!("  boxes: {}", report.cells.len());
    match &report.trace {
        StageTrace::Lines(stage) => {
            println!(
                "  segments: total={} horizontal={} vertical={} discarded={}",
                stage.segments_total,
                stage.horizontal_segments,
                stage.vertical_segments,
                stage.discarded_segments
            );
            println!("  rows at y={:?}", stage.row_lines);
            println!("  cols at x={:?}", stage.col_lines);
            println!("  elapsed_ms={:.3}", stage.timing.total_ms);
        }
        StageTrace::Tile(stage) => {
            println!(
                "  anchor: {:?} pitch: {:?} elapsed_ms={:.3}",
                stage.anchor, stage.pitch, stage.timing.total_ms
            );
        }
    }
}

fn usage() -> String {
    "Usage: grid_cells_demo <config.json>".to_string()
}
