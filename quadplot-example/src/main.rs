use anyhow::Context;
use clap::Parser;
use quadplot::{svg, Canvas, Coefficients, DEFAULT_STYLE};
use std::path::PathBuf;

extern crate nalgebra_glm as glm;

mod raster;

/// Solve ax² + bx + c = 0 and plot the parabola.
#[derive(Debug, Parser)]
#[command(allow_negative_numbers = true)]
struct Args {
    a: String,
    b: String,
    c: String,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    #[arg(long, default_value = "plot.svg")]
    svg: PathBuf,

    #[arg(long, default_value = "plot.png")]
    png: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let p = Coefficients::parse(&args.a, &args.b, &args.c).context("invalid equation")?;
    let canvas = Canvas::new(args.width, args.height)?;
    let plot = quadplot::plot(&p, canvas, &DEFAULT_STYLE);

    println!("{}", plot.summary(&p));

    std::fs::write(&args.svg, svg::to_svg(&plot.primitives, canvas))
        .with_context(|| format!("failed to write {}", args.svg.display()))?;
    log::info!("wrote {}", args.svg.display());

    let mut img = raster::Raster::new(canvas);
    quadplot::draw(&plot.primitives, &mut img);
    img.img
        .save(&args.png)
        .with_context(|| format!("failed to write {}", args.png.display()))?;
    log::info!("wrote {}", args.png.display());

    Ok(())
}
