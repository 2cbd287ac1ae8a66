//! 3D spiral (a·t·cos t, a·t·sin t, b·t) for t in [0, 10), 50 data
//! points with a gradient color per vertex.

use std::{error::Error,
          fs::File};
use plot_sampling::{buffer::PlanarBuffers, ColorColumns, ColorMap,
                    Sampling, Spacing};

// Shape parameters: a spreads the turns, b stretches the height.
const A: f64 = 0.1;
const B: f64 = 0.1;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let s = Sampling::param3(
        |t| [A * t * t.cos(), A * t * t.sin(), B * t], 0., 10.)
        .n(50)
        .spacing(Spacing::Exclusive)
        .color(ColorMap::Gradient)
        .build();
    s.data_file()
        .colors(ColorColumns::Short)
        .write(&mut File::create("Data.txt")?)?;
    println!("The data points have been created and saved in the \
              file 'Data.txt'");

    // Position and color arrays for a two-buffer upload.
    let buffers = PlanarBuffers::split(&s);
    println!("{} vertices, {} position floats, {} color floats",
             buffers.vertex_count(), buffers.positions.len(),
             buffers.colors.len());
    Ok(())
}
