//! Graph of f(x) = x² with its forward-difference derivative.
//! Rising stretches are drawn green, falling ones red.

use std::{error::Error,
          fs::File};
use plot_sampling::{buffer::VertexBuffer, color, ColorColumns,
                    ColorMap, Sampling, Spacing};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let s = Sampling::graph(|x: f64| x * x, -2., 2.)
        .n(40)
        .spacing(Spacing::Intervals)
        .slope(0.01)
        .color(ColorMap::Slope { rising: color::GREEN,
                                 falling: color::RED })
        .build();
    s.data_file()
        .colors(ColorColumns::Grouped)
        .write(&mut File::create("Data.txt")?)?;
    println!("The data points have been created and saved in the \
              file 'Data.txt'");

    let vertices = VertexBuffer::interleaved(&s);
    println!("{} vertices of {} floats",
             vertices.vertex_count(), vertices.stride());
    Ok(())
}
