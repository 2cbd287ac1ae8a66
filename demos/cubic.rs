//! Graph of f(x) = x³ on [-2, 2]: 40 subintervals, 41 data points.

use std::{error::Error,
          fs::File};
use plot_sampling::{buffer::VertexBuffer, Sampling, Spacing};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let s = Sampling::graph(|x: f64| x.powi(3), -2., 2.)
        .n(40)
        .spacing(Spacing::Intervals)
        .build();
    s.write(&mut File::create("Data.txt")?)?;
    println!("The data points have been created and saved in the \
              file 'Data.txt'");

    // What a line-strip renderer would upload.
    let vertices = VertexBuffer::interleaved(&s);
    let indices = vertices.indices();
    println!("{} vertices of {} floats, {} indices",
             vertices.vertex_count(), vertices.stride(),
             indices.len());
    Ok(())
}
