//! Surface z = f(x, y) = 2x²y on [-2, 2] × [-2, 2], sampled on a
//! 10 × 10 grid with a grayscale color derived from x.

use std::{error::Error,
          fs::File};
use plot_sampling::{buffer::VertexBuffer, ColorColumns, ColorMap,
                    Sampling};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let s = Sampling::surface(|x, y| 2. * x * x * y,
                              [-2., 2.], [-2., 2.])
        .n(10, 10)
        .color(ColorMap::Grayscale)
        .build();
    s.data_file()
        .header(true)
        .colors(ColorColumns::Long)
        .write(&mut File::create("Data.txt")?)?;
    println!("The data points have been created and saved in the \
              file 'Data.txt'");

    // Interleaved [x, y, z, r, g, b] layout for a single-buffer
    // upload, drawn as triangles.
    let vertices = VertexBuffer::interleaved(&s);
    let bb = s.bounding_box();
    println!("{} vertices of {} floats, z in [{}, {}]",
             vertices.vertex_count(), vertices.stride(),
             bb.zmin, bb.zmax);
    Ok(())
}
