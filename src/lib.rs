//! Uniform sampling of function graphs, parametric curves and
//! surfaces into ordered sequences of colored samples.
//!
//! A [`Sampling`] is produced by evaluating a user-supplied function
//! over an evenly spaced grid and mapping each point to a vertex
//! color.  Its order is generation order, which is also the order a
//! renderer draws the points as a line strip or mesh.  Two consumers
//! are provided: a human-readable data file writer (see
//! [`Sampling::data_file`]) and flat `f32` vertex arrays (see
//! [`buffer`]).  Windowing, shaders and the render loop itself belong
//! to the calling application.

use std::{fmt::{self, Display, Formatter},
          io::{self, Write}};
use log::debug;

pub mod buffer;
pub mod color;
pub mod diff;
pub mod grid;

pub use color::{Color, ColorMap};
pub use grid::{Axis, Spacing};

/// One evaluated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Parameter the function was evaluated at.  Equals `x` for
    /// graphs; the row-major index for surfaces.
    pub t: f64,
    /// Position.  `z` is `0` for planar samplings.
    pub pos: [f64; 3],
    /// Forward-difference slope, when the sampling computes one.
    pub slope: Option<f64>,
    /// Vertex color, channels in \[0, 1\].
    pub color: Color,
}

/// An ordered sequence of [`Sample`]s.  The order is semantically
/// significant: it is the path a line-strip renderer follows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampling {
    samples: Vec<Sample>,
    spatial: bool,
}

impl Sampling {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize { self.samples.len() }

    /// Return `true` if the sampling holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Return `true` if the samples carry a meaningful z coordinate.
    #[inline]
    pub fn is_spatial(&self) -> bool { self.spatial }

    /// Iterate on the samples in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// The samples in generation order.
    #[inline]
    pub fn samples(&self) -> &[Sample] { &self.samples }

    /// Return the smallest box enclosing all the positions of the
    /// sampling.  If the sampling is empty, the "min" fields are
    /// +∞ and the "max" fields -∞.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox {
            xmin: f64::INFINITY, xmax: f64::NEG_INFINITY,
            ymin: f64::INFINITY, ymax: f64::NEG_INFINITY,
            zmin: f64::INFINITY, zmax: f64::NEG_INFINITY };
        for p in self.iter() {
            let [x, y, z] = p.pos;
            if x < bb.xmin { bb.xmin = x }
            if x > bb.xmax { bb.xmax = x }
            if y < bb.ymin { bb.ymin = y }
            if y > bb.ymax { bb.ymax = y }
            if z < bb.zmin { bb.zmin = z }
            if z > bb.zmax { bb.zmax = z }
        }
        bb
    }
}

/// A box \[`xmin`, `xmax`\] × \[`ymin`, `ymax`\] × \[`zmin`, `zmax`\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,
}

impl BoundingBox {
    /// Return the smaller bounding box containing both `self` and
    /// `other`.
    #[inline]
    pub fn hull(&self, other: &Self) -> Self {
        BoundingBox { xmin: self.xmin.min(other.xmin),
                      xmax: self.xmax.max(other.xmax),
                      ymin: self.ymin.min(other.ymin),
                      ymax: self.ymax.max(other.ymax),
                      zmin: self.zmin.min(other.zmin),
                      zmax: self.zmax.max(other.zmax) }
    }
}

#[inline]
fn check_finite(fun: &str, a: f64, b: f64) {
    if !a.is_finite() {
        panic!("plot_sampling::{}: a = {} must be finite", fun, a);
    }
    if !b.is_finite() {
        panic!("plot_sampling::{}: b = {} must be finite", fun, b);
    }
}

////////////////////////////////////////////////////////////////////////
//
// Defining a sampling with standard options & checks

impl Sampling {
    /// Create a sampling of the graph of `f` on the interval
    /// \[`a`, `b`\] with evenly spaced values of the argument.
    ///
    /// Panics if `a` or `b` is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use plot_sampling::{Sampling, Spacing};
    /// let s = Sampling::graph(|x: f64| x.powi(3), -2., 2.)
    ///     .n(40).spacing(Spacing::Intervals).build();
    /// assert_eq!(s.len(), 41);
    /// ```
    #[must_use]
    pub fn graph<F>(f: F, a: f64, b: f64) -> Graph<F>
    where F: FnMut(f64) -> f64 {
        check_finite("graph", a, b);
        Graph { f, a, b,
                n: 100,
                spacing: Spacing::Inclusive,
                slope_step: None,
                color: ColorMap::Fixed(color::WHITE) }
    }

    /// Create a sampling of the parametric curve `f` for the
    /// parameter in \[`a`, `b`\].
    ///
    /// Panics if `a` or `b` is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use plot_sampling::Sampling;
    /// let s = Sampling::param3(|t: f64| [t.cos(), t.sin(), t], 0., 6.)
    ///     .n(50).build();
    /// assert_eq!(s.len(), 50);
    /// ```
    #[must_use]
    pub fn param3<F>(f: F, a: f64, b: f64) -> Param3<F>
    where F: FnMut(f64) -> [f64; 3] {
        check_finite("param3", a, b);
        Param3 { f, a, b,
                 n: 100,
                 spacing: Spacing::Inclusive,
                 color: ColorMap::Fixed(color::WHITE) }
    }

    /// Create a sampling of the surface `z = f(x, y)` on the
    /// rectangle \[`x[0]`, `x[1]`\] × \[`y[0]`, `y[1]`\], traversed
    /// in row-major order (outer loop on x, inner on y).
    ///
    /// Panics if a bound is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use plot_sampling::Sampling;
    /// let s = Sampling::surface(|x, y| 2. * x * x * y,
    ///                           [-2., 2.], [-2., 2.]).build();
    /// assert_eq!(s.len(), 100);
    /// ```
    #[must_use]
    pub fn surface<F>(f: F, x: [f64; 2], y: [f64; 2]) -> Surface<F>
    where F: FnMut(f64, f64) -> f64 {
        check_finite("surface", x[0], x[1]);
        check_finite("surface", y[0], y[1]);
        Surface { f, x, y,
                  nx: 10,
                  ny: 10,
                  spacing: Spacing::Inclusive,
                  color: ColorMap::Fixed(color::WHITE) }
    }
}

/// Options for sampling a function ℝ → ℝ.  See [`Sampling::graph`].
pub struct Graph<F> {
    f: F,  a: f64,  b: f64,
    n: usize,
    spacing: Spacing,
    slope_step: Option<f64>,
    color: ColorMap,
}

/// Options for sampling a curve ℝ → ℝ³.  See [`Sampling::param3`].
pub struct Param3<F> {
    f: F,  a: f64,  b: f64,
    n: usize,
    spacing: Spacing,
    color: ColorMap,
}

/// Options for sampling a function ℝ² → ℝ.  See
/// [`Sampling::surface`].
pub struct Surface<F> {
    f: F,
    x: [f64; 2],
    y: [f64; 2],
    nx: usize,
    ny: usize,
    spacing: Spacing,
    color: ColorMap,
}

macro_rules! sampling_options {
    ($struct: ident) => {
        impl<F> $struct<F> {
            /// Set the sample count of the axis.  How many values
            /// that yields depends on the [`Spacing`].  Panics if
            /// `n == 0`.
            pub fn n(mut self, n: usize) -> Self {
                if n == 0 {
                    panic!("plot_sampling: n must be at least 1");
                }
                self.n = n;
                self
            }

            /// Set the spacing convention of the axis.
            pub fn spacing(mut self, spacing: Spacing) -> Self {
                self.spacing = spacing;
                self
            }

            /// Set the color policy of the sampling.
            pub fn color(mut self, color: ColorMap) -> Self {
                self.color = color;
                self
            }
        }
    }
}

sampling_options!(Graph);
sampling_options!(Param3);

impl<F> Graph<F>
where F: FnMut(f64) -> f64 {
    /// Also compute the forward-difference slope at every sample,
    /// with step `h`.  The step is independent of the grid spacing.
    ///
    /// Panics if `h` is not finite or is zero.
    pub fn slope(mut self, h: f64) -> Self {
        if !h.is_finite() || h == 0. {
            panic!("plot_sampling::slope: step h = {} must be finite \
                    and nonzero", h);
        }
        self.slope_step = Some(h);
        self
    }

    /// Evaluate the function over the grid and return the sampling.
    #[must_use]
    pub fn build(mut self) -> Sampling {
        let axis = Axis::new(self.a, self.b, self.n, self.spacing);
        let n = axis.len();
        let want_slope = self.slope_step.is_some()
            || matches!(self.color, ColorMap::Slope { .. });
        let h = self.slope_step.unwrap_or(diff::DEFAULT_STEP);
        let mut samples = Vec::with_capacity(n);
        let mut prev = None;
        for (i, x) in axis.enumerate() {
            let y = (self.f)(x);
            let slope = if want_slope {
                Some(diff::forward(&mut self.f, x, h))
            } else {
                None
            };
            let color = self.color.color_at(i, n, x, y, slope, prev);
            samples.push(Sample { t: x, pos: [x, y, 0.], slope, color });
            prev = Some(y);
        }
        debug!("graph: {} samples on [{}, {}]", samples.len(),
               self.a, self.b);
        Sampling { samples, spatial: false }
    }
}

impl<F> Param3<F>
where F: FnMut(f64) -> [f64; 3] {
    /// Evaluate the curve over the parameter range and return the
    /// sampling.
    #[must_use]
    pub fn build(mut self) -> Sampling {
        let axis = Axis::new(self.a, self.b, self.n, self.spacing);
        let n = axis.len();
        let mut samples = Vec::with_capacity(n);
        let mut prev = None;
        for (i, t) in axis.enumerate() {
            let pos = (self.f)(t);
            let color = self.color.color_at(i, n, pos[0], pos[2],
                                            None, prev);
            samples.push(Sample { t, pos, slope: None, color });
            prev = Some(pos[2]);
        }
        debug!("param3: {} samples on [{}, {}]", samples.len(),
               self.a, self.b);
        Sampling { samples, spatial: true }
    }
}

impl<F> Surface<F>
where F: FnMut(f64, f64) -> f64 {
    /// Set the sample counts of the x and y axes.  Panics if either
    /// is zero.
    pub fn n(mut self, nx: usize, ny: usize) -> Self {
        if nx == 0 || ny == 0 {
            panic!("plot_sampling: n must be at least 1");
        }
        self.nx = nx;
        self.ny = ny;
        self
    }

    /// Set the spacing convention, used by both axes.
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the color policy of the sampling.
    pub fn color(mut self, color: ColorMap) -> Self {
        self.color = color;
        self
    }

    /// Evaluate the surface over the grid and return the sampling.
    #[must_use]
    pub fn build(mut self) -> Sampling {
        let ax = Axis::new(self.x[0], self.x[1], self.nx, self.spacing);
        let ay = Axis::new(self.y[0], self.y[1], self.ny, self.spacing);
        let n = ax.len() * ay.len();
        let mut samples = Vec::with_capacity(n);
        let mut prev = None;
        for (i, (x, y)) in grid::grid2(ax, ay).enumerate() {
            let z = (self.f)(x, y);
            let color = self.color.color_at(i, n, x, z, None, prev);
            samples.push(Sample { t: i as f64, pos: [x, y, z],
                                  slope: None, color });
            prev = Some(z);
        }
        debug!("surface: {} samples on [{}, {}] x [{}, {}]",
               samples.len(), self.x[0], self.x[1], self.y[0],
               self.y[1]);
        Sampling { samples, spatial: true }
    }
}

////////////////////////////////////////////////////////////////////////
//
// Output

/// How colors appear in a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorColumns {
    /// No color columns.
    Omit,
    /// `r: <v> g: <v> b: <v>`
    Short,
    /// `red: <v> green: <v> blue: <v>`
    Long,
    /// `Color: <r> <g> <b>`
    Grouped,
}

/// Data file output: one `key: value` line per sample.
///
/// # Example
///
/// ```
/// use std::fs::File;
/// use plot_sampling::{ColorColumns, Sampling};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let s = Sampling::graph(|x: f64| x * x, -1., 1.).n(5).build();
/// s.data_file().header(true).colors(ColorColumns::Long)
///     .write(&mut File::create("target/data.txt")?)?;
/// # Ok(()) }
/// ```
pub struct DataFile<'a> {
    sampling: &'a Sampling,
    header: bool,
    colors: ColorColumns,
}

impl<'a> DataFile<'a> {
    #[inline]
    fn new(sampling: &'a Sampling) -> Self {
        Self { sampling, header: false, colors: ColorColumns::Omit }
    }

    /// Precede the rows with a `Number of lines: <count>` line.
    pub fn header(&mut self, header: bool) -> &mut Self {
        self.header = header;
        self
    }

    /// Set how colors appear in the rows.  Default:
    /// [`ColorColumns::Omit`].
    pub fn colors(&mut self, colors: ColorColumns) -> &mut Self {
        self.colors = colors;
        self
    }

    /// Write the sampling, one line per sample.  A `Derivative:`
    /// column appears when the samples carry a slope.
    pub fn write(&self, f: &mut impl Write) -> Result<(), io::Error> {
        let s = self.sampling;
        if self.header {
            write!(f, "Number of lines: {}\n", s.len())?;
        }
        for p in s.iter() {
            write!(f, "x: {} y: {}", p.pos[0], p.pos[1])?;
            if s.is_spatial() {
                write!(f, " z: {}", p.pos[2])?;
            }
            if let Some(slope) = p.slope {
                write!(f, " Derivative: {}", slope)?;
            }
            let c = p.color;
            match self.colors {
                ColorColumns::Omit => (),
                ColorColumns::Short =>
                    write!(f, " r: {} g: {} b: {}", c.r, c.g, c.b)?,
                ColorColumns::Long =>
                    write!(f, " red: {} green: {} blue: {}",
                           c.r, c.g, c.b)?,
                ColorColumns::Grouped =>
                    write!(f, " Color: {} {} {}", c.r, c.g, c.b)?,
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

/// # Output
impl Sampling {
    /// Write the sampling as a data file, with options.
    pub fn data_file(&self) -> DataFile<'_> { DataFile::new(self) }

    /// Write the sampling to `f` with the default options: positions
    /// only, no header.
    pub fn write(&self, f: &mut impl Write) -> Result<(), io::Error> {
        self.data_file().write(f)
    }
}

impl Display for Sampling {
    /// Display the sampling in the default data file form: positions
    /// only, one `key: value` line per sample.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        for p in self.iter() {
            write!(f, "x: {} y: {}", p.pos[0], p.pos[1])?;
            if self.spatial {
                write!(f, " z: {}", p.pos[2])?;
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////
//
// Tests

#[cfg(test)]
mod tests {
    use crate::{color, ColorColumns, ColorMap, Sampling, Spacing};

    #[test]
    fn cubic_endpoints() {
        let s = Sampling::graph(|x: f64| x.powi(3), -2., 2.)
            .n(40).spacing(Spacing::Intervals).build();
        assert_eq!(s.len(), 41);
        let first = &s.samples()[0];
        assert_eq!((first.pos[0], first.pos[1]), (-2., -8.));
        let mid = &s.samples()[20];
        assert_eq!((mid.pos[0], mid.pos[1]), (0., 0.));
        let last = &s.samples()[40];
        assert!((last.pos[0] - 2.).abs() < 1e-12);
        assert!((last.pos[1] - 8.).abs() < 1e-12);
    }

    #[test]
    fn graph_is_planar() {
        let s = Sampling::graph(|x| x, 0., 1.).n(2).build();
        assert!(!s.is_spatial());
        assert!(s.iter().all(|p| p.pos[2] == 0.));
    }

    #[test]
    fn slope_coloring() {
        let s = Sampling::graph(|x: f64| x * x, -2., 2.)
            .n(5)
            .slope(0.01)
            .color(ColorMap::Slope { rising: color::GREEN,
                                     falling: color::RED })
            .build();
        // x² falls left of 0 and rises right of it.
        assert_eq!(s.samples()[0].color, color::RED);
        assert_eq!(s.samples()[4].color, color::GREEN);
        let slope = s.samples()[3].slope.unwrap();
        // f'(1) = 2 up to the O(h) forward-difference bias.
        assert!((slope - 2.01).abs() < 1e-9);
    }

    #[test]
    fn slope_color_without_explicit_step() {
        let s = Sampling::graph(|x| 3. * x, 0., 1.)
            .n(3)
            .color(ColorMap::Slope { rising: color::GREEN,
                                     falling: color::RED })
            .build();
        // The map forces slope computation with the default step.
        assert!(s.iter().all(|p| p.slope.is_some()));
        assert!(s.iter().all(|p| p.color == color::GREEN));
    }

    #[test]
    fn trend_coloring_first_sample_falls() {
        let mut ys = [1., 3., 2., 5.].into_iter();
        let s = Sampling::graph(move |_| ys.next().unwrap(), 0., 3.)
            .n(4)
            .color(ColorMap::Trend { rising: color::GREEN,
                                     falling: color::RED })
            .build();
        let colors: Vec<_> = s.iter().map(|p| p.color).collect();
        assert_eq!(colors, vec![color::RED, color::GREEN,
                                color::RED, color::GREEN]);
    }

    #[test]
    fn surface_row_major() {
        let s = Sampling::surface(|x, y| 2. * x * x * y,
                                  [-2., 2.], [-2., 2.]).build();
        assert_eq!(s.len(), 100);
        assert!(s.is_spatial());
        let first = &s.samples()[0];
        assert_eq!(first.pos, [-2., -2., -16.]);
        // The first 10 samples share x = -2 (inner loop runs on y).
        assert!(s.samples()[..10].iter().all(|p| p.pos[0] == -2.));
        let last = &s.samples()[99];
        assert!((last.pos[0] - 2.).abs() < 1e-12);
        assert!((last.pos[1] - 2.).abs() < 1e-12);
        assert!((last.pos[2] - 16.).abs() < 1e-10);
    }

    #[test]
    fn spiral_parameter_range() {
        let s = Sampling::param3(
            |t| [0.1 * t * t.cos(), 0.1 * t * t.sin(), 0.1 * t],
            0., 10.)
            .n(50).spacing(Spacing::Exclusive)
            .color(ColorMap::Gradient)
            .build();
        assert_eq!(s.len(), 50);
        assert_eq!(s.samples()[0].pos, [0., 0., 0.]);
        // Endpoint excluded: the parameter stops at 9.8.
        let last = &s.samples()[49];
        assert!((last.t - 9.8).abs() < 1e-12);
        assert_eq!(s.samples()[0].color.b, 1.);
    }

    #[test]
    fn bounding_box_encloses_all_samples() {
        let s = Sampling::graph(|x: f64| x * x, -2., 2.)
            .n(5).build();
        let bb = s.bounding_box();
        assert_eq!((bb.xmin, bb.xmax), (-2., 2.));
        assert_eq!((bb.ymin, bb.ymax), (0., 4.));
        assert_eq!((bb.zmin, bb.zmax), (0., 0.));
    }

    #[test]
    fn bounding_box_hull() {
        let a = Sampling::graph(|x| x, 0., 1.).n(2).build()
            .bounding_box();
        let b = Sampling::graph(|x| -x, -1., 0.).n(2).build()
            .bounding_box();
        let h = a.hull(&b);
        assert_eq!((h.xmin, h.xmax), (-1., 1.));
        assert_eq!((h.ymin, h.ymax), (0., 1.));
    }

    #[test]
    fn write_positions_only() {
        let s = Sampling::graph(|x| 2. * x, 0., 1.).n(2).build();
        let mut out = Vec::new();
        s.write(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(),
                   "x: 0 y: 0\nx: 1 y: 2\n");
    }

    #[test]
    fn data_file_header_and_long_colors() {
        let s = Sampling::surface(|x, _| x, [0., 1.], [0., 1.])
            .n(2, 2)
            .color(ColorMap::Grayscale)
            .build();
        let mut out = Vec::new();
        s.data_file().header(true).colors(ColorColumns::Long)
            .write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Number of lines: 4"));
        assert_eq!(lines.next(),
                   Some("x: 0 y: 0 z: 0 red: 0.5 green: 0.5 blue: 0.5"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn data_file_derivative_column() {
        let s = Sampling::graph(|x| x, 0., 1.)
            .n(2).slope(0.01)
            .color(ColorMap::Slope { rising: color::GREEN,
                                     falling: color::RED })
            .build();
        let mut out = Vec::new();
        s.data_file().colors(ColorColumns::Grouped)
            .write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().next(),
                   Some("x: 0 y: 0 Derivative: 1 Color: 0 1 0"));
    }

    #[test]
    fn display_matches_write() {
        let s = Sampling::graph(|x| x, 0., 1.).n(2).build();
        let mut out = Vec::new();
        s.write(&mut out).unwrap();
        assert_eq!(format!("{}", s), String::from_utf8(out).unwrap());
    }

    #[test]
    #[should_panic]
    fn graph_rejects_non_finite_bound() {
        let _ = Sampling::graph(|x| x, 0., f64::INFINITY);
    }

    #[test]
    #[should_panic]
    fn n_zero_panics() {
        let _ = Sampling::graph(|x| x, 0., 1.).n(0);
    }
}
