//! Flat `f32` arrays in the layouts a renderer uploads.
//!
//! Buffers are built from a finished [`Sampling`], never during
//! generation, and preserve generation order — the order in which a
//! line strip or mesh is drawn.

use crate::Sampling;

/// The draw indices `[0, 1, .., n - 1]` for `n` vertices.
pub fn indices(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

/// One interleaved vertex array: `[x, y, (z,) r, g, b]` per vertex.
/// The stride is 5 floats for planar samplings and 6 for spatial
/// ones.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    data: Vec<f32>,
    stride: usize,
}

impl VertexBuffer {
    /// Interleave positions and colors, one vertex per sample.
    pub fn interleaved(s: &Sampling) -> Self {
        let stride = if s.is_spatial() { 6 } else { 5 };
        let mut data = Vec::with_capacity(s.len() * stride);
        for p in s.iter() {
            data.push(p.pos[0] as f32);
            data.push(p.pos[1] as f32);
            if stride == 6 {
                data.push(p.pos[2] as f32);
            }
            data.push(p.color.r as f32);
            data.push(p.color.g as f32);
            data.push(p.color.b as f32);
        }
        VertexBuffer { data, stride }
    }

    /// Floats per vertex: 5 or 6.
    #[inline]
    pub fn stride(&self) -> usize { self.stride }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.stride
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// The whole interleaved array, ready for upload.
    #[inline]
    pub fn as_floats(&self) -> &[f32] { &self.data }

    /// The position components of vertex `i` (2 or 3 floats).
    pub fn position(&self, i: usize) -> &[f32] {
        let at = i * self.stride;
        &self.data[at..at + self.stride - 3]
    }

    /// The color components of vertex `i` (3 floats).
    pub fn color(&self, i: usize) -> &[f32] {
        let at = i * self.stride;
        &self.data[at + self.stride - 3..at + self.stride]
    }

    /// Draw indices parallel to the vertices.
    pub fn indices(&self) -> Vec<u32> {
        indices(self.vertex_count())
    }
}

/// Separate position and color arrays, for renderers that upload two
/// buffers instead of one interleaved array.  Positions always carry
/// 3 components per vertex (`z = 0` for planar samplings).
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl PlanarBuffers {
    /// Split a sampling into position and color arrays.
    pub fn split(s: &Sampling) -> Self {
        let mut positions = Vec::with_capacity(s.len() * 3);
        let mut colors = Vec::with_capacity(s.len() * 3);
        for p in s.iter() {
            positions.extend(p.pos.iter().map(|&v| v as f32));
            colors.push(p.color.r as f32);
            colors.push(p.color.g as f32);
            colors.push(p.color.b as f32);
        }
        PlanarBuffers { positions, colors }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Draw indices parallel to the vertices.
    pub fn indices(&self) -> Vec<u32> {
        indices(self.vertex_count())
    }
}

#[cfg(test)]
mod tests {
    use super::{indices, PlanarBuffers, VertexBuffer};
    use crate::{color, ColorMap, Sampling};

    fn planar() -> Sampling {
        Sampling::graph(|x| 2. * x, 0., 1.)
            .n(2)
            .color(ColorMap::Fixed(color::GREEN))
            .build()
    }

    fn spatial() -> Sampling {
        Sampling::param3(|t| [t, 2. * t, 3. * t], 0., 1.)
            .n(3)
            .color(ColorMap::Gradient)
            .build()
    }

    #[test]
    fn planar_stride_is_5() {
        let vb = VertexBuffer::interleaved(&planar());
        assert_eq!(vb.stride(), 5);
        assert_eq!(vb.vertex_count(), 2);
        assert_eq!(vb.as_floats(),
                   &[0., 0., 0., 1., 0.,
                     1., 2., 0., 1., 0.]);
    }

    #[test]
    fn spatial_stride_is_6() {
        let vb = VertexBuffer::interleaved(&spatial());
        assert_eq!(vb.stride(), 6);
        assert_eq!(vb.vertex_count(), 3);
        assert_eq!(vb.position(1), &[0.5, 1., 1.5]);
    }

    #[test]
    fn deinterleave_round_trips() {
        let s = spatial();
        let vb = VertexBuffer::interleaved(&s);
        for (i, p) in s.iter().enumerate() {
            let pos: Vec<f32> = p.pos.iter().map(|&v| v as f32).collect();
            assert_eq!(vb.position(i), &pos[..]);
            assert_eq!(vb.color(i),
                       &[p.color.r as f32, p.color.g as f32,
                         p.color.b as f32]);
        }
    }

    #[test]
    fn split_matches_interleaved() {
        let s = spatial();
        let vb = VertexBuffer::interleaved(&s);
        let pb = PlanarBuffers::split(&s);
        assert_eq!(pb.vertex_count(), vb.vertex_count());
        for i in 0..pb.vertex_count() {
            assert_eq!(&pb.positions[3 * i..3 * i + 3], vb.position(i));
            assert_eq!(&pb.colors[3 * i..3 * i + 3], vb.color(i));
        }
    }

    #[test]
    fn indices_cover_every_vertex() {
        assert_eq!(indices(4), vec![0, 1, 2, 3]);
        let vb = VertexBuffer::interleaved(&planar());
        assert_eq!(vb.indices(), vec![0, 1]);
    }
}
