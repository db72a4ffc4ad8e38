use std::mem::size_of;

use lhtools_formats::l3d::geometry::{Triangle, Vertex};
use zerocopy::AsBytes;

use crate::backend::{
    BackendResult, BufferHandle, GpuBackend, IndexFormat, VertexAttribute, VertexBufferLayout,
    VertexFormat,
};

/// Interleaved layout shared by every submesh: position, texture
/// coordinates, normal. A constant of the format, not per-file data.
pub fn vertex_layout() -> VertexBufferLayout {
    VertexBufferLayout {
        array_stride: size_of::<Vertex>() as u64,
        attributes: vec![
            VertexAttribute {
                location: 0,
                format: VertexFormat::Float32x3,
                offset: 0,
            },
            VertexAttribute {
                location: 1,
                format: VertexFormat::Float32x2,
                offset: 12,
            },
            VertexAttribute {
                location: 2,
                format: VertexFormat::Float32x3,
                offset: 20,
            },
        ],
    }
}

/// Vertex and index buffer pair for one submesh.
#[derive(Debug)]
pub struct GpuMesh {
    vertex_buffer: BufferHandle,
    index_buffer: BufferHandle,
    index_count: u32,
    layout: VertexBufferLayout,
}

impl GpuMesh {
    /// Uploads vertex and triangle data into freshly allocated buffers.
    /// The data is copied out; the source views are not retained.
    pub fn build(
        backend: &mut impl GpuBackend,
        label: Option<&str>,
        vertices: &[Vertex],
        triangles: &[Triangle],
    ) -> BackendResult<Self> {
        let vertex_buffer = backend.create_vertex_buffer(label, vertices.as_bytes())?;

        let index_buffer =
            match backend.create_index_buffer(label, triangles.as_bytes(), IndexFormat::Uint16) {
                Ok(buffer) => buffer,
                Err(err) => {
                    backend.destroy_buffer(vertex_buffer);
                    return Err(err);
                }
            };

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: (triangles.len() * 3) as u32,
            layout: vertex_layout(),
        })
    }

    pub fn vertex_buffer(&self) -> BufferHandle {
        self.vertex_buffer
    }

    pub fn index_buffer(&self) -> BufferHandle {
        self.index_buffer
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn layout(&self) -> &VertexBufferLayout {
        &self.layout
    }

    pub fn draw(&self, backend: &mut impl GpuBackend) {
        backend.set_vertex_buffer(0, self.vertex_buffer);
        backend.set_index_buffer(self.index_buffer, IndexFormat::Uint16);
        backend.draw_indexed(0..self.index_count);
    }

    pub fn destroy(self, backend: &mut impl GpuBackend) {
        backend.destroy_buffer(self.vertex_buffer);
        backend.destroy_buffer(self.index_buffer);
    }
}
