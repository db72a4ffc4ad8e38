//! Abstraction over the GPU service consumed by the resource builder.
//!
//! The embedding renderer supplies the implementation; resources are
//! addressed through opaque handles and must be explicitly destroyed.

use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to create buffer: {0}")]
    BufferCreationFailed(String),
    #[error("failed to create texture: {0}")]
    TextureCreationFailed(String),
    #[error("out of memory")]
    OutOfMemory,
    #[error("device lost")]
    DeviceLost,
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Handle to a GPU buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u64);

/// Handle to a GPU texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    Uint16,
    Uint32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 16-bit texels, four bits per channel, alpha included.
    Rgba4Unorm,
    Rgba8Unorm,
}

impl TextureFormat {
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::Rgba4Unorm => 2,
            TextureFormat::Rgba8Unorm => 4,
        }
    }
}

/// Texture descriptor
#[derive(Debug, Clone)]
pub struct TextureDescriptor {
    pub label: Option<String>,
    pub width: u32,
    pub height: u32,
    pub mip_levels: u32,
    pub format: TextureFormat,
}

/// Vertex attribute format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFormat {
    Float32x2,
    Float32x3,
}

impl VertexFormat {
    pub fn size(&self) -> u64 {
        match self {
            VertexFormat::Float32x2 => 8,
            VertexFormat::Float32x3 => 12,
        }
    }
}

/// Vertex attribute description
#[derive(Debug, Clone)]
pub struct VertexAttribute {
    pub location: u32,
    pub format: VertexFormat,
    pub offset: u64,
}

/// Layout of one interleaved vertex buffer.
#[derive(Debug, Clone)]
pub struct VertexBufferLayout {
    pub array_stride: u64,
    pub attributes: Vec<VertexAttribute>,
}

/// GPU resource creation and draw recording.
///
/// Creation calls copy `data` out; the backend must not retain the slice.
pub trait GpuBackend {
    fn create_vertex_buffer(
        &mut self,
        label: Option<&str>,
        data: &[u8],
    ) -> BackendResult<BufferHandle>;

    fn create_index_buffer(
        &mut self,
        label: Option<&str>,
        data: &[u8],
        format: IndexFormat,
    ) -> BackendResult<BufferHandle>;

    /// Create a texture and upload `data`, tightly packed rows, no mipmap
    /// generation.
    fn create_texture(
        &mut self,
        desc: &TextureDescriptor,
        data: &[u8],
    ) -> BackendResult<TextureHandle>;

    fn set_vertex_buffer(&mut self, slot: u32, buffer: BufferHandle);

    fn set_index_buffer(&mut self, buffer: BufferHandle, format: IndexFormat);

    /// Bind `texture` to a sampler slot for subsequent draws.
    fn bind_texture(&mut self, slot: u32, texture: TextureHandle);

    fn draw_indexed(&mut self, indices: Range<u32>);

    fn destroy_buffer(&mut self, buffer: BufferHandle);

    fn destroy_texture(&mut self, texture: TextureHandle);
}
