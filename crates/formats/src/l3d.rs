use std::{
    fmt::{Debug, Formatter},
    mem::size_of,
};

use byteorder::LE;
use thiserror::Error;
use zerocopy::{FromBytes, U32};

use crate::l3d::{
    bone::Bone,
    geometry::{BoneVert, Triangle, Vertex},
    header::Header,
    mesh::{Mesh, SubMesh},
    skin::Skin,
};

pub mod bone;
pub mod geometry;
pub mod header;
pub mod mesh;
pub mod skin;

/// Tag carried by the first four bytes of every model file.
pub const MAGIC: [u8; 4] = *b"L3D0";

/// The header record sits directly after the magic tag.
const HEADER_OFFSET: u32 = 4;

#[derive(Debug, Error)]
pub enum L3dError {
    /// The buffer does not start with the `L3D0` tag.
    #[error("not an L3D0 model, found magic {0:02x?}")]
    Format([u8; 4]),

    /// An offset or count field describes a region outside the buffer.
    #[error("{what} at {offset:#x} ({len} bytes) runs past the end of the {buffer_len} byte model buffer")]
    CorruptData {
        what: &'static str,
        offset: u32,
        len: usize,
        buffer_len: usize,
    },
}

/// A parsed view over an in-memory L3D model.
///
/// Borrows the file buffer for its lifetime. Record accessors resolve the
/// offset fields embedded in the file against the underlying bytes, and
/// every resolved extent is bounds-checked before a view is produced.
pub struct L3d<'a> {
    bytes: &'a [u8],
    header: &'a Header,
}

impl<'a> L3d<'a> {
    pub fn parse(bytes: &'a [u8]) -> Result<Self, L3dError> {
        let mut found = [0u8; 4];
        let prefix = bytes.get(..4).unwrap_or(bytes);
        found[..prefix.len()].copy_from_slice(prefix);

        if found != MAGIC {
            return Err(L3dError::Format(found));
        }

        let header = ref_at::<Header>(bytes, HEADER_OFFSET, "header")?;

        Ok(Self { bytes, header })
    }

    pub fn header(&self) -> &'a Header {
        self.header
    }

    fn mesh_offsets(&self) -> Result<&'a [U32<LE>], L3dError> {
        slice_at(
            self.bytes,
            self.header.mesh_list_offset(),
            self.header.mesh_count(),
            "mesh offset table",
        )
    }

    /// Every top-level mesh record, in file order.
    pub fn meshes(
        &self,
    ) -> Result<impl Iterator<Item = Result<&'a Mesh, L3dError>> + 'a, L3dError> {
        let bytes = self.bytes;

        Ok(self
            .mesh_offsets()?
            .iter()
            .map(move |offset| ref_at::<Mesh>(bytes, offset.get(), "mesh")))
    }

    /// The submesh records of `mesh`, in file order.
    pub fn submeshes(
        &self,
        mesh: &Mesh,
    ) -> Result<impl Iterator<Item = Result<&'a SubMesh, L3dError>> + 'a, L3dError> {
        let bytes = self.bytes;
        let offsets: &[U32<LE>] = slice_at(
            bytes,
            mesh.submesh_offset.get(),
            mesh.submesh_count.get() as usize,
            "submesh offset table",
        )?;

        Ok(offsets
            .iter()
            .map(move |offset| ref_at::<SubMesh>(bytes, offset.get(), "submesh")))
    }

    pub fn vertices(&self, submesh: &SubMesh) -> Result<&'a [Vertex], L3dError> {
        slice_at(
            self.bytes,
            submesh.vertex_offset.get(),
            submesh.vertex_count.get() as usize,
            "vertex array",
        )
    }

    pub fn triangles(&self, submesh: &SubMesh) -> Result<&'a [Triangle], L3dError> {
        slice_at(
            self.bytes,
            submesh.triangle_offset.get(),
            submesh.triangle_count.get() as usize,
            "triangle array",
        )
    }

    /// The bone-vertex lookup runs of `submesh`. Resolved for validation
    /// and diagnostics; skinning does not consume them yet.
    pub fn bone_verts(&self, submesh: &SubMesh) -> Result<&'a [BoneVert], L3dError> {
        slice_at(
            self.bytes,
            submesh.bone_vert_offset.get(),
            submesh.bone_vert_count.get() as usize,
            "bone-vertex table",
        )
    }

    pub fn bones(&self, mesh: &Mesh) -> Result<&'a [Bone], L3dError> {
        slice_at(
            self.bytes,
            mesh.bone_offset.get(),
            mesh.bone_count.get() as usize,
            "bone table",
        )
    }

    /// Every skin record, in file order. Skins are keyed by the identifier
    /// stored in the record, not by their position in this table.
    pub fn skins(
        &self,
    ) -> Result<impl Iterator<Item = Result<&'a Skin, L3dError>> + 'a, L3dError> {
        let bytes = self.bytes;
        let offsets: &[U32<LE>] = slice_at(
            bytes,
            self.header.skin_list_offset(),
            self.header.skin_count(),
            "skin offset table",
        )?;

        Ok(offsets
            .iter()
            .map(move |offset| ref_at::<Skin>(bytes, offset.get(), "skin")))
    }
}

impl Debug for L3d<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("L3d")
            .field("model_size", &self.header.model_size())
            .field("mesh_count", &self.header.mesh_count())
            .field("skin_count", &self.header.skin_count())
            .finish()
    }
}

fn ref_at<'a, T: FromBytes>(
    bytes: &'a [u8],
    offset: u32,
    what: &'static str,
) -> Result<&'a T, L3dError> {
    let oob = || L3dError::CorruptData {
        what,
        offset,
        len: size_of::<T>(),
        buffer_len: bytes.len(),
    };

    let data = bytes.get(offset as usize..).ok_or_else(oob)?;
    T::ref_from_prefix(data).ok_or_else(oob)
}

fn slice_at<'a, T: FromBytes>(
    bytes: &'a [u8],
    offset: u32,
    count: usize,
    what: &'static str,
) -> Result<&'a [T], L3dError> {
    let oob = || L3dError::CorruptData {
        what,
        offset,
        len: count.saturating_mul(size_of::<T>()),
        buffer_len: bytes.len(),
    };

    let data = bytes.get(offset as usize..).ok_or_else(oob)?;
    let (slice, _) = T::slice_from_prefix(data, count).ok_or_else(oob)?;

    Ok(slice)
}
