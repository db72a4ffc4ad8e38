use std::collections::HashMap;

use lhtools_formats::l3d::{bone::Skeleton, L3d, L3dError};
use log::{debug, warn};
use thiserror::Error;

use crate::{
    backend::{BackendError, GpuBackend, TextureHandle},
    mesh::GpuMesh,
    texture::build_skin_texture,
};

/// Only the first top-level mesh is materialized; multi-mesh files are
/// accepted and truncated to this index.
pub const PROCESSED_MESH_INDEX: usize = 0;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] L3dError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A fully loaded model: one GPU mesh per submesh of the processed mesh,
/// skin textures keyed by identifier, and the assembled skeleton.
///
/// All state is fixed at load time; drawing performs no mutation.
#[derive(Debug, Default)]
pub struct SkinnedModel {
    submeshes: Vec<GpuMesh>,
    submesh_skins: Vec<i32>,
    textures: HashMap<u32, TextureHandle>,
    skeleton: Skeleton,
}

impl SkinnedModel {
    /// Parses `bytes` and materializes every GPU resource in one blocking
    /// call. On failure all resources created so far are destroyed; no
    /// partially built model escapes.
    pub fn load(bytes: &[u8], backend: &mut impl GpuBackend) -> Result<Self, LoadError> {
        let mut model = SkinnedModel::default();

        match model.load_in_place(bytes, backend) {
            Ok(()) => Ok(model),
            Err(err) => {
                model.destroy(backend);
                Err(err)
            }
        }
    }

    fn load_in_place(
        &mut self,
        bytes: &[u8],
        backend: &mut impl GpuBackend,
    ) -> Result<(), LoadError> {
        let l3d = L3d::parse(bytes)?;

        debug!(
            "model declares {} mesh(es), materializing index {}",
            l3d.header().mesh_count(),
            PROCESSED_MESH_INDEX
        );

        if let Some(mesh) = l3d.meshes()?.nth(PROCESSED_MESH_INDEX) {
            let mesh = mesh?;

            for (index, submesh) in l3d.submeshes(mesh)?.enumerate() {
                let submesh = submesh?;
                let vertices = l3d.vertices(submesh)?;
                let triangles = l3d.triangles(submesh)?;
                let bone_verts = l3d.bone_verts(submesh)?;

                debug!(
                    "submesh[{index}]: {} vertices, {} triangles, {} bone-vertex runs, skin {}",
                    vertices.len(),
                    triangles.len(),
                    bone_verts.len(),
                    submesh.skin_id.get(),
                );

                let label = format!("submesh {index}");
                self.submeshes.push(GpuMesh::build(
                    backend,
                    Some(label.as_str()),
                    vertices,
                    triangles,
                )?);
                self.submesh_skins.push(submesh.skin_id.get());
            }

            let bones = l3d.bones(mesh)?;
            for (index, bone) in bones.iter().enumerate() {
                debug!("bone[{index}]: parent={}", bone.parent.get());
            }
            self.skeleton = Skeleton::from_bones(bones);
        }

        for skin in l3d.skins()? {
            let skin = skin?;
            let texture = build_skin_texture(backend, skin)?;
            self.textures.insert(skin.id(), texture);
        }

        for (index, &skin_id) in self.submesh_skins.iter().enumerate() {
            if skin_id >= 0 && !self.textures.contains_key(&(skin_id as u32)) {
                warn!("submesh[{index}] references skin {skin_id}, which the file does not contain");
            }
        }

        Ok(())
    }

    /// Draws every submesh in build order. An unskinned submesh (negative
    /// id) or a skin id without a matching record draws with no texture
    /// bind.
    pub fn draw(&self, backend: &mut impl GpuBackend) {
        for (submesh, &skin_id) in self.submeshes.iter().zip(&self.submesh_skins) {
            let texture = u32::try_from(skin_id).ok().and_then(|id| self.texture(id));
            if let Some(texture) = texture {
                backend.bind_texture(0, texture);
            }

            submesh.draw(backend);
        }
    }

    /// Releases every GPU resource. The model is empty afterwards.
    pub fn destroy(&mut self, backend: &mut impl GpuBackend) {
        for submesh in self.submeshes.drain(..) {
            submesh.destroy(backend);
        }

        for (_, texture) in self.textures.drain() {
            backend.destroy_texture(texture);
        }

        self.submesh_skins.clear();
    }

    pub fn submeshes(&self) -> &[GpuMesh] {
        &self.submeshes
    }

    /// Skin identifier declared by the submesh at `index`.
    pub fn submesh_skin(&self, index: usize) -> Option<i32> {
        self.submesh_skins.get(index).copied()
    }

    pub fn texture(&self, skin_id: u32) -> Option<TextureHandle> {
        self.textures.get(&skin_id).copied()
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }
}
