use lhtools_formats::l3d::skin::{Skin, SKIN_HEIGHT, SKIN_WIDTH};
use zerocopy::AsBytes;

use crate::backend::{BackendResult, GpuBackend, TextureDescriptor, TextureFormat, TextureHandle};

/// Uploads one skin page as a 256x256 RGBA4444 texture, no mipmaps.
pub fn build_skin_texture(
    backend: &mut impl GpuBackend,
    skin: &Skin,
) -> BackendResult<TextureHandle> {
    let desc = TextureDescriptor {
        label: Some(format!("skin {}", skin.id())),
        width: SKIN_WIDTH,
        height: SKIN_HEIGHT,
        mip_levels: 1,
        format: TextureFormat::Rgba4Unorm,
    };

    backend.create_texture(&desc, skin.texels().as_bytes())
}
