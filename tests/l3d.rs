use lhtools::formats::l3d::{L3d, L3dError};

const SKIN_RECORD_SIZE: u32 = 4 + 2 * 65536;

/// Byte-level writer for synthetic model files.
#[derive(Default)]
struct ModelWriter {
    bytes: Vec<u8>,
}

impl ModelWriter {
    fn u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    fn u16(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    fn u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    fn i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    fn f32(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    fn offset(&self) -> u32 {
        self.bytes.len() as u32
    }

    fn patch_u32(&mut self, at: u32, value: u32) {
        let at = at as usize;
        self.bytes[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }
}

struct Model {
    bytes: Vec<u8>,
    submesh_record: u32,
}

/// One mesh record (referenced by `declared_meshes` table entries) holding
/// one submesh with three vertices, one triangle, one bone-vertex run and
/// one bone, followed by one skin record per entry of `skins`.
fn write_model(declared_meshes: u32, skin_id: i32, skins: &[u32]) -> Model {
    let mut w = ModelWriter::default();

    w.bytes.extend_from_slice(b"L3D0");

    let header_at = w.offset();
    for _ in 0..18 {
        w.u32(0);
    }

    let mesh_list_at = w.offset();
    let mesh_record_at = mesh_list_at + declared_meshes * 4;
    for _ in 0..declared_meshes {
        w.u32(mesh_record_at);
    }

    let submesh_list_at = mesh_record_at + 20;
    let submesh_record_at = submesh_list_at + 4;
    let vertices_at = submesh_record_at + 48;
    let triangles_at = vertices_at + 3 * 32;
    let lut_at = triangles_at + 6;
    let bones_at = lut_at + 4;
    let skin_list_at = bones_at + 60;

    // mesh record
    assert_eq!(w.offset(), mesh_record_at);
    for _ in 0..4 {
        w.u8(0);
    }
    w.u32(1);
    w.u32(submesh_list_at);
    w.u32(1);
    w.u32(bones_at);

    // submesh offset table + record
    w.u32(submesh_record_at);
    w.u32(0);
    w.u32(0);
    w.i32(skin_id);
    w.u32(0);
    w.u32(3);
    w.u32(vertices_at);
    w.u32(1);
    w.u32(triangles_at);
    w.u32(1);
    w.u32(lut_at);
    w.u32(0);
    w.u32(0);

    // vertices
    for index in 0..3u32 {
        let base = index as f32 * 8.0;
        w.f32(base + 0.5);
        w.f32(base - 2.25);
        w.f32(base + 3.75);
        w.f32(base + 0.125);
        w.f32(base + 0.875);
        w.f32(0.0);
        w.f32(1.0);
        w.f32(0.0);
    }

    // triangle
    w.u16(0);
    w.u16(1);
    w.u16(2);

    // bone-vertex run covering all three vertices
    w.u16(3);
    w.u16(0);

    // bone
    w.i32(-1);
    w.i32(-1);
    w.i32(-1);
    for value in [1.0f32, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0] {
        w.f32(value);
    }
    w.f32(0.0);
    w.f32(4.5);
    w.f32(0.0);

    // skin offset table + records
    assert_eq!(w.offset(), skin_list_at);
    let first_skin_at = skin_list_at + skins.len() as u32 * 4;
    for index in 0..skins.len() as u32 {
        w.u32(first_skin_at + index * SKIN_RECORD_SIZE);
    }
    for id in skins {
        w.u32(*id);
        for texel in 0..65536u32 {
            w.u16((texel ^ id) as u16);
        }
    }

    w.patch_u32(header_at, w.offset());
    w.patch_u32(header_at + 0x08, declared_meshes);
    w.patch_u32(header_at + 0x0c, mesh_list_at);
    w.patch_u32(header_at + 0x34, skins.len() as u32);
    w.patch_u32(header_at + 0x38, skin_list_at);

    Model {
        bytes: w.bytes,
        submesh_record: submesh_record_at,
    }
}

/// Resolves every region of the model, which forces all bounds checks.
fn walk(bytes: &[u8]) -> Result<(), L3dError> {
    let model = L3d::parse(bytes)?;

    for mesh in model.meshes()? {
        let mesh = mesh?;

        for submesh in model.submeshes(mesh)? {
            let submesh = submesh?;
            model.vertices(submesh)?;
            model.triangles(submesh)?;
            model.bone_verts(submesh)?;
        }

        model.bones(mesh)?;
    }

    for skin in model.skins()? {
        skin?;
    }

    Ok(())
}

#[test]
fn parses_written_data_back_exactly() -> Result<(), L3dError> {
    let model = write_model(1, 2, &[2]);
    let l3d = L3d::parse(&model.bytes)?;

    assert_eq!(l3d.header().mesh_count(), 1);
    assert_eq!(l3d.header().skin_count(), 1);
    assert_eq!(l3d.header().model_size() as usize, model.bytes.len());

    let mesh = l3d.meshes()?.next().expect("one mesh")?;
    assert!(!mesh.no_draw());
    assert!(!mesh.transparent());

    let submesh = l3d.submeshes(mesh)?.next().expect("one submesh")?;
    assert_eq!(submesh.skin_id.get(), 2);

    let vertices = l3d.vertices(submesh)?;
    assert_eq!(vertices.len(), 3);
    for (index, vertex) in vertices.iter().enumerate() {
        let base = index as f32 * 8.0;
        assert_eq!(vertex.position.map(|v| v.get()), [base + 0.5, base - 2.25, base + 3.75]);
        assert_eq!(vertex.tex_coords.map(|v| v.get()), [base + 0.125, base + 0.875]);
        assert_eq!(vertex.normal.map(|v| v.get()), [0.0, 1.0, 0.0]);
    }

    let triangles = l3d.triangles(submesh)?;
    assert_eq!(triangles.len(), 1);
    assert_eq!(triangles[0].indices.map(|i| i.get()), [0, 1, 2]);

    let bone_verts = l3d.bone_verts(submesh)?;
    assert_eq!(bone_verts.len(), 1);
    assert_eq!(bone_verts[0].vertex_run.get(), 3);
    assert_eq!(bone_verts[0].bone_index.get(), 0);

    let bones = l3d.bones(mesh)?;
    assert_eq!(bones.len(), 1);
    assert_eq!(bones[0].parent.get(), -1);
    assert_eq!(bones[0].x_axis.map(|v| v.get()), [1.0, 0.0, 0.0]);
    assert_eq!(bones[0].position.map(|v| v.get()), [0.0, 4.5, 0.0]);

    let skin = l3d.skins()?.next().expect("one skin")?;
    assert_eq!(skin.id(), 2);
    assert_eq!(skin.texels().len(), 65536);
    assert_eq!(skin.texels()[0].get(), 2);
    assert_eq!(skin.texels()[65535].get(), (65535 ^ 2) as u16);

    Ok(())
}

#[test]
fn rejects_non_l3d_files() {
    let mut model = write_model(1, 0, &[]);
    model.bytes[..4].copy_from_slice(b"MDL0");

    assert!(matches!(
        L3d::parse(&model.bytes),
        Err(L3dError::Format(found)) if &found == b"MDL0"
    ));
}

#[test]
fn exposes_every_declared_mesh() -> Result<(), L3dError> {
    let model = write_model(3, 0, &[]);
    let l3d = L3d::parse(&model.bytes)?;

    assert_eq!(l3d.header().mesh_count(), 3);

    let meshes = l3d.meshes()?.collect::<Result<Vec<_>, _>>()?;
    assert_eq!(meshes.len(), 3);
    for mesh in meshes {
        assert_eq!(mesh.submesh_count.get(), 1);
    }

    Ok(())
}

#[test]
fn every_truncated_prefix_is_rejected() {
    let model = write_model(1, 5, &[5]);

    for len in 0..model.bytes.len() {
        let result = walk(&model.bytes[..len]);
        assert!(
            matches!(result, Err(L3dError::Format(_) | L3dError::CorruptData { .. })),
            "prefix of {len} bytes parsed successfully"
        );
    }

    assert!(walk(&model.bytes).is_ok());
}

#[test]
fn oversized_counts_are_rejected() {
    let base = write_model(1, 0, &[]);

    // vertex count
    let mut model = base.bytes.clone();
    let at = base.submesh_record as usize + 16;
    model[at..at + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(
        walk(&model),
        Err(L3dError::CorruptData { what: "vertex array", .. })
    ));

    // triangle offset
    let mut model = base.bytes.clone();
    let at = base.submesh_record as usize + 28;
    model[at..at + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(
        walk(&model),
        Err(L3dError::CorruptData { what: "triangle array", .. })
    ));

    // mesh count, with the table running past the end
    let mut model = base.bytes.clone();
    model[4 + 0x08..4 + 0x0c].copy_from_slice(&1_000_000u32.to_le_bytes());
    assert!(matches!(
        walk(&model),
        Err(L3dError::CorruptData { what: "mesh offset table", .. })
    ));

    // skin list offset
    let mut model = base.bytes.clone();
    model[4 + 0x38..4 + 0x3c].copy_from_slice(&u32::MAX.to_le_bytes());
    model[4 + 0x34..4 + 0x38].copy_from_slice(&1u32.to_le_bytes());
    assert!(matches!(
        walk(&model),
        Err(L3dError::CorruptData { what: "skin offset table", .. })
    ));
}
