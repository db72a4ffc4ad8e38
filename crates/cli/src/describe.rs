use std::{error::Error, fs, path::Path};

use lhtools_formats::l3d::L3d;

pub fn describe(path: &Path) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(path)?;
    let l3d = L3d::parse(&bytes)?;
    let header = l3d.header();

    println!("Model size: {} bytes", header.model_size());
    println!("Meshes: {}", header.mesh_count());
    println!("Skins: {}", header.skin_count());

    for (index, mesh) in l3d.meshes()?.enumerate() {
        let mesh = mesh?;

        println!(
            "Mesh[{index}] no_draw={} transparent={}",
            mesh.no_draw(),
            mesh.transparent()
        );

        for (submesh_index, submesh) in l3d.submeshes(mesh)?.enumerate() {
            let submesh = submesh?;

            println!(
                "  SubMesh[{submesh_index}] skin={} vertices={} triangles={} bone runs={}",
                submesh.skin_id.get(),
                l3d.vertices(submesh)?.len(),
                l3d.triangles(submesh)?.len(),
                l3d.bone_verts(submesh)?.len(),
            );
        }

        for (bone_index, bone) in l3d.bones(mesh)?.iter().enumerate() {
            println!(
                "  Bone[{bone_index}] parent={} child={} sibling={}",
                bone.parent.get(),
                bone.child.get(),
                bone.sibling.get(),
            );
        }
    }

    for skin in l3d.skins()? {
        println!("Skin id={}", skin?.id());
    }

    Ok(())
}
