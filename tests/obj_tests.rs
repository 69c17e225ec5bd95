// Host-side tests for the OBJ/MTL loaders.

#![allow(dead_code)]
mod obj {
    include!("../src/core/obj.rs");
}

use obj::*;

const CD_MTL: &str = "\
# two materials
newmtl Disc
Kd 0.8 0.8 0.9
Ks 0.5 0.5 0.5
Ns 96.0
d 1.0

newmtl Case
Kd 0.1 0.1 0.1
Tr 0.25
";

const TRI: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
";

#[test]
fn mtl_reads_colours_and_opacity() {
    let lib = parse_mtl(CD_MTL).expect("mtl parses");
    assert_eq!(lib.materials.len(), 2);
    let disc = lib.get("Disc").expect("Disc present");
    assert_eq!(disc.diffuse, [0.8, 0.8, 0.9]);
    assert_eq!(disc.specular, [0.5, 0.5, 0.5]);
    assert_eq!(disc.shininess, 96.0);
    let case = lib.get("Case").expect("Case present");
    assert!((case.opacity - 0.75).abs() < 1e-6);
    // Unset fields fall back to the default material
    assert_eq!(case.shininess, Material::default().shininess);
}

#[test]
fn mtl_rejects_bad_numbers() {
    let err = parse_mtl("newmtl A\nKd 1 nope 1\n").unwrap_err();
    assert_eq!(
        err,
        AssetError::BadNumber {
            file: "mtl",
            line: 2,
            token: "nope".into()
        }
    );
    assert!(parse_mtl("newmtl\n").is_err());
}

#[test]
fn face_index_forms_are_equivalent() {
    let lib = MaterialLibrary::default();
    let with_normals = format!("{TRI}vt 0 0\nvn 0 0 1\n");
    for face in ["f 1 2 3", "f 1/1 2/1 3/1", "f 1//1 2//1 3//1", "f 1/1/1 2/1/1 3/1/1"] {
        let mesh = parse_obj(&format!("{with_normals}{face}\n"), &lib).expect(face);
        assert_eq!(mesh.triangle_count(), 1, "{face}");
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn negative_indices_count_from_the_end() {
    let lib = MaterialLibrary::default();
    let mesh = parse_obj(&format!("{TRI}f -3 -2 -1\n"), &lib).expect("relative face");
    assert_eq!(mesh.vertices[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(mesh.vertices[2].position, [0.0, 1.0, 0.0]);
}

#[test]
fn quads_are_fan_triangulated() {
    let lib = MaterialLibrary::default();
    let src = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
    let mesh = parse_obj(src, &lib).expect("quad");
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
}

#[test]
fn missing_normals_use_the_face_normal() {
    let lib = MaterialLibrary::default();
    let mesh = parse_obj(&format!("{TRI}f 1 2 3\n"), &lib).expect("tri");
    for v in &mesh.vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn usemtl_colours_following_faces() {
    let lib = parse_mtl(CD_MTL).expect("mtl");
    let src = format!("{TRI}usemtl Disc\nf 1 2 3\nusemtl Missing\nf 1 2 3\n");
    let mesh = parse_obj(&src, &lib).expect("obj");
    assert_eq!(mesh.vertices[0].diffuse, [0.8, 0.8, 0.9, 1.0]);
    assert_eq!(mesh.vertices[0].specular[3], 96.0);
    // Unknown material names fall back to the default white
    assert_eq!(mesh.vertices[3].diffuse, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn material_opacity_reaches_vertices() {
    let lib = parse_mtl("newmtl Glass\nKd 0.2 0.3 0.4\nd 0.25\n\nnewmtl Case\nTr 0.25\n")
        .expect("mtl");
    let src = format!("{TRI}usemtl Glass\nf 1 2 3\nusemtl Case\nf 1 2 3\n");
    let mesh = parse_obj(&src, &lib).expect("obj");
    for v in &mesh.vertices[..3] {
        assert_eq!(v.diffuse, [0.2, 0.3, 0.4, 0.25]);
    }
    // Tr is the inverse of d
    for v in &mesh.vertices[3..] {
        assert_eq!(v.diffuse[3], 0.75);
    }
}

#[test]
fn bounds_cover_all_vertices() {
    let lib = MaterialLibrary::default();
    let src = "v -1 -2 0\nv 3 0 0\nv 0 4 5\nf 1 2 3\n";
    let (lo, hi) = parse_obj(src, &lib).expect("obj").bounds().expect("non-empty");
    assert_eq!(lo.to_array(), [-1.0, -2.0, 0.0]);
    assert_eq!(hi.to_array(), [3.0, 4.0, 5.0]);
}

#[test]
fn out_of_range_indices_are_errors() {
    let lib = MaterialLibrary::default();
    assert_eq!(
        parse_obj(&format!("{TRI}f 1 2 4\n"), &lib).unwrap_err(),
        AssetError::IndexOutOfRange {
            line: 4,
            index: 4,
            count: 3
        }
    );
    assert!(matches!(
        parse_obj(&format!("{TRI}f 0 1 2\n"), &lib),
        Err(AssetError::IndexOutOfRange { index: 0, .. })
    ));
    assert!(matches!(
        parse_obj(&format!("{TRI}f -4 1 2\n"), &lib),
        Err(AssetError::IndexOutOfRange { index: -4, .. })
    ));
}

#[test]
fn malformed_statements_are_errors() {
    let lib = MaterialLibrary::default();
    assert!(matches!(
        parse_obj(&format!("{TRI}f 1 2\n"), &lib),
        Err(AssetError::Malformed { line: 4, .. })
    ));
    assert!(matches!(
        parse_obj("v 1 x 2\n", &lib),
        Err(AssetError::BadNumber { line: 1, .. })
    ));
}

#[test]
fn geometry_without_faces_is_empty() {
    let lib = MaterialLibrary::default();
    assert_eq!(parse_obj(TRI, &lib).unwrap_err(), AssetError::EmptyGeometry);
    assert_eq!(parse_obj("", &lib).unwrap_err(), AssetError::EmptyGeometry);
}
