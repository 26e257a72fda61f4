use cube_field::mesh::{cube_mesh, edge_indices};

#[test]
fn test_mesh_counts() {
    let (vertices, faces) = cube_mesh();
    assert_eq!(vertices.len(), 24, "four vertices per face, six faces");
    assert_eq!(faces.len(), 36, "two triangles per face");
    assert_eq!(edge_indices().len(), 48, "four segments per face, two indices each");
}

#[test]
fn test_vertices_lie_on_the_unit_cube() {
    let (vertices, _) = cube_mesh();
    for v in &vertices {
        for c in v.position {
            assert_eq!(c.abs(), 0.5, "unit cube corner component must be +/-0.5");
        }
    }
}

#[test]
fn test_normals_are_axis_aligned_unit_vectors() {
    let (vertices, _) = cube_mesh();
    for v in &vertices {
        let len_sq: f32 = v.normal.iter().map(|c| c * c).sum();
        assert_eq!(len_sq, 1.0);
        assert_eq!(
            v.normal.iter().filter(|&&c| c != 0.0).count(),
            1,
            "face normal must point along exactly one axis"
        );
    }
}

#[test]
fn test_face_vertices_share_their_normal() {
    let (vertices, _) = cube_mesh();
    for face in 0..6 {
        let base = face * 4;
        let normal = vertices[base].normal;
        for corner in 1..4 {
            assert_eq!(
                vertices[base + corner].normal,
                normal,
                "face {} vertices must share a flat normal",
                face
            );
        }
    }
}

#[test]
fn test_edges_outline_every_face() {
    let edges = edge_indices();
    for face in 0..6u16 {
        let base = face * 4;
        let expected = [
            (base, base + 1),
            (base + 1, base + 2),
            (base + 2, base + 3),
            (base + 3, base),
        ];
        for (a, b) in expected {
            let found = edges
                .chunks(2)
                .any(|seg| (seg[0], seg[1]) == (a, b) || (seg[0], seg[1]) == (b, a));
            assert!(found, "face {} missing outline segment {}-{}", face, a, b);
        }
    }
}

#[test]
fn test_all_indices_reference_valid_vertices() {
    let (vertices, faces) = cube_mesh();
    let n = vertices.len() as u16;
    assert!(faces.iter().all(|&i| i < n));
    assert!(edge_indices().iter().all(|&i| i < n));
}
