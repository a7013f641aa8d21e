// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use tangent_param::conv::overlay::sample_overlay;
use tangent_param::conv::quadrature::QUADRATURE_POINTS;
use tangent_param::geometry::{Vector2, Vector3};
use tangent_param::mesh::Mesh;
use tangent_param::{
    AxisField, ConvOperators, ConvOptions, Error, IdentityAlignment,
};

const SQRT3: f64 = 1.7320508075688772;

fn equilateral() -> Mesh<f64> {
    let positions = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.5, SQRT3 / 2.0, 0.0),
    ];
    Mesh::from_triangles(&positions, &[[0, 1, 2]])
}

fn x_axes(vertex_count: usize) -> AxisField<f64> {
    let fan = vec![Vector3::new(1.0, 0.0, 0.0)];
    AxisField::new(vec![fan; vertex_count]).unwrap()
}

fn fan_mesh() -> Mesh<f64> {
    let positions = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
    ];
    Mesh::from_triangles(&positions, &[[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]])
}

#[test]
fn single_triangle_shapes_and_scales() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mesh = equilateral();
    let axes = x_axes(3);
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    // One face, three corners, one axis, six quadrature points.
    assert_eq!(ops.axis_num(), 1);
    assert_eq!(ops.sample_count(), 18);
    assert_eq!(ops.d_fw.len(), 18);
    assert_eq!(ops.scatter.len(), 54);
    assert_eq!(ops.patch_dim(), 3);

    // Every vertex rings exactly this face once.
    assert_eq!(ops.reduce.len(), 3);
    for (v, entry) in ops.reduce.iter().enumerate() {
        assert_eq!(entry.row, v);
        assert_eq!(entry.col, v);
        assert_eq!(entry.val, 1.0);
    }

    let area = SQRT3 / 4.0;
    for &s in &ops.ring_scale {
        assert!((s - area.sqrt()).abs() < 1e-12);
    }
}

#[test]
fn scatter_rows_are_barycentric() {
    let mesh = equilateral();
    let axes = x_axes(3);
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    for sample in 0..ops.sample_count() {
        let mut sum = 0.0;
        for i in 0..3 {
            let entry = ops.scatter.entries()[sample * 3 + i];
            assert_eq!(entry.row, sample);
            assert!(entry.col < 3);
            assert!(entry.val > 0.0);
            sum += entry.val;
        }
        assert!((sum - 1.0).abs() < 1e-12, "sample {sample}: {sum}");
    }
}

#[test]
fn constant_basis_column_integrates_rescaled_area() {
    let mesh = equilateral();
    let axes = x_axes(3);
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    // The flattened triangle has its 3D area divided by the squared ring
    // scale; for this mesh that is exactly 1.
    for corner in 0..3 {
        let mut sum = 0.0;
        for q in 0..QUADRATURE_POINTS {
            sum += ops.d_fw[ops.sample_offset(0, corner, 0, q)][0];
        }
        assert!((sum - 1.0).abs() < 1e-12, "corner {corner}: {sum}");
    }
}

#[test]
fn basis_rows_recover_sample_coordinates() {
    let mesh = equilateral();
    let axes = x_axes(3);
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    // Corner 0 frame: the axis itself and normal x axis, so flattening is
    // the identity on the z = 0 plane up to the ring scale.
    let scale = ops.ring_scale[0];
    let pts_2d = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0 / scale, 0.0),
        Vector2::new(0.5 / scale, SQRT3 / 2.0 / scale),
    ];

    for q in 0..QUADRATURE_POINTS {
        let offset = ops.sample_offset(0, 0, 0, q);
        let row = ops.d_fw[offset];

        // Monomial order puts 1, y, x in the first three slots.
        let x = row[2] / row[0];
        let y = row[1] / row[0];

        let mut expect = Vector2::zero();
        for i in 0..3 {
            let bary = ops.scatter.entries()[offset * 3 + i].val;
            expect = expect + pts_2d[i].scale(bary);
        }
        assert!((x - expect.x).abs() < 1e-12, "q {q}: x {x} vs {}", expect.x);
        assert!((y - expect.y).abs() < 1e-12, "q {q}: y {y} vs {}", expect.y);
    }
}

#[test]
fn flat_mesh_patch_features() {
    let mesh = equilateral();
    let axes = x_axes(3);
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    // Identical normals and a planar face: the blended normal stays (1, 0, 0)
    // in the local frame.
    for sample in 0..ops.sample_count() {
        let patch = ops.patch_row(sample);
        assert_eq!(patch.len(), 3);
        assert!((patch[0] - 1.0).abs() < 1e-12);
        assert!(patch[1].abs() < 1e-12);
        assert!(patch[2].abs() < 1e-12);
    }
}

#[test]
fn patch_height_feature_tracks_offset_vertex() {
    // Lift one vertex out of the plane but pin all normals to +z, so the
    // height feature sees the full offset.
    let positions = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.5, SQRT3 / 2.0, 0.3),
    ];
    let mut mesh = Mesh::from_triangles(&positions, &[[0, 1, 2]]);
    mesh.set_normals(&[Vector3::new(0.0, 0.0, 1.0); 3]).unwrap();

    let axes = x_axes(3);
    let options = ConvOptions {
        use_patch_height: true,
    };
    let ops = ConvOperators::build(&mesh, &axes, &IdentityAlignment, options).unwrap();
    assert_eq!(ops.patch_dim(), 4);

    // From corner 0, only vertex 2 contributes height.
    let scale = ops.ring_scale[0];
    for q in 0..QUADRATURE_POINTS {
        let offset = ops.sample_offset(0, 0, 0, q);
        let bary2 = ops.scatter.entries()[offset * 3 + 2].val;
        let expect = bary2 * 0.3 / scale;
        let patch = ops.patch_row(offset);
        assert_eq!(patch.len(), 4);
        assert!((patch[3] - expect).abs() < 1e-12, "q {q}");
    }
}

#[test]
fn isolated_vertex_is_skipped() {
    let mut mesh = fan_mesh();
    let lone = mesh.add_vertex(Vector3::new(5.0, 5.0, 5.0), Vector3::new(0.0, 0.0, 1.0));

    let axes = x_axes(6);
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    assert_eq!(ops.ring_scale[lone], 1.0);
    assert!(ops.reduce.iter().all(|e| e.row != lone));
    // Connected vertices still reduce: 4 faces * 3 corners, one axis.
    assert_eq!(ops.reduce.len(), 12);
}

#[test]
fn axis_count_mismatch_is_rejected() {
    let mesh = fan_mesh();
    let axes = x_axes(3);
    let err = ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default());
    assert!(matches!(
        err,
        Err(Error::AxisCountMismatch {
            axes: 3,
            vertices: 5
        })
    ));
}

#[test]
fn identity_alignment_preserves_axis_slot() {
    let mesh = fan_mesh();
    let axes = AxisField::from_normals(&mesh, 3).unwrap();
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    // With a zero offset everywhere, every scatter column lands on the same
    // axis slot as its row.
    for entry in ops.scatter.iter() {
        let row_axis = (entry.row / QUADRATURE_POINTS) % 3;
        assert_eq!(entry.col % 3, row_axis);
    }
}

#[test]
fn flat_index_views_mirror_entries() {
    let mesh = equilateral();
    let axes = x_axes(3);
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    let pairs = ops.scatter.index_pairs();
    let values = ops.scatter.values();
    assert_eq!(pairs.len(), 2 * ops.scatter.len());
    assert_eq!(values.len(), ops.scatter.len());
    for (i, entry) in ops.scatter.iter().enumerate() {
        assert_eq!(pairs[2 * i], entry.row);
        assert_eq!(pairs[2 * i + 1], entry.col);
        assert_eq!(values[i], entry.val);
    }
}

#[test]
fn rebuild_is_deterministic() {
    let mesh = fan_mesh();
    let axes = AxisField::from_normals(&mesh, 4).unwrap();
    let options = ConvOptions {
        use_patch_height: true,
    };
    let a = ConvOperators::build(&mesh, &axes, &IdentityAlignment, options).unwrap();
    let b = ConvOperators::build(&mesh, &axes, &IdentityAlignment, options).unwrap();

    assert_eq!(a.d_fw, b.d_fw);
    assert_eq!(a.ring_scale, b.ring_scale);
    assert_eq!(a.scatter.entries(), b.scatter.entries());
    assert_eq!(a.reduce.entries(), b.reduce.entries());
    for sample in 0..a.sample_count() {
        assert_eq!(a.patch_row(sample), b.patch_row(sample));
    }
}

#[test]
fn overlay_emits_one_pair_per_incident_sample() {
    let mesh = fan_mesh();
    let axes = AxisField::from_normals(&mesh, 2).unwrap();
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    // The center vertex touches all four faces.
    let points = sample_overlay(&mesh, &ops, 4, 0).unwrap();
    assert_eq!(points.len(), 4 * QUADRATURE_POINTS);
    for point in &points {
        for c in [
            point.sample.x,
            point.sample.y,
            point.sample.z,
            point.lifted.x,
            point.lifted.y,
            point.lifted.z,
        ] {
            assert!(c.is_finite());
        }
        // Samples stay inside the fan's unit-diamond footprint.
        assert!(point.sample.x.abs() + point.sample.y.abs() <= 1.0 + 1e-12);
        assert_eq!(point.sample.z, 0.0);
    }
}

#[test]
fn overlay_rejects_out_of_range_arguments() {
    let mesh = equilateral();
    let axes = x_axes(3);
    let ops =
        ConvOperators::build(&mesh, &axes, &IdentityAlignment, ConvOptions::default()).unwrap();

    assert!(matches!(
        sample_overlay(&mesh, &ops, 9, 0),
        Err(Error::VertexOutOfRange { vertex: 9, count: 3 })
    ));
    assert!(matches!(
        sample_overlay(&mesh, &ops, 0, 1),
        Err(Error::AxisOutOfRange { axis: 1, axis_num: 1 })
    ));
}
