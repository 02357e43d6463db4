//! Unit cube embedded in every mesh placeholder.

use std::io::{self, Write};

use crate::number::{MESH_PLACES, format_list};

pub const CUBE_VERTICES: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
];

/// Six quads; the last index of each polygon is stored as `-(i + 1)`.
pub const CUBE_POLYGON_VERTEX_INDEX: [i32; 24] = [
    0, 1, 3, -3, 2, 3, 7, -7, 6, 7, 5, -5, 4, 5, 1, -1, 2, 6, 4, -1, 7, 3, 1, -6,
];

/// One normal per face, in polygon order
pub const CUBE_FACE_NORMALS: [[f64; 3]; 6] = [
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, -1.0],
    [0.0, 0.0, 1.0],
];

const VERTICES_PER_FACE: usize = 4;

fn flatten(rows: &[[f64; 3]]) -> Vec<f64> {
    rows.iter().flatten().copied().collect()
}

/// Normals mapped by polygon vertex: each face normal repeated per corner
pub fn polygon_vertex_normals() -> Vec<[f64; 3]> {
    CUBE_FACE_NORMALS
        .iter()
        .flat_map(|n| std::iter::repeat_n(*n, VERTICES_PER_FACE))
        .collect()
}

/// Write the vertex, index, normal and material layers of the cube.
pub fn write_cube<W: Write>(out: &mut W, indent: &str) -> io::Result<()> {
    let indices = CUBE_POLYGON_VERTEX_INDEX
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",");

    writeln!(
        out,
        "{indent}Vertices: {}",
        format_list(&flatten(&CUBE_VERTICES), MESH_PLACES)
    )?;
    writeln!(out, "{indent}PolygonVertexIndex: {}", indices)?;
    writeln!(out, "{indent}GeometryVersion: 124")?;

    writeln!(out, "{indent}LayerElementNormal: 0 {{")?;
    writeln!(out, "{indent}\tVersion: 101")?;
    writeln!(out, "{indent}\tName: \"\"")?;
    writeln!(out, "{indent}\tMappingInformationType: \"ByPolygonVertex\"")?;
    writeln!(out, "{indent}\tReferenceInformationType: \"Direct\"")?;
    writeln!(
        out,
        "{indent}\tNormals: {}",
        format_list(&flatten(&polygon_vertex_normals()), MESH_PLACES)
    )?;
    writeln!(out, "{indent}}}")?;

    writeln!(out, "{indent}LayerElementMaterial: 0 {{")?;
    writeln!(out, "{indent}\tVersion: 101")?;
    writeln!(out, "{indent}\tName: \"\"")?;
    writeln!(out, "{indent}\tMappingInformationType: \"AllSame\"")?;
    writeln!(out, "{indent}\tReferenceInformationType: \"IndexToDirect\"")?;
    writeln!(out, "{indent}\tMaterials: 0")?;
    writeln!(out, "{indent}}}")?;

    writeln!(out, "{indent}Layer: 0 {{")?;
    writeln!(out, "{indent}\tVersion: 100")?;
    for element in [
        "LayerElementNormal",
        "LayerElementTexture",
        "LayerElementMaterial",
    ] {
        writeln!(out, "{indent}\tLayerElement:  {{")?;
        writeln!(out, "{indent}\t\tType: \"{}\"", element)?;
        writeln!(out, "{indent}\t\tTypedIndex: 0")?;
        writeln!(out, "{indent}\t}}")?;
    }
    writeln!(out, "{indent}}}")
}
