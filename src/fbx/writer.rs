use std::io::Write;

use super::geometry::write_cube;
use super::properties::{MATERIAL_PROPERTIES, MODEL_PROPERTIES, write_properties60};
use super::templates::{
    CAMERA_STUBS, CREATION_STAMP, CREATOR, CREATOR_VERSION, FOOTER, GLOBAL_SETTINGS, RULE,
};
use crate::error::{ExportError, Result};
use crate::number::{COLOR_PLACES, POSITION_PLACES, format_fixed, format_list};
use crate::scene::{NodeKind, SceneGraph, SceneNode, Subtype, Tallies};
use crate::types::{Color, Point3D};

/// Format a position value with 15 decimal places
fn p(n: f64) -> String {
    format_fixed(n, POSITION_PLACES)
}

/// Format a color channel with 4 decimal places
fn c(n: f64) -> String {
    format_fixed(n, COLOR_PLACES)
}

fn color_triple(color: &Color) -> String {
    format!("{},{},{}", c(color.r), c(color.g), c(color.b))
}

fn section_banner<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "; {}", title)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    Ok(())
}

/// Write a complete document for `graph`.
///
/// Bytes already written stay on `out` if a later section fails.
pub fn write_document<W: Write>(out: &mut W, graph: &SceneGraph) -> Result<()> {
    write_header(out)?;
    write_definitions(out, graph.tallies())?;
    write_objects(out, graph)?;
    write_relations(out, graph)?;
    write_connections(out, graph)?;
    write_footer(out)?;
    Ok(())
}

pub fn write_header<W: Write>(out: &mut W) -> Result<()> {
    let (year, month, day, hour, minute, second, millisecond) = CREATION_STAMP;

    writeln!(out, "; FBX 6.1.0 project file")?;
    writeln!(out, "; Created by {}", CREATOR)?;
    writeln!(out, "; ----------------------------------------------------")?;
    writeln!(out)?;
    writeln!(out, "FBXHeaderExtension:  {{")?;
    writeln!(out, "\tFBXHeaderVersion: 1003")?;
    writeln!(out, "\tFBXVersion: 6100")?;
    writeln!(out, "\tCreationTimeStamp:  {{")?;
    writeln!(out, "\t\tVersion: 1000")?;
    writeln!(out, "\t\tYear: {}", year)?;
    writeln!(out, "\t\tMonth: {:02}", month)?;
    writeln!(out, "\t\tDay: {:02}", day)?;
    writeln!(out, "\t\tHour: {:02}", hour)?;
    writeln!(out, "\t\tMinute: {:02}", minute)?;
    writeln!(out, "\t\tSecond: {:02}", second)?;
    writeln!(out, "\t\tMillisecond: {}", millisecond)?;
    writeln!(out, "\t}}")?;
    writeln!(out, "\tCreator: \"{}\"", CREATOR)?;
    writeln!(out, "\tOtherFlags:  {{")?;
    writeln!(out, "\t\tFlagPLE: 0")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")?;
    writeln!(
        out,
        "CreationTime: \"{}-{:02}-{:02} {:02}:{:02}:{:02}:{:03}\"",
        year, month, day, hour, minute, second, millisecond
    )?;
    writeln!(out, "Creator: \"{} {}\"", CREATOR, CREATOR_VERSION)?;
    Ok(())
}

/// Declared counts come from the builder's tallies, never from a rescan.
pub fn write_definitions<W: Write>(out: &mut W, tallies: Tallies) -> Result<()> {
    section_banner(out, "Object definitions")?;

    writeln!(out, "Definitions:  {{")?;
    writeln!(out, "\tVersion: 100")?;
    writeln!(out, "\tCount: {}", tallies.total())?;
    for (object_type, count) in [
        ("Model", tallies.models),
        ("Geometry", tallies.geometries),
        ("Material", tallies.materials),
        ("Pose", 1),
        ("GlobalSettings", 1),
    ] {
        writeln!(out, "\tObjectType: \"{}\" {{", object_type)?;
        writeln!(out, "\t\tCount: {}", count)?;
        writeln!(out, "\t}}")?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn write_model<W: Write>(out: &mut W, node: &SceneNode, subtype: Subtype, t: &Point3D) -> Result<()> {
    writeln!(
        out,
        "\tModel: \"{}\", \"{}\" {{",
        node.qualified_name,
        subtype.as_str()
    )?;
    writeln!(out, "\t\tVersion: 232")?;

    // Y-up in the document: stored (x, y, z) goes out as (x, z, y)
    let translation = format!("{},{},{}", p(t.x), p(t.z), p(t.y));
    write_properties60(out, "\t\t", MODEL_PROPERTIES, &translation)?;

    writeln!(out, "\t\tMultiLayer: 0")?;
    writeln!(out, "\t\tMultiTake: 1")?;
    writeln!(out, "\t\tShading: Y")?;
    writeln!(out, "\t\tCulling: \"CullingOff\"")?;
    if subtype == Subtype::Mesh {
        write_cube(out, "\t\t")?;
    } else {
        writeln!(out, "\t\tTypeFlags: \"Null\"")?;
    }
    writeln!(out, "\t}}")?;
    Ok(())
}

fn write_material<W: Write>(out: &mut W, node: &SceneNode, color: Option<&Color>) -> Result<()> {
    let color = color.ok_or_else(|| ExportError::MissingColor {
        material: node.qualified_name.clone(),
    })?;

    writeln!(
        out,
        "\tMaterial: \"{}\", \"{}\" {{",
        node.qualified_name,
        Subtype::Empty.as_str()
    )?;
    writeln!(out, "\t\tVersion: 102")?;
    writeln!(out, "\t\tShadingModel: \"lambert\"")?;
    writeln!(out, "\t\tMultiLayer: 0")?;
    write_properties60(out, "\t\t", MATERIAL_PROPERTIES, &color_triple(color))?;
    writeln!(out, "\t}}")?;
    Ok(())
}

/// Column-major world matrix: identity rotation and scale, then translation
fn pose_matrix(t: &Point3D) -> [f64; 16] {
    [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        t.x, t.y, t.z, 1.0,
    ]
}

fn write_pose<W: Write>(out: &mut W, graph: &SceneGraph) -> Result<()> {
    writeln!(
        out,
        "\tPose: \"Pose::BIND_POSES\", \"{}\" {{",
        Subtype::BindPose.as_str()
    )?;
    writeln!(out, "\t\tType: \"BindPose\"")?;
    writeln!(out, "\t\tVersion: 100")?;
    writeln!(out, "\t\tProperties60:  {{")?;
    writeln!(out, "\t\t}}")?;
    writeln!(out, "\t\tNbPoseNodes: {}", graph.tallies().models)?;

    for node in graph.models() {
        writeln!(out, "\t\tPoseNode:  {{")?;
        writeln!(out, "\t\t\tNode: \"{}\"", node.qualified_name)?;
        writeln!(
            out,
            "\t\t\tMatrix: {}",
            format_list(&pose_matrix(&node.translation()), POSITION_PLACES)
        )?;
        writeln!(out, "\t\t}}")?;
    }
    writeln!(out, "\t}}")?;
    Ok(())
}

/// Model and material blocks in graph order, then the bind pose and
/// global settings.
pub fn write_objects<W: Write>(out: &mut W, graph: &SceneGraph) -> Result<()> {
    section_banner(out, "Object properties")?;
    writeln!(out, "Objects:  {{")?;

    for node in graph.nodes() {
        match &node.kind {
            NodeKind::Model {
                subtype,
                translation,
            } => write_model(out, node, *subtype, translation)?,
            NodeKind::Material { color } => write_material(out, node, color.as_ref())?,
        }
    }

    write_pose(out, graph)?;
    out.write_all(GLOBAL_SETTINGS.as_bytes())?;
    writeln!(out, "}}")?;
    Ok(())
}

pub fn write_relations<W: Write>(out: &mut W, graph: &SceneGraph) -> Result<()> {
    section_banner(out, "Object relations")?;
    writeln!(out, "Relations:  {{")?;

    for node in graph.nodes() {
        writeln!(
            out,
            "\t{}: \"{}\", \"{}\" {{",
            node.kind_name(),
            node.qualified_name,
            node.subtype().as_str()
        )?;
        writeln!(out, "\t}}")?;
    }

    for (name, kind) in CAMERA_STUBS {
        writeln!(out, "\tModel: \"{}\", \"{}\" {{", name, kind)?;
        writeln!(out, "\t}}")?;
    }

    writeln!(out, "}}")?;
    Ok(())
}

pub fn write_connections<W: Write>(out: &mut W, graph: &SceneGraph) -> Result<()> {
    section_banner(out, "Object connections")?;
    writeln!(out, "Connections:  {{")?;

    for node in graph.nodes() {
        writeln!(
            out,
            "\tConnect: \"OO\", \"{}\", \"{}\"",
            node.qualified_name,
            graph.parent_name(node)
        )?;
    }

    writeln!(out, "}}")?;
    Ok(())
}

pub fn write_footer<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(FOOTER.as_bytes())?;
    Ok(())
}
