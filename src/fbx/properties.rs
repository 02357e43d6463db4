use std::io::{self, Write};

/// Value column of a `Property:` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Written verbatim after the flags
    Fixed(&'static str),
    /// Filled in per node (translation or color)
    Node,
    /// Property without a value column
    Empty,
}

#[derive(Debug, Clone, Copy)]
pub struct Property {
    pub name: &'static str,
    pub kind: &'static str,
    pub flags: &'static str,
    pub value: Value,
}

const fn fixed(name: &'static str, kind: &'static str, flags: &'static str, value: &'static str) -> Property {
    Property {
        name,
        kind,
        flags,
        value: Value::Fixed(value),
    }
}

const fn node(name: &'static str, kind: &'static str, flags: &'static str) -> Property {
    Property {
        name,
        kind,
        flags,
        value: Value::Node,
    }
}

const fn empty(name: &'static str, kind: &'static str) -> Property {
    Property {
        name,
        kind,
        flags: "",
        value: Value::Empty,
    }
}

/// Transform and limit defaults for every model; the node's translation goes
/// into "Lcl Translation".
pub const MODEL_PROPERTIES: &[Property] = &[
    fixed("QuaternionInterpolate", "bool", "", "0"),
    fixed("Visibility", "Visibility", "A+", "1"),
    node("Lcl Translation", "Lcl Translation", "A+"),
    fixed("Lcl Rotation", "Lcl Rotation", "A+", "0.000000000000000,0.000000000000000,0.000000000000000"),
    fixed("Lcl Scaling", "Lcl Scaling", "A+", "1.000000000000000,1.000000000000000,1.000000000000000"),
    fixed("RotationOffset", "Vector3D", "", "0,0,0"),
    fixed("RotationPivot", "Vector3D", "", "0,0,0"),
    fixed("ScalingOffset", "Vector3D", "", "0,0,0"),
    fixed("ScalingPivot", "Vector3D", "", "0,0,0"),
    fixed("TranslationActive", "bool", "", "0"),
    fixed("TranslationMin", "Vector3D", "", "0,0,0"),
    fixed("TranslationMax", "Vector3D", "", "0,0,0"),
    fixed("TranslationMinX", "bool", "", "0"),
    fixed("TranslationMinY", "bool", "", "0"),
    fixed("TranslationMinZ", "bool", "", "0"),
    fixed("TranslationMaxX", "bool", "", "0"),
    fixed("TranslationMaxY", "bool", "", "0"),
    fixed("TranslationMaxZ", "bool", "", "0"),
    fixed("RotationOrder", "enum", "", "0"),
    fixed("RotationSpaceForLimitOnly", "bool", "", "0"),
    fixed("AxisLen", "double", "", "10"),
    fixed("PreRotation", "Vector3D", "", "0,0,0"),
    fixed("PostRotation", "Vector3D", "", "0,0,0"),
    fixed("RotationActive", "bool", "", "0"),
    fixed("RotationMin", "Vector3D", "", "0,0,0"),
    fixed("RotationMax", "Vector3D", "", "0,0,0"),
    fixed("RotationMinX", "bool", "", "0"),
    fixed("RotationMinY", "bool", "", "0"),
    fixed("RotationMinZ", "bool", "", "0"),
    fixed("RotationMaxX", "bool", "", "0"),
    fixed("RotationMaxY", "bool", "", "0"),
    fixed("RotationMaxZ", "bool", "", "0"),
    fixed("RotationStiffnessX", "double", "", "0"),
    fixed("RotationStiffnessY", "double", "", "0"),
    fixed("RotationStiffnessZ", "double", "", "0"),
    fixed("MinDampRangeX", "double", "", "0"),
    fixed("MinDampRangeY", "double", "", "0"),
    fixed("MinDampRangeZ", "double", "", "0"),
    fixed("MaxDampRangeX", "double", "", "0"),
    fixed("MaxDampRangeY", "double", "", "0"),
    fixed("MaxDampRangeZ", "double", "", "0"),
    fixed("MinDampStrengthX", "double", "", "0"),
    fixed("MinDampStrengthY", "double", "", "0"),
    fixed("MinDampStrengthZ", "double", "", "0"),
    fixed("MaxDampStrengthX", "double", "", "0"),
    fixed("MaxDampStrengthY", "double", "", "0"),
    fixed("MaxDampStrengthZ", "double", "", "0"),
    fixed("PreferedAngleX", "double", "", "0"),
    fixed("PreferedAngleY", "double", "", "0"),
    fixed("PreferedAngleZ", "double", "", "0"),
    fixed("InheritType", "enum", "", "0"),
    fixed("ScalingActive", "bool", "", "0"),
    fixed("ScalingMin", "Vector3D", "", "1,1,1"),
    fixed("ScalingMax", "Vector3D", "", "1,1,1"),
    fixed("ScalingMinX", "bool", "", "0"),
    fixed("ScalingMinY", "bool", "", "0"),
    fixed("ScalingMinZ", "bool", "", "0"),
    fixed("ScalingMaxX", "bool", "", "0"),
    fixed("ScalingMaxY", "bool", "", "0"),
    fixed("ScalingMaxZ", "bool", "", "0"),
    fixed("GeometricTranslation", "Vector3D", "", "0,0,0"),
    fixed("GeometricRotation", "Vector3D", "", "0,0,0"),
    fixed("GeometricScaling", "Vector3D", "", "1,1,1"),
    empty("LookAtProperty", "object"),
    empty("UpVectorProperty", "object"),
    fixed("Show", "bool", "", "1"),
    fixed("NegativePercentShapeSupport", "bool", "", "1"),
    fixed("DefaultAttributeIndex", "int", "", "0"),
    fixed("Color", "Color", "A", "0.8,0.8,0.8"),
    fixed("Size", "double", "", "100"),
    fixed("Look", "enum", "", "1"),
];

/// Lambert shading template; emissive, diffuse and specular take the
/// material color.
pub const MATERIAL_PROPERTIES: &[Property] = &[
    fixed("ShadingModel", "KString", "", " \"Lambert\""),
    fixed("MultiLayer", "bool", "", "0"),
    node("EmissiveColor", "ColorRGB", ""),
    fixed("EmissiveFactor", "double", "", "0.0000"),
    fixed("AmbientColor", "ColorRGB", "", "1.0000,1.0000,1.0000"),
    fixed("AmbientFactor", "double", "", "1.0000"),
    node("DiffuseColor", "ColorRGB", ""),
    fixed("DiffuseFactor", "double", "", "0.8000"),
    fixed("Bump", "Vector3D", "", "0,0,0"),
    fixed("TransparentColor", "ColorRGB", "", "1,1,1"),
    fixed("TransparencyFactor", "double", "", "0.0000"),
    node("SpecularColor", "ColorRGB", ""),
    fixed("SpecularFactor", "double", "", "1.0000"),
    fixed("ShininessExponent", "double", "", "12.3"),
    fixed("ReflectionColor", "ColorRGB", "", "0,0,0"),
    fixed("ReflectionFactor", "double", "", "1"),
    fixed("Emissive", "ColorRGB", "", "0,0,0"),
    fixed("Ambient", "ColorRGB", "", "1.0,1.0,1.0"),
    fixed("Diffuse", "ColorRGB", "", "1.0,0.8,0.0"),
    fixed("Specular", "ColorRGB", "", "1.0,0.7,0.0"),
    fixed("Shininess", "double", "", "12.3"),
    fixed("Opacity", "double", "", "1.0"),
    fixed("Reflectivity", "double", "", "0"),
];

/// Write a `Properties60` block, substituting `node_value` for every
/// [`Value::Node`] entry.
pub fn write_properties60<W: Write>(
    out: &mut W,
    indent: &str,
    properties: &[Property],
    node_value: &str,
) -> io::Result<()> {
    writeln!(out, "{indent}Properties60:  {{")?;
    for p in properties {
        write!(
            out,
            "{indent}\tProperty: \"{}\", \"{}\", \"{}\"",
            p.name, p.kind, p.flags
        )?;
        match p.value {
            Value::Fixed(v) => writeln!(out, ",{}", v)?,
            Value::Node => writeln!(out, ",{}", node_value)?,
            Value::Empty => writeln!(out)?,
        }
    }
    writeln!(out, "{indent}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(properties: &[Property], value: &str) -> String {
        let mut buf = Vec::new();
        write_properties60(&mut buf, "\t", properties, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_model_has_one_translation_slot() {
        let count = MODEL_PROPERTIES.iter().filter(|p| p.value == Value::Node).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_material_has_three_color_slots() {
        let names: Vec<&str> = MATERIAL_PROPERTIES
            .iter()
            .filter(|p| p.value == Value::Node)
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["EmissiveColor", "DiffuseColor", "SpecularColor"]);
    }

    #[test]
    fn test_line_shapes() {
        let text = render(MODEL_PROPERTIES, "1,2,3");
        assert!(text.starts_with("\tProperties60:  {\n"));
        assert!(text.ends_with("\t}\n"));
        assert!(text.contains("\t\tProperty: \"Lcl Translation\", \"Lcl Translation\", \"A+\",1,2,3\n"));
        assert!(text.contains("\t\tProperty: \"LookAtProperty\", \"object\", \"\"\n"));
        assert!(text.contains("\t\tProperty: \"Size\", \"double\", \"\",100\n"));
    }

    #[test]
    fn test_quoted_value() {
        let text = render(MATERIAL_PROPERTIES, "0,0,0");
        assert!(text.contains("Property: \"ShadingModel\", \"KString\", \"\", \"Lambert\"\n"));
    }
}
