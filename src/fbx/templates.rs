//! Static blocks of the document that carry no per-drawing data.

pub const CREATOR: &str = "SVG Anchor Export";
pub const CREATOR_VERSION: &str = "0.10 (sub 0)";

/// Fixed creation stamp: year, month, day, hour, minute, second, millisecond
pub const CREATION_STAMP: (u32, u32, u32, u32, u32, u32, u32) = (2019, 10, 3, 10, 1, 31, 0);

pub const RULE: &str = ";------------------------------------------------------------------";

/// Camera stubs that consuming tools expect in the relations section
pub const CAMERA_STUBS: [(&str, &str); 8] = [
    ("Model::Producer Perspective", "Camera"),
    ("Model::Producer Top", "Camera"),
    ("Model::Producer Bottom", "Camera"),
    ("Model::Producer Front", "Camera"),
    ("Model::Producer Back", "Camera"),
    ("Model::Producer Right", "Camera"),
    ("Model::Producer Left", "Camera"),
    ("Model::Camera Switcher", "CameraSwitcher"),
];

pub const GLOBAL_SETTINGS: &str = r#"	GlobalSettings:  {
		Version: 1000
		Properties60:  {
			Property: "UpAxis", "int", "",1
			Property: "UpAxisSign", "int", "",1
			Property: "FrontAxis", "int", "",2
			Property: "FrontAxisSign", "int", "",1
			Property: "CoordAxis", "int", "",0
			Property: "CoordAxisSign", "int", "",1
			Property: "UnitScaleFactor", "double", "",1
		}
	}
"#;

pub const FOOTER: &str = r#"
;Takes and animation section
;----------------------------------------------------

Takes:  {
	Current: ""
}
;Version 5 settings
;------------------------------------------------------------------

Version5:  {
	AmbientRenderSettings:  {
		Version: 101
		AmbientLightColor: 0.0,0.0,0.0,0
	}
	FogOptions:  {
		FogEnable: 0
		FogMode: 0
		FogDensity: 0.000
		FogStart: 5.000
		FogEnd: 25.000
		FogColor: 0.1,0.1,0.1,1
	}
	Settings:  {
		FrameRate: "24"
		TimeFormat: 1
		SnapOnFrames: 0
		ReferenceTimeIndex: -1
		TimeLineStartTime: 0
		TimeLineStopTime: 479181389250
	}
	RendererSetting:  {
		DefaultCamera: "Producer Perspective"
		DefaultViewingMode: 0
	}
}
"#;
