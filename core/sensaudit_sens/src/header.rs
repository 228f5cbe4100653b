use std::fmt::{Display, Formatter};

use bincode::Decode;

use crate::Mat4f;

/// How the color images of a sequence are compressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorCompression {
    Unknown,
    Raw,
    Png,
    Jpeg,
}

impl From<i32> for ColorCompression {
    fn from(value: i32) -> Self {
        match value {
            0 => ColorCompression::Raw,
            1 => ColorCompression::Png,
            2 => ColorCompression::Jpeg,
            _ => ColorCompression::Unknown,
        }
    }
}

impl Display for ColorCompression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorCompression::Unknown => write!(f, "unknown"),
            ColorCompression::Raw => write!(f, "raw"),
            ColorCompression::Png => write!(f, "png"),
            ColorCompression::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// How the depth images of a sequence are compressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DepthCompression {
    Unknown,
    RawUshort,
    ZlibUshort,
    OcciUshort,
}

impl From<i32> for DepthCompression {
    fn from(value: i32) -> Self {
        match value {
            0 => DepthCompression::RawUshort,
            1 => DepthCompression::ZlibUshort,
            2 => DepthCompression::OcciUshort,
            _ => DepthCompression::Unknown,
        }
    }
}

impl Display for DepthCompression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DepthCompression::Unknown => write!(f, "unknown"),
            DepthCompression::RawUshort => write!(f, "raw ushort"),
            DepthCompression::ZlibUshort => write!(f, "zlib ushort"),
            DepthCompression::OcciUshort => write!(f, "occi ushort"),
        }
    }
}

/// On disk layout of the header, right after the version word.
#[derive(Decode, Debug)]
pub(crate) struct RawSensHeader {
    sensor_name: String,
    color_intrinsic: Mat4f,
    color_extrinsic: Mat4f,
    depth_intrinsic: Mat4f,
    depth_extrinsic: Mat4f,
    color_compression: i32,
    depth_compression: i32,
    color_width: u32,
    color_height: u32,
    depth_width: u32,
    depth_height: u32,
    depth_shift: f32,
    frame_count: u64,
}

/// Sequence wide metadata of a `.sens` file.
#[derive(Clone, Debug, PartialEq)]
pub struct SensHeader {
    pub version: u32,
    pub sensor_name: String,
    pub color_intrinsic: Mat4f,
    pub color_extrinsic: Mat4f,
    pub depth_intrinsic: Mat4f,
    pub depth_extrinsic: Mat4f,
    pub color_compression: ColorCompression,
    pub depth_compression: DepthCompression,
    pub color_width: u32,
    pub color_height: u32,
    pub depth_width: u32,
    pub depth_height: u32,
    pub depth_shift: f32,
    pub frame_count: u64,
}

impl SensHeader {
    pub(crate) fn from_raw(version: u32, raw: RawSensHeader) -> Self {
        Self {
            version,
            sensor_name: raw.sensor_name,
            color_intrinsic: raw.color_intrinsic,
            color_extrinsic: raw.color_extrinsic,
            depth_intrinsic: raw.depth_intrinsic,
            depth_extrinsic: raw.depth_extrinsic,
            color_compression: raw.color_compression.into(),
            depth_compression: raw.depth_compression.into(),
            color_width: raw.color_width,
            color_height: raw.color_height,
            depth_width: raw.depth_width,
            depth_height: raw.depth_height,
            depth_shift: raw.depth_shift,
            frame_count: raw.frame_count,
        }
    }
}

impl Display for SensHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  Version     -> {}", self.version)?;
        writeln!(f, "  Sensor name -> {}", self.sensor_name)?;
        writeln!(
            f,
            "  Color       -> {}x{} ({})",
            self.color_width, self.color_height, self.color_compression
        )?;
        writeln!(
            f,
            "  Depth       -> {}x{} ({})",
            self.depth_width, self.depth_height, self.depth_compression
        )?;
        writeln!(f, "  Depth shift -> {}", self.depth_shift)?;
        write!(f, "  # of frames -> {}", self.frame_count)
    }
}
