use std::fs::File;
use std::io::{BufReader, ErrorKind, Seek};
use std::path::Path;

use bincode::config::legacy;
use bincode::error::DecodeError;
use bincode::{decode_from_std_read, Decode};

use crate::header::RawSensHeader;
use crate::{Mat4f, SensError, SensHeader, SensResult, SENS_VERSION};

// Bounds the sensor name length a corrupted header can make us allocate.
const MAX_HEADER_SIZE: usize = 1024 * 1024;

#[derive(Decode, Debug)]
struct RawFrameHeader {
    camera_to_world: Mat4f,
    color_timestamp: u64,
    depth_timestamp: u64,
    color_size_bytes: u64,
    depth_size_bytes: u64,
}

/// Metadata of one RGB-D frame. The compressed images are not kept.
#[derive(Clone, Debug, PartialEq)]
pub struct SensFrame {
    pub index: u64,
    pub camera_to_world: Mat4f,
    pub color_timestamp: u64,
    pub depth_timestamp: u64,
    pub color_size_bytes: u64,
    pub depth_size_bytes: u64,
}

/// Forward only reader over the frames of a `.sens` file.
///
/// The header is decoded when the file is opened, frames are then decoded one at a time by
/// [`SensReader::next_frame`] until `frame_count` frames have been read.
pub struct SensReader {
    reader: BufReader<File>,
    header: SensHeader,
    file_len: u64,
    next_index: u64,
}

impl SensReader {
    pub fn open(path: &Path) -> SensResult<Self> {
        let file = File::open(path)?;
        let file_len = file.metadata()?.len();
        let mut reader = BufReader::new(file);

        let version: u32 = decode_from_std_read(&mut reader, legacy())?;
        if version != SENS_VERSION {
            return Err(SensError::UnsupportedVersion(version));
        }
        let raw: RawSensHeader =
            decode_from_std_read(&mut reader, legacy().with_limit::<MAX_HEADER_SIZE>())?;

        Ok(Self {
            reader,
            header: SensHeader::from_raw(version, raw),
            file_len,
            next_index: 0,
        })
    }

    pub fn header(&self) -> &SensHeader {
        &self.header
    }

    /// Number of frames not yet read.
    pub fn remaining(&self) -> u64 {
        self.header.frame_count.saturating_sub(self.next_index)
    }

    /// Decodes the next frame, skipping over its image payloads.
    /// Returns `Ok(None)` once all the frames announced by the header have been read.
    pub fn next_frame(&mut self) -> SensResult<Option<SensFrame>> {
        if self.remaining() == 0 {
            return Ok(None);
        }
        let index = self.next_index;
        let raw: RawFrameHeader = decode_from_std_read(&mut self.reader, legacy())
            .map_err(|e| frame_decode_error(e, index))?;

        let payload = raw
            .color_size_bytes
            .checked_add(raw.depth_size_bytes)
            .ok_or(SensError::Truncated { frame: index })?;
        let position = self.reader.stream_position()?;
        let payload_end = position
            .checked_add(payload)
            .filter(|end| *end <= self.file_len)
            .ok_or(SensError::Truncated { frame: index })?;
        // payload_end fits in the file so the relative offset fits in an i64.
        self.reader.seek_relative((payload_end - position) as i64)?;

        self.next_index += 1;
        Ok(Some(SensFrame {
            index,
            camera_to_world: raw.camera_to_world,
            color_timestamp: raw.color_timestamp,
            depth_timestamp: raw.depth_timestamp,
            color_size_bytes: raw.color_size_bytes,
            depth_size_bytes: raw.depth_size_bytes,
        }))
    }
}

fn frame_decode_error(e: DecodeError, frame: u64) -> SensError {
    match e {
        DecodeError::UnexpectedEnd { .. } => SensError::Truncated { frame },
        DecodeError::Io { inner, .. } if inner.kind() == ErrorKind::UnexpectedEof => {
            SensError::Truncated { frame }
        }
        e => SensError::Decode(e),
    }
}
