// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Little-endian 32-bit primitives.
//!
//! Every field in the format is a signed 32-bit little-endian integer. Reads
//! go through `read_exact`, so a short source surfaces as `UnexpectedEof`,
//! which becomes [`DecodeError::Truncated`] naming the field that was due.

use std::io::{self, Read, Write};

use super::error::{DecodeError, Field};

#[inline]
pub(crate) fn write_i32<W: Write + ?Sized>(w: &mut W, value: i32) -> io::Result<()> {
    w.write_all(&value.to_le_bytes())
}

pub(crate) fn read_i32<R: Read + ?Sized>(r: &mut R, field: Field) -> Result<i32, DecodeError> {
    let mut buf = [0u8; 4];
    match r.read_exact(&mut buf) {
        Ok(()) => Ok(i32::from_le_bytes(buf)),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            Err(DecodeError::Truncated(field))
        }
        Err(err) => Err(DecodeError::Io(err)),
    }
}

/// Read a count field; negative values are malformed.
pub(crate) fn read_count<R: Read + ?Sized>(r: &mut R, field: Field) -> Result<u32, DecodeError> {
    let value = read_i32(r, field)?;
    u32::try_from(value).map_err(|_| DecodeError::NegativeCount { field, value })
}
