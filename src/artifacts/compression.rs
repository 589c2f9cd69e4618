//! Zlib compression for objects at rest
//!
//! `decompress` drives the inflater by hand instead of going through a reader
//! adapter: a reader reports a clean EOF for a stream that simply stops, and a
//! truncated object must surface as `CorruptObject`.

use crate::artifacts::error::{ObjectError, ObjectResult};
use bytes::Bytes;
use flate2::{Decompress, FlushDecompress, Status};
use std::io::Write;

const MIN_OUTPUT_CHUNK: usize = 64;

pub fn compress(data: &[u8]) -> ObjectResult<Bytes> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;

    Ok(encoder.finish()?.into())
}

pub fn decompress(data: &[u8]) -> ObjectResult<Bytes> {
    let mut decoder = Decompress::new(true);
    let mut output = Vec::with_capacity(data.len().saturating_mul(2).max(MIN_OUTPUT_CHUNK));

    loop {
        if output.len() == output.capacity() {
            output.reserve(output.capacity().max(MIN_OUTPUT_CHUNK));
        }

        let (total_in, total_out) = (decoder.total_in(), decoder.total_out());
        let input = &data[total_in as usize..];
        let status = decoder
            .decompress_vec(input, &mut output, FlushDecompress::None)
            .map_err(|err| ObjectError::corrupt(format!("invalid zlib stream: {err}")))?;

        match status {
            Status::StreamEnd => break,
            // output has spare room, so no progress means the input ran out
            _ if decoder.total_in() == total_in && decoder.total_out() == total_out => {
                return Err(ObjectError::corrupt("zlib stream ended prematurely"));
            }
            _ => {}
        }
    }

    let consumed = decoder.total_in() as usize;
    if consumed != data.len() {
        return Err(ObjectError::corrupt(format!(
            "{} trailing bytes after zlib stream",
            data.len() - consumed
        )));
    }

    Ok(output.into())
}
