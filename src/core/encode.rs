use std::io::{self, Write};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::Formatter;

use crate::models::DirectoryListing;

/// Compact JSON with `", "` and `": "` separators, matching what the
/// device-side `json.dumps` prints.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

pub fn write_listing<W: Write>(writer: &mut W, listing: &DirectoryListing) -> io::Result<()> {
    let mut serializer = Serializer::with_formatter(writer, SpacedFormatter);
    listing.serialize(&mut serializer).map_err(io::Error::from)
}

pub fn to_wire_string(listing: &DirectoryListing) -> anyhow::Result<String> {
    let mut out = Vec::new();
    write_listing(&mut out, listing)?;
    Ok(String::from_utf8(out)?)
}
