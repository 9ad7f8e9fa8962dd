//! Serialization of an [`Animation`] to external artifacts, and the matching text reader.

use std::{fmt, io};

use crate::{
    composition::model::Animation,
    foundation::error::{KeymotionError, KeymotionResult},
};

/// Line-oriented reader for the text format.
pub mod reader;
/// SVG `<animate>` encoder.
pub mod svg;
/// Plain-text motion dump.
pub mod text;

/// Pure encoder over the registry's read surface.
pub trait Encoder {
    fn encode(&self, model: &Animation) -> KeymotionResult<String>;

    /// Encode and write the whole document to `out`.
    fn write_to<W: io::Write>(&self, model: &Animation, out: &mut W) -> KeymotionResult<()> {
        let doc = self.encode(model)?;
        out.write_all(doc.as_bytes()).map_err(anyhow::Error::from)?;
        out.flush().map_err(anyhow::Error::from)?;
        Ok(())
    }
}

pub(crate) fn fmt_error(err: fmt::Error) -> KeymotionError {
    KeymotionError::Other(anyhow::Error::from(err))
}
