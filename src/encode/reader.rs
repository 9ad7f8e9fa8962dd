use std::{path::Path, str::FromStr};

use anyhow::Context as _;

use crate::{
    composition::builder::{AnimationBuilder, RawPose},
    foundation::error::{KeymotionError, KeymotionResult},
};

const POSE_FIELDS: [&str; 8] = ["t", "x", "y", "w", "h", "r", "g", "b"];

/// Read a text-format file and feed it to `builder`.
pub fn read_path<B: AnimationBuilder>(path: &Path, builder: B) -> KeymotionResult<B::Output> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read animation '{}'", path.display()))?;
    read_str(&text, builder)
}

/// Parse `input` statement by statement and feed each one to `builder`.
///
/// Blank lines and lines starting with `#` are ignored. Syntax problems are reported as
/// [`KeymotionError::Parse`]; failures raised by the builder are returned unchanged.
pub fn read_str<B: AnimationBuilder>(input: &str, mut builder: B) -> KeymotionResult<B::Output> {
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let stmt = Statement::split(idx + 1, line);
        stmt.apply(&mut builder).inspect_err(|err| {
            tracing::debug!(line = stmt.line, error = %err, "statement rejected");
        })?;
    }
    builder.build()
}

struct Statement<'a> {
    line: usize,
    keyword: &'a str,
    args: Vec<&'a str>,
}

impl<'a> Statement<'a> {
    fn split(line_no: usize, line: &'a str) -> Self {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default();
        Self {
            line: line_no,
            keyword,
            args: words.collect(),
        }
    }

    fn apply<B: AnimationBuilder>(&self, builder: &mut B) -> KeymotionResult<()> {
        match self.keyword {
            "canvas" => {
                self.expect_args(4, "canvas <left> <top> <width> <height>")?;
                builder.set_bounds(
                    self.int(0, "left")?,
                    self.int(1, "top")?,
                    self.int(2, "width")?,
                    self.int(3, "height")?,
                )
            }
            "shape" => {
                self.expect_args(2, "shape <name> <kind>")?;
                builder.declare_shape(self.args[0], self.args[1])
            }
            "motion" => {
                self.expect_args(17, "motion <name> followed by two poses of 8 integers")?;
                let start = self.pose(1)?;
                let end = self.pose(9)?;
                builder.add_motion(self.args[0], start, end)
            }
            "keyframe" => {
                self.expect_args(9, "keyframe <name> <t> <x> <y> <w> <h> <r> <g> <b>")?;
                let pose = self.pose(1)?;
                builder.add_keyframe(self.args[0], pose)
            }
            other => Err(KeymotionError::parse(
                self.line,
                format!("unknown statement '{other}'"),
            )),
        }
    }

    fn expect_args(&self, n: usize, usage: &str) -> KeymotionResult<()> {
        if self.args.len() != n {
            return Err(KeymotionError::parse(
                self.line,
                format!(
                    "expected {n} arguments, found {} (usage: {usage})",
                    self.args.len()
                ),
            ));
        }
        Ok(())
    }

    fn int<T: FromStr>(&self, idx: usize, field: &str) -> KeymotionResult<T> {
        let word = self.args.get(idx).copied().unwrap_or_default();
        word.parse().map_err(|_| {
            KeymotionError::parse(self.line, format!("invalid integer '{word}' for {field}"))
        })
    }

    fn pose(&self, offset: usize) -> KeymotionResult<RawPose> {
        let [t, x, y, w, h, r, g, b] = POSE_FIELDS;
        Ok(RawPose {
            t: self.int(offset, t)?,
            x: self.int(offset + 1, x)?,
            y: self.int(offset + 2, y)?,
            w: self.int(offset + 3, w)?,
            h: self.int(offset + 4, h)?,
            r: self.int(offset + 5, r)?,
            g: self.int(offset + 6, g)?,
            b: self.int(offset + 7, b)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/reader.rs"]
mod tests;
