use std::fmt::Write as _;

use crate::{
    animation::{
        keyframe::Keyframe,
        shape::{Shape, ShapeKind},
    },
    composition::model::Animation,
    encode::{Encoder, fmt_error},
    foundation::error::{KeymotionError, KeymotionResult},
};

/// Options for [`SvgEncoder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SvgOptions {
    /// Ticks per time unit; `begin`/`dur` are tick offsets divided by this. Must be > 0.
    pub tempo: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { tempo: 1 }
    }
}

/// Encodes a registry as an SVG 1.1 document with `<animate>` children.
///
/// Only attributes that change between consecutive keyframes get an `<animate>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgEncoder {
    opts: SvgOptions,
}

impl SvgEncoder {
    pub fn new(opts: SvgOptions) -> KeymotionResult<Self> {
        if opts.tempo == 0 {
            return Err(KeymotionError::validation("svg tempo must be > 0"));
        }
        Ok(Self { opts })
    }

    pub fn options(&self) -> SvgOptions {
        self.opts
    }

    fn write_shape(&self, out: &mut String, shape: &Shape) -> std::fmt::Result {
        let Some(first) = shape.keyframes().first() else {
            return Ok(());
        };
        let tag = tag_name(shape.kind());
        let [x, y, w, h] = attribute_names(shape.kind());
        let (pos, dim) = (first.position(), first.dimensions());

        writeln!(
            out,
            r#"<{tag} id="{}" {x}="{}" {y}="{}" {w}="{}" {h}="{}" fill="{}" visibility="visible">"#,
            escape_attr(shape.name()),
            pos.x,
            pos.y,
            dim.width(),
            dim.height(),
            first.color()
        )?;

        for pair in shape.keyframes().windows(2) {
            self.write_transition(out, shape.kind(), &pair[0], &pair[1])?;
        }

        writeln!(out, "</{tag}>")
    }

    fn write_transition(
        &self,
        out: &mut String,
        kind: ShapeKind,
        from: &Keyframe,
        to: &Keyframe,
    ) -> std::fmt::Result {
        let tempo = f64::from(self.opts.tempo);
        let begin = seconds(from.tick().0 as f64 / tempo);
        let dur = seconds(from.tick().span_to(to.tick()) as f64 / tempo);

        let [x, y, w, h] = attribute_names(kind);
        let (p0, p1) = (from.position(), to.position());
        let (d0, d1) = (from.dimensions(), to.dimensions());
        let changes = [
            (x, i64::from(p0.x), i64::from(p1.x)),
            (y, i64::from(p0.y), i64::from(p1.y)),
            (w, i64::from(d0.width()), i64::from(d1.width())),
            (h, i64::from(d0.height()), i64::from(d1.height())),
        ];

        for (name, a, b) in changes.into_iter().filter(|(_, a, b)| a != b) {
            writeln!(
                out,
                r#"<animate attributeName="{name}" attributeType="XML" begin="{begin}" dur="{dur}" fill="freeze" from="{a}" to="{b}"/>"#
            )?;
        }

        if from.color() != to.color() {
            writeln!(
                out,
                r#"<animate attributeName="fill" attributeType="CSS" from="{}" to="{}" begin="{begin}" dur="{dur}" fill="freeze"/>"#,
                from.color(),
                to.color()
            )?;
        }

        Ok(())
    }
}

impl Encoder for SvgEncoder {
    #[tracing::instrument(level = "debug", skip_all, fields(shapes = model.len(), tempo = self.opts.tempo))]
    fn encode(&self, model: &Animation) -> KeymotionResult<String> {
        if self.opts.tempo == 0 {
            return Err(KeymotionError::validation("svg tempo must be > 0"));
        }

        let c = model.canvas();
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg width="{}" height="{}" viewBox="{} {} {} {}" xmlns="http://www.w3.org/2000/svg" version="1.1">"#,
            c.width, c.height, c.left, c.top, c.width, c.height
        )
        .map_err(fmt_error)?;

        for shape in model.iter() {
            tracing::trace!(shape = shape.name(), "encoding shape");
            self.write_shape(&mut out, shape).map_err(fmt_error)?;
        }

        out.push_str("</svg>\n");
        Ok(out)
    }
}

fn tag_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "rect",
        ShapeKind::Ellipse => "ellipse",
    }
}

/// SVG attribute names for x, y, width and height.
fn attribute_names(kind: ShapeKind) -> [&'static str; 4] {
    match kind {
        ShapeKind::Rectangle => ["x", "y", "width", "height"],
        ShapeKind::Ellipse => ["cx", "cy", "rx", "ry"],
    }
}

/// Decimal time value that always carries a fractional part (`1.0`, `0.25`).
fn seconds(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/svg.rs"]
mod tests;
