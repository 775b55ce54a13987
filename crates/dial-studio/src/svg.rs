//! SVG backend: turns a recorded frame into a standalone document.

use std::fmt::Write as _;

use dial_engine::paint::{Color, Stroke};
use dial_engine::scene::{DrawCmd, DrawList};

/// Renders `list` in paint order into an SVG document of `width` × `height`.
pub fn to_svg_string(list: &mut DrawList, width: f32, height: f32) -> String {
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = writeln!(
        out,
        r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    );

    for item in list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Circle(c) => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="none""#,
                    c.center.x, c.center.y, c.radius
                );
                write_stroke_attrs(&mut out, &c.stroke);
                out.push_str("/>\n");
            }
            DrawCmd::Text(t) => {
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" text-anchor="start" dominant-baseline="alphabetic""#,
                    t.origin.x, t.origin.y, t.size
                );
                write_color_attr(&mut out, "fill", t.color);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
            DrawCmd::Line(l) => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    l.from.x, l.from.y, l.to.x, l.to.y
                );
                write_stroke_attrs(&mut out, &l.stroke);
                out.push_str(r#" stroke-linecap="round"/>"#);
                out.push('\n');
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_stroke_attrs(out: &mut String, stroke: &Stroke) {
    write_color_attr(out, "stroke", stroke.color);
    let _ = write!(out, r#" stroke-width="{}""#, stroke.width);
}

fn write_color_attr(out: &mut String, name: &str, color: Color) {
    let [r, g, b, a] = color.to_srgb_u8();
    let _ = write!(out, r##" {name}="#{r:02x}{g:02x}{b:02x}""##);
    if a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f32::from(a) / 255.0);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
