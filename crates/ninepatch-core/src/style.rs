//! Host-facing presentation declarations for a render.
//!
//! Grid renders become a `no-repeat` background plus four paddings. Simple
//! renders become a bordered-image declaration whose slice widths and border
//! widths equal the insets, with padding cleared.

use ninepatch_types::Result;

use crate::codec::data_uri;
use crate::compositor::SimpleRender;
use crate::patch::{GridRender, Render};

/// Ordered `(property, value)` pairs for a host element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    entries: Vec<(String, String)>,
}

impl StyleDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.entries.push((property.to_string(), value.into()));
    }

    /// Last value set for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Render as CSS declaration text, one per line.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(p, v)| format!("{p}: {v};\n"))
            .collect()
    }
}

fn stretch_keyword(repeat: bool) -> &'static str {
    if repeat { "repeat" } else { "stretch" }
}

fn grid_declarations(grid: &GridRender, uri: &str, background_color: &str) -> StyleDeclarations {
    let mut decls = StyleDeclarations::new();
    let background = if background_color.is_empty() {
        format!("url({uri}) no-repeat")
    } else {
        format!("{background_color} url({uri}) no-repeat")
    };
    decls.set("background", background);
    let i = grid.insets;
    decls.set("padding-left", format!("{}px", i.left));
    decls.set("padding-right", format!("{}px", i.right));
    decls.set("padding-top", format!("{}px", i.top));
    decls.set("padding-bottom", format!("{}px", i.bottom));
    decls
}

fn simple_declarations(simple: &SimpleRender, uri: &str) -> StyleDeclarations {
    let mut decls = StyleDeclarations::new();
    let i = simple.insets;
    decls.set(
        "border-width",
        format!("{}px {}px {}px {}px", i.top, i.right, i.bottom, i.left),
    );
    decls.set("border-style", "solid");
    decls.set("padding", "0");
    decls.set(
        "border-image",
        format!(
            "url({uri}) {} {} {} {} fill {} {}",
            i.top,
            i.right,
            i.bottom,
            i.left,
            stretch_keyword(simple.repeat_h),
            stretch_keyword(simple.repeat_v),
        ),
    );
    decls
}

/// Build the declarations that attach `render` to a host element.
///
/// `background_color` is the element's own background color, kept
/// beneath the composited image in grid mode.
pub fn declarations(render: &Render, background_color: &str) -> Result<StyleDeclarations> {
    let uri = data_uri(render.raster())?;
    Ok(match render {
        Render::Grid(grid) => grid_declarations(grid, &uri, background_color),
        Render::Simple(simple) => simple_declarations(simple, &uri),
    })
}
