//! Tera templates embedded at compile time.

use serde::Serialize;
use tera::{Context, Tera};

pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Loads every page and component template.
    ///
    /// # Errors
    ///
    /// Returns [`tera::Error`] if a template fails to parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
            (
                "components/place.html",
                include_str!("../templates/components/place.html"),
            ),
        ])?;
        Ok(Self { tera })
    }

    /// # Errors
    ///
    /// Returns [`tera::Error`] if the context cannot be serialized or the
    /// template fails to render.
    pub fn render(&self, template: &str, context: &impl Serialize) -> Result<String, tera::Error> {
        let ctx = Context::from_serialize(context)?;
        self.tera.render(template, &ctx)
    }
}
