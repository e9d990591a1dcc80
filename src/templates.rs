use anyhow::Context as _;
use tera::{Context, Tera};

/// Builds the template registry.
///
/// Templates are compiled into the binary, so the server does not depend on the directory it is
/// started from.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("landing.html", include_str!("../templates/landing.html")),
        ("privacy.html", include_str!("../templates/privacy.html")),
        ("not_found.html", include_str!("../templates/not_found.html")),
    ])?;
    Ok(tera)
}

pub fn render(templates: &Tera, name: &str, context: &Context) -> Result<String, anyhow::Error> {
    templates
        .render(name, context)
        .with_context(|| format!("Error rendering {name}"))
}
