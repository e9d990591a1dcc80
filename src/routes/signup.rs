use crate::backend_client::Backend;
use crate::domain::FormParams;
use crate::landing::Landing;
use crate::routes::pages::{render_landing, SourceCodeUrl};
use actix_web::{web, HttpResponse};
use tera::Tera;

/// Handles the landing page's form.
///
/// Whatever happens - local validation issues, a rejection, the remote service being unreachable -
/// the visitor gets the landing page back, either thanking them or telling them what to fix.
/// Missing fields are treated as empty ones, so they surface as `required` issues instead of a
/// bare `400`.
#[tracing::instrument(
    name = "Signing up",
    skip(form, backend, templates, source_code_url),
    fields(
        response_email = %form.email,
        response_name = %form.name
    )
)]
pub async fn sign_up(
    form: web::Form<FormParams>,
    backend: web::Data<dyn Backend>,
    templates: web::Data<Tera>,
    source_code_url: web::Data<SourceCodeUrl>,
) -> Result<HttpResponse, actix_web::Error> {
    let FormParams { name, email } = form.0;

    let mut landing = Landing::mount(backend.get_ref());
    landing.load_response_count().await;
    landing.set_name(name);
    landing.set_email(email);
    landing.submit().await;

    render_landing(&landing, &templates, &source_code_url)
}
