use crate::backend_client::Backend;
use crate::landing::Landing;
use crate::navigation::{Location, Route};
use crate::templates::render;
use crate::utils::e500;
use actix_web::http::header::ContentType;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use tera::{Context, Tera};

/// Where the footer's source code link points to.
pub struct SourceCodeUrl(pub String);

/// Serves every page the site has, picking it from the request path.
///
/// Pages are only ever read: any other method gets the not-found page.
#[tracing::instrument(
    name = "Showing a page",
    skip(request, backend, templates, source_code_url),
    fields(path = %request.path())
)]
pub async fn show_page(
    request: HttpRequest,
    backend: web::Data<dyn Backend>,
    templates: web::Data<Tera>,
    source_code_url: web::Data<SourceCodeUrl>,
) -> Result<HttpResponse, actix_web::Error> {
    let route = if matches!(*request.method(), Method::GET | Method::HEAD) {
        Route::recognize(&Location::new(request.path()))
    } else {
        Route::NotFound
    };
    match route {
        Route::Landing => {
            let mut landing = Landing::mount(backend.get_ref());
            landing.load_response_count().await;
            render_landing(&landing, &templates, &source_code_url)
        }
        Route::Privacy => {
            let html_body = render(&templates, "privacy.html", &Context::new()).map_err(e500)?;
            Ok(HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(html_body))
        }
        Route::NotFound => {
            let html_body = render(&templates, "not_found.html", &Context::new()).map_err(e500)?;
            Ok(HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(html_body))
        }
    }
}

pub(in crate::routes) fn render_landing(
    landing: &Landing<'_>,
    templates: &Tera,
    source_code_url: &SourceCodeUrl,
) -> Result<HttpResponse, actix_web::Error> {
    let mut context = Context::new();
    context.insert("view", &landing.view());
    context.insert("source_code_url", &source_code_url.0);

    let html_body = render(templates, "landing.html", &context).map_err(e500)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html_body))
}
