use crate::backend_client::{Backend, BackendClient};
use crate::configuration::Settings;
use crate::routes::{self, SourceCodeUrl};
use crate::templates::build_templates;
use actix_web::{dev::Server, web, App, HttpServer};
use std::io::ErrorKind;
use std::net::TcpListener;
use std::sync::Arc;
use tera::Tera;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let timeout = configuration.backend.timeout();
        let backend_client = BackendClient::new(
            configuration.backend.base_url,
            configuration.backend.authorization_token,
            timeout,
        )
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

        let templates =
            build_templates().map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        // Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            Arc::new(backend_client),
            templates,
            configuration.application.source_code_url,
        )?;

        // We "save" the bound port in one of `Application`'s fields.
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the
    /// application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Wires the routes, the middleware and the application state together.
///
/// Every GET that is not the health check goes through `show_page`, which decides between the
/// landing page, the privacy policy and the not-found page.
pub fn run(
    listener: TcpListener,
    backend: Arc<dyn Backend>,
    templates: Tera,
    source_code_url: String,
) -> Result<Server, std::io::Error> {
    let backend: web::Data<dyn Backend> = web::Data::from(backend);
    let templates = web::Data::new(templates);
    let source_code_url = web::Data::new(SourceCodeUrl(source_code_url));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .service(
                web::resource("/")
                    .route(web::get().to(routes::show_page))
                    .route(web::post().to(routes::sign_up)),
            )
            .default_service(web::to(routes::show_page))
            .app_data(backend.clone())
            .app_data(templates.clone())
            .app_data(source_code_url.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
