use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::routes::{
    ConsultationInbox, SiteSettings, all_page_meta, consultation_preflight, health_check,
    method_not_allowed, not_found, page_meta, send_consultation_email, serve_site,
};
use crate::seo::SeoConfig;
use actix_web::dev::Server;
use actix_web::middleware::Compress;
use actix_web::{App, HttpServer, http::Method, web, web::Data};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub const CONSULTATION_PATH: &str = "/api/send-consultation-email";

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_settings = configuration.email_client;
        let email_client = EmailClient::new(
            email_settings.base_url,
            email_settings.sender_email,
            email_settings.authorization_token,
            email_settings.timeout,
        )
        .context("Failed to build the email HTTP client")?;
        tracing::info!(
            email_configured = email_client.is_configured(),
            admin_email = %email_settings.admin_email,
            "Consultation relay ready"
        );

        let seo = SeoConfig::new(&configuration.application.base_url)
            .context("application.base_url is not a valid url")?;
        let site = SiteSettings {
            dist_dir: configuration.application.dist_dir,
            public_dir: configuration.application.public_dir,
            render_page_meta: configuration.application.render_page_meta,
        };

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            email_client,
            ConsultationInbox(email_settings.admin_email),
            seo,
            site,
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(
    listener: TcpListener,
    email_client: EmailClient,
    inbox: ConsultationInbox,
    seo: SeoConfig,
    site: SiteSettings,
) -> Result<Server, std::io::Error> {
    let email_client = Data::new(email_client);
    let inbox = Data::new(inbox);
    let seo = Data::new(seo);
    let site = Data::new(site);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(TracingLogger::default())
            .app_data(email_client.clone())
            .app_data(inbox.clone())
            .app_data(seo.clone())
            .app_data(site.clone())
            .service(health_check)
            .service(
                web::resource(CONSULTATION_PATH)
                    .route(web::post().to(send_consultation_email))
                    .route(web::method(Method::OPTIONS).to(consultation_preflight))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(all_page_meta)
            .service(page_meta)
            .service(
                web::resource("/{path:.*}")
                    .route(web::get().to(serve_site))
                    .route(web::head().to(serve_site))
                    .default_service(web::to(not_found)),
            )
    })
    .listen(listener)?
    .run();
    Ok(server)
}
