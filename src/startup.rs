use crate::{
    configuration::Settings,
    email::{self, TransportFactory},
    notifier::Notifier,
    routes,
};

use std::{net::TcpListener, sync::Arc};

use {
    actix_web::{dev::Server, web, App, HttpServer},
    tracing_actix_web::TracingLogger,
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener and wire the transport selected by `email.backend`.
    pub fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let factory = email::transport_factory(&configuration.email);
        Self::build_with_transport_factory(configuration, factory)
    }

    /// Same as [`Application::build`], with the mail transport supplied by the caller.
    pub fn build_with_transport_factory(
        configuration: Settings,
        factory: Arc<dyn TransportFactory>,
    ) -> Result<Self, std::io::Error> {
        let notifier = Notifier::new(factory, &configuration.email);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, notifier)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, notifier: Notifier) -> Result<Server, std::io::Error> {
    let notifier = web::Data::new(notifier);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(routes::json_config())
            .route("/health_check", web::get().to(routes::health_check))
            .route("/api/subscribe", web::post().to(routes::subscribe))
            .app_data(notifier.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
