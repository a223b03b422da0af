pub mod configuration;
pub mod domain;
pub mod email;
pub mod email_templates;
pub mod notifier;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;

pub use {
    configuration::get_configuration,
    startup::{run, Application},
    telemetry::{get_subscriber, init_subscriber},
};
