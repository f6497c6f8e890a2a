pub mod configuration;
pub mod domain;
pub mod email_client;
mod routes;
pub mod seo;
pub mod startup;
pub mod static_files;
pub mod telemetry;

pub use configuration::get_configuration;
pub use email_client::EmailClient;
pub use startup::Application;
pub use telemetry::{get_subscriber, init_subscriber};
