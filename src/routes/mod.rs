mod consultation;
mod health_check;
mod seo;
mod site;

pub use consultation::{
    ConsultationInbox, consultation_preflight, error_chain_fmt, method_not_allowed,
    send_consultation_email,
};
pub use health_check::*;
pub use seo::{all_page_meta, page_meta};
pub use site::{SiteSettings, not_found, serve_site};
