mod client_email;
mod client_name;
mod consultation_request;
mod estate_location;

pub use client_email::ClientEmail;
pub use client_name::ClientName;
pub use consultation_request::{ConsultationData, ConsultationRequest, RequestRejection};
pub use estate_location::EstateLocation;
