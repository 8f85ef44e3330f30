pub mod citizen;
pub mod citizen_log;
pub mod department;
pub mod grievance;
pub mod service;
pub mod service_request;

pub use citizen::{Citizen, CitizenCreate};
pub use citizen_log::CitizenLog;
pub use department::{Department, DepartmentCreate};
pub use grievance::{Grievance, GrievanceCreate};
pub use service::{Service, ServiceCreate};
pub use service_request::{ServiceRequest, ServiceRequestCreate};
