pub mod entitlement_service;
pub mod hotels_service;
