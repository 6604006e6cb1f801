mod entitlement_service;
mod entitlement_service_impl;
mod rejection;

pub use entitlement_service::*;
pub use entitlement_service_impl::*;
pub use rejection::*;
