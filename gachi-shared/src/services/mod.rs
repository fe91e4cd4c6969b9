pub mod identity_service;
pub mod notification_services;
