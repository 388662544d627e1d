pub mod api;
pub mod helpers;
pub mod order;
pub mod pricing;
pub mod quick;
