pub mod alerts_controller;
pub mod notifications_controller;
pub mod stocks_controller;
