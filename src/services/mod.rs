pub mod health;
pub mod shorten;

pub use health::HealthService;
pub use shorten::ShortenService;
