// Storefront routes
// Developed by The GharFresh Team (c)2026

mod home;

pub use crate::funnel::FunnelPage;
pub use home::HomePage;
