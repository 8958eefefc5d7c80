// HTTP routes
pub mod gather;
pub mod health;
pub mod params;
pub mod twiml;
pub mod voice;

pub use gather::*;
pub use health::*;
pub use params::CallParams;
pub use twiml::Twiml;
pub use voice::*;
