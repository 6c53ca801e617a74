// Landing page sections, top to bottom

mod cta;
mod flow;
mod footer;
mod hero;
mod modules;
mod nav;
mod reports;
mod security;
mod video;

pub use cta::CtaSection;
pub use flow::FlowSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use modules::ModulesSection;
pub use nav::Nav;
pub use reports::ReportsSection;
pub use security::SecuritySection;
pub use video::VideoSection;
