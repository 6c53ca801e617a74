pub mod pricing_section;

pub use pricing_section::PricingSection;
