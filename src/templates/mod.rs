pub mod pricing_template;

pub use pricing_template::PricingTemplate;
