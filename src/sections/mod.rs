// Landing page sections

/// Repository of the advertised tool (single source of truth for links).
pub const REPO_URL: &str = "https://github.com/noricha-vr/ContextGenerator";

mod comparison;
mod cta;
mod features;
mod footer;
mod header;
mod hero;
mod overlay;
mod testimonials;

pub use comparison::{Comparison, ComparisonRow};
pub use cta::CallToAction;
pub use features::{DetailedFeature, Feature, Features, Workflow};
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use overlay::{LAUNCH_COMMANDS, LaunchOverlay};
pub use testimonials::{Testimonial, Testimonials};
