pub mod defs;

pub use defs::Activity;
pub use defs::ExtraContext;
pub use defs::Verb;
