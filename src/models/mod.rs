//! Typed content records

mod fields;
mod metadata;
mod object;
mod select;

pub use fields::ImageRef;
pub use metadata::*;
pub use object::{Collection, ContentObject, CosmicObject};
pub use select::{Labeled, Proficiency, ProjectStatus, Rating, SkillCategory};
