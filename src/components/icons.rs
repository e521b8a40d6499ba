//! Centralized icon definitions.
//!
//! Maps semantic icon names to the lucide set so components never import
//! `icondata` directly.

use icondata::Icon;

pub const CHEVRON_LEFT: Icon = icondata::LuChevronLeft;
pub const CHEVRON_RIGHT: Icon = icondata::LuChevronRight;
pub const CLOSE: Icon = icondata::LuX;
pub const GALLERY: Icon = icondata::LuImages;
pub const GITHUB: Icon = icondata::LuGithub;
pub const EXTERNAL_LINK: Icon = icondata::LuExternalLink;
