// =============================================================================
// Gravity Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Navigation & Chrome
// 2. Form Components
// 3. Page Sections
// =============================================================================

pub mod back_to_top;
pub mod contact;
pub mod footer;
pub mod forms;
pub mod nav;

pub use back_to_top::BackToTop;
pub use contact::ContactSection;
pub use footer::Footer;
pub use forms::{TextArea, TextInput};
pub use nav::SiteHeader;
