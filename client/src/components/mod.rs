//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the auth card. Form pieces take the page's
//! `RwSignal<AuthFormState>` as a prop and mutate it only through its methods.

pub mod auth_tabs;
pub mod brand_header;
pub mod password_input;
pub mod status_banner;
