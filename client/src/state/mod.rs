//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is app-wide session context; `auth_form` is the transient state of
//! one rendered login/sign-up form.

pub mod auth;
pub mod auth_form;
