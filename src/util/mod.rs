//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep pure logic out of page and component code so it can
//! be unit-tested without a browser.

pub mod sign_up_schema;
