//! Sorting module for document listings
//!
//! This module provides:
//! - The entity trait the comparator reads documents through
//! - Field classification and sort key types
//! - The comparator rule set
//! - Pure and memoized sorted views

pub mod compare;
pub mod fields;
pub mod impls;
pub mod keys;
pub mod traits;
pub mod utils;
pub mod view;


pub use compare::*;
pub use fields::*;
pub use keys::*;
pub use traits::*;
pub use view::*;
