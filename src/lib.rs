//! The Extrema crate is a library of compile-time minimum and maximum values
//! for the primitive integer types.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	clippy::cast_lossless,
	clippy::default_numeric_fallback,
	clippy::missing_assert_message,
	reason = "Not useful in unit tests"
))]



//		Modules

mod bounds;



//		Packages

pub use bounds::{IntBounds, maximum, minimum};
