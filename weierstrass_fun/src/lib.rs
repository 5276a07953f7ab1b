#![no_std]
#![allow(non_snake_case)]
#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

mod error;
mod field;
mod point;

pub mod curve;
pub mod secp256k1;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use curve::{Curve, WeierstrassCurve};
pub use error::Error;
pub use field::FieldElement;
pub use num_bigint;
pub use point::Point;
pub use rand_core;
pub use secp256k1::Secp256k1;
