//! # segtrain API
//!
//! HTTP surface over a single trainee [`Session`](segtrain_core::Session):
//! load a network (sample or uploaded rows), submit edge judgements, and
//! query the compliance score.

pub mod rest;

pub use rest::{RestApi, SharedSession};
