//! Route navigator server.
//!
//! Estimates distance, duration and a narrative step list for a trip
//! between two points, using a travel strategy chosen by transport mode.
//! Every computed route is written through to a statistics store, and
//! every planning call is audited whether it succeeds or fails.

pub mod audit;
pub mod cache;
pub mod config;
pub mod domain;
pub mod geo;
pub mod planner;
pub mod service;
pub mod store;
pub mod strategy;
pub mod web;
