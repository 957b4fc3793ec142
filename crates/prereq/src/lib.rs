//! Prereq - a prerequisite dependency planner.
//!
//! This crate provides both a CLI application and a library for modelling
//! items and their prerequisites as a directed graph: cycle detection,
//! topological study orders, level grouping, and breadth-first traces.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod domain;
pub mod error;
pub mod graph;
pub mod import;

// Public CLI module (needed by binary)
pub mod cli;

pub mod config;
pub mod output;
