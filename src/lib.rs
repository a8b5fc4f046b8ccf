//! # Skillgraph Library
//!
//! Turns a skill catalog into a 2-D skill graph: skills are embedded,
//! grouped (K-Means or taxonomy), projected with power-iteration PCA and
//! written as one JSON artifact for a front-end to plot.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod embedder;
pub mod processing;
pub mod storage;
pub mod ui;
