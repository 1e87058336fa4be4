//! Subway network server.
//!
//! Keeps a registry of stations and lines, maintains each line as an
//! ordered chain of sections, and answers shortest-path queries across
//! every line in the network.

pub mod config;
pub mod directory;
pub mod domain;
pub mod network;
pub mod web;
