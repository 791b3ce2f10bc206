//! File discovery module
//!
//! This module contains components for walking directory trees and
//! selecting the files to hand to the formatter.

mod policy;
mod walker;

pub use policy::DiscoveryPolicy;
pub use walker::Walker;
