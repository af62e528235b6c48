//! Test suite for TenderDesk
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
