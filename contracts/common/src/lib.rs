//! Shared security invariant tests for Veritasor contracts.

#![cfg_attr(not(test), no_std)]
