// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cooperative cancellation for long traversals.
//!
//! Enumerating a huge dictionary or running fuzzy search with a generous
//! budget can take a while. The `*_until` entry points poll an [`Interrupt`]
//! once per expanded branch and return what they found so far when it fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Polled during traversal; returning `true` stops it.
pub trait Interrupt {
    fn should_stop(&self) -> bool;
}

/// Never stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Interrupt for Never {
    #[inline]
    fn should_stop(&self) -> bool {
        false
    }
}

/// Stops once the wall clock passes a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(pub Instant);

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }
}

impl Interrupt for Deadline {
    #[inline]
    fn should_stop(&self) -> bool {
        Instant::now() >= self.0
    }
}

/// Stops when another thread raises the flag.
impl Interrupt for AtomicBool {
    #[inline]
    fn should_stop(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<I: Interrupt + ?Sized> Interrupt for &I {
    #[inline]
    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}
