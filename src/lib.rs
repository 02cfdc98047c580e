// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Course-Favorites: one-shot admin tool for favorite-course fixes
//!
//! This crate locates a user document in Firestore by first/last name and
//! appends a course ID to the `favoriteCourses` array if it is not already
//! present, stamping `updatedAt` on the way out.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
