// ABOUTME: Re-exports helper modules for the health-overview CLI
// ABOUTME: Provides demo data seeding and terminal display utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod seed;
