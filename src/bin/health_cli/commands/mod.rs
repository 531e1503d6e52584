// ABOUTME: Re-exports command modules for the health-overview CLI
// ABOUTME: Provides permission commands and per-screen data commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod data;
pub mod permissions;
