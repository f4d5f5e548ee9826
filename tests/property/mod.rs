// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod composite_dispatch;
mod event_emission;
