// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod api;
pub mod calendar;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod draft;
pub mod models;
pub mod projection;
pub mod recur;
pub mod utils;
