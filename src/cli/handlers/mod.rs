// Copyright 2025 Formula Lab Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command handlers for CLI operations

pub mod config;
pub mod serve;
pub mod solve;

pub use config::handle_config;
pub use serve::handle_serve;
pub use solve::{SolveArgs, handle_solve, solve};
