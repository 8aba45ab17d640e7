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

//! Formula Lab
//!
//! Three closed-form formulas behind a JSON endpoint, a browser form and a
//! command line. The [`formula`] module holds the pure computations; the
//! [`cli::server`] module wraps them in the `POST /api/solve` handler.

pub mod cli;
pub mod formula;
pub mod inputs;

// Re-export main types
pub use formula::{Evaluation, FormulaParams, FunctionKind, ParamError};
pub use inputs::{FormInputs, InputsError};
