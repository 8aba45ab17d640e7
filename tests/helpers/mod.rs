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

//! Test helpers for the server and CLI integration tests

#![allow(dead_code)]

use formula_lab::cli::server::{config::ServerConfig, create_app};
use std::path::{Path, PathBuf};

/// Get path to test fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Start the API on an ephemeral port and return its base URL
pub async fn spawn_server(storage_dir: &Path) -> String {
    let config = ServerConfig {
        storage_dir: storage_dir.to_path_buf(),
        ..ServerConfig::default()
    };
    let app = create_app(config).expect("router");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });

    format!("http://{}", addr)
}
