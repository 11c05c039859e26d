//! # nusa - Balinese/English Translation Demo
//!
//! `nusa` puts a small web form (and a terminal prompt) in front of an
//! OpenAI-compatible `v1/completions` endpoint serving a fine-tuned
//! translation model. Each submission becomes one fixed-template prompt and
//! one greedy-decoded completion request.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the form on http://127.0.0.1:7860
//! nusa --endpoint https://my-tunnel.loca.lt serve
//!
//! # One-shot translation
//! nusa translate -d ban-en "Rahajeng semeng"
//!
//! # Interactive prompt
//! nusa translate
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/nusa/config.toml`:
//!
//! ```toml
//! [endpoint]
//! base_url = "http://localhost:8000"
//! model = "nusa-7b-ban"
//! timeout_secs = 30
//!
//! [server]
//! listen = "127.0.0.1:7860"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and resolution.
pub mod config;

/// Input reading from stdin.
pub mod input;

/// Tracing subscriber setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client for the completion endpoint.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;

/// Web form and JSON API.
pub mod web;
