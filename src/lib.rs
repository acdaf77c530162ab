#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Visibility Recipe
//!
//! > **A Recipe for Advisory API Surfaces in Rust.**
//!
//! This crate demonstrates how rustdoc-generated documentation distinguishes a
//! library's public surface from its internal symbols. It pairs a documented
//! module with a hidden one and uses the crate-root re-export list as the
//! single place where the official API is declared.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### An Advisory Boundary, Not Access Control
//!
//! Many ecosystems mark internals with a naming convention (a leading
//! underscore) that documentation generators honor and compilers ignore. Rust
//! has real visibility, but the *documentation* boundary is still a separate,
//! advisory idea:
//!
//! - **`pub use` at the crate root**: the re-export list below is the
//!   published API. If a symbol is not re-exported here, callers should treat
//!   it as unsupported, even when it is technically reachable.
//! - **`#[doc(hidden)]`**: the `internal` module stays importable by full
//!   path, but rustdoc omits it from the rendered documentation. Hidden means
//!   undocumented, never inaccessible.
//!
//! This mirrors how real crates evolve: internals remain reachable for tests
//! and gradual migration while the documented surface stays small and stable.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Surface ([`exposed`])
//! The documented unit. Defines [`PublicEntity`] (a named counter with a
//! greeting) and [`sum`]. Everything here appears in the rendered docs and is
//! re-exported at the crate root.
//!
//! ### 2. The Internals (`internal`)
//! The hidden unit. Defines `PrivateEntity` and the `uppercase` helper.
//! Reachable as `visibility_recipe::internal::*`, absent from these pages.
//!
//! ### 3. The Plumbing ([`observability`])
//! Process-level tracing setup for binaries and tests that embed the
//! template. See [`observability::setup_tracing`].
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use visibility_recipe::{sum, PublicEntity};
//!
//! let mut entity = PublicEntity::new("Bob");
//! assert_eq!(entity.greet(), "Hello from Bob!");
//! assert_eq!(entity.increment(), 1);
//! assert_eq!(entity.increment_by(4), 5);
//! assert_eq!(sum(2, 3), 5);
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```
//!
//! ### Rendering the Docs
//!
//! ```bash
//! cargo doc --open
//! ```
//!
//! The `internal` module is missing from the output, while the two re-exports
//! below are front and center.

pub mod exposed;
pub mod observability;

#[doc(hidden)]
pub mod internal;

pub use exposed::{sum, PublicEntity};
