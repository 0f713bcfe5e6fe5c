//! # incgraph-c
//!
//! Include-dependency analysis for C-like source trees, on top of
//! [`incgraph::Graph`].
//!
//! ## Features
//!
//! - Strip `/* ... */` and `// ...` comments without a full preprocessor
//! - Extract `#include <...>` and `#include "..."` targets
//! - Build one graph node per file base name, plus bare nodes for headers
//!   that are included but not in the tree
//! - Query transitive includes, "who includes this", include chains and
//!   direct includes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use incgraph_c::{Resolver, ScanConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Resolver::scan(Path::new("src"), &ScanConfig::default())?;
//!
//! for header in resolver.resolve_transitive("main.c", false)? {
//!     println!("{header}");
//! }
//!
//! // Every file that ends up pulling in util.h
//! let dependents = resolver.resolve_transitive("util.h", true)?;
//! println!("{} files include util.h", dependents.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builder;
pub mod config;
pub mod error;
pub mod extractor;
pub mod lexer;
pub mod query;
pub mod record;

pub use builder::build_graph;
pub use config::ScanConfig;
pub use error::{ResolveError, Result};
pub use query::Resolver;
pub use record::FileRecord;
