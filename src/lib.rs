//! # Keiro - Journey Function Configuration Engine
//!
//! **Keiro** models the function editor of a visual journey graph builder: a
//! journey holds graph nodes and edges, a registry of typed properties, and
//! a list of reusable functions (external API or Kafka calls) that read and
//! write those properties. The crate keeps a function's declared
//! input-property contract synchronized with the header and request-body
//! fields that reference the registry, and canonicalizes a draft into the
//! JSON definition an execution backend consumes.
//!
//! ## Core Workflow
//!
//! 1.  **Load or create a journey**: the [`journey::Journey`] record owns the
//!     property list and the committed [`function::FunctionStore`].
//! 2.  **Open a session**: a [`function::DraftSession`] holds one in-progress
//!     draft, created empty or from an existing function.
//! 3.  **Edit**: header and request-body mutations go through the session;
//!     after every structural change the derived input-property and
//!     header-parameter maps are recomputed from the current references.
//! 4.  **Preview and submit**: [`function::canonicalize`] produces the
//!     deterministic canonical JSON at any point; `submit` validates the
//!     draft and commits it to the journey's function store.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut journey = Journey::new("Onboarding", "New user signup flow");
//!     journey
//!         .properties
//!         .push(Property::new("userId", PropertyType::Number));
//!     journey
//!         .properties
//!         .push(Property::new("sessionToken", PropertyType::String));
//!     let registry = journey.registry();
//!
//!     let mut session = DraftSession::start_new();
//!     session.set_name("Create user");
//!     session.set_kind(FunctionType::Api);
//!     session.set_host("https://api.example.com");
//!     session.set_path("/api/v1/users");
//!     session.set_method(Method::Post);
//!
//!     // Bind an outgoing body field to a journey property. The input
//!     // contract follows automatically.
//!     let row = session.add_body_field();
//!     session.set_body_api_field(&registry, &row, "user_id");
//!     session.bind_body_property(&registry, &row, "userId");
//!     assert!(session.draft().input_properties.contains_key("userId"));
//!
//!     // Live preview of the canonical definition.
//!     println!("{}", session.preview(&registry).to_pretty_json()?);
//!
//!     // Commit. The draft resets and the journey now owns the function.
//!     let id = session.submit(&mut journey.functions)?;
//!     assert!(journey.functions.get(&id).is_some());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod function;
pub mod journey;
pub mod prelude;
pub mod property;
