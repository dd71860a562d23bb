// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Menu Engine - Rust Core Library
//!
//! Deterministic pricing and constraint resolution for establishment menus.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, services)
//!   - `menu`: Menu document, sections, combos, discounts, price list, name index
//!   - `order`: Ephemeral order value object and mix-and-match meal selections
//!   - `pricing`: Price resolver, combo expander, order pricing service
//!   - `limits`: Item limit and per-meal combo cap validation
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `MenuStore` interface
//!   - `use_cases`: `CheckoutUseCase`, `MenuEditorUseCase`
//!   - `dto`: Order summary, receipt and order input shapes
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: JSON file and in-memory menu stores
//!
//! Pricing and validation are pure functions of `(Order, MenuDocument)`: no
//! caches, no counters, no shared mutable state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no I/O.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Store adapters.
pub mod infrastructure;

/// YAML configuration loading.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::limits::{LimitValidator, LimitViolation, validate};
pub use domain::menu::{
    ComboCategory, ComboDefinition, ComboModel, DiscountDefinition, MenuDocument, MenuError,
    PriceList, SectionContent,
};
pub use domain::order::{AssignOutcome, ComboOrder, MealSelection, Order, OrderError};
pub use domain::pricing::{
    ComboExpander, ComboExpansion, OrderPricingService, PriceBreakdown, PriceResolver, expand,
    price, resolve_price,
};
pub use domain::shared::{DomainError, Money, Percent};

// Application re-exports
pub use application::dto::{OrderDto, OrderSummaryDto, ReceiptDto};
pub use application::ports::{MenuStore, StoreError};
pub use application::use_cases::{CheckoutUseCase, EditError, MenuEditorUseCase};

// Infrastructure re-exports
pub use infrastructure::persistence::{InMemoryMenuStore, JsonFileMenuStore, MenuRecord};
