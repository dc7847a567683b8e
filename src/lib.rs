//! Optional – an explicit container for a value that may or may not be present.
//!
//! The crate centers on [`optional::Optional`], a two-state container that is
//! either `Empty` or `Holding` exactly one value it owns. It gives call sites
//! an inspectable representation of "no value" instead of sentinels or
//! implicit defaults:
//! * [`optional::Optional::try_get`] – presence-checked access, absence is an
//!   [`error::AbsentError`].
//! * [`optional::Optional::get_or`] – the held value or a caller-supplied fallback.
//! * [`optional::Optional::must_get`] – access for callers that already know a
//!   value is present; panics otherwise.
//! * [`optional::Optional::map`] and [`optional::Optional::flat_map`] – chain
//!   computations over a possibly absent value without checking presence at
//!   every step.
//!
//! ## Modules
//! * [`optional`] – The container itself.
//! * [`error`] – [`error::AbsentError`] plus the crate level [`error::OptionalError`].
//! * [`shared`] – [`shared::SharedOptional`], an `Arc<Mutex<_>>` handle for
//!   containers that are reached from several threads. The container has no
//!   locking of its own.
//! * [`division`] – [`division::guarded_div`], division that reports an
//!   undefined quotient as absence.
//! * [`settings`] – Layered configuration for the bundled binary.
//!
//! ## Quick Start
//! ```
//! use optional::Optional;
//! let guarded_div = |x: i64| if x == 0 { Optional::empty() } else { Optional::holding(10 / x) };
//! assert_eq!(Optional::holding(5).flat_map(guarded_div), Optional::holding(2));
//! assert!(Optional::holding(0).flat_map(guarded_div).try_get().is_err());
//! assert_eq!(Optional::holding(1).map(|x| x + 1).must_get(), &2);
//! ```

pub mod division;
pub mod error;
pub mod optional;
pub mod settings;
pub mod shared;

pub use error::{AbsentError, OptionalError, Result};
pub use optional::Optional;
pub use shared::SharedOptional;
