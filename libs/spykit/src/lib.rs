//! Spy toolkit
//!
//! Building blocks for test doubles that are injected instead of patched:
//! - [`CallLog`] - ordered record of the arguments of every call
//! - [`Behavior`] - a configured outcome (fixed value, sync or async implementation)
//! - [`Stub`] - persistent behavior plus a FIFO queue of one-shot behaviors
//! - [`Spy`] - a `CallLog` and a `Stub` in front of a fall-through implementation
//!
//! ## Usage
//!
//! ```
//! use spykit::Spy;
//!
//! # futures::executor::block_on(async {
//! let spy: Spy<i64, i64> = Spy::new();
//! spy.returns_once(2).returns_once(3).returns(7);
//!
//! let real = |a: i64| async move { a * 10 };
//! assert_eq!(spy.invoke(1, real).await, 2);
//! assert_eq!(spy.invoke(1, real).await, 3);
//! assert_eq!(spy.invoke(1, real).await, 7);
//!
//! spy.restore();
//! assert_eq!(spy.invoke(4, real).await, 40);
//! assert_eq!(spy.calls().nth_call(4), Some(4));
//! # });
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod behavior;
mod call_log;
mod spy;
mod stub;

pub use behavior::Behavior;
pub use call_log::CallLog;
pub use spy::Spy;
pub use stub::Stub;
