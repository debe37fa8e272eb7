//! Thread-local call context consulted by the serde adapters.
//!
//! The mapper enters a context for the duration of each encode/decode call
//! and restores the previous one on exit, so adapters see the configuration
//! of the mapper actually performing the call even when calls nest.

use std::cell::Cell;

use chrono::{FixedOffset, Offset, Utc};

#[derive(Clone, Copy)]
pub(crate) struct CallContext {
    pub(crate) enum_display: bool,
    pub(crate) timezone: FixedOffset,
}

thread_local! {
    static CURRENT: Cell<Option<CallContext>> = Cell::new(None);
}

/// Make `context` current until the returned guard is dropped.
pub(crate) fn enter(context: CallContext) -> ContextGuard {
    let previous = CURRENT.with(|cell| cell.replace(Some(context)));
    ContextGuard { previous }
}

/// Whether the calling mapper asked for enum display strings.
/// False outside a mapper call.
pub(crate) fn enum_display_enabled() -> bool {
    CURRENT.with(|cell| cell.get().is_some_and(|context| context.enum_display))
}

/// The calling mapper's timezone offset. UTC outside a mapper call.
pub(crate) fn timezone() -> FixedOffset {
    CURRENT.with(|cell| cell.get().map_or_else(|| Utc.fix(), |context| context.timezone))
}

pub(crate) struct ContextGuard {
    previous: Option<CallContext>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT.with(|cell| cell.set(previous));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_outside_a_call() {
        assert!(!enum_display_enabled());
        assert_eq!(timezone(), Utc.fix());
    }

    #[test]
    fn guard_restores_previous_context() {
        let outer = enter(CallContext {
            enum_display: false,
            timezone: FixedOffset::east_opt(3600).unwrap(),
        });
        {
            let _inner = enter(CallContext {
                enum_display: true,
                timezone: Utc.fix(),
            });
            assert!(enum_display_enabled());
            assert_eq!(timezone(), Utc.fix());
        }
        assert!(!enum_display_enabled());
        assert_eq!(timezone(), FixedOffset::east_opt(3600).unwrap());
        drop(outer);
        assert_eq!(timezone(), Utc.fix());
    }
}
