//! Lifecycle notifications emitted by buffers.
//!
//! A [`LifecycleEvent`] marks one transition of one buffer: its
//! construction or its release. The `Display` form of each event is the
//! exact console line the demonstration programs print, so an ordered list
//! of events doubles as the expected transcript.

use std::fmt;

use crate::id::InstanceId;

/// Which layer of a buffer emitted an event.
///
/// An extended buffer wraps an owning buffer, so releasing one produces an
/// `Extended` event followed by an `Owning` event for the same instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// The base owning buffer that holds the element storage.
    Owning,
    /// The derived buffer layered over an owning buffer.
    Extended,
}

impl BufferKind {
    /// Human-readable type name used in console output.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Owning => "Array",
            Self::Extended => "SpecialArray",
        }
    }
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// The lifecycle transition an event reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The layer finished construction.
    Constructed {
        /// Number of elements owned by the buffer.
        len: usize,
    },
    /// The layer ran its release logic.
    Released,
}

/// One observable lifecycle transition of one buffer layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LifecycleEvent {
    instance: InstanceId,
    kind: BufferKind,
    phase: Phase,
}

impl LifecycleEvent {
    /// A construction event for `kind` owning `len` elements.
    pub fn constructed(instance: InstanceId, kind: BufferKind, len: usize) -> Self {
        Self {
            instance,
            kind,
            phase: Phase::Constructed { len },
        }
    }

    /// A release event for `kind`.
    pub fn released(instance: InstanceId, kind: BufferKind) -> Self {
        Self {
            instance,
            kind,
            phase: Phase::Released,
        }
    }

    /// The buffer this event belongs to.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// The layer that emitted the event.
    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    /// The transition reported.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether this event reports a release.
    pub fn is_release(&self) -> bool {
        self.phase == Phase::Released
    }

    /// Whether this event reports the release of the element storage.
    ///
    /// Only the owning layer frees storage; an extended layer's release
    /// event precedes it.
    pub fn is_storage_release(&self) -> bool {
        self.is_release() && self.kind == BufferKind::Owning
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.phase) {
            (BufferKind::Owning, Phase::Constructed { len }) => {
                write!(f, "Constructed {} of size {len}", self.kind)
            }
            (BufferKind::Extended, Phase::Constructed { .. }) => {
                write!(f, "{} constructor called", self.kind)
            }
            (BufferKind::Owning, Phase::Released) => write!(f, "{} destroyed", self.kind),
            (BufferKind::Extended, Phase::Released) => {
                write!(f, "{} destructor called", self.kind)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owning_lines_match_console_format() {
        let id = InstanceId::next();
        let built = LifecycleEvent::constructed(id, BufferKind::Owning, 15);
        let gone = LifecycleEvent::released(id, BufferKind::Owning);
        assert_eq!(built.to_string(), "Constructed Array of size 15");
        assert_eq!(gone.to_string(), "Array destroyed");
    }

    #[test]
    fn extended_lines_match_console_format() {
        let id = InstanceId::next();
        let built = LifecycleEvent::constructed(id, BufferKind::Extended, 5);
        let gone = LifecycleEvent::released(id, BufferKind::Extended);
        assert_eq!(built.to_string(), "SpecialArray constructor called");
        assert_eq!(gone.to_string(), "SpecialArray destructor called");
    }

    #[test]
    fn only_owning_release_frees_storage() {
        let id = InstanceId::next();
        assert!(LifecycleEvent::released(id, BufferKind::Owning).is_storage_release());
        assert!(!LifecycleEvent::released(id, BufferKind::Extended).is_storage_release());
        assert!(!LifecycleEvent::constructed(id, BufferKind::Owning, 0).is_storage_release());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn constructed_line_reports_len(len in 0usize..1_000_000) {
                let id = InstanceId::next();
                let line = LifecycleEvent::constructed(id, BufferKind::Owning, len).to_string();
                prop_assert_eq!(line, format!("Constructed Array of size {len}"));
            }
        }
    }
}
