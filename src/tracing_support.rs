//! Tracing support for analysis timings.
//!
//! With the `tracing` feature enabled every analysis runs inside an
//! `info_span!`, and [`init_tracing`] installs a subscriber that accumulates
//! the time spent in each span name.  Without the feature the macros used by
//! the rest of the crate expand to no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        collections::BTreeMap,
        sync::{Mutex, Once},
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    static TIMINGS: Mutex<BTreeMap<&'static str, (Duration, usize)>> = Mutex::new(BTreeMap::new());

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    if let Ok(mut totals) = TIMINGS.lock() {
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    }
                }
            }
        }
    }

    /// Installs the global subscriber: span timings plus a stderr log at
    /// `level`.  Only the first call has any effect.
    pub fn init_tracing(level: LevelFilter) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let fmt = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level);
            let _ = Registry::default().with(TimingLayer).with(fmt).try_init();
        });
    }

    /// Returns the accumulated `(span name, total time, span count)` triples,
    /// slowest first.
    pub fn analysis_timings() -> Vec<(&'static str, Duration, usize)> {
        let Ok(totals) = TIMINGS.lock() else {
            return Vec::new();
        };
        let mut entries: Vec<_> = totals
            .iter()
            .map(|(name, (duration, count))| (*name, *duration, *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    pub fn dump_analysis_timings() {
        eprintln!("analysis timings (desc):");
        for (name, duration, count) in analysis_timings() {
            eprintln!("  {name}: {:?} ({}x)", duration, count);
        }
    }

    pub fn reset_analysis_timings() {
        if let Ok(mut totals) = TIMINGS.lock() {
            totals.clear();
        }
    }

    pub use tracing::{debug, info_span};
    pub use tracing_subscriber::filter::LevelFilter;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct LevelFilter(u8);

    impl LevelFilter {
        pub const OFF: Self = LevelFilter(0);
        pub const ERROR: Self = LevelFilter(1);
        pub const WARN: Self = LevelFilter(2);
        pub const INFO: Self = LevelFilter(3);
        pub const DEBUG: Self = LevelFilter(4);
        pub const TRACE: Self = LevelFilter(5);
    }

    pub fn init_tracing(_level: LevelFilter) {
        // No-op when tracing is disabled
    }

    pub fn analysis_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    pub fn dump_analysis_timings() {
        // No-op when tracing is disabled
    }

    pub fn reset_analysis_timings() {
        // No-op when tracing is disabled
    }

    // Provide no-op macro replacements for the tracing macros used in the crate
    #[macro_export]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[macro_export]
    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    pub use crate::{debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_analysis_timings_are_recorded() {
        init_tracing(LevelFilter::OFF);
        reset_analysis_timings();

        let graph = Graph::parse("g\nA -- B\nB -- C\nC -- A\nC -- D");
        let _ = graph.cut_analysis();
        let _ = graph.component_diameters();

        let names: Vec<&str> = analysis_timings()
            .into_iter()
            .map(|(name, _, _)| name)
            .collect();
        assert!(names.contains(&"load"), "{names:?}");
        assert!(names.contains(&"cut_analysis"), "{names:?}");
        assert!(names.contains(&"component_diameters"), "{names:?}");
        assert!(names.contains(&"diameter_of"), "{names:?}");
    }
}
