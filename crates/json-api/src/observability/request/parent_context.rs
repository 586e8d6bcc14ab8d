//! W3C `traceparent` extraction for incoming requests.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// Remote parent carried by `headers`, if the propagator finds a valid one.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    global::get_text_map_propagator(|propagator| {
        // Start from an empty context, not the current span.
        let context = propagator.extract_with_context(&Context::new(), &Headers(headers));

        let valid = context.span().span_context().is_valid();

        valid.then_some(context)
    })
}

/// Read-only header view for the propagator.
struct Headers<'a>(&'a HeaderMap);

impl Extractor for Headers<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use opentelemetry::trace::TraceId;
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use salvo::http::HeaderValue;
    use testresult::TestResult;

    use super::*;

    const TRACEPARENT: &str = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";

    #[test]
    fn valid_traceparent_becomes_remote_parent() -> TestResult {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let mut headers = HeaderMap::new();
        headers.insert("traceparent", HeaderValue::from_static(TRACEPARENT));

        let context = extract_parent_context(&headers).ok_or("no parent extracted")?;

        assert_eq!(
            context.span().span_context().trace_id(),
            TraceId::from_hex("4bf92f3577b34da6a3ce929d0e0e4736")?
        );
        assert!(context.span().span_context().is_remote());

        Ok(())
    }

    #[test]
    fn missing_or_garbled_traceparent_is_ignored() {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let mut headers = HeaderMap::new();

        assert!(extract_parent_context(&headers).is_none());

        headers.insert("traceparent", HeaderValue::from_static("not-a-trace"));

        assert!(extract_parent_context(&headers).is_none());
    }

    #[test]
    fn extractor_lists_and_reads_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("tracestate", HeaderValue::from_static("booknest=1"));

        let view = Headers(&headers);

        assert_eq!(view.get("tracestate"), Some("booknest=1"));
        assert_eq!(view.get("traceparent"), None);
        assert_eq!(view.keys(), vec!["tracestate"]);
    }
}
