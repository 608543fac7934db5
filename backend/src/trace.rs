// Tracing definitions
//

use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{
    filter,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt},
    EnvFilter, Registry,
};

pub struct TracingSubscriber {
    name: String,
    crate_level: tracing::Level,
    rust_log_fallback: String,
    pretty: bool,
}

impl TracingSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            crate_level: tracing::Level::DEBUG,
            rust_log_fallback: "info".into(),
            pretty: false,
        }
    }

    #[allow(unused)]
    pub fn crate_level(mut self, value: tracing::Level) -> Self {
        self.crate_level = value;
        self
    }

    #[allow(unused)]
    pub fn rust_log_fallback(mut self, value: impl AsRef<str>) -> Self {
        self.rust_log_fallback = value.as_ref().into();
        self
    }

    #[allow(unused)]
    pub fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    pub fn build<Sink>(self, sink: Sink) -> Box<dyn Subscriber + Sync + Send>
    where
        Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        // depends on RUST_LOG env var
        let env_filter = EnvFilter::try_from_default_env()
            // if unset, use rust_log_fallback
            .or_else(|_| EnvFilter::try_new(self.rust_log_fallback))
            .expect("correct RUST_LOG");

        let target_filter = filter::Targets::new()
            .with_target("backend", self.crate_level)
            .with_target("hyper", tracing::Level::INFO)
            .with_target("mio::poll", filter::LevelFilter::OFF)
            .with_target("sled", tracing::Level::WARN)
            .with_default(tracing::Level::TRACE);

        if self.pretty {
            Box::new(
                Registry::default().with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(sink)
                        .with_filter(env_filter)
                        .with_filter(target_filter),
                ),
            )
        } else {
            Box::new(
                Registry::default()
                    .with(env_filter)
                    .with(target_filter)
                    .with(JsonStorageLayer)
                    .with(BunyanFormattingLayer::new(self.name, sink)),
            )
        }
    }
}

pub fn init_global_default(subscriber: impl Subscriber + Sync + Send) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}

#[derive(Clone, Default)]
pub struct RequestIdProducer {
    counter: std::sync::Arc<std::sync::atomic::AtomicU64>,
}

impl tower_http::request_id::MakeRequestId for RequestIdProducer {
    fn make_request_id<B>(
        &mut self,
        _request: &hyper::http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let request_id = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            .to_string()
            .parse()
            .unwrap();

        Some(tower_http::request_id::RequestId::new(request_id))
    }
}

pub fn request_trace_layer() -> tower::ServiceBuilder<
    tower::layer::util::Stack<
        tower_http::request_id::PropagateRequestIdLayer,
        tower::layer::util::Stack<
            tower_http::trace::TraceLayer<
                tower_http::classify::SharedClassifier<
                    tower_http::classify::ServerErrorsAsFailures,
                >,
                impl Fn(&hyper::Request<hyper::Body>) -> tracing::Span + Clone,
            >,
            tower::layer::util::Stack<
                tower_http::request_id::SetRequestIdLayer<RequestIdProducer>,
                tower::layer::util::Identity,
            >,
        >,
    >,
> {
    pub use tower_http::{
        trace::{DefaultOnRequest, DefaultOnResponse},
        LatencyUnit, ServiceBuilderExt,
    };

    tower::ServiceBuilder::new()
        .set_x_request_id(RequestIdProducer::default())
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &hyper::http::Request<hyper::Body>| {
                    tracing::debug_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request.headers().get("x-request-id").unwrap().to_str().unwrap(),
                    )
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Seconds),
                ),
        )
        .propagate_x_request_id()
}
