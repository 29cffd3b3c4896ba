use prometheus::{register_counter, register_counter_vec};
use prometheus::{Counter, CounterVec};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUESTIONS_CREATED_CNTR: Counter = register_counter!(
        "trivia_questions_created_total",
        "Number of questions created through the API"
    )
    .unwrap();
    pub static ref QUESTIONS_DELETED_CNTR: Counter = register_counter!(
        "trivia_questions_deleted_total",
        "Number of questions deleted through the API"
    )
    .unwrap();
    pub static ref QUIZ_QUESTIONS_CNTR: CounterVec = register_counter_vec!(
        "trivia_quiz_questions_served_total",
        "Number of quiz questions handed out",
        &["category"]
    )
    .unwrap();
}

const DEFAULT_FILTER: &str = "info,sqlx=warn";

fn env_is(name: &str, expected: &str) -> bool {
    std::env::var(name).is_ok_and(|value| value.eq_ignore_ascii_case(expected))
}

/// `LOG_LEVEL` takes `EnvFilter` directives, `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let span_events = if env_is("INCLUDE_SPAN_EVENTS", "true") {
        FmtSpan::ENTER | FmtSpan::EXIT
    } else {
        FmtSpan::NONE
    };
    let filter_layer =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (json_layer, text_layer) = if env_is("LOG_FORMAT", "json") {
        (Some(fmt::layer().json().with_span_events(span_events)), None)
    } else {
        (None, Some(fmt::layer().with_span_events(span_events)))
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(json_layer)
        .with(text_layer)
        .init();
}
